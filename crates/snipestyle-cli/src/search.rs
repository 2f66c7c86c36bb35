//! Search runner for the `search` command.
//!
//! Queries run one at a time in entry order. A failed fetch is reported
//! through the surface and the run moves on to the next query.

use snipestyle_core::{PriceRange, PriceStats, ResultRecord, SearchForm};
use snipestyle_serpapi::{QueryOutcome, SerpApiClient};

use crate::render::Surface;

/// Maximum number of listing cards drawn per query.
pub(crate) const MAX_CARDS: usize = 6;

/// What the surface should show for one fetched query.
#[derive(Debug)]
pub(crate) enum QueryView<'a> {
    /// The fetch returned nothing (or failed).
    NoResults,
    /// Records were fetched but none survived the price filter.
    NoneInRange,
    Results {
        matched: Vec<&'a ResultRecord>,
        fetched: usize,
        stats: Option<PriceStats>,
    },
}

impl<'a> QueryView<'a> {
    /// Classifies a fetch outcome against the active price range.
    pub(crate) fn build(outcome: &'a QueryOutcome, range: &PriceRange) -> Self {
        if outcome.records.is_empty() {
            return QueryView::NoResults;
        }

        let matched = range.filter(&outcome.records);
        if matched.is_empty() {
            return QueryView::NoneInRange;
        }

        let stats = if matched.len() > 1 {
            PriceStats::from_records(matched.iter().copied())
        } else {
            None
        };

        QueryView::Results {
            matched,
            fetched: outcome.records.len(),
            stats,
        }
    }
}

/// Totals for a finished run, used for the closing log line.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub queries: usize,
    pub failed: usize,
    pub matched: usize,
}

/// Runs every query in `form` against `client` and renders each result.
///
/// # Errors
///
/// Returns an error only if the surface cannot be written to. Fetch
/// failures are rendered, not propagated.
pub(crate) async fn run_search<S: Surface>(
    client: &SerpApiClient,
    form: &SearchForm,
    surface: &mut S,
) -> anyhow::Result<RunSummary> {
    let mut summary = RunSummary::default();

    if form.queries().is_empty() {
        surface.no_queries()?;
        return Ok(summary);
    }

    let range = form.price_range();
    surface.begin(form)?;

    for query in form.queries() {
        let outcome = client.fetch_query(query).await;
        let view = QueryView::build(&outcome, &range);

        summary.queries += 1;
        if outcome.is_failure() {
            summary.failed += 1;
        }
        if let QueryView::Results { matched, .. } = &view {
            summary.matched += matched.len();
        }

        surface.query(form, &outcome, &view)?;
    }

    surface.finish()?;

    tracing::info!(
        queries = summary.queries,
        failed = summary.failed,
        matched = summary.matched,
        "search run complete"
    );

    Ok(summary)
}
