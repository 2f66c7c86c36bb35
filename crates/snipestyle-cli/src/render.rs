//! Rendering surfaces for search results: plain-text cards on a terminal,
//! or a single JSON document.

use std::io::Write;

use serde::Serialize;
use snipestyle_core::{PriceRange, PriceStats, ResultRecord, SearchForm};
use snipestyle_serpapi::QueryOutcome;

use crate::search::{QueryView, MAX_CARDS};

/// Receives structured results from the runner and displays them.
pub(crate) trait Surface {
    /// Called instead of `begin` when the form holds no query terms.
    fn no_queries(&mut self) -> anyhow::Result<()>;

    fn begin(&mut self, form: &SearchForm) -> anyhow::Result<()>;

    fn query(
        &mut self,
        form: &SearchForm,
        outcome: &QueryOutcome,
        view: &QueryView<'_>,
    ) -> anyhow::Result<()>;

    fn finish(&mut self) -> anyhow::Result<()>;
}

pub(crate) struct TerminalSurface<W> {
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn card(&mut self, index: usize, record: &ResultRecord) -> std::io::Result<()> {
        writeln!(self.out, "  [{index}] {}", record.display_title())?;
        writeln!(self.out, "      Price: {}", record.display_price())?;
        match record.thumbnail.as_deref().filter(|t| !t.is_empty()) {
            Some(img) => writeln!(self.out, "      Image: {img}")?,
            None => writeln!(self.out, "      Image: No image available")?,
        }
        match record.purchase_link() {
            Some(link) => writeln!(self.out, "      Buy at {}: {link}", record.display_source())?,
            None => writeln!(self.out, "      Search manually")?,
        }
        Ok(())
    }

    fn price_summary(&mut self, stats: &PriceStats) -> std::io::Result<()> {
        writeln!(
            self.out,
            "  Price Range Summary  Min: ${:.2}  Avg: ${:.2}  Max: ${:.2}",
            stats.min, stats.mean, stats.max
        )
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn no_queries(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "Please enter at least one search term!")?;
        Ok(())
    }

    fn begin(&mut self, form: &SearchForm) -> anyhow::Result<()> {
        if form.price_range().is_active() {
            let (min, max) = form.bounds();
            writeln!(self.out, "Active Price Filter: ${min:.0} - ${max:.0}")?;
        }
        writeln!(self.out, "Your Fashion Finds")?;
        Ok(())
    }

    fn query(
        &mut self,
        form: &SearchForm,
        outcome: &QueryOutcome,
        view: &QueryView<'_>,
    ) -> anyhow::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Results for: \"{}\"", outcome.query)?;

        if let Some(err) = &outcome.error {
            writeln!(self.out, "  error: {err}")?;
        }

        match view {
            QueryView::NoResults => {
                writeln!(self.out, "  No results found for this search")?;
                writeln!(self.out, "  Try different keywords or check your spelling")?;
            }
            QueryView::NoneInRange => {
                let (min, max) = form.bounds();
                writeln!(self.out, "  No items found in price range ${min:.0} - ${max:.0}")?;
                writeln!(self.out, "  Try adjusting your price filter or search terms")?;
            }
            QueryView::Results {
                matched,
                fetched,
                stats,
            } => {
                if matched.len() != *fetched {
                    writeln!(
                        self.out,
                        "  Showing {} of {fetched} items in your price range",
                        matched.len()
                    )?;
                }
                if let Some(stats) = stats {
                    self.price_summary(stats)?;
                }
                for (i, record) in matched.iter().take(MAX_CARDS).enumerate() {
                    self.card(i + 1, record)?;
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct QueryReport<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    fetched: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_stats: Option<PriceStats>,
    results: Vec<&'a ResultRecord>,
}

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    price_range: PriceRange,
    queries: &'a [serde_json::Value],
}

/// Buffers one report per query and writes a single JSON document on finish.
pub(crate) struct JsonSurface<W> {
    out: W,
    price_range: PriceRange,
    queries: Vec<serde_json::Value>,
}

impl<W: Write> JsonSurface<W> {
    pub(crate) fn new(out: W) -> Self {
        Self {
            out,
            price_range: PriceRange::unbounded(),
            queries: Vec::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for JsonSurface<W> {
    fn no_queries(&mut self) -> anyhow::Result<()> {
        tracing::warn!("no search terms given");
        self.finish()
    }

    fn begin(&mut self, form: &SearchForm) -> anyhow::Result<()> {
        self.price_range = form.price_range();
        Ok(())
    }

    fn query(
        &mut self,
        _form: &SearchForm,
        outcome: &QueryOutcome,
        view: &QueryView<'_>,
    ) -> anyhow::Result<()> {
        let (results, price_stats) = match view {
            QueryView::Results { matched, stats, .. } => (matched.clone(), *stats),
            QueryView::NoResults | QueryView::NoneInRange => (Vec::new(), None),
        };
        let report = QueryReport {
            query: &outcome.query,
            error: outcome.error.as_deref(),
            fetched: outcome.records.len(),
            price_stats,
            results,
        };
        self.queries.push(serde_json::to_value(&report)?);
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        let report = SearchReport {
            price_range: self.price_range,
            queries: &self.queries,
        };
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
