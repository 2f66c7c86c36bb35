//! SerpAPI response types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use snipestyle_core::ResultRecord;

/// Body of a `search.json` response for the shopping engine.
///
/// Only the listing array is modelled; metadata blocks such as
/// `search_metadata` and `filters` are ignored.
#[derive(Debug, Deserialize)]
pub struct ShoppingResponse {
    #[serde(default, deserialize_with = "lenient_results")]
    pub shopping_results: Vec<ResultRecord>,
    /// Informational message SerpAPI sets on 2xx responses with no results,
    /// e.g. `"Google hasn't returned any results for this query."`.
    #[serde(default)]
    pub error: Option<String>,
}

/// Decodes `shopping_results`, treating `null` or a non-array as empty and
/// skipping entries that are not objects.
fn lenient_results<'de, D>(deserializer: D) -> Result<Vec<ResultRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(Value::Array(items)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    let total = items.len();
    let records: Vec<ResultRecord> = items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    if records.len() < total {
        tracing::debug!(skipped = total - records.len(), "skipped malformed shopping results");
    }
    Ok(records)
}

/// The result of fetching one query. Never represents a hard failure:
/// a failed fetch carries an empty record list and the error text.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
    pub query: String,
    pub records: Vec<ResultRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryOutcome {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}
