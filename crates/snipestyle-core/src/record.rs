//! The shopping-listing record returned by the search API.
//!
//! Only a handful of keys are consumed; everything else the API sends is
//! kept in [`ResultRecord::extra`] so a record re-serializes to the same
//! object it was parsed from.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::price::PRICE_UNAVAILABLE;

/// One shopping listing from a search response.
///
/// Records are never mutated after decoding. Filtering decides inclusion
/// only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    /// Free-form display price, e.g. `"$49.99"` or `"From $12"`.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_link: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub serpapi_product_api: Option<String>,
    /// Merchant name, e.g. `"Nordstrom"`.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResultRecord {
    /// Returns the first non-empty of `link`, `product_link` and
    /// `serpapi_product_api`.
    #[must_use]
    pub fn resolved_link(&self) -> Option<&str> {
        [&self.link, &self.product_link, &self.serpapi_product_api]
            .into_iter()
            .filter_map(Option::as_deref)
            .find(|s| !s.is_empty())
    }

    /// Returns the link a buyer can follow, ignoring the `"#"` placeholder.
    #[must_use]
    pub fn purchase_link(&self) -> Option<&str> {
        self.resolved_link().filter(|link| *link != "#")
    }

    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("No title")
    }

    #[must_use]
    pub fn display_price(&self) -> &str {
        self.price.as_deref().unwrap_or(PRICE_UNAVAILABLE)
    }

    #[must_use]
    pub fn display_source(&self) -> &str {
        self.source.as_deref().unwrap_or("")
    }
}

/// Accepts a string or number; any other JSON shape decodes as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> ResultRecord {
        serde_json::from_value(value).expect("record should decode")
    }

    #[test]
    fn decodes_consumed_fields() {
        let r = record(json!({
            "title": "Leather Jacket",
            "price": "$149.00",
            "thumbnail": "https://img.example/1.jpg",
            "link": "https://shop.example/jacket",
            "source": "Example Shop"
        }));
        assert_eq!(r.display_title(), "Leather Jacket");
        assert_eq!(r.display_price(), "$149.00");
        assert_eq!(r.thumbnail.as_deref(), Some("https://img.example/1.jpg"));
        assert_eq!(r.display_source(), "Example Shop");
    }

    #[test]
    fn unknown_keys_survive_round_trip() {
        let original = json!({
            "title": "Sneakers",
            "position": 3,
            "extracted_price": 59.99,
            "rating": 4.5
        });
        let r = record(original.clone());
        assert_eq!(r.extra.get("position"), Some(&json!(3)));
        assert_eq!(serde_json::to_value(&r).unwrap(), original);
    }

    #[test]
    fn numeric_price_is_stringified() {
        let r = record(json!({ "price": 49 }));
        assert_eq!(r.price.as_deref(), Some("49"));
    }

    #[test]
    fn non_scalar_field_decodes_as_absent() {
        let r = record(json!({ "title": ["a", "b"], "price": null }));
        assert!(r.title.is_none());
        assert!(r.price.is_none());
        assert_eq!(r.display_title(), "No title");
        assert_eq!(r.display_price(), "Price not available");
    }

    #[test]
    fn resolved_link_prefers_link() {
        let r = record(json!({
            "link": "https://a.example",
            "product_link": "https://b.example",
            "serpapi_product_api": "https://c.example"
        }));
        assert_eq!(r.resolved_link(), Some("https://a.example"));
    }

    #[test]
    fn resolved_link_skips_empty_and_missing() {
        let r = record(json!({
            "link": "",
            "serpapi_product_api": "https://c.example"
        }));
        assert_eq!(r.resolved_link(), Some("https://c.example"));
    }

    #[test]
    fn resolved_link_none_when_absent() {
        let r = record(json!({ "title": "No links" }));
        assert!(r.resolved_link().is_none());
        assert!(r.purchase_link().is_none());
    }

    #[test]
    fn purchase_link_ignores_placeholder() {
        let r = record(json!({ "link": "#", "product_link": "https://b.example" }));
        assert_eq!(r.resolved_link(), Some("#"));
        assert!(r.purchase_link().is_none());
    }
}
