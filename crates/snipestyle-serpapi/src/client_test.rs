use super::*;

fn test_client(base_url: &str) -> SerpApiClient {
    SerpApiClient::with_base_url("test-key", base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_constructs_correct_query_string() {
    let client = test_client("https://serpapi.com/search.json");
    let url = client.build_url("sneakers");
    assert_eq!(
        url.as_str(),
        "https://serpapi.com/search.json?engine=google_shopping&q=sneakers&api_key=test-key"
    );
}

#[test]
fn build_url_encodes_special_characters() {
    let client = test_client("https://serpapi.com/search.json");
    let url = client.build_url("tote & clutch");
    assert!(
        url.as_str().contains("q=tote+%26+clutch") || url.as_str().contains("q=tote%20%26%20clutch"),
        "query param should be percent-encoded: {url}"
    );
}

#[test]
fn build_url_is_fresh_per_query() {
    let client = test_client("https://serpapi.com/search.json");
    let _ = client.build_url("first");
    let url = client.build_url("second");
    assert!(!url.as_str().contains("first"));
}

#[test]
fn invalid_base_url_rejected() {
    let result = SerpApiClient::with_base_url("test-key", "not a url");
    assert!(
        matches!(result, Err(SerpApiError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn error_message_reads_error_field() {
    assert_eq!(
        SerpApiClient::error_message(r#"{"error": "Invalid API key."}"#).as_deref(),
        Some("Invalid API key.")
    );
    assert!(SerpApiClient::error_message("<html>bad gateway</html>").is_none());
    assert!(SerpApiClient::error_message(r#"{"status": "fail"}"#).is_none());
}
