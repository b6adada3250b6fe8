//! Request and response bodies exchanged with the search backend

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /index`
#[derive(Debug, Serialize)]
pub struct IndexRequest<'a> {
    pub url: &'a str,
}

/// Body of `POST /search`
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

/// One ranked hit returned by the backend.
///
/// Every field tolerates being absent or `null`; the backend owns the shape
/// and the front end shows whatever it gets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub section: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html: String,
    /// Similarity on a 0-100 scale. Not clamped.
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,
}

/// Consumed part of a `/search` answer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<SearchResult>,
}

impl SearchResponse {
    /// Pull the result list out of a raw backend answer.
    ///
    /// A missing or `null` `results` key yields an empty list.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// What the backend reports after indexing a site.
///
/// Display only; the `/index` answer is otherwise not introspected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexReceipt {
    pub message: Option<String>,
    pub chunks_indexed: Option<u64>,
}

impl IndexReceipt {
    pub fn from_value(value: &Value) -> Self {
        Self {
            message: value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            chunks_indexed: value.get("chunks_indexed").and_then(Value::as_u64),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_response_with_results() {
        let value = json!({
            "query": "hello",
            "results": [{
                "section": "Intro",
                "content": "Hello",
                "path": "/",
                "html": "<p>Hello</p>",
                "score": 92.3
            }]
        });

        let response = SearchResponse::from_value(value).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].section, "Intro");
        assert_eq!(response.results[0].html, "<p>Hello</p>");
        assert!((response.results[0].score - 92.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_results_is_empty() {
        let response = SearchResponse::from_value(json!({})).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_null_results_is_empty() {
        let response = SearchResponse::from_value(json!({ "results": null })).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_partial_result_fields() {
        let response =
            SearchResponse::from_value(json!({ "results": [{ "content": "only text", "section": null }] }))
                .unwrap();
        let result = &response.results[0];
        assert_eq!(result.content, "only text");
        assert_eq!(result.section, "");
        assert_eq!(result.path, "");
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_results_of_wrong_type_is_rejected() {
        assert!(SearchResponse::from_value(json!({ "results": "nope" })).is_err());
    }

    #[test]
    fn test_index_receipt() {
        let receipt = IndexReceipt::from_value(&json!({
            "message": "Indexing completed.",
            "chunks_indexed": 42
        }));
        assert_eq!(receipt.message.as_deref(), Some("Indexing completed."));
        assert_eq!(receipt.chunks_indexed, Some(42));

        assert_eq!(IndexReceipt::from_value(&json!("ok")), IndexReceipt::default());
    }

    #[test]
    fn test_request_bodies() {
        let body = serde_json::to_value(IndexRequest { url: "https://example.com" }).unwrap();
        assert_eq!(body, json!({ "url": "https://example.com" }));

        let body = serde_json::to_value(SearchRequest { query: "pricing" }).unwrap();
        assert_eq!(body, json!({ "query": "pricing" }));
    }
}
