// Issues feed response types.
// Defines structs for deserializing the issues endpoint payload.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level payload returned by the issues endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssuesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues: Vec<Issue>,
}

/// One publication cycle of the magazine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Free-form range such as "July–September 2025".
    #[serde(default, deserialize_with = "null_as_default")]
    pub period: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub article_count: u64,
    /// Fields the feed carries that this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Issue {
    /// Create an issue with no extra fields.
    pub fn new(title: impl Into<String>, period: impl Into<String>, article_count: u64) -> Self {
        Self {
            title: title.into(),
            period: period.into(),
            article_count,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_feed() {
        let json = r#"{
            "success": true,
            "issues": [
                {
                    "title": "Issue 3",
                    "period": "July–September 2025",
                    "articleCount": 4,
                    "coverUrl": "https://example.org/cover.png",
                    "articles": [{ "name": "Intro" }]
                }
            ]
        }"#;

        let response: IssuesResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert!(response.error.is_none());
        assert_eq!(response.issues.len(), 1);

        let issue = &response.issues[0];
        assert_eq!(issue.title, "Issue 3");
        assert_eq!(issue.period, "July–September 2025");
        assert_eq!(issue.article_count, 4);
        assert_eq!(
            issue.extra.get("coverUrl").and_then(Value::as_str),
            Some("https://example.org/cover.png")
        );
        assert!(issue.extra.contains_key("articles"));
    }

    #[test]
    fn test_missing_fields_default() {
        let response: IssuesResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.success);
        assert!(response.issues.is_empty());

        let issue: Issue = serde_json::from_str(r#"{ "title": "Bare" }"#).unwrap();
        assert_eq!(issue.period, "");
        assert_eq!(issue.article_count, 0);
    }

    #[test]
    fn test_null_fields_default() {
        let response: IssuesResponse =
            serde_json::from_str(r#"{"success":true,"issues":null}"#).unwrap();
        assert!(response.success);
        assert!(response.issues.is_empty());

        let response: IssuesResponse = serde_json::from_str(
            r#"{"success":true,"issues":[{"title":"Issue 9","period":null,"articleCount":null}]}"#,
        )
        .unwrap();
        assert_eq!(response.issues[0].title, "Issue 9");
        assert_eq!(response.issues[0].period, "");
        assert_eq!(response.issues[0].article_count, 0);
    }

    #[test]
    fn test_null_success_is_falsy() {
        let response: IssuesResponse =
            serde_json::from_str(r#"{"success":null,"issues":[]}"#).unwrap();
        assert!(!response.success);
    }

    #[test]
    fn test_failure_payload() {
        let response: IssuesResponse =
            serde_json::from_str(r#"{ "success": false, "error": "Sheet not found" }"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Sheet not found"));
    }
}
