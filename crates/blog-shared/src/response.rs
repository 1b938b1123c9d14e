//! Error bodies some stores attach to failure responses.

use serde::{Deserialize, Serialize};

/// RFC 7807 Problem Details, as returned by stores that go beyond json-server.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub status: Option<u16>,

    #[serde(default)]
    pub detail: Option<String>,

    /// Plain `{"error": "..."}` bodies.
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Most specific human-readable message in the body, if any.
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .or(self.error.as_deref())
            .or(self.title.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_wins_over_title() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"type":"about:blank","title":"Bad Request","status":400,"detail":"title is required"}"#,
        )
        .unwrap();
        assert_eq!(body.message(), Some("title is required"));
    }

    #[test]
    fn plain_error_field_is_used() {
        let body: ErrorResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(body.message(), Some("boom"));
    }
}
