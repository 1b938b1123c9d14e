//! Data Transfer Objects - request/response bodies of `/blogs`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Post id as the store sends it: a number in json-server 0.x, a short
/// string in 1.x.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostIdDto {
    Number(u64),
    Text(String),
}

impl fmt::Display for PostIdDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostIdDto::Number(n) => write!(f, "{n}"),
            PostIdDto::Text(s) => f.write_str(s),
        }
    }
}

/// One element of `GET /blogs`, and the body returned by `POST /blogs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDto {
    pub id: PostIdDto,
    pub title: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// ISO-8601 date-time.
    pub date: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
}

/// Body of `POST /blogs`: a post without its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPostDto {
    pub title: String,
    pub category: Vec<String>,
    pub description: String,
    pub date: String,
    pub cover_image: String,
    pub content: String,
    pub read_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_and_string_ids() {
        let numeric: BlogPostDto = serde_json::from_str(
            r#"{"id":1,"title":"A","category":["Tech"],"description":"d",
                "date":"2026-01-10T09:00:00.000Z","coverImage":"c","content":"x"}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, PostIdDto::Number(1));
        assert_eq!(numeric.read_time, None);

        let text: BlogPostDto = serde_json::from_str(
            r#"{"id":"a1f3","title":"B","category":[],"description":"d",
                "date":"2026-01-10T09:00:00.000Z","coverImage":"c","content":"x",
                "readTime":"6 Mins"}"#,
        )
        .unwrap();
        assert_eq!(text.id.to_string(), "a1f3");
        assert_eq!(text.read_time.as_deref(), Some("6 Mins"));
    }

    #[test]
    fn new_post_serializes_camel_case_without_id() {
        let body = serde_json::to_value(NewBlogPostDto {
            title: "T".into(),
            category: vec!["Tech".into()],
            description: "D".into(),
            date: "2026-01-10T09:00:00.000Z".into(),
            cover_image: "https://img".into(),
            content: "<p>x</p>".into(),
            read_time: "5 Mins".into(),
        })
        .unwrap();

        assert_eq!(body["coverImage"], "https://img");
        assert_eq!(body["readTime"], "5 Mins");
        assert!(body.get("id").is_none());
    }
}
