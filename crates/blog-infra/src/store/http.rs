//! HTTP client for the json-server `/blogs` collection.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, Response, StatusCode};

use blog_core::domain::{Post, PostDraft, PostId};
use blog_core::error::BlogError;
use blog_core::ports::BlogStore;
use blog_shared::{BlogPostDto, ErrorResponse, NewBlogPostDto, PostIdDto};

const COLLECTION_PATH: &str = "blogs";

/// Connection settings for the collection endpoint.
#[derive(Debug, Clone)]
pub struct HttpStoreConfig {
    /// Store base URL (e.g., http://localhost:3001)
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl HttpStoreConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("BLOG_API_URL")
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
            timeout: std::env::var("BLOG_API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs),
        }
    }
}

/// `BlogStore` backed by a REST collection endpoint.
pub struct HttpBlogStore {
    client: Client,
    collection_url: String,
}

impl HttpBlogStore {
    pub fn new(config: HttpStoreConfig) -> Result<Self, BlogError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BlogError::Network(format!("failed to build HTTP client: {e}")))?;

        let collection_url = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            COLLECTION_PATH
        );
        tracing::info!(url = %collection_url, "Using blog collection endpoint");

        Ok(Self {
            client,
            collection_url,
        })
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }
}

#[async_trait]
impl BlogStore for HttpBlogStore {
    async fn list(&self) -> Result<Vec<Post>, BlogError> {
        let response = self
            .client
            .get(&self.collection_url)
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_success(response).await?;

        let dtos: Vec<BlogPostDto> = response
            .json()
            .await
            .map_err(|e| BlogError::Decode(e.to_string()))?;

        dtos.into_iter().map(post_from_dto).collect()
    }

    async fn create(&self, draft: &PostDraft) -> Result<Post, BlogError> {
        let response = self
            .client
            .post(&self.collection_url)
            .json(&dto_from_draft(draft))
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_success(response).await?;

        let dto: BlogPostDto = response
            .json()
            .await
            .map_err(|e| BlogError::Decode(e.to_string()))?;

        post_from_dto(dto)
    }
}

fn transport_error(err: reqwest::Error) -> BlogError {
    tracing::debug!(error = %err, "Request did not reach the blog store");
    BlogError::Network(err.to_string())
}

/// Map non-2xx responses onto the error taxonomy.
async fn ensure_success(response: Response) -> Result<Response, BlogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(|problem| problem.message().map(str::to_string))
        .or_else(|| Some(body.trim().to_string()).filter(|text| !text.is_empty()))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());

    tracing::warn!(status = status.as_u16(), message = %message, "Blog store returned an error");

    Err(match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => BlogError::Validation(message),
        _ => BlogError::Server {
            status: status.as_u16(),
            message,
        },
    })
}

fn post_from_dto(dto: BlogPostDto) -> Result<Post, BlogError> {
    let published_at = DateTime::parse_from_rfc3339(&dto.date)
        .map_err(|e| {
            BlogError::Decode(format!("post {}: invalid date {:?}: {e}", dto.id, dto.date))
        })?
        .with_timezone(&Utc);

    let id = match dto.id {
        PostIdDto::Number(n) => PostId::from(n),
        PostIdDto::Text(s) => PostId::new(s),
    };

    Ok(Post {
        id,
        title: dto.title,
        categories: dto.category,
        description: dto.description,
        published_at,
        cover_image: dto.cover_image,
        content: dto.content,
        read_time: dto.read_time,
    })
}

fn dto_from_draft(draft: &PostDraft) -> NewBlogPostDto {
    NewBlogPostDto {
        title: draft.title.clone(),
        category: draft.categories.clone(),
        description: draft.description.clone(),
        date: draft
            .published_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        cover_image: draft.cover_image.clone(),
        content: draft.content.clone(),
        read_time: draft.read_time.clone(),
    }
}
