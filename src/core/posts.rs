use crate::core::{HttpClient, Post, PostsSummary};
use crate::utils::error::{KitError, Result};

pub const JSONPLACEHOLDER_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Fetches the posts of one user and condenses them into a [`PostsSummary`].
///
/// One GET, no retries. The base URL defaults to the public JSONPlaceholder
/// API.
pub struct UserPostsFetcher<C: HttpClient> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> UserPostsFetcher<C> {
    pub fn new(client: C) -> Self {
        Self::with_base_url(client, JSONPLACEHOLDER_BASE_URL)
    }

    pub fn with_base_url(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn posts_url(&self, user_id: i64) -> String {
        format!("{}/posts?userId={}", self.base_url, user_id)
    }

    pub async fn fetch(&self, user_id: i64) -> Result<PostsSummary> {
        if user_id <= 0 {
            return Err(KitError::InvalidUserId { user_id });
        }

        let url = self.posts_url(user_id);
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).await?;

        tracing::debug!("API response status: {}", response.status);
        if !response.is_success() {
            return Err(KitError::ConnectionFailure {
                status: response.status,
            });
        }

        let posts: Vec<Post> = response.json()?;
        tracing::debug!("Decoded {} posts for user {}: {:?}", posts.len(), user_id, posts);
        if posts.is_empty() {
            tracing::warn!("User {} has no posts", user_id);
        }

        Ok(PostsSummary::from_posts(user_id, posts))
    }
}

/// [`UserPostsFetcher::fetch`] against the default base URL.
pub async fn fetch_user_posts<C: HttpClient>(client: &C, user_id: i64) -> Result<PostsSummary> {
    UserPostsFetcher::new(client).fetch(user_id).await
}
