use async_trait::async_trait;

use crate::api::error::FetchError;
use crate::posts::Post;

/// Remote collection of posts the store reads from.
///
/// [`PostsClient`](crate::api::PostsClient) is the HTTP implementation.
/// Other implementations can be injected into
/// [`PostsStore`](crate::posts::PostsStore), e.g. in tests.
#[async_trait]
pub trait PostsSource: Send + Sync {
    /// Fetch one 1-based page of at most `limit` posts.
    async fn fetch_page(&self, page: u32, limit: usize) -> Result<Vec<Post>, FetchError>;

    /// Fetch the whole collection in one request.
    async fn fetch_all(&self) -> Result<Vec<Post>, FetchError>;
}
