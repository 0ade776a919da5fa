//! Intents for the posts store.

use crate::api::FetchErrorKind;
use crate::mvi::Intent;
use crate::posts::model::Post;

/// Fetch lifecycle events dispatched by [`PostsStore`](super::PostsStore).
#[derive(Debug, Clone)]
pub enum PostsIntent {
    /// A fetch is about to issue its request.
    FetchStarted,

    /// A page request succeeded.
    PageLoaded {
        /// The requested 1-based page.
        page: u32,
        /// Posts returned for that page.
        posts: Vec<Post>,
    },

    /// A bulk request for the whole collection succeeded.
    AllLoaded { posts: Vec<Post> },

    /// A request failed.
    FetchFailed {
        kind: FetchErrorKind,
        message: String,
    },

    /// A fetch returned, whatever the outcome.
    FetchFinished,
}

impl Intent for PostsIntent {}
