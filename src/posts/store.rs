//! Shared posts store.
//!
//! One store is created per session and handed to every consumer. Clones
//! share the same state.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::Instrument;

use crate::api::{FetchError, FetchErrorKind, PostsSource};
use crate::mvi::Reducer;
use crate::posts::intent::PostsIntent;
use crate::posts::model::Post;
use crate::posts::reducer::PostsReducer;
use crate::posts::state::{PostsStoreState, PAGE_SIZE};

/// Thread-safe posts state with network-backed fetch operations.
///
/// Fetches never return errors. A failure is recorded in
/// [`PostsStoreState::error`] and the previously loaded posts stay in place.
///
/// Overlapping fetches are not serialized: whichever request resolves last
/// writes last.
#[derive(Clone)]
pub struct PostsStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: RwLock<PostsStoreState>,
    source: Arc<dyn PostsSource>,
    changes: watch::Sender<PostsStoreState>,
}

impl PostsStore {
    /// Create an empty store that fetches through `source`.
    pub fn new(source: Arc<dyn PostsSource>) -> Self {
        let (changes, _) = watch::channel(PostsStoreState::default());
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(PostsStoreState::default()),
                source,
                changes,
            }),
        }
    }

    /// Fetch page 1.
    pub async fn fetch_first_page(&self) {
        self.fetch_page(1).await
    }

    /// Fetch one page of [`PAGE_SIZE`] posts and append it to `all_posts`.
    ///
    /// On success `posts` holds exactly this page and `current_page` is set
    /// to `page`. Page numbers are 1-based; 0 is treated as 1.
    pub async fn fetch_page(&self, page: u32) {
        let page = page.max(1);
        let request_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("fetch_page", %request_id, page);

        async move {
            self.dispatch(PostsIntent::FetchStarted);
            let _finished = self.finish_guard();

            tracing::debug!("Fetching posts page");
            match self.inner.source.fetch_page(page, PAGE_SIZE).await {
                Ok(posts) => {
                    tracing::info!(count = posts.len(), "Posts page loaded");
                    self.dispatch(PostsIntent::PageLoaded { page, posts });
                }
                Err(err) => self.record_failure(err),
            }
        }
        .instrument(span)
        .await
    }

    /// Fetch the whole collection, replacing `all_posts`.
    ///
    /// On success `posts` holds the first page of the collection and
    /// `current_page` is reset to 1.
    pub async fn fetch_all_posts(&self) {
        let request_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("fetch_all_posts", %request_id);

        async move {
            self.dispatch(PostsIntent::FetchStarted);
            let _finished = self.finish_guard();

            tracing::debug!("Fetching all posts");
            match self.inner.source.fetch_all().await {
                Ok(posts) => {
                    tracing::info!(count = posts.len(), "All posts loaded");
                    self.dispatch(PostsIntent::AllLoaded { posts });
                }
                Err(err) => self.record_failure(err),
            }
        }
        .instrument(span)
        .await
    }

    /// Get a clone of the full current state.
    pub fn snapshot(&self) -> PostsStoreState {
        self.inner.state.read().clone()
    }

    /// Read state without cloning it.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PostsStoreState) -> R,
    {
        f(&self.inner.state.read())
    }

    pub fn posts(&self) -> Vec<Post> {
        self.read(|s| s.posts.clone())
    }

    pub fn all_posts(&self) -> Vec<Post> {
        self.read(|s| s.all_posts.clone())
    }

    pub fn loading(&self) -> bool {
        self.read(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.read(|s| s.error.clone())
    }

    pub fn error_kind(&self) -> Option<FetchErrorKind> {
        self.read(|s| s.error_kind)
    }

    pub fn current_page(&self) -> u32 {
        self.read(|s| s.current_page)
    }

    pub fn total_pages(&self) -> usize {
        self.read(|s| s.total_pages)
    }

    pub fn has_next_page(&self) -> bool {
        self.read(|s| s.has_next_page())
    }

    pub fn has_prev_page(&self) -> bool {
        self.read(|s| s.has_prev_page())
    }

    /// Subscribe to state changes.
    ///
    /// The receiver sees the state after every transition, starting from
    /// the current one.
    pub fn subscribe(&self) -> watch::Receiver<PostsStoreState> {
        self.inner.changes.subscribe()
    }

    fn dispatch(&self, intent: PostsIntent) {
        let mut state = self.inner.state.write();
        *state = PostsReducer::reduce(std::mem::take(&mut *state), intent);
        // Published under the write lock so subscribers see transitions in order.
        self.inner.changes.send_replace(state.clone());
    }

    fn record_failure(&self, err: FetchError) {
        let kind = err.kind();
        let message = err.to_string();
        tracing::warn!(error_type = kind.as_str(), error = %message, "Posts fetch failed");
        self.dispatch(PostsIntent::FetchFailed { kind, message });
    }

    /// Dispatches `FetchFinished` when dropped, so `loading` is reset even if
    /// the fetch future is dropped mid-request.
    fn finish_guard(&self) -> scopeguard::ScopeGuard<PostsStore, impl FnOnce(PostsStore)> {
        scopeguard::guard(self.clone(), |store| {
            store.dispatch(PostsIntent::FetchFinished)
        })
    }
}
