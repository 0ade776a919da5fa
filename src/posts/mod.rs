//! Paginated posts store.
//!
//! [`PostsStore`] fetches posts through a [`PostsSource`](crate::api::PostsSource)
//! and keeps the result in a [`PostsStoreState`] that consumers read from.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `PostsStoreState`: posts, pagination metadata, loading flag, last error
//! - `PostsIntent`: fetch lifecycle events
//! - `PostsReducer`: pure state transitions

mod intent;
mod model;
mod reducer;
mod state;
mod store;

pub use intent::PostsIntent;
pub use model::Post;
pub use reducer::PostsReducer;
pub use state::{total_pages_for, PostsStoreState, PAGE_SIZE};
pub use store::PostsStore;
