//! Access to the remote posts API.
//!
//! Provides the [`PostsSource`] seam the store fetches through, the
//! reqwest-backed [`PostsClient`], and the [`FetchError`] taxonomy.

mod client;
mod error;
mod source;

pub use client::{ClientError, PostsClient};
pub use error::{FetchError, FetchErrorKind, NETWORK_ERROR_MESSAGE};
pub use source::PostsSource;
