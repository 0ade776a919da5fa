//! # postdeck
//!
//! A client-side store for a paginated blog-posts REST API.
//!
//! [`posts::PostsStore`] owns the fetched posts and pagination metadata.
//! Its two operations, `fetch_page` and `fetch_all_posts`, never fail:
//! errors are recorded in the store state for the UI to display.
//!
//! ```no_run
//! use std::sync::Arc;
//! use postdeck::api::PostsClient;
//! use postdeck::config::Config;
//! use postdeck::posts::PostsStore;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = PostsClient::new(&Config::load()?.api)?;
//! let store = PostsStore::new(Arc::new(client));
//! store.fetch_page(1).await;
//! println!("{} posts on page {}", store.posts().len(), store.current_page());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod posts;
