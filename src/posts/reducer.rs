//! Reducer for the posts store.

use crate::mvi::Reducer;

use super::intent::PostsIntent;
use super::state::{total_pages_for, PostsStoreState, PAGE_SIZE};

/// Reducer for posts store state transitions.
pub struct PostsReducer;

impl Reducer for PostsReducer {
    type State = PostsStoreState;
    type Intent = PostsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PostsIntent::FetchStarted => PostsStoreState {
                loading: true,
                error: None,
                error_kind: None,
                ..state
            },

            PostsIntent::PageLoaded { page, posts } => {
                let mut all_posts = state.all_posts;
                all_posts.extend(posts.iter().cloned());
                let total_pages = total_pages_for(all_posts.len());

                PostsStoreState {
                    posts,
                    all_posts,
                    total_pages,
                    current_page: page,
                    ..state
                }
            }

            PostsIntent::AllLoaded { posts } => {
                let total_pages = total_pages_for(posts.len());
                let first_page = posts.iter().take(PAGE_SIZE).cloned().collect();

                PostsStoreState {
                    posts: first_page,
                    all_posts: posts,
                    total_pages,
                    current_page: 1,
                    ..state
                }
            }

            PostsIntent::FetchFailed { kind, message } => PostsStoreState {
                error: Some(message),
                error_kind: Some(kind),
                ..state
            },

            PostsIntent::FetchFinished => PostsStoreState {
                loading: false,
                ..state
            },
        }
    }
}
