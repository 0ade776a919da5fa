use crate::api::FetchErrorKind;
use crate::mvi::State;
use crate::posts::model::Post;

/// Number of posts per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed to hold `count` posts.
pub fn total_pages_for(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Snapshot of everything the posts store knows.
#[derive(Debug, Clone, PartialEq)]
pub struct PostsStoreState {
    /// Posts of the most recently loaded page.
    pub posts: Vec<Post>,
    /// Every post loaded so far, in load order.
    pub all_posts: Vec<Post>,
    /// True while a fetch is in flight.
    pub loading: bool,
    /// Display message of the last failed fetch.
    pub error: Option<String>,
    /// Kind of the last failed fetch. Set and cleared together with `error`.
    pub error_kind: Option<FetchErrorKind>,
    /// 1-based page number of the most recent fetch.
    pub current_page: u32,
    pub total_pages: usize,
}

impl Default for PostsStoreState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            all_posts: Vec::new(),
            loading: false,
            error: None,
            error_kind: None,
            current_page: 1,
            total_pages: 0,
        }
    }
}

impl State for PostsStoreState {}

impl PostsStoreState {
    pub fn has_next_page(&self) -> bool {
        (self.current_page as usize) < self.total_pages
    }

    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }
}
