use serde::{Deserialize, Serialize};

/// Number of content characters shown in a list preview.
pub const EXCERPT_CHARS: usize = 150;

/// A published blog post. Created only by the server; the client never mutates one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

impl Post {
    /// Returns the list preview: the first `EXCERPT_CHARS` characters of the
    /// content, with `...` appended when anything was cut off.
    pub fn excerpt(&self) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}

/// Pagination metadata returned alongside each page of posts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PaginationInfo {
    /// Builds pagination metadata with the navigation flags derived from the page numbers.
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
            has_prev: current_page > 1,
            has_next: current_page < total_pages,
        }
    }

    /// Whether the flags agree with the page numbers.
    pub fn is_consistent(&self) -> bool {
        *self == Self::new(self.current_page, self.total_pages)
    }
}

/// One page of posts, as returned by `GET /?page={p}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub posts: Vec<Post>,
    pub pagination: PaginationInfo,
}

/// Request body for `POST /create`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both fields are required; whitespace alone does not count.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}
