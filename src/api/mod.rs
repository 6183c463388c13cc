pub mod client;
pub mod types;

pub use client::{ApiError, BlogApi, DEFAULT_BASE_URL, FaultKind, HttpBlogApi};
pub use types::{NewPost, PageResult, PaginationInfo, Post};
