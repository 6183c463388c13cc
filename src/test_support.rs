//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::api::{ApiError, BlogApi, NewPost, PageResult, PaginationInfo, Post};
use crate::core::location::Location;
use crate::core::state::{App, SiteInfo};

/// An in-memory blog for tests that don't need real HTTP.
pub struct MemoryApi {
    posts: Mutex<Vec<Post>>,
    per_page: usize,
}

impl MemoryApi {
    pub fn new(posts: Vec<Post>, per_page: usize) -> Self {
        Self {
            posts: Mutex::new(posts),
            per_page: per_page.max(1),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 10)
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().map(|posts| posts.len()).unwrap_or(0)
    }
}

#[async_trait]
impl BlogApi for MemoryApi {
    async fn list_posts(&self, page: u32) -> Result<PageResult, ApiError> {
        let posts = self.posts.lock().map_err(|e| ApiError::Network(e.to_string()))?;
        let total_pages = posts.len().div_ceil(self.per_page) as u32;
        let start = (page.saturating_sub(1) as usize) * self.per_page;
        let slice = posts
            .iter()
            .skip(start)
            .take(self.per_page)
            .cloned()
            .collect();
        Ok(page_result(page, total_pages, slice))
    }

    async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
        let posts = self.posts.lock().map_err(|e| ApiError::Network(e.to_string()))?;
        posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or(ApiError::NotFound { id })
    }

    async fn create_post(&self, post: &NewPost) -> Result<(), ApiError> {
        let mut posts = self.posts.lock().map_err(|e| ApiError::Network(e.to_string()))?;
        let id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        posts.push(Post {
            id,
            title: post.title.clone(),
            content: post.content.clone(),
        });
        Ok(())
    }
}

pub fn sample_post(id: u64) -> Post {
    Post {
        id,
        title: format!("Post {id}"),
        content: format!("Body of post {id}."),
    }
}

pub fn sample_posts(count: u64) -> Vec<Post> {
    (1..=count).map(sample_post).collect()
}

pub fn page_result(current_page: u32, total_pages: u32, posts: Vec<Post>) -> PageResult {
    PageResult {
        posts,
        pagination: PaginationInfo::new(current_page, total_pages),
    }
}

pub fn test_site() -> SiteInfo {
    SiteInfo {
        title: "Blog".to_string(),
        author: Some("Test Author".to_string()),
    }
}

/// Creates a test App on the post list, backed by an empty in-memory blog.
pub fn test_app() -> App {
    test_app_at("/")
}

pub fn test_app_at(location: &str) -> App {
    let location = Location::parse(location).expect("test location must parse");
    App::new(Arc::new(MemoryApi::empty()), test_site(), location)
}
