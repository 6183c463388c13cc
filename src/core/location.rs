//! # Navigable Location
//!
//! The in-app address that identifies what is on screen. It looks like the
//! path-and-query part of a URL (`/?page=2`, `/post/7`, `/create`) so it can be
//! printed, bookmarked, and passed back in with `--location`.
//!
//! ```text
//! "/?page=2" ──parse──► Location { path: "/", query: [("page","2")] }
//!                          │
//!                          ├── route()           → Route::List
//!                          └── requested_page()  → 2
//! ```
//!
//! Parsing and page resolution never fail on content: a missing or garbled
//! `page` value resolves to page 1.

use std::fmt;

use url::Url;
use url::form_urlencoded;

/// Query parameter that carries the requested page.
pub const PAGE_PARAM: &str = "page";

/// Dummy origin used to resolve relative locations with the `url` crate.
const LOCATION_ORIGIN: &str = "http://quire.local/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationError(String);

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid location: {}", self.0)
    }
}

impl std::error::Error for LocationError {}

/// A parsed navigable location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl Location {
    /// The post list with no explicit page.
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            query: Vec::new(),
        }
    }

    /// The post list at page `page`.
    pub fn list_page(page: u32) -> Self {
        Self::root().with_page(page)
    }

    pub fn post(id: u64) -> Self {
        Self {
            path: format!("/post/{id}"),
            query: Vec::new(),
        }
    }

    pub fn create() -> Self {
        Self {
            path: "/create".to_string(),
            query: Vec::new(),
        }
    }

    /// Parses a location string. Relative forms (`?page=2`, `post/3`) are
    /// resolved against the root.
    pub fn parse(input: &str) -> Result<Self, LocationError> {
        let origin = Url::parse(LOCATION_ORIGIN).map_err(|e| LocationError(e.to_string()))?;
        let url = origin
            .join(input.trim())
            .map_err(|e| LocationError(format!("{input:?}: {e}")))?;
        Ok(Self {
            path: url.path().to_string(),
            query: url.query_pairs().into_owned().collect(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Same path, query replaced by the single `page` parameter.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            path: self.path.clone(),
            query: vec![(PAGE_PARAM.to_string(), page.to_string())],
        }
    }

    pub fn requested_page(&self) -> u32 {
        resolve_requested_page(&self.query)
    }

    pub fn route(&self) -> Route {
        Route::resolve(&self.path)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter())
                .finish();
            write!(f, "?{encoded}")?;
        }
        Ok(())
    }
}

/// Reads the requested page from a location query.
///
/// Anything that is not a positive integer (missing, empty, non-numeric,
/// zero, negative) resolves to 1.
pub fn resolve_requested_page(query: &[(String, String)]) -> u32 {
    query
        .iter()
        .find(|(key, _)| key == PAGE_PARAM)
        .and_then(|(_, value)| value.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Screen selected by a location path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`: the paginated post list
    List,
    /// `/post/{id}`: a single post
    Post { id: u64 },
    /// `/create`: the new-post form
    Create,
    /// Anything else
    Unknown,
}

impl Route {
    fn resolve(path: &str) -> Self {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Route::List;
        }

        let segments: Vec<&str> = trimmed.split('/').collect();
        match segments.as_slice() {
            ["create"] => Route::Create,
            ["post", id] => id
                .parse::<u64>()
                .map(|id| Route::Post { id })
                .unwrap_or(Route::Unknown),
            _ => Route::Unknown,
        }
    }
}

/// Browser-style back/forward history of visited locations.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    cursor: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.cursor]
    }

    /// Visits a new location, discarding any forward entries.
    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn back(&mut self) -> Option<&Location> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&Location> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(input: &str) -> u32 {
        Location::parse(input).unwrap().requested_page()
    }

    #[test]
    fn test_missing_page_resolves_to_one() {
        assert_eq!(page_of("/"), 1);
        assert_eq!(page_of(""), 1);
        assert_eq!(page_of("/?sort=new"), 1);
    }

    #[test]
    fn test_invalid_page_values_resolve_to_one() {
        for input in [
            "/?page=",
            "/?page=abc",
            "/?page=0",
            "/?page=-4",
            "/?page=2.5",
            "/?page=99999999999999",
        ] {
            assert_eq!(page_of(input), 1, "input {input:?}");
        }
    }

    #[test]
    fn test_valid_page_is_read() {
        assert_eq!(page_of("/?page=2"), 2);
        assert_eq!(page_of("?page=17"), 17);
        assert_eq!(page_of("/?page=%203%20"), 3);
    }

    #[test]
    fn test_with_page_round_trips_through_string() {
        for page in [1, 2, 9, 250] {
            let location = Location::root().with_page(page);
            let reparsed = Location::parse(&location.to_string()).unwrap();
            assert_eq!(reparsed.requested_page(), page);
            assert_eq!(reparsed, location);
        }
    }

    #[test]
    fn test_with_page_replaces_existing_query() {
        let location = Location::parse("/?page=2&sort=new").unwrap().with_page(5);
        assert_eq!(location.to_string(), "/?page=5");
    }

    #[test]
    fn test_display_without_query() {
        assert_eq!(Location::root().to_string(), "/");
        assert_eq!(Location::post(12).to_string(), "/post/12");
        assert_eq!(Location::create().to_string(), "/create");
    }

    #[test]
    fn test_routes() {
        assert_eq!(Location::parse("/").unwrap().route(), Route::List);
        assert_eq!(Location::parse("/?page=3").unwrap().route(), Route::List);
        assert_eq!(
            Location::parse("/post/7").unwrap().route(),
            Route::Post { id: 7 }
        );
        assert_eq!(
            Location::parse("/post/7/").unwrap().route(),
            Route::Post { id: 7 }
        );
        assert_eq!(Location::parse("/create").unwrap().route(), Route::Create);
        assert_eq!(Location::parse("/post/abc").unwrap().route(), Route::Unknown);
        assert_eq!(Location::parse("/nope").unwrap().route(), Route::Unknown);
    }

    #[test]
    fn test_history_back_and_forward() {
        let mut history = History::new(Location::root());
        history.push(Location::list_page(2));
        history.push(Location::list_page(3));

        assert_eq!(history.back().map(Location::requested_page), Some(2));
        assert_eq!(history.back().map(Location::requested_page), Some(1));
        assert!(history.back().is_none());
        assert_eq!(history.forward().map(Location::requested_page), Some(2));
    }

    #[test]
    fn test_history_push_discards_forward_entries() {
        let mut history = History::new(Location::root());
        history.push(Location::list_page(2));
        history.back();
        history.push(Location::create());

        assert!(!history.can_go_forward());
        assert_eq!(history.current(), &Location::create());
        assert_eq!(history.back(), Some(&Location::root()));
    }
}
