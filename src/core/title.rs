//! Window title as a pure function of view state.

use crate::core::location::Route;
use crate::core::state::{App, SiteInfo};

const NDASH: char = '\u{2013}';

fn with_author(site: &SiteInfo, text: &str) -> String {
    match &site.author {
        Some(author) => format!("{text} {NDASH} {author}"),
        None => text.to_string(),
    }
}

pub fn window_title(app: &App) -> String {
    match app.route {
        Route::List => with_author(&app.site, &app.site.title),
        Route::Post { .. } => {
            if let Some(post) = app.detail.post() {
                with_author(&app.site, &post.title)
            } else if app.detail.is_not_found() {
                format!("404 {NDASH} Post not found")
            } else {
                "Loading...".to_string()
            }
        }
        Route::Create => with_author(&app.site, "Create New Post"),
        Route::Unknown => format!("404 {NDASH} Page not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::core::action::{Action, Effect, update};
    use crate::test_support::{sample_post, test_app_at};

    fn post_app(result: Result<crate::api::Post, ApiError>) -> App {
        let mut app = test_app_at("/post/3");
        let effects = update(&mut app, Action::Init);
        let Some(Effect::FetchPost { token, .. }) = effects.first().cloned() else {
            panic!("expected a post fetch");
        };
        update(&mut app, Action::PostLoaded { token, result });
        app
    }

    #[test]
    fn test_list_title_includes_author() {
        let app = test_app_at("/?page=2");
        assert_eq!(window_title(&app), "Blog \u{2013} Test Author");
    }

    #[test]
    fn test_list_title_without_author() {
        let mut app = test_app_at("/");
        app.site.author = None;
        assert_eq!(window_title(&app), "Blog");
    }

    #[test]
    fn test_post_loading_title() {
        let mut app = test_app_at("/post/3");
        update(&mut app, Action::Init);
        assert_eq!(window_title(&app), "Loading...");
    }

    #[test]
    fn test_post_ready_title() {
        let app = post_app(Ok(sample_post(3)));
        assert_eq!(window_title(&app), "Post 3 \u{2013} Test Author");
    }

    #[test]
    fn test_post_not_found_title() {
        let app = post_app(Err(ApiError::NotFound { id: 3 }));
        assert_eq!(window_title(&app), "404 \u{2013} Post not found");
    }

    #[test]
    fn test_unknown_location_title() {
        let app = test_app_at("/nowhere");
        assert_eq!(window_title(&app), "404 \u{2013} Page not found");
    }

    #[test]
    fn test_create_title() {
        let app = test_app_at("/create");
        assert_eq!(window_title(&app), "Create New Post \u{2013} Test Author");
    }
}
