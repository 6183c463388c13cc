//! # TUI Components
//!
//! UI pieces for the three screens and the chrome around them.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive everything they draw as parameters:
//! - `TitleBar`: top bar with the current location and status
//! - `Pager`: previous/next buttons and the page indicator
//! - `NotFound`: the 404 screen
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it for
//! one frame:
//! - `PostListState` / `PostList`: selection over the current page
//! - `PostDetailState` / `PostDetail`: scroll position in a post
//! - `CreateForm`: title and content fields, emits `FormEvent::Submit`
//!
//! Components never reach into `App`. What they need comes in as props:
//!
//! ```rust,ignore
//! PostList::new(&app.list, &mut tui.post_list, spinner_frame).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── pager.rs         (Page indicator and buttons)
//! ├── post_list.rs     (List screen)
//! ├── post_detail.rs   (Detail screen)
//! ├── not_found.rs     (404 screen)
//! ├── text_field.rs    (Single and multi-line input)
//! └── create_form.rs   (Create screen)
//! ```

pub mod create_form;
pub mod not_found;
pub mod pager;
pub mod post_detail;
pub mod post_list;
pub mod text_field;
pub mod title_bar;

pub use create_form::{CreateForm, FormEvent};
pub use not_found::NotFound;
pub use pager::Pager;
pub use post_detail::{PostDetail, PostDetailState};
pub use post_list::{PostList, PostListState};
pub use text_field::TextField;
pub use title_bar::TitleBar;
