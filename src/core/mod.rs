//! # Core Application Logic
//!
//! This module contains Quire's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Location + History   │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │ Effects
//!                                ▼
//!                         ┌────────────┐        ┌────────────┐
//!                         │    TUI     │◄──────►│  Blog API  │
//!                         │  Adapter   │ tasks  │  (reqwest) │
//!                         │ (ratatui)  │        │            │
//!                         └────────────┘        └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`location`]: navigable location, routes, and back/forward history
//! - [`load`]: the fenced `Idle → Loading → Ready | Failed` state machine
//! - [`pagination`]: the paginated list controller
//! - [`detail`] / [`compose`]: single-post view and new-post submission
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`title`]: window title derived from state
//! - [`config`]: settings resolution

pub mod action;
pub mod compose;
pub mod config;
pub mod detail;
pub mod load;
pub mod location;
pub mod pagination;
pub mod state;
pub mod title;
