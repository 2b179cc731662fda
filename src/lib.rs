//! # path-navigator
//!
//! Smart navigation and hierarchical back-navigation over `/`-segmented
//! paths, with a GPUI integration layer.
//!
//! The crate is split in two:
//!
//! - A pure core ([`resolve`], [`resolve_back`]) that turns the current path
//!   and a request into a [`NavigationDecision`]: a target path plus whether
//!   the history entry should be replaced. No router, no global state.
//! - An embedding layer that owns the live location: [`HistoryState`],
//!   [`SmartNavigator`] over any [`PathRouter`], and the GPUI
//!   [`GlobalNavigator`] / [`Navigator`] facade.
//!
//! ## Back navigation
//!
//! `resolve_back` moves exactly one segment toward home:
//!
//! | Current path    | Result                       |
//! |-----------------|------------------------------|
//! | `/`             | `None` (home)                |
//! | `/dashboard`    | `None` (home)                |
//! | `/matches`      | replace with `/`             |
//! | `/players/123/` | replace with `/players`      |
//! | `/a/b/c`        | replace with `/a/b`          |
//!
//! ## Forward navigation
//!
//! ```
//! use path_navigator::{resolve, NavigateOptions, NavigationLevel};
//!
//! assert!(resolve("/", "/matches", NavigationLevel::Primary).replace_history);
//! assert!(!resolve("/matches", "/matches/7", NavigationLevel::Sub).replace_history);
//!
//! let opts = NavigateOptions::new().replace(false);
//! assert!(!resolve("/x", "/y", opts).replace_history);
//! ```
//!
//! ## Feature flags
//!
//! - `log` (default) — log through the `log` crate
//! - `tracing` — log through the `tracing` crate instead

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
pub mod logging;

pub mod context;
pub mod error;
pub mod navigator;
pub mod router;
pub mod segments;
pub mod state;

pub use context::{init_navigator, init_navigator_at, GlobalNavigator, Navigator, UseNavigator};
pub use error::{NavigationError, NavigationResult};
pub use navigator::{
    back_chain, is_home, resolve, resolve_back, NavigateOptions, NavigateWith,
    NavigationDecision, NavigationLevel, DASHBOARD_PATH, HOME_PATH,
};
pub use router::{PathRouter, SmartNavigator};
pub use segments::{normalize_path, parent_path, segment_count, split_path};
pub use state::{HistoryState, NavigationDirection, RouteChangeEvent};
