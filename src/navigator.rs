//! Path-hierarchy navigation decisions.
//!
//! This module is the pure core of the crate. It never touches a router: it
//! takes the current path as an explicit argument and returns a
//! [`NavigationDecision`] describing where to go and whether the history
//! entry should be replaced. Applying the decision is the caller's job (see
//! [`PathRouter`](crate::router::PathRouter)).
//!
//! Two operations are provided:
//!
//! - [`resolve`] — forward navigation. The request either carries a coarse
//!   [`NavigationLevel`] (`Primary` replaces history, `Sub` pushes) or a
//!   free-form [`NavigateOptions`] object that is passed through untouched.
//! - [`resolve_back`] — hierarchical back navigation. Moves exactly one
//!   segment toward home; `/` and `/dashboard` are home and yield `None`.
//!
//! # Example
//!
//! ```
//! use path_navigator::{resolve, resolve_back, NavigationLevel};
//!
//! let decision = resolve("/matches", "/players", NavigationLevel::Primary);
//! assert_eq!(decision.target, "/players");
//! assert!(decision.replace_history);
//!
//! let back = resolve_back("/players/123").unwrap();
//! assert_eq!(back.target, "/players");
//!
//! assert!(resolve_back("/dashboard").is_none());
//! ```

use crate::segments::{parent_path, segment_count};
use crate::{debug_log, trace_log};

/// The root of the path hierarchy.
pub const HOME_PATH: &str = "/";

/// Landing page treated exactly like [`HOME_PATH`] by back navigation.
pub const DASHBOARD_PATH: &str = "/dashboard";

// ============================================================================
// Request types
// ============================================================================

/// Coarse navigation level for forward navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationLevel {
    /// Switch between top-level sections; replaces the current history entry.
    Primary,
    /// Drill into a page below the current one; pushes a new entry.
    Sub,
}

impl NavigationLevel {
    /// Whether this level replaces the current history entry.
    pub fn replaces_history(self) -> bool {
        matches!(self, NavigationLevel::Primary)
    }
}

/// Free-form navigation options handed to the router as-is.
///
/// Only [`replace`](Self::replace) is read by [`resolve`]; the other fields
/// belong to whichever router ends up applying the decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing.
    pub replace: bool,
    /// Opaque state attached to the history entry.
    pub state: Option<String>,
    /// Ask the router to restore scroll position after navigating.
    pub scroll: bool,
}

impl NavigateOptions {
    /// Create options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the replace flag.
    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    /// Attach opaque state.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Set the scroll flag.
    pub fn scroll(mut self, scroll: bool) -> Self {
        self.scroll = scroll;
        self
    }
}

/// How a forward navigation was requested.
///
/// Either a level tag or a pass-through options object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateWith {
    /// Coarse level tag.
    Level(NavigationLevel),
    /// Free-form options forwarded to the router.
    Options(NavigateOptions),
}

impl From<NavigationLevel> for NavigateWith {
    fn from(level: NavigationLevel) -> Self {
        NavigateWith::Level(level)
    }
}

impl From<NavigateOptions> for NavigateWith {
    fn from(options: NavigateOptions) -> Self {
        NavigateWith::Options(options)
    }
}

// `resolve` takes `Into<Option<NavigateWith>>`, so both request shapes need a
// direct conversion into the optional form as well.
impl From<NavigationLevel> for Option<NavigateWith> {
    fn from(level: NavigationLevel) -> Self {
        Some(NavigateWith::Level(level))
    }
}

impl From<NavigateOptions> for Option<NavigateWith> {
    fn from(options: NavigateOptions) -> Self {
        Some(NavigateWith::Options(options))
    }
}

// ============================================================================
// NavigationDecision
// ============================================================================

/// Where to navigate next and how.
///
/// Computed per call and handed straight to the router; nothing is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationDecision {
    /// Path to navigate to.
    pub target: String,
    /// Replace the current history entry instead of pushing a new one.
    pub replace_history: bool,
    /// Options supplied by the caller, untouched.
    pub options: Option<NavigateOptions>,
}

impl NavigationDecision {
    /// A decision that pushes `target`.
    pub fn push(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            replace_history: false,
            options: None,
        }
    }

    /// A decision that replaces the current entry with `target`.
    pub fn replace(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            replace_history: true,
            options: None,
        }
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Resolve a forward navigation request.
///
/// `current_path` is only read for diagnostics; the destination is never
/// rewritten. Pass `None` (or `Option::<NavigateWith>::None`) for a plain
/// push.
///
/// # Examples
///
/// ```
/// use path_navigator::{resolve, NavigateOptions, NavigationLevel};
///
/// assert!(!resolve("/x", "/y", NavigationLevel::Sub).replace_history);
///
/// let opts = NavigateOptions::new().replace(false).state("from-list");
/// let decision = resolve("/x", "/y", opts.clone());
/// assert!(!decision.replace_history);
/// assert_eq!(decision.options, Some(opts));
/// ```
pub fn resolve<O>(current_path: &str, destination: &str, options: O) -> NavigationDecision
where
    O: Into<Option<NavigateWith>>,
{
    let decision = match options.into() {
        Some(NavigateWith::Level(level)) => NavigationDecision {
            target: destination.to_string(),
            replace_history: level.replaces_history(),
            options: None,
        },
        Some(NavigateWith::Options(options)) => NavigationDecision {
            target: destination.to_string(),
            replace_history: options.replace,
            options: Some(options),
        },
        None => NavigationDecision::push(destination),
    };

    trace_log!(
        "resolve: '{}' -> '{}' (replace: {})",
        current_path,
        decision.target,
        decision.replace_history
    );
    decision
}

/// Whether `path` is the home state of the hierarchy.
///
/// Exact comparison: `/dashboard/` is a top-level page, not home.
pub fn is_home(path: &str) -> bool {
    path == HOME_PATH || path == DASHBOARD_PATH
}

/// Resolve a back navigation one level up the path hierarchy.
///
/// - `/` and `/dashboard` are home: returns `None` and the caller should
///   fall back to the platform's default back behaviour.
/// - A nested path (two or more segments) goes to its parent.
/// - A top-level path goes to `/`.
///
/// Back decisions always replace the current history entry.
pub fn resolve_back(current_path: &str) -> Option<NavigationDecision> {
    if is_home(current_path) {
        debug_log!("resolve_back: '{}' is home, nothing to do", current_path);
        return None;
    }

    let count = segment_count(current_path);
    trace_log!(
        "resolve_back: '{}' has {} segment(s)",
        current_path,
        count
    );

    let target = if count > 1 {
        parent_path(current_path)?
    } else {
        HOME_PATH.to_string()
    };

    debug_log!("Back from '{}' resolved to '{}'", current_path, target);
    Some(NavigationDecision::replace(target))
}

/// Every target repeated [`resolve_back`] visits from `path`, in order.
///
/// The chain ends once a home path is reached. For a path with `n >= 1`
/// segments the chain has exactly `n` entries.
///
/// ```
/// use path_navigator::back_chain;
///
/// assert_eq!(back_chain("/a/b/c"), vec!["/a/b", "/a", "/"]);
/// assert!(back_chain("/").is_empty());
/// ```
pub fn back_chain(path: &str) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = path.to_string();
    while let Some(decision) = resolve_back(&current) {
        chain.push(decision.target.clone());
        current = decision.target;
    }
    chain
}
