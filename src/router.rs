//! Applying navigation decisions to a router.
//!
//! The navigation core only computes decisions. [`PathRouter`] is the seam
//! to whatever actually owns the location (the bundled [`HistoryState`], or
//! a host framework's router), and [`SmartNavigator`] wires the two
//! together: read the current path, resolve, apply.
//!
//! ```
//! use path_navigator::{HistoryState, NavigationLevel, SmartNavigator};
//!
//! let mut nav = SmartNavigator::new(HistoryState::new());
//! nav.smart_navigate("/players", NavigationLevel::Primary);
//! nav.smart_navigate("/players/123", NavigationLevel::Sub);
//!
//! assert_eq!(nav.go_back().path(), "/players");
//! assert_eq!(nav.go_back().path(), "/");
//! assert!(nav.go_back().is_unhandled());
//! ```

use crate::error::NavigationResult;
use crate::navigator::{resolve, resolve_back, NavigateWith, NavigationDecision};
use crate::state::{HistoryState, RouteChangeEvent};
use crate::{debug_log, info_log};

/// A router that can report its location and apply a decision.
pub trait PathRouter {
    /// The path the router is currently on.
    fn current_path(&self) -> &str;

    /// Move to `decision.target`, replacing the current entry when
    /// `decision.replace_history` is set.
    fn navigate(&mut self, decision: &NavigationDecision) -> RouteChangeEvent;
}

impl PathRouter for HistoryState {
    fn current_path(&self) -> &str {
        HistoryState::current_path(self)
    }

    fn navigate(&mut self, decision: &NavigationDecision) -> RouteChangeEvent {
        self.apply(decision)
    }
}

/// Smart and hierarchical navigation on top of a [`PathRouter`].
#[derive(Debug, Clone, Default)]
pub struct SmartNavigator<R> {
    router: R,
}

impl<R: PathRouter> SmartNavigator<R> {
    /// Wrap a router.
    pub fn new(router: R) -> Self {
        Self { router }
    }

    /// Navigate forward to `destination`.
    ///
    /// `Primary` replaces the current history entry, `Sub` pushes, and a
    /// [`NavigateOptions`](crate::NavigateOptions) value is forwarded as-is.
    pub fn smart_navigate<O>(&mut self, destination: &str, options: O) -> NavigationResult
    where
        O: Into<Option<NavigateWith>>,
    {
        let decision = resolve(self.router.current_path(), destination, options);
        self.apply(&decision)
    }

    /// Navigate one level up the path hierarchy.
    ///
    /// Returns [`NavigationResult::Unhandled`] at home without touching the
    /// router.
    pub fn go_back(&mut self) -> NavigationResult {
        let current = self.router.current_path();
        match resolve_back(current) {
            Some(decision) => self.apply(&decision),
            None => {
                debug_log!("go_back: '{}' is home, leaving to platform", current);
                NavigationResult::Unhandled {
                    path: current.to_string(),
                }
            }
        }
    }

    /// The path the wrapped router is on.
    pub fn current_path(&self) -> &str {
        self.router.current_path()
    }

    /// Borrow the wrapped router.
    pub fn router(&self) -> &R {
        &self.router
    }

    /// Mutably borrow the wrapped router.
    pub fn router_mut(&mut self) -> &mut R {
        &mut self.router
    }

    /// Unwrap the router.
    pub fn into_inner(self) -> R {
        self.router
    }

    fn apply(&mut self, decision: &NavigationDecision) -> NavigationResult {
        let event = self.router.navigate(decision);
        info_log!(
            "Navigation {:?}: '{}' → '{}'",
            event.direction,
            event.from.as_deref().unwrap_or(""),
            event.to
        );
        NavigationResult::Navigated {
            path: event.to,
            replaced: decision.replace_history,
        }
    }
}
