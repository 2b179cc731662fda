//! Navigator integration for GPUI.
//!
//! The navigation core is pure; this module is where the live location
//! lives. It contains:
//!
//! - [`GlobalNavigator`] — a [`SmartNavigator`] over [`HistoryState`], stored
//!   as a GPUI `Global`.
//! - [`Navigator`] — static helpers (`Navigator::smart_navigate`,
//!   `Navigator::go_back`, …) that read the current path from the global,
//!   resolve, apply, and refresh windows.
//! - [`UseNavigator`] — direct access to the global from `App`.
//!
//! # Initialization
//!
//! ```ignore
//! use path_navigator::{init_navigator, NavigationLevel, Navigator};
//!
//! init_navigator(cx);
//! Navigator::smart_navigate(cx, "/players", NavigationLevel::Primary)?;
//! Navigator::smart_navigate(cx, "/players/123", NavigationLevel::Sub)?;
//!
//! // Up one level: "/players"
//! Navigator::go_back(cx)?;
//! ```

use crate::error::{NavigationError, NavigationResult};
use crate::navigator::{NavigateOptions, NavigateWith, NavigationLevel};
use crate::router::SmartNavigator;
use crate::state::HistoryState;
use crate::{debug_log, error_log, info_log};
use gpui::{App, BorrowAppContext, Global};
use std::borrow::BorrowMut;

// ============================================================================
// GlobalNavigator
// ============================================================================

/// Global navigation state accessible from any component.
#[derive(Debug, Clone, Default)]
pub struct GlobalNavigator {
    navigator: SmartNavigator<HistoryState>,
}

impl GlobalNavigator {
    /// Create a navigator positioned at `/`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a navigator positioned at `path`.
    pub fn at(path: &str) -> Self {
        Self {
            navigator: SmartNavigator::new(HistoryState::with_initial(path)),
        }
    }

    /// Current path.
    pub fn current_path(&self) -> &str {
        self.navigator.current_path()
    }

    /// Underlying history.
    pub fn history(&self) -> &HistoryState {
        self.navigator.router()
    }

    /// Smart navigation; see [`SmartNavigator::smart_navigate`].
    pub fn smart_navigate<O>(&mut self, destination: &str, options: O) -> NavigationResult
    where
        O: Into<Option<NavigateWith>>,
    {
        self.navigator.smart_navigate(destination, options)
    }

    /// Hierarchical back navigation; see [`SmartNavigator::go_back`].
    pub fn go_back(&mut self) -> NavigationResult {
        self.navigator.go_back()
    }

    /// Pop one history entry, ignoring the path hierarchy.
    pub fn history_back(&mut self) -> Option<NavigationResult> {
        let event = self.navigator.router_mut().back()?;
        Some(NavigationResult::Navigated {
            path: event.to,
            replaced: false,
        })
    }
}

impl Global for GlobalNavigator {}

// ============================================================================
// UseNavigator trait
// ============================================================================

/// Trait for accessing the global navigator from context.
pub trait UseNavigator {
    /// Get reference to global navigator.
    fn navigator(&self) -> &GlobalNavigator;

    /// Update global navigator.
    fn update_navigator<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut GlobalNavigator, &mut App) -> R;
}

impl UseNavigator for App {
    fn navigator(&self) -> &GlobalNavigator {
        self.global::<GlobalNavigator>()
    }

    fn update_navigator<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut GlobalNavigator, &mut App) -> R,
    {
        self.update_global(f)
    }
}

// ============================================================================
// init_navigator
// ============================================================================

/// Install a [`GlobalNavigator`] positioned at `/`.
pub fn init_navigator(cx: &mut App) {
    init_navigator_at(cx, "/");
}

/// Install a [`GlobalNavigator`] positioned at `path`.
///
/// Replaces any navigator installed earlier.
pub fn init_navigator_at(cx: &mut App, path: &str) {
    let navigator = GlobalNavigator::at(path);
    info_log!("Navigator initialized at '{}'", navigator.current_path());
    cx.set_global(navigator);
}

// ============================================================================
// Navigator
// ============================================================================

/// Static navigation API.
///
/// Every method that moves the location refreshes all windows afterwards and
/// returns [`NavigationError::NotInitialized`] if [`init_navigator`] was never
/// called.
///
/// # Example
///
/// ```ignore
/// use path_navigator::{NavigateOptions, NavigationLevel, Navigator};
///
/// Navigator::smart_navigate(cx, "/matches", NavigationLevel::Primary)?;
/// Navigator::smart_navigate(cx, "/matches/7", NavigateOptions::new().state("live"))?;
///
/// if Navigator::go_back(cx)?.is_unhandled() {
///     // at home: let the platform close the window, etc.
/// }
/// ```
pub struct Navigator;

impl Navigator {
    /// Navigate to `destination` with a level tag or pass-through options.
    pub fn smart_navigate<O>(
        cx: &mut (impl BorrowAppContext + BorrowMut<App>),
        destination: &str,
        options: O,
    ) -> Result<NavigationResult, NavigationError>
    where
        O: Into<Option<NavigateWith>>,
    {
        Self::update(cx, |navigator| {
            navigator.smart_navigate(destination, options)
        })
    }

    /// Push `destination` as a new history entry.
    pub fn push(
        cx: &mut (impl BorrowAppContext + BorrowMut<App>),
        destination: &str,
    ) -> Result<NavigationResult, NavigationError> {
        Self::smart_navigate(cx, destination, NavigationLevel::Sub)
    }

    /// Replace the current history entry with `destination`.
    pub fn replace(
        cx: &mut (impl BorrowAppContext + BorrowMut<App>),
        destination: &str,
    ) -> Result<NavigationResult, NavigationError> {
        Self::smart_navigate(cx, destination, NavigateOptions::new().replace(true))
    }

    /// Navigate one level up the path hierarchy.
    ///
    /// At `/` or `/dashboard` the result is [`NavigationResult::Unhandled`]
    /// and nothing changes.
    pub fn go_back(
        cx: &mut (impl BorrowAppContext + BorrowMut<App>),
    ) -> Result<NavigationResult, NavigationError> {
        Self::update(cx, |navigator| navigator.go_back())
    }

    /// Pop one history entry regardless of the path hierarchy.
    ///
    /// Returns `Ok(None)` when there is no earlier entry.
    pub fn history_back(
        cx: &mut (impl BorrowAppContext + BorrowMut<App>),
    ) -> Result<Option<NavigationResult>, NavigationError> {
        Self::update(cx, |navigator| navigator.history_back())
    }

    /// Get current path.
    ///
    /// Panics if the navigator was never initialized; see
    /// [`try_current_path`](Navigator::try_current_path).
    pub fn current_path(cx: &App) -> String {
        cx.navigator().current_path().to_string()
    }

    /// Get current path, or an error if the navigator was never initialized.
    pub fn try_current_path(cx: &App) -> Result<String, NavigationError> {
        cx.try_global::<GlobalNavigator>()
            .map(|navigator| navigator.current_path().to_string())
            .ok_or(NavigationError::NotInitialized)
    }

    /// Check if there is an earlier history entry.
    pub fn can_go_back(cx: &App) -> bool {
        cx.try_global::<GlobalNavigator>()
            .is_some_and(|navigator| navigator.history().can_go_back())
    }

    fn update<R>(
        cx: &mut (impl BorrowAppContext + BorrowMut<App>),
        f: impl FnOnce(&mut GlobalNavigator) -> R,
    ) -> Result<R, NavigationError> {
        let app: &mut App = cx.borrow_mut();
        if !app.has_global::<GlobalNavigator>() {
            error_log!("Navigation requested before init_navigator");
            return Err(NavigationError::NotInitialized);
        }

        let result = app.update_global::<GlobalNavigator, _>(|navigator, _| f(navigator));
        debug_log!("Refreshing windows after navigation");
        app.refresh_windows();
        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================
