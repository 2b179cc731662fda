//! Navigation outcomes and errors.
//!
//! - [`NavigationResult`] — what happened when a decision was applied
//!   (`Navigated` or `Unhandled` at home).
//! - [`NavigationError`] — failures of the GPUI embedding layer, such as
//!   using the navigator before [`init_navigator`](crate::init_navigator).
//!
//! The navigation core itself has no error cases.
//!
//! # Examples
//!
//! ```
//! use path_navigator::error::NavigationResult;
//!
//! let result = NavigationResult::Navigated { path: "/players".into(), replaced: true };
//! assert!(result.is_navigated());
//! assert_eq!(result.path(), "/players");
//!
//! let home = NavigationResult::Unhandled { path: "/".into() };
//! assert!(home.is_unhandled());
//! ```

use std::fmt;

/// Outcome of a smart navigation or back navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationResult {
    /// The router moved to `path`
    Navigated { path: String, replaced: bool },
    /// Back navigation at home; the platform default should take over
    Unhandled { path: String },
}

impl NavigationResult {
    /// Check if the router moved
    pub fn is_navigated(&self) -> bool {
        matches!(self, NavigationResult::Navigated { .. })
    }

    /// Check if the request was left to the platform
    pub fn is_unhandled(&self) -> bool {
        matches!(self, NavigationResult::Unhandled { .. })
    }

    /// The path the router is on after this outcome
    pub fn path(&self) -> &str {
        match self {
            NavigationResult::Navigated { path, .. } | NavigationResult::Unhandled { path } => {
                path
            }
        }
    }
}

/// Errors raised by the GPUI embedding layer.
///
/// Implements [`std::error::Error`] and [`Display`](std::fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No [`GlobalNavigator`](crate::GlobalNavigator) has been installed
    NotInitialized,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::NotInitialized => {
                write!(f, "Navigator not initialized: call init_navigator first")
            }
        }
    }
}

impl std::error::Error for NavigationError {}
