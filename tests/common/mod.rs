//! Test utilities for navigation tests
//!
//! Provides fixtures, helpers, and assertion utilities for integration tests.

#![allow(dead_code)]

use path_navigator::*;

/// Route log output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .try_init();
}

/// A smart navigator whose history starts at `path`
pub fn navigator_at(path: &str) -> SmartNavigator<HistoryState> {
    SmartNavigator::new(HistoryState::with_initial(path))
}

/// Call `go_back` until it is unhandled, collecting every path visited
pub fn walk_back(navigator: &mut SmartNavigator<HistoryState>) -> Vec<String> {
    let mut visited = Vec::new();
    loop {
        match navigator.go_back() {
            NavigationResult::Navigated { path, .. } => visited.push(path),
            NavigationResult::Unhandled { .. } => return visited,
        }
    }
}

/// Assert that back navigation from `from` replaces history with `to`
pub fn assert_back_to(from: &str, to: &str) {
    let decision = resolve_back(from);
    assert_eq!(
        decision,
        Some(NavigationDecision::replace(to)),
        "back from '{}' should replace with '{}'",
        from,
        to
    );
}

/// Assert that `path` is home: back navigation yields nothing
pub fn assert_home(path: &str) {
    assert!(
        resolve_back(path).is_none(),
        "'{}' should be home, got {:?}",
        path,
        resolve_back(path)
    );
}
