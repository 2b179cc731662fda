//! In-memory navigation history

use crate::navigator::{NavigationDecision, HOME_PATH};
use crate::segments::normalize_path;
use crate::{trace_log, warn_log};

/// Direction of a history change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    /// A new entry was pushed, or history moved forward.
    Forward,
    /// History moved back one entry.
    Back,
    /// The current entry was overwritten.
    Replace,
}

/// Record of a single history change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChangeEvent {
    /// Path before the change
    pub from: Option<String>,
    /// Path after the change
    pub to: String,
    /// How the history moved
    pub direction: NavigationDirection,
}

/// Navigation history stack
///
/// Paths are normalized with [`normalize_path`] on the way in, so the current
/// path is always canonical by the time the navigation core reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryState {
    /// Navigation history stack
    history: Vec<String>,
    /// Current position in history
    current: usize,
}

impl HistoryState {
    /// Create a history positioned at `/`
    pub fn new() -> Self {
        Self::with_initial(HOME_PATH)
    }

    /// Create a history positioned at `path`
    pub fn with_initial(path: &str) -> Self {
        Self {
            history: vec![canonical(path)],
            current: 0,
        }
    }

    /// Get current path
    pub fn current_path(&self) -> &str {
        &self.history[self.current]
    }

    /// All entries, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Index of the current entry
    pub fn position(&self) -> usize {
        self.current
    }

    /// Apply a navigation decision: replace when it asks to, push otherwise.
    pub fn apply(&mut self, decision: &NavigationDecision) -> RouteChangeEvent {
        if decision.replace_history {
            self.replace(&decision.target)
        } else {
            self.push(&decision.target)
        }
    }

    /// Navigate to a new path
    pub fn push(&mut self, path: &str) -> RouteChangeEvent {
        let path = canonical(path);
        let from = Some(self.current_path().to_string());

        // Remove forward history when pushing
        self.history.truncate(self.current + 1);

        self.history.push(path.clone());
        self.current += 1;
        trace_log!("history push '{}' (depth {})", path, self.history.len());

        RouteChangeEvent {
            from,
            to: path,
            direction: NavigationDirection::Forward,
        }
    }

    /// Replace current path
    pub fn replace(&mut self, path: &str) -> RouteChangeEvent {
        let path = canonical(path);
        let from = Some(self.current_path().to_string());

        self.history[self.current] = path.clone();
        trace_log!("history replace at {} with '{}'", self.current, path);

        RouteChangeEvent {
            from,
            to: path,
            direction: NavigationDirection::Replace,
        }
    }

    /// Go back in history
    pub fn back(&mut self) -> Option<RouteChangeEvent> {
        if self.current > 0 {
            let from = Some(self.current_path().to_string());
            self.current -= 1;
            let to = self.current_path().to_string();

            Some(RouteChangeEvent {
                from,
                to,
                direction: NavigationDirection::Back,
            })
        } else {
            None
        }
    }

    /// Go forward in history
    pub fn forward(&mut self) -> Option<RouteChangeEvent> {
        if self.can_go_forward() {
            let from = Some(self.current_path().to_string());
            self.current += 1;
            let to = self.current_path().to_string();

            Some(RouteChangeEvent {
                from,
                to,
                direction: NavigationDirection::Forward,
            })
        } else {
            None
        }
    }

    /// Check if can go back
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Check if can go forward
    pub fn can_go_forward(&self) -> bool {
        self.current < self.history.len() - 1
    }

    /// Peek at the path we would navigate to on `back()`, without actually navigating.
    pub fn peek_back_path(&self) -> Option<&str> {
        if self.current > 0 {
            Some(&self.history[self.current - 1])
        } else {
            None
        }
    }

    /// Peek at the path we would navigate to on `forward()`, without actually navigating.
    pub fn peek_forward_path(&self) -> Option<&str> {
        if self.can_go_forward() {
            Some(&self.history[self.current + 1])
        } else {
            None
        }
    }

    /// Clear navigation history
    pub fn clear(&mut self) {
        self.history.clear();
        self.history.push(HOME_PATH.to_string());
        self.current = 0;
    }
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new()
    }
}

fn canonical(path: &str) -> String {
    let normalized = normalize_path(path);
    if normalized != path {
        warn_log!("Normalized malformed path '{}' to '{}'", path, normalized);
    }
    normalized.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation() {
        let mut state = HistoryState::new();

        assert_eq!(state.current_path(), "/");

        state.push("/players");
        assert_eq!(state.current_path(), "/players");

        state.push("/players/123");
        assert_eq!(state.current_path(), "/players/123");

        state.back();
        assert_eq!(state.current_path(), "/players");

        state.forward();
        assert_eq!(state.current_path(), "/players/123");
    }

    #[test]
    fn test_replace() {
        let mut state = HistoryState::new();

        state.push("/players");
        let event = state.replace("/matches");

        assert_eq!(state.current_path(), "/matches");
        assert_eq!(state.history.len(), 2);
        assert_eq!(event.from.as_deref(), Some("/players"));
        assert_eq!(event.direction, NavigationDirection::Replace);
    }

    #[test]
    fn test_push_truncates_forward_history() {
        let mut state = HistoryState::new();
        state.push("/a");
        state.push("/b");
        state.back();
        assert_eq!(state.peek_forward_path(), Some("/b"));

        state.push("/c");
        assert!(!state.can_go_forward());
        assert_eq!(state.history(), ["/", "/a", "/c"]);
    }

    #[test]
    fn test_apply_decision() {
        let mut state = HistoryState::new();

        let event = state.apply(&NavigationDecision::push("/players"));
        assert_eq!(event.direction, NavigationDirection::Forward);
        assert_eq!(state.history().len(), 2);

        let event = state.apply(&NavigationDecision::replace("/matches"));
        assert_eq!(event.direction, NavigationDirection::Replace);
        assert_eq!(state.history(), ["/", "/matches"]);
    }

    #[test]
    fn test_paths_are_normalized_on_entry() {
        let mut state = HistoryState::with_initial("players/123/");
        assert_eq!(state.current_path(), "/players/123");

        state.push("//matches//");
        assert_eq!(state.current_path(), "/matches");
    }

    #[test]
    fn test_back_at_start_is_none() {
        let mut state = HistoryState::new();
        assert!(!state.can_go_back());
        assert!(state.back().is_none());
        assert!(state.peek_back_path().is_none());
    }

    #[test]
    fn test_clear() {
        let mut state = HistoryState::with_initial("/players");
        state.push("/players/7");
        state.clear();
        assert_eq!(state.history(), ["/"]);
        assert_eq!(state.position(), 0);
    }
}
