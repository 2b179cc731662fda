//! Boundary normalization of incoming paths

use path_navigator::{normalize_path, HistoryState};
use std::borrow::Cow;

#[test]
fn test_canonical_paths_are_borrowed() {
    for path in ["/", "/matches", "/players/stats", "/players/:id"] {
        let normalized = normalize_path(path);
        assert!(matches!(normalized, Cow::Borrowed(_)), "{path} was copied");
        assert_eq!(normalized, path);
    }
}

#[test]
fn test_missing_leading_slash() {
    assert_eq!(normalize_path("matches"), "/matches");
    assert_eq!(normalize_path("players/stats"), "/players/stats");
}

#[test]
fn test_trailing_slash() {
    // Root keeps its only slash
    assert_eq!(normalize_path("/matches/"), "/matches");
    assert_eq!(normalize_path("players/stats/"), "/players/stats");
}

#[test]
fn test_repeated_slashes_collapse() {
    assert_eq!(normalize_path("/players//stats"), "/players/stats");
    assert_eq!(normalize_path("//players///stats//"), "/players/stats");
}

#[test]
fn test_root_variations() {
    assert_eq!(normalize_path(""), "/");
    assert_eq!(normalize_path("//"), "/");
    assert_eq!(normalize_path("///"), "/");
}

#[test]
fn test_history_normalizes_every_entry() {
    let mut history = HistoryState::with_initial("dashboard/");
    history.push("players//7/");
    history.replace("matches");

    assert_eq!(history.history(), ["/dashboard", "/matches"]);
}
