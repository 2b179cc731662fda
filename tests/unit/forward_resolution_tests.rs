//! Forward navigation: level tags and pass-through options

use path_navigator::{resolve, NavigateOptions, NavigateWith, NavigationDecision, NavigationLevel};

#[test]
fn test_primary_replaces_history() {
    assert_eq!(
        resolve("/x", "/y", NavigationLevel::Primary),
        NavigationDecision::replace("/y")
    );
}

#[test]
fn test_sub_pushes() {
    assert_eq!(
        resolve("/x", "/y", NavigationLevel::Sub),
        NavigationDecision::push("/y")
    );
}

#[test]
fn test_options_replace_false_is_passed_through() {
    let options = NavigateOptions::new().replace(false);
    let decision = resolve("/x", "/y", options.clone());

    assert_eq!(decision.target, "/y");
    assert!(!decision.replace_history);
    assert_eq!(decision.options, Some(options));
}

#[test]
fn test_options_replace_true() {
    let decision = resolve("/x", "/y", NavigateOptions::new().replace(true).scroll(true));
    assert!(decision.replace_history);
    assert_eq!(decision.options.map(|o| o.scroll), Some(true));
}

#[test]
fn test_explicit_variants() {
    let level = resolve("/x", "/y", NavigateWith::Level(NavigationLevel::Primary));
    assert!(level.replace_history);
    assert!(level.options.is_none());

    let options = resolve("/x", "/y", NavigateWith::Options(NavigateOptions::default()));
    assert!(!options.replace_history);
}

#[test]
fn test_absent_options_push() {
    let decision = resolve("/x", "/y", Option::<NavigateWith>::None);
    assert_eq!(decision, NavigationDecision::push("/y"));
}

#[test]
fn test_destination_is_not_rewritten() {
    // Malformed destinations are the router's concern
    let decision = resolve("/", "players//7/", NavigationLevel::Sub);
    assert_eq!(decision.target, "players//7/");
}
