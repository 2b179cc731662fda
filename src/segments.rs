//! Segment helpers for `/`-delimited paths
//!
//! Every decision in this crate is made from the list of non-empty segments
//! of a path. Splitting discards the empty strings produced by leading,
//! trailing or repeated slashes, so `/players/123/`, `/players//123` and
//! `/players/123` all describe the same location.
//!
//! No route table is consulted: a parent path is whatever remains after
//! dropping the last segment, whether or not a page is registered there.

use std::borrow::Cow;

/// Split a path into segments, filtering empty segments
///
/// # Examples
///
/// ```
/// use path_navigator::segments::split_path;
///
/// assert_eq!(split_path("/players/123"), vec!["players", "123"]);
/// assert_eq!(split_path("/players/123/"), vec!["players", "123"]);
/// assert!(split_path("/").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Number of non-empty segments in `path`.
pub fn segment_count(path: &str) -> usize {
    path.split('/').filter(|s| !s.is_empty()).count()
}

/// Parent of `path` one level up the hierarchy.
///
/// Drops exactly one trailing segment. Returns `None` when the path has no
/// segments at all (it already is the root).
///
/// # Examples
///
/// ```
/// use path_navigator::segments::parent_path;
///
/// assert_eq!(parent_path("/a/b/c").as_deref(), Some("/a/b"));
/// assert_eq!(parent_path("/matches").as_deref(), Some("/"));
/// assert_eq!(parent_path("/"), None);
/// ```
pub fn parent_path(path: &str) -> Option<String> {
    let segments = split_path(path);
    let (_, ancestors) = segments.split_last()?;
    Some(format!("/{}", ancestors.join("/")))
}

/// Normalize a path into canonical form.
///
/// Adds a missing leading slash, drops trailing and repeated slashes, and
/// maps the empty string to `/`. Already-canonical input is returned
/// borrowed.
///
/// This is meant for the router boundary (where paths enter the history
/// stack), not for the navigation core, which tolerates either form.
///
/// # Examples
///
/// ```
/// use path_navigator::normalize_path;
///
/// assert_eq!(normalize_path("players/123/"), "/players/123");
/// assert_eq!(normalize_path("//"), "/");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if path == "/" {
        return Cow::Borrowed(path);
    }

    let canonical = path.starts_with('/') && !path.ends_with('/') && !path.contains("//");
    if canonical {
        return Cow::Borrowed(path);
    }

    Cow::Owned(format!("/{}", split_path(path).join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("/players/123"), vec!["players", "123"]);
        assert_eq!(split_path("/a/b/c"), vec!["a", "b", "c"]);
        assert_eq!(split_path("/"), Vec::<&str>::new());
        assert_eq!(split_path(""), Vec::<&str>::new());
        assert_eq!(split_path("/matches/"), vec!["matches"]);
        assert_eq!(split_path("//players///123//"), vec!["players", "123"]);
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(segment_count("/"), 0);
        assert_eq!(segment_count("//"), 0);
        assert_eq!(segment_count("/dashboard"), 1);
        assert_eq!(segment_count("/players/123/"), 2);
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("/players/123").as_deref(), Some("/players"));
        assert_eq!(parent_path("/players/123/").as_deref(), Some("/players"));
        assert_eq!(parent_path("/a/b/c").as_deref(), Some("/a/b"));
        assert_eq!(parent_path("/matches").as_deref(), Some("/"));
        assert_eq!(parent_path("/"), None);
        assert_eq!(parent_path(""), None);
    }

    #[test]
    fn test_normalize_borrows_canonical_paths() {
        assert!(matches!(normalize_path("/players/123"), Cow::Borrowed(_)));
        assert!(matches!(normalize_path("/"), Cow::Borrowed(_)));
        assert!(matches!(normalize_path("/players/"), Cow::Owned(_)));
    }

    #[test]
    fn test_normalize_repeated_slashes() {
        assert_eq!(normalize_path("/players//123"), "/players/123");
        assert_eq!(normalize_path("///"), "/");
    }
}
