//! Active-link path matching for the site navigation.
//!
//! The site is served statically, so the same page can be reached as `/`,
//! `/index.html`, or with a trailing slash. Links are marked active by
//! comparing normalized paths.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Normalize a path for comparison: a trailing `/index.html` collapses to
/// `/`, non-root trailing slashes are dropped, and the result is lowercased.
pub fn normalize_path(raw: &str) -> String {
    let mut path = raw.trim().to_owned();
    let lower = path.to_ascii_lowercase();
    if let Some(head) = lower.strip_suffix("index.html") {
        if head.ends_with('/') {
            path.truncate(head.len());
        }
    }
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path.to_ascii_lowercase()
}

/// True when `target` should be highlighted for the current location.
pub fn is_active(current_path: &str, target: &str) -> bool {
    let here = normalize_path(current_path);
    let there = normalize_path(target);
    if here == there {
        return true;
    }
    // A relative `index.html` link still points at the home page.
    here == "/" && there.ends_with("index.html")
}
