use super::*;

#[test]
fn normalize_collapses_index_html_to_root() {
    assert_eq!(normalize_path("/index.html"), "/");
    assert_eq!(normalize_path("/INDEX.HTML"), "/");
    assert_eq!(normalize_path("/"), "/");
}

#[test]
fn normalize_drops_non_root_trailing_slash() {
    assert_eq!(normalize_path("/about/"), "/about");
    assert_eq!(normalize_path("/about"), "/about");
    assert_eq!(normalize_path("/"), "/");
}

#[test]
fn normalize_collapses_nested_index_html() {
    assert_eq!(normalize_path("/notes/index.html"), "/notes");
}

#[test]
fn normalize_lowercases_the_result() {
    assert_eq!(normalize_path("/About"), "/about");
}

#[test]
fn normalize_keeps_bare_relative_index_html() {
    assert_eq!(normalize_path("index.html"), "index.html");
}

#[test]
fn is_active_matches_equivalent_spellings() {
    assert!(is_active("/about/", "/About"));
    assert!(is_active("/index.html", "/"));
    assert!(is_active("/", "/"));
}

#[test]
fn is_active_matches_relative_index_link_on_home() {
    assert!(is_active("/", "index.html"));
    assert!(is_active("/index.html", "index.html"));
}

#[test]
fn is_active_rejects_other_pages() {
    assert!(!is_active("/about", "/"));
    assert!(!is_active("/", "/about"));
    assert!(!is_active("/about", "index.html"));
}
