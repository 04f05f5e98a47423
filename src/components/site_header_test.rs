use super::*;

#[test]
fn nav_drawer_class_reflects_open_state() {
    assert_eq!(nav_drawer_class(false), "site-nav");
    assert_eq!(nav_drawer_class(true), "site-nav site-nav--open");
}

#[test]
fn theme_toggle_glyph_shows_the_opposite_mode() {
    assert_eq!(theme_toggle_glyph(false), "☾");
    assert_eq!(theme_toggle_glyph(true), "☀");
}

#[test]
fn bool_attr_formats_aria_values() {
    assert_eq!(bool_attr(true), "true");
    assert_eq!(bool_attr(false), "false");
}

#[test]
fn nav_links_start_at_home() {
    assert_eq!(NAV_LINKS.first(), Some(&("/", "Home")));
    assert!(NAV_LINKS.iter().any(|(href, _)| *href == "/about"));
}
