use super::*;

const STYLESHEET: &str = include_str!("../../../style/main.css");

#[test]
fn label_is_neutral_before_theme_is_known() {
    assert_eq!(toggle_label(None), "Toggle dark mode");
}

#[test]
fn label_names_the_mode_the_click_switches_to() {
    assert_eq!(toggle_label(Some(true)), "Switch to light mode");
    assert_eq!(toggle_label(Some(false)), "Switch to dark mode");
}

#[test]
fn stylesheet_picks_glyph_from_root_class() {
    assert!(STYLESHEET.contains("html:not(.dark) .theme-toggle__glyph--sun { display: none; }"));
    assert!(STYLESHEET.contains("html.dark .theme-toggle__glyph--moon { display: none; }"));
}
