#![cfg(not(feature = "hydrate"))]

use leptos::prelude::Owner;

use super::*;
use crate::theme::mode::{ThemeMode, ThemeSource};

#[test]
fn context_starts_light_system_default() {
    let owner = Owner::new();
    owner.set();

    let theme = ThemeContext::new();
    assert!(!theme.is_dark());
    assert_eq!(theme.preference().source, ThemeSource::SystemDefault);
}

#[test]
fn context_toggle_records_user_choice() {
    let owner = Owner::new();
    owner.set();

    let theme = ThemeContext::new();
    theme.toggle();
    assert!(theme.is_dark());
    assert_eq!(theme.preference(), ThemePreference::user(ThemeMode::Dark));

    assert_eq!(theme.data_theme(), "dark");

    theme.toggle();
    assert!(!theme.is_dark());
    assert_eq!(theme.data_theme(), "light");
}

#[test]
fn copies_share_one_manager() {
    let owner = Owner::new();
    owner.set();

    let theme = ThemeContext::default();
    let other = theme;
    other.toggle();
    assert!(theme.is_dark());
}
