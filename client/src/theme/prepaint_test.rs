use super::*;
use crate::theme::manager::ThemeManager;
use crate::theme::mode::ThemePreference;
use crate::theme::storage::{PreferenceStore, StorageError};
use crate::theme::test_support::{FakeScheme, MemoryStore, RecordingRoot};

/// What the guarded `localStorage.getItem` call sees.
#[derive(Clone, Copy, Debug)]
enum StorageState {
    Holds(&'static str),
    Empty,
    Throws,
}

const STORAGE_STATES: [StorageState; 6] = [
    StorageState::Holds("dark"),
    StorageState::Holds("light"),
    StorageState::Holds(""),
    StorageState::Holds("sepia"),
    StorageState::Empty,
    StorageState::Throws,
];

/// Value of `stored` after `read_stored_js`: `getItem` returns null for a
/// missing key and the catch arm nulls it on a throw.
fn stored_after_read(state: StorageState) -> Option<&'static str> {
    match state {
        StorageState::Holds(raw) => Some(raw),
        StorageState::Empty | StorageState::Throws => None,
    }
}

/// JS truthiness of each emitted condition (`null` and `''` are falsy).
fn condition_holds(check: StoredMatch, stored: Option<&str>) -> bool {
    match check {
        StoredMatch::Is(mode) => stored == Some(mode.as_str()),
        StoredMatch::NonEmpty => stored.is_some_and(|raw| !raw.is_empty()),
    }
}

/// Evaluate the branch chain emitted by `resolve_js`.
fn scripted_dark(state: StorageState, os: bool) -> bool {
    let stored = stored_after_read(state);
    STORED_OVERRIDES
        .iter()
        .find(|(check, _)| condition_holds(*check, stored))
        .map_or(os, |(_, mode)| mode.is_dark())
}

fn store_for(state: StorageState) -> MemoryStore {
    match state {
        StorageState::Holds(raw) => MemoryStore::with_value(raw),
        StorageState::Empty => MemoryStore::default(),
        StorageState::Throws => MemoryStore::broken(),
    }
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn script_resolution_matches_resolve_for_every_environment() {
    for state in STORAGE_STATES {
        for os in [true, false] {
            let store = store_for(state);
            let loaded = store.load().unwrap_or(None);
            let expected = ThemePreference::resolve(loaded.as_deref(), os);
            assert_eq!(scripted_dark(state, os), expected.is_dark(), "storage {state:?}, OS dark {os}");
        }
    }
}

#[test]
fn prepaint_marker_equals_mounted_marker() {
    for state in STORAGE_STATES {
        for os in [true, false] {
            let store = store_for(state);
            let scheme = FakeScheme::new(os);
            let root = RecordingRoot::default();
            let mut mounted = ThemeManager::new(store, scheme, root.clone());
            mounted.init();

            let painted = ThemeMode::from_dark(scripted_dark(state, os));
            assert_eq!(root.last(), Some(painted), "storage {state:?}, OS dark {os}");
        }
    }
}

#[test]
fn throwing_storage_paints_from_os_signal() {
    assert!(scripted_dark(StorageState::Throws, true));
    assert!(!scripted_dark(StorageState::Throws, false));

    let store = MemoryStore::broken();
    assert!(matches!(store.load(), Err(StorageError::Read(_))));
}

// =============================================================
// Script structure
// =============================================================

#[test]
fn storage_read_is_the_only_statement_in_its_guard() {
    assert_eq!(
        read_stored_js(),
        "var stored=null;try{stored=localStorage.getItem('theme');}catch(e){stored=null;}"
    );
}

#[test]
fn os_read_has_its_own_guard() {
    assert_eq!(
        read_os_js(),
        "var os=false;try{os=window.matchMedia('(prefers-color-scheme: dark)').matches===true;}catch(e){os=false;}"
    );
}

#[test]
fn branch_chain_is_generated_from_stored_overrides() {
    assert_eq!(resolve_js(), "var dark=os;if(stored==='dark'){dark=true;}else if(stored){dark=false;}");
}

#[test]
fn marker_writes_run_after_both_reads_outside_any_guard() {
    let js = script();
    let body = format!("{}{}{}{}", read_stored_js(), read_os_js(), resolve_js(), mark_js());
    assert!(js.contains(&body));
    assert!(!mark_js().contains("try"));
    assert!(!resolve_js().contains("try"));
    assert_eq!(js.matches("catch(").count(), 2);
}

#[test]
fn script_writes_the_same_marker_as_the_document_root() {
    let js = mark_js();
    assert!(js.contains("root.classList.add('dark')"));
    assert!(js.contains("root.classList.remove('dark')"));
    assert!(js.contains("root.setAttribute('data-theme',dark?'dark':'light')"));
    for mode in [ThemeMode::Dark, ThemeMode::Light] {
        let palette = mode.palette();
        assert!(js.contains(&format!("'{}'", palette.background)));
        assert!(js.contains(&format!("'{}'", palette.foreground)));
    }
}

#[test]
fn script_reapplies_when_document_still_loading() {
    let js = script();
    assert!(js.contains("apply();if(document.readyState==='loading')"));
    assert!(js.contains("addEventListener('DOMContentLoaded',apply)"));
}

#[test]
fn script_is_safe_to_inline() {
    let js = script();
    assert!(js.starts_with("(function(){function apply(){var stored=null;"));
    assert!(js.ends_with("})();"));
    assert!(!js.contains("</script"));
    assert!(!js.contains('\n'));
    assert_eq!(js.matches('{').count(), js.matches('}').count());
}
