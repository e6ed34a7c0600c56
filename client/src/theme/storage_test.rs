#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn storage_key_is_theme() {
    assert_eq!(THEME_STORAGE_KEY, "theme");
}

#[test]
fn local_storage_store_reads_nothing_outside_browser() {
    assert_eq!(LocalStorageStore.load(), Ok(None));
}

#[test]
fn local_storage_store_save_is_noop_outside_browser() {
    assert_eq!(LocalStorageStore.save("dark"), Ok(()));
    assert_eq!(LocalStorageStore.load(), Ok(None));
}

#[test]
fn storage_error_messages_carry_detail() {
    assert_eq!(StorageError::Unavailable.to_string(), "local storage is unavailable");
    assert_eq!(
        StorageError::Write("QuotaExceededError".to_owned()).to_string(),
        "writing stored theme failed: QuotaExceededError"
    );
}
