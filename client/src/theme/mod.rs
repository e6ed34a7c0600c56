//! Light/dark theme state.
//!
//! ARCHITECTURE
//! ============
//! - `mode`: theme states and the stored-vs-OS precedence rule.
//! - `storage`, `system`, `root`: browser seams (persisted key, OS signal,
//!   `<html>` marker), inert outside the `hydrate` build.
//! - `manager`: the state machine over those seams.
//! - `prepaint`: inline script applying the marker before first paint.
//! - `context`: Leptos provider exposing the manager to components.

pub mod context;
pub mod manager;
pub mod mode;
pub mod prepaint;
pub mod root;
pub mod storage;
pub mod system;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::{ThemeContext, ThemeProvider, use_theme};
pub use mode::{ThemeMode, ThemePreference, ThemeSource};
