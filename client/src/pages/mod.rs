//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route layout and delegates rendering details to
//! `components`.

pub mod profile;
pub mod projects;
pub mod skills;
