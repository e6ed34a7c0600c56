//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and content cards. Theme-dependent styling
//! comes from the root `dark` class in the stylesheet; only the toggle reads
//! the theme context directly.

pub mod back_link;
pub mod icon;
pub mod page_footer;
pub mod project_card;
pub mod section_card;
pub mod skill_chip;
pub mod theme_toggle;
