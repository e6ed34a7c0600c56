//! Static site content.
//!
//! DESIGN
//! ======
//! Everything the pages render is compiled in as `const` data so the site
//! needs no data fetching; pages only decide layout.

pub mod icon;
pub mod profile;
pub mod projects;
pub mod skills;


pub use icon::{Glyph, Icon};
pub use profile::{EDUCATION, EXPERIENCE, PROFILE, Education, Experience, Profile};
pub use projects::{PROJECTS, Project, ProjectKind, display_domain};
pub use skills::{CATALOGUE, HIGHLIGHTS, HighlightGroup, Skill, SkillCategory};
