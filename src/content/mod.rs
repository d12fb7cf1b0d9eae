//! Static site content: the project catalog, skill lists, philosophy
//! pillars, and profile copy. Everything here is hand-authored data
//! consumed read-only by the components; nothing is mutated at runtime.

pub mod philosophy;
pub mod projects;
pub mod site;
pub mod skills;

pub use philosophy::{Pillar, PILLARS, QUOTE};
pub use projects::{Category, Project, PROJECTS};
pub use site::{NavLink, SocialLink, NAV_LINKS, SOCIAL_LINKS};
pub use skills::{SkillBar, SoftSkill, DESIGN_SKILLS, SOFT_SKILLS, TECHNICAL_SKILLS};
