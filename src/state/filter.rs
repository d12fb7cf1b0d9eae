//! Category filtering for the portfolio grid.

use crate::content::projects::{Category, Project, PROJECTS};

/// The active portfolio filter. Transitions are synchronous and total:
/// selecting a filter button simply replaces the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Category(c) => c.label(),
        }
    }

    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => project.category == c,
        }
    }

    /// `All` plus the distinct categories present in the catalog, in
    /// first-appearance order. Derived rather than hard-coded so the filter
    /// bar never offers a button with an empty result set.
    #[must_use]
    pub fn options() -> Vec<Self> {
        let mut options = vec![Self::All];
        for project in PROJECTS {
            let f = Self::Category(project.category);
            if !options.contains(&f) {
                options.push(f);
            }
        }
        options
    }
}

/// Projects passing the filter, in catalog order. Equals the full catalog
/// when the filter is [`Filter::All`].
#[must_use]
pub fn visible_projects(filter: Filter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.matches(p)).collect()
}
