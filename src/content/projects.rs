/// Project categories present in the catalog. Closed set; the filter bar
/// derives its options from whatever appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Architecture,
    Interior,
    Cafe,
}

impl Category {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Architecture => "Architecture",
            Self::Interior => "Interior",
            Self::Cafe => "Cafe",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single portfolio entry. `images` is non-empty only for projects with a
/// swipeable gallery; single-image projects use `primary_image` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub category: Category,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub primary_image: Option<&'static str>,
    pub images: &'static [&'static str],
    pub gradient: &'static str,
    pub year: &'static str,
    pub area: &'static str,
}

impl Project {
    /// Ordered image set shown in the modal. Falls back to the primary
    /// image for single-image projects; may be empty.
    #[must_use]
    pub fn image_set(&self) -> Vec<&'static str> {
        if self.images.is_empty() {
            self.primary_image.into_iter().collect()
        } else {
            self.images.to_vec()
        }
    }

    /// Whether the card should advertise a multi-image gallery.
    #[must_use]
    pub fn has_gallery(&self) -> bool {
        self.images.len() > 1
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        category: Category::Architecture,
        title: "Exterior Design I",
        subtitle: "Architectural Project",
        description: "A contemporary exterior design that draws from clean geometric forms and warm material palettes. The facade composition balances solid and void, creating a dynamic interplay of light and shadow throughout the day.",
        tags: &["Exterior", "Residential", "Contemporary"],
        primary_image: Some("/exterior/1.jpeg"),
        images: &[],
        gradient: "linear-gradient(135deg, #C9737A 0%, #E8B4B8 40%, #F2E4D2 100%)",
        year: "2024",
        area: "—",
    },
    Project {
        id: 2,
        category: Category::Architecture,
        title: "Exterior Design II",
        subtitle: "Architectural Project",
        description: "An architectural exterior study exploring the relationship between built form and landscape. Thoughtful massing and material choices create a structure that feels rooted in its context while projecting a refined, modern character.",
        tags: &["Exterior", "Architecture", "Modern"],
        primary_image: Some("/exterior/2.jpeg"),
        images: &[],
        gradient: "linear-gradient(135deg, #E8B4B8 0%, #F5E6E8 40%, #C9737A 100%)",
        year: "2024",
        area: "—",
    },
    Project {
        id: 3,
        category: Category::Interior,
        title: "Living Space",
        subtitle: "Interior Design Project",
        description: "A refined residential interior that harmonises warmth and elegance. Carefully selected furnishings, layered lighting, and a cohesive material palette create a living space that feels both inviting and sophisticated.",
        tags: &["Residential", "Living Room", "Interior"],
        primary_image: Some("/interior/2.jpg.jpeg"),
        images: &[],
        gradient: "linear-gradient(135deg, #F2E4D2 0%, #E8B4B8 50%, #D4BC9E 100%)",
        year: "2024",
        area: "—",
    },
    Project {
        id: 4,
        category: Category::Interior,
        title: "Front Elevation Interior",
        subtitle: "Interior Design Project",
        description: "An interior elevation study that demonstrates the careful orchestration of spatial proportions, material transitions, and decorative detail. Every surface is considered as part of a unified design language.",
        tags: &["Interior", "Elevation", "Detail"],
        primary_image: Some("/interior/front[1].jpg.jpeg"),
        images: &[],
        gradient: "linear-gradient(135deg, #F5E6E8 0%, #D4BC9E 50%, #E8B4B8 100%)",
        year: "2023",
        area: "—",
    },
    Project {
        id: 5,
        category: Category::Interior,
        title: "Kitchen Design I",
        subtitle: "Kitchen Interior · Residential",
        description: "A kitchen interior designed around the principles of functional elegance. Clean cabinetry lines, premium countertop materials, and considered lighting create a culinary space that is as beautiful as it is practical.",
        tags: &["Kitchen", "Residential", "Functional"],
        primary_image: Some("/interior/kitchen 3.jpg.jpeg"),
        images: &[],
        gradient: "linear-gradient(135deg, #2C2A28 0%, #4A4540 40%, #C9737A 100%)",
        year: "2024",
        area: "—",
    },
    Project {
        id: 6,
        category: Category::Interior,
        title: "Kitchen Design II",
        subtitle: "Kitchen Interior · Residential",
        description: "A second kitchen study exploring a warmer, more textured approach. Natural wood tones, stone surfaces, and integrated appliances come together in a design that celebrates the kitchen as the heart of the home.",
        tags: &["Kitchen", "Warm Tones", "Natural Materials"],
        primary_image: Some("/interior/kitchen33.jpg.jpeg"),
        images: &[],
        gradient: "linear-gradient(135deg, #E8D5BC 0%, #F5E6E8 50%, #C9737A 100%)",
        year: "2023",
        area: "—",
    },
    Project {
        id: 7,
        category: Category::Interior,
        title: "Kitchen Design III",
        subtitle: "Kitchen Interior · Residential",
        description: "A contemporary kitchen that pushes the boundaries of spatial efficiency and aesthetic refinement. Handleless cabinetry, integrated lighting strips, and a monochromatic palette give this kitchen a sleek, timeless quality.",
        tags: &["Kitchen", "Contemporary", "Minimalist"],
        primary_image: Some("/interior/kitchen44.jpg.jpeg"),
        images: &[],
        gradient: "linear-gradient(135deg, #C9737A 0%, #F2E4D2 50%, #E8B4B8 100%)",
        year: "2023",
        area: "—",
    },
    Project {
        id: 8,
        category: Category::Cafe,
        title: "Cafe Design",
        subtitle: "Cafe Interior · Commercial",
        description: "A collection of cafe interior designs exploring warmth, texture, and atmosphere. Each space is crafted to balance rustic charm with contemporary refinement — creating environments that invite lingering, conversation, and connection over coffee.",
        tags: &["Cafe", "Commercial", "Interior"],
        primary_image: Some("/exterior/cafe1.jpeg"),
        images: &[
            "/exterior/cafe1.jpeg",
            "/exterior/cafe-2.jpeg",
            "/exterior/cafe-3.jpeg",
            "/exterior/cafe-4.jpeg",
            "/exterior/cafe-6.jpeg",
        ],
        gradient: "linear-gradient(135deg, #D4BC9E 0%, #F2E4D2 50%, #C9737A 100%)",
        year: "2024",
        area: "—",
    },
];

/// Look up a project by its catalog id.
#[must_use]
pub fn by_id(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
