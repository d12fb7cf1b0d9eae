//! Profile copy and chrome-level data: navigation, hero, about, contact
//! details, footer. Section anchors here are the stable ids the in-page
//! navigation scrolls to.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", anchor: "hero" },
    NavLink { label: "About", anchor: "about" },
    NavLink { label: "Portfolio", anchor: "portfolio" },
    NavLink { label: "Philosophy", anchor: "philosophy" },
    NavLink { label: "Skills", anchor: "skills" },
    NavLink { label: "Contact", anchor: "contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub id: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Instagram", href: "#", id: "social-instagram" },
    SocialLink { label: "LinkedIn", href: "#", id: "social-linkedin" },
    SocialLink { label: "Dribbble", href: "#", id: "social-dribbble" },
];

pub const FULL_NAME: &str = "Ayshath Rizwana M A";
pub const LOGO_INITIALS: &str = "AR";
pub const LOGO_NAME: &str = "Rizwana";
pub const ROLE: &str = "Architectural & Interior Designer";
pub const TAGLINE: &str = "Crafting spaces where elegance meets purpose — where every line tells a story and every room breathes with intention.";

pub const EMAIL: &str = "rizwana@design.com";
pub const PHONE: &str = "+971 00 000 0000";
pub const PHONE_HREF: &str = "tel:+971000000000";
pub const LOCATION: &str = "UAE · Available Worldwide";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub num: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { num: "15+", label: "Projects" },
    Stat { num: "3+", label: "Years Study" },
    Stat { num: "∞", label: "Passion" },
];

/// Quality cards shown in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality {
    pub icon: &'static str,
    pub label: &'static str,
    pub desc: &'static str,
}

pub const QUALITIES: &[Quality] = &[
    Quality {
        icon: "◈",
        label: "Spatial Thinking",
        desc: "Transforming raw space into living narratives",
    },
    Quality {
        icon: "◇",
        label: "Material Mastery",
        desc: "Curating textures that speak to the senses",
    },
    Quality {
        icon: "◉",
        label: "Cultural Sensitivity",
        desc: "Weaving heritage into contemporary design",
    },
    Quality {
        icon: "◈",
        label: "Detail Obsession",
        desc: "Every millimeter considered, every corner refined",
    },
];

pub const FOOTER_SERVICES: &[&str] = &[
    "Architectural Design",
    "Interior Design",
    "Space Planning",
    "Concept Development",
    "3D Visualization",
];

pub const COPYRIGHT_YEAR: &str = "2026";
