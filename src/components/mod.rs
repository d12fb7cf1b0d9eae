mod about;
mod contact;
mod footer;
mod hero;
mod navbar;
mod philosophy;
mod portfolio;
mod project_modal;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use philosophy::Philosophy;
pub use portfolio::Portfolio;
pub use project_modal::ProjectModal;
pub use skills::Skills;
