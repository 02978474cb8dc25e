//! Page sections and site chrome.

mod about;
mod back_to_top;
mod blog;
mod contact;
mod experience;
mod hero;
mod navbar;
mod projects;
mod skills;

pub use about::About;
pub use back_to_top::BackToTop;
pub use blog::Blog;
pub use contact::Contact;
pub use experience::Experience;
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::Projects;
pub use skills::Skills;
