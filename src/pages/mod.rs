//! Page components, one per route.

mod blog_detail;
mod home;
mod not_found;

pub use blog_detail::BlogDetail;
pub use home::Home;
pub use not_found::NotFound;
