//! Reusable UI components

mod button;
mod filter_pills;
mod section_header;

pub use button::*;
pub use filter_pills::*;
pub use section_header::*;
