//! Folio UI Components
//!
//! Presentational Dioxus components shared by the portfolio pages. They hold
//! no navigation state; callers pass values in and receive events back.
//!
//! Colors come from CSS custom properties on `[data-theme]`, so every
//! component follows the active theme without props.

pub mod components;

pub use components::*;
