//! Folio Core Library
//!
//! Navigation and view synchronization for a single-page portfolio with
//! routed detail pages.
//!
//! ## Overview
//!
//! The page is one long scrollable document made of named sections (home,
//! about, skills, ...) plus detail routes such as `/blog/:slug`. This crate
//! owns every decision about that page and none of the rendering:
//!
//! - **Theme**: light/dark preference, persisted and published as a
//!   document attribute
//! - **Active section**: a ranked midline observer that is detached while a
//!   detail page is shown
//! - **Route coordination**: nav clicks scroll in place on the main view and
//!   navigate home with a deferred scroll from a detail view
//! - **Last position**: the last visited section is remembered and restored
//! - **Contact**: honeypot, cooldown and validation in front of a mail relay
//!
//! Browser APIs sit behind small traits ([`KeyValueStore`], [`DocumentRoot`],
//! [`SectionLayout`], [`Clock`], [`MailRelay`]) so everything here runs
//! natively in tests.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{MemoryStore, PageLayout, SiteConfig, ViewSync};
//!
//! let layout = PageLayout::stacked(800.0, &[("home", 900.0), ("about", 900.0)]);
//! let mut sync = ViewSync::new(MemoryStore::new(), SiteConfig::default());
//!
//! let update = sync.on_location_change("/", &layout);
//! assert_eq!(sync.active_section().map(|s| s.as_str()), Some("home"));
//! ```

pub mod clock;
pub mod config;
pub mod contact;
pub mod content;
pub mod coordinator;
pub mod effects;
pub mod emailjs;
pub mod error;
pub mod layout;
pub mod markdown;
pub mod observer;
pub mod position;
pub mod route;
pub mod section;
pub mod storage;
pub mod sync;
pub mod theme;

// Re-exports
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{EmailJsConfig, SiteConfig};
pub use contact::{
    ContactField, ContactForm, ContactMessage, ContactPolicy, MailRelay, SubmitOutcome,
};
pub use coordinator::{DeferredPoll, NavCommand, RouteCoordinator, Transition, ViewMode};
pub use effects::{CounterAnimation, Typewriter};
pub use emailjs::{EmailJsRequest, EMAILJS_ENDPOINT};
pub use error::{FolioError, FolioResult};
pub use layout::{PageLayout, Rect, SectionLayout, Viewport};
pub use markdown::render_markdown;
pub use observer::{ObserverToken, ScrollFlags, ScrollTracker, SectionObserver};
pub use position::{LastPosition, RestorePlan};
pub use route::{blog_path, RouteContext};
pub use section::{main_sections, Section, SectionId, NAV_SECTIONS};
pub use storage::{KeyValueStore, MemoryStore, UnavailableStore};
pub use sync::{LocationUpdate, NavigationState, ScrollUpdate, ViewSync};
pub use theme::{DocumentRoot, RecordingRoot, ThemePreference, ThemeState, THEME_ATTRIBUTE};
