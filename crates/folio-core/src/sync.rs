//! The navigation/view synchronizer.
//!
//! [`ViewSync`] is the single state container behind the page. It owns the
//! theme, the section observer, the route coordinator and the navbar flags,
//! and exposes one entry point per event source:
//!
//! | Event                     | Entry point                         |
//! |---------------------------|-------------------------------------|
//! | router location change    | [`ViewSync::on_location_change`]    |
//! | window scroll             | [`ViewSync::on_scroll`]             |
//! | nav entry click           | [`ViewSync::nav_click`]             |
//! | logo click                | [`ViewSync::brand_click`]           |
//! | deferred-scroll timer     | [`ViewSync::poll_deferred`]         |
//! | theme switch              | [`ViewSync::toggle_theme`]          |
//! | main view unmount         | [`ViewSync::leave_main`]            |
//!
//! All mutation goes through these methods, which keeps a single writer.

use crate::config::SiteConfig;
use crate::coordinator::{DeferredPoll, NavCommand, RouteCoordinator, Transition, ViewMode};
use crate::layout::{SectionLayout, Viewport};
use crate::observer::{ObserverToken, ScrollFlags, ScrollTracker, SectionObserver};
use crate::position::{LastPosition, RestorePlan};
use crate::route::RouteContext;
use crate::section::{SectionId, NAV_SECTIONS};
use crate::storage::KeyValueStore;
use crate::theme::{DocumentRoot, ThemePreference, ThemeState, THEME_ATTRIBUTE};

/// Snapshot of the navbar-facing state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Always `None` while a detail view is shown
    pub active_section: Option<SectionId>,
    pub is_scrolled: bool,
    pub menu_open: bool,
}

/// What a scroll sample changed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub flags: ScrollFlags,
    pub active_changed: Option<SectionId>,
}

/// What a location change requires from the host
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationUpdate {
    pub transition: Transition,
    /// Token for scroll callbacks, present while the main view is watched
    pub token: Option<ObserverToken>,
    /// Remembered-section scroll to schedule
    pub restore: Option<RestorePlan>,
}

pub struct ViewSync<S: KeyValueStore> {
    store: S,
    config: SiteConfig,
    theme: ThemeState,
    observer: SectionObserver,
    coordinator: RouteCoordinator,
    tracker: ScrollTracker,
    route: RouteContext,
    flags: ScrollFlags,
    menu_open: bool,
}

impl<S: KeyValueStore> ViewSync<S> {
    /// Build the synchronizer, reading the stored theme.
    pub fn new(store: S, config: SiteConfig) -> Self {
        let theme = ThemeState::initialize(&store);
        Self {
            observer: SectionObserver::new(config.midline_half_band),
            coordinator: RouteCoordinator::new(
                config.header_offset,
                i64::from(config.deferred_scroll_timeout_ms),
            ),
            tracker: ScrollTracker::new(config.scrolled_threshold, config.back_to_top_threshold),
            theme,
            store,
            config,
            route: RouteContext::main(),
            flags: ScrollFlags::default(),
            menu_open: false,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Theme
    // ------------------------------------------------------------------

    pub fn theme(&self) -> ThemePreference {
        self.theme.preference()
    }

    /// Write the current theme to the document without touching storage.
    ///
    /// Called once at startup so the first paint matches the stored value.
    pub fn publish_theme(&self, root: &impl DocumentRoot) {
        root.set_attribute(THEME_ATTRIBUTE, self.theme.preference().as_str());
    }

    pub fn toggle_theme(&mut self, root: &impl DocumentRoot) -> ThemePreference {
        self.theme.toggle(&self.store, root)
    }

    // ------------------------------------------------------------------
    // Navigation state
    // ------------------------------------------------------------------

    pub fn navigation(&self) -> NavigationState {
        NavigationState {
            active_section: self.active_section().cloned(),
            is_scrolled: self.flags.is_scrolled,
            menu_open: self.menu_open,
        }
    }

    /// Active section, suppressed on detail views
    pub fn active_section(&self) -> Option<&SectionId> {
        if self.route.is_detail_view {
            None
        } else {
            self.observer.active()
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.coordinator.mode()
    }

    pub fn scroll_flags(&self) -> ScrollFlags {
        self.flags
    }

    /// Current observer token, `None` while detached
    pub fn observer_token(&self) -> Option<ObserverToken> {
        self.observer.token()
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    // ------------------------------------------------------------------
    // Route transitions
    // ------------------------------------------------------------------

    /// Feed a router location change.
    ///
    /// Leaving the main view detaches the observer before returning, so no
    /// scroll callback can change the active section afterwards. Returning
    /// to it (or mounting it for the first time) re-attaches and restores
    /// the remembered section.
    pub fn on_location_change(
        &mut self,
        path: &str,
        layout: &impl SectionLayout,
    ) -> LocationUpdate {
        let route = RouteContext::from_path(path);
        let transition = self.coordinator.on_location_change(&route);
        self.route = route;
        self.menu_open = false;

        if self.route.is_detail_view {
            self.observer.detach();
            return LocationUpdate {
                transition,
                token: None,
                restore: None,
            };
        }

        let needs_attach = transition == Transition::ReturnedToMain || !self.observer.is_attached();
        if !needs_attach {
            return LocationUpdate {
                transition,
                token: self.observer_token(),
                restore: None,
            };
        }

        let token = self.observer.attach(NAV_SECTIONS, layout);
        let remembered = LastPosition::restore(&self.store);
        self.observer
            .set_active(Some(remembered.clone().unwrap_or_else(SectionId::home)));

        // A pending nav click owns the scroll position on return
        let restore = match remembered {
            Some(target) if self.coordinator.pending().is_none() => Some(RestorePlan {
                target,
                delay_ms: self.config.restore_delay_ms,
            }),
            _ => None,
        };

        tracing::info!(
            path = %self.route.current_path,
            ?transition,
            active = ?self.observer.active().map(SectionId::as_str),
            "Main view attached"
        );

        LocationUpdate {
            transition,
            token: Some(token),
            restore,
        }
    }

    /// The main view is unmounting; stop watching its sections and drop
    /// any deferred target that was waiting for them.
    pub fn leave_main(&mut self) {
        self.observer.detach();
        self.coordinator.cancel_deferred();
    }

    // ------------------------------------------------------------------
    // Scroll
    // ------------------------------------------------------------------

    /// Feed a scroll sample.
    ///
    /// Scroll flags always update. The active section only changes when
    /// `token` is current and `viewport` could be measured; changes are
    /// persisted as the last visited section.
    pub fn on_scroll(
        &mut self,
        token: Option<ObserverToken>,
        layout: &impl SectionLayout,
        scroll_y: f64,
        viewport: Option<Viewport>,
    ) -> ScrollUpdate {
        self.flags = self.tracker.sample(scroll_y);

        let active_changed = match token {
            Some(token) if !self.route.is_detail_view => {
                self.observer.observe(token, layout, viewport)
            }
            _ => None,
        };
        if let Some(id) = &active_changed {
            LastPosition::record(&self.store, id);
        }

        ScrollUpdate {
            flags: self.flags,
            active_changed,
        }
    }

    // ------------------------------------------------------------------
    // Clicks
    // ------------------------------------------------------------------

    pub fn nav_click(
        &mut self,
        target: &SectionId,
        layout: &impl SectionLayout,
        scroll_y: f64,
        now_ms: i64,
    ) -> NavCommand {
        self.menu_open = false;
        self.coordinator.nav_click(target, layout, scroll_y, now_ms)
    }

    pub fn brand_click(&mut self) -> NavCommand {
        self.menu_open = false;
        self.coordinator.brand_click()
    }

    /// Scroll offset for `target`, used to carry out a [`RestorePlan`]
    pub fn scroll_target(
        &self,
        target: &SectionId,
        layout: &impl SectionLayout,
        scroll_y: f64,
    ) -> Option<f64> {
        self.coordinator.scroll_target(target, layout, scroll_y)
    }

    pub fn poll_deferred(
        &mut self,
        layout: &impl SectionLayout,
        scroll_y: f64,
        now_ms: i64,
    ) -> DeferredPoll {
        self.coordinator.poll_deferred(layout, scroll_y, now_ms)
    }

    pub fn has_deferred(&self) -> bool {
        self.coordinator.pending().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PageLayout;
    use crate::storage::{keys, MemoryStore};
    use crate::theme::RecordingRoot;

    fn page() -> PageLayout {
        PageLayout::stacked(
            800.0,
            &[
                ("home", 900.0),
                ("about", 900.0),
                ("skills", 900.0),
                ("experience", 900.0),
                ("projects", 900.0),
                ("blog", 900.0),
            ],
        )
    }

    #[test]
    fn test_first_mount_defaults_to_home() {
        let mut sync = ViewSync::new(MemoryStore::new(), SiteConfig::default());
        let update = sync.on_location_change("/", &page());
        assert!(update.token.is_some());
        assert!(update.restore.is_none());
        assert_eq!(sync.active_section(), Some(&SectionId::home()));
    }

    #[test]
    fn test_first_mount_restores_remembered_section() {
        let store = MemoryStore::with_entries([(keys::LAST_SECTION, "projects")]);
        let mut sync = ViewSync::new(store, SiteConfig::default());
        let update = sync.on_location_change("/", &page());
        assert_eq!(
            update.restore,
            Some(RestorePlan {
                target: SectionId::new("projects"),
                delay_ms: 300
            })
        );
    }

    #[test]
    fn test_repeated_main_location_keeps_token() {
        let mut sync = ViewSync::new(MemoryStore::new(), SiteConfig::default());
        let first = sync.on_location_change("/", &page());
        let second = sync.on_location_change("/", &page());
        assert_eq!(second.transition, Transition::Unchanged);
        assert_eq!(first.token, second.token);
    }

    #[test]
    fn test_scroll_records_last_section() {
        let store = MemoryStore::new();
        let mut sync = ViewSync::new(store.clone(), SiteConfig::default());
        let mut layout = page();
        let token = sync.on_location_change("/", &layout).token;

        layout.scroll_to(1500.0);
        let update = sync.on_scroll(token, &layout, layout.scroll_y(), Some(layout.viewport()));

        assert_eq!(update.active_changed, Some(SectionId::new("skills")));
        assert!(update.flags.is_scrolled);
        assert_eq!(store.get(keys::LAST_SECTION).unwrap().as_deref(), Some("skills"));
    }

    #[test]
    fn test_detail_view_suppresses_active_section() {
        let mut sync = ViewSync::new(MemoryStore::new(), SiteConfig::default());
        sync.on_location_change("/", &page());
        let article = PageLayout::new(800.0);
        let update = sync.on_location_change("/blog/understanding-restful-api", &article);
        assert_eq!(update.transition, Transition::EnteredDetail);
        assert!(update.token.is_none());
        assert!(sync.navigation().active_section.is_none());
        assert!(sync.observer_token().is_none());
    }

    #[test]
    fn test_nav_click_closes_menu() {
        let mut sync = ViewSync::new(MemoryStore::new(), SiteConfig::default());
        sync.on_location_change("/", &page());
        assert!(sync.toggle_menu());
        let cmd = sync.nav_click(&SectionId::new("about"), &page(), 0.0, 0);
        assert_eq!(cmd, NavCommand::ScrollTo { top: 820.0 });
        assert!(!sync.navigation().menu_open);
    }

    #[test]
    fn test_publish_theme_does_not_write_storage() {
        let store = MemoryStore::new();
        let root = RecordingRoot::new();
        let sync = ViewSync::new(store.clone(), SiteConfig::default());
        sync.publish_theme(&root);
        assert_eq!(root.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
        assert!(store.is_empty());
    }
}
