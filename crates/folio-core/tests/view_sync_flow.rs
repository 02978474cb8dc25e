//! End-to-end navigation flows through ViewSync
//!
//! These tests drive the synchronizer the way the web host does: location
//! changes from the router, scroll samples from the window and clicks from
//! the navbar, against a simulated [`PageLayout`].
//!
//! ## What These Tests Verify
//!
//! - The remembered section survives a trip to a detail page and back
//! - A nav click on a detail page navigates home and scrolls once the
//!   section is mounted
//! - Scroll callbacks registered before leaving the main view are inert
//! - Storage failures never break navigation

use folio_core::storage::keys;
use folio_core::{
    DeferredPoll, KeyValueStore, MemoryStore, NavCommand, PageLayout, SectionId, SiteConfig,
    Transition, UnavailableStore, ViewMode, ViewSync,
};

fn main_page() -> PageLayout {
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

fn detail_page() -> PageLayout {
    // A blog article renders none of the main sections
    PageLayout::new(800.0)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}

fn scroll(sync: &mut ViewSync<MemoryStore>, layout: &mut PageLayout, y: f64) {
    layout.scroll_to(y);
    let token = sync.observer_token();
    sync.on_scroll(token, layout, layout.scroll_y(), Some(layout.viewport()));
}

// ============================================================================
// Last position
// ============================================================================

/// Scroll to skills, open an article, come back: skills is restored.
#[test]
fn test_detail_round_trip_restores_last_section() {
    init_tracing();
    let store = MemoryStore::new();
    let mut sync = ViewSync::new(store.clone(), SiteConfig::default());
    let mut layout = main_page();

    sync.on_location_change("/", &layout);
    // midline 1500 + 400 = 1900, inside skills (1800..2700)
    scroll(&mut sync, &mut layout, 1500.0);
    assert_eq!(sync.active_section(), Some(&SectionId::new("skills")));

    let update = sync.on_location_change("/blog/understanding-restful-api", &detail_page());
    assert_eq!(update.transition, Transition::EnteredDetail);
    assert_eq!(sync.mode(), ViewMode::OnDetail);
    assert!(sync.active_section().is_none());

    let update = sync.on_location_change("/", &main_page());
    assert_eq!(update.transition, Transition::ReturnedToMain);
    let restore = update.restore.expect("remembered section should be restored");
    assert_eq!(restore.target, SectionId::new("skills"));
    assert_eq!(restore.delay_ms, 300);
    assert_eq!(sync.active_section(), Some(&SectionId::new("skills")));

    // The host scrolls to the restored section below the header
    let top = sync.scroll_target(&restore.target, &main_page(), 0.0);
    assert_eq!(top, Some(1720.0));
    assert_eq!(
        store.get(keys::LAST_SECTION).unwrap().as_deref(),
        Some("skills")
    );
}

/// A fresh session starts at home and remembers nothing.
#[test]
fn test_fresh_session_starts_at_home() {
    let store = MemoryStore::new();
    let mut sync = ViewSync::new(store.clone(), SiteConfig::default());
    let update = sync.on_location_change("/", &main_page());

    assert!(update.restore.is_none());
    assert_eq!(sync.active_section(), Some(&SectionId::home()));
    assert!(store.get(keys::LAST_SECTION).unwrap().is_none());
}

/// A stored id that no longer names a section is ignored.
#[test]
fn test_unknown_remembered_section_is_ignored() {
    let store = MemoryStore::with_entries([(keys::LAST_SECTION, "pricing")]);
    let mut sync = ViewSync::new(store, SiteConfig::default());
    let update = sync.on_location_change("/", &main_page());

    assert!(update.restore.is_none());
    assert_eq!(sync.active_section(), Some(&SectionId::home()));
}

// ============================================================================
// Cross-route navigation
// ============================================================================

/// Clicking "Projects" on an article navigates home, then scrolls there.
#[test]
fn test_nav_click_from_detail_defers_scroll() {
    init_tracing();
    let mut sync = ViewSync::new(MemoryStore::new(), SiteConfig::default());
    sync.on_location_change("/", &main_page());
    sync.on_location_change("/blog/getting-started-codeigniter-4", &detail_page());

    let target = SectionId::new("projects");
    let cmd = sync.nav_click(&target, &detail_page(), 0.0, 1_000);
    assert_eq!(
        cmd,
        NavCommand::NavigateHome {
            then: Some(target.clone())
        }
    );
    assert!(sync.has_deferred());

    // Router has not resolved yet
    assert_eq!(
        sync.poll_deferred(&detail_page(), 0.0, 1_050),
        DeferredPoll::Waiting
    );

    // Back on main; the pending click owns the scroll, so no restore
    let update = sync.on_location_change("/", &main_page());
    assert!(update.restore.is_none());

    match sync.poll_deferred(&main_page(), 0.0, 1_100) {
        DeferredPoll::Ready { target: t, top } => {
            assert_eq!(t, target);
            // projects starts at 3600
            assert_eq!(top, 3520.0);
        }
        other => panic!("expected Ready, got {:?}", other),
    }
    assert!(!sync.has_deferred());
    assert_eq!(sync.poll_deferred(&main_page(), 0.0, 1_150), DeferredPoll::Idle);
}

/// If the section never mounts the deferred scroll gives up quietly.
#[test]
fn test_deferred_scroll_expires_without_target() {
    let mut sync = ViewSync::new(MemoryStore::new(), SiteConfig::default());
    sync.on_location_change("/blog/understanding-restful-api", &detail_page());
    sync.nav_click(&SectionId::new("blog"), &detail_page(), 0.0, 0);

    let empty_main = PageLayout::new(800.0);
    sync.on_location_change("/", &empty_main);

    assert_eq!(sync.poll_deferred(&empty_main, 0.0, 100), DeferredPoll::Waiting);
    assert_eq!(
        sync.poll_deferred(&empty_main, 0.0, 1_700),
        DeferredPoll::Expired {
            target: SectionId::new("blog")
        }
    );
    assert!(!sync.has_deferred());
}

/// The logo scrolls to top on main and goes back on a detail page.
#[test]
fn test_brand_click_per_mode() {
    let mut sync = ViewSync::new(MemoryStore::new(), SiteConfig::default());
    sync.on_location_change("/", &main_page());
    assert_eq!(sync.brand_click(), NavCommand::ScrollTo { top: 0.0 });

    sync.on_location_change("/blog/implementing-oauth-social-login", &detail_page());
    assert_eq!(sync.brand_click(), NavCommand::HistoryBack);
}

/// Main-view clicks on the same section always yield the same target.
#[test]
fn test_nav_click_on_main_is_idempotent() {
    let mut sync = ViewSync::new(MemoryStore::new(), SiteConfig::default());
    let layout = main_page();
    sync.on_location_change("/", &layout);

    let about = SectionId::new("about");
    let first = sync.nav_click(&about, &layout, 0.0, 0);
    let second = sync.nav_click(&about, &layout, 0.0, 10);
    assert_eq!(first, NavCommand::ScrollTo { top: 820.0 });
    assert_eq!(first, second);
    assert!(!sync.has_deferred());
}

// ============================================================================
// Observer lifecycle
// ============================================================================

/// A token captured before leaving main cannot change the active section.
#[test]
fn test_stale_scroll_callback_after_detail_is_inert() {
    let store = MemoryStore::new();
    let mut sync = ViewSync::new(store.clone(), SiteConfig::default());
    let mut layout = main_page();
    let stale = sync.on_location_change("/", &layout).token;

    sync.on_location_change("/blog/understanding-restful-api", &detail_page());
    layout.scroll_to(3000.0);
    let update = sync.on_scroll(stale, &layout, layout.scroll_y(), Some(layout.viewport()));

    assert!(update.active_changed.is_none());
    assert!(sync.active_section().is_none());
    assert!(store.get(keys::LAST_SECTION).unwrap().is_none());

    // Navbar flags still follow the window
    assert!(update.flags.is_scrolled);
    assert!(update.flags.show_back_to_top);
}

/// Unmounting the main view detaches before any further sample.
#[test]
fn test_leave_main_detaches() {
    let mut sync = ViewSync::new(MemoryStore::new(), SiteConfig::default());
    let mut layout = main_page();
    let token = sync.on_location_change("/", &layout).token;
    sync.leave_main();

    layout.scroll_to(2000.0);
    let update = sync.on_scroll(token, &layout, layout.scroll_y(), Some(layout.viewport()));
    assert!(update.active_changed.is_none());
    assert!(sync.observer_token().is_none());
}

/// Leaving the main view again before the target mounts drops the
/// deferred scroll.
#[test]
fn test_leave_main_drops_deferred_scroll() {
    let mut sync = ViewSync::new(MemoryStore::new(), SiteConfig::default());
    sync.on_location_change("/blog/getting-started-codeigniter-4", &detail_page());
    sync.nav_click(&SectionId::new("blog"), &detail_page(), 0.0, 0);
    sync.on_location_change("/", &PageLayout::new(800.0));
    assert!(sync.has_deferred());

    sync.leave_main();
    assert!(!sync.has_deferred());
    assert_eq!(
        sync.poll_deferred(&main_page(), 0.0, 100),
        DeferredPoll::Idle
    );
}

/// Exactly one section is active after any scroll on the main view.
#[test]
fn test_single_active_section_while_scrolling() {
    let mut sync = ViewSync::new(MemoryStore::new(), SiteConfig::default());
    let mut layout = main_page();
    sync.on_location_change("/", &layout);

    let mut y = 0.0;
    while y <= layout.max_scroll() {
        scroll(&mut sync, &mut layout, y);
        let nav = sync.navigation();
        assert!(nav.active_section.is_some(), "no active section at y={}", y);
        y += 137.0;
    }
}

// ============================================================================
// Degraded storage
// ============================================================================

/// Blocked storage leaves navigation working from memory.
#[test]
fn test_unavailable_storage_keeps_navigation_working() {
    init_tracing();
    let mut sync = ViewSync::new(UnavailableStore, SiteConfig::default());
    let mut layout = main_page();
    let token = sync.on_location_change("/", &layout).token;

    layout.scroll_to(2800.0);
    let update = sync.on_scroll(token, &layout, layout.scroll_y(), Some(layout.viewport()));
    assert_eq!(update.active_changed, Some(SectionId::new("experience")));

    sync.on_location_change("/blog/understanding-restful-api", &detail_page());
    let update = sync.on_location_change("/", &layout);
    // Nothing could be remembered
    assert!(update.restore.is_none());
    assert_eq!(sync.active_section(), Some(&SectionId::home()));
}
