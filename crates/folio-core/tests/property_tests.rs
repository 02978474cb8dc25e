//! Property-based tests for the view synchronizer
//!
//! Uses proptest to check invariants over arbitrary event sequences.

use futures::executor::block_on;
use proptest::prelude::*;

use folio_core::storage::keys;
use folio_core::{
    Clock, ContactForm, ContactMessage, ContactPolicy, FolioResult, KeyValueStore, MailRelay,
    ManualClock, MemoryStore, NavCommand, PageLayout, RecordingRoot, SectionId, SiteConfig,
    SubmitOutcome, ViewSync, NAV_SECTIONS, THEME_ATTRIBUTE,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Section heights between half and twice the viewport
fn layout_strategy() -> impl Strategy<Value = PageLayout> {
    prop::collection::vec(400.0f64..1600.0, NAV_SECTIONS.len()).prop_map(|heights| {
        let sections: Vec<(&str, f64)> = NAV_SECTIONS.iter().copied().zip(heights).collect();
        PageLayout::stacked(800.0, &sections)
    })
}

fn section_strategy() -> impl Strategy<Value = SectionId> {
    prop::sample::select(NAV_SECTIONS.to_vec()).prop_map(SectionId::new)
}

/// Events the host can feed the synchronizer
#[derive(Debug, Clone)]
enum Event {
    Scroll(f64),
    OpenDetail,
    ReturnHome,
    ToggleTheme,
    ToggleMenu,
}

fn events_strategy(max: usize) -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(
        prop_oneof![
            4 => (0.0f64..1.0).prop_map(Event::Scroll),
            1 => Just(Event::OpenDetail),
            1 => Just(Event::ReturnHome),
            1 => Just(Event::ToggleTheme),
            1 => Just(Event::ToggleMenu),
        ],
        0..max,
    )
}

struct AlwaysOk;

impl MailRelay for AlwaysOk {
    async fn send(&self, _message: &ContactMessage) -> FolioResult<()> {
        Ok(())
    }
}

fn valid_form() -> ContactForm {
    ContactForm {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hello".to_string(),
        honeypot: String::new(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Storage and the document attribute agree after every toggle,
    /// and two toggles return to the start
    #[test]
    fn theme_toggle_is_an_involution(toggles in 1usize..20) {
        let store = MemoryStore::new();
        let root = RecordingRoot::new();
        let mut sync = ViewSync::new(store.clone(), SiteConfig::default());
        let start = sync.theme();

        for i in 0..toggles {
            let now = sync.toggle_theme(&root);
            let stored = store.get(keys::THEME).unwrap();
            prop_assert_eq!(stored.as_deref(), Some(now.as_str()));
            let attribute = root.attribute(THEME_ATTRIBUTE);
            prop_assert_eq!(attribute.as_deref(), Some(now.as_str()));
            prop_assert_eq!(now == start, (i + 1) % 2 == 0);
        }
    }

    /// A reload reads back whatever the last toggle wrote
    #[test]
    fn theme_survives_reload(toggles in 0usize..6) {
        let store = MemoryStore::new();
        let root = RecordingRoot::new();
        let mut sync = ViewSync::new(store.clone(), SiteConfig::default());
        for _ in 0..toggles {
            sync.toggle_theme(&root);
        }
        let reloaded = ViewSync::new(store, SiteConfig::default());
        prop_assert_eq!(reloaded.theme(), sync.theme());
    }

    /// Repeated clicks on one entry on the main view give one target
    #[test]
    fn nav_click_is_idempotent(
        layout in layout_strategy(),
        target in section_strategy(),
        clicks in 1usize..5,
    ) {
        let mut sync = ViewSync::new(MemoryStore::new(), SiteConfig::default());
        sync.on_location_change("/", &layout);

        let first = sync.nav_click(&target, &layout, layout.scroll_y(), 0);
        let is_scroll = matches!(first, NavCommand::ScrollTo { .. });
        prop_assert!(is_scroll);
        for i in 0..clicks {
            let again = sync.nav_click(&target, &layout, layout.scroll_y(), i as i64);
            prop_assert_eq!(&again, &first);
        }
    }

    /// On main at most one section is active; on detail none is
    #[test]
    fn at_most_one_active_section(layout in layout_strategy(), events in events_strategy(40)) {
        let mut layout = layout;
        let mut sync = ViewSync::new(MemoryStore::new(), SiteConfig::default());
        sync.on_location_change("/", &layout);
        let mut on_detail = false;

        for event in events {
            match event {
                Event::Scroll(fraction) => {
                    if !on_detail {
                        layout.scroll_to(layout.max_scroll() * fraction);
                    }
                    let token = sync.observer_token();
                    sync.on_scroll(token, &layout, layout.scroll_y(), Some(layout.viewport()));
                }
                Event::OpenDetail => {
                    let article = PageLayout::new(800.0);
                    sync.on_location_change("/blog/understanding-restful-api", &article);
                    on_detail = true;
                }
                Event::ReturnHome => {
                    sync.on_location_change("/", &layout);
                    on_detail = false;
                }
                Event::ToggleTheme => {
                    sync.toggle_theme(&RecordingRoot::new());
                }
                Event::ToggleMenu => {
                    sync.toggle_menu();
                }
            }

            let nav = sync.navigation();
            if on_detail {
                prop_assert!(nav.active_section.is_none());
            } else {
                let active = nav.active_section.expect("main view always has an active section");
                prop_assert!(NAV_SECTIONS.contains(&active.as_str()));
            }
        }
    }

    /// Whatever the timing, at most one message is sent per window
    #[test]
    fn one_send_per_cooldown_window(gaps in prop::collection::vec(0i64..90_000, 1..12)) {
        let store = MemoryStore::new();
        let clock = ManualClock::new(1_000_000);
        let policy = ContactPolicy::default();
        let mut last_sent: Option<i64> = None;

        for gap in gaps {
            clock.advance(gap);
            let now = clock.now_ms();
            let outcome = block_on(policy.submit(&valid_form(), &store, &AlwaysOk, &clock));
            match outcome {
                SubmitOutcome::Sent => {
                    if let Some(prev) = last_sent {
                        prop_assert!(now - prev >= 60_000);
                    }
                    last_sent = Some(now);
                }
                SubmitOutcome::Throttled { retry_after_secs } => {
                    let prev = last_sent.expect("throttled without a prior send");
                    prop_assert!(now - prev < 60_000);
                    prop_assert!(retry_after_secs >= 1 && retry_after_secs <= 60);
                }
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
        }
    }
}
