//! Site context provider.
//!
//! The [`ViewSync`] lives in a non-reactive `CopyValue`; components mutate it
//! from event handlers and then call [`SiteContext::publish`], which copies
//! the navbar-facing state into reactive signals only when it changed.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(SiteContext::new);
//!
//! // In child components
//! let site = use_site();
//! ```

use dioxus::prelude::*;
use folio_core::{
    EmailJsConfig, NavigationState, ScrollFlags, SiteConfig, ThemePreference, ViewSync,
};

use crate::browser::{BrowserStore, HtmlRoot};

pub type SharedSync = CopyValue<ViewSync<BrowserStore>>;

/// Configuration baked in at build time.
///
/// `FOLIO_SITE_CONFIG` may hold a JSON override of any [`SiteConfig`] field.
/// EmailJS keys come from `FOLIO_EMAILJS_SERVICE_ID`,
/// `FOLIO_EMAILJS_TEMPLATE_ID` and `FOLIO_EMAILJS_PUBLIC_KEY`.
pub fn site_config() -> SiteConfig {
    let base = match option_env!("FOLIO_SITE_CONFIG") {
        Some(json) => SiteConfig::from_json(json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring FOLIO_SITE_CONFIG");
            SiteConfig::default()
        }),
        None => SiteConfig::default(),
    };
    let emailjs = EmailJsConfig::from_parts(
        option_env!("FOLIO_EMAILJS_SERVICE_ID"),
        option_env!("FOLIO_EMAILJS_TEMPLATE_ID"),
        option_env!("FOLIO_EMAILJS_PUBLIC_KEY"),
    )
    .or_else(|| base.emailjs.clone());
    if emailjs.is_none() {
        tracing::warn!("EmailJS keys not set at build time; contact form cannot deliver");
    }
    base.with_emailjs(emailjs)
}

#[derive(Clone, Copy)]
pub struct SiteContext {
    pub sync: SharedSync,
    pub nav: Signal<NavigationState>,
    pub flags: Signal<ScrollFlags>,
    pub theme: Signal<ThemePreference>,
}

impl SiteContext {
    /// Build the synchronizer and paint the stored theme.
    pub fn new() -> Self {
        let sync = ViewSync::new(BrowserStore, site_config());
        sync.publish_theme(&HtmlRoot);
        let nav = sync.navigation();
        let flags = sync.scroll_flags();
        let theme = sync.theme();
        Self {
            sync: CopyValue::new(sync),
            nav: Signal::new(nav),
            flags: Signal::new(flags),
            theme: Signal::new(theme),
        }
    }

    pub fn config(&self) -> SiteConfig {
        self.sync.read().config().clone()
    }

    /// Push changed synchronizer state into the reactive signals.
    pub fn publish(&mut self) {
        let (nav, flags, theme) = {
            let sync = self.sync.read();
            (sync.navigation(), sync.scroll_flags(), sync.theme())
        };
        if *self.nav.peek() != nav {
            self.nav.set(nav);
        }
        if *self.flags.peek() != flags {
            self.flags.set(flags);
        }
        if *self.theme.peek() != theme {
            self.theme.set(theme);
        }
    }
}

/// Hook to access the site context.
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>()
}
