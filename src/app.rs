use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::ObserverToken;
use gloo::events::EventListener;

use crate::browser::{self, DomLayout};
use crate::components::{BackToTop, Navbar};
use crate::context::{use_site, SiteContext};
use crate::pages::{BlogDetail, Home, NotFound};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - every section on one scrollable page
/// - `/blog/:slug` - a single article
/// - anything else - not-found page
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/blog/:slug")]
        BlogDetail { slug: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, the site context and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(SiteContext::new);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Chrome shared by every route: navbar, page outlet, back-to-top.
///
/// Owns the window scroll listener that keeps the navbar flags current on
/// every page. Section tracking is added by [`Home`] with its own token.
#[component]
fn Shell() -> Element {
    let site = use_site();

    use_hook(move || {
        let mut site = site;
        Rc::new(EventListener::new(&gloo::utils::window(), "scroll", move |_| {
            on_window_scroll(&mut site, None);
        }))
    });

    rsx! {
        Navbar {}
        main { class: "page", Outlet::<Route> {} }
        BackToTop {}
    }
}

/// Feed one scroll sample into the synchronizer.
pub fn on_window_scroll(site: &mut SiteContext, token: Option<ObserverToken>) {
    let update = site
        .sync
        .write()
        .on_scroll(token, &DomLayout, browser::scroll_y(), browser::viewport());
    if let Some(section) = update.active_changed {
        tracing::debug!(%section, "Active section");
    }
    site.publish();
}
