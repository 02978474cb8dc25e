use dioxus::prelude::*;

use crate::app::Route;
use crate::browser::DomLayout;
use crate::context::use_site;

/// Any path the router does not know
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let mut site = use_site();
    let path = format!("/{}", segments.join("/"));

    {
        let path = path.clone();
        use_effect(move || {
            site.sync.write().on_location_change(&path, &DomLayout);
            site.publish();
        });
    }

    rsx! {
        section { class: "detail-section not-found",
            h2 { "Page not found" }
            p { class: "not-found-path", "{path}" }
            Link { to: Route::Home {}, class: "back-link", "← Back to Home" }
        }
    }
}
