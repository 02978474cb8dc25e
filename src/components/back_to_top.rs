use dioxus::prelude::*;
use folio_ui::{Button, ButtonVariant};

use crate::browser;
use crate::context::use_site;

/// Floating button shown once the page is scrolled past the threshold
#[component]
pub fn BackToTop() -> Element {
    let site = use_site();

    if !(site.flags)().show_back_to_top {
        return rsx! {};
    }

    rsx! {
        Button {
            variant: ButtonVariant::Icon,
            class: "back-to-top".to_string(),
            aria_label: "Back to top".to_string(),
            onclick: move |_| browser::scroll_to(0.0),
            "↑"
        }
    }
}
