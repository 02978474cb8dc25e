use dioxus::prelude::*;

/// Section title with the accent underline
#[component]
pub fn SectionHeader(title: String, #[props(default)] subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "section-header",
            h2 { "{title}" }
            div { class: "underline" }
            if let Some(subtitle) = subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}
