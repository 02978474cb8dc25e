use dioxus::prelude::*;
use folio_core::content::TIMELINE;
use folio_ui::SectionHeader;

/// Work experience and certificates on one timeline
#[component]
pub fn Experience() -> Element {
    rsx! {
        section { id: "experience", class: "section experience-section",
            SectionHeader { title: "Experience & Certificates".to_string() }
            div { class: "timeline",
                for entry in TIMELINE.iter() {
                    div { key: "{entry.title}", class: "timeline-item {entry.kind.class()}",
                        div { class: "timeline-dot" }
                        div { class: "timeline-content",
                            span { class: "timeline-badge", "{entry.kind.badge()}" }
                            h3 { "{entry.title}" }
                            h4 { "{entry.organisation}" }
                            span { class: "timeline-date", "{entry.date}" }
                            p { "{entry.description}" }
                        }
                    }
                }
            }
        }
    }
}
