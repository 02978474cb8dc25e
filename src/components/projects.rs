use dioxus::prelude::*;
use folio_core::content::{filter_projects, FILTER_ALL, PROJECT_FILTERS};
use folio_ui::{FilterPills, SectionHeader};

#[component]
pub fn Projects() -> Element {
    let mut filter = use_signal(|| FILTER_ALL.to_string());
    let visible = filter_projects(&filter());

    rsx! {
        section { id: "projects", class: "section projects-section",
            SectionHeader { title: "My Projects".to_string() }
            FilterPills {
                options: PROJECT_FILTERS.iter().map(|f| f.to_string()).collect::<Vec<_>>(),
                selected: filter(),
                on_select: move |f| filter.set(f),
                aria_label: "Project filter".to_string(),
            }
            div { class: "projects-grid",
                for project in visible {
                    div { key: "{project.title}", class: "project-card",
                        div { class: "project-image",
                            img { src: "{project.image}", alt: "{project.title}", loading: "lazy" }
                        }
                        div { class: "project-content",
                            h3 { "{project.title}" }
                            p { "{project.description}" }
                            div { class: "project-tags",
                                for tag in project.tags.iter() {
                                    span { class: "tag", "{tag}" }
                                }
                            }
                            div { class: "project-links",
                                a {
                                    href: "{project.github}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "Code"
                                }
                                if let Some(demo) = project.demo {
                                    a {
                                        href: "{demo}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "Live Demo"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
