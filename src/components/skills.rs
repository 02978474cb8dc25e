use dioxus::prelude::*;
use folio_core::content::SKILLS;
use folio_ui::SectionHeader;

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "section skills-section",
            SectionHeader { title: "My Skills".to_string() }
            div { class: "skills-grid",
                for skill in SKILLS.iter() {
                    div { key: "{skill.name}", class: "skill-card",
                        div { class: "skill-info",
                            h3 { "{skill.name}" }
                            span { class: "skill-level", "{skill.level}%" }
                        }
                        div { class: "skill-bar",
                            div {
                                class: "skill-progress",
                                style: "transform: scaleX({skill.fraction()}); background: {skill.color};",
                            }
                        }
                    }
                }
            }
        }
    }
}
