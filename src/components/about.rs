use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::content::PROFILE;
use folio_core::CounterAnimation;
use folio_ui::SectionHeader;
use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;

use crate::browser;

/// Share of the section that must be on screen to start the counter
const IN_VIEW_THRESHOLD: f64 = 0.2;

#[component]
pub fn About() -> Element {
    let in_view = use_signal(|| false);
    let mut counter = use_signal(|| CounterAnimation::new(PROFILE.years_experience));

    // One-shot visibility trigger, checked on mount and on every scroll
    use_hook(move || {
        Rc::new(EventListener::new(&gloo::utils::window(), "scroll", move |_| {
            check_in_view(in_view)
        }))
    });
    use_effect(move || check_in_view(in_view));

    use_effect(move || {
        if in_view() && counter.with_mut(CounterAnimation::start) {
            spawn(async move {
                TimeoutFuture::new(CounterAnimation::START_DELAY_MS).await;
                while counter.with_mut(CounterAnimation::tick) {
                    TimeoutFuture::new(CounterAnimation::STEP_MS).await;
                }
            });
        }
    });

    let years = counter.read().value();
    let visible_class = if in_view() {
        "section about-section visible"
    } else {
        "section about-section"
    };

    rsx! {
        section { id: "about", class: visible_class,
            SectionHeader { title: "About Me".to_string() }
            div { class: "about-content",
                div { class: "about-text",
                    for paragraph in PROFILE.about.iter() {
                        p { dangerous_inner_html: emphasis(paragraph) }
                    }
                }
                div { class: "about-stats",
                    div { class: "stat-card",
                        h3 { "{years}+" }
                        p { "Years Experience" }
                    }
                    for (value, label) in PROFILE.stats.iter() {
                        div { class: "stat-card",
                            h3 { "{value}" }
                            p { "{label}" }
                        }
                    }
                }
            }
        }
    }
}

fn check_in_view(mut in_view: Signal<bool>) {
    if !*in_view.peek()
        && browser::visible_fraction("about").is_some_and(|f| f >= IN_VIEW_THRESHOLD)
    {
        in_view.set(true);
    }
}

/// `**x**` to `<strong>x</strong>` for the static about copy
fn emphasis(text: &str) -> String {
    folio_core::render_markdown(text)
        .trim()
        .trim_start_matches("<p>")
        .trim_end_matches("</p>")
        .to_string()
}
