use dioxus::prelude::*;
use folio_core::content::PROFILE;
use folio_core::{SectionId, Typewriter};
use folio_ui::{Button, ButtonVariant};
use gloo::timers::future::TimeoutFuture;

use crate::browser::{self, DomLayout};
use crate::context::use_site;

/// Landing section with the typed tagline
#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let mut typed = use_signal(|| "");

    // Runs in this component's scope; unmounting cancels it
    use_future(move || async move {
        let tick_ms = site.config().typewriter_tick_ms;
        let mut typewriter = Typewriter::new(PROFILE.tagline);
        while typewriter.tick() {
            TimeoutFuture::new(tick_ms).await;
            typed.set(typewriter.visible());
        }
    });

    let jump = move |id: &'static str| {
        let target = SectionId::new(id);
        let top = site
            .sync
            .read()
            .scroll_target(&target, &DomLayout, browser::scroll_y());
        if let Some(top) = top {
            browser::scroll_to(top);
        }
    };

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-container",
                div { class: "hero-content",
                    h1 { class: "hero-title",
                        "Hello, I'm "
                        span { class: "highlight", "{PROFILE.name}" }
                    }
                    div { class: "typewriter",
                        p { class: "typewriter-text",
                            "{typed}"
                            span { class: "cursor", "|" }
                        }
                    }
                    p { class: "hero-subtitle", "{PROFILE.subtitle}" }
                    div { class: "hero-buttons",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| jump("projects"),
                            "View My Work"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| jump("contact"),
                            "Get In Touch"
                        }
                    }
                }
                div { class: "hero-image",
                    div { class: "profile-image",
                        img { src: "https://picsum.photos/seed/profile/400/400.jpg", alt: "Profile" }
                    }
                }
            }
            button {
                class: "scroll-indicator",
                "aria-label": "Scroll to about",
                onclick: move |_| jump("about"),
                "↓"
            }
        }
    }
}
