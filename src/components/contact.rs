//! Contact section and page footer
//!
//! The form carries a visually hidden honeypot input. Submissions go
//! through [`ContactPolicy`]; the outcome is reported with a blocking alert
//! and the inputs are cleared only after a successful send.

use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::content::PROFILE;
use folio_core::{ContactForm, ContactPolicy, SystemClock};
use folio_ui::{Button, ButtonVariant};

use crate::browser::{self, BrowserStore, EmailJsRelay};
use crate::context::use_site;

#[component]
pub fn Contact() -> Element {
    let site = use_site();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut honeypot = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }
        let form = ContactForm {
            name: name(),
            email: email(),
            message: message(),
            honeypot: honeypot(),
        };
        let config = site.config();
        let policy = ContactPolicy::new(config.contact_cooldown_ms);
        let relay = EmailJsRelay::new(config.emailjs);

        sending.set(true);
        spawn(async move {
            let outcome = policy
                .submit(&form, &BrowserStore, &relay, &SystemClock)
                .await;
            if let Some(text) = outcome.user_message() {
                browser::notify(&text);
            }
            if outcome.should_reset_form() {
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            sending.set(false);
        });
    };

    let year = chrono::Local::now().year();

    rsx! {
        footer { id: "contact", class: "footer",
            div { class: "footer-content",
                div { class: "footer-info",
                    h2 { "Get In Touch" }
                    p { "Feel free to reach out to me for any questions or opportunities." }
                    div { class: "contact-info",
                        div { class: "contact-item",
                            span { class: "contact-label", "Email" }
                            a { href: "mailto:{PROFILE.email}", "{PROFILE.email}" }
                        }
                        div { class: "contact-item",
                            span { class: "contact-label", "Phone" }
                            span { "{PROFILE.phone}" }
                        }
                        div { class: "contact-item",
                            span { class: "contact-label", "Location" }
                            span { "{PROFILE.location}" }
                        }
                    }
                }

                div { class: "footer-form",
                    form { onsubmit: on_submit,
                        div { class: "form-group",
                            input {
                                r#type: "text",
                                placeholder: "Your Name",
                                value: "{name}",
                                oninput: move |e| name.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            input {
                                r#type: "email",
                                placeholder: "Your Email",
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                            }
                        }
                        div { class: "form-group",
                            textarea {
                                placeholder: "Your Message",
                                rows: "5",
                                value: "{message}",
                                oninput: move |e| message.set(e.value()),
                            }
                        }
                        // Hidden from people, visible to naive bots
                        div { class: "form-honeypot", "aria-hidden": "true",
                            input {
                                r#type: "text",
                                name: "website",
                                tabindex: "-1",
                                autocomplete: "off",
                                value: "{honeypot}",
                                oninput: move |e| honeypot.set(e.value()),
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit".to_string(),
                            disabled: sending(),
                            if sending() { "Sending..." } else { "Send Message" }
                        }
                    }
                }
            }

            div { class: "footer-bottom",
                div { class: "social-links",
                    for link in PROFILE.socials.iter() {
                        a {
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "{link.label}",
                            "{link.label}"
                        }
                    }
                }
                p { "© {year} {PROFILE.name}. All rights reserved." }
            }
        }
    }
}
