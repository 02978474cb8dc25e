//! Navigation bar
//!
//! Brand, one entry per main section, theme switch and the mobile menu
//! toggle. The highlighted entry follows the active section; on a detail
//! page no entry is highlighted.

use dioxus::prelude::*;
use folio_core::content::PROFILE;
use folio_core::{main_sections, Clock, SectionId, SystemClock, ThemePreference};

use crate::browser::{self, DomLayout, HtmlRoot};
use crate::context::{use_site, SiteContext};
use crate::navigation::run_command;

#[component]
pub fn Navbar() -> Element {
    let mut site = use_site();
    let navigator = use_navigator();

    let nav = (site.nav)();
    let dark = (site.theme)() == ThemePreference::Dark;
    let scrolled = (site.flags)().is_scrolled;

    let on_brand = move |_| {
        let command = site.sync.write().brand_click();
        site.publish();
        run_command(command, navigator, site);
    };

    let on_theme = move |_| {
        let next = site.sync.write().toggle_theme(&HtmlRoot);
        tracing::info!(theme = %next, "Theme switched");
        site.publish();
    };

    let on_menu = move |_| {
        site.sync.write().toggle_menu();
        site.publish();
    };

    let nav_class = if scrolled { "nav scrolled" } else { "nav" };
    let links_class = if nav.menu_open {
        "nav-links open"
    } else {
        "nav-links"
    };

    rsx! {
        nav { class: nav_class,
            div { class: "nav-container",
                button { class: "logo", onclick: on_brand, "{PROFILE.name}" }

                div { class: links_class,
                    for section in main_sections() {
                        {
                            let id = section.id.clone();
                            let label = section.label();
                            let is_active = nav.active_section.as_ref() == Some(&section.id);
                            rsx! {
                                button {
                                    key: "{id}",
                                    class: if is_active { "nav-link active" } else { "nav-link" },
                                    "aria-current": if is_active { "true" } else { "false" },
                                    onclick: move |_| nav_click(site, navigator, &id),
                                    "{label}"
                                }
                            }
                        }
                    }
                }

                div { class: "nav-icons",
                    div {
                        class: "theme-switch",
                        role: "switch",
                        "aria-checked": if dark { "true" } else { "false" },
                        onclick: on_theme,
                        span { class: if dark { "" } else { "active-theme" }, "Light" }
                        div { class: if dark { "switch switch-on" } else { "switch" },
                            div { class: "knob" }
                        }
                        span { class: if dark { "active-theme" } else { "" }, "Dark" }
                    }
                    button {
                        class: if nav.menu_open { "menu-toggle open" } else { "menu-toggle" },
                        "aria-label": "Toggle menu",
                        "aria-expanded": if nav.menu_open { "true" } else { "false" },
                        onclick: on_menu,
                        span {}
                        span {}
                        span {}
                    }
                }
            }
        }
    }
}

/// Click on the nav entry for `id`
fn nav_click(mut site: SiteContext, navigator: Navigator, id: &SectionId) {
    let command = site.sync.write().nav_click(
        id,
        &DomLayout,
        browser::scroll_y(),
        SystemClock.now_ms(),
    );
    site.publish();
    run_command(command, navigator, site);
}
