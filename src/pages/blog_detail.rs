//! A single blog article.

use dioxus::prelude::*;
use folio_core::content::find_post;
use folio_core::{blog_path, render_markdown};

use crate::app::Route;
use crate::browser::{self, DomLayout};
use crate::context::use_site;

#[component]
pub fn BlogDetail(slug: String) -> Element {
    let mut site = use_site();

    {
        let slug = slug.clone();
        use_effect(use_reactive!(|(slug,)| {
            let path = blog_path(&slug);
            site.sync.write().on_location_change(&path, &DomLayout);
            site.publish();
            browser::scroll_to(0.0);
        }));
    }

    let Some(post) = find_post(&slug) else {
        tracing::info!(slug = %slug, "Unknown blog slug");
        return rsx! {
            section { class: "detail-section not-found",
                h2 { "Article not found" }
                Link { to: Route::Home {}, class: "back-link", "← Back to Home" }
            }
        };
    };

    let body = render_markdown(post.body);
    let date = post.formatted_date();

    rsx! {
        article { class: "detail-section",
            div { class: "detail-container",
                Link { to: Route::Home {}, class: "back-link", "← Back" }
                h1 { "{post.title}" }
                div { class: "detail-meta",
                    span { class: "detail-category", "{post.category}" }
                    span { class: "detail-date", "{date}" }
                    span { class: "detail-read-time", "{post.read_time}" }
                }
                img { class: "detail-hero", src: "{post.image}", alt: "{post.title}" }
                div { class: "detail-body", dangerous_inner_html: "{body}" }
            }
        }
    }
}
