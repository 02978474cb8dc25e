use dioxus::prelude::*;
use folio_core::content::{blog_categories, filter_posts, FILTER_ALL};
use folio_ui::{FilterPills, SectionHeader};

use crate::app::Route;

/// Article list with category filter; cards link to the detail route
#[component]
pub fn Blog() -> Element {
    let mut category = use_signal(|| FILTER_ALL.to_string());
    let posts = filter_posts(&category());

    rsx! {
        section { id: "blog", class: "section blog-section",
            SectionHeader {
                title: "Latest Articles".to_string(),
                subtitle: "Notes from things I've built and learned".to_string(),
            }
            FilterPills {
                options: blog_categories().into_iter().map(String::from).collect::<Vec<_>>(),
                selected: category(),
                on_select: move |c| category.set(c),
                aria_label: "Blog category".to_string(),
            }
            if posts.is_empty() {
                p { class: "no-posts", "No posts found in this category." }
            } else {
                div { class: "blog-grid",
                    for post in posts {
                        Link {
                            key: "{post.slug}",
                            to: Route::BlogDetail { slug: post.slug.to_string() },
                            class: "blog-card",
                            div { class: "blog-image",
                                img { src: "{post.image}", alt: "{post.title}", loading: "lazy" }
                                span { class: "blog-category", "{post.category}" }
                            }
                            div { class: "blog-content",
                                div { class: "blog-meta",
                                    span { "{post.formatted_date()}" }
                                    span { "{post.read_time}" }
                                }
                                h3 { "{post.title}" }
                                p { "{post.excerpt}" }
                                span { class: "read-more", "Read More →" }
                            }
                        }
                    }
                }
            }
        }
    }
}
