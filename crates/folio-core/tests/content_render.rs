//! Blog content rendering tests

use folio_core::content::{blog_categories, filter_posts, find_post, BLOG_POSTS, FILTER_ALL};
use folio_core::{blog_path, render_markdown, RouteContext};

/// Every article renders to HTML with its code blocks escaped
#[test]
fn test_every_post_renders() {
    for post in BLOG_POSTS {
        let html = render_markdown(post.body);
        assert!(html.contains("<h2>"), "{} has no headings", post.slug);
        assert!(!html.contains("<?php"), "{} leaked raw PHP", post.slug);
    }
}

/// Every post has a distinct detail route and its slug finds it again
#[test]
fn test_blog_paths_resolve() {
    let mut paths = Vec::new();
    for post in BLOG_POSTS {
        let route = RouteContext::from_path(&blog_path(post.slug));
        assert!(route.is_detail_view);
        assert_eq!(find_post(post.slug), Some(post));
        paths.push(route.current_path);
    }
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), BLOG_POSTS.len());
}

/// Each category filter partitions the posts
#[test]
fn test_categories_partition_posts() {
    let total: usize = blog_categories()
        .into_iter()
        .filter(|c| *c != FILTER_ALL)
        .map(|c| filter_posts(c).len())
        .sum();
    assert_eq!(total, BLOG_POSTS.len());
}
