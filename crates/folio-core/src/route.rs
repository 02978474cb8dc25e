//! Router location as seen by the synchronizer.
//!
//! Route matching itself belongs to the router; this module only classifies
//! a path as the main (section-scrolling) view or a detail view.

use serde::{Deserialize, Serialize};

/// Path prefix of blog detail pages
pub const BLOG_PREFIX: &str = "/blog/";

/// Derived from the router on every location change, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteContext {
    pub current_path: String,
    pub is_detail_view: bool,
}

impl RouteContext {
    /// Classify a router path. Query strings and fragments are ignored.
    ///
    /// Only the root path is the main view; every other path (blog posts,
    /// unknown pages) has no section anchors.
    pub fn from_path(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let normalized = if path.is_empty() { "/" } else { path };
        Self {
            current_path: normalized.to_string(),
            is_detail_view: normalized != "/",
        }
    }

    pub fn main() -> Self {
        Self::from_path("/")
    }
}

impl Default for RouteContext {
    fn default() -> Self {
        Self::main()
    }
}

/// Blog detail path for a post slug
pub fn blog_path(slug: &str) -> String {
    format!("{}{}", BLOG_PREFIX, slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_main() {
        assert!(!RouteContext::from_path("/").is_detail_view);
        assert!(!RouteContext::from_path("").is_detail_view);
        assert!(!RouteContext::from_path("/?ref=cv").is_detail_view);
    }

    #[test]
    fn test_blog_path_is_detail() {
        let ctx = RouteContext::from_path("/blog/understanding-restful-api");
        assert!(ctx.is_detail_view);
        assert_eq!(ctx.current_path, "/blog/understanding-restful-api");
    }

    #[test]
    fn test_unknown_path_is_detail() {
        assert!(RouteContext::from_path("/nowhere").is_detail_view);
        assert!(RouteContext::from_path("/blog/").is_detail_view);
    }

    #[test]
    fn test_blog_path_strips_query() {
        let path = format!("{}?from=home", blog_path("getting-started-native-php"));
        let ctx = RouteContext::from_path(&path);
        assert!(ctx.is_detail_view);
        assert_eq!(ctx.current_path, "/blog/getting-started-native-php");
    }
}
