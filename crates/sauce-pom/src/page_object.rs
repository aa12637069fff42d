//! Page Object Model support.
//!
//! A page object resolves all of its locators when it is constructed and
//! holds them as immutable [`Locator`](crate::Locator) handles. Action and
//! query methods only use those handles; they never go back to the resolver.

use crate::page_id::PageId;

/// A screen of the application under test.
pub trait PageObject {
    /// Registry identifier whose locator document backs this page
    const PAGE: PageId;

    /// URL path of this page (e.g., "/", "/cart.html")
    fn url_pattern(&self) -> &str;

    /// Whether `url` belongs to this page
    fn is_current(&self, url: &str) -> bool {
        UrlMatcher::new(self.url_pattern()).matches(url)
    }

    /// Get the page name for logging/debugging
    fn page_name(&self) -> &'static str {
        Self::PAGE.as_str()
    }
}

/// Matches URLs whose path equals a fixed page path.
///
/// Scheme, host, query and fragment are ignored, as are empty path segments,
/// so `/` matches both `https://host` and `https://host/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMatcher {
    segments: Vec<String>,
}

/// Non-empty path segments of `url`
fn path_segments(url: &str) -> impl Iterator<Item = &str> {
    let path = match url.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |i| &rest[i..]),
        None => url,
    };
    path.split(['?', '#'])
        .next()
        .unwrap_or_default()
        .split('/')
        .filter(|s| !s.is_empty())
}

impl UrlMatcher {
    /// Matcher for the page path `path` (e.g. `/cart.html`)
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            segments: path_segments(path).map(str::to_string).collect(),
        }
    }

    /// Whether the path of `url` is this page's path
    #[must_use]
    pub fn matches(&self, url: &str) -> bool {
        path_segments(url).eq(self.segments.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod url_matcher_tests {
        use super::*;

        #[test]
        fn test_matches_path_of_full_url() {
            let matcher = UrlMatcher::new("/inventory.html");
            assert!(matcher.matches("https://www.saucedemo.com/inventory.html"));
            assert!(matcher.matches("/inventory.html?sort=az"));
            assert!(matcher.matches("https://www.saucedemo.com/inventory.html#top"));
            assert!(!matcher.matches("https://www.saucedemo.com/cart.html"));
        }

        #[test]
        fn test_root_path() {
            let matcher = UrlMatcher::new("/");
            assert!(matcher.matches("https://www.saucedemo.com/"));
            assert!(matcher.matches("https://www.saucedemo.com"));
            assert!(matcher.matches("https://www.saucedemo.com/?redirect=1"));
            assert!(!matcher.matches("https://www.saucedemo.com/inventory.html"));
        }

        #[test]
        fn test_extra_or_missing_segments_do_not_match() {
            let matcher = UrlMatcher::new("/shop/cart.html");
            assert!(matcher.matches("http://localhost:3000/shop/cart.html"));
            assert!(!matcher.matches("http://localhost:3000/cart.html"));
            assert!(!matcher.matches("http://localhost:3000/shop/cart.html/extra"));
        }

        #[test]
        fn test_host_is_not_part_of_path() {
            assert!(!UrlMatcher::new("/cart.html").matches("https://cart.html"));
        }
    }

    mod page_object_trait_tests {
        use super::*;

        struct TestPage;

        impl PageObject for TestPage {
            const PAGE: PageId = PageId::CartPage;

            fn url_pattern(&self) -> &str {
                "/cart.html"
            }
        }

        #[test]
        fn test_defaults() {
            let page = TestPage;
            assert_eq!(page.page_name(), "CartPage");
            assert!(page.is_current("https://www.saucedemo.com/cart.html"));
            assert!(!page.is_current("https://www.saucedemo.com/"));
        }
    }
}
