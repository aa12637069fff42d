//! Element handles built from resolved selector strings.
//!
//! A [`Locator`] is what a page object stores after construction. It never
//! resolves anything itself; it only wraps a selector the resolver returned,
//! plus the engine-side refinements (text filter, nested child) that the
//! browser-automation engine understands.

use std::fmt;

/// Prefix that forces XPath interpretation
pub const XPATH_PREFIX: &str = "xpath=";

/// Selector vocabulary understood by the automation engine
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// CSS selector (e.g., "button.primary")
    Css(String),
    /// XPath selector
    XPath(String),
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create an XPath selector
    #[must_use]
    pub fn xpath(selector: impl Into<String>) -> Self {
        Self::XPath(selector.into())
    }

    /// Classify a raw selector string.
    ///
    /// `xpath=` prefixed strings and strings starting with `/` or `(` are
    /// XPath, everything else is CSS. The selector text is otherwise kept as
    /// given.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix(XPATH_PREFIX) {
            Self::XPath(rest.to_string())
        } else if raw.starts_with('/') || raw.starts_with('(') {
            Self::XPath(raw.to_string())
        } else {
            Self::Css(raw.to_string())
        }
    }

    /// Raw selector text without the kind
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Css(s) | Self::XPath(s) => s,
        }
    }

    /// Whether this is an XPath selector
    #[must_use]
    pub const fn is_xpath(&self) -> bool {
        matches!(self, Self::XPath(_))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(s) => f.write_str(s),
            Self::XPath(s) => write!(f, "{XPATH_PREFIX}{s}"),
        }
    }
}

/// An immutable handle to one element (or a set of elements) on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    selector: Selector,
    has_text: Option<String>,
    child: Option<Box<Locator>>,
}

impl Locator {
    /// Create a locator from a resolved selector string
    #[must_use]
    pub fn new(selector: &str) -> Self {
        Self::from_selector(Selector::parse(selector))
    }

    /// Create a locator from a selector
    #[must_use]
    pub const fn from_selector(selector: Selector) -> Self {
        Self {
            selector,
            has_text: None,
            child: None,
        }
    }

    /// Keep only matches whose text contains `text`.
    ///
    /// `page.locator(".inventory_item").with_text("Sauce Labs Backpack")`
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.has_text = Some(text.into());
        self
    }

    /// Scope `child` inside each match of this locator.
    ///
    /// Chained calls nest further down.
    #[must_use]
    pub fn locator(mut self, child: Self) -> Self {
        self.child = Some(Box::new(match self.child.take() {
            Some(existing) => existing.locator(child),
            None => child,
        }));
        self
    }

    /// Selector of the outermost element
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Text filter, if any
    #[must_use]
    pub fn has_text(&self) -> Option<&str> {
        self.has_text.as_deref()
    }

    /// Nested child, if any
    #[must_use]
    pub fn child(&self) -> Option<&Self> {
        self.child.as_deref()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selector)?;
        if let Some(text) = &self.has_text {
            write!(f, " >> has-text={text:?}")?;
        }
        if let Some(child) = &self.child {
            write!(f, " >> {child}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod selector_tests {
        use super::*;

        #[test]
        fn test_css_is_default() {
            assert_eq!(
                Selector::parse("[data-test=\"username\"]"),
                Selector::css("[data-test=\"username\"]")
            );
            assert_eq!(Selector::parse(".title"), Selector::css(".title"));
        }

        #[test]
        fn test_xpath_detection() {
            assert!(Selector::parse("//button[@id='x']").is_xpath());
            assert!(Selector::parse("(//div)[2]").is_xpath());
            assert_eq!(
                Selector::parse("xpath=//span"),
                Selector::xpath("//span")
            );
        }

        #[test]
        fn test_display_round_trips_through_parse() {
            for raw in ["#login-button", "xpath=//a"] {
                assert_eq!(Selector::parse(raw).to_string(), raw);
            }
            assert_eq!(Selector::parse("//a").as_str(), "//a");
        }
    }

    mod locator_tests {
        use super::*;

        #[test]
        fn test_new_keeps_selector_verbatim() {
            let locator = Locator::new(".shopping_cart_badge");
            assert_eq!(locator.selector().as_str(), ".shopping_cart_badge");
            assert!(locator.has_text().is_none());
            assert!(locator.child().is_none());
        }

        #[test]
        fn test_with_text_and_child() {
            let locator = Locator::new(".inventory_item")
                .with_text("Sauce Labs Backpack")
                .locator(Locator::new("button").with_text("Add to cart"));

            assert_eq!(locator.has_text(), Some("Sauce Labs Backpack"));
            let child = locator.child().unwrap();
            assert_eq!(child.selector(), &Selector::css("button"));
            assert_eq!(child.has_text(), Some("Add to cart"));
            assert_eq!(
                locator.to_string(),
                ".inventory_item >> has-text=\"Sauce Labs Backpack\" >> button >> has-text=\"Add to cart\""
            );
        }

        #[test]
        fn test_chained_children_nest() {
            let locator = Locator::new("table")
                .locator(Locator::new("tr"))
                .locator(Locator::new("td"));
            let row = locator.child().unwrap();
            assert_eq!(row.selector().as_str(), "tr");
            assert_eq!(row.child().unwrap().selector().as_str(), "td");
        }
    }
}
