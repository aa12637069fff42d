//! Page identifier registry.
//!
//! The closed set of screens the suite knows about. Each identifier is both
//! the resolver's cache key and the stem of its locator document's file name,
//! so an unknown page name can only enter through [`PageId::from_str`], which
//! rejects it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Suffix shared by every locator document file name
pub const LOCATOR_FILE_SUFFIX: &str = "Locator.yaml";

/// One screen of the application under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PageId {
    /// Sign-in form
    LoginPage,
    /// Product listing
    InventoryPage,
    /// Shopping cart
    CartPage,
    /// Customer information, overview and completion steps
    CheckoutPage,
}

impl PageId {
    /// Every registered page, in journey order
    pub const ALL: [Self; 4] = [
        Self::LoginPage,
        Self::InventoryPage,
        Self::CartPage,
        Self::CheckoutPage,
    ];

    /// Identifier as used in file names and diagnostics
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoginPage => "LoginPage",
            Self::InventoryPage => "InventoryPage",
            Self::CartPage => "CartPage",
            Self::CheckoutPage => "CheckoutPage",
        }
    }

    /// File name of this page's locator document, `{page}Locator.yaml`
    #[must_use]
    pub fn locator_file_name(self) -> String {
        format!("{}{LOCATOR_FILE_SUFFIX}", self.as_str())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name that is not a member of the registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown page '{0}', expected one of: LoginPage, InventoryPage, CartPage, CheckoutPage")]
pub struct UnknownPage(pub String);

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_follow_convention() {
        assert_eq!(
            PageId::LoginPage.locator_file_name(),
            "LoginPageLocator.yaml"
        );
        assert_eq!(
            PageId::CheckoutPage.locator_file_name(),
            "CheckoutPageLocator.yaml"
        );
    }

    #[test]
    fn test_round_trip_through_str() {
        for page in PageId::ALL {
            assert_eq!(page.as_str().parse::<PageId>(), Ok(page));
            assert_eq!(page.to_string(), page.as_str());
        }
    }

    #[test]
    fn test_rejects_unknown_and_misspelled() {
        assert!("LogInPage".parse::<PageId>().is_err());
        assert!("loginpage".parse::<PageId>().is_err());
        assert!("".parse::<PageId>().is_err());
        let err = "Cart".parse::<PageId>().unwrap_err();
        assert!(err.to_string().contains("Cart"));
    }

    #[test]
    fn test_all_is_distinct() {
        let mut names: Vec<_> = PageId::ALL.iter().map(|p| p.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PageId::ALL.len());
    }
}
