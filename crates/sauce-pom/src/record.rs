//! Typed locator records.
//!
//! A page object declares the locators it needs once, as a struct of named
//! selector fields bound to document keys. Construction resolves every field
//! through the resolver, and [`PageLocators::validate`] lets tooling check a
//! document against the declaration without constructing anything.

use crate::document::LocatorDocument;
use crate::page_id::PageId;
use crate::resolver::LocatorResolver;
use crate::result::PomResult;
use crate::store::LocatorStore;

/// The full set of selectors one page object resolves at construction.
pub trait PageLocators: Sized {
    /// Page whose document backs this record
    const PAGE: PageId;

    /// Document keys, one per field, in declaration order
    const KEYS: &'static [&'static str];

    /// Resolve every field through `resolver`.
    ///
    /// # Errors
    ///
    /// The first resolver error encountered, in declaration order.
    fn resolve<S: LocatorStore>(resolver: &LocatorResolver<S>) -> PomResult<Self>;

    /// Declared keys absent from `document`
    #[must_use]
    fn validate(document: &LocatorDocument) -> Vec<&'static str> {
        document.missing(Self::KEYS)
    }
}

/// Declare a [`PageLocators`] record.
///
/// ```
/// sauce_pom::page_locators! {
///     /// Locators for the cart.
///     pub struct CartLocators for CartPage {
///         title => "title",
///         checkout_button => "checkoutButton",
///     }
/// }
///
/// use sauce_pom::PageLocators;
/// assert_eq!(CartLocators::KEYS, &["title", "checkoutButton"]);
/// ```
#[macro_export]
macro_rules! page_locators {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident for $page:ident {
            $( $field:ident => $key:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $name {
            $(
                #[doc = concat!("Selector resolved from `", $key, "`")]
                pub $field: ::std::string::String,
            )+
        }

        impl $crate::PageLocators for $name {
            const PAGE: $crate::PageId = $crate::PageId::$page;
            const KEYS: &'static [&'static str] = &[$($key),+];

            fn resolve<S: $crate::LocatorStore>(
                resolver: &$crate::LocatorResolver<S>,
            ) -> $crate::PomResult<Self> {
                Ok(Self {
                    $( $field: resolver.get(Self::PAGE, $key)?, )+
                })
            }
        }
    };
}
