//! Page objects for the storefront under test.
//!
//! Every page resolves its locators through a shared [`LocatorResolver`]
//! when constructed, so two page objects for the same page share one read of
//! the locator document.
//!
//! [`LocatorResolver`]: crate::LocatorResolver

mod cart;
mod checkout;
mod inventory;
mod login;

pub use cart::{CartLocators, CartPage};
pub use checkout::{CheckoutLocators, CheckoutPage};
pub use inventory::{InventoryLocators, InventoryPage, ADD_TO_CART_LABEL};
pub use login::{
    parse_accepted_usernames, parse_password, LoginLocators, LoginPage, DEFAULT_PASSWORD,
};

use crate::page_id::PageId;
use crate::record::PageLocators;

/// Keys the page object for `page` resolves at construction
#[must_use]
pub const fn required_keys(page: PageId) -> &'static [&'static str] {
    match page {
        PageId::LoginPage => LoginLocators::KEYS,
        PageId::InventoryPage => InventoryLocators::KEYS,
        PageId::CartPage => CartLocators::KEYS,
        PageId::CheckoutPage => CheckoutLocators::KEYS,
    }
}
