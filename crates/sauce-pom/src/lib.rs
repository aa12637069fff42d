//! sauce-pom: Page Object Model end-to-end suite for the Sauce Demo storefront.
//!
//! Element selectors live outside the code, one YAML document per page
//! (`LoginPageLocator.yaml`, `CartPageLocator.yaml`, ...). Page objects ask a
//! shared [`LocatorResolver`] for the selectors they need; the resolver reads
//! each page's document at most once and answers every later lookup from
//! memory.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  get(page, key)  ┌──────────────────┐  read(page)  ┌──────────────┐
//! │ Page objects │─────────────────►│ LocatorResolver  │─────────────►│ LocatorStore │
//! │ (pages::*)   │                  │ (per-page cache) │              │ (fs / memory)│
//! └──────┬───────┘                  └──────────────────┘              └──────────────┘
//!        │ click / fill / text
//!        ▼
//! ┌──────────────┐
//! │  PageDriver  │  MockDriver | CdpDriver (feature "browser")
//! └──────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use sauce_pom::{LocatorResolver, PageId};
//!
//! let resolver = LocatorResolver::default();
//! let selector = resolver.get(PageId::LoginPage, "usernameInput").unwrap();
//! assert_eq!(selector, "[data-test=\"username\"]");
//! ```

#![warn(missing_docs)]

mod config;
mod document;
mod driver;
mod locator;
mod page_id;
mod page_object;
mod record;
mod resolver;
mod result;
mod store;

/// Browser control over the Chrome DevTools Protocol.
#[cfg(feature = "browser")]
pub mod cdp;

/// Tracing subscriber setup for binaries and test suites
pub mod logging;

/// Page objects for the storefront under test
pub mod pages;

pub use config::{
    SuiteConfig, BASE_URL_ENV, CHROMIUM_PATH_ENV, HEADED_ENV, LOCATOR_DIR_ENV,
};
pub use document::LocatorDocument;
pub use driver::{DriverConfig, MockDriver, PageDriver, DEFAULT_BASE_URL};
pub use locator::{Locator, Selector};
pub use page_id::{PageId, UnknownPage, LOCATOR_FILE_SUFFIX};
pub use page_object::{PageObject, UrlMatcher};
pub use record::PageLocators;
pub use resolver::LocatorResolver;
pub use result::{PomError, PomResult};
pub use store::{default_locator_root, FsLocatorStore, InMemoryLocatorStore, LocatorStore};

#[cfg(feature = "browser")]
pub use cdp::CdpDriver;

/// Prelude for convenient imports
pub mod prelude {
    pub use super::pages::{CartPage, CheckoutPage, InventoryPage, LoginPage};
    pub use super::{
        Locator, LocatorResolver, MockDriver, PageDriver, PageId, PageLocators, PageObject,
        PomError, PomResult, SuiteConfig,
    };

    #[cfg(feature = "browser")]
    pub use super::CdpDriver;
}
