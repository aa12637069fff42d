//! Command handlers.
//!
//! Each handler gathers a serializable report; rendering lives in
//! [`output`](crate::output).

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use sauce_pom::pages::required_keys;
use sauce_pom::{LocatorResolver, LocatorStore, PageId, PomResult};

/// One registry entry as listed by `saucepom pages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageListing {
    /// Page identifier
    pub page: PageId,
    /// Document file name
    pub file: String,
    /// Resolved document location
    pub path: PathBuf,
    /// Whether the document exists
    pub exists: bool,
}

/// List every registry member against `store`
pub fn list_pages<S: LocatorStore>(store: &S) -> Vec<PageListing> {
    PageId::ALL
        .into_iter()
        .map(|page| {
            let path = store.location(page);
            PageListing {
                page,
                file: page.locator_file_name(),
                exists: path.is_file(),
                path,
            }
        })
        .collect()
}

/// A single resolved selector, as printed by `saucepom show PAGE KEY`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorReport {
    /// Page identifier
    pub page: PageId,
    /// Locator key
    pub key: String,
    /// Resolved selector
    pub selector: String,
}

/// Resolve one selector
pub fn show_selector<S: LocatorStore>(
    resolver: &LocatorResolver<S>,
    page: PageId,
    key: &str,
) -> PomResult<SelectorReport> {
    Ok(SelectorReport {
        page,
        key: key.to_string(),
        selector: resolver.get(page, key)?,
    })
}

/// Outcome of validating one page's document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum CheckOutcome {
    /// Loaded, and every required key is present
    Ok {
        /// Number of locators in the document
        locators: usize,
    },
    /// Loaded, but required keys are absent
    MissingKeys {
        /// Required keys the document lacks
        missing: Vec<String>,
    },
    /// The document could not be loaded
    Unloadable {
        /// Resolver error message
        error: String,
    },
}

/// Validation result for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Page identifier
    pub page: PageId,
    /// Document location
    pub path: PathBuf,
    /// Result
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

impl CheckReport {
    /// Whether this page passed
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Ok { .. })
    }
}

/// Load each page's document and compare it with the keys its page object
/// resolves
pub fn check_pages<S: LocatorStore>(
    resolver: &LocatorResolver<S>,
    pages: &[PageId],
) -> Vec<CheckReport> {
    pages
        .iter()
        .map(|&page| {
            let path = resolver.store().location(page);
            let outcome = match resolver.load(page) {
                Err(e) => CheckOutcome::Unloadable {
                    error: e.to_string(),
                },
                Ok(document) => {
                    let missing = document.missing(required_keys(page));
                    if missing.is_empty() {
                        CheckOutcome::Ok {
                            locators: document.len(),
                        }
                    } else {
                        CheckOutcome::MissingKeys {
                            missing: missing.into_iter().map(str::to_string).collect(),
                        }
                    }
                }
            };
            debug!(%page, ?outcome, "checked locator document");
            CheckReport {
                page,
                path,
                outcome,
            }
        })
        .collect()
}
