//! Result and error types for sauce-pom.

use std::path::PathBuf;

use thiserror::Error;

use crate::page_id::PageId;

/// Result type for sauce-pom operations
pub type PomResult<T> = Result<T, PomError>;

/// Errors that can occur while resolving locators or driving pages
#[derive(Debug, Error)]
pub enum PomError {
    /// No locator document exists for the page
    #[error("Locator file not found for {page}: {}", path.display())]
    ConfigurationMissing {
        /// Page whose document was requested
        page: PageId,
        /// Resolved location of the document
        path: PathBuf,
    },

    /// The locator document exists but could not be read or parsed
    #[error("Failed to load locators for {page} from {}: {message}", path.display())]
    ConfigurationInvalid {
        /// Page whose document was requested
        page: PageId,
        /// Resolved location of the document
        path: PathBuf,
        /// Underlying cause
        message: String,
    },

    /// The document loaded but lacks the requested key
    #[error("Locator not found for Page: {page}, Key: {key}")]
    LocatorKeyMissing {
        /// Page whose document was searched
        page: PageId,
        /// Requested locator name
        key: String,
    },

    /// An empty locator name was requested
    #[error("Empty locator key requested for {page}")]
    EmptyLocatorKey {
        /// Page the lookup targeted
        page: PageId,
    },

    /// The browser-automation engine reported a failure
    #[error("Driver error: {message}")]
    Driver {
        /// Error message
        message: String,
    },

    /// No element matched a locator
    #[error("No element matches {selector}")]
    ElementNotFound {
        /// Rendered selector
        selector: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// Operation timed out
    #[error("Operation timed out after {ms}ms")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
    },
}

impl PomError {
    /// Create a driver error
    #[must_use]
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver {
            message: message.into(),
        }
    }

    /// Page the error refers to, for resolver errors
    #[must_use]
    pub const fn page(&self) -> Option<PageId> {
        match self {
            Self::ConfigurationMissing { page, .. }
            | Self::ConfigurationInvalid { page, .. }
            | Self::LocatorKeyMissing { page, .. }
            | Self::EmptyLocatorKey { page } => Some(*page),
            _ => None,
        }
    }

    /// The page's whole document is absent
    #[must_use]
    pub const fn is_configuration_missing(&self) -> bool {
        matches!(self, Self::ConfigurationMissing { .. })
    }

    /// The page's document exists but is unusable
    #[must_use]
    pub const fn is_configuration_invalid(&self) -> bool {
        matches!(self, Self::ConfigurationInvalid { .. })
    }

    /// A single locator is absent from an otherwise valid document
    #[must_use]
    pub const fn is_locator_key_missing(&self) -> bool {
        matches!(self, Self::LocatorKeyMissing { .. })
    }
}
