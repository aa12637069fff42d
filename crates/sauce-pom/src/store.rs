//! Locator document storage.
//!
//! The resolver never touches the filesystem directly; it goes through a
//! [`LocatorStore`], so tests can swap in [`InMemoryLocatorStore`] and count
//! reads.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::page_id::PageId;
use crate::result::{PomError, PomResult};

/// Directory holding the bundled locator documents.
///
/// Anchored at this crate's manifest so lookups do not depend on the working
/// directory.
#[must_use]
pub fn default_locator_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("locators")
}

/// Source of raw locator documents, one per page.
pub trait LocatorStore: Send + Sync {
    /// Where the document for `page` lives, for diagnostics
    fn location(&self, page: PageId) -> PathBuf;

    /// Read the raw document for `page`.
    ///
    /// # Errors
    ///
    /// [`PomError::ConfigurationMissing`] if no document exists,
    /// [`PomError::ConfigurationInvalid`] if it exists but cannot be read.
    fn read(&self, page: PageId) -> PomResult<String>;
}

/// Store reading `{root}/{page}Locator.yaml` from disk
#[derive(Debug, Clone)]
pub struct FsLocatorStore {
    root: PathBuf,
}

impl Default for FsLocatorStore {
    fn default() -> Self {
        Self::new(default_locator_root())
    }
}

impl FsLocatorStore {
    /// Create a store rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Configuration root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl LocatorStore for FsLocatorStore {
    fn location(&self, page: PageId) -> PathBuf {
        self.root.join(page.locator_file_name())
    }

    fn read(&self, page: PageId) -> PomResult<String> {
        let path = self.location(page);
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PomError::ConfigurationMissing { page, path },
            _ => PomError::ConfigurationInvalid {
                page,
                path,
                message: e.to_string(),
            },
        })
    }
}

/// Store serving documents from memory, with read counting.
#[derive(Debug)]
pub struct InMemoryLocatorStore {
    documents: HashMap<PageId, String>,
    reads: HashMap<PageId, AtomicUsize>,
}

impl Default for InMemoryLocatorStore {
    fn default() -> Self {
        Self {
            documents: HashMap::new(),
            reads: PageId::ALL
                .into_iter()
                .map(|page| (page, AtomicUsize::new(0)))
                .collect(),
        }
    }
}

impl InMemoryLocatorStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw YAML document for `page`
    #[must_use]
    pub fn with_document(mut self, page: PageId, source: impl Into<String>) -> Self {
        let _ = self.documents.insert(page, source.into());
        self
    }

    /// Total number of reads across all pages, including failed ones
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    /// Number of reads for one page, including failed ones
    #[must_use]
    pub fn reads_for(&self, page: PageId) -> usize {
        self.reads
            .get(&page)
            .map_or(0, |c| c.load(Ordering::SeqCst))
    }
}

impl LocatorStore for InMemoryLocatorStore {
    fn location(&self, page: PageId) -> PathBuf {
        Path::new("memory:").join(page.locator_file_name())
    }

    fn read(&self, page: PageId) -> PomResult<String> {
        // Counters are preallocated for every page.
        if let Some(counter) = self.reads.get(&page) {
            let _ = counter.fetch_add(1, Ordering::SeqCst);
        }
        self.documents
            .get(&page)
            .cloned()
            .ok_or_else(|| PomError::ConfigurationMissing {
                page,
                path: self.location(page),
            })
    }
}
