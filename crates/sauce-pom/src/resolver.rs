//! Lazy, memoized locator resolution.
//!
//! A [`LocatorResolver`] owns its cache. Each page's document is read at most
//! once per resolver: the first caller for a page takes that page's slot lock,
//! reads and parses, and publishes the document; concurrent callers for the
//! same page wait on the slot and then see the published document. Failures
//! leave the slot empty, so the next call reads again.
//!
//! Create one resolver per process (or per test) and pass it by reference to
//! whatever constructs page objects.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::document::LocatorDocument;
use crate::page_id::PageId;
use crate::result::{PomError, PomResult};
use crate::store::{FsLocatorStore, LocatorStore};

type Slot = Arc<Mutex<Option<Arc<LocatorDocument>>>>;

/// Resolves `(page, key)` pairs to selector strings.
#[derive(Debug)]
pub struct LocatorResolver<S: LocatorStore = FsLocatorStore> {
    store: S,
    slots: Mutex<HashMap<PageId, Slot>>,
}

impl Default for LocatorResolver<FsLocatorStore> {
    fn default() -> Self {
        Self::new(FsLocatorStore::default())
    }
}

impl<S: LocatorStore> LocatorResolver<S> {
    /// Create a resolver with an empty cache
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Backing store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Load the document for `page`, reading storage only on first success.
    ///
    /// # Errors
    ///
    /// [`PomError::ConfigurationMissing`] or [`PomError::ConfigurationInvalid`]
    /// from the store or parser. Nothing is cached on failure.
    pub fn load(&self, page: PageId) -> PomResult<Arc<LocatorDocument>> {
        let slot = self.slot(page);
        let mut cached = slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(document) = cached.as_ref() {
            debug!(%page, "locator cache hit");
            return Ok(Arc::clone(document));
        }

        let path = self.store.location(page);
        let document = self
            .store
            .read(page)
            .and_then(|source| LocatorDocument::parse(page, &path, &source))
            .map(Arc::new)
            .map_err(|e| {
                warn!(%page, error = %e, "failed to load locators");
                e
            })?;

        info!(%page, locators = document.len(), path = %path.display(), "loaded locators");
        *cached = Some(Arc::clone(&document));
        Ok(document)
    }

    /// Selector stored under `key` in `page`'s document.
    ///
    /// # Errors
    ///
    /// [`PomError::EmptyLocatorKey`] for an empty `key`, any error from
    /// [`load`](Self::load) unchanged, or [`PomError::LocatorKeyMissing`] if
    /// the document lacks `key`.
    pub fn get(&self, page: PageId, key: &str) -> PomResult<String> {
        if key.is_empty() {
            return Err(PomError::EmptyLocatorKey { page });
        }

        let document = self.load(page)?;
        document
            .get(key)
            .map(str::to_string)
            .ok_or_else(|| PomError::LocatorKeyMissing {
                page,
                key: key.to_string(),
            })
    }

    /// Whether `page`'s document is cached
    #[must_use]
    pub fn is_loaded(&self, page: PageId) -> bool {
        let slot = {
            let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.get(&page).cloned()
        };
        slot.is_some_and(|s| s.lock().unwrap_or_else(PoisonError::into_inner).is_some())
    }

    /// Pages whose documents are cached, in registry order
    #[must_use]
    pub fn loaded_pages(&self) -> Vec<PageId> {
        PageId::ALL
            .into_iter()
            .filter(|page| self.is_loaded(*page))
            .collect()
    }

    /// Per-page slot, created on first reference. The map lock is held only
    /// long enough to fetch or insert the slot.
    fn slot(&self, page: PageId) -> Slot {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(page).or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryLocatorStore;

    const LOGIN: &str = "usernameInput: '#user-name'\nloginButton: '#login-button'\n";

    fn resolver() -> LocatorResolver<InMemoryLocatorStore> {
        LocatorResolver::new(InMemoryLocatorStore::new().with_document(PageId::LoginPage, LOGIN))
    }

    mod load_tests {
        use super::*;

        #[test]
        fn test_first_load_reads_once() {
            let resolver = resolver();
            assert!(!resolver.is_loaded(PageId::LoginPage));

            let first = resolver.load(PageId::LoginPage).unwrap();
            let second = resolver.load(PageId::LoginPage).unwrap();

            assert_eq!(first, second);
            assert!(Arc::ptr_eq(&first, &second));
            assert_eq!(resolver.store().reads_for(PageId::LoginPage), 1);
            assert_eq!(resolver.loaded_pages(), vec![PageId::LoginPage]);
        }

        #[test]
        fn test_missing_page_is_not_cached() {
            let resolver = resolver();
            for _ in 0..3 {
                let err = resolver.load(PageId::CartPage).unwrap_err();
                assert!(err.is_configuration_missing());
            }
            assert_eq!(resolver.store().reads_for(PageId::CartPage), 3);
            assert!(!resolver.is_loaded(PageId::CartPage));
        }

        #[test]
        fn test_invalid_document_is_not_cached() {
            let resolver = LocatorResolver::new(
                InMemoryLocatorStore::new().with_document(PageId::CartPage, "- not\n- a map\n"),
            );
            assert!(resolver
                .load(PageId::CartPage)
                .unwrap_err()
                .is_configuration_invalid());
            assert!(resolver
                .load(PageId::CartPage)
                .unwrap_err()
                .is_configuration_invalid());
            assert_eq!(resolver.store().reads_for(PageId::CartPage), 2);
        }
    }

    mod get_tests {
        use super::*;

        #[test]
        fn test_returns_exact_selector() {
            let resolver = resolver();
            assert_eq!(
                resolver.get(PageId::LoginPage, "usernameInput").unwrap(),
                "#user-name"
            );
            assert_eq!(
                resolver.get(PageId::LoginPage, "loginButton").unwrap(),
                "#login-button"
            );
            assert_eq!(resolver.store().reads(), 1);
        }

        #[test]
        fn test_missing_key_names_page_and_key() {
            let resolver = resolver();
            match resolver.get(PageId::LoginPage, "password").unwrap_err() {
                PomError::LocatorKeyMissing { page, key } => {
                    assert_eq!(page, PageId::LoginPage);
                    assert_eq!(key, "password");
                }
                other => panic!("unexpected error: {other}"),
            }
            // The document itself stays cached.
            assert!(resolver.is_loaded(PageId::LoginPage));
        }

        #[test]
        fn test_empty_key_rejected_without_read() {
            let resolver = resolver();
            let err = resolver.get(PageId::LoginPage, "").unwrap_err();
            assert!(matches!(err, PomError::EmptyLocatorKey { .. }));
            assert_eq!(resolver.store().reads(), 0);
        }

        #[test]
        fn test_load_failure_propagates_unchanged() {
            let resolver = resolver();
            let err = resolver.get(PageId::CartPage, "title").unwrap_err();
            assert!(err.is_configuration_missing());
            assert_eq!(err.page(), Some(PageId::CartPage));
        }
    }

    #[test]
    fn test_concurrent_first_access_reads_once() {
        let resolver = Arc::new(resolver());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                std::thread::spawn(move || resolver.get(PageId::LoginPage, "loginButton"))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), "#login-button");
        }
        assert_eq!(resolver.store().reads_for(PageId::LoginPage), 1);
    }
}
