//! Suite configuration.

use std::path::PathBuf;

use crate::driver::DriverConfig;
use crate::resolver::LocatorResolver;
use crate::store::{default_locator_root, FsLocatorStore};

/// Overrides the application base URL
pub const BASE_URL_ENV: &str = "SAUCE_POM_BASE_URL";
/// Overrides the locator document directory
pub const LOCATOR_DIR_ENV: &str = "SAUCE_POM_LOCATOR_DIR";
/// Runs the browser with a visible window when truthy
pub const HEADED_ENV: &str = "SAUCE_POM_HEADED";
/// Chromium executable to launch
pub const CHROMIUM_PATH_ENV: &str = "CHROMIUM_PATH";

/// Everything a suite run needs: where locators live and how to drive the
/// browser.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Directory holding `{Page}Locator.yaml` documents
    pub locator_root: PathBuf,
    /// Browser settings
    pub driver: DriverConfig,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            locator_root: default_locator_root(),
            driver: DriverConfig::default(),
        }
    }
}

impl SuiteConfig {
    /// Create config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(url) = lookup(BASE_URL_ENV) {
            config.driver = config.driver.base_url(url);
        }
        if let Some(dir) = lookup(LOCATOR_DIR_ENV) {
            config.locator_root = PathBuf::from(dir);
        }
        if let Some(headed) = lookup(HEADED_ENV) {
            config.driver = config.driver.headless(!is_truthy(&headed));
        }
        if let Some(path) = lookup(CHROMIUM_PATH_ENV) {
            config.driver = config.driver.executable_path(path);
        }
        config
    }

    /// Set the locator document directory
    #[must_use]
    pub fn locator_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.locator_root = root.into();
        self
    }

    /// Set the application base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.driver = self.driver.base_url(url);
        self
    }

    /// Replace the browser settings
    #[must_use]
    pub fn driver(mut self, driver: DriverConfig) -> Self {
        self.driver = driver;
        self
    }

    /// Filesystem store over [`locator_root`](Self::locator_root)
    #[must_use]
    pub fn store(&self) -> FsLocatorStore {
        FsLocatorStore::new(&self.locator_root)
    }

    /// Fresh resolver over the configured locator root
    #[must_use]
    pub fn resolver(&self) -> LocatorResolver<FsLocatorStore> {
        LocatorResolver::new(self.store())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::driver::DEFAULT_BASE_URL;
    use crate::page_id::PageId;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SuiteConfig::default();
        assert_eq!(config.driver.base_url, DEFAULT_BASE_URL);
        assert!(config.driver.headless);
        assert!(config.locator_root.ends_with("locators"));
    }

    #[test]
    fn test_lookup_overrides() {
        let config = SuiteConfig::from_lookup(lookup_from(&[
            (BASE_URL_ENV, "http://localhost:8080"),
            (LOCATOR_DIR_ENV, "/tmp/locators"),
            (HEADED_ENV, "true"),
            (CHROMIUM_PATH_ENV, "/usr/bin/chromium"),
        ]));
        assert_eq!(config.driver.base_url, "http://localhost:8080");
        assert_eq!(config.locator_root, PathBuf::from("/tmp/locators"));
        assert!(!config.driver.headless);
        assert_eq!(
            config.driver.executable_path.as_deref(),
            Some("/usr/bin/chromium")
        );
    }

    #[test]
    fn test_blank_and_falsy_values() {
        let config = SuiteConfig::from_lookup(lookup_from(&[
            (BASE_URL_ENV, "  "),
            (HEADED_ENV, "0"),
        ]));
        assert_eq!(config.driver.base_url, DEFAULT_BASE_URL);
        assert!(config.driver.headless);
    }

    #[test]
    fn test_base_url_lives_on_driver() {
        let config = SuiteConfig::new().base_url("http://localhost:3000");
        assert_eq!(config.driver.base_url, "http://localhost:3000");
        assert_eq!(
            config.driver.url_for("/cart.html"),
            "http://localhost:3000/cart.html"
        );
    }

    #[test]
    fn test_resolver_uses_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("CartPageLocator.yaml"), "title: '.title'\n").unwrap();

        let resolver = SuiteConfig::new().locator_root(dir.path()).resolver();
        assert_eq!(resolver.get(PageId::CartPage, "title").unwrap(), ".title");
        assert!(resolver
            .get(PageId::LoginPage, "usernameInput")
            .unwrap_err()
            .is_configuration_missing());
    }
}
