//! Browser-automation seam.
//!
//! Page objects talk to the browser only through [`PageDriver`]. The engine
//! behind it owns element lookup, auto-waiting and retries; this crate never
//! re-implements them.
//!
//! # Implementations
//!
//! - [`MockDriver`] - scripted, records every call, for unit and journey tests
//! - `CdpDriver` - Chromium over CDP via chromiumoxide (feature `browser`)

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use crate::locator::Locator;
use crate::result::{PomError, PomResult};

/// Default application under test
pub const DEFAULT_BASE_URL: &str = "https://www.saucedemo.com";

/// Browser configuration for drivers
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Base URL that relative navigation resolves against
    pub base_url: String,
    /// Run in headless mode
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Timeout for navigation
    pub navigation_timeout: Duration,
    /// Timeout for element queries
    pub element_timeout: Duration,
    /// Executable path override
    pub executable_path: Option<String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
            navigation_timeout: Duration::from_secs(30),
            element_timeout: Duration::from_secs(5),
            executable_path: None,
        }
    }
}

impl DriverConfig {
    /// Create new config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set viewport dimensions
    #[must_use]
    pub const fn viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set navigation timeout
    #[must_use]
    pub const fn navigation_timeout(mut self, timeout: Duration) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    /// Set element timeout
    #[must_use]
    pub const fn element_timeout(mut self, timeout: Duration) -> Self {
        self.element_timeout = timeout;
        self
    }

    /// Set the Chromium executable
    #[must_use]
    pub fn executable_path(mut self, path: impl Into<String>) -> Self {
        self.executable_path = Some(path.into());
        self
    }

    /// Resolve `target` against the base URL. Absolute URLs pass through.
    #[must_use]
    pub fn url_for(&self, target: &str) -> String {
        join_url(&self.base_url, target)
    }
}

fn join_url(base: &str, target: &str) -> String {
    if target.starts_with("http://") || target.starts_with("https://") {
        return target.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        target.trim_start_matches('/')
    )
}

/// Browser-automation engine contract consumed by page objects.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to `target`, relative to the configured base URL
    async fn goto(&self, target: &str) -> PomResult<()>;

    /// Current page URL
    async fn current_url(&self) -> PomResult<String>;

    /// Click the element
    async fn click(&self, locator: &Locator) -> PomResult<()>;

    /// Replace the element's value with `text`
    async fn fill(&self, locator: &Locator, text: &str) -> PomResult<()>;

    /// DOM text content of the first match, `None` if absent or empty
    async fn text_content(&self, locator: &Locator) -> PomResult<Option<String>>;

    /// Rendered text of the first match (line breaks preserved)
    async fn inner_text(&self, locator: &Locator) -> PomResult<Option<String>>;

    /// Text content of every match, in document order
    async fn all_text_contents(&self, locator: &Locator) -> PomResult<Vec<String>>;

    /// Wait until the element is visible
    async fn wait_for_visible(&self, locator: &Locator, timeout: Duration) -> PomResult<()>;
}

#[derive(Debug, Default)]
struct MockState {
    current_url: String,
    call_history: Vec<String>,
    values: HashMap<Locator, String>,
}

/// Mock driver for unit testing.
///
/// Elements are scripted by locator; anything not scripted is absent.
#[derive(Debug)]
pub struct MockDriver {
    config: DriverConfig,
    texts: HashMap<Locator, Vec<String>>,
    elements: HashSet<Locator>,
    navigations: HashMap<Locator, String>,
    state: Mutex<MockState>,
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDriver {
    /// Create new mock driver
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DriverConfig::default())
    }

    /// Create a mock driver with a specific config
    #[must_use]
    pub fn with_config(config: DriverConfig) -> Self {
        Self {
            config,
            texts: HashMap::new(),
            elements: HashSet::new(),
            navigations: HashMap::new(),
            state: Mutex::new(MockState::default()),
        }
    }

    /// Add an element without text
    #[must_use]
    pub fn with_element(mut self, locator: Locator) -> Self {
        let _ = self.elements.insert(locator);
        self
    }

    /// Add an element with text
    #[must_use]
    pub fn with_text(self, locator: Locator, text: impl Into<String>) -> Self {
        self.with_texts(locator, [text])
    }

    /// Add a set of matching elements, one text each
    #[must_use]
    pub fn with_texts<I, T>(mut self, locator: Locator, texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let _ = self.elements.insert(locator.clone());
        let _ = self
            .texts
            .insert(locator, texts.into_iter().map(Into::into).collect());
        self
    }

    /// Navigate to `target` when `locator` is clicked
    #[must_use]
    pub fn with_navigation(mut self, locator: Locator, target: &str) -> Self {
        let url = self.config.url_for(target);
        let _ = self.elements.insert(locator.clone());
        let _ = self.navigations.insert(locator, url);
        self
    }

    /// Get call history
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.state().call_history.clone()
    }

    /// Check if a call starting with `prefix` was made
    #[must_use]
    pub fn was_called(&self, prefix: &str) -> bool {
        self.state()
            .call_history
            .iter()
            .any(|c| c.starts_with(prefix))
    }

    /// Last value filled into `locator`
    #[must_use]
    pub fn value_of(&self, locator: &Locator) -> Option<String> {
        self.state().values.get(locator).cloned()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: String) {
        self.state().call_history.push(call);
    }

    fn require(&self, locator: &Locator) -> PomResult<()> {
        if self.elements.contains(locator) {
            Ok(())
        } else {
            Err(PomError::ElementNotFound {
                selector: locator.to_string(),
            })
        }
    }
}

#[async_trait]
impl PageDriver for MockDriver {
    async fn goto(&self, target: &str) -> PomResult<()> {
        let url = self.config.url_for(target);
        let mut state = self.state();
        state.call_history.push(format!("goto:{url}"));
        state.current_url = url;
        Ok(())
    }

    async fn current_url(&self) -> PomResult<String> {
        Ok(self.state().current_url.clone())
    }

    async fn click(&self, locator: &Locator) -> PomResult<()> {
        self.record(format!("click:{locator}"));
        self.require(locator)?;
        if let Some(url) = self.navigations.get(locator) {
            self.state().current_url = url.clone();
        }
        Ok(())
    }

    async fn fill(&self, locator: &Locator, text: &str) -> PomResult<()> {
        self.record(format!("fill:{locator}={text}"));
        self.require(locator)?;
        let _ = self
            .state()
            .values
            .insert(locator.clone(), text.to_string());
        Ok(())
    }

    async fn text_content(&self, locator: &Locator) -> PomResult<Option<String>> {
        self.record(format!("text_content:{locator}"));
        Ok(self
            .texts
            .get(locator)
            .and_then(|texts| texts.first())
            .filter(|t| !t.is_empty())
            .cloned())
    }

    async fn inner_text(&self, locator: &Locator) -> PomResult<Option<String>> {
        self.record(format!("inner_text:{locator}"));
        Ok(self
            .texts
            .get(locator)
            .and_then(|texts| texts.first())
            .cloned())
    }

    async fn all_text_contents(&self, locator: &Locator) -> PomResult<Vec<String>> {
        self.record(format!("all_text_contents:{locator}"));
        Ok(self.texts.get(locator).cloned().unwrap_or_default())
    }

    async fn wait_for_visible(&self, locator: &Locator, timeout: Duration) -> PomResult<()> {
        self.record(format!("wait_for_visible:{locator}"));
        if self.elements.contains(locator) {
            Ok(())
        } else {
            Err(PomError::Timeout {
                ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            })
        }
    }
}
