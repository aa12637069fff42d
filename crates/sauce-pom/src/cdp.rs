//! Chromium driver over the DevTools protocol (chromiumoxide).
//!
//! Element queries are polled until they match or the configured element
//! timeout elapses, so page objects get auto-waiting without doing it
//! themselves.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::driver::{DriverConfig, PageDriver};
use crate::locator::{Locator, Selector};
use crate::result::{PomError, PomResult};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn cdp_err(e: impl std::fmt::Display) -> PomError {
    PomError::driver(e.to_string())
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Driver controlling a real Chromium instance
#[derive(Debug)]
pub struct CdpDriver {
    config: DriverConfig,
    browser: Mutex<Browser>,
    page: Page,
    handle: JoinHandle<()>,
}

impl CdpDriver {
    /// Launch Chromium and open a blank page
    ///
    /// # Errors
    ///
    /// Returns error if the browser cannot be launched
    pub async fn launch(config: DriverConfig) -> PomResult<Self> {
        let mut builder = BrowserConfig::builder()
            .window_size(config.viewport_width, config.viewport_height)
            .request_timeout(config.navigation_timeout);

        if !config.headless {
            builder = builder.with_head();
        }
        if let Some(ref path) = config.executable_path {
            builder = builder.chrome_executable(path);
        }

        let cdp_config = builder.build().map_err(PomError::driver)?;
        let (browser, mut handler) = Browser::launch(cdp_config).await.map_err(cdp_err)?;

        let handle = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await.map_err(cdp_err)?;

        Ok(Self {
            config,
            browser: Mutex::new(browser),
            page,
            handle,
        })
    }

    /// Driver configuration
    #[must_use]
    pub const fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Close the browser
    pub async fn close(self) -> PomResult<()> {
        let mut browser = self.browser.lock().await;
        let _ = browser.close().await.map_err(cdp_err)?;
        self.handle.abort();
        Ok(())
    }

    /// Top-level matches; a failed query counts as no match so polling continues
    async fn query_page(&self, selector: &Selector) -> PomResult<Vec<Element>> {
        let found = match selector {
            Selector::Css(css) => self.page.find_elements(css.as_str()).await,
            Selector::XPath(xpath) => self.page.find_xpaths(xpath.as_str()).await,
        };
        Ok(found.unwrap_or_default())
    }

    /// All current matches for `locator`, without waiting
    async fn matches(&self, locator: &Locator) -> PomResult<Vec<Element>> {
        let roots = self.query_page(locator.selector()).await?;
        let mut found = filter_text(roots, locator.has_text()).await?;

        let mut scope = locator.child();
        while let Some(child) = scope {
            let Selector::Css(css) = child.selector() else {
                return Err(PomError::driver(format!(
                    "nested XPath selectors are not supported: {child}"
                )));
            };
            let mut next = Vec::new();
            for parent in &found {
                if let Ok(children) = parent.find_elements(css.as_str()).await {
                    next.extend(children);
                }
            }
            found = filter_text(next, child.has_text()).await?;
            scope = child.child();
        }

        Ok(found)
    }

    /// First match for `locator`, polling up to the element timeout
    async fn first(&self, locator: &Locator) -> PomResult<Element> {
        let deadline = Instant::now() + self.config.element_timeout;
        loop {
            if let Some(element) = self.matches(locator).await?.into_iter().next() {
                return Ok(element);
            }
            if Instant::now() >= deadline {
                return Err(PomError::ElementNotFound {
                    selector: locator.to_string(),
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

async fn filter_text(elements: Vec<Element>, text: Option<&str>) -> PomResult<Vec<Element>> {
    let Some(text) = text else {
        return Ok(elements);
    };
    let mut kept = Vec::with_capacity(elements.len());
    for element in elements {
        let inner = element.inner_text().await.map_err(cdp_err)?;
        if inner.is_some_and(|t| t.contains(text)) {
            kept.push(element);
        }
    }
    Ok(kept)
}

async fn text_content_of(element: &Element) -> PomResult<Option<String>> {
    let value = element.property("textContent").await.map_err(cdp_err)?;
    Ok(value.and_then(|v| v.as_str().map(str::to_string)))
}

#[async_trait]
impl PageDriver for CdpDriver {
    async fn goto(&self, target: &str) -> PomResult<()> {
        let url = self.config.url_for(target);
        debug!(%url, "navigating");
        let navigation = self.page.goto(url.as_str());
        match tokio::time::timeout(self.config.navigation_timeout, navigation).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(PomError::Navigation {
                url,
                message: e.to_string(),
            }),
            Err(_) => Err(PomError::Timeout {
                ms: millis(self.config.navigation_timeout),
            }),
        }
    }

    async fn current_url(&self) -> PomResult<String> {
        Ok(self.page.url().await.map_err(cdp_err)?.unwrap_or_default())
    }

    async fn click(&self, locator: &Locator) -> PomResult<()> {
        let element = self.first(locator).await?;
        let _ = element.click().await.map_err(cdp_err)?;
        Ok(())
    }

    async fn fill(&self, locator: &Locator, text: &str) -> PomResult<()> {
        let element = self.first(locator).await?;
        let _ = element.click().await.map_err(cdp_err)?;
        let _ = element
            .call_js_fn("function() { this.value = ''; }", false)
            .await
            .map_err(cdp_err)?;
        let _ = element.type_str(text).await.map_err(cdp_err)?;
        Ok(())
    }

    async fn text_content(&self, locator: &Locator) -> PomResult<Option<String>> {
        match self.first(locator).await {
            Ok(element) => Ok(text_content_of(&element).await?.filter(|t| !t.is_empty())),
            Err(PomError::ElementNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn inner_text(&self, locator: &Locator) -> PomResult<Option<String>> {
        let element = self.first(locator).await?;
        element.inner_text().await.map_err(cdp_err)
    }

    async fn all_text_contents(&self, locator: &Locator) -> PomResult<Vec<String>> {
        let mut texts = Vec::new();
        for element in self.matches(locator).await? {
            texts.push(text_content_of(&element).await?.unwrap_or_default());
        }
        Ok(texts)
    }

    async fn wait_for_visible(&self, locator: &Locator, timeout: Duration) -> PomResult<()> {
        let deadline = Instant::now() + timeout;
        loop {
            for element in self.matches(locator).await? {
                if element
                    .bounding_box()
                    .await
                    .is_ok_and(|b| b.width > 0.0 && b.height > 0.0)
                {
                    return Ok(());
                }
            }
            if Instant::now() >= deadline {
                return Err(PomError::Timeout { ms: millis(timeout) });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
