//! Login screen.

use std::time::Duration;

use crate::driver::PageDriver;
use crate::locator::Locator;
use crate::page_id::PageId;
use crate::page_object::PageObject;
use crate::record::PageLocators;
use crate::resolver::LocatorResolver;
use crate::result::PomResult;
use crate::store::LocatorStore;

crate::page_locators! {
    /// Selectors the login page resolves at construction.
    pub struct LoginLocators for LoginPage {
        username_input => "usernameInput",
        password_input => "passwordInput",
        login_button => "loginButton",
        error_message => "errorMessage",
        login_credentials => "loginCredentials",
        login_password => "loginPassword",
    }
}

/// Password used when the password panel cannot be read
pub const DEFAULT_PASSWORD: &str = "secret_sauce";

const USERNAMES_HEADER: &str = "Accepted usernames";
const PASSWORD_HEADER: &str = "Password";

fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Usernames listed in the credentials panel, header removed
#[must_use]
pub fn parse_accepted_usernames(text: &str) -> Vec<String> {
    non_empty_lines(text)
        .filter(|line| !line.contains(USERNAMES_HEADER))
        .map(str::to_string)
        .collect()
}

/// Password listed in the password panel, falling back to [`DEFAULT_PASSWORD`]
#[must_use]
pub fn parse_password(text: &str) -> String {
    non_empty_lines(text)
        .find(|line| !line.contains(PASSWORD_HEADER))
        .unwrap_or(DEFAULT_PASSWORD)
        .to_string()
}

/// Sign-in form.
#[derive(Debug)]
pub struct LoginPage<'d, D: PageDriver> {
    driver: &'d D,
    username_input: Locator,
    password_input: Locator,
    login_button: Locator,
    error_message: Locator,
    login_credentials: Locator,
    login_password: Locator,
}

impl<'d, D: PageDriver> LoginPage<'d, D> {
    /// Resolve every login locator and bind them to `driver`.
    ///
    /// # Errors
    ///
    /// Any resolver error; the page is not constructed.
    pub fn new<S: LocatorStore>(driver: &'d D, resolver: &LocatorResolver<S>) -> PomResult<Self> {
        let locators = LoginLocators::resolve(resolver)?;
        Ok(Self {
            driver,
            username_input: Locator::new(&locators.username_input),
            password_input: Locator::new(&locators.password_input),
            login_button: Locator::new(&locators.login_button),
            error_message: Locator::new(&locators.error_message),
            login_credentials: Locator::new(&locators.login_credentials),
            login_password: Locator::new(&locators.login_password),
        })
    }

    /// Credentials panel listing the accepted usernames
    #[must_use]
    pub const fn login_credentials(&self) -> &Locator {
        &self.login_credentials
    }

    /// Error banner shown after a failed login
    #[must_use]
    pub const fn error_banner(&self) -> &Locator {
        &self.error_message
    }

    /// Open the login form
    pub async fn goto(&self) -> PomResult<()> {
        self.driver.goto("/").await
    }

    /// Submit the form with the given credentials
    pub async fn login(&self, username: &str, password: &str) -> PomResult<()> {
        self.driver.fill(&self.username_input, username).await?;
        self.driver.fill(&self.password_input, password).await?;
        self.driver.click(&self.login_button).await
    }

    /// Error banner text, empty when no error is shown
    pub async fn error_message(&self) -> PomResult<String> {
        Ok(self
            .driver
            .text_content(&self.error_message)
            .await?
            .unwrap_or_default())
    }

    /// Wait until the credentials panel is visible
    pub async fn wait_for_credentials(&self, timeout: Duration) -> PomResult<()> {
        self.driver
            .wait_for_visible(&self.login_credentials, timeout)
            .await
    }

    /// Usernames the page advertises
    pub async fn accepted_usernames(&self) -> PomResult<Vec<String>> {
        let text = self
            .driver
            .inner_text(&self.login_credentials)
            .await?
            .unwrap_or_default();
        Ok(parse_accepted_usernames(&text))
    }

    /// Password the page advertises
    pub async fn password(&self) -> PomResult<String> {
        let text = self
            .driver
            .inner_text(&self.login_password)
            .await?
            .unwrap_or_default();
        Ok(parse_password(&text))
    }
}

impl<D: PageDriver> PageObject for LoginPage<'_, D> {
    const PAGE: PageId = PageId::LoginPage;

    fn url_pattern(&self) -> &str {
        "/"
    }
}
