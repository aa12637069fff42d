//! Checkout: customer information, overview and completion.

use crate::driver::PageDriver;
use crate::locator::Locator;
use crate::page_id::PageId;
use crate::page_object::{PageObject, UrlMatcher};
use crate::record::PageLocators;
use crate::resolver::LocatorResolver;
use crate::result::PomResult;
use crate::store::LocatorStore;

crate::page_locators! {
    /// Selectors the checkout page resolves at construction.
    pub struct CheckoutLocators for CheckoutPage {
        first_name_input => "firstNameInput",
        last_name_input => "lastNameInput",
        postal_code_input => "postalCodeInput",
        continue_button => "continueButton",
        finish_button => "finishButton",
        complete_header => "completeHeader",
        back_home_button => "backHomeButton",
    }
}

const CHECKOUT_STEPS: [&str; 3] = [
    "/checkout-step-one.html",
    "/checkout-step-two.html",
    "/checkout-complete.html",
];

/// The three checkout steps, modelled as one page.
#[derive(Debug)]
pub struct CheckoutPage<'d, D: PageDriver> {
    driver: &'d D,
    first_name_input: Locator,
    last_name_input: Locator,
    postal_code_input: Locator,
    continue_button: Locator,
    finish_button: Locator,
    complete_header: Locator,
    back_home_button: Locator,
}

impl<'d, D: PageDriver> CheckoutPage<'d, D> {
    /// Resolve every checkout locator and bind them to `driver`.
    ///
    /// # Errors
    ///
    /// Any resolver error; the page is not constructed.
    pub fn new<S: LocatorStore>(driver: &'d D, resolver: &LocatorResolver<S>) -> PomResult<Self> {
        let locators = CheckoutLocators::resolve(resolver)?;
        Ok(Self {
            driver,
            first_name_input: Locator::new(&locators.first_name_input),
            last_name_input: Locator::new(&locators.last_name_input),
            postal_code_input: Locator::new(&locators.postal_code_input),
            continue_button: Locator::new(&locators.continue_button),
            finish_button: Locator::new(&locators.finish_button),
            complete_header: Locator::new(&locators.complete_header),
            back_home_button: Locator::new(&locators.back_home_button),
        })
    }

    /// Fill the shipping form and continue to the overview
    pub async fn fill_customer_info(
        &self,
        first_name: &str,
        last_name: &str,
        postal_code: &str,
    ) -> PomResult<()> {
        self.driver.fill(&self.first_name_input, first_name).await?;
        self.driver.fill(&self.last_name_input, last_name).await?;
        self.driver.fill(&self.postal_code_input, postal_code).await?;
        self.driver.click(&self.continue_button).await
    }

    /// Place the order
    pub async fn finish_order(&self) -> PomResult<()> {
        self.driver.click(&self.finish_button).await
    }

    /// Completion header text, empty before the order is placed
    pub async fn confirmation_message(&self) -> PomResult<String> {
        Ok(self
            .driver
            .text_content(&self.complete_header)
            .await?
            .unwrap_or_default())
    }

    /// Return to the product listing after completion
    pub async fn back_home(&self) -> PomResult<()> {
        self.driver.click(&self.back_home_button).await
    }
}

impl<D: PageDriver> PageObject for CheckoutPage<'_, D> {
    const PAGE: PageId = PageId::CheckoutPage;

    fn url_pattern(&self) -> &str {
        CHECKOUT_STEPS[0]
    }

    fn is_current(&self, url: &str) -> bool {
        CHECKOUT_STEPS
            .iter()
            .any(|step| UrlMatcher::new(step).matches(url))
    }
}
