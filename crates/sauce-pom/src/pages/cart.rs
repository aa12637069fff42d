//! Shopping cart.

use crate::driver::PageDriver;
use crate::locator::Locator;
use crate::page_id::PageId;
use crate::page_object::PageObject;
use crate::record::PageLocators;
use crate::resolver::LocatorResolver;
use crate::result::PomResult;
use crate::store::LocatorStore;

crate::page_locators! {
    /// Selectors the cart page resolves at construction.
    pub struct CartLocators for CartPage {
        title => "title",
        cart_items => "cartItems",
        cart_item_names => "cartItemNames",
        checkout_button => "checkoutButton",
        continue_shopping_button => "continueShoppingButton",
    }
}

/// Cart contents and the entry point to checkout.
#[derive(Debug)]
pub struct CartPage<'d, D: PageDriver> {
    driver: &'d D,
    title: Locator,
    cart_items: Locator,
    cart_item_names: Locator,
    checkout_button: Locator,
    continue_shopping_button: Locator,
}

impl<'d, D: PageDriver> CartPage<'d, D> {
    /// Resolve every cart locator and bind them to `driver`.
    ///
    /// # Errors
    ///
    /// Any resolver error; the page is not constructed.
    pub fn new<S: LocatorStore>(driver: &'d D, resolver: &LocatorResolver<S>) -> PomResult<Self> {
        let locators = CartLocators::resolve(resolver)?;
        Ok(Self {
            driver,
            title: Locator::new(&locators.title),
            cart_items: Locator::new(&locators.cart_items),
            cart_item_names: Locator::new(&locators.cart_item_names),
            checkout_button: Locator::new(&locators.checkout_button),
            continue_shopping_button: Locator::new(&locators.continue_shopping_button),
        })
    }

    /// Page heading
    #[must_use]
    pub const fn title(&self) -> &Locator {
        &self.title
    }

    /// Page heading text
    pub async fn title_text(&self) -> PomResult<String> {
        Ok(self.driver.text_content(&self.title).await?.unwrap_or_default())
    }

    /// Proceed to checkout
    pub async fn checkout(&self) -> PomResult<()> {
        self.driver.click(&self.checkout_button).await
    }

    /// Return to the product listing
    pub async fn continue_shopping(&self) -> PomResult<()> {
        self.driver.click(&self.continue_shopping_button).await
    }

    /// Names of the items in the cart, in display order
    pub async fn cart_item_names(&self) -> PomResult<Vec<String>> {
        self.driver.all_text_contents(&self.cart_item_names).await
    }

    /// Number of line items in the cart
    pub async fn item_count(&self) -> PomResult<usize> {
        Ok(self.driver.all_text_contents(&self.cart_items).await?.len())
    }
}

impl<D: PageDriver> PageObject for CartPage<'_, D> {
    const PAGE: PageId = PageId::CartPage;

    fn url_pattern(&self) -> &str {
        "/cart.html"
    }
}
