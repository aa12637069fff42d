//! Product listing.

use crate::driver::PageDriver;
use crate::locator::Locator;
use crate::page_id::PageId;
use crate::page_object::PageObject;
use crate::record::PageLocators;
use crate::resolver::LocatorResolver;
use crate::result::{PomError, PomResult};
use crate::store::LocatorStore;

crate::page_locators! {
    /// Selectors the inventory page resolves at construction.
    pub struct InventoryLocators for InventoryPage {
        title => "title",
        inventory_items => "inventoryItems",
        add_to_cart_button => "addToCartButton",
        cart_badge => "cartBadge",
        cart_link => "cartLink",
    }
}

/// Label of an item's add button before it is added
pub const ADD_TO_CART_LABEL: &str = "Add to cart";

/// Product listing shown after a successful login.
#[derive(Debug)]
pub struct InventoryPage<'d, D: PageDriver> {
    driver: &'d D,
    title: Locator,
    inventory_items: Locator,
    add_to_cart_button: Locator,
    cart_badge: Locator,
    cart_link: Locator,
}

impl<'d, D: PageDriver> InventoryPage<'d, D> {
    /// Resolve every inventory locator and bind them to `driver`.
    ///
    /// # Errors
    ///
    /// Any resolver error; the page is not constructed.
    pub fn new<S: LocatorStore>(driver: &'d D, resolver: &LocatorResolver<S>) -> PomResult<Self> {
        let locators = InventoryLocators::resolve(resolver)?;
        Ok(Self {
            driver,
            title: Locator::new(&locators.title),
            inventory_items: Locator::new(&locators.inventory_items),
            add_to_cart_button: Locator::new(&locators.add_to_cart_button),
            cart_badge: Locator::new(&locators.cart_badge),
            cart_link: Locator::new(&locators.cart_link),
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

    /// Add-to-cart button of the item named `item_name`
    #[must_use]
    pub fn add_button_for(&self, item_name: &str) -> Locator {
        self.inventory_items
            .clone()
            .with_text(item_name)
            .locator(self.add_to_cart_button.clone().with_text(ADD_TO_CART_LABEL))
    }

    /// Add the item named `item_name` to the cart
    pub async fn add_item_to_cart(&self, item_name: &str) -> PomResult<()> {
        self.driver.click(&self.add_button_for(item_name)).await
    }

    /// Open the cart
    pub async fn go_to_cart(&self) -> PomResult<()> {
        self.driver.click(&self.cart_link).await
    }

    /// Number shown on the cart badge, 0 when the badge is absent
    pub async fn cart_item_count(&self) -> PomResult<u32> {
        match self.driver.text_content(&self.cart_badge).await? {
            None => Ok(0),
            Some(text) => text.trim().parse().map_err(|_| {
                PomError::driver(format!("cart badge shows non-numeric text '{text}'"))
            }),
        }
    }
}

impl<D: PageDriver> PageObject for InventoryPage<'_, D> {
    const PAGE: PageId = PageId::InventoryPage;

    fn url_pattern(&self) -> &str {
        "/inventory.html"
    }
}
