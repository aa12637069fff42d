//! Purchase journey from inventory to order confirmation.

#![allow(clippy::unwrap_used)]

use sauce_pom::pages::{CartPage, CheckoutPage, InventoryPage, ADD_TO_CART_LABEL};
use sauce_pom::prelude::*;
use sauce_pom::InMemoryLocatorStore;

const BACKPACK: &str = "Sauce Labs Backpack";
const CONFIRMATION: &str = "Thank you for your order!";

fn backpack_button() -> Locator {
    Locator::new(".inventory_item")
        .with_text(BACKPACK)
        .locator(Locator::new("button").with_text(ADD_TO_CART_LABEL))
}

fn storefront() -> MockDriver {
    MockDriver::new()
        .with_element(backpack_button())
        .with_text(Locator::new(".shopping_cart_badge"), "1")
        .with_navigation(Locator::new(".shopping_cart_link"), "/cart.html")
        .with_text(Locator::new(".title"), "Products")
        .with_texts(Locator::new(".cart_item"), [BACKPACK])
        .with_texts(Locator::new(".cart_item .inventory_item_name"), [BACKPACK])
        .with_navigation(
            Locator::new("[data-test=\"checkout\"]"),
            "/checkout-step-one.html",
        )
        .with_element(Locator::new("[data-test=\"firstName\"]"))
        .with_element(Locator::new("[data-test=\"lastName\"]"))
        .with_element(Locator::new("[data-test=\"postalCode\"]"))
        .with_navigation(
            Locator::new("[data-test=\"continue\"]"),
            "/checkout-step-two.html",
        )
        .with_navigation(
            Locator::new("[data-test=\"finish\"]"),
            "/checkout-complete.html",
        )
        .with_text(Locator::new(".complete-header"), CONFIRMATION)
        .with_navigation(
            Locator::new("[data-test=\"back-to-products\"]"),
            "/inventory.html",
        )
}

#[tokio::test]
async fn test_purchase_single_item() {
    let driver = storefront();
    let resolver = LocatorResolver::default();

    driver.goto("/inventory.html").await.unwrap();
    let inventory = InventoryPage::new(&driver, &resolver).unwrap();
    inventory.add_item_to_cart(BACKPACK).await.unwrap();
    assert_eq!(inventory.cart_item_count().await.unwrap(), 1);
    inventory.go_to_cart().await.unwrap();

    let cart = CartPage::new(&driver, &resolver).unwrap();
    assert!(cart.is_current(&driver.current_url().await.unwrap()));
    assert_eq!(cart.cart_item_names().await.unwrap(), vec![BACKPACK]);
    assert_eq!(cart.item_count().await.unwrap(), 1);
    cart.checkout().await.unwrap();

    let checkout = CheckoutPage::new(&driver, &resolver).unwrap();
    assert!(checkout.is_current(&driver.current_url().await.unwrap()));
    checkout
        .fill_customer_info("Grace", "Hopper", "10001")
        .await
        .unwrap();
    assert!(driver
        .current_url()
        .await
        .unwrap()
        .ends_with("/checkout-step-two.html"));

    checkout.finish_order().await.unwrap();
    assert_eq!(checkout.confirmation_message().await.unwrap(), CONFIRMATION);
    assert!(checkout.is_current(&driver.current_url().await.unwrap()));

    checkout.back_home().await.unwrap();
    assert!(inventory.is_current(&driver.current_url().await.unwrap()));
}

#[tokio::test]
async fn test_journey_reads_each_document_once() {
    let resolver = LocatorResolver::new(
        PageId::ALL
            .into_iter()
            .fold(InMemoryLocatorStore::new(), |store, page| {
                let source = std::fs::read_to_string(
                    sauce_pom::default_locator_root().join(page.locator_file_name()),
                )
                .unwrap();
                store.with_document(page, source)
            }),
    );
    let driver = storefront();

    for _ in 0..3 {
        let inventory = InventoryPage::new(&driver, &resolver).unwrap();
        inventory.add_item_to_cart(BACKPACK).await.unwrap();
        let cart = CartPage::new(&driver, &resolver).unwrap();
        cart.checkout().await.unwrap();
        let checkout = CheckoutPage::new(&driver, &resolver).unwrap();
        checkout.finish_order().await.unwrap();
    }

    assert_eq!(resolver.store().reads_for(PageId::InventoryPage), 1);
    assert_eq!(resolver.store().reads_for(PageId::CartPage), 1);
    assert_eq!(resolver.store().reads_for(PageId::CheckoutPage), 1);
    assert_eq!(resolver.store().reads_for(PageId::LoginPage), 0);
}

#[tokio::test]
async fn test_checkout_requires_customer_fields() {
    let driver = MockDriver::new().with_element(Locator::new("[data-test=\"continue\"]"));
    let resolver = LocatorResolver::default();
    let checkout = CheckoutPage::new(&driver, &resolver).unwrap();

    let err = checkout
        .fill_customer_info("Grace", "Hopper", "10001")
        .await
        .unwrap_err();
    assert!(matches!(err, PomError::ElementNotFound { .. }));
    assert!(!driver.was_called("click:[data-test=\"continue\"]"));
}

#[tokio::test]
async fn test_empty_cart() {
    let driver = MockDriver::new();
    let resolver = LocatorResolver::default();
    let cart = CartPage::new(&driver, &resolver).unwrap();

    assert!(cart.cart_item_names().await.unwrap().is_empty());
    assert_eq!(cart.item_count().await.unwrap(), 0);
    assert!(cart.checkout().await.is_err());
}
