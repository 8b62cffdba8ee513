//! Cart behaviour across a shopping session

use rust_decimal::Decimal;
use storefront::{
    cart::{CartError, CartLineItem, CartStore, MemoryCartStorage},
    products::{ProductId, ProductSnapshot},
};
use testresult::TestResult;

fn snapshot(id: &str, price: Decimal) -> ProductSnapshot {
    ProductSnapshot {
        id: ProductId::from(id),
        title: format!("Product {id}"),
        price,
        media: Vec::new(),
        colors: vec!["black".to_string(), "white".to_string()],
        sizes: Vec::new(),
    }
}

fn line(id: &str, price: Decimal, quantity: u32, color: &str) -> CartLineItem {
    CartLineItem::new(snapshot(id, price), quantity, Some(color.to_string()), None)
}

#[test]
fn every_mutation_is_persisted() -> TestResult {
    let mut storage = MemoryCartStorage::default();

    {
        let mut cart = CartStore::open(&mut storage)?;
        let adapter = ProductId::from("adapter");

        cart.add_item(line("adapter", Decimal::new(12_050, 2), 1, "black"))?;
        cart.add_item(line("adapter", Decimal::new(12_050, 2), 2, "black"))?;
        cart.add_item(line("cable", Decimal::from(80), 1, "white"))?;
        cart.increase_quantity(&adapter)?;
        cart.decrease_quantity(&adapter)?;
        cart.remove_item(&ProductId::from("cable"))?;
    }

    assert_eq!(storage.saves(), 6);
    assert_eq!(storage.items().len(), 1);
    assert_eq!(storage.items()[0].quantity, 3);

    let reopened = CartStore::open(storage)?;

    assert_eq!(reopened.total_amount(), Decimal::new(36_150, 2));

    Ok(())
}

#[test]
fn line_items_stay_unique_per_variant() -> TestResult {
    let mut cart = CartStore::open(MemoryCartStorage::default())?;

    for color in ["black", "white", "black", "white", "black"] {
        cart.add_item(line("mouse", Decimal::from(900), 1, color))?;
    }

    let quantities: Vec<_> = cart
        .items()
        .iter()
        .map(|line| (line.color.as_deref(), line.quantity))
        .collect();

    assert_eq!(quantities, [(Some("black"), 3), (Some("white"), 2)]);

    Ok(())
}

#[test]
fn quantities_never_drop_below_one() -> TestResult {
    let mut cart = CartStore::open(MemoryCartStorage::default())?;
    let id = ProductId::from("mouse");

    cart.add_item(line("mouse", Decimal::from(900), 2, "black"))?;

    for _ in 0..5 {
        cart.decrease_quantity(&id)?;
    }

    assert_eq!(cart.items()[0].quantity, 1);
    assert_eq!(cart.storage().saves(), 2);

    Ok(())
}

#[test]
fn unknown_products_are_rejected() -> TestResult {
    let mut cart = CartStore::open(MemoryCartStorage::default())?;
    let id = ProductId::from("ghost");

    assert!(matches!(
        cart.increase_quantity(&id),
        Err(CartError::NotInCart(_))
    ));
    assert!(matches!(cart.remove_item(&id), Err(CartError::NotInCart(_))));
    assert!(cart.is_empty());

    Ok(())
}

#[test]
fn totals_round_half_up() -> TestResult {
    let mut cart = CartStore::open(MemoryCartStorage::default())?;

    cart.add_item(line("a", Decimal::new(1_005, 3), 1, "black"))?;

    assert_eq!(cart.total_amount(), Decimal::new(101, 2));

    cart.clear()?;

    assert_eq!(cart.total_amount(), Decimal::ZERO);

    Ok(())
}
