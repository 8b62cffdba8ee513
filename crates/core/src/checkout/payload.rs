//! Order payload

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    cart::CartLineItem,
    checkout::fields::{BillingDetails, PaymentConfirmation},
    identity::CustomerIdentity,
    pricing::total_price,
    shipping::ShippingSelection,
};

/// Shipping group of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    /// Method label
    pub shipping_method: String,

    /// Flat cost of the method
    #[serde(with = "rust_decimal::serde::float")]
    pub shipping_cost: Decimal,
}

impl From<&ShippingSelection> for ShippingDetails {
    fn from(selection: &ShippingSelection) -> Self {
        Self {
            shipping_method: selection.method().to_string(),
            shipping_cost: selection.cost(),
        }
    }
}

/// Snapshot of everything an order submission sends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    customer: CustomerIdentity,
    cart_items: Vec<CartLineItem>,
    billing_details: BillingDetails,
    shipping_details: ShippingDetails,
    payment_details: PaymentConfirmation,
    #[serde(with = "rust_decimal::serde::float")]
    total_amount: Decimal,
}

impl OrderPayload {
    /// Assembles a payload; the total is the rounded cart total plus the shipping cost.
    pub fn new(
        customer: CustomerIdentity,
        cart_items: &[CartLineItem],
        billing_details: BillingDetails,
        shipping: &ShippingSelection,
        payment_details: PaymentConfirmation,
    ) -> Self {
        let total_amount = total_price(cart_items) + shipping.cost();

        Self {
            customer,
            cart_items: cart_items.to_vec(),
            billing_details,
            shipping_details: shipping.into(),
            payment_details,
            total_amount,
        }
    }

    /// Customer placing the order.
    pub fn customer(&self) -> &CustomerIdentity {
        &self.customer
    }

    /// Ordered line items.
    pub fn cart_items(&self) -> &[CartLineItem] {
        &self.cart_items
    }

    /// Billing group.
    pub fn billing_details(&self) -> &BillingDetails {
        &self.billing_details
    }

    /// Shipping group.
    pub fn shipping_details(&self) -> &ShippingDetails {
        &self.shipping_details
    }

    /// Payment confirmation group.
    pub fn payment_details(&self) -> &PaymentConfirmation {
        &self.payment_details
    }

    /// Amount due including shipping.
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }
}
