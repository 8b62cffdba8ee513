//! Order history

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::ProductId;

/// A placed order as returned by the order history API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id
    #[serde(rename = "_id")]
    pub id: String,

    /// Customer who placed the order
    pub customer_clerk_id: String,

    /// Customer email at the time of ordering
    #[serde(default)]
    pub email: String,

    /// Customer name at the time of ordering
    #[serde(default)]
    pub name: String,

    /// Ordered lines
    #[serde(default)]
    pub products: Vec<OrderItem>,

    /// Billing group, absent on older orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<OrderBillingDetails>,

    /// Shipping group, absent on older orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<OrderShippingDetails>,

    /// Payment confirmation group, absent on older orders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<OrderPaymentDetails>,

    /// Amount charged including shipping
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,

    /// When the order was placed
    pub created_at: Timestamp,
}

impl Order {
    /// Billing group, or an empty one when the order has none.
    pub fn billing(&self) -> OrderBillingDetails {
        self.billing_details.clone().unwrap_or_default()
    }

    /// Shipping group, or an empty one when the order has none.
    pub fn shipping(&self) -> OrderShippingDetails {
        self.shipping_details.clone().unwrap_or_default()
    }

    /// Payment group, or an empty one when the order has none.
    pub fn payment(&self) -> OrderPaymentDetails {
        self.payment_details.clone().unwrap_or_default()
    }
}

/// A line of a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Ordered product, `None` when it has since been deleted
    #[serde(default)]
    pub product: Option<OrderedProduct>,

    /// Chosen colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Chosen size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Ordered quantity
    pub quantity: u32,
}

/// Product fields kept on an order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedProduct {
    /// Product id
    #[serde(rename = "_id")]
    pub id: ProductId,

    /// Title
    pub title: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Billing group as stored on an order; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderBillingDetails {
    /// First name
    pub first_name: Option<String>,
    /// Last name
    pub last_name: Option<String>,
    /// Company name
    pub company_name: Option<String>,
    /// Town or city
    pub town_city: Option<String>,
    /// Phone number
    pub phone_number: Option<String>,
    /// Order notes
    pub order_notes: Option<String>,
}

/// Shipping group as stored on an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderShippingDetails {
    /// Method label
    pub shipping_method: Option<String>,

    /// Flat cost charged
    #[serde(with = "rust_decimal::serde::float_option")]
    pub shipping_cost: Option<Decimal>,
}

/// Payment confirmation group as stored on an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderPaymentDetails {
    /// Name on the paying account
    #[serde(rename = "mpesaName")]
    pub payer_name: Option<String>,

    /// Number of the paying phone
    #[serde(rename = "mobileNumber")]
    pub payer_mobile_number: Option<String>,

    /// Transaction code
    #[serde(rename = "transactionCode")]
    pub transaction_code: Option<String>,
}

/// Filters out blank values, which the history view treats the same as missing ones.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Sorts orders newest first; orders placed at the same instant keep their relative order.
pub fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
