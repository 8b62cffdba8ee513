//! Checkout form fields

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every field on the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CheckoutField {
    /// Billing first name
    FirstName,
    /// Billing last name
    LastName,
    /// Billing company name (optional)
    CompanyName,
    /// Billing town or city
    TownCity,
    /// Billing phone number
    PhoneNumber,
    /// Free-form order notes (optional)
    OrderNotes,
    /// Shipping method label
    ShippingMethod,
    /// Name registered on the mobile-money account that paid
    PayerName,
    /// Mobile number that paid
    PayerMobileNumber,
    /// Mobile-money transaction code
    TransactionCode,
}

impl CheckoutField {
    /// All fields in form order.
    pub const ALL: [CheckoutField; 10] = [
        CheckoutField::FirstName,
        CheckoutField::LastName,
        CheckoutField::CompanyName,
        CheckoutField::TownCity,
        CheckoutField::PhoneNumber,
        CheckoutField::OrderNotes,
        CheckoutField::ShippingMethod,
        CheckoutField::PayerName,
        CheckoutField::PayerMobileNumber,
        CheckoutField::TransactionCode,
    ];

    /// Wire name of the field.
    pub fn key(self) -> &'static str {
        match self {
            CheckoutField::FirstName => "firstName",
            CheckoutField::LastName => "lastName",
            CheckoutField::CompanyName => "companyName",
            CheckoutField::TownCity => "townCity",
            CheckoutField::PhoneNumber => "phoneNumber",
            CheckoutField::OrderNotes => "orderNotes",
            CheckoutField::ShippingMethod => "shippingMethod",
            CheckoutField::PayerName => "mpesaName",
            CheckoutField::PayerMobileNumber => "mobileNumber",
            CheckoutField::TransactionCode => "transactionCode",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            CheckoutField::FirstName => "First Name",
            CheckoutField::LastName => "Last Name",
            CheckoutField::CompanyName => "Company Name",
            CheckoutField::TownCity => "Town/City",
            CheckoutField::PhoneNumber => "Phone Number",
            CheckoutField::OrderNotes => "Order Notes",
            CheckoutField::ShippingMethod => "Shipping Method",
            CheckoutField::PayerName => "M-PESA Name",
            CheckoutField::PayerMobileNumber => "Mobile Phone Number",
            CheckoutField::TransactionCode => "M-PESA Transaction Code",
        }
    }

    /// Whether the form can be submitted with this field left blank.
    pub fn is_optional(self) -> bool {
        matches!(self, CheckoutField::CompanyName | CheckoutField::OrderNotes)
    }
}

impl Display for CheckoutField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// Returned when parsing an unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown checkout field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for CheckoutField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckoutField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Billing group of the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingDetails {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Town or city
    pub town_city: String,

    /// Phone number
    pub phone_number: String,

    /// Order notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_notes: Option<String>,
}

/// Proof of an out-of-band mobile-money payment, verified manually by the shop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    /// Name on the paying account
    #[serde(rename = "mpesaName")]
    pub payer_name: String,

    /// Number of the paying phone
    #[serde(rename = "mobileNumber")]
    pub payer_mobile_number: String,

    /// Transaction code from the confirmation SMS
    #[serde(rename = "transactionCode")]
    pub transaction_code: String,
}
