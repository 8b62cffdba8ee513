//! Checkout validation

use std::fmt::{Display, Formatter, Result as FmtResult};

use rustc_hash::FxHashMap;

use crate::checkout::fields::CheckoutField;

/// Field-scoped validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: FxHashMap<CheckoutField, String>,
}

impl ValidationErrors {
    /// Message for `field`, if it is invalid.
    pub fn get(&self, field: CheckoutField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Records an error for `field`, replacing any previous one.
    pub fn insert(&mut self, field: CheckoutField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Clears the error for `field`.
    pub fn remove(&mut self, field: CheckoutField) {
        self.errors.remove(&field);
    }

    /// Sets or clears the error for `field` from a rule result.
    pub(crate) fn apply(&mut self, field: CheckoutField, result: Result<(), &'static str>) {
        match result {
            Ok(()) => self.remove(field),
            Err(message) => self.insert(field, message),
        }
    }

    /// Whether any field is invalid.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of invalid fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Invalid fields and their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (CheckoutField, &str)> + '_ {
        CheckoutField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|message| (field, message)))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }

            write!(f, "{}: {message}", field.key())?;
            first = false;
        }

        Ok(())
    }
}

fn min_chars(value: &str, min: usize, message: &'static str) -> Result<(), &'static str> {
    if value.trim().chars().count() >= min {
        Ok(())
    } else {
        Err(message)
    }
}

/// Checks a text field's value against its rule.
///
/// The shipping method is checked against the rate table by the form itself; passing it here
/// only checks that something was chosen.
pub fn check_text_field(field: CheckoutField, value: &str) -> Result<(), &'static str> {
    match field {
        CheckoutField::FirstName => min_chars(value, 2, "First name is required"),
        CheckoutField::LastName => min_chars(value, 2, "Last name is required"),
        CheckoutField::TownCity => min_chars(value, 3, "Town/City is required"),
        CheckoutField::PhoneNumber => min_chars(value, 1, "Phone number is required"),
        CheckoutField::ShippingMethod => min_chars(value, 1, SHIPPING_METHOD_REQUIRED),
        CheckoutField::PayerName => min_chars(value, 1, "Mpesa Name is required"),
        CheckoutField::PayerMobileNumber => min_chars(value, 1, "Mobile number is required"),
        CheckoutField::TransactionCode => min_chars(value, 1, "Transaction code is required"),
        CheckoutField::CompanyName | CheckoutField::OrderNotes => Ok(()),
    }
}

/// Message shown when no recognised shipping method is selected.
pub const SHIPPING_METHOD_REQUIRED: &str = "Please select a shipping method";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_need_two_characters() {
        assert_eq!(
            check_text_field(CheckoutField::FirstName, "A"),
            Err("First name is required")
        );
        assert_eq!(check_text_field(CheckoutField::FirstName, "Al"), Ok(()));
        assert_eq!(
            check_text_field(CheckoutField::LastName, " B "),
            Err("Last name is required")
        );
    }

    #[test]
    fn town_needs_three_characters() {
        assert!(check_text_field(CheckoutField::TownCity, "Ny").is_err());
        assert!(check_text_field(CheckoutField::TownCity, "Nyeri").is_ok());
    }

    #[test]
    fn required_fields_reject_blank() {
        for field in [
            CheckoutField::PhoneNumber,
            CheckoutField::ShippingMethod,
            CheckoutField::PayerName,
            CheckoutField::PayerMobileNumber,
            CheckoutField::TransactionCode,
        ] {
            assert!(check_text_field(field, "  ").is_err(), "{field} accepted blank");
            assert!(check_text_field(field, "x").is_ok(), "{field} rejected value");
        }
    }

    #[test]
    fn payment_fields_use_payment_messages() {
        assert_eq!(
            check_text_field(CheckoutField::PayerName, ""),
            Err("Mpesa Name is required")
        );
        assert_eq!(
            check_text_field(CheckoutField::PayerMobileNumber, ""),
            Err("Mobile number is required")
        );
        assert_eq!(
            check_text_field(CheckoutField::TransactionCode, ""),
            Err("Transaction code is required")
        );
    }

    #[test]
    fn optional_fields_accept_blank() {
        assert_eq!(check_text_field(CheckoutField::CompanyName, ""), Ok(()));
        assert_eq!(check_text_field(CheckoutField::OrderNotes, ""), Ok(()));
    }

    #[test]
    fn multibyte_names_count_characters() {
        assert_eq!(check_text_field(CheckoutField::FirstName, "Zé"), Ok(()));
    }

    #[test]
    fn errors_iterate_in_form_order() {
        let mut errors = ValidationErrors::default();

        errors.insert(CheckoutField::TransactionCode, "c");
        errors.insert(CheckoutField::FirstName, "a");
        errors.insert(CheckoutField::TownCity, "b");
        errors.remove(CheckoutField::TownCity);

        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();

        assert_eq!(
            fields,
            [CheckoutField::FirstName, CheckoutField::TransactionCode]
        );
        assert_eq!(errors.to_string(), "firstName: a; transactionCode: c");
    }
}
