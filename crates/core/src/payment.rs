//! Manual mobile-payment instructions shown before the payment confirmation fields.

/// How to pay by mobile money before confirming the transaction on the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentInstructions {
    /// Paybill business number
    pub paybill_number: String,

    /// Account number to quote
    pub account_number: String,

    /// Name the payer will see on the confirmation
    pub recipient_name: String,
}

impl PaymentInstructions {
    /// Numbered steps the payer follows on their phone.
    pub fn steps(&self) -> Vec<String> {
        vec![
            "Go to M-PESA.".to_string(),
            "Select Lipa na M-PESA.".to_string(),
            format!("Enter paybill number {}.", self.paybill_number),
            format!("Enter account number {}.", self.account_number),
            "Enter the amount.".to_string(),
            "Enter your M-PESA PIN.".to_string(),
            "Confirm that all details are correct and press OK.".to_string(),
            "You will receive a confirmation SMS from M-PESA.".to_string(),
            "Enter the transaction code below.".to_string(),
        ]
    }
}

impl Default for PaymentInstructions {
    fn default() -> Self {
        Self {
            paybill_number: "522533".to_string(),
            account_number: "5939840".to_string(),
            recipient_name: "microplug".to_string(),
        }
    }
}
