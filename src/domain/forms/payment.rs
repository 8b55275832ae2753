//! Plan purchase payment payloads.

use crate::domain::foundation::{PlanId, ValidationError};

/// Request to open a payment order for a plan purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentInitiation {
    /// The plan being purchased.
    pub plan_id: PlanId,

    /// ISO 4217 currency code, e.g. "INR".
    pub currency: String,

    /// Amount in minor units, taken from the catalog price.
    pub amount_minor: u64,
}

impl PaymentInitiation {
    /// Validates the payload before any network call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let currency = self.currency.trim();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::invalid_format(
                "currency",
                "expected a 3-letter ISO code",
            ));
        }
        if self.amount_minor == 0 {
            return Err(ValidationError::invalid_format(
                "amount_minor",
                "amount must be positive",
            ));
        }
        Ok(())
    }
}

/// Confirmation that the user completed checkout for an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfirmation {
    /// Order id returned by the initiate call.
    pub order_id: String,

    /// Reference handed back by the payment provider's checkout page.
    pub payment_reference: String,
}

impl PaymentConfirmation {
    /// Validates the payload before any network call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.order_id.trim().is_empty() {
            return Err(ValidationError::empty_field("order_id"));
        }
        if self.payment_reference.trim().is_empty() {
            return Err(ValidationError::empty_field("payment_reference"));
        }
        Ok(())
    }
}
