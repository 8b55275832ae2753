//! Plan purchase payment port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::forms::{PaymentConfirmation, PaymentInitiation};

use super::ApiError;

/// Port for the two-step plan purchase flow.
///
/// `initiate` opens an order and hands back a checkout URL; once the
/// user completes checkout, `confirm` reports the provider reference
/// and learns the final state.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Open a payment order for a plan purchase.
    async fn initiate(&self, request: &PaymentInitiation) -> Result<PaymentSession, ApiError>;

    /// Confirm a completed checkout.
    async fn confirm(&self, confirmation: &PaymentConfirmation)
        -> Result<PaymentOutcome, ApiError>;
}

/// An open payment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSession {
    /// Backend order id, echoed back on confirm.
    pub order_id: String,

    /// Provider checkout URL to hand to the system browser, when the
    /// flow needs one.
    pub checkout_url: Option<String>,

    /// Amount in minor units, as the backend computed it.
    pub amount_minor: u64,

    /// ISO 4217 currency code.
    pub currency: String,
}

/// Final state of a payment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    /// The order this outcome belongs to.
    pub order_id: String,

    /// Settlement state.
    pub status: PaymentStatus,
}

/// Settlement state reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Funds captured; the plan is active.
    Succeeded,

    /// Provider still processing.
    Pending,

    /// Payment failed or was abandoned.
    Failed,

    /// Status string the client does not recognize.
    Unknown,
}

impl PaymentStatus {
    /// Parses the backend's status string, defaulting to `Unknown`.
    pub fn parse(status: &str) -> Self {
        match status {
            "succeeded" => PaymentStatus::Succeeded,
            "pending" => PaymentStatus::Pending,
            "failed" => PaymentStatus::Failed,
            _ => PaymentStatus::Unknown,
        }
    }

    /// True once the purchase unlocked the plan.
    pub fn has_cleared(&self) -> bool {
        matches!(self, PaymentStatus::Succeeded)
    }
}
