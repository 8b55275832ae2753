//! ConfirmPaymentHandler - Command handler for closing a payment order.

use std::sync::Arc;

use crate::application::ScreenError;
use crate::domain::forms::PaymentConfirmation;
use crate::ports::{PaymentGateway, PaymentOutcome};

/// Handler for the second step of a plan purchase.
pub struct ConfirmPaymentHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl ConfirmPaymentHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        confirmation: &PaymentConfirmation,
    ) -> Result<PaymentOutcome, ScreenError> {
        confirmation.validate()?;
        let outcome = self.gateway.confirm(confirmation).await?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::RecordingSubmitter;

    fn confirmation() -> PaymentConfirmation {
        PaymentConfirmation {
            order_id: "order-1".to_string(),
            payment_reference: "pay-abc".to_string(),
        }
    }

    #[tokio::test]
    async fn valid_confirmation_reports_outcome() {
        let handler = ConfirmPaymentHandler::new(Arc::new(RecordingSubmitter::new()));
        let outcome = handler.handle(&confirmation()).await.unwrap();
        assert!(outcome.status.has_cleared());
    }

    #[tokio::test]
    async fn blank_reference_never_reaches_the_network() {
        let gateway = Arc::new(RecordingSubmitter::new());
        let handler = ConfirmPaymentHandler::new(gateway.clone());

        let mut invalid = confirmation();
        invalid.payment_reference = "  ".to_string();

        let err = handler.handle(&invalid).await.unwrap_err();
        assert_eq!(err.field(), Some("payment_reference"));
        assert_eq!(gateway.call_count(), 0);
    }
}
