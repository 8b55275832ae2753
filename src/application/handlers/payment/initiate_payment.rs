//! InitiatePaymentHandler - Command handler for opening a payment order.

use std::sync::Arc;

use crate::application::ScreenError;
use crate::domain::forms::PaymentInitiation;
use crate::ports::{PaymentGateway, PaymentSession};

/// Handler for the first step of a plan purchase.
pub struct InitiatePaymentHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl InitiatePaymentHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, request: &PaymentInitiation) -> Result<PaymentSession, ScreenError> {
        request.validate()?;
        let session = self.gateway.initiate(request).await?;
        Ok(session)
    }
}
