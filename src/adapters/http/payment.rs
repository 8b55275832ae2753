//! Plan purchase flow over `POST /plan/pay/initiate` and
//! `POST /plan/pay/confirm`.

use async_trait::async_trait;

use crate::domain::forms::{PaymentConfirmation, PaymentInitiation};
use crate::ports::{ApiError, PaymentGateway, PaymentOutcome, PaymentSession};

use super::client::RestGateway;
use super::dto::{PaymentConfirmBody, PaymentInitiateBody, PaymentOutcomeDto, PaymentSessionDto};

#[async_trait]
impl PaymentGateway for RestGateway {
    async fn initiate(&self, request: &PaymentInitiation) -> Result<PaymentSession, ApiError> {
        let body = PaymentInitiateBody {
            plan_id: request.plan_id.as_str().to_string(),
            currency: request.currency.clone(),
            amount_minor: request.amount_minor,
        };
        let dto: PaymentSessionDto = self.post_json("/plan/pay/initiate", &body).await?;
        let session = dto.into_domain(&request.currency);
        tracing::info!(order = %session.order_id, "Payment order opened");
        Ok(session)
    }

    async fn confirm(
        &self,
        confirmation: &PaymentConfirmation,
    ) -> Result<PaymentOutcome, ApiError> {
        let body = PaymentConfirmBody {
            order_id: confirmation.order_id.clone(),
            payment_reference: confirmation.payment_reference.clone(),
        };
        let dto: PaymentOutcomeDto = self.post_json("/plan/pay/confirm", &body).await?;
        let outcome = dto.into_domain(&confirmation.order_id);
        tracing::info!(
            order = %outcome.order_id,
            status = ?outcome.status,
            "Payment outcome received"
        );
        Ok(outcome)
    }
}
