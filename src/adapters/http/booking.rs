//! Appointment booking over `POST /appointments`.

use async_trait::async_trait;

use crate::domain::forms::AppointmentRequest;
use crate::ports::{ApiError, AppointmentBooker, BookingConfirmation};

use super::client::RestGateway;
use super::dto::{AppointmentBody, BookingDto};

#[async_trait]
impl AppointmentBooker for RestGateway {
    async fn book(&self, request: &AppointmentRequest) -> Result<BookingConfirmation, ApiError> {
        let body = AppointmentBody {
            hospital_id: request.hospital_id.clone(),
            department: request.department.clone(),
            preferred_slot: request.preferred_slot.as_unix_secs(),
            patient_name: request.patient_name.clone(),
            contact_number: request.contact_number.clone(),
            city: self.session().preferred_city().map(str::to_string),
        };
        let dto: BookingDto = self.post_json("/appointments", &body).await?;
        let confirmation = dto.into_domain(request.preferred_slot);
        tracing::info!(
            hospital = %request.hospital_id,
            status = ?confirmation.status,
            "Appointment requested"
        );
        Ok(confirmation)
    }
}
