//! BookAppointmentHandler - Command handler for appointment booking.

use std::sync::Arc;

use crate::application::ScreenError;
use crate::domain::forms::AppointmentRequest;
use crate::ports::{AppointmentBooker, BookingConfirmation};

/// Handler for booking an appointment at a partner hospital.
pub struct BookAppointmentHandler {
    booker: Arc<dyn AppointmentBooker>,
}

impl BookAppointmentHandler {
    pub fn new(booker: Arc<dyn AppointmentBooker>) -> Self {
        Self { booker }
    }

    pub async fn handle(
        &self,
        request: &AppointmentRequest,
    ) -> Result<BookingConfirmation, ScreenError> {
        request.validate()?;
        let confirmation = self.booker.book(request).await?;
        Ok(confirmation)
    }
}
