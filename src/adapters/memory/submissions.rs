//! Recording fake for the fire-and-forget submitter ports.
//!
//! Counts every call so tests can assert that locally rejected forms
//! never reach the network, and can be switched to fail so screens can
//! prove they keep form state on error.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::forms::{
    AppointmentRequest, FeedbackForm, GrievanceForm, PaymentConfirmation, PaymentInitiation,
};
use crate::ports::{
    ApiError, AppointmentBooker, BookingConfirmation, BookingStatus, FeedbackReceipt,
    FeedbackSubmitter, GrievanceReceipt, PaymentGateway, PaymentOutcome, PaymentSession,
    PaymentStatus,
};

/// Counts submissions and answers with canned receipts.
#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    calls: AtomicUsize,
    failure: Option<ApiError>,
}

impl RecordingSubmitter {
    /// Accepts every submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails every submission with the given error.
    pub fn failing(error: ApiError) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failure: Some(error),
        }
    }

    /// Number of submissions that reached this fake.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FeedbackSubmitter for RecordingSubmitter {
    async fn submit_feedback(&self, _form: &FeedbackForm) -> Result<FeedbackReceipt, ApiError> {
        self.record()?;
        Ok(FeedbackReceipt {
            id: "feedback-1".to_string(),
        })
    }

    async fn submit_grievance(&self, _form: &GrievanceForm) -> Result<GrievanceReceipt, ApiError> {
        self.record()?;
        Ok(GrievanceReceipt {
            id: "grievance-1".to_string(),
            ticket_number: Some("TKT-0001".to_string()),
        })
    }
}

#[async_trait]
impl AppointmentBooker for RecordingSubmitter {
    async fn book(&self, request: &AppointmentRequest) -> Result<BookingConfirmation, ApiError> {
        self.record()?;
        Ok(BookingConfirmation {
            id: "appointment-1".to_string(),
            scheduled_at: request.preferred_slot,
            status: BookingStatus::Confirmed,
        })
    }
}

#[async_trait]
impl PaymentGateway for RecordingSubmitter {
    async fn initiate(&self, request: &PaymentInitiation) -> Result<PaymentSession, ApiError> {
        self.record()?;
        Ok(PaymentSession {
            order_id: "order-1".to_string(),
            checkout_url: Some("https://pay.example.com/order-1".to_string()),
            amount_minor: request.amount_minor,
            currency: request.currency.clone(),
        })
    }

    async fn confirm(
        &self,
        confirmation: &PaymentConfirmation,
    ) -> Result<PaymentOutcome, ApiError> {
        self.record()?;
        Ok(PaymentOutcome {
            order_id: confirmation.order_id.clone(),
            status: PaymentStatus::Succeeded,
        })
    }
}
