//! Appointment booking form.

use crate::domain::foundation::{Timestamp, ValidationError};

/// Request to book an appointment at a partner hospital.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRequest {
    /// Partner hospital the user picked.
    pub hospital_id: String,

    /// Department or speciality, e.g. "cardiology".
    pub department: String,

    /// Requested slot; the backend may counter-propose.
    pub preferred_slot: Timestamp,

    /// Name of the patient attending.
    pub patient_name: String,

    /// Contact number for confirmation calls, digits only.
    pub contact_number: String,
}

impl AppointmentRequest {
    /// Validates the form before any network call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.hospital_id.trim().is_empty() {
            return Err(ValidationError::empty_field("hospital_id"));
        }
        if self.department.trim().is_empty() {
            return Err(ValidationError::empty_field("department"));
        }
        if self.patient_name.trim().is_empty() {
            return Err(ValidationError::empty_field("patient_name"));
        }
        let digits = self.contact_number.trim();
        if digits.is_empty() {
            return Err(ValidationError::empty_field("contact_number"));
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) || !(8..=15).contains(&digits.len()) {
            return Err(ValidationError::invalid_format(
                "contact_number",
                "expected 8-15 digits",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> AppointmentRequest {
        AppointmentRequest {
            hospital_id: "hosp-22".to_string(),
            department: "cardiology".to_string(),
            preferred_slot: Timestamp::from_unix_secs(1_760_000_000),
            patient_name: "R. Sharma".to_string(),
            contact_number: "9876543210".to_string(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn blank_hospital_is_rejected() {
        let form = AppointmentRequest {
            hospital_id: "".to_string(),
            ..valid_request()
        };
        assert_eq!(form.validate().unwrap_err().field(), "hospital_id");
    }

    #[test]
    fn non_numeric_contact_is_rejected() {
        let form = AppointmentRequest {
            contact_number: "98765-43210".to_string(),
            ..valid_request()
        };
        assert_eq!(form.validate().unwrap_err().field(), "contact_number");
    }

    #[test]
    fn short_contact_is_rejected() {
        let form = AppointmentRequest {
            contact_number: "12345".to_string(),
            ..valid_request()
        };
        assert!(form.validate().is_err());
    }
}
