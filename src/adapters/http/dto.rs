//! Wire DTOs for the backend REST API.
//!
//! The backend's JSON is loosely shaped: fields go missing, quota maps
//! arrive half-filled, ids occasionally blank. Every DTO models that
//! looseness with `Option` + `#[serde(default)]` and converts to a fully
//! defaulted domain value here, so nothing downstream ever sees an
//! absent field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::domain::catalog::{PlanCatalogEntry, PlanTier, QuotaLimits};
use crate::domain::comparison::{CellValue, ComparisonTable, FeatureRow};
use crate::domain::entitlement::{QuotaUsage, UserEntitlement};
use crate::domain::foundation::{EntitlementId, PartnerId, PlanId, RowId, Timestamp};
use crate::ports::{
    ApiError, BookingConfirmation, BookingStatus, FeedbackReceipt, GrievanceReceipt,
    MembershipView, PaymentOutcome, PaymentSession, PaymentStatus,
};

// ════════════════════════════════════════════════════════════════════════════
// Catalog
// ════════════════════════════════════════════════════════════════════════════

/// One plan from `GET /plans`.
#[derive(Debug, Deserialize)]
pub struct PlanEntryDto {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tier: Option<PlanTier>,
    #[serde(default)]
    pub price: BTreeMap<String, u64>,
    #[serde(default)]
    pub limits: LimitsDto,
}

/// Quota limits as the backend sends them.
#[derive(Debug, Default, Deserialize)]
pub struct LimitsDto {
    #[serde(default)]
    pub opd: Option<u32>,
    #[serde(default)]
    pub lab: Option<u32>,
    #[serde(default)]
    pub video: Option<u32>,
}

impl From<LimitsDto> for QuotaLimits {
    fn from(dto: LimitsDto) -> Self {
        QuotaLimits {
            opd_visits: dto.opd.unwrap_or(0),
            lab_tests: dto.lab.unwrap_or(0),
            video_consults: dto.video.unwrap_or(0),
        }
    }
}

impl PlanEntryDto {
    /// Converts to a domain entry; entries with blank ids are unusable
    /// and yield `None`.
    pub fn into_domain(self) -> Option<PlanCatalogEntry> {
        let id = PlanId::new(self.id).ok()?;
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| id.as_str().to_string());
        Some(PlanCatalogEntry {
            id,
            name,
            tier: self.tier.unwrap_or(PlanTier::Basic),
            prices: self.price,
            limits: self.limits.into(),
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Entitlement & membership
// ════════════════════════════════════════════════════════════════════════════

/// Response of `GET /user/plan-usage`.
#[derive(Debug, Deserialize)]
pub struct EntitlementDto {
    pub id: String,
    #[serde(rename = "planId")]
    pub plan_id: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub used: UsedDto,
}

/// Consumption counters as the backend sends them.
#[derive(Debug, Default, Deserialize)]
pub struct UsedDto {
    #[serde(rename = "opdUsed", default)]
    pub opd_used: u32,
    #[serde(rename = "labUsed", default)]
    pub lab_used: u32,
    #[serde(rename = "videoConsultUsed", default)]
    pub video_consult_used: u32,
}

impl EntitlementDto {
    /// Converts to the domain record; blank ids mean the payload is
    /// unusable and surface as a decode error.
    pub fn into_domain(self) -> Result<UserEntitlement, ApiError> {
        let id = EntitlementId::new(self.id)
            .map_err(|_| ApiError::decode("Entitlement payload is missing its id"))?;
        let plan_id = PlanId::new(self.plan_id)
            .map_err(|_| ApiError::decode("Entitlement payload is missing its plan id"))?;
        Ok(UserEntitlement {
            id,
            plan_id,
            created_at: Timestamp::from_unix_secs(self.created_at.unwrap_or(0)),
            used: QuotaUsage {
                opd_visits: self.used.opd_used,
                lab_tests: self.used.lab_used,
                video_consults: self.used.video_consult_used,
            },
        })
    }
}

/// Response of `GET /user/my-plan` and both membership mutations.
#[derive(Debug, Deserialize)]
pub struct MembershipDto {
    #[serde(rename = "planId")]
    pub plan_id: String,
    #[serde(rename = "planName", default)]
    pub plan_name: Option<String>,
    #[serde(default)]
    pub tier: Option<PlanTier>,
    #[serde(rename = "autoRenew", default)]
    pub auto_renew: bool,
    #[serde(rename = "startedAt", default)]
    pub started_at: Option<i64>,
    #[serde(rename = "expiresAt", default)]
    pub expires_at: Option<i64>,
}

impl MembershipDto {
    pub fn into_domain(self) -> Result<MembershipView, ApiError> {
        let plan_id = PlanId::new(self.plan_id)
            .map_err(|_| ApiError::decode("Membership payload is missing its plan id"))?;
        let plan_name = self
            .plan_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| plan_id.as_str().to_string());
        Ok(MembershipView {
            plan_id,
            plan_name,
            tier: self.tier.unwrap_or(PlanTier::Basic),
            auto_renew: self.auto_renew,
            started_at: Timestamp::from_unix_secs(self.started_at.unwrap_or(0)),
            expires_at: self.expires_at.map(Timestamp::from_unix_secs),
        })
    }
}

/// Body of `PUT /membership/update`.
#[derive(Debug, Serialize)]
pub struct UpdateMembershipBody {
    #[serde(rename = "planId")]
    pub plan_id: String,
}

/// Body of `PUT /membership/toggle-renew`.
#[derive(Debug, Serialize)]
pub struct ToggleRenewBody {
    #[serde(rename = "autoRenew")]
    pub auto_renew: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Comparison table
// ════════════════════════════════════════════════════════════════════════════

/// Wire shape of a saved comparison table.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonTableDto {
    #[serde(default)]
    pub plans: Vec<String>,
    #[serde(default)]
    pub rows: Vec<ComparisonRowDto>,
}

/// Wire shape of one feature row.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonRowDto {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub values: Vec<CellValue>,
}

impl ComparisonTableDto {
    /// Rebuilds the aggregate; shape problems (short rows, blank
    /// titles) are repaired rather than rejected.
    pub fn into_domain(self) -> ComparisonTable {
        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                let id = row
                    .id
                    .map(RowId::from_uuid)
                    .unwrap_or_default();
                (id, row.title, row.values)
            })
            .collect();
        ComparisonTable::from_saved_parts(self.plans, rows)
    }

    pub fn from_domain(table: &ComparisonTable) -> Self {
        Self {
            plans: table.plans().to_vec(),
            rows: table
                .rows()
                .iter()
                .map(|row: &FeatureRow| ComparisonRowDto {
                    id: Some(*row.id().as_uuid()),
                    title: row.title().to_string(),
                    values: row.values().to_vec(),
                })
                .collect(),
        }
    }
}

/// Body of `POST /plancomparison`.
#[derive(Debug, Serialize)]
pub struct SaveComparisonBody {
    #[serde(rename = "partnerId")]
    pub partner_id: String,
    #[serde(flatten)]
    pub table: ComparisonTableDto,
}

impl SaveComparisonBody {
    pub fn new(partner: &PartnerId, table: &ComparisonTable) -> Self {
        Self {
            partner_id: partner.as_str().to_string(),
            table: ComparisonTableDto::from_domain(table),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Submitters
// ════════════════════════════════════════════════════════════════════════════

/// Response of `POST /feedback/submit`.
#[derive(Debug, Deserialize)]
pub struct FeedbackReceiptDto {
    #[serde(default)]
    pub id: Option<String>,
}

impl From<FeedbackReceiptDto> for FeedbackReceipt {
    fn from(dto: FeedbackReceiptDto) -> Self {
        FeedbackReceipt {
            id: dto.id.unwrap_or_default(),
        }
    }
}

/// Response of `POST /grievance/submit`.
#[derive(Debug, Deserialize)]
pub struct GrievanceReceiptDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "ticketNumber", default)]
    pub ticket_number: Option<String>,
}

impl From<GrievanceReceiptDto> for GrievanceReceipt {
    fn from(dto: GrievanceReceiptDto) -> Self {
        GrievanceReceipt {
            id: dto.id.unwrap_or_default(),
            ticket_number: dto.ticket_number,
        }
    }
}

/// Body of `POST /appointments`.
#[derive(Debug, Serialize)]
pub struct AppointmentBody {
    #[serde(rename = "hospitalId")]
    pub hospital_id: String,
    pub department: String,
    #[serde(rename = "preferredSlot")]
    pub preferred_slot: i64,
    #[serde(rename = "patientName")]
    pub patient_name: String,
    #[serde(rename = "contactNumber")]
    pub contact_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Response of `POST /appointments`.
#[derive(Debug, Deserialize)]
pub struct BookingDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "scheduledAt", default)]
    pub scheduled_at: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}

impl BookingDto {
    /// Converts to the confirmation; a missing slot falls back to the
    /// one the user asked for.
    pub fn into_domain(self, requested_slot: Timestamp) -> BookingConfirmation {
        BookingConfirmation {
            id: self.id.unwrap_or_default(),
            scheduled_at: self
                .scheduled_at
                .map(Timestamp::from_unix_secs)
                .unwrap_or(requested_slot),
            status: BookingStatus::parse(self.status.as_deref().unwrap_or("")),
        }
    }
}

/// Body of `POST /plan/pay/initiate`.
#[derive(Debug, Serialize)]
pub struct PaymentInitiateBody {
    #[serde(rename = "planId")]
    pub plan_id: String,
    pub currency: String,
    #[serde(rename = "amountMinor")]
    pub amount_minor: u64,
}

/// Response of `POST /plan/pay/initiate`.
#[derive(Debug, Deserialize)]
pub struct PaymentSessionDto {
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "checkoutUrl", default)]
    pub checkout_url: Option<String>,
    #[serde(rename = "amountMinor", default)]
    pub amount_minor: u64,
    #[serde(default)]
    pub currency: Option<String>,
}

impl PaymentSessionDto {
    pub fn into_domain(self, requested_currency: &str) -> PaymentSession {
        PaymentSession {
            order_id: self.order_id,
            checkout_url: self.checkout_url,
            amount_minor: self.amount_minor,
            currency: self
                .currency
                .filter(|currency| !currency.trim().is_empty())
                .unwrap_or_else(|| requested_currency.to_string()),
        }
    }
}

/// Body of `POST /plan/pay/confirm`.
#[derive(Debug, Serialize)]
pub struct PaymentConfirmBody {
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "paymentReference")]
    pub payment_reference: String,
}

/// Response of `POST /plan/pay/confirm`.
#[derive(Debug, Deserialize)]
pub struct PaymentOutcomeDto {
    #[serde(rename = "orderId", default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl PaymentOutcomeDto {
    pub fn into_domain(self, requested_order: &str) -> PaymentOutcome {
        PaymentOutcome {
            order_id: self
                .order_id
                .filter(|order| !order.trim().is_empty())
                .unwrap_or_else(|| requested_order.to_string()),
            status: PaymentStatus::parse(self.status.as_deref().unwrap_or("")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::QuotaCategory;

    #[test]
    fn plan_entry_defaults_missing_limits_to_zero() {
        let dto: PlanEntryDto =
            serde_json::from_str(r#"{"id":"p1","limits":{"opd":5}}"#).unwrap();
        let entry = dto.into_domain().unwrap();
        assert_eq!(entry.limits.limit(QuotaCategory::OpdVisits), 5);
        assert_eq!(entry.limits.limit(QuotaCategory::LabTests), 0);
        assert_eq!(entry.limits.limit(QuotaCategory::VideoConsults), 0);
    }

    #[test]
    fn plan_entry_without_limits_defaults_everything() {
        let dto: PlanEntryDto = serde_json::from_str(r#"{"id":"p1"}"#).unwrap();
        let entry = dto.into_domain().unwrap();
        assert_eq!(entry.limits, QuotaLimits::default());
        assert_eq!(entry.name, "p1");
        assert_eq!(entry.tier, PlanTier::Basic);
    }

    #[test]
    fn plan_entry_with_blank_id_is_dropped() {
        let dto: PlanEntryDto = serde_json::from_str(r#"{"id":"  "}"#).unwrap();
        assert!(dto.into_domain().is_none());
    }

    #[test]
    fn entitlement_defaults_missing_counters_to_zero() {
        let dto: EntitlementDto = serde_json::from_str(
            r#"{"id":"ent-1","planId":"p1","used":{"opdUsed":3}}"#,
        )
        .unwrap();
        let entitlement = dto.into_domain().unwrap();
        assert_eq!(entitlement.used.opd_visits, 3);
        assert_eq!(entitlement.used.lab_tests, 0);
        assert_eq!(entitlement.used.video_consults, 0);
    }

    #[test]
    fn entitlement_without_used_block_is_all_zero() {
        let dto: EntitlementDto =
            serde_json::from_str(r#"{"id":"ent-1","planId":"p1"}"#).unwrap();
        let entitlement = dto.into_domain().unwrap();
        assert_eq!(entitlement.used, QuotaUsage::default());
    }

    #[test]
    fn entitlement_with_blank_plan_id_fails_decode() {
        let dto: EntitlementDto =
            serde_json::from_str(r#"{"id":"ent-1","planId":""}"#).unwrap();
        assert!(dto.into_domain().is_err());
    }

    #[test]
    fn membership_defaults_name_to_plan_id() {
        let dto: MembershipDto = serde_json::from_str(r#"{"planId":"p2"}"#).unwrap();
        let view = dto.into_domain().unwrap();
        assert_eq!(view.plan_name, "p2");
        assert!(!view.auto_renew);
        assert!(view.expires_at.is_none());
    }

    #[test]
    fn comparison_table_round_trips_through_dto() {
        let mut table = ComparisonTable::new();
        table.add_plan("Basic").unwrap();
        table.add_plan("Prime").unwrap();
        table.add_feature("OPD").unwrap();
        table.set_cell(0, 0, CellValue::Included);

        let dto = ComparisonTableDto::from_domain(&table);
        let json = serde_json::to_string(&dto).unwrap();
        let back: ComparisonTableDto = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_domain(), table);
    }

    #[test]
    fn comparison_table_dto_repairs_short_rows() {
        let dto: ComparisonTableDto = serde_json::from_str(
            r#"{"plans":["Basic","Prime"],"rows":[{"title":"OPD","values":["included"]}]}"#,
        )
        .unwrap();
        let table = dto.into_domain();
        assert!(table.is_aligned());
        assert_eq!(table.rows()[0].values()[1], CellValue::Unset);
    }

    #[test]
    fn save_body_carries_partner_and_flattened_table() {
        let partner = PartnerId::new("hosp-9").unwrap();
        let mut table = ComparisonTable::new();
        table.add_plan("Basic").unwrap();
        let body = SaveComparisonBody::new(&partner, &table);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["partnerId"], "hosp-9");
        assert_eq!(json["plans"][0], "Basic");
    }

    #[test]
    fn booking_falls_back_to_requested_slot() {
        let dto: BookingDto = serde_json::from_str(r#"{"id":"apt-1"}"#).unwrap();
        let requested = Timestamp::from_unix_secs(1_234);
        let confirmation = dto.into_domain(requested);
        assert_eq!(confirmation.scheduled_at, requested);
        assert_eq!(confirmation.status, BookingStatus::Unknown);
    }

    #[test]
    fn payment_outcome_defaults_order_id_to_request() {
        let dto: PaymentOutcomeDto =
            serde_json::from_str(r#"{"status":"succeeded"}"#).unwrap();
        let outcome = dto.into_domain("ord-7");
        assert_eq!(outcome.order_id, "ord-7");
        assert!(outcome.status.has_cleared());
    }
}
