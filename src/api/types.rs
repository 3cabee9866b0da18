use serde::{Deserialize, Serialize};

use crate::db::{
    CertificateListRow, FollowUpListRow, ReportDetail, ReportListRow, ViolationCounts,
    ViolationDetail, ViolationListRow,
};
use crate::entities::{establishments, inspection_certificates, inspection_violations};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub role: String,
    pub avatar: Option<String>,
}

impl From<crate::db::User> for UserDto {
    fn from(user: crate::db::User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
            avatar: user.avatar,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct EstablishmentDto {
    pub establishment_name: String,
    pub establishment_type: String,
    pub barangay: String,
    pub address: String,
    pub owner_name: String,
    pub owner_contact: String,
}

impl From<&establishments::Model> for EstablishmentDto {
    fn from(model: &establishments::Model) -> Self {
        Self {
            establishment_name: model.establishment_name.clone(),
            establishment_type: model.establishment_type.clone(),
            barangay: model.barangay.clone(),
            address: model.address.clone(),
            owner_name: model.owner_name.clone(),
            owner_contact: model.owner_contact.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ViolationSummaryDto {
    pub critical: i64,
    pub major: i64,
    pub minor: i64,
    pub pending: i64,
}

impl From<ViolationCounts> for ViolationSummaryDto {
    fn from(counts: ViolationCounts) -> Self {
        Self {
            critical: counts.critical,
            major: counts.major,
            minor: counts.minor,
            pending: counts.pending,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportRowDto {
    pub id: i32,
    pub report_number: String,
    pub inspection_date: String,
    pub inspection_type: String,
    pub status: String,
    pub overall_compliance_score: i32,
    pub risk_assessment: String,
    pub fire_hazard_level: String,
    pub created_at: String,
    #[serde(flatten)]
    pub establishment: EstablishmentDto,
    pub inspector_name: Option<String>,
    pub reviewer_name: Option<String>,
    pub admin_reviewed_at: Option<String>,
    pub violations_summary: ViolationSummaryDto,
}

impl From<ReportListRow> for ReportRowDto {
    fn from(row: ReportListRow) -> Self {
        Self {
            id: row.report.id,
            report_number: row.report.report_number,
            inspection_date: row.report.inspection_date,
            inspection_type: row.report.inspection_type,
            status: row.report.status,
            overall_compliance_score: row.report.overall_compliance_score,
            risk_assessment: row.report.risk_assessment,
            fire_hazard_level: row.report.fire_hazard_level,
            created_at: row.report.created_at,
            establishment: row
                .establishment
                .as_ref()
                .map(EstablishmentDto::from)
                .unwrap_or_default(),
            inspector_name: row.inspector_name,
            reviewer_name: row.reviewer_name,
            admin_reviewed_at: row.report.admin_reviewed_at,
            violations_summary: row.violations.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ViolationDto {
    pub id: i32,
    pub inspection_id: i32,
    pub violation_code: String,
    pub violation_description: String,
    pub section_violated: Option<String>,
    pub severity: String,
    pub fine_amount: Option<f64>,
    pub compliance_deadline: Option<String>,
    pub status: String,
    pub rectified_at: Option<String>,
    pub rectified_evidence: Option<String>,
    pub admin_notes: Option<String>,
    pub created_at: String,
}

impl From<inspection_violations::Model> for ViolationDto {
    fn from(model: inspection_violations::Model) -> Self {
        Self {
            id: model.id,
            inspection_id: model.inspection_id,
            violation_code: model.violation_code,
            violation_description: model.violation_description,
            section_violated: model.section_violated,
            severity: model.severity,
            fine_amount: model.fine_amount,
            compliance_deadline: model.compliance_deadline,
            status: model.status,
            rectified_at: model.rectified_at,
            rectified_evidence: model.rectified_evidence,
            admin_notes: model.admin_notes,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportDetailDto {
    pub id: i32,
    pub report_number: String,
    pub inspection_date: String,
    pub inspection_type: String,
    pub status: String,
    pub overall_compliance_score: i32,
    pub risk_assessment: String,
    pub fire_hazard_level: String,
    pub recommendations: Option<String>,
    pub corrective_actions_required: Option<String>,
    pub compliance_deadline: Option<String>,
    pub admin_review_notes: Option<String>,
    pub admin_reviewed_at: Option<String>,
    pub created_at: String,
    #[serde(flatten)]
    pub establishment: EstablishmentDto,
    pub inspector_name: Option<String>,
    pub reviewer_name: Option<String>,
    pub violations: Vec<ViolationDto>,
    pub violations_summary: ViolationSummaryDto,
    pub certificate_number: Option<String>,
    pub certificate_valid_until: Option<String>,
}

impl ReportDetailDto {
    #[must_use]
    pub fn build(
        detail: ReportDetail,
        certificate: Option<inspection_certificates::Model>,
    ) -> Self {
        let mut summary = ViolationCounts::default();
        for violation in &detail.violations {
            match violation.severity.as_str() {
                "critical" => summary.critical += 1,
                "major" => summary.major += 1,
                "minor" => summary.minor += 1,
                _ => {}
            }
            if violation.status != "rectified" {
                summary.pending += 1;
            }
        }

        Self {
            id: detail.report.id,
            report_number: detail.report.report_number,
            inspection_date: detail.report.inspection_date,
            inspection_type: detail.report.inspection_type,
            status: detail.report.status,
            overall_compliance_score: detail.report.overall_compliance_score,
            risk_assessment: detail.report.risk_assessment,
            fire_hazard_level: detail.report.fire_hazard_level,
            recommendations: detail.report.recommendations,
            corrective_actions_required: detail.report.corrective_actions_required,
            compliance_deadline: detail.report.compliance_deadline,
            admin_review_notes: detail.report.admin_review_notes,
            admin_reviewed_at: detail.report.admin_reviewed_at,
            created_at: detail.report.created_at,
            establishment: detail
                .establishment
                .as_ref()
                .map(EstablishmentDto::from)
                .unwrap_or_default(),
            inspector_name: detail.inspector_name,
            reviewer_name: detail.reviewer_name,
            violations: detail.violations.into_iter().map(ViolationDto::from).collect(),
            violations_summary: summary.into(),
            certificate_number: certificate.as_ref().map(|c| c.certificate_number.clone()),
            certificate_valid_until: certificate.map(|c| c.valid_until),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ViolationRowDto {
    #[serde(flatten)]
    pub violation: ViolationDto,
    pub report_number: Option<String>,
    pub inspection_date: Option<String>,
    #[serde(flatten)]
    pub establishment: EstablishmentDto,
}

impl From<ViolationListRow> for ViolationRowDto {
    fn from(row: ViolationListRow) -> Self {
        Self {
            violation: row.violation.into(),
            report_number: row.report.as_ref().map(|r| r.report_number.clone()),
            inspection_date: row.report.map(|r| r.inspection_date),
            establishment: row
                .establishment
                .as_ref()
                .map(EstablishmentDto::from)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ViolationDetailDto {
    #[serde(flatten)]
    pub violation: ViolationDto,
    pub report_number: Option<String>,
    pub inspection_date: Option<String>,
    pub inspector_name: Option<String>,
    #[serde(flatten)]
    pub establishment: EstablishmentDto,
}

impl From<ViolationDetail> for ViolationDetailDto {
    fn from(detail: ViolationDetail) -> Self {
        Self {
            violation: detail.violation.into(),
            report_number: detail.report.as_ref().map(|r| r.report_number.clone()),
            inspection_date: detail.report.map(|r| r.inspection_date),
            inspector_name: detail.inspector_name,
            establishment: detail
                .establishment
                .as_ref()
                .map(EstablishmentDto::from)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FollowUpRowDto {
    pub id: i32,
    pub inspection_id: i32,
    pub establishment_id: i32,
    pub follow_up_type: String,
    pub scheduled_date: String,
    pub actual_date: Option<String>,
    pub status: String,
    pub priority_status: String,
    pub days_until_due: Option<i64>,
    pub assigned_to: Option<i32>,
    pub assigned_name: Option<String>,
    pub notes: Option<String>,
    pub outcome: Option<String>,
    pub compliance_verified: bool,
    pub pending_violations: i64,
    pub report_number: Option<String>,
    #[serde(flatten)]
    pub establishment: EstablishmentDto,
}

impl From<FollowUpListRow> for FollowUpRowDto {
    fn from(row: FollowUpListRow) -> Self {
        Self {
            id: row.follow_up.id,
            inspection_id: row.follow_up.inspection_id,
            establishment_id: row.follow_up.establishment_id,
            follow_up_type: row.follow_up.follow_up_type,
            scheduled_date: row.follow_up.scheduled_date,
            actual_date: row.follow_up.actual_date,
            status: row.follow_up.status,
            priority_status: row.priority.as_str().to_string(),
            days_until_due: row.days_until_due,
            assigned_to: row.follow_up.assigned_to,
            assigned_name: row.assigned_name,
            notes: row.follow_up.notes,
            outcome: row.follow_up.outcome,
            compliance_verified: row.follow_up.compliance_verified,
            pending_violations: row.pending_violations,
            report_number: row.report_number,
            establishment: row
                .establishment
                .as_ref()
                .map(EstablishmentDto::from)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CertificateRowDto {
    pub id: i32,
    pub certificate_number: String,
    pub certificate_type: String,
    pub certificate_type_full: String,
    pub issue_date: String,
    pub valid_until: String,
    pub validity_status: String,
    pub days_remaining: Option<i64>,
    pub revoked: bool,
    pub revoked_at: Option<String>,
    pub revoked_reason: Option<String>,
    pub issued_by_name: Option<String>,
    pub revoked_by_name: Option<String>,
    pub report_number: Option<String>,
    pub inspection_date: Option<String>,
    #[serde(flatten)]
    pub establishment: EstablishmentDto,
}

impl From<CertificateListRow> for CertificateRowDto {
    fn from(row: CertificateListRow) -> Self {
        Self {
            id: row.certificate.id,
            certificate_number: row.certificate.certificate_number,
            certificate_type: row.certificate.certificate_type,
            certificate_type_full: row.certificate.certificate_type_full,
            issue_date: row.certificate.issue_date,
            valid_until: row.certificate.valid_until,
            validity_status: row.validity.as_str().to_string(),
            days_remaining: row.days_remaining,
            revoked: row.certificate.revoked,
            revoked_at: row.certificate.revoked_at,
            revoked_reason: row.certificate.revoked_reason,
            issued_by_name: row.issued_by_name,
            revoked_by_name: row.revoked_by_name,
            report_number: row.report.as_ref().map(|r| r.report_number.clone()),
            inspection_date: row.report.map(|r| r.inspection_date),
            establishment: row
                .establishment
                .as_ref()
                .map(EstablishmentDto::from)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdatedCountDto {
    pub updated: u64,
}

#[derive(Debug, Serialize)]
pub struct DownloadDto {
    pub download_url: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub notes: Option<String>,
}
