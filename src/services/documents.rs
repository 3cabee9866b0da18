//! Generated documents: filtered summary exports and the printable
//! certificate. Documents are standalone HTML files written under the
//! uploads path and served back from `/uploads/`.

use anyhow::{Context, Result};
use chrono::Months;
use html_escape::encode_text;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

use crate::db::{
    NewCertificate, ReportListRow, ReportStats, ViolationListRow, ViolationStats,
};
use crate::entities::{establishments, inspection_certificates, inspection_reports};
use crate::models::{self, label, ParseError};

#[derive(Clone)]
pub struct DocumentService {
    uploads_path: PathBuf,
}

impl DocumentService {
    #[must_use]
    pub fn new(uploads_path: &str) -> Self {
        Self {
            uploads_path: PathBuf::from(uploads_path),
        }
    }

    pub async fn inspection_summary(
        &self,
        rows: &[ReportListRow],
        stats: ReportStats,
    ) -> Result<String> {
        let mut body = String::new();
        body.push_str(&format!(
            "<p>{} reports matched the current filters. Overall: {} total, {} pending review, {} approved, {} rejected.</p>",
            rows.len(),
            stats.total,
            stats.pending_review,
            stats.approved,
            stats.rejected,
        ));

        body.push_str(
            "<table><thead><tr><th>Report #</th><th>Establishment</th><th>Barangay</th>\
             <th>Inspection Date</th><th>Status</th><th>Score</th><th>Risk</th>\
             <th>Violations (C/M/m)</th></tr></thead><tbody>",
        );
        for row in rows {
            let establishment = row
                .establishment
                .as_ref()
                .map_or("", |e| e.establishment_name.as_str());
            let barangay = row.establishment.as_ref().map_or("", |e| e.barangay.as_str());
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}%</td><td>{}</td><td>{}/{}/{}</td></tr>",
                encode_text(&row.report.report_number),
                encode_text(establishment),
                encode_text(barangay),
                encode_text(&row.report.inspection_date),
                encode_text(&label(&row.report.status)),
                row.report.overall_compliance_score,
                encode_text(&label(&row.report.risk_assessment)),
                row.violations.critical,
                row.violations.major,
                row.violations.minor,
            ));
        }
        body.push_str("</tbody></table>");

        self.write_document("inspection-summary", "Inspection Summary", &body)
            .await
    }

    pub async fn violation_report(
        &self,
        rows: &[ViolationListRow],
        stats: ViolationStats,
    ) -> Result<String> {
        let mut body = String::new();
        body.push_str(&format!(
            "<p>{} violations matched the current filters. Overall: {} total, {} pending, {} overdue, {} rectified, {} escalated, {} waived.</p>",
            rows.len(),
            stats.total,
            stats.pending,
            stats.overdue,
            stats.rectified,
            stats.escalated,
            stats.waived,
        ));

        body.push_str(
            "<table><thead><tr><th>Code</th><th>Description</th><th>Severity</th>\
             <th>Status</th><th>Deadline</th><th>Fine</th><th>Establishment</th>\
             <th>Report #</th></tr></thead><tbody>",
        );
        for row in rows {
            let establishment = row
                .establishment
                .as_ref()
                .map_or("", |e| e.establishment_name.as_str());
            let report_number = row.report.as_ref().map_or("", |r| r.report_number.as_str());
            let fine = row
                .violation
                .fine_amount
                .map_or_else(|| "-".to_string(), |amount| format!("₱{amount:.2}"));
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                encode_text(&row.violation.violation_code),
                encode_text(&row.violation.violation_description),
                encode_text(&label(&row.violation.severity)),
                encode_text(&label(&row.violation.status)),
                encode_text(row.violation.compliance_deadline.as_deref().unwrap_or("-")),
                encode_text(&fine),
                encode_text(establishment),
                encode_text(report_number),
            ));
        }
        body.push_str("</tbody></table>");

        self.write_document("violation-report", "Violation Report", &body)
            .await
    }

    async fn write_document(&self, slug: &str, title: &str, body: &str) -> Result<String> {
        let dir = self.uploads_path.join("documents");
        tokio::fs::create_dir_all(&dir)
            .await
            .context("Failed to create documents directory")?;

        let filename = format!("{slug}-{}.html", Uuid::new_v4().simple());
        let path = dir.join(&filename);

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>
body {{ font-family: 'Segoe UI', Tahoma, sans-serif; margin: 40px; color: #1f2937; }}
h1 {{ color: #dc2626; }}
table {{ border-collapse: collapse; width: 100%; margin-top: 16px; }}
th, td {{ border: 1px solid #e5e7eb; padding: 8px 10px; text-align: left; font-size: 13px; }}
th {{ background: #f9fafb; text-transform: uppercase; font-size: 11px; letter-spacing: 0.5px; }}
</style>
</head>
<body>
<h1>{title}</h1>
<p>Generated {generated}</p>
{body}
</body>
</html>"#,
            generated = models::now_timestamp(),
        );

        tokio::fs::write(&path, html)
            .await
            .with_context(|| format!("Failed to write document: {}", path.display()))?;

        info!("Generated document: {}", path.display());

        Ok(format!("/uploads/documents/{filename}"))
    }
}

/// Assemble the insert payload for a certificate issued against an approved
/// report. Validity defaults to one year.
pub fn build_certificate(
    report: &inspection_reports::Model,
    certificate_type: &str,
    valid_months: u32,
    issued_by: i32,
) -> Result<NewCertificate, ParseError> {
    let certificate_type_full = match certificate_type {
        "fsic_occupancy" => "Fire Safety Inspection Certificate (Occupancy)",
        "fsic_business" => "Fire Safety Inspection Certificate (Business)",
        "fsic_special" => "Fire Safety Inspection Certificate (Special Use)",
        other => {
            return Err(ParseError {
                kind: "certificate type",
                value: other.to_string(),
            })
        }
    };

    let issue = models::today();
    let valid_until = issue
        .checked_add_months(Months::new(valid_months.clamp(1, 60)))
        .unwrap_or(issue);

    let certificate_number = format!(
        "FSIC-{}-{}",
        issue.format("%Y"),
        &Uuid::new_v4().simple().to_string()[..8].to_uppercase()
    );

    Ok(NewCertificate {
        certificate_number,
        certificate_type: certificate_type.to_string(),
        certificate_type_full: certificate_type_full.to_string(),
        inspection_id: report.id,
        establishment_id: report.establishment_id,
        issue_date: models::iso_date(issue),
        valid_until: models::iso_date(valid_until),
        issued_by,
    })
}

/// Printable certificate document.
#[must_use]
pub fn render_certificate(
    certificate: &inspection_certificates::Model,
    establishment: Option<&establishments::Model>,
    report: Option<&inspection_reports::Model>,
) -> String {
    let establishment_name = establishment.map_or("Unknown establishment", |e| {
        e.establishment_name.as_str()
    });
    let address = establishment.map_or("", |e| e.address.as_str());
    let barangay = establishment.map_or("", |e| e.barangay.as_str());
    let owner = establishment.map_or("", |e| e.owner_name.as_str());
    let report_number = report.map_or("", |r| r.report_number.as_str());

    let revocation_notice = if certificate.revoked {
        format!(
            r#"<div class="revoked">REVOKED {} — {}</div>"#,
            encode_text(certificate.revoked_at.as_deref().unwrap_or("")),
            encode_text(certificate.revoked_reason.as_deref().unwrap_or("no reason recorded")),
        )
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{number}</title>
<style>
body {{ font-family: Georgia, serif; margin: 60px; color: #1f2937; text-align: center; }}
.certificate {{ border: 6px double #dc2626; padding: 48px; }}
h1 {{ color: #dc2626; letter-spacing: 2px; }}
.number {{ font-family: monospace; font-size: 18px; }}
.holder {{ font-size: 28px; font-weight: bold; margin: 24px 0 8px; }}
.meta {{ color: #6b7280; font-size: 14px; margin-top: 32px; }}
.revoked {{ color: #dc2626; border: 2px solid #dc2626; display: inline-block; padding: 8px 16px; margin-top: 24px; font-weight: bold; }}
</style>
</head>
<body>
<div class="certificate">
<h1>{type_full}</h1>
<p class="number">{number}</p>
<p>This certifies that the establishment</p>
<div class="holder">{establishment}</div>
<p>{address}, {barangay}</p>
<p>owned by {owner} has satisfied the fire safety requirements
recorded under inspection report {report_number}.</p>
<p class="meta">Issued {issued} &middot; Valid until {valid_until}</p>
{revocation_notice}
</div>
</body>
</html>"#,
        number = encode_text(&certificate.certificate_number),
        type_full = encode_text(&certificate.certificate_type_full),
        establishment = encode_text(establishment_name),
        address = encode_text(address),
        barangay = encode_text(barangay),
        owner = encode_text(owner),
        report_number = encode_text(report_number),
        issued = encode_text(&certificate.issue_date),
        valid_until = encode_text(&certificate.valid_until),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> inspection_reports::Model {
        inspection_reports::Model {
            id: 7,
            report_number: "IR-2026-0007".to_string(),
            establishment_id: 3,
            inspection_date: "2026-08-01".to_string(),
            inspection_type: "routine".to_string(),
            status: "approved".to_string(),
            overall_compliance_score: 92,
            risk_assessment: "low".to_string(),
            fire_hazard_level: "low".to_string(),
            recommendations: None,
            corrective_actions_required: None,
            compliance_deadline: None,
            inspected_by: 1,
            admin_reviewed_by: Some(1),
            admin_reviewed_at: None,
            admin_review_notes: None,
            created_at: "2026-08-01T08:00:00Z".to_string(),
        }
    }

    #[test]
    fn certificate_numbers_carry_year_prefix() {
        let cert = build_certificate(&report(), "fsic_business", 12, 1).unwrap();
        assert!(cert.certificate_number.starts_with("FSIC-"));
        assert_eq!(cert.inspection_id, 7);
        assert_eq!(cert.establishment_id, 3);
        assert!(cert.valid_until > cert.issue_date);
    }

    #[test]
    fn unknown_certificate_type_is_rejected() {
        assert!(build_certificate(&report(), "fsic_bogus", 12, 1).is_err());
    }

    #[test]
    fn rendered_certificate_escapes_fields() {
        let cert = inspection_certificates::Model {
            id: 1,
            certificate_number: "FSIC-2026-ABCD1234".to_string(),
            certificate_type: "fsic_business".to_string(),
            certificate_type_full: "Fire Safety Inspection Certificate (Business)".to_string(),
            inspection_id: 7,
            establishment_id: 3,
            issue_date: "2026-08-06".to_string(),
            valid_until: "2027-08-06".to_string(),
            issued_by: 1,
            revoked: false,
            revoked_at: None,
            revoked_reason: None,
            revoked_by: None,
            created_at: "2026-08-06T00:00:00Z".to_string(),
        };
        let establishment = establishments::Model {
            id: 3,
            establishment_name: "Cafe <script>".to_string(),
            establishment_type: "restaurant".to_string(),
            barangay: "Poblacion".to_string(),
            address: "123 Rizal St".to_string(),
            owner_name: "Ana Cruz".to_string(),
            owner_contact: "0917".to_string(),
            last_inspection_date: None,
        };

        let html = render_certificate(&cert, Some(&establishment), None);
        assert!(html.contains("Cafe &lt;script&gt;"));
        assert!(!html.contains("REVOKED"));
    }
}
