use anyhow::{Context, Result};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::entities::{establishments, inspection_certificates, inspection_reports, users};
use crate::models::{self, CertificateFilter, CertificateValidity, ReportDateFilter};

#[derive(Debug)]
pub struct CertificateListRow {
    pub certificate: inspection_certificates::Model,
    pub establishment: Option<establishments::Model>,
    pub report: Option<inspection_reports::Model>,
    pub issued_by_name: Option<String>,
    pub revoked_by_name: Option<String>,
    /// Days until expiry; negative when already expired.
    pub days_remaining: Option<i64>,
    pub validity: CertificateValidity,
}

#[derive(Debug, Default, Clone, Copy, serde::Serialize)]
pub struct CertificateStats {
    pub total: i64,
    pub valid: i64,
    pub expiring_soon: i64,
    pub expired: i64,
    pub revoked: i64,
}

/// Input for issuing a certificate against an approved report.
#[derive(Debug, Clone)]
pub struct NewCertificate {
    pub certificate_number: String,
    pub certificate_type: String,
    pub certificate_type_full: String,
    pub inspection_id: i32,
    pub establishment_id: i32,
    pub issue_date: String,
    pub valid_until: String,
    pub issued_by: i32,
}

pub struct CertificateRepository {
    conn: DatabaseConnection,
}

impl CertificateRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self, filter: &CertificateFilter) -> Result<Vec<CertificateListRow>> {
        let mut query = inspection_certificates::Entity::find()
            .find_also_related(establishments::Entity)
            .order_by_desc(inspection_certificates::Column::IssueDate)
            .order_by_desc(inspection_certificates::Column::CreatedAt);

        if let Some(kind) = &filter.certificate_type {
            query =
                query.filter(inspection_certificates::Column::CertificateType.eq(kind.clone()));
        }

        if let Some(date) = filter.date {
            let column = inspection_certificates::Column::IssueDate;
            query = query.filter(match date {
                ReportDateFilter::Today => column.eq(models::iso_date(models::today())),
                ReportDateFilter::Yesterday => column.eq(models::days_ago(1)),
                ReportDateFilter::Week => column.gte(models::days_ago(7)),
                ReportDateFilter::Month => column.gte(models::days_ago(30)),
                ReportDateFilter::Year => column.gte(models::days_ago(365)),
            });
        }

        if let Some(barangay) = &filter.barangay {
            query = query.filter(establishments::Column::Barangay.contains(barangay.as_str()));
        }

        if let Some(kind) = &filter.establishment_type {
            query = query.filter(establishments::Column::EstablishmentType.eq(kind.clone()));
        }

        if let Some(term) = &filter.search {
            query = query
                .join(
                    JoinType::LeftJoin,
                    inspection_certificates::Relation::Report.def(),
                )
                .filter(
                    Condition::any()
                        .add(
                            inspection_certificates::Column::CertificateNumber.contains(term.as_str()),
                        )
                        .add(establishments::Column::EstablishmentName.contains(term.as_str()))
                        .add(establishments::Column::OwnerName.contains(term.as_str()))
                        .add(inspection_reports::Column::ReportNumber.contains(term.as_str())),
                );
        }

        let rows = query
            .all(&self.conn)
            .await
            .context("Failed to list certificates")?;

        let report_ids: Vec<i32> = rows.iter().map(|(c, _)| c.inspection_id).collect();
        let reports = self.report_map(&report_ids).await?;
        let names = self.user_names().await?;

        let today = models::today();
        let mut out = Vec::with_capacity(rows.len());
        for (certificate, establishment) in rows {
            let validity =
                CertificateValidity::derive(certificate.revoked, &certificate.valid_until, today);

            // Validity is derived, so the status filter applies after the fetch.
            if let Some(wanted) = filter.status {
                if validity != wanted {
                    continue;
                }
            }

            let days_remaining =
                NaiveDate::parse_from_str(&certificate.valid_until, "%Y-%m-%d")
                    .ok()
                    .map(|date| (date - today).num_days());

            out.push(CertificateListRow {
                report: reports.get(&certificate.inspection_id).cloned(),
                issued_by_name: names.get(&certificate.issued_by).cloned(),
                revoked_by_name: certificate
                    .revoked_by
                    .and_then(|id| names.get(&id).cloned()),
                days_remaining,
                validity,
                certificate,
                establishment,
            });
        }

        Ok(out)
    }

    pub async fn get(&self, id: i32) -> Result<Option<inspection_certificates::Model>> {
        inspection_certificates::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query certificate")
    }

    /// The unrevoked certificate for an inspection, if any.
    pub async fn active_for_inspection(
        &self,
        inspection_id: i32,
    ) -> Result<Option<inspection_certificates::Model>> {
        inspection_certificates::Entity::find()
            .filter(inspection_certificates::Column::InspectionId.eq(inspection_id))
            .filter(inspection_certificates::Column::Revoked.eq(false))
            .one(&self.conn)
            .await
            .context("Failed to query certificate for inspection")
    }

    pub async fn issue(
        &self,
        certificate: NewCertificate,
    ) -> Result<inspection_certificates::Model> {
        let active = inspection_certificates::ActiveModel {
            certificate_number: Set(certificate.certificate_number),
            certificate_type: Set(certificate.certificate_type),
            certificate_type_full: Set(certificate.certificate_type_full),
            inspection_id: Set(certificate.inspection_id),
            establishment_id: Set(certificate.establishment_id),
            issue_date: Set(certificate.issue_date),
            valid_until: Set(certificate.valid_until),
            issued_by: Set(certificate.issued_by),
            revoked: Set(false),
            created_at: Set(models::now_timestamp()),
            ..Default::default()
        };

        active
            .insert(&self.conn)
            .await
            .context("Failed to insert certificate")
    }

    pub async fn revoke(
        &self,
        certificate: inspection_certificates::Model,
        reason: String,
        revoked_by: i32,
    ) -> Result<inspection_certificates::Model> {
        let mut active: inspection_certificates::ActiveModel = certificate.into();
        active.revoked = Set(true);
        active.revoked_at = Set(Some(models::now_timestamp()));
        active.revoked_reason = Set(Some(reason));
        active.revoked_by = Set(Some(revoked_by));

        active
            .update(&self.conn)
            .await
            .context("Failed to revoke certificate")
    }

    pub async fn stats(&self) -> Result<CertificateStats> {
        let rows: Vec<(bool, String)> = inspection_certificates::Entity::find()
            .select_only()
            .column(inspection_certificates::Column::Revoked)
            .column(inspection_certificates::Column::ValidUntil)
            .into_tuple()
            .all(&self.conn)
            .await
            .context("Failed to aggregate certificate stats")?;

        let today = models::today();
        let mut stats = CertificateStats::default();
        for (revoked, valid_until) in rows {
            stats.total += 1;
            match CertificateValidity::derive(revoked, &valid_until, today) {
                CertificateValidity::Valid => stats.valid += 1,
                CertificateValidity::ExpiringSoon => stats.expiring_soon += 1,
                CertificateValidity::Expired => stats.expired += 1,
                CertificateValidity::Revoked => stats.revoked += 1,
            }
        }

        Ok(stats)
    }

    async fn report_map(
        &self,
        ids: &[i32],
    ) -> Result<HashMap<i32, inspection_reports::Model>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = inspection_reports::Entity::find()
            .filter(inspection_reports::Column::Id.is_in(ids.to_vec()))
            .all(&self.conn)
            .await
            .context("Failed to load reports for certificates")?;

        Ok(rows.into_iter().map(|r| (r.id, r)).collect())
    }

    async fn user_names(&self) -> Result<HashMap<i32, String>> {
        let rows = users::Entity::find()
            .all(&self.conn)
            .await
            .context("Failed to list users")?;

        Ok(rows.into_iter().map(|u| (u.id, u.full_name())).collect())
    }
}
