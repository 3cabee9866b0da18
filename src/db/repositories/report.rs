use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;

use crate::entities::{establishments, inspection_reports, inspection_violations, users};
use crate::models::{self, ReportDateFilter, ReportFilter, ReportStatusFilter, ReviewDecision};

/// Per-report violation tallies shown in the approval queue.
#[derive(Debug, Default, Clone, Copy)]
pub struct ViolationCounts {
    pub critical: i64,
    pub major: i64,
    pub minor: i64,
    /// Violations not yet rectified.
    pub pending: i64,
}

#[derive(Debug)]
pub struct ReportListRow {
    pub report: inspection_reports::Model,
    pub establishment: Option<establishments::Model>,
    pub inspector_name: Option<String>,
    pub reviewer_name: Option<String>,
    pub violations: ViolationCounts,
}

#[derive(Debug)]
pub struct ReportDetail {
    pub report: inspection_reports::Model,
    pub establishment: Option<establishments::Model>,
    pub inspector_name: Option<String>,
    pub reviewer_name: Option<String>,
    pub violations: Vec<inspection_violations::Model>,
}

/// Whole-table tallies for the stats grid.
#[derive(Debug, Default, Clone, Copy, serde::Serialize)]
pub struct ReportStats {
    pub total: i64,
    pub submitted: i64,
    pub under_review: i64,
    pub approved: i64,
    pub rejected: i64,
    pub pending_review: i64,
    pub completed: i64,
    pub critical_risk: i64,
    pub high_risk: i64,
    pub extreme_hazard: i64,
}

pub struct ReportRepository {
    conn: DatabaseConnection,
}

impl ReportRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self, filter: &ReportFilter) -> Result<Vec<ReportListRow>> {
        let mut query = inspection_reports::Entity::find()
            .find_also_related(establishments::Entity)
            .order_by_desc(inspection_reports::Column::InspectionDate)
            .order_by_desc(inspection_reports::Column::CreatedAt);

        if let Some(statuses) = filter.status.and_then(ReportStatusFilter::matching_statuses) {
            query = query.filter(inspection_reports::Column::Status.is_in(statuses));
        }

        if let Some(date) = filter.date {
            query = query.filter(date_predicate(
                inspection_reports::Column::InspectionDate,
                date,
            ));
        }

        if let Some(barangay) = &filter.barangay {
            query = query.filter(establishments::Column::Barangay.contains(barangay.as_str()));
        }

        if let Some(kind) = &filter.establishment_type {
            query = query.filter(establishments::Column::EstablishmentType.eq(kind.as_str()));
        }

        if let Some(term) = &filter.search {
            query = query
                .join(
                    JoinType::LeftJoin,
                    inspection_reports::Relation::Inspector.def(),
                )
                .filter(
                    Condition::any()
                        .add(inspection_reports::Column::ReportNumber.contains(term.as_str()))
                        .add(establishments::Column::EstablishmentName.contains(term.as_str()))
                        .add(establishments::Column::OwnerName.contains(term.as_str()))
                        .add(establishments::Column::Address.contains(term.as_str()))
                        .add(establishments::Column::Barangay.contains(term.as_str()))
                        .add(users::Column::FirstName.contains(term.as_str()))
                        .add(users::Column::LastName.contains(term.as_str())),
                );
        }

        let rows = query
            .all(&self.conn)
            .await
            .context("Failed to list inspection reports")?;

        let report_ids: Vec<i32> = rows.iter().map(|(r, _)| r.id).collect();
        let counts = self.violation_counts(&report_ids).await?;
        let names = self.user_names().await?;

        Ok(rows
            .into_iter()
            .map(|(report, establishment)| {
                let inspector_name = names.get(&report.inspected_by).cloned();
                let reviewer_name = report
                    .admin_reviewed_by
                    .and_then(|id| names.get(&id).cloned());
                let violations = counts.get(&report.id).copied().unwrap_or_default();

                ReportListRow {
                    report,
                    establishment,
                    inspector_name,
                    reviewer_name,
                    violations,
                }
            })
            .collect())
    }

    pub async fn get_detail(&self, id: i32) -> Result<Option<ReportDetail>> {
        let Some((report, establishment)) = inspection_reports::Entity::find_by_id(id)
            .find_also_related(establishments::Entity)
            .one(&self.conn)
            .await
            .context("Failed to query inspection report")?
        else {
            return Ok(None);
        };

        let violations = inspection_violations::Entity::find()
            .filter(inspection_violations::Column::InspectionId.eq(id))
            .order_by_asc(inspection_violations::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list report violations")?;

        let names = self.user_names().await?;
        let inspector_name = names.get(&report.inspected_by).cloned();
        let reviewer_name = report
            .admin_reviewed_by
            .and_then(|id| names.get(&id).cloned());

        Ok(Some(ReportDetail {
            report,
            establishment,
            inspector_name,
            reviewer_name,
            violations,
        }))
    }

    pub async fn get(&self, id: i32) -> Result<Option<inspection_reports::Model>> {
        inspection_reports::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query inspection report")
    }

    /// Adjudicate a report, stamping the reviewer and time.
    pub async fn review(
        &self,
        report: inspection_reports::Model,
        decision: ReviewDecision,
        notes: Option<String>,
        reviewer_id: i32,
    ) -> Result<inspection_reports::Model> {
        let mut active: inspection_reports::ActiveModel = report.into();
        active.status = Set(decision.resulting_status().as_str().to_string());
        active.admin_reviewed_by = Set(Some(reviewer_id));
        active.admin_reviewed_at = Set(Some(models::now_timestamp()));
        active.admin_review_notes = Set(notes);

        active
            .update(&self.conn)
            .await
            .context("Failed to update inspection report")
    }

    pub async fn stats(&self) -> Result<ReportStats> {
        let rows: Vec<(String, String, String)> = inspection_reports::Entity::find()
            .select_only()
            .column(inspection_reports::Column::Status)
            .column(inspection_reports::Column::RiskAssessment)
            .column(inspection_reports::Column::FireHazardLevel)
            .into_tuple()
            .all(&self.conn)
            .await
            .context("Failed to aggregate report stats")?;

        let mut stats = ReportStats::default();
        for (status, risk, hazard) in rows {
            stats.total += 1;
            match status.as_str() {
                "submitted" => stats.submitted += 1,
                "under_review" => stats.under_review += 1,
                "approved" => stats.approved += 1,
                "rejected" => stats.rejected += 1,
                _ => {}
            }
            if matches!(status.as_str(), "submitted" | "under_review") {
                stats.pending_review += 1;
            }
            if matches!(status.as_str(), "approved" | "completed") {
                stats.completed += 1;
            }
            match risk.as_str() {
                "critical" => stats.critical_risk += 1,
                "high" => stats.high_risk += 1,
                _ => {}
            }
            if hazard == "extreme" {
                stats.extreme_hazard += 1;
            }
        }

        Ok(stats)
    }

    async fn violation_counts(&self, report_ids: &[i32]) -> Result<HashMap<i32, ViolationCounts>> {
        if report_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String, String)> = inspection_violations::Entity::find()
            .select_only()
            .column(inspection_violations::Column::InspectionId)
            .column(inspection_violations::Column::Severity)
            .column(inspection_violations::Column::Status)
            .filter(inspection_violations::Column::InspectionId.is_in(report_ids.to_vec()))
            .into_tuple()
            .all(&self.conn)
            .await
            .context("Failed to count report violations")?;

        let mut counts: HashMap<i32, ViolationCounts> = HashMap::new();
        for (inspection_id, severity, status) in rows {
            let entry = counts.entry(inspection_id).or_default();
            match severity.as_str() {
                "critical" => entry.critical += 1,
                "major" => entry.major += 1,
                "minor" => entry.minor += 1,
                _ => {}
            }
            if status != "rectified" {
                entry.pending += 1;
            }
        }

        Ok(counts)
    }

    async fn user_names(&self) -> Result<HashMap<i32, String>> {
        let rows = users::Entity::find()
            .all(&self.conn)
            .await
            .context("Failed to list users")?;

        Ok(rows.into_iter().map(|u| (u.id, u.full_name())).collect())
    }
}

/// WHERE fragment for a date bucket on an ISO date column.
fn date_predicate(
    column: inspection_reports::Column,
    filter: ReportDateFilter,
) -> sea_orm::sea_query::SimpleExpr {
    match filter {
        ReportDateFilter::Today => column.eq(models::iso_date(models::today())),
        ReportDateFilter::Yesterday => column.eq(models::days_ago(1)),
        ReportDateFilter::Week => column.gte(models::days_ago(7)),
        ReportDateFilter::Month => column.gte(models::days_ago(30)),
        ReportDateFilter::Year => column.gte(models::days_ago(365)),
    }
}
