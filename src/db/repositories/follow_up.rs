use anyhow::{Context, Result};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    JoinType, QueryFilter, QuerySelect, RelationTrait,
};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use crate::entities::{establishments, inspection_follow_ups, inspection_reports, inspection_violations, users};
use crate::models::{
    self, AssigneeFilter, FollowUpDateFilter, FollowUpFilter, FollowUpPriority, FollowUpStatus,
    FollowUpStatusFilter,
};

#[derive(Debug)]
pub struct FollowUpListRow {
    pub follow_up: inspection_follow_ups::Model,
    pub establishment: Option<establishments::Model>,
    pub report_number: Option<String>,
    pub assigned_name: Option<String>,
    /// Negative when past due.
    pub days_until_due: Option<i64>,
    pub priority: FollowUpPriority,
    pub pending_violations: i64,
}

#[derive(Debug, Default, Clone, Copy, serde::Serialize)]
pub struct FollowUpStats {
    pub total: i64,
    pub pending: i64,
    pub scheduled: i64,
    pub in_progress: i64,
    pub completed: i64,
    pub cancelled: i64,
    /// Stored overdue plus actionable rows past their scheduled date.
    pub overdue: i64,
    pub due_today: i64,
    pub compliance_verified: i64,
}

/// Outcome of a follow-up status update.
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub status: FollowUpStatus,
    pub outcome: Option<String>,
    pub compliance_verified: bool,
    pub verifier_id: i32,
}

pub struct FollowUpRepository {
    conn: DatabaseConnection,
}

impl FollowUpRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    #[allow(clippy::too_many_lines)]
    pub async fn list(&self, filter: &FollowUpFilter) -> Result<Vec<FollowUpListRow>> {
        let today = models::today();
        let today_iso = models::iso_date(today);

        let mut query = inspection_follow_ups::Entity::find()
            .find_also_related(establishments::Entity);

        match filter.status {
            FollowUpStatusFilter::All => {}
            FollowUpStatusFilter::Overdue => {
                query = query.filter(
                    Condition::any()
                        .add(inspection_follow_ups::Column::Status.eq("overdue"))
                        .add(
                            Condition::all()
                                .add(
                                    inspection_follow_ups::Column::Status
                                        .is_in(["pending", "scheduled"]),
                                )
                                .add(
                                    inspection_follow_ups::Column::ScheduledDate
                                        .lt(today_iso.clone()),
                                ),
                        ),
                );
            }
            FollowUpStatusFilter::DueSoon => {
                query = query.filter(
                    Condition::all()
                        .add(inspection_follow_ups::Column::Status.is_in(["pending", "scheduled"]))
                        .add(inspection_follow_ups::Column::ScheduledDate.gte(today_iso.clone()))
                        .add(
                            inspection_follow_ups::Column::ScheduledDate
                                .lte(models::days_ahead(3)),
                        ),
                );
            }
            FollowUpStatusFilter::Exact(status) => {
                query = query.filter(inspection_follow_ups::Column::Status.eq(status.as_str()));
            }
        }

        if let Some(kind) = filter.follow_up_type {
            query = query.filter(inspection_follow_ups::Column::FollowUpType.eq(kind.as_str()));
        }

        if let Some(date) = filter.date {
            query = match date {
                FollowUpDateFilter::Today => {
                    query.filter(inspection_follow_ups::Column::ScheduledDate.eq(today_iso.clone()))
                }
                FollowUpDateFilter::Tomorrow => query
                    .filter(inspection_follow_ups::Column::ScheduledDate.eq(models::days_ahead(1))),
                FollowUpDateFilter::Week => query.filter(
                    Condition::all()
                        .add(inspection_follow_ups::Column::ScheduledDate.gte(today_iso.clone()))
                        .add(
                            inspection_follow_ups::Column::ScheduledDate
                                .lte(models::days_ahead(7)),
                        ),
                ),
                FollowUpDateFilter::Overdue => query.filter(
                    Condition::all()
                        .add(inspection_follow_ups::Column::ScheduledDate.lt(today_iso.clone()))
                        .add(
                            inspection_follow_ups::Column::Status.is_in(["pending", "scheduled"]),
                        ),
                ),
            };
        }

        if let Some(barangay) = &filter.barangay {
            query = query.filter(establishments::Column::Barangay.contains(barangay.as_str()));
        }

        if let Some(establishment_id) = filter.establishment {
            query =
                query.filter(inspection_follow_ups::Column::EstablishmentId.eq(establishment_id));
        }

        match filter.assigned_to {
            AssigneeFilter::Any => {}
            AssigneeFilter::Unassigned => {
                query = query.filter(inspection_follow_ups::Column::AssignedTo.is_null());
            }
            AssigneeFilter::User(id) => {
                query = query.filter(inspection_follow_ups::Column::AssignedTo.eq(id));
            }
        }

        if let Some(term) = &filter.search {
            query = query
                .join(
                    JoinType::LeftJoin,
                    inspection_follow_ups::Relation::Report.def(),
                )
                .filter(
                    Condition::any()
                        .add(establishments::Column::EstablishmentName.contains(term.as_str()))
                        .add(establishments::Column::OwnerName.contains(term.as_str()))
                        .add(inspection_reports::Column::ReportNumber.contains(term.as_str()))
                        .add(inspection_follow_ups::Column::Notes.contains(term.as_str())),
                );
        }

        let rows = query
            .all(&self.conn)
            .await
            .context("Failed to list follow-ups")?;

        let inspection_ids: Vec<i32> = rows.iter().map(|(f, _)| f.inspection_id).collect();
        let report_numbers = self.report_numbers(&inspection_ids).await?;
        let pending = self.pending_violation_counts(&inspection_ids).await?;
        let names = self.user_names().await?;

        let mut out: Vec<FollowUpListRow> = rows
            .into_iter()
            .map(|(follow_up, establishment)| {
                let status = FollowUpStatus::from_str(&follow_up.status)
                    .unwrap_or(FollowUpStatus::Pending);
                let priority =
                    FollowUpPriority::derive(status, &follow_up.scheduled_date, today);
                let days_until_due =
                    NaiveDate::parse_from_str(&follow_up.scheduled_date, "%Y-%m-%d")
                        .ok()
                        .map(|date| (date - today).num_days());

                FollowUpListRow {
                    report_number: report_numbers.get(&follow_up.inspection_id).cloned(),
                    assigned_name: follow_up
                        .assigned_to
                        .and_then(|id| names.get(&id).cloned()),
                    pending_violations: pending
                        .get(&follow_up.inspection_id)
                        .copied()
                        .unwrap_or(0),
                    days_until_due,
                    priority,
                    follow_up,
                    establishment,
                }
            })
            .collect();

        // Overdue first, then due-soon, then by scheduled date.
        out.sort_by(|a, b| follow_up_order(a, b));

        Ok(out)
    }

    pub async fn get(&self, id: i32) -> Result<Option<inspection_follow_ups::Model>> {
        inspection_follow_ups::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query follow-up")
    }

    /// Update status and verification stamps; actual_date is set when the
    /// follow-up reaches a terminal status.
    pub async fn update_status(
        &self,
        follow_up: inspection_follow_ups::Model,
        update: StatusUpdate,
    ) -> Result<inspection_follow_ups::Model> {
        let now = models::now_timestamp();
        let terminal = matches!(
            update.status,
            FollowUpStatus::Completed | FollowUpStatus::Cancelled
        );

        let mut active: inspection_follow_ups::ActiveModel = follow_up.into();
        active.status = Set(update.status.as_str().to_string());
        active.outcome = Set(update.outcome);
        active.compliance_verified = Set(update.compliance_verified);
        active.verified_by = Set(Some(update.verifier_id));
        active.verified_at = Set(Some(now.clone()));
        if terminal {
            active.actual_date = Set(Some(now));
        }

        active
            .update(&self.conn)
            .await
            .context("Failed to update follow-up status")
    }

    pub async fn assign(
        &self,
        follow_up: inspection_follow_ups::Model,
        assigned_to: i32,
    ) -> Result<inspection_follow_ups::Model> {
        let mut active: inspection_follow_ups::ActiveModel = follow_up.into();
        active.assigned_to = Set(Some(assigned_to));
        active.status = Set(FollowUpStatus::Scheduled.as_str().to_string());

        active
            .update(&self.conn)
            .await
            .context("Failed to assign follow-up")
    }

    pub async fn reschedule(
        &self,
        follow_up: inspection_follow_ups::Model,
        scheduled_date: String,
    ) -> Result<inspection_follow_ups::Model> {
        let mut active: inspection_follow_ups::ActiveModel = follow_up.into();
        active.scheduled_date = Set(scheduled_date);
        active.status = Set(FollowUpStatus::Scheduled.as_str().to_string());

        active
            .update(&self.conn)
            .await
            .context("Failed to reschedule follow-up")
    }

    /// Background sweep: actionable follow-ups past their date become overdue.
    pub async fn sweep_overdue(&self, today: &str) -> Result<u64> {
        use sea_orm::sea_query::Expr;

        let result = inspection_follow_ups::Entity::update_many()
            .col_expr(
                inspection_follow_ups::Column::Status,
                Expr::value(FollowUpStatus::Overdue.as_str()),
            )
            .filter(inspection_follow_ups::Column::Status.is_in(["pending", "scheduled"]))
            .filter(inspection_follow_ups::Column::ScheduledDate.lt(today))
            .exec(&self.conn)
            .await
            .context("Failed to sweep overdue follow-ups")?;

        Ok(result.rows_affected)
    }

    pub async fn stats(&self) -> Result<FollowUpStats> {
        let rows: Vec<(String, String, bool)> = inspection_follow_ups::Entity::find()
            .select_only()
            .column(inspection_follow_ups::Column::Status)
            .column(inspection_follow_ups::Column::ScheduledDate)
            .column(inspection_follow_ups::Column::ComplianceVerified)
            .into_tuple()
            .all(&self.conn)
            .await
            .context("Failed to aggregate follow-up stats")?;

        let today = models::iso_date(models::today());
        let mut stats = FollowUpStats::default();
        for (status, scheduled_date, verified) in rows {
            stats.total += 1;
            match status.as_str() {
                "pending" => stats.pending += 1,
                "scheduled" => stats.scheduled += 1,
                "in_progress" => stats.in_progress += 1,
                "completed" => stats.completed += 1,
                "cancelled" => stats.cancelled += 1,
                _ => {}
            }
            let actionable = matches!(status.as_str(), "pending" | "scheduled");
            if status == "overdue" || (actionable && scheduled_date < today) {
                stats.overdue += 1;
            }
            if actionable && scheduled_date == today {
                stats.due_today += 1;
            }
            if verified {
                stats.compliance_verified += 1;
            }
        }

        Ok(stats)
    }

    async fn report_numbers(&self, inspection_ids: &[i32]) -> Result<HashMap<i32, String>> {
        if inspection_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> = inspection_reports::Entity::find()
            .select_only()
            .column(inspection_reports::Column::Id)
            .column(inspection_reports::Column::ReportNumber)
            .filter(inspection_reports::Column::Id.is_in(inspection_ids.to_vec()))
            .into_tuple()
            .all(&self.conn)
            .await
            .context("Failed to load report numbers")?;

        Ok(rows.into_iter().collect())
    }

    async fn pending_violation_counts(
        &self,
        inspection_ids: &[i32],
    ) -> Result<HashMap<i32, i64>> {
        if inspection_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<i32> = inspection_violations::Entity::find()
            .select_only()
            .column(inspection_violations::Column::InspectionId)
            .filter(inspection_violations::Column::InspectionId.is_in(inspection_ids.to_vec()))
            .filter(inspection_violations::Column::Status.eq("pending"))
            .into_tuple()
            .all(&self.conn)
            .await
            .context("Failed to count pending violations")?;

        let mut counts = HashMap::new();
        for id in rows {
            *counts.entry(id).or_insert(0) += 1;
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

fn follow_up_order(a: &FollowUpListRow, b: &FollowUpListRow) -> Ordering {
    a.priority
        .rank()
        .cmp(&b.priority.rank())
        .then_with(|| a.follow_up.scheduled_date.cmp(&b.follow_up.scheduled_date))
        .then_with(|| a.follow_up.status.cmp(&b.follow_up.status))
}
