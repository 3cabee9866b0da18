use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    JoinType, QueryFilter, QuerySelect, RelationTrait,
};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use crate::entities::{establishments, inspection_reports, inspection_violations, users};
use crate::models::{
    self, Severity, ViolationDateFilter, ViolationFilter, ViolationStatus, ViolationStatusFilter,
};

#[derive(Debug)]
pub struct ViolationListRow {
    pub violation: inspection_violations::Model,
    pub report: Option<inspection_reports::Model>,
    pub establishment: Option<establishments::Model>,
}

#[derive(Debug)]
pub struct ViolationDetail {
    pub violation: inspection_violations::Model,
    pub report: Option<inspection_reports::Model>,
    pub establishment: Option<establishments::Model>,
    pub inspector_name: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, serde::Serialize)]
pub struct ViolationStats {
    pub total: i64,
    pub pending: i64,
    pub rectified: i64,
    pub overdue: i64,
    pub escalated: i64,
    pub waived: i64,
    pub critical: i64,
    pub major: i64,
    pub minor: i64,
    /// Past compliance deadline and not rectified, regardless of stored status.
    pub past_deadline: i64,
}

/// Fields an admin may edit on a violation.
#[derive(Debug, Clone)]
pub struct ViolationEdit {
    pub severity: Severity,
    pub fine_amount: Option<f64>,
    pub compliance_deadline: Option<String>,
    pub admin_notes: Option<String>,
}

/// Bulk adjudication applied to a set of violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Rectify,
    Escalate,
    Waive,
}

impl FromStr for BulkAction {
    type Err = models::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectify" => Ok(Self::Rectify),
            "escalate" => Ok(Self::Escalate),
            "waive" => Ok(Self::Waive),
            other => Err(models::ParseError {
                kind: "bulk action",
                value: other.to_string(),
            }),
        }
    }
}

pub struct ViolationRepository {
    conn: DatabaseConnection,
}

impl ViolationRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self, filter: &ViolationFilter) -> Result<Vec<ViolationListRow>> {
        let mut query = inspection_violations::Entity::find()
            .find_also_related(inspection_reports::Entity);

        if let Some(ViolationStatusFilter::Exact(status)) = filter.status {
            query = query.filter(inspection_violations::Column::Status.eq(status.as_str()));
        }

        if let Some(severity) = filter.severity {
            query = query.filter(inspection_violations::Column::Severity.eq(severity.as_str()));
        }

        if let Some(date) = filter.date {
            let today = models::iso_date(models::today());
            query = match date {
                ViolationDateFilter::Overdue => query.filter(
                    Condition::all()
                        .add(inspection_violations::Column::ComplianceDeadline.lt(today))
                        .add(inspection_violations::Column::Status.ne("rectified")),
                ),
                ViolationDateFilter::Today => query
                    .filter(inspection_violations::Column::CreatedAt.gte(today))
                    .filter(
                        inspection_violations::Column::CreatedAt.lt(models::days_ahead(1)),
                    ),
                ViolationDateFilter::Week => query
                    .filter(inspection_violations::Column::CreatedAt.gte(models::days_ago(7))),
                ViolationDateFilter::Month => query
                    .filter(inspection_violations::Column::CreatedAt.gte(models::days_ago(30))),
            };
        }

        let needs_establishment = filter.barangay.is_some() || filter.search.is_some();
        if needs_establishment {
            query = query.join(
                JoinType::LeftJoin,
                inspection_reports::Relation::Establishment.def(),
            );
        }

        if let Some(barangay) = &filter.barangay {
            query = query.filter(establishments::Column::Barangay.contains(barangay.as_str()));
        }

        if let Some(term) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(inspection_violations::Column::ViolationCode.contains(term.as_str()))
                    .add(inspection_violations::Column::ViolationDescription.contains(term.as_str()))
                    .add(establishments::Column::EstablishmentName.contains(term.as_str()))
                    .add(establishments::Column::OwnerName.contains(term.as_str()))
                    .add(establishments::Column::Address.contains(term.as_str()))
                    .add(establishments::Column::Barangay.contains(term.as_str()))
                    .add(inspection_reports::Column::ReportNumber.contains(term.as_str())),
            );
        }

        let rows = query
            .all(&self.conn)
            .await
            .context("Failed to list violations")?;

        let establishment_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(_, r)| r.as_ref().map(|r| r.establishment_id))
            .collect();
        let establishment_map = self.establishment_map(&establishment_ids).await?;

        let mut out: Vec<ViolationListRow> = rows
            .into_iter()
            .map(|(violation, report)| {
                let establishment = report
                    .as_ref()
                    .and_then(|r| establishment_map.get(&r.establishment_id).cloned());
                ViolationListRow {
                    violation,
                    report,
                    establishment,
                }
            })
            .collect();

        // Priority sort: overdue before pending before rectified, critical
        // before major before minor, earliest deadline first, newest last.
        out.sort_by(|a, b| violation_order(&a.violation, &b.violation));

        Ok(out)
    }

    pub async fn get(&self, id: i32) -> Result<Option<inspection_violations::Model>> {
        inspection_violations::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query violation")
    }

    pub async fn get_detail(&self, id: i32) -> Result<Option<ViolationDetail>> {
        let Some((violation, report)) = inspection_violations::Entity::find_by_id(id)
            .find_also_related(inspection_reports::Entity)
            .one(&self.conn)
            .await
            .context("Failed to query violation")?
        else {
            return Ok(None);
        };

        let establishment = match &report {
            Some(r) => {
                establishments::Entity::find_by_id(r.establishment_id)
                    .one(&self.conn)
                    .await?
            }
            None => None,
        };

        let inspector_name = match &report {
            Some(r) => users::Entity::find_by_id(r.inspected_by)
                .one(&self.conn)
                .await?
                .map(|u| u.full_name()),
            None => None,
        };

        Ok(Some(ViolationDetail {
            violation,
            report,
            establishment,
            inspector_name,
        }))
    }

    pub async fn mark_rectified(
        &self,
        violation: inspection_violations::Model,
        notes: Option<String>,
        evidence: Option<String>,
    ) -> Result<inspection_violations::Model> {
        let mut active: inspection_violations::ActiveModel = violation.into();
        active.status = Set(ViolationStatus::Rectified.as_str().to_string());
        active.rectified_at = Set(Some(models::now_timestamp()));
        if let Some(notes) = notes {
            active.admin_notes = Set(Some(notes));
        }
        if let Some(evidence) = evidence {
            active.rectified_evidence = Set(Some(evidence));
        }

        active
            .update(&self.conn)
            .await
            .context("Failed to mark violation rectified")
    }

    pub async fn escalate(
        &self,
        violation: inspection_violations::Model,
        notes: Option<String>,
    ) -> Result<inspection_violations::Model> {
        let mut active: inspection_violations::ActiveModel = violation.into();
        active.status = Set(ViolationStatus::Escalated.as_str().to_string());
        if let Some(notes) = notes {
            active.admin_notes = Set(Some(notes));
        }

        active
            .update(&self.conn)
            .await
            .context("Failed to escalate violation")
    }

    pub async fn waive(
        &self,
        violation: inspection_violations::Model,
        reason: String,
    ) -> Result<inspection_violations::Model> {
        let mut active: inspection_violations::ActiveModel = violation.into();
        active.status = Set(ViolationStatus::Waived.as_str().to_string());
        active.admin_notes = Set(Some(reason));

        active
            .update(&self.conn)
            .await
            .context("Failed to waive violation")
    }

    pub async fn edit(
        &self,
        violation: inspection_violations::Model,
        edit: ViolationEdit,
    ) -> Result<inspection_violations::Model> {
        let mut active: inspection_violations::ActiveModel = violation.into();
        active.severity = Set(edit.severity.as_str().to_string());
        active.fine_amount = Set(edit.fine_amount);
        active.compliance_deadline = Set(edit.compliance_deadline);
        active.admin_notes = Set(edit.admin_notes);

        active
            .update(&self.conn)
            .await
            .context("Failed to edit violation")
    }

    /// Apply a bulk action. Rows already rectified or waived are skipped; the
    /// returned count is the number of rows actually changed.
    pub async fn bulk_apply(&self, action: BulkAction, ids: &[i32]) -> Result<u64> {
        let mut updated = 0;

        for id in ids {
            let Some(violation) = self.get(*id).await? else {
                continue;
            };
            if matches!(violation.status.as_str(), "rectified" | "waived") {
                continue;
            }

            match action {
                BulkAction::Rectify => {
                    self.mark_rectified(violation, None, None).await?;
                }
                BulkAction::Escalate => {
                    self.escalate(violation, None).await?;
                }
                BulkAction::Waive => {
                    self.waive(violation, "Waived in bulk action".to_string())
                        .await?;
                }
            }
            updated += 1;
        }

        Ok(updated)
    }

    /// Compliance-verified follow-up cascade: every pending violation on the
    /// inspection becomes rectified.
    pub async fn rectify_pending_for_inspection(&self, inspection_id: i32) -> Result<u64> {
        use sea_orm::sea_query::Expr;

        let result = inspection_violations::Entity::update_many()
            .col_expr(
                inspection_violations::Column::Status,
                Expr::value(ViolationStatus::Rectified.as_str()),
            )
            .col_expr(
                inspection_violations::Column::RectifiedAt,
                Expr::value(models::now_timestamp()),
            )
            .filter(inspection_violations::Column::InspectionId.eq(inspection_id))
            .filter(inspection_violations::Column::Status.eq("pending"))
            .exec(&self.conn)
            .await
            .context("Failed to rectify pending violations")?;

        Ok(result.rows_affected)
    }

    /// Background sweep: pending violations past their deadline become overdue.
    pub async fn sweep_overdue(&self, today: &str) -> Result<u64> {
        use sea_orm::sea_query::Expr;

        let result = inspection_violations::Entity::update_many()
            .col_expr(
                inspection_violations::Column::Status,
                Expr::value(ViolationStatus::Overdue.as_str()),
            )
            .filter(inspection_violations::Column::Status.eq("pending"))
            .filter(inspection_violations::Column::ComplianceDeadline.is_not_null())
            .filter(inspection_violations::Column::ComplianceDeadline.lt(today))
            .exec(&self.conn)
            .await
            .context("Failed to sweep overdue violations")?;

        Ok(result.rows_affected)
    }

    pub async fn stats(&self) -> Result<ViolationStats> {
        let rows: Vec<(String, String, Option<String>)> = inspection_violations::Entity::find()
            .select_only()
            .column(inspection_violations::Column::Status)
            .column(inspection_violations::Column::Severity)
            .column(inspection_violations::Column::ComplianceDeadline)
            .into_tuple()
            .all(&self.conn)
            .await
            .context("Failed to aggregate violation stats")?;

        let today = models::iso_date(models::today());
        let mut stats = ViolationStats::default();
        for (status, severity, deadline) in rows {
            stats.total += 1;
            match status.as_str() {
                "pending" => stats.pending += 1,
                "rectified" => stats.rectified += 1,
                "overdue" => stats.overdue += 1,
                "escalated" => stats.escalated += 1,
                "waived" => stats.waived += 1,
                _ => {}
            }
            match severity.as_str() {
                "critical" => stats.critical += 1,
                "major" => stats.major += 1,
                "minor" => stats.minor += 1,
                _ => {}
            }
            if status != "rectified" {
                if let Some(deadline) = deadline {
                    if deadline.as_str() < today.as_str() {
                        stats.past_deadline += 1;
                    }
                }
            }
        }

        Ok(stats)
    }

    async fn establishment_map(
        &self,
        ids: &[i32],
    ) -> Result<HashMap<i32, establishments::Model>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = establishments::Entity::find()
            .filter(establishments::Column::Id.is_in(ids.to_vec()))
            .all(&self.conn)
            .await
            .context("Failed to load establishments")?;

        Ok(rows.into_iter().map(|e| (e.id, e)).collect())
    }
}

fn violation_order(
    a: &inspection_violations::Model,
    b: &inspection_violations::Model,
) -> Ordering {
    let rank = |v: &inspection_violations::Model| {
        (
            ViolationStatus::from_str(&v.status).map_or(4, ViolationStatus::rank),
            Severity::from_str(&v.severity).map_or(4, Severity::rank),
        )
    };

    rank(a)
        .cmp(&rank(b))
        .then_with(|| match (&a.compliance_deadline, &b.compliance_deadline) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| b.created_at.cmp(&a.created_at))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(status: &str, severity: &str, deadline: Option<&str>, created: &str) -> inspection_violations::Model {
        inspection_violations::Model {
            id: 0,
            inspection_id: 1,
            violation_code: "V-1".to_string(),
            violation_description: String::new(),
            section_violated: None,
            severity: severity.to_string(),
            fine_amount: None,
            compliance_deadline: deadline.map(str::to_string),
            status: status.to_string(),
            rectified_at: None,
            rectified_evidence: None,
            admin_notes: None,
            created_at: created.to_string(),
        }
    }

    #[test]
    fn ordering_puts_overdue_critical_first() {
        let mut rows = vec![
            violation("rectified", "critical", None, "2026-01-03"),
            violation("pending", "minor", Some("2026-09-01"), "2026-01-02"),
            violation("overdue", "major", Some("2026-07-01"), "2026-01-01"),
            violation("overdue", "critical", Some("2026-07-15"), "2026-01-01"),
            violation("pending", "critical", Some("2026-08-20"), "2026-01-04"),
        ];
        rows.sort_by(violation_order);

        let order: Vec<(&str, &str)> = rows
            .iter()
            .map(|v| (v.status.as_str(), v.severity.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("overdue", "critical"),
                ("overdue", "major"),
                ("pending", "critical"),
                ("pending", "minor"),
                ("rectified", "critical"),
            ]
        );
    }

    #[test]
    fn ordering_breaks_ties_on_deadline_then_recency() {
        let mut rows = vec![
            violation("pending", "major", None, "2026-01-01"),
            violation("pending", "major", Some("2026-09-01"), "2026-01-01"),
            violation("pending", "major", Some("2026-08-10"), "2026-01-01"),
        ];
        rows.sort_by(violation_order);

        assert_eq!(rows[0].compliance_deadline.as_deref(), Some("2026-08-10"));
        assert_eq!(rows[1].compliance_deadline.as_deref(), Some("2026-09-01"));
        assert_eq!(rows[2].compliance_deadline, None);
    }
}
