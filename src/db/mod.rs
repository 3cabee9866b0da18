use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::certificate::{
    CertificateListRow, CertificateStats, NewCertificate,
};
pub use repositories::follow_up::{FollowUpListRow, FollowUpStats, StatusUpdate};
pub use repositories::report::{ReportDetail, ReportListRow, ReportStats, ViolationCounts};
pub use repositories::user::User;
pub use repositories::violation::{
    BulkAction, ViolationDetail, ViolationEdit, ViolationListRow, ViolationStats,
};

use crate::entities::{
    establishments, inspection_certificates, inspection_follow_ups, inspection_reports,
    inspection_violations, system_logs,
};
use crate::models::{
    CertificateFilter, FollowUpFilter, ReportFilter, ReviewDecision, ViolationFilter,
};

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.starts_with(":memory:") && !db_url.contains("::memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn report_repo(&self) -> repositories::report::ReportRepository {
        repositories::report::ReportRepository::new(self.conn.clone())
    }

    fn violation_repo(&self) -> repositories::violation::ViolationRepository {
        repositories::violation::ViolationRepository::new(self.conn.clone())
    }

    fn follow_up_repo(&self) -> repositories::follow_up::FollowUpRepository {
        repositories::follow_up::FollowUpRepository::new(self.conn.clone())
    }

    fn certificate_repo(&self) -> repositories::certificate::CertificateRepository {
        repositories::certificate::CertificateRepository::new(self.conn.clone())
    }

    fn establishment_repo(&self) -> repositories::establishment::EstablishmentRepository {
        repositories::establishment::EstablishmentRepository::new(self.conn.clone())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn logs_repo(&self) -> repositories::logs::LogRepository {
        repositories::logs::LogRepository::new(self.conn.clone())
    }

    // ---- users ----

    pub async fn get_user(&self, id: i32) -> Result<Option<User>> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn verify_user_password(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>> {
        self.user_repo().verify_password(username, password).await
    }

    pub async fn list_users_by_role(&self, role: &str) -> Result<Vec<User>> {
        self.user_repo().list_by_role(role).await
    }

    // ---- reports ----

    pub async fn list_reports(&self, filter: &ReportFilter) -> Result<Vec<ReportListRow>> {
        self.report_repo().list(filter).await
    }

    pub async fn get_report(&self, id: i32) -> Result<Option<inspection_reports::Model>> {
        self.report_repo().get(id).await
    }

    pub async fn get_report_detail(&self, id: i32) -> Result<Option<ReportDetail>> {
        self.report_repo().get_detail(id).await
    }

    pub async fn review_report(
        &self,
        report: inspection_reports::Model,
        decision: ReviewDecision,
        notes: Option<String>,
        reviewer_id: i32,
    ) -> Result<inspection_reports::Model> {
        self.report_repo()
            .review(report, decision, notes, reviewer_id)
            .await
    }

    pub async fn report_stats(&self) -> Result<ReportStats> {
        self.report_repo().stats().await
    }

    // ---- violations ----

    pub async fn list_violations(&self, filter: &ViolationFilter) -> Result<Vec<ViolationListRow>> {
        self.violation_repo().list(filter).await
    }

    pub async fn get_violation(&self, id: i32) -> Result<Option<inspection_violations::Model>> {
        self.violation_repo().get(id).await
    }

    pub async fn get_violation_detail(&self, id: i32) -> Result<Option<ViolationDetail>> {
        self.violation_repo().get_detail(id).await
    }

    pub async fn mark_violation_rectified(
        &self,
        violation: inspection_violations::Model,
        notes: Option<String>,
        evidence: Option<String>,
    ) -> Result<inspection_violations::Model> {
        self.violation_repo()
            .mark_rectified(violation, notes, evidence)
            .await
    }

    pub async fn escalate_violation(
        &self,
        violation: inspection_violations::Model,
        notes: Option<String>,
    ) -> Result<inspection_violations::Model> {
        self.violation_repo().escalate(violation, notes).await
    }

    pub async fn waive_violation(
        &self,
        violation: inspection_violations::Model,
        reason: String,
    ) -> Result<inspection_violations::Model> {
        self.violation_repo().waive(violation, reason).await
    }

    pub async fn edit_violation(
        &self,
        violation: inspection_violations::Model,
        edit: ViolationEdit,
    ) -> Result<inspection_violations::Model> {
        self.violation_repo().edit(violation, edit).await
    }

    pub async fn bulk_violation_action(&self, action: BulkAction, ids: &[i32]) -> Result<u64> {
        self.violation_repo().bulk_apply(action, ids).await
    }

    pub async fn rectify_pending_violations(&self, inspection_id: i32) -> Result<u64> {
        self.violation_repo()
            .rectify_pending_for_inspection(inspection_id)
            .await
    }

    pub async fn violation_stats(&self) -> Result<ViolationStats> {
        self.violation_repo().stats().await
    }

    // ---- follow-ups ----

    pub async fn list_follow_ups(&self, filter: &FollowUpFilter) -> Result<Vec<FollowUpListRow>> {
        self.follow_up_repo().list(filter).await
    }

    pub async fn get_follow_up(&self, id: i32) -> Result<Option<inspection_follow_ups::Model>> {
        self.follow_up_repo().get(id).await
    }

    pub async fn update_follow_up_status(
        &self,
        follow_up: inspection_follow_ups::Model,
        update: StatusUpdate,
    ) -> Result<inspection_follow_ups::Model> {
        self.follow_up_repo().update_status(follow_up, update).await
    }

    pub async fn assign_follow_up(
        &self,
        follow_up: inspection_follow_ups::Model,
        assigned_to: i32,
    ) -> Result<inspection_follow_ups::Model> {
        self.follow_up_repo().assign(follow_up, assigned_to).await
    }

    pub async fn reschedule_follow_up(
        &self,
        follow_up: inspection_follow_ups::Model,
        scheduled_date: String,
    ) -> Result<inspection_follow_ups::Model> {
        self.follow_up_repo()
            .reschedule(follow_up, scheduled_date)
            .await
    }

    pub async fn follow_up_stats(&self) -> Result<FollowUpStats> {
        self.follow_up_repo().stats().await
    }

    // ---- certificates ----

    pub async fn list_certificates(
        &self,
        filter: &CertificateFilter,
    ) -> Result<Vec<CertificateListRow>> {
        self.certificate_repo().list(filter).await
    }

    pub async fn get_certificate(
        &self,
        id: i32,
    ) -> Result<Option<inspection_certificates::Model>> {
        self.certificate_repo().get(id).await
    }

    pub async fn active_certificate_for_inspection(
        &self,
        inspection_id: i32,
    ) -> Result<Option<inspection_certificates::Model>> {
        self.certificate_repo()
            .active_for_inspection(inspection_id)
            .await
    }

    pub async fn issue_certificate(
        &self,
        certificate: NewCertificate,
    ) -> Result<inspection_certificates::Model> {
        self.certificate_repo().issue(certificate).await
    }

    pub async fn revoke_certificate(
        &self,
        certificate: inspection_certificates::Model,
        reason: String,
        revoked_by: i32,
    ) -> Result<inspection_certificates::Model> {
        self.certificate_repo()
            .revoke(certificate, reason, revoked_by)
            .await
    }

    pub async fn certificate_stats(&self) -> Result<CertificateStats> {
        self.certificate_repo().stats().await
    }

    // ---- establishments ----

    pub async fn get_establishment(&self, id: i32) -> Result<Option<establishments::Model>> {
        self.establishment_repo().get(id).await
    }

    pub async fn list_establishments(&self) -> Result<Vec<establishments::Model>> {
        self.establishment_repo().list().await
    }

    pub async fn distinct_barangays(&self) -> Result<Vec<String>> {
        self.establishment_repo().distinct_barangays().await
    }

    pub async fn distinct_establishment_types(&self) -> Result<Vec<String>> {
        self.establishment_repo().distinct_types().await
    }

    pub async fn stamp_last_inspection(&self, establishment_id: i32, date: &str) -> Result<()> {
        self.establishment_repo()
            .set_last_inspection_date(establishment_id, date)
            .await
    }

    // ---- sweep + audit ----

    /// Flip past-deadline rows to overdue. Returns (violations, follow_ups).
    pub async fn sweep_overdue(&self, today: &str) -> Result<(u64, u64)> {
        let violations = self.violation_repo().sweep_overdue(today).await?;
        let follow_ups = self.follow_up_repo().sweep_overdue(today).await?;
        Ok((violations, follow_ups))
    }

    pub async fn log_event(
        &self,
        event_type: &str,
        level: &str,
        message: &str,
        details: Option<String>,
    ) -> Result<()> {
        self.logs_repo().add(event_type, level, message, details).await
    }

    pub async fn recent_logs(&self, limit: u64) -> Result<Vec<system_logs::Model>> {
        self.logs_repo().recent(limit).await
    }
}
