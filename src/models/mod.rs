pub mod filters;
pub mod status;

pub use filters::{
    AssigneeFilter, CertificateFilter, FollowUpDateFilter, FollowUpFilter, FollowUpStatusFilter,
    ReportDateFilter, ReportFilter, ReportStatusFilter, ViolationDateFilter, ViolationFilter,
    ViolationStatusFilter,
};
pub use status::{
    label, CertificateValidity, FollowUpPriority, FollowUpStatus, FollowUpType, HazardLevel,
    ParseError, ReportStatus, ReviewDecision, RiskLevel, Severity, ViolationStatus,
};

use chrono::{Duration, NaiveDate, Utc};

/// Current date used by all deadline and date-bucket comparisons.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[must_use]
pub fn days_ago(days: i64) -> String {
    iso_date(today() - Duration::days(days))
}

#[must_use]
pub fn days_ahead(days: i64) -> String {
    iso_date(today() + Duration::days(days))
}

/// RFC 3339 timestamp for status-transition stamps.
#[must_use]
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339()
}
