//! Typed filters parsed from the dashboard query strings.
//!
//! Every parameter is independently optional; unrecognized values fall back
//! to the page default so a hand-edited URL never errors.

use std::str::FromStr;

use super::status::{
    CertificateValidity, FollowUpStatus, FollowUpType, ReportStatus, Severity, ViolationStatus,
};

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatusFilter {
    All,
    /// submitted or under_review
    PendingReview,
    /// approved, rejected, or completed
    Completed,
    Exact(ReportStatus),
}

impl ReportStatusFilter {
    /// Page default is the submitted queue.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("all") => Self::All,
            Some("pending_review") => Self::PendingReview,
            Some("completed") => Self::Completed,
            Some(other) => ReportStatus::from_str(other)
                .map_or(Self::Exact(ReportStatus::Submitted), Self::Exact),
            None => Self::Exact(ReportStatus::Submitted),
        }
    }

    #[must_use]
    pub fn matching_statuses(self) -> Option<Vec<&'static str>> {
        match self {
            Self::All => None,
            Self::PendingReview => Some(vec!["submitted", "under_review"]),
            Self::Completed => Some(vec!["approved", "rejected", "completed"]),
            Self::Exact(status) => Some(vec![status.as_str()]),
        }
    }

    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::PendingReview => "pending_review",
            Self::Completed => "completed",
            Self::Exact(status) => status.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDateFilter {
    Today,
    Yesterday,
    Week,
    Month,
    Year,
}

impl ReportDateFilter {
    #[must_use]
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value {
            Some("today") => Some(Self::Today),
            Some("yesterday") => Some(Self::Yesterday),
            Some("week") => Some(Self::Week),
            Some("month") => Some(Self::Month),
            Some("year") => Some(Self::Year),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub status: Option<ReportStatusFilter>,
    pub date: Option<ReportDateFilter>,
    pub search: Option<String>,
    pub barangay: Option<String>,
    pub establishment_type: Option<String>,
}

impl ReportFilter {
    #[must_use]
    pub fn from_params(
        status: Option<&str>,
        date: Option<&str>,
        search: Option<&str>,
        barangay: Option<&str>,
        establishment_type: Option<&str>,
    ) -> Self {
        Self {
            status: Some(ReportStatusFilter::parse(status)),
            date: ReportDateFilter::parse(date),
            search: clean(search),
            barangay: clean(barangay),
            establishment_type: clean(establishment_type),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationStatusFilter {
    All,
    Exact(ViolationStatus),
}

impl ViolationStatusFilter {
    /// Page default is the pending queue.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("all") => Self::All,
            Some(other) => ViolationStatus::from_str(other)
                .map_or(Self::Exact(ViolationStatus::Pending), Self::Exact),
            None => Self::Exact(ViolationStatus::Pending),
        }
    }

    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Exact(status) => status.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationDateFilter {
    /// Past the compliance deadline and not rectified.
    Overdue,
    Today,
    Week,
    Month,
}

impl ViolationDateFilter {
    #[must_use]
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value {
            Some("overdue") => Some(Self::Overdue),
            Some("today") => Some(Self::Today),
            Some("week") => Some(Self::Week),
            Some("month") => Some(Self::Month),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViolationFilter {
    pub status: Option<ViolationStatusFilter>,
    pub severity: Option<Severity>,
    pub date: Option<ViolationDateFilter>,
    pub barangay: Option<String>,
    pub search: Option<String>,
}

impl ViolationFilter {
    #[must_use]
    pub fn from_params(
        status: Option<&str>,
        severity: Option<&str>,
        date: Option<&str>,
        barangay: Option<&str>,
        search: Option<&str>,
    ) -> Self {
        Self {
            status: Some(ViolationStatusFilter::parse(status)),
            severity: severity.and_then(|s| Severity::from_str(s).ok()),
            date: ViolationDateFilter::parse(date),
            barangay: clean(barangay),
            search: clean(search),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpStatusFilter {
    All,
    /// Stored overdue, or pending/scheduled with a past date.
    Overdue,
    /// Pending/scheduled due within the next three days.
    DueSoon,
    Exact(FollowUpStatus),
}

impl FollowUpStatusFilter {
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("all") => Self::All,
            Some("overdue") => Self::Overdue,
            Some("due_soon") => Self::DueSoon,
            Some(other) => FollowUpStatus::from_str(other).map_or(Self::All, Self::Exact),
        }
    }

    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Overdue => "overdue",
            Self::DueSoon => "due_soon",
            Self::Exact(status) => status.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpDateFilter {
    Today,
    Tomorrow,
    Week,
    Overdue,
}

impl FollowUpDateFilter {
    #[must_use]
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value {
            Some("today") => Some(Self::Today),
            Some("tomorrow") => Some(Self::Tomorrow),
            Some("week") => Some(Self::Week),
            Some("overdue") => Some(Self::Overdue),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::Week => "week",
            Self::Overdue => "overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssigneeFilter {
    #[default]
    Any,
    Unassigned,
    User(i32),
}

impl AssigneeFilter {
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("unassigned") => Self::Unassigned,
            Some(other) => other.parse::<i32>().map_or(Self::Any, Self::User),
            None => Self::Any,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FollowUpFilter {
    pub status: FollowUpStatusFilter,
    pub follow_up_type: Option<FollowUpType>,
    pub date: Option<FollowUpDateFilter>,
    pub barangay: Option<String>,
    pub establishment: Option<i32>,
    pub assigned_to: AssigneeFilter,
    pub search: Option<String>,
}

impl Default for FollowUpStatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl FollowUpFilter {
    #[must_use]
    #[allow(clippy::similar_names)]
    pub fn from_params(
        status: Option<&str>,
        follow_up_type: Option<&str>,
        date: Option<&str>,
        barangay: Option<&str>,
        establishment: Option<&str>,
        assigned_to: Option<&str>,
        search: Option<&str>,
    ) -> Self {
        Self {
            status: FollowUpStatusFilter::parse(status),
            follow_up_type: follow_up_type
                .filter(|t| *t != "all")
                .and_then(|t| FollowUpType::from_str(t).ok()),
            date: FollowUpDateFilter::parse(date),
            barangay: clean(barangay),
            establishment: establishment.and_then(|e| e.parse().ok()),
            assigned_to: AssigneeFilter::parse(assigned_to),
            search: clean(search),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CertificateFilter {
    pub status: Option<CertificateValidity>,
    pub certificate_type: Option<String>,
    pub date: Option<ReportDateFilter>,
    pub barangay: Option<String>,
    pub establishment_type: Option<String>,
    pub search: Option<String>,
}

impl CertificateFilter {
    #[must_use]
    pub fn from_params(
        status: Option<&str>,
        certificate_type: Option<&str>,
        date: Option<&str>,
        barangay: Option<&str>,
        establishment_type: Option<&str>,
        search: Option<&str>,
    ) -> Self {
        Self {
            status: status
                .filter(|s| *s != "all")
                .and_then(|s| CertificateValidity::from_str(s).ok()),
            certificate_type: clean(certificate_type),
            date: ReportDateFilter::parse(date),
            barangay: clean(barangay),
            establishment_type: clean(establishment_type),
            search: clean(search),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_status_default_and_buckets() {
        assert_eq!(
            ReportStatusFilter::parse(None),
            ReportStatusFilter::Exact(ReportStatus::Submitted)
        );
        assert_eq!(
            ReportStatusFilter::parse(Some("pending_review")).matching_statuses(),
            Some(vec!["submitted", "under_review"])
        );
        assert_eq!(
            ReportStatusFilter::parse(Some("completed")).matching_statuses(),
            Some(vec!["approved", "rejected", "completed"])
        );
        assert_eq!(ReportStatusFilter::parse(Some("all")).matching_statuses(), None);
        // Unrecognized values fall back to the default queue.
        assert_eq!(
            ReportStatusFilter::parse(Some("garbage")),
            ReportStatusFilter::Exact(ReportStatus::Submitted)
        );
    }

    #[test]
    fn violation_status_default_is_pending() {
        assert_eq!(
            ViolationStatusFilter::parse(None),
            ViolationStatusFilter::Exact(ViolationStatus::Pending)
        );
        assert_eq!(
            ViolationStatusFilter::parse(Some("escalated")),
            ViolationStatusFilter::Exact(ViolationStatus::Escalated)
        );
    }

    #[test]
    fn assignee_filter_parses_ids_and_unassigned() {
        assert_eq!(AssigneeFilter::parse(Some("unassigned")), AssigneeFilter::Unassigned);
        assert_eq!(AssigneeFilter::parse(Some("42")), AssigneeFilter::User(42));
        assert_eq!(AssigneeFilter::parse(Some("abc")), AssigneeFilter::Any);
        assert_eq!(AssigneeFilter::parse(None), AssigneeFilter::Any);
    }

    #[test]
    fn blank_text_filters_are_dropped() {
        let filter = ReportFilter::from_params(None, None, Some("   "), Some(""), None);
        assert!(filter.search.is_none());
        assert!(filter.barangay.is_none());
    }
}
