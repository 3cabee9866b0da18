use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

macro_rules! string_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(ParseError::new($kind, other)),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum!(ReportStatus, "report status", {
    Draft => "draft",
    Submitted => "submitted",
    UnderReview => "under_review",
    Approved => "approved",
    Rejected => "rejected",
    Completed => "completed",
    RevisionRequested => "revision_requested",
});

string_enum!(RiskLevel, "risk level", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

string_enum!(HazardLevel, "hazard level", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Extreme => "extreme",
});

string_enum!(Severity, "severity", {
    Critical => "critical",
    Major => "major",
    Minor => "minor",
});

string_enum!(ViolationStatus, "violation status", {
    Pending => "pending",
    Rectified => "rectified",
    Overdue => "overdue",
    Escalated => "escalated",
    Waived => "waived",
});

string_enum!(FollowUpStatus, "follow-up status", {
    Pending => "pending",
    Scheduled => "scheduled",
    InProgress => "in_progress",
    Completed => "completed",
    Cancelled => "cancelled",
    Overdue => "overdue",
});

string_enum!(FollowUpType, "follow-up type", {
    ComplianceCheck => "compliance_check",
    ViolationRectification => "violation_rectification",
    Training => "training",
    ReInspection => "re_inspection",
    Other => "other",
});

impl Severity {
    /// Sort rank: critical before major before minor.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 1,
            Self::Major => 2,
            Self::Minor => 3,
        }
    }
}

impl ViolationStatus {
    /// Sort rank: overdue first, then pending, then rectified.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Overdue => 1,
            Self::Pending => 2,
            Self::Rectified => 3,
            _ => 4,
        }
    }
}

/// Human label: `under_review` -> `Under Review`.
#[must_use]
pub fn label(value: &str) -> String {
    value
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Admin adjudication of a submitted report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
    Revision,
}

impl ReviewDecision {
    #[must_use]
    pub const fn resulting_status(self) -> ReportStatus {
        match self {
            Self::Approve => ReportStatus::Approved,
            Self::Reject => ReportStatus::Rejected,
            Self::Revision => ReportStatus::RevisionRequested,
        }
    }
}

impl FromStr for ReviewDecision {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            "revision" | "revision_requested" => Ok(Self::Revision),
            other => Err(ParseError::new("review decision", other)),
        }
    }
}

/// Display status of a follow-up relative to its scheduled date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpPriority {
    Overdue,
    DueSoon,
    Status(FollowUpStatus),
}

impl FollowUpPriority {
    /// Overdue wins over due-soon; otherwise the stored status shows through.
    #[must_use]
    pub fn derive(status: FollowUpStatus, scheduled_date: &str, today: NaiveDate) -> Self {
        let scheduled = NaiveDate::parse_from_str(scheduled_date, "%Y-%m-%d").ok();
        let actionable = matches!(status, FollowUpStatus::Pending | FollowUpStatus::Scheduled);

        if status == FollowUpStatus::Overdue {
            return Self::Overdue;
        }
        if let Some(date) = scheduled {
            if status == FollowUpStatus::Pending && date < today {
                return Self::Overdue;
            }
            if actionable && date <= today + chrono::Duration::days(3) {
                return Self::DueSoon;
            }
        }
        Self::Status(status)
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Overdue => 1,
            Self::DueSoon => 2,
            Self::Status(FollowUpStatus::Pending) => 3,
            Self::Status(FollowUpStatus::Scheduled) => 4,
            Self::Status(_) => 5,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueSoon => "due_soon",
            Self::Status(status) => status.as_str(),
        }
    }
}

/// Certificate state derived from the revocation flag and expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateValidity {
    Valid,
    ExpiringSoon,
    Expired,
    Revoked,
}

impl CertificateValidity {
    #[must_use]
    pub fn derive(revoked: bool, valid_until: &str, today: NaiveDate) -> Self {
        if revoked {
            return Self::Revoked;
        }
        match NaiveDate::parse_from_str(valid_until, "%Y-%m-%d") {
            Ok(until) if until < today => Self::Expired,
            Ok(until) if until <= today + chrono::Duration::days(30) => Self::ExpiringSoon,
            _ => Self::Valid,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::ExpiringSoon => "expiring_soon",
            Self::Expired => "expired",
            Self::Revoked => "revoked",
        }
    }
}

impl FromStr for CertificateValidity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "valid" => Ok(Self::Valid),
            "expiring_soon" => Ok(Self::ExpiringSoon),
            "expired" => Ok(Self::Expired),
            "revoked" => Ok(Self::Revoked),
            other => Err(ParseError::new("certificate status", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn report_status_round_trips() {
        for status in ReportStatus::ALL {
            assert_eq!(status.as_str().parse::<ReportStatus>().unwrap(), *status);
        }
        assert!("bogus".parse::<ReportStatus>().is_err());
    }

    #[test]
    fn violation_ordering_ranks() {
        assert!(ViolationStatus::Overdue.rank() < ViolationStatus::Pending.rank());
        assert!(ViolationStatus::Pending.rank() < ViolationStatus::Rectified.rank());
        assert!(Severity::Critical.rank() < Severity::Minor.rank());
    }

    #[test]
    fn follow_up_priority_derivation() {
        let today = date("2026-08-06");

        // Stored overdue always wins.
        assert_eq!(
            FollowUpPriority::derive(FollowUpStatus::Overdue, "2026-09-01", today),
            FollowUpPriority::Overdue
        );
        // Pending past its scheduled date is overdue even if not yet swept.
        assert_eq!(
            FollowUpPriority::derive(FollowUpStatus::Pending, "2026-08-01", today),
            FollowUpPriority::Overdue
        );
        // Scheduled within three days is due soon.
        assert_eq!(
            FollowUpPriority::derive(FollowUpStatus::Scheduled, "2026-08-08", today),
            FollowUpPriority::DueSoon
        );
        // Far-out work shows its stored status.
        assert_eq!(
            FollowUpPriority::derive(FollowUpStatus::Scheduled, "2026-09-01", today),
            FollowUpPriority::Status(FollowUpStatus::Scheduled)
        );
        // Completed work is never reclassified.
        assert_eq!(
            FollowUpPriority::derive(FollowUpStatus::Completed, "2026-08-01", today),
            FollowUpPriority::Status(FollowUpStatus::Completed)
        );
    }

    #[test]
    fn certificate_validity_derivation() {
        let today = date("2026-08-06");

        assert_eq!(
            CertificateValidity::derive(true, "2027-01-01", today),
            CertificateValidity::Revoked
        );
        assert_eq!(
            CertificateValidity::derive(false, "2026-08-05", today),
            CertificateValidity::Expired
        );
        assert_eq!(
            CertificateValidity::derive(false, "2026-08-20", today),
            CertificateValidity::ExpiringSoon
        );
        assert_eq!(
            CertificateValidity::derive(false, "2027-08-06", today),
            CertificateValidity::Valid
        );
    }

    #[test]
    fn labels_humanize_snake_case() {
        assert_eq!(label("under_review"), "Under Review");
        assert_eq!(label("approved"), "Approved");
    }
}
