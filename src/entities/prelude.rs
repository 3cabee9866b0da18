pub use super::establishments::Entity as Establishments;
pub use super::inspection_certificates::Entity as InspectionCertificates;
pub use super::inspection_follow_ups::Entity as InspectionFollowUps;
pub use super::inspection_reports::Entity as InspectionReports;
pub use super::inspection_violations::Entity as InspectionViolations;
pub use super::system_logs::Entity as SystemLogs;
pub use super::users::Entity as Users;
