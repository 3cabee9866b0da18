pub mod prelude;

pub mod establishments;
pub mod inspection_certificates;
pub mod inspection_follow_ups;
pub mod inspection_reports;
pub mod inspection_violations;
pub mod system_logs;
pub mod users;
