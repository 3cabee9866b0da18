pub mod certificate;
pub mod establishment;
pub mod follow_up;
pub mod logs;
pub mod report;
pub mod user;
pub mod violation;
