//! Canonical entity models.
//!
//! One struct per backend entity. Each field's serde attributes list every
//! spelling the backend has been seen to use and the default applied when the
//! field is missing, so views never deal with raw payloads.

mod application;
mod catalog;
pub mod normalize;
mod payment;
mod period;
mod report;
mod scholarship;
mod student;
mod user_account;

pub use application::{Application, StatusChange};
pub use catalog::{Career, KnowledgeArea, Status};
pub use payment::PaymentDetail;
pub use period::AcademicPeriod;
pub use report::{ReportFilter, ReportKind, ReportRow};
pub use scholarship::{Requirement, ScholarshipType};
pub use student::Student;
pub use user_account::UserAccount;
