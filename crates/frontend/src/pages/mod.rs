mod applications;
mod change_password;
mod dashboard;
mod login;
mod my_applications;
mod not_found;
mod payments;
mod periods;
mod reports;
mod scholarship_types;
mod students;

pub use applications::ApplicationsPage;
pub use change_password::ChangePasswordPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use my_applications::MyApplicationsPage;
pub use not_found::NotFoundPage;
pub use payments::PaymentsPage;
pub use periods::PeriodsPage;
pub use reports::ReportsPage;
pub use scholarship_types::ScholarshipTypesPage;
pub use students::StudentsPage;
