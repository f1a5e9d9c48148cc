pub mod budget;
pub mod dashboard;
pub mod document;
pub mod user;

pub use budget::{BudgetRecord, BudgetSubmission, NewBudget};
pub use dashboard::DashboardRecord;
pub use document::{Collection, Document};
pub use user::{NewUser, Role, User};
