// handlers/budget/mod.rs - Budget records, one per email
//
// The paths are inherited from the front-end: the listing answers on the
// page URL it is fetched from, and the form posts to /budget-submit-form.

pub mod delete; // DELETE /api/v1/budgets/:id
pub mod list; //   GET    /Budgets/budget.html
pub mod submit; // POST   /budget-submit-form

pub use delete::delete as budget_delete;
pub use list::get as budget_list;
pub use submit::post as budget_submit;
