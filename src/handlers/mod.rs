// handlers/mod.rs - Route handlers grouped by resource
//
// Every handler is a single-shot request → response function. Handlers read
// the body or path, make one call into the shared `Store`, and shape the
// reply. Access control lives in `crate::middleware` and is attached per
// route in `crate::routes`, never inside a handler.

pub mod auth; //      /api/v1/auth/* - register, login, password reset, guard probes
pub mod budget; //    budget form, listing and deletion
pub mod catalog; //   vendors, employees, items, customers, sales orders
pub mod dashboard; // POST /api/dashboard
pub mod public; //    landing page, /hi, /health
