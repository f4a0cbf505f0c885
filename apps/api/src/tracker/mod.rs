// Record-keeping CRUD: companies, contacts, applications, interview
// questions, and to-do items. Owner-scoped rows take an explicit `user_id`;
// a row belonging to someone else is indistinguishable from a missing one.

pub mod applications;
pub mod companies;
pub mod company_questions;
pub mod contacts;
pub mod questions;
pub mod todos;
