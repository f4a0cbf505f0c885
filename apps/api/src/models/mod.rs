pub mod application;
pub mod company;
pub mod company_question;
pub mod contact;
pub mod question;
pub mod todo;
pub mod user;
