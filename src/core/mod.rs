pub mod calendar;
pub mod dashboard;
pub mod filter;
pub mod join;
pub mod register;
pub mod summary;
