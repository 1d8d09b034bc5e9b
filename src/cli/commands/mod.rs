pub mod calendar;
pub mod collect;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod init;
pub mod log;
pub mod register;
pub mod session;
