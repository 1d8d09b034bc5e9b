pub mod collection;
pub mod control;
pub mod filter;
pub mod staff;
pub mod summary;
