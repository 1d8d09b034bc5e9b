pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod repo;
pub mod stats;
pub mod watch;
