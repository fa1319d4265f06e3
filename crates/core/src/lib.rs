//! Domain types and validation rules shared by the timerlog crates.

pub mod error;
pub mod timer_log;
pub mod types;
