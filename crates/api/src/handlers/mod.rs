pub mod page;
pub mod timers;
