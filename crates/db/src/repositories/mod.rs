pub mod timer_log_repo;

pub use timer_log_repo::TimerLogRepo;
