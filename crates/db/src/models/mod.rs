pub mod timer_log;
