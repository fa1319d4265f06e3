//! Countdown timer front-end.
//!
//! The countdown itself is local: a state machine advanced by a cancellable
//! one-second ticker. Each start is recorded through the timer log endpoint,
//! and the recent runs are fetched for display. The two sides are
//! independent; a failed request never changes the countdown.

pub mod client;
pub mod countdown;
pub mod display;
pub mod page;
pub mod session;
pub mod ticker;
