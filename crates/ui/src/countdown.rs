//! Countdown state machine.
//!
//! Pure state with no timers attached; [`crate::session::CountdownSession`]
//! drives [`Countdown::tick`] once per second while running.

pub const SECONDS_PER_MINUTE: u32 = 60;

/// Minutes preselected when the page opens.
pub const DEFAULT_MINUTES: u32 = 1;

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not running; nothing changed.
    Idle,
    /// One second elapsed and time remains.
    Continued,
    /// The countdown reached zero and stopped.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    minutes: u32,
    remaining_seconds: u32,
    running: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_MINUTES)
    }
}

impl Countdown {
    pub fn new(minutes: u32) -> Self {
        Self {
            minutes,
            remaining_seconds: full_duration(minutes),
            running: false,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Change the configured minutes. The display follows only while stopped.
    pub fn set_minutes(&mut self, minutes: u32) {
        self.minutes = minutes;
        if !self.running {
            self.remaining_seconds = full_duration(minutes);
        }
    }

    /// Start from the full duration. Returns `false` when `minutes` is zero.
    pub fn start(&mut self) -> bool {
        if self.minutes == 0 {
            return false;
        }
        self.remaining_seconds = full_duration(self.minutes);
        self.running = true;
        true
    }

    /// Stop without touching the remaining time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop and restore the full duration.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_seconds = full_duration(self.minutes);
    }

    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.running = false;
            Tick::Finished
        } else {
            Tick::Continued
        }
    }
}

fn full_duration(minutes: u32) -> u32 {
    minutes.saturating_mul(SECONDS_PER_MINUTE)
}
