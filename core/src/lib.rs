#![no_std]

extern crate alloc;

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use game::*;
pub use panel::*;
pub use surface::*;
pub use timer::*;
pub use types::*;

mod board;
mod error;
mod game;
mod panel;
mod surface;
mod timer;
mod types;

#[cfg(test)]
mod testing;

/// Delay between two timer refreshes while a round is running.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the label permutation source.
    pub seed: u64,
    pub tick_interval: Duration,
}

impl GameConfig {
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    pub const fn with_tick_interval(self, tick_interval: Duration) -> Self {
        Self {
            tick_interval,
            ..self
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    NoChange,
    Accepted,
    Completed,
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            NoChange => false,
            Accepted => true,
            Completed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    Stale,
    Rendered,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Rendered)
    }
}
