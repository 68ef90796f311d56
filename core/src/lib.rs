#![no_std]

extern crate alloc;

use core::ops::BitOr;

pub use card::*;
pub use config::*;
pub use driver::*;
pub use engine::*;
pub use error::*;
pub use planner::*;
pub use session::*;
pub use shuffle::*;
pub use snapshot::*;
pub use types::*;

mod card;
mod config;
mod driver;
mod engine;
mod error;
mod planner;
mod schedule;
mod session;
mod shuffle;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    NoChange,
    /// First card of a pair turned over.
    Flipped,
    /// Second card turned over, the pair resolves after the match-check delay.
    PairPending,
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Flipped => true,
            Self::PairPending => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SessionOutcome {
    NoChange,
    Activated,
}

impl SessionOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Activated => true,
        }
    }
}

/// What happened while time moved forward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TimelineOutcome {
    NoChange,
    /// Clock ticked or a hint/peek expired.
    Updated,
    Mismatched,
    Matched,
    Won,
}

impl TimelineOutcome {
    pub const fn has_update(self) -> bool {
        use TimelineOutcome::*;
        match self {
            NoChange => false,
            Updated => true,
            Mismatched => true,
            Matched => true,
            Won => true,
        }
    }
}

impl BitOr for TimelineOutcome {
    type Output = TimelineOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use TimelineOutcome::*;
        match (self, rhs) {
            (Won, _) => Won,
            (_, Won) => Won,
            (Matched, _) => Matched,
            (_, Matched) => Matched,
            (Mismatched, _) => Mismatched,
            (_, Mismatched) => Mismatched,
            (Updated, _) => Updated,
            (_, Updated) => Updated,
            (NoChange, NoChange) => NoChange,
        }
    }
}
