use core::time::Duration;
use web_time::Instant;

use crate::*;

/// Feeds wall-clock time into a [`Game`] timeline.
///
/// Call [`RealtimeDriver::pump`] from whatever loop or animation frame the host has, the game only ever sees whole
/// milliseconds and the remainder is carried over to the next pump.
#[derive(Copy, Clone, Debug)]
pub struct RealtimeDriver {
    last: Instant,
}

impl RealtimeDriver {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(last: Instant) -> Self {
        Self { last }
    }

    pub fn pump(&mut self, game: &mut Game) -> TimelineOutcome {
        self.pump_at(game, Instant::now())
    }

    pub fn pump_at(&mut self, game: &mut Game, now: Instant) -> TimelineOutcome {
        let elapsed = now.saturating_duration_since(self.last);
        let whole_ms = elapsed.as_millis().min(Millis::MAX as u128) as Millis;
        if whole_ms == 0 {
            return TimelineOutcome::NoChange;
        }

        self.last += Duration::from_millis(whole_ms);
        game.advance(whole_ms)
    }
}

impl Default for RealtimeDriver {
    fn default() -> Self {
        Self::new()
    }
}
