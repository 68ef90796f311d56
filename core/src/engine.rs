use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::schedule::{Scheduled, Scheduler, Task};
use crate::*;

/// Valid transitions:
/// - Playing -> Won
///
/// A new game always starts back in `Playing`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Won,
}

impl Phase {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Playing
    }
}

/// A memory game from the deal until every pair is found.
///
/// Intents (`flip_card`, `request_hint`, `request_peek`, `tick`) apply immediately. Anything deferred, like resolving a
/// face-up pair or expiring a hint, is queued on a virtual millisecond timeline and only runs when the host moves time
/// forward with [`Game::advance`]. Every queued task is tagged with the board generation, so work scheduled before a
/// `new_game` never touches the fresh board.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    rng: SmallRng,
    cards: Vec<Card>,
    face_up: SmallVec<[CardId; MAX_FACE_UP]>,
    matched_values: BTreeSet<CardValue>,
    move_count: Count,
    elapsed_ms: Millis,
    phase: Phase,
    started: bool,
    hint: HintSession,
    peek: PeekSession,
    generation: u32,
    now: Millis,
    scheduler: Scheduler,
}

impl Game {
    /// Deals a shuffled board, `seed` drives this deal and every following `new_game`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = CardLayout::shuffled(&mut rng);
        Self::from_parts(config, rng, layout)
    }

    /// Starts from a fixed deal instead of a shuffled one.
    ///
    /// Later `new_game` calls shuffle with seed 0, use [`Game::with_layout_seeded`] to pick another.
    pub fn with_layout(config: GameConfig, layout: CardLayout) -> Result<Self> {
        Self::with_layout_seeded(config, layout, 0)
    }

    /// Starts from a fixed deal, `seed` drives every following `new_game`.
    pub fn with_layout_seeded(config: GameConfig, layout: CardLayout, seed: u64) -> Result<Self> {
        Self::from_parts(config, SmallRng::seed_from_u64(seed), layout)
    }

    fn from_parts(config: GameConfig, rng: SmallRng, layout: CardLayout) -> Result<Self> {
        config.validate()?;
        let mut game = Self {
            config,
            rng,
            cards: Vec::new(),
            face_up: SmallVec::new(),
            matched_values: BTreeSet::new(),
            move_count: 0,
            elapsed_ms: 0,
            phase: Default::default(),
            started: false,
            hint: Default::default(),
            peek: Default::default(),
            generation: 0,
            now: 0,
            scheduler: Default::default(),
        };
        game.reset(layout);
        Ok(game)
    }

    pub fn new_game(&mut self) {
        let layout = CardLayout::shuffled(&mut self.rng);
        self.reset(layout);
    }

    pub fn new_game_with_layout(&mut self, layout: CardLayout) {
        self.reset(layout);
    }

    fn reset(&mut self, layout: CardLayout) {
        self.cards = layout.deal();
        self.face_up.clear();
        self.matched_values.clear();
        self.move_count = 0;
        self.elapsed_ms = 0;
        self.phase = Phase::Playing;
        self.started = false;
        self.hint.expire();
        self.peek.expire();
        self.generation = self.generation.wrapping_add(1);
        self.scheduler.clear();
        log::debug!(
            "New game (generation {}): {:?}",
            self.generation,
            layout.values()
        );
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id as usize)
    }

    /// Cards turned over and waiting for resolution, in flip order.
    pub fn face_up_ids(&self) -> &[CardId] {
        &self.face_up
    }

    pub fn matched_values(&self) -> &BTreeSet<CardValue> {
        &self.matched_values
    }

    pub fn move_count(&self) -> Count {
        self.move_count
    }

    /// Whole seconds the clock has run, as counted by ticks.
    pub fn elapsed_seconds(&self) -> Count {
        (self.elapsed_ms / 1000).min(Count::MAX as Millis) as Count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Set by the first flip, cleared again on win.
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn hint(&self) -> &HintSession {
        &self.hint
    }

    pub fn peek(&self) -> &PeekSession {
        &self.peek
    }

    /// Current position on the virtual timeline.
    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    /// Full plan for the rest of the board, the hint only shows its first step.
    pub fn plan(&self) -> Vec<MatchStep> {
        find_plan(&self.cards, &self.matched_values)
    }

    pub fn can_flip(&self, id: CardId) -> bool {
        if !self.phase.is_playing() || self.face_up.len() >= MAX_FACE_UP {
            return false;
        }

        match self.card(id) {
            Some(card) => !card.is_flipped && !card.is_matched,
            None => false,
        }
    }

    pub fn flip_card(&mut self, id: CardId) -> Result<FlipOutcome> {
        let index = self.validate_id(id)?;

        if !self.can_flip(id) {
            log::trace!("Ignored flip on card {}", id);
            return Ok(FlipOutcome::NoChange);
        }

        if !self.started {
            self.started = true;
            self.schedule(self.config.tick_interval_ms, Task::Tick);
        }

        self.cards[index].is_flipped = true;
        self.face_up.push(id);
        log::trace!("Flipped card {} ({})", id, self.cards[index].value);

        if self.face_up.len() < MAX_FACE_UP {
            return Ok(FlipOutcome::Flipped);
        }

        self.move_count += 1;
        let (first, second) = (self.face_up[0], self.face_up[1]);
        let is_match = self.cards[first as usize].value == self.cards[second as usize].value;
        self.schedule(
            self.config.resolve_delay_ms(is_match),
            Task::ResolvePair { first, second },
        );
        Ok(FlipOutcome::PairPending)
    }

    pub fn request_hint(&mut self) -> SessionOutcome {
        if self.hint.is_active() || !self.phase.is_playing() {
            return SessionOutcome::NoChange;
        }

        let plan = self.plan();
        let Some(step) = plan.first() else {
            return SessionOutcome::NoChange;
        };

        log::debug!("Hint: value {} at {:?}", step.value, step.card_ids);
        self.hint.activate(step);
        self.schedule(self.config.hint_duration_ms, Task::ExpireHint);
        SessionOutcome::Activated
    }

    pub fn request_peek(&mut self) -> SessionOutcome {
        if self.peek.is_active() || !self.phase.is_playing() {
            return SessionOutcome::NoChange;
        }

        self.peek.activate(&self.cards);
        self.schedule(self.config.peek_duration_ms, Task::ExpirePeek);
        SessionOutcome::Activated
    }

    /// Adds one `tick_interval_ms` to the clock while it is running, one second with the default interval.
    ///
    /// [`Game::advance`] already calls this every `tick_interval_ms`, hosts that drive the clock on their own should
    /// call this instead of advancing past ticks.
    pub fn tick(&mut self) -> TimelineOutcome {
        if self.started && self.phase.is_playing() {
            self.elapsed_ms = self.elapsed_ms.saturating_add(self.config.tick_interval_ms);
            TimelineOutcome::Updated
        } else {
            TimelineOutcome::NoChange
        }
    }

    /// Moves the timeline forward, running every task that comes due on the way in order.
    pub fn advance(&mut self, delta_ms: Millis) -> TimelineOutcome {
        let target = self.now.saturating_add(delta_ms);
        let mut outcome = TimelineOutcome::NoChange;

        while let Some(scheduled) = self.scheduler.pop_due(target) {
            self.now = self.now.max(scheduled.due);
            outcome = outcome | self.run(scheduled);
        }

        self.now = target;
        outcome
    }

    fn run(&mut self, scheduled: Scheduled) -> TimelineOutcome {
        if scheduled.generation != self.generation {
            log::trace!(
                "Dropped stale {:?} from generation {}",
                scheduled.task,
                scheduled.generation
            );
            return TimelineOutcome::NoChange;
        }

        match scheduled.task {
            Task::ResolvePair { first, second } => self.resolve_pair(first, second),
            Task::ExpireHint if self.hint.is_active() => {
                self.hint.expire();
                TimelineOutcome::Updated
            }
            Task::ExpirePeek if self.peek.is_active() => {
                self.peek.expire();
                TimelineOutcome::Updated
            }
            Task::Tick => {
                let outcome = self.tick();
                if outcome.has_update() {
                    self.schedule(self.config.tick_interval_ms, Task::Tick);
                }
                outcome
            }
            Task::ExpireHint | Task::ExpirePeek => TimelineOutcome::NoChange,
        }
    }

    fn resolve_pair(&mut self, first: CardId, second: CardId) -> TimelineOutcome {
        if self.face_up.as_slice() != [first, second] {
            log::trace!("Pair ({}, {}) no longer face-up", first, second);
            return TimelineOutcome::NoChange;
        }
        self.face_up.clear();

        let value = self.cards[first as usize].value;
        if value != self.cards[second as usize].value {
            self.cards[first as usize].is_flipped = false;
            self.cards[second as usize].is_flipped = false;
            log::trace!("Mismatch on cards {} and {}", first, second);
            return TimelineOutcome::Mismatched;
        }

        self.cards[first as usize].is_matched = true;
        self.cards[second as usize].is_matched = true;
        self.matched_values.insert(value);
        log::trace!("Matched value {}", value);

        if self.check_win() {
            TimelineOutcome::Won
        } else {
            TimelineOutcome::Matched
        }
    }

    fn check_win(&mut self) -> bool {
        if self.matched_values.len() != PAIR_COUNT || !self.phase.is_playing() {
            return false;
        }

        self.phase = Phase::Won;
        self.started = false;
        self.scheduler.cancel(Task::Tick);
        log::info!(
            "Won in {} moves, {}",
            self.move_count,
            format_clock(self.elapsed_seconds())
        );
        true
    }

    fn schedule(&mut self, delay_ms: Millis, task: Task) {
        let due = self.now.saturating_add(delay_ms);
        self.scheduler.schedule(due, self.generation, task);
    }

    fn validate_id(&self, id: CardId) -> Result<usize> {
        let index = id as usize;
        if index < self.cards.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidCardId(id))
        }
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self, task: Task) -> bool {
        self.scheduler.is_pending(task)
    }
}
