use core::time::Duration;
use rand::{SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;
use crate::timer::{ActiveTimer, TickIdSource};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Idle,
    Running,
    Complete,
}

impl RoundState {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Idle
    }
}

/// The whole puzzle: the board, the number that must be clicked next and the elapsed time display.
///
/// All inputs (start requests, panel clicks and fired ticks) are expected to run to completion one at a time.
pub struct Game<D: DisplaySurface, S: TickScheduler> {
    config: GameConfig,
    board: Board<D::PanelHandle>,
    display: D,
    scheduler: S,
    rng: SmallRng,
    expected_number: Option<Label>,
    round: u32,
    round_started_at: Option<Instant>,
    round_finished_at: Option<Instant>,
    active_timer: Option<ActiveTimer<S::Handle>>,
    tick_ids: TickIdSource,
}

impl<D: DisplaySurface, S: TickScheduler> Game<D, S> {
    pub fn new(config: GameConfig, mut display: D, scheduler: S) -> Self {
        let board = Board::new(&mut display);
        Self {
            config,
            board,
            display,
            scheduler,
            rng: SmallRng::seed_from_u64(config.seed),
            expected_number: None,
            round: 0,
            round_started_at: None,
            round_finished_at: None,
            active_timer: None,
            tick_ids: Default::default(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board<D::PanelHandle> {
        &self.board
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn expected_number(&self) -> Option<Label> {
        self.expected_number
    }

    /// Id of the tick currently armed, if any.
    pub fn active_timer(&self) -> Option<TickId> {
        self.active_timer.as_ref().map(|timer| timer.id)
    }

    /// Number of rounds started so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn state(&self) -> RoundState {
        match self.expected_number {
            None => RoundState::Idle,
            Some(expected) if expected < TERMINAL_LABEL => RoundState::Running,
            Some(_) => RoundState::Complete,
        }
    }

    /// Time spent on the current round, frozen once it is complete.
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        let started_at = self.round_started_at?;
        let until = self.round_finished_at.unwrap_or(now);
        Some(until.saturating_duration_since(started_at))
    }

    /// Exact time of the last finished round, measured up to its final click.
    pub fn final_time(&self) -> Option<Duration> {
        let started_at = self.round_started_at?;
        let finished_at = self.round_finished_at?;
        Some(finished_at.saturating_duration_since(started_at))
    }

    /// Begins a fresh round with a random arrangement, superseding any round in progress.
    pub fn start(&mut self, now: Instant) {
        self.stop_timer();
        let labels = self.board.activate(&mut self.rng, &mut self.display);
        log::debug!("dealt labels: {:?}", labels);
        self.begin_round(now);
    }

    /// Like [`start`](Self::start) but with a fixed arrangement. Nothing changes when `labels` is rejected.
    pub fn start_with_labels(&mut self, labels: [Label; PANEL_COUNT], now: Instant) -> Result<()> {
        if !is_permutation(&labels) {
            return Err(GameError::InvalidLabels);
        }

        self.stop_timer();
        self.board.activate_with(labels, &mut self.display)?;
        self.begin_round(now);
        Ok(())
    }

    fn begin_round(&mut self, now: Instant) {
        self.expected_number = Some(0);
        self.round = self.round.saturating_add(1);
        self.round_started_at = Some(now);
        self.round_finished_at = None;
        log::debug!("round {} started", self.round);
        self.run_timer(now);
    }

    /// Delivers a fired tick. Ticks that are not the armed one are dropped.
    pub fn tick(&mut self, id: TickId, now: Instant) -> TickOutcome {
        match &self.active_timer {
            Some(timer) if timer.id == id => {}
            _ => {
                log::trace!("stale tick {:?}", id);
                return TickOutcome::Stale;
            }
        }

        // fired, rearmed below while running
        self.active_timer = None;
        self.run_timer(now);
        TickOutcome::Rendered
    }

    fn run_timer(&mut self, now: Instant) {
        let Some(elapsed) = self.elapsed(now) else {
            return;
        };
        self.display.set_timer_text(&format_elapsed(elapsed));

        if self.state().is_running() {
            self.arm_timer();
        }
    }

    fn arm_timer(&mut self) {
        debug_assert!(self.active_timer.is_none(), "a tick is already armed");
        let id = self.tick_ids.next_id();
        let handle = self.scheduler.schedule(id, self.config.tick_interval);
        self.active_timer = Some(ActiveTimer { id, handle });
    }

    /// Handles a click on the panel at `index`.
    pub fn click(&mut self, index: PanelIndex, now: Instant) -> Result<ClickOutcome> {
        let expected = self.expected_number;
        let panel = self.board.panel_mut(index)?;

        if !panel.check(expected, &mut self.display) {
            log::trace!("ignored click on panel {} (expected {:?})", index, expected);
            return Ok(ClickOutcome::NoChange);
        }

        if self.advance_expected_number() < TERMINAL_LABEL {
            return Ok(ClickOutcome::Accepted);
        }

        self.round_finished_at = Some(now);
        self.stop_timer();
        if let Some(final_time) = self.final_time() {
            log::info!(
                "round {} complete in {}",
                self.round,
                format_elapsed(final_time)
            );
        }
        Ok(ClickOutcome::Completed)
    }

    /// Moves on to the next label and returns it.
    fn advance_expected_number(&mut self) -> Label {
        let next = self.expected_number.map_or(0, |expected| expected + 1);
        self.expected_number = Some(next);
        next
    }

    /// Cancels the armed tick. Calling it with nothing armed does nothing.
    pub fn stop_timer(&mut self) {
        if let Some(timer) = self.active_timer.take() {
            log::trace!("cancel tick {:?}", timer.id);
            self.scheduler.cancel(timer.handle);
        }
    }
}
