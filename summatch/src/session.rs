use web_time::{Duration, Instant};

use crate::*;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Owns at most one running game plus the wall-clock side of its countdown.
///
/// Game state stays purely logical; the session converts elapsed time into
/// discrete [`Game::tick`] calls whenever the host pumps [`Session::poll`].
#[derive(Clone, Debug)]
pub struct Session {
    game: Option<Game>,
    values: RandomValueSource,
    deadline: Option<Instant>,
    pause_left: Option<Duration>,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self {
            game: None,
            values: RandomValueSource::new(seed),
            deadline: None,
            pause_left: None,
        }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.game.as_ref().map(Snapshot::from_game)
    }

    /// Starts a fresh game, replacing any running one and its timers.
    pub fn start(&mut self, mode: Mode, now: Instant) {
        self.game = Some(Game::new(mode, &mut self.values));
        self.deadline = matches!(mode, Mode::Timed).then(|| now + TICK_INTERVAL);
        self.pause_left = None;
    }

    /// Returns to the not-started state, cancelling all timers.
    pub fn restart(&mut self) {
        self.game = None;
        self.deadline = None;
        self.pause_left = None;
    }

    pub fn toggle(&mut self, id: CellId) -> Result<ToggleOutcome> {
        let game = self.game.as_mut().ok_or(GameError::NotStarted)?;
        game.toggle(id, &mut self.values)
    }

    /// Pauses the game, parking the unelapsed part of the current tick.
    pub fn pause(&mut self, now: Instant) -> Result<PauseOutcome> {
        let game = self.game.as_mut().ok_or(GameError::NotStarted)?;
        let outcome = game.pause()?;
        if outcome.has_update() {
            if let Some(due) = self.deadline.take() {
                self.pause_left = Some(due.saturating_duration_since(now));
            }
        }
        Ok(outcome)
    }

    /// Resumes a paused game, re-arming the countdown where it stopped.
    pub fn resume(&mut self, now: Instant) -> Result<PauseOutcome> {
        let game = self.game.as_mut().ok_or(GameError::NotStarted)?;
        let outcome = game.resume()?;
        if outcome.has_update() && matches!(game.mode(), Mode::Timed) {
            let left = self.pause_left.take().unwrap_or(TICK_INTERVAL);
            self.deadline = Some(now + left);
        }
        Ok(outcome)
    }

    /// Fires every countdown tick that has come due, one whole tick per
    /// elapsed second.
    ///
    /// Returns whether anything changed, so hosts know to redraw.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut updated = false;
        while let Some(due) = self.deadline {
            if now < due {
                break;
            }
            let Some(game) = self.game.as_mut() else {
                self.deadline = None;
                break;
            };
            let Ok(outcome) = game.tick(&mut self.values) else {
                self.deadline = None;
                break;
            };
            updated |= outcome.has_update();
            if game.is_over() {
                self.deadline = None;
            } else {
                self.deadline = Some(due + TICK_INTERVAL);
            }
        }
        updated
    }
}
