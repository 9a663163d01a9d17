use web_time::{Duration, Instant};

use crate::opponent::OpponentMove;
use crate::*;

/// How long the opponent pretends to think before its move lands.
pub const THINKING_DELAY: Duration = Duration::from_millis(1500);

/// Owns one match plus the opponent timer and win celebration around it.
///
/// The host pumps `poll` with the current time; the opponent's deadline
/// lives here as data, so a superseded match can never be mutated by a
/// stale timer.
pub struct Session {
    game: Option<Game>,
    shuffler: RandomShuffler,
    opponent_due: Option<Instant>,
    celebration: Option<Box<dyn FnMut()>>,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self {
            game: None,
            shuffler: RandomShuffler::new(seed),
            opponent_due: None,
            celebration: None,
        }
    }

    /// Registers a host callback fired once when the player goes out.
    pub fn with_celebration(seed: u64, hook: impl FnMut() + 'static) -> Self {
        let mut session = Self::new(seed);
        session.celebration = Some(Box::new(hook));
        session
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.game.as_ref().map(Snapshot::from_game)
    }

    /// Deals a fresh match, dropping any match and timer already running.
    pub fn deal(&mut self, now: Instant) {
        self.game = Some(Game::deal(&mut self.shuffler));
        self.opponent_due = None;
        self.rearm(now);
    }

    pub fn restart(&mut self) {
        self.game = None;
        self.opponent_due = None;
    }

    /// Plays `card` for the player, `chosen_suit` riding along when the card
    /// is wild.
    pub fn play(
        &mut self,
        card: Card,
        chosen_suit: Option<Suit>,
        now: Instant,
    ) -> Result<PlayOutcome> {
        let game = self.game.as_mut().ok_or(GameError::NotStarted)?;
        let outcome = game.play(Seat::Player, card, chosen_suit)?;
        if outcome == PlayOutcome::Won {
            self.celebrate();
        }
        self.rearm(now);
        Ok(outcome)
    }

    pub fn draw(&mut self, now: Instant) -> Result<DrawOutcome> {
        let game = self.game.as_mut().ok_or(GameError::NotStarted)?;
        let outcome = game.draw(Seat::Player)?;
        self.rearm(now);
        Ok(outcome)
    }

    pub fn resolve_suit(&mut self, suit: Suit, now: Instant) -> Result<ResolveOutcome> {
        let game = self.game.as_mut().ok_or(GameError::NotStarted)?;
        let outcome = game.resolve_suit(suit)?;
        self.rearm(now);
        Ok(outcome)
    }

    /// Fires the opponent's pending move once its thinking delay has
    /// elapsed. Returns whether anything changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.opponent_due else {
            return false;
        };
        if now < due {
            return false;
        }

        self.opponent_due = None;
        let updated = self.opponent_move();
        // a retained turn (playable draw) thinks again from scratch
        self.rearm(now);
        updated
    }

    fn opponent_move(&mut self) -> bool {
        let Some(game) = self.game.as_mut() else {
            return false;
        };
        if game.is_over() || game.turn() != Seat::Opponent || game.pending_wild() {
            return false;
        }

        let result = match opponent::decide(game) {
            OpponentMove::Play(card) => {
                game.play(Seat::Opponent, card, None).map(PlayOutcome::has_update)
            }
            OpponentMove::PlayWild(card, suit) => {
                game.play(Seat::Opponent, card, Some(suit)).map(PlayOutcome::has_update)
            }
            OpponentMove::Draw => game.draw(Seat::Opponent).map(DrawOutcome::has_update),
        };
        result.unwrap_or(false)
    }

    fn rearm(&mut self, now: Instant) {
        let wants_timer = matches!(
            &self.game,
            Some(game) if !game.is_over() && game.turn() == Seat::Opponent && !game.pending_wild()
        );
        match (wants_timer, self.opponent_due) {
            (true, None) => self.opponent_due = Some(now + THINKING_DELAY),
            (false, Some(_)) => self.opponent_due = None,
            _ => {}
        }
    }

    fn celebrate(&mut self) {
        if let Some(hook) = self.celebration.as_mut() {
            hook();
        }
    }
}
