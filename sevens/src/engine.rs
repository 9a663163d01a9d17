use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Cards held by one side, kept in dealt/drawn order.
type Hand = SmallVec<[Card; 16]>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    Player,
    Opponent,
}

impl Seat {
    pub const fn other(self) -> Self {
        match self {
            Seat::Player => Seat::Opponent,
            Seat::Opponent => Seat::Player,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Over,
}

impl Phase {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over)
    }
}

/// One Crazy-Sevens match, from the deal to an emptied hand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    deck: Vec<Card>,
    hands: [Hand; 2],
    discard: Vec<Card>,
    active_suit: Suit,
    turn: Seat,
    phase: Phase,
    winner: Option<Seat>,
    pending_wild: bool,
}

impl Game {
    /// Shuffles a fresh deck, deals eight cards to each side and flips the
    /// starter.
    pub fn deal(shuffler: &mut impl DeckShuffler) -> Self {
        let mut deck = full_deck();
        shuffler.shuffle(&mut deck);

        let mut hands = [Hand::new(), Hand::new()];
        for hand in &mut hands {
            hand.extend(deck.drain(..HAND_SIZE));
        }

        let mut starter = deck.remove(0);
        if starter.is_wild() {
            // a match never opens on a wild face-up
            if let Some(swap) = deck.iter().position(|card| !card.is_wild()) {
                std::mem::swap(&mut starter, &mut deck[swap]);
            } else {
                log::warn!("no non-wild left to swap in, starting on a wild");
            }
        }
        log::debug!("dealt, starter {:?}", starter);

        Self {
            deck,
            hands,
            discard: vec![starter],
            active_suit: starter.suit,
            turn: Seat::Player,
            phase: Phase::Playing,
            winner: None,
            pending_wild: false,
        }
    }

    /// Assembles a match mid-flight without checking the card partition;
    /// callers own the integrity of what they pass.
    pub fn from_parts_unchecked(
        deck: Vec<Card>,
        player: Vec<Card>,
        opponent: Vec<Card>,
        discard: Vec<Card>,
        active_suit: Suit,
        turn: Seat,
    ) -> Self {
        Self {
            deck,
            hands: [Hand::from_vec(player), Hand::from_vec(opponent)],
            discard,
            active_suit,
            turn,
            phase: Phase::Playing,
            winner: None,
            pending_wild: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn turn(&self) -> Seat {
        self.turn
    }

    pub fn active_suit(&self) -> Suit {
        self.active_suit
    }

    /// True while a wild sits on the pile with its suit not yet declared.
    pub fn pending_wild(&self) -> bool {
        self.pending_wild
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    pub fn discard_top(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// A card may land on the pile when it is wild, follows the active suit,
    /// or matches the top card's rank.
    pub fn is_playable(&self, card: Card) -> bool {
        card.is_wild()
            || card.suit == self.active_suit
            || self.discard_top().is_some_and(|top| top.rank == card.rank)
    }

    /// Plays `card` from `seat`'s hand onto the pile.
    ///
    /// Out-of-turn, mid-wild and illegal plays are rejected without any
    /// state change.
    pub fn play(
        &mut self,
        seat: Seat,
        card: Card,
        chosen_suit: Option<Suit>,
    ) -> Result<PlayOutcome> {
        self.check_playing()?;
        if seat != self.turn || self.pending_wild {
            return Ok(PlayOutcome::Rejected);
        }
        let Some(held) = self.hands[seat.index()].iter().position(|&c| c == card) else {
            return Ok(PlayOutcome::Rejected);
        };
        if !self.is_playable(card) {
            log::trace!("{:?} tried a dead card {:?}", seat, card);
            return Ok(PlayOutcome::Rejected);
        }

        self.hands[seat.index()].remove(held);
        self.discard.push(card);

        if self.hands[seat.index()].is_empty() {
            self.phase = Phase::Over;
            self.winner = Some(seat);
            log::debug!("{:?} went out on {:?}", seat, card);
            return Ok(PlayOutcome::Won);
        }

        if card.is_wild() {
            if let Some(suit) = chosen_suit {
                self.active_suit = suit;
                self.turn = seat.other();
                Ok(PlayOutcome::Played)
            } else {
                self.pending_wild = true;
                Ok(PlayOutcome::AwaitingSuit)
            }
        } else {
            self.active_suit = card.suit;
            self.turn = seat.other();
            Ok(PlayOutcome::Played)
        }
    }

    /// Declares the suit for a wild played without one, handing the turn
    /// over.
    pub fn resolve_suit(&mut self, suit: Suit) -> Result<ResolveOutcome> {
        self.check_playing()?;
        if !self.pending_wild {
            return Ok(ResolveOutcome::NoChange);
        }

        self.active_suit = suit;
        self.pending_wild = false;
        self.turn = self.turn.other();
        log::debug!("wild resolved to {:?}", suit);
        Ok(ResolveOutcome::SuitSet)
    }

    /// Draws the front deck card into `seat`'s hand; the turn is kept only
    /// when the drawn card is playable.
    pub fn draw(&mut self, seat: Seat) -> Result<DrawOutcome> {
        self.check_playing()?;
        if seat != self.turn || self.pending_wild {
            return Ok(DrawOutcome::Rejected);
        }
        if self.deck.is_empty() {
            log::trace!("deck dry, {:?} skips", seat);
            self.turn = seat.other();
            return Ok(DrawOutcome::Skipped);
        }

        let card = self.deck.remove(0);
        let playable = self.is_playable(card);
        self.hands[seat.index()].push(card);
        if playable {
            Ok(DrawOutcome::DrewPlayable)
        } else {
            self.turn = seat.other();
            Ok(DrawOutcome::DrewAndPassed)
        }
    }

    /// Confirms the deck, both hands and the pile still partition the full
    /// 52-card deck.
    pub fn integrity_check(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let piles = self
            .deck
            .iter()
            .chain(self.hands[0].iter())
            .chain(self.hands[1].iter())
            .chain(self.discard.iter());
        for &card in piles {
            if !seen.insert(card) {
                return Err(GameError::DuplicateCard);
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(GameError::CardCountMismatch {
                found: seen.len(),
                expected: DECK_SIZE,
            });
        }
        Ok(())
    }

    fn check_playing(&self) -> Result<()> {
        match self.phase {
            Phase::Playing => Ok(()),
            Phase::Over => Err(GameError::AlreadyEnded),
        }
    }
}
