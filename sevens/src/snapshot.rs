use serde::{Deserialize, Serialize};

use crate::*;

/// Render-ready view of one match, rebuilt in full after every intent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub winner: Option<Seat>,
    pub turn: Seat,
    pub active_suit: Suit,
    pub pending_wild: bool,
    pub deck_len: usize,
    pub discard_top: Option<Card>,
    pub player_hand: Vec<Card>,
    pub opponent_hand: Vec<Card>,
}

impl Snapshot {
    pub fn from_game(game: &Game) -> Self {
        Self {
            phase: game.phase(),
            winner: game.winner(),
            turn: game.turn(),
            active_suit: game.active_suit(),
            pending_wild: game.pending_wild(),
            deck_len: game.deck_len(),
            discard_top: game.discard_top(),
            player_hand: game.hand(Seat::Player).to_vec(),
            opponent_hand: game.hand(Seat::Opponent).to_vec(),
        }
    }
}
