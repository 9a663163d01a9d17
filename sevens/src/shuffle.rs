use rand::prelude::*;

use crate::*;

/// Deck randomization seam, injectable so tests can fix the order.
pub trait DeckShuffler {
    fn shuffle(&mut self, deck: &mut [Card]);
}

/// Uniform shuffles from a seeded generator, so equal seeds replay equal
/// deals.
#[derive(Clone, Debug)]
pub struct RandomShuffler {
    rng: SmallRng,
}

impl RandomShuffler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl DeckShuffler for RandomShuffler {
    fn shuffle(&mut self, deck: &mut [Card]) {
        deck.shuffle(&mut self.rng);
    }
}
