use rand::prelude::*;

use super::*;

/// Uniform draws from a seeded generator, so equal seeds replay equal games.
#[derive(Clone, Debug)]
pub struct RandomValueSource {
    rng: SmallRng,
}

impl RandomValueSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl ValueSource for RandomValueSource {
    fn cell_value(&mut self) -> CellValue {
        self.rng.random_range(MIN_CELL_VALUE..=MAX_CELL_VALUE)
    }

    fn target(&mut self) -> Sum {
        self.rng.random_range(MIN_TARGET..=MAX_TARGET)
    }
}
