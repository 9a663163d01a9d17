use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

/// One Sum-Match game, from the first spawned rows to overflow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    mode: Mode,
    board: Board,
    target: Sum,
    selection: HashSet<CellId>,
    score: Score,
    level: Level,
    status: GameStatus,
    countdown: Option<u32>,
}

impl Game {
    pub fn new(mode: Mode, values: &mut impl ValueSource) -> Self {
        let mut board = Board::new();
        for _ in 0..INITIAL_ROWS {
            board.push_row(std::array::from_fn(|_| values.cell_value()));
        }
        let target = values.target();
        log::debug!("new {:?} game, target {}", mode, target);

        Self {
            mode,
            board,
            target,
            selection: HashSet::new(),
            score: 0,
            level: 1,
            status: GameStatus::Playing,
            countdown: matches!(mode, Mode::Timed).then_some(BASE_COUNTDOWN_SECS),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn target(&self) -> Sum {
        self.target
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Seconds left until the next automatic row spawn; `None` in classic
    /// mode.
    pub fn countdown(&self) -> Option<u32> {
        self.countdown
    }

    pub fn is_selected(&self, id: CellId) -> bool {
        self.selection.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn selected_ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.selection.iter().copied()
    }

    pub fn selection_sum(&self) -> Sum {
        self.selection
            .iter()
            .filter_map(|&id| self.board.value_of(id))
            .map(Sum::from)
            .sum()
    }

    /// Flips `id` in or out of the selection and settles the new sum against
    /// the target.
    pub fn toggle(&mut self, id: CellId, values: &mut impl ValueSource) -> Result<ToggleOutcome> {
        self.check_playing()?;
        if !self.board.contains(id) {
            return Err(GameError::UnknownCell);
        }

        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }

        let sum = self.selection_sum();
        if sum == self.target {
            Ok(self.apply_match(values))
        } else if sum > self.target {
            log::trace!("sum {} overshot target {}, selection discarded", sum, self.target);
            self.selection.clear();
            Ok(ToggleOutcome::Overshot)
        } else {
            Ok(ToggleOutcome::Accumulating)
        }
    }

    fn apply_match(&mut self, values: &mut impl ValueSource) -> ToggleOutcome {
        let cleared = self.selection.len();
        let points = (cleared as Score) * 10 * self.level;
        let score_before = self.score;
        self.score = self.score.saturating_add(points);
        self.board.remove_all(&self.selection);
        self.selection.clear();
        self.target = values.target();
        log::debug!(
            "matched {} cells for {} points, next target {}",
            cleared,
            points,
            self.target
        );

        match self.mode {
            Mode::Classic => {
                self.spawn_row_unchecked(values);
            }
            Mode::Timed => {
                self.countdown = Some(countdown_secs(self.level));
            }
        }

        // compares the score from before this match, so levelling lags the
        // score by one match
        if score_before > self.level.saturating_mul(500) {
            self.level += 1;
            log::debug!("level up to {}", self.level);
        }

        ToggleOutcome::Matched { cleared, points }
    }

    /// Spawns a bottom row right away, untied to the countdown.
    pub fn spawn_row(&mut self, values: &mut impl ValueSource) -> Result<SpawnOutcome> {
        self.check_playing()?;
        Ok(self.spawn_row_unchecked(values))
    }

    fn spawn_row_unchecked(&mut self, values: &mut impl ValueSource) -> SpawnOutcome {
        let overflowed = self
            .board
            .push_row(std::array::from_fn(|_| values.cell_value()));
        if overflowed {
            self.status = GameStatus::GameOver;
            log::debug!(
                "board overflowed at level {} with score {}, game over",
                self.level,
                self.score
            );
            SpawnOutcome::Overflowed
        } else {
            SpawnOutcome::Spawned
        }
    }

    /// Advances the timed countdown by one second, spawning a row when it
    /// runs out.
    pub fn tick(&mut self, values: &mut impl ValueSource) -> Result<TickOutcome> {
        self.check_playing()?;
        let Some(countdown) = self.countdown.as_mut() else {
            return Ok(TickOutcome::NoChange);
        };

        *countdown -= 1;
        if *countdown > 0 {
            return Ok(TickOutcome::CountedDown);
        }

        let outcome = self.spawn_row_unchecked(values);
        self.countdown = Some(countdown_secs(self.level));
        Ok(match outcome {
            SpawnOutcome::Spawned => TickOutcome::RowSpawned,
            SpawnOutcome::Overflowed => TickOutcome::Overflowed,
        })
    }

    pub fn pause(&mut self) -> Result<PauseOutcome> {
        match self.status {
            GameStatus::Playing => {
                self.status = GameStatus::Paused;
                Ok(PauseOutcome::Changed)
            }
            GameStatus::Paused => Ok(PauseOutcome::NoChange),
            GameStatus::GameOver => Err(GameError::AlreadyEnded),
        }
    }

    pub fn resume(&mut self) -> Result<PauseOutcome> {
        match self.status {
            GameStatus::Paused => {
                self.status = GameStatus::Playing;
                Ok(PauseOutcome::Changed)
            }
            GameStatus::Playing => Ok(PauseOutcome::NoChange),
            GameStatus::GameOver => Err(GameError::AlreadyEnded),
        }
    }

    fn check_playing(&self) -> Result<()> {
        match self.status {
            GameStatus::Playing => Ok(()),
            GameStatus::Paused => Err(GameError::Paused),
            GameStatus::GameOver => Err(GameError::AlreadyEnded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Scripted {
        cells: VecDeque<CellValue>,
        targets: VecDeque<Sum>,
    }

    impl Scripted {
        fn new(cells: &[CellValue], targets: &[Sum]) -> Self {
            Self {
                cells: cells.iter().copied().collect(),
                targets: targets.iter().copied().collect(),
            }
        }
    }

    impl ValueSource for Scripted {
        fn cell_value(&mut self) -> CellValue {
            self.cells.pop_front().unwrap_or(MAX_CELL_VALUE)
        }

        fn target(&mut self) -> Sum {
            self.targets.pop_front().unwrap_or(MIN_TARGET)
        }
    }

    struct Flat {
        cell: CellValue,
        target: Sum,
    }

    impl ValueSource for Flat {
        fn cell_value(&mut self) -> CellValue {
            self.cell
        }

        fn target(&mut self) -> Sum {
            self.target
        }
    }

    // cell ids are handed out in draw order, so id n carries the nth
    // scripted value
    fn classic_game(cells: &[CellValue], targets: &[Sum]) -> (Game, Scripted) {
        let mut values = Scripted::new(cells, targets);
        let game = Game::new(Mode::Classic, &mut values);
        (game, values)
    }

    #[test]
    fn exact_match_clears_cells_and_scores_level_scaled_points() {
        let (mut game, mut values) = classic_game(&[3, 5, 2], &[10, 17]);

        assert_eq!(game.toggle(0, &mut values).unwrap(), ToggleOutcome::Accumulating);
        assert_eq!(game.toggle(1, &mut values).unwrap(), ToggleOutcome::Accumulating);
        let outcome = game.toggle(2, &mut values).unwrap();

        assert_eq!(outcome, ToggleOutcome::Matched { cleared: 3, points: 30 });
        assert_eq!(game.score(), 30);
        assert_eq!(game.target(), 17);
        assert_eq!(game.selected_count(), 0);
        // three cleared, six spawned by the classic follow-up row
        assert_eq!(game.board().len(), INITIAL_ROWS * BOARD_COLS + 3);
    }

    #[test]
    fn overshooting_the_target_discards_the_selection() {
        let (mut game, mut values) = classic_game(&[9, 9], &[10]);

        game.toggle(0, &mut values).unwrap();
        let outcome = game.toggle(1, &mut values).unwrap();

        assert_eq!(outcome, ToggleOutcome::Overshot);
        assert_eq!(game.selected_count(), 0);
        assert_eq!(game.score(), 0);
        assert_eq!(game.board().len(), INITIAL_ROWS * BOARD_COLS);
    }

    #[test]
    fn toggling_twice_deselects_and_lowers_the_sum() {
        let (mut game, mut values) = classic_game(&[3, 5], &[10]);

        game.toggle(0, &mut values).unwrap();
        game.toggle(1, &mut values).unwrap();
        assert_eq!(game.selection_sum(), 8);

        assert_eq!(game.toggle(1, &mut values).unwrap(), ToggleOutcome::Accumulating);
        assert_eq!(game.selection_sum(), 3);
        assert!(game.is_selected(0));
        assert!(!game.is_selected(1));
    }

    #[test]
    fn cleared_cells_cannot_be_selected_again() {
        let mut values = Flat { cell: 5, target: 10 };
        let mut game = Game::new(Mode::Timed, &mut values);

        game.toggle(0, &mut values).unwrap();
        assert!(game.toggle(1, &mut values).unwrap().matched());

        assert_eq!(game.toggle(0, &mut values), Err(GameError::UnknownCell));
    }

    #[test]
    fn toggling_an_unknown_cell_is_an_error() {
        let (mut game, mut values) = classic_game(&[], &[]);

        assert_eq!(game.toggle(9_999, &mut values), Err(GameError::UnknownCell));
    }

    fn match_all_cells(game: &mut Game, values: &mut impl ValueSource) {
        let ids: Vec<CellId> = game.board().iter().map(|(_, _, cell)| cell.id()).collect();
        let last = ids.len() - 1;
        for (i, id) in ids.into_iter().enumerate() {
            let outcome = game.toggle(id, values).unwrap();
            if i == last {
                assert!(outcome.matched());
            }
        }
    }

    fn refill(game: &mut Game, values: &mut impl ValueSource) {
        while game.board().len() < INITIAL_ROWS * BOARD_COLS {
            game.spawn_row(values).unwrap();
        }
    }

    #[test]
    fn levelling_lags_one_match_behind_the_score() {
        // every full-board match is worth 240 points at level 1
        let mut values = Flat { cell: 1, target: 24 };
        let mut game = Game::new(Mode::Classic, &mut values);

        match_all_cells(&mut game, &mut values);
        refill(&mut game, &mut values);
        match_all_cells(&mut game, &mut values);
        refill(&mut game, &mut values);
        match_all_cells(&mut game, &mut values);
        assert_eq!(game.score(), 720);
        // the level check saw the pre-match score of 480, so no level yet
        assert_eq!(game.level(), 1);

        refill(&mut game, &mut values);
        match_all_cells(&mut game, &mut values);
        assert_eq!(game.level(), 2);
        assert_eq!(game.score(), 960);

        // points now scale with the new level
        refill(&mut game, &mut values);
        match_all_cells(&mut game, &mut values);
        assert_eq!(game.score(), 960 + 480);
    }

    #[test]
    fn timed_match_resets_the_countdown_instead_of_spawning() {
        let mut values = Flat { cell: 5, target: 10 };
        let mut game = Game::new(Mode::Timed, &mut values);
        for _ in 0..3 {
            game.tick(&mut values).unwrap();
        }
        assert_eq!(game.countdown(), Some(BASE_COUNTDOWN_SECS - 3));

        game.toggle(0, &mut values).unwrap();
        assert!(game.toggle(1, &mut values).unwrap().matched());

        assert_eq!(game.countdown(), Some(BASE_COUNTDOWN_SECS));
        assert_eq!(game.board().len(), INITIAL_ROWS * BOARD_COLS - 2);
    }

    #[test]
    fn countdown_spawns_a_row_at_zero_and_rearms() {
        let mut values = Flat { cell: 2, target: 25 };
        let mut game = Game::new(Mode::Timed, &mut values);

        for _ in 0..BASE_COUNTDOWN_SECS - 1 {
            assert_eq!(game.tick(&mut values).unwrap(), TickOutcome::CountedDown);
        }

        assert_eq!(game.tick(&mut values).unwrap(), TickOutcome::RowSpawned);
        assert_eq!(game.countdown(), Some(countdown_secs(game.level())));
        assert_eq!(game.board().len(), (INITIAL_ROWS + 1) * BOARD_COLS);
    }

    #[test]
    fn classic_games_ignore_ticks() {
        let mut values = Flat { cell: 2, target: 25 };
        let mut game = Game::new(Mode::Classic, &mut values);

        assert_eq!(game.tick(&mut values).unwrap(), TickOutcome::NoChange);
        assert_eq!(game.countdown(), None);
    }

    #[test]
    fn overflow_ends_the_game_but_keeps_the_spawned_row() {
        let mut values = Flat { cell: 2, target: 25 };
        let mut game = Game::new(Mode::Classic, &mut values);

        for _ in 0..OVERFLOW_ROW as usize - INITIAL_ROWS {
            assert_eq!(game.spawn_row(&mut values).unwrap(), SpawnOutcome::Spawned);
        }
        assert_eq!(game.spawn_row(&mut values).unwrap(), SpawnOutcome::Overflowed);

        assert!(game.status().is_over());
        assert_eq!(game.board().len(), (OVERFLOW_ROW as usize + 1) * BOARD_COLS);
        assert_eq!(game.spawn_row(&mut values), Err(GameError::AlreadyEnded));
        assert_eq!(game.toggle(0, &mut values), Err(GameError::AlreadyEnded));
    }

    #[test]
    fn ticking_down_to_overflow_reports_it() {
        let mut values = Flat { cell: 2, target: 25 };
        let mut game = Game::new(Mode::Timed, &mut values);

        let mut last = TickOutcome::NoChange;
        while !game.is_over() {
            last = game.tick(&mut values).unwrap();
        }

        assert_eq!(last, TickOutcome::Overflowed);
        assert_eq!(game.board().tallest(), OVERFLOW_ROW as usize + 1);
    }

    #[test]
    fn paused_games_reject_moves_until_resumed() {
        let mut values = Flat { cell: 2, target: 25 };
        let mut game = Game::new(Mode::Timed, &mut values);

        assert_eq!(game.pause().unwrap(), PauseOutcome::Changed);
        assert_eq!(game.pause().unwrap(), PauseOutcome::NoChange);
        assert_eq!(game.toggle(0, &mut values), Err(GameError::Paused));
        assert_eq!(game.tick(&mut values), Err(GameError::Paused));

        assert_eq!(game.resume().unwrap(), PauseOutcome::Changed);
        assert_eq!(game.resume().unwrap(), PauseOutcome::NoChange);
        assert_eq!(game.toggle(0, &mut values).unwrap(), ToggleOutcome::Accumulating);
    }

    #[test]
    fn finished_games_cannot_pause_or_resume() {
        let mut values = Flat { cell: 2, target: 25 };
        let mut game = Game::new(Mode::Classic, &mut values);
        while !game.is_over() {
            game.spawn_row(&mut values).unwrap();
        }

        assert_eq!(game.pause(), Err(GameError::AlreadyEnded));
        assert_eq!(game.resume(), Err(GameError::AlreadyEnded));
    }
}
