use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Idle -> Playing
/// - Idle -> Won (a board without mines)
/// - Playing -> Won
/// - Playing -> Lost
///
/// Only a reset leaves `Won` or `Lost`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    Idle,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// Result of a click, `board_changed` is false when the click was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    pub board_changed: bool,
    pub status: GameStatus,
}

/// Result of a flag toggle, `board_changed` is false when the toggle was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FlagOutcome {
    pub board_changed: bool,
    pub mines_remaining: i32,
}

/// One game from the empty board to a win or a loss, plus the difficulty used for the next one.
///
/// The board is only reachable through `&Board`; every change goes through the handlers below.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    status: GameStatus,
    mines_remaining: i32,
    is_first_click: bool,
    difficulty: Difficulty,
    time_elapsed: u32,
    rng: SmallRng,
}

impl Game {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        let config = difficulty.config();
        Self {
            board: Board::new(config),
            status: GameStatus::Idle,
            mines_remaining: config.mines.into(),
            is_first_click: true,
            difficulty,
            time_elapsed: 0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy(difficulty: Difficulty) -> Self {
        Self::new(difficulty, rand::rng().random())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Mines minus flags. Goes negative when the player places more flags than there are mines.
    pub fn mines_remaining(&self) -> i32 {
        self.mines_remaining
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> BoardConfig {
        self.difficulty.config()
    }

    pub fn is_first_click(&self) -> bool {
        self.is_first_click
    }

    /// Whole seconds spent in `Playing`.
    pub fn time_elapsed(&self) -> u32 {
        self.time_elapsed
    }

    /// Advances the clock by one second while the game is in progress.
    pub fn tick(&mut self) -> u32 {
        if matches!(self.status, GameStatus::Playing) {
            self.time_elapsed = self.time_elapsed.saturating_add(1);
        }
        self.time_elapsed
    }

    /// Throws the board away and starts over with the current difficulty.
    pub fn reset_game(&mut self) {
        let config = self.config();
        self.board = Board::new(config);
        self.status = GameStatus::Idle;
        self.mines_remaining = config.mines.into();
        self.is_first_click = true;
        self.time_elapsed = 0;
        log::debug!("New game, {}", self.difficulty);
    }

    /// Switches difficulty and resets. Custom configurations are expected to be validated by the
    /// caller with [`BoardConfig::validate`].
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset_game();
    }

    pub fn handle_cell_click(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.status.is_finished() || !self.board[coords].is_hidden() {
            return Ok(self.click_outcome(false));
        }

        if self.is_first_click {
            self.start(coords);
        }

        let outcome = if self.board[coords].is_mine {
            self.board.reveal_mine(coords)?
        } else {
            self.board.reveal_cell(coords)?
        };

        match outcome {
            RevealOutcome::HitMine => self.finish(GameStatus::Lost),
            _ if self.board.check_win_condition() => self.finish(GameStatus::Won),
            _ => {}
        }

        Ok(self.click_outcome(outcome.has_update()))
    }

    pub fn handle_cell_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;

        // allowed in every status, the status itself never changes here
        let changed = self.board.toggle_flag(coords)?.has_update();
        if changed {
            if self.board[coords].is_flagged {
                self.mines_remaining -= 1;
            } else {
                self.mines_remaining += 1;
            }
        }

        Ok(FlagOutcome {
            board_changed: changed,
            mines_remaining: self.mines_remaining,
        })
    }

    /// Lays the mines around the first click and enters `Playing`.
    fn start(&mut self, coords: Coord2) {
        let config = self.config();
        let placer = RandomMinePlacer::new(self.rng.random(), coords);
        self.board = placer.place_mines(&self.board, config);
        self.is_first_click = false;
        self.status = GameStatus::Playing;
        log::debug!("Game started at {:?}", coords);
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        log::info!(
            "Game {:?} after {} seconds",
            status,
            self.time_elapsed
        );
    }

    fn click_outcome(&self, board_changed: bool) -> ClickOutcome {
        ClickOutcome {
            board_changed,
            status: self.status,
        }
    }

    /// Restores a snapshot verbatim. The next click only places mines if the snapshot was idle.
    pub(crate) fn restore(&mut self, saved: SavedGame) {
        self.board = saved.board;
        self.status = saved.game_status;
        self.mines_remaining = saved.mines_remaining;
        self.difficulty = saved.difficulty;
        self.time_elapsed = saved.time_elapsed;
        self.is_first_click = saved.game_status.is_idle();
    }
}

/// Message to announce a status change, empty when there is nothing to announce.
pub fn status_message(current: GameStatus, previous: GameStatus, elapsed: u32) -> String {
    use GameStatus::*;

    if current == previous {
        return String::new();
    }

    match (previous, current) {
        (Idle, Playing) => "Game started, good luck!".to_owned(),
        (_, Won) => format!("You won in {elapsed} seconds!"),
        (_, Lost) => "Boom! You hit a mine.".to_owned(),
        _ => String::new(),
    }
}
