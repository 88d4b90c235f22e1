use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::*;

/// Names the single slot a record is stored under.
pub trait StorageKey {
    const KEY: &'static str;
}

/// Key-value backend for saved games.
pub trait SaveStore {
    type Error: core::error::Error + 'static;

    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: String) -> core::result::Result<(), Self::Error>;
}

/// Everything needed to resume a game.
///
/// Stored as `{board, gameStatus, minesRemaining, difficulty, customConfig?, timeElapsed}`,
/// where `board` is `[row][column]`, `difficulty` is a preset name or `"custom"`, and
/// `customConfig` is only written for custom boards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SavedRecord", try_from = "SavedRecord")]
pub struct SavedGame {
    pub board: Board,
    pub game_status: GameStatus,
    pub mines_remaining: i32,
    pub difficulty: Difficulty,
    pub time_elapsed: u32,
}

impl StorageKey for SavedGame {
    const KEY: &'static str = "sweeper:game";
}

/// Wire layout of [`SavedGame`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavedRecord {
    board: Board,
    game_status: GameStatus,
    mines_remaining: i32,
    difficulty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_config: Option<BoardConfig>,
    time_elapsed: u32,
}

impl From<SavedGame> for SavedRecord {
    fn from(saved: SavedGame) -> Self {
        let custom_config = match saved.difficulty {
            Difficulty::Custom(config) => Some(config),
            _ => None,
        };
        Self {
            board: saved.board,
            game_status: saved.game_status,
            mines_remaining: saved.mines_remaining,
            difficulty: saved.difficulty.name().to_owned(),
            custom_config,
            time_elapsed: saved.time_elapsed,
        }
    }
}

impl TryFrom<SavedRecord> for SavedGame {
    type Error = RecordError;

    fn try_from(record: SavedRecord) -> core::result::Result<Self, Self::Error> {
        let difficulty = if record.difficulty.eq_ignore_ascii_case(Difficulty::CUSTOM) {
            Difficulty::Custom(record.custom_config.ok_or(RecordError::MissingCustomConfig)?)
        } else {
            record.difficulty.parse::<Difficulty>()?
        };

        let expected = difficulty.config().size();
        if record.board.size() != expected {
            return Err(RecordError::BoardSize {
                found: record.board.size(),
                expected,
            });
        }

        Ok(Self {
            board: record.board,
            game_status: record.game_status,
            mines_remaining: record.mines_remaining,
            difficulty,
            time_elapsed: record.time_elapsed,
        })
    }
}

impl SavedGame {
    /// Decodes a record, rejecting JSON that does not describe a consistent game.
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw)
            .inspect_err(|err| log::warn!("Ignoring malformed saved game: {}", err))
            .ok()
    }

    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Game {
    pub fn snapshot(&self) -> SavedGame {
        SavedGame {
            board: self.board().clone(),
            game_status: self.status(),
            mines_remaining: self.mines_remaining(),
            difficulty: self.difficulty(),
            time_elapsed: self.time_elapsed(),
        }
    }

    pub fn save<S: SaveStore>(
        &self,
        store: &mut S,
    ) -> core::result::Result<(), SaveError<S::Error>> {
        let raw = self.snapshot().encode()?;
        store
            .write(SavedGame::KEY, raw)
            .map_err(SaveError::Store)?;
        log::debug!("Saved game under {}", SavedGame::KEY);
        Ok(())
    }

    /// Loads the saved game if there is a usable one. Returns whether anything was restored;
    /// a missing or malformed record leaves the game untouched.
    pub fn load(&mut self, store: &impl SaveStore) -> bool {
        let Some(saved) = store.read(SavedGame::KEY).as_deref().and_then(SavedGame::decode) else {
            return false;
        };

        self.restore(saved);
        log::debug!("Loaded {:?} game, {}", self.status(), self.difficulty());
        true
    }
}

/// In-memory store, for tests and front ends without persistence.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    type Error = core::convert::Infallible;

    fn read(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: String) -> core::result::Result<(), Self::Error> {
        self.slots.insert(key.to_owned(), value);
        Ok(())
    }
}
