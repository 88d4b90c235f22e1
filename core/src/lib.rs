use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use difficulty::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use reveal::*;
pub use save::*;
pub use types::*;

mod board;
mod cell;
mod difficulty;
mod error;
mod game;
mod generator;
mod reveal;
mod save;
mod types;

/// Number of cells in the safe zone around the first click when it is not clipped by an edge.
pub const SAFE_ZONE_CELLS: CellCount = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub columns: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new(rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            columns,
            mines,
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    /// Board bounds as `(columns, rows)`, matching `(x, y)` coordinates.
    pub const fn size(&self) -> Coord2 {
        (self.columns, self.rows)
    }

    /// Checks `0 < mines <= rows * columns - 9`, the condition for a mine-free zone around any
    /// first click. Presets always pass; user supplied configurations should be checked before
    /// starting a game with them.
    pub fn validate(&self) -> Result<Self> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.mines == 0 {
            return Err(GameError::NoMines);
        }
        if self.mines > self.total_cells().saturating_sub(SAFE_ZONE_CELLS) {
            return Err(GameError::TooManyMines);
        }
        Ok(*self)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_presets() {
        for difficulty in Difficulty::PRESETS {
            assert!(difficulty.config().validate().is_ok());
        }
    }

    #[test]
    fn validate_rejects_bad_configs() {
        assert_eq!(
            BoardConfig::new(0, 5, 1).validate(),
            Err(GameError::InvalidDimensions)
        );
        assert_eq!(BoardConfig::new(5, 5, 0).validate(), Err(GameError::NoMines));
        assert_eq!(
            BoardConfig::new(5, 5, 17).validate(),
            Err(GameError::TooManyMines)
        );
        assert_eq!(
            BoardConfig::new(3, 3, 1).validate(),
            Err(GameError::TooManyMines)
        );
    }

    #[test]
    fn validate_accepts_densest_config() {
        let config = BoardConfig::new(5, 5, 16);
        assert_eq!(config.validate(), Ok(config));
    }
}
