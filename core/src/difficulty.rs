use core::fmt;
use core::str::FromStr;

use crate::*;

/// Saved games store this as [`Difficulty::name`] plus a separate `customConfig`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
    Custom(BoardConfig),
}

impl Difficulty {
    pub const PRESETS: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    /// Name shared by every custom configuration.
    pub const CUSTOM: &'static str = "custom";

    pub const fn config(self) -> BoardConfig {
        match self {
            Self::Beginner => BoardConfig::new(9, 9, 10),
            Self::Intermediate => BoardConfig::new(16, 16, 40),
            Self::Expert => BoardConfig::new(16, 30, 99),
            Self::Custom(config) => config,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
            Self::Custom(_) => Self::CUSTOM,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Beginner
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config();
        write!(
            f,
            "{} ({}x{}, {} mines)",
            self.name(),
            config.columns,
            config.rows,
            config.mines
        )
    }
}

/// Parses preset names only, custom boards carry their own dimensions.
impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Self::PRESETS
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDifficulty(s.to_owned()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown difficulty {0:?}, expected beginner, intermediate or expert")]
pub struct UnknownDifficulty(pub String);
