use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sweeper_core::{BoardConfig, CellCount, Coord, Difficulty, Game};

mod command;
mod render;
mod session;
mod store;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Starting difficulty: beginner, intermediate or expert
    #[arg(short, long, default_value = "beginner")]
    difficulty: Difficulty,

    /// Rows of a custom board, replaces the difficulty
    #[arg(long, requires_all = ["columns", "mines"])]
    rows: Option<Coord>,

    /// Columns of a custom board
    #[arg(long, requires_all = ["rows", "mines"])]
    columns: Option<Coord>,

    /// Mines on a custom board
    #[arg(long, requires_all = ["rows", "columns"])]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory holding the saved game
    #[arg(long, default_value = ".")]
    save_dir: PathBuf,
}

impl Args {
    fn starting_difficulty(&self) -> anyhow::Result<Difficulty> {
        match (self.rows, self.columns, self.mines) {
            (Some(rows), Some(columns), Some(mines)) => {
                let config = BoardConfig::new(rows, columns, mines)
                    .validate()
                    .context("Invalid custom board")?;
                Ok(Difficulty::Custom(config))
            }
            _ => Ok(self.difficulty),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("seed: {:?}", args.seed);

    let difficulty = args.starting_difficulty()?;
    let game = match args.seed {
        Some(seed) => Game::new(difficulty, seed),
        None => Game::from_entropy(difficulty),
    };

    let store = store::FileStore::new(&args.save_dir);
    log::debug!("Saving to {}", store.dir().display());

    let mut session = session::Session::new(game, store);
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn custom_flags_override_difficulty() {
        let args = Args::try_parse_from([
            "sweeper", "-d", "expert", "--rows", "5", "--columns", "6", "--mines", "7",
        ])
        .unwrap();

        assert_eq!(
            args.starting_difficulty().unwrap(),
            Difficulty::Custom(BoardConfig::new(5, 6, 7))
        );
    }

    #[test]
    fn custom_flags_are_validated() {
        let args =
            Args::try_parse_from(["sweeper", "--rows", "3", "--columns", "3", "--mines", "3"])
                .unwrap();

        assert!(args.starting_difficulty().is_err());
    }

    #[test]
    fn partial_custom_flags_are_rejected() {
        assert!(Args::try_parse_from(["sweeper", "--rows", "5"]).is_err());
    }

    #[test]
    fn difficulty_defaults_to_beginner() {
        let args = Args::try_parse_from(["sweeper"]).unwrap();

        assert_eq!(args.starting_difficulty().unwrap(), Difficulty::Beginner);
    }
}
