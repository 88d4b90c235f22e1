use std::io::{BufRead, Write};
use std::time::Duration;

use sweeper_core::{Game, GameStatus, SaveStore, status_message};
use web_time::Instant;

use crate::command::{Command, HELP};
use crate::render;

/// Converts wall-clock time into whole-second ticks on the game.
#[derive(Debug)]
struct Clock {
    last: Instant,
}

impl Clock {
    fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Replays every full second since the previous call. The game ignores ticks unless a game
    /// is in progress, so idle time is dropped.
    fn catch_up(&mut self, game: &mut Game) {
        let whole_secs = self.last.elapsed().as_secs();
        for _ in 0..whole_secs {
            game.tick();
        }
        self.last += Duration::from_secs(whole_secs);
    }
}

pub(crate) enum Reply {
    Text(String),
    Quit,
}

/// Line-oriented front end: one command in, one screen out.
pub(crate) struct Session<S> {
    game: Game,
    store: S,
    clock: Clock,
}

impl<S: SaveStore> Session<S> {
    pub(crate) fn new(game: Game, store: S) -> Self {
        Self {
            game,
            store,
            clock: Clock::new(),
        }
    }

    pub(crate) fn screen(&self) -> String {
        format!(
            "{}\n{}",
            render::board(&self.game),
            render::status_line(&self.game)
        )
    }

    pub(crate) fn execute(&mut self, command: Command) -> Reply {
        self.clock.catch_up(&mut self.game);
        let previous = self.game.status();

        let note = match command {
            Command::Quit => return Reply::Quit,
            Command::Help => return Reply::Text(HELP.to_owned()),
            Command::Reveal(coords) => match self.game.handle_cell_click(coords) {
                Ok(outcome) if !outcome.board_changed => "Nothing to reveal there".to_owned(),
                Ok(_) => String::new(),
                Err(err) => err.to_string(),
            },
            Command::Flag(coords) => match self.game.handle_cell_flag(coords) {
                Ok(outcome) if !outcome.board_changed => "Cannot flag that cell".to_owned(),
                Ok(_) => String::new(),
                Err(err) => err.to_string(),
            },
            Command::New => {
                self.game.reset_game();
                "New game".to_owned()
            }
            Command::Difficulty(difficulty) => {
                self.game.set_difficulty(difficulty);
                format!("Switched to {difficulty}")
            }
            Command::Save => match self.game.save(&mut self.store) {
                Ok(()) => "Game saved".to_owned(),
                Err(err) => {
                    log::error!("Save failed: {}", err);
                    err.to_string()
                }
            },
            Command::Load => {
                if self.game.load(&self.store) {
                    // the restored clock resumes from now
                    self.clock = Clock::new();
                    "Game loaded".to_owned()
                } else {
                    "No saved game".to_owned()
                }
            }
        };

        // only moves can start or end a game, a load or reset restores a status silently
        let announcement = match command {
            Command::Reveal(_) | Command::Flag(_) => {
                status_message(self.game.status(), previous, self.game.time_elapsed())
            }
            _ => String::new(),
        };
        let mut text = self.screen();
        for line in [note, announcement] {
            if !line.is_empty() {
                text.push('\n');
                text.push_str(&line);
            }
        }
        Reply::Text(text)
    }

    /// Reads commands until `quit` or end of input.
    pub(crate) fn run(&mut self, input: impl BufRead, mut output: impl Write) -> std::io::Result<()> {
        writeln!(output, "{}\nType h for help.", self.screen())?;

        for line in input.lines() {
            let line = line?;
            let reply = match line.parse::<Command>() {
                Ok(command) => self.execute(command),
                Err(err) => Reply::Text(err.to_string()),
            };

            match reply {
                Reply::Text(text) => writeln!(output, "{text}")?,
                Reply::Quit => break,
            }
            output.flush()?;
        }

        if self.game.status() == GameStatus::Playing {
            log::info!("Left a game in progress after {}s", self.game.time_elapsed());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{BoardConfig, Difficulty, MemoryStore};

    fn session(difficulty: Difficulty) -> Session<MemoryStore> {
        Session::new(Game::new(difficulty, 7), MemoryStore::new())
    }

    fn text(reply: Reply) -> String {
        match reply {
            Reply::Text(text) => text,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn first_reveal_announces_start() {
        let mut session = session(Difficulty::Expert);

        let out = text(session.execute(Command::Reveal((15, 8))));

        assert!(out.ends_with(&status_message(GameStatus::Playing, GameStatus::Idle, 0)));
        assert_eq!(session.game.status(), GameStatus::Playing);
    }

    #[test]
    fn zero_mine_board_announces_win() {
        let mut session = session(Difficulty::Custom(BoardConfig::new(3, 3, 0)));

        let out = text(session.execute(Command::Reveal((1, 1))));

        assert!(out.contains("You won in 0 seconds!"));
    }

    #[test]
    fn rejected_moves_are_reported() {
        let mut session = session(Difficulty::Beginner);
        session.execute(Command::Flag((0, 0)));

        let out = text(session.execute(Command::Reveal((0, 0))));
        assert!(out.ends_with("Nothing to reveal there"));

        let out = text(session.execute(Command::Reveal((20, 0))));
        assert!(out.ends_with("Invalid coordinates"));
    }

    #[test]
    fn save_and_load_through_store() {
        let mut session = session(Difficulty::Beginner);
        session.execute(Command::Reveal((4, 4)));
        session.execute(Command::Save);
        let saved = session.game.snapshot();

        session.execute(Command::Difficulty(Difficulty::Expert));
        let out = text(session.execute(Command::Load));

        assert!(out.ends_with("Game loaded"));
        assert_eq!(session.game.snapshot(), saved);
    }

    #[test]
    fn load_does_not_announce_restored_status() {
        let mut session = session(Difficulty::Beginner);
        session.execute(Command::Reveal((4, 4)));
        session.execute(Command::Save);
        session.execute(Command::New);

        let out = text(session.execute(Command::Load));

        assert!(out.ends_with("Game loaded"));
        assert!(!out.contains("good luck"));
        assert_ne!(session.game.status(), GameStatus::Idle);
    }

    #[test]
    fn loading_a_won_game_does_not_repeat_the_win() {
        let mut session = session(Difficulty::Custom(BoardConfig::new(3, 3, 0)));
        session.execute(Command::Reveal((1, 1)));
        session.execute(Command::Save);
        session.execute(Command::New);

        let out = text(session.execute(Command::Load));

        assert!(out.ends_with("Game loaded"));
        assert!(!out.contains("You won"));
        assert_eq!(session.game.status(), GameStatus::Won);
    }

    #[test]
    fn reveal_after_win_is_rejected() {
        let mut session = session(Difficulty::Custom(BoardConfig::new(3, 3, 0)));
        session.execute(Command::Reveal((1, 1)));

        let out = text(session.execute(Command::Reveal((1, 1))));
        assert!(out.ends_with("Nothing to reveal there"));
        assert_eq!(session.game.status(), GameStatus::Won);
    }

    #[test]
    fn load_without_save() {
        let mut session = session(Difficulty::Beginner);

        let out = text(session.execute(Command::Load));

        assert!(out.ends_with("No saved game"));
    }

    #[test]
    fn run_stops_at_quit() {
        let mut session = session(Difficulty::Beginner);
        let input = "bogus\nf 1 1\nq\nr 0 0\n".as_bytes();
        let mut output = Vec::new();

        session.run(input, &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Unknown command \"bogus\""));
        assert!(session.game.board()[(1, 1)].is_flagged);
        assert_eq!(session.game.status(), GameStatus::Idle);
    }
}
