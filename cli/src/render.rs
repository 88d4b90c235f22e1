use core::fmt::Write;

use sweeper_core::{Cell, Game, GameStatus};

const HIDDEN: char = '#';
const FLAG: char = 'F';
const MINE: char = '*';
const EMPTY: char = '.';

/// Glyph for one cell. After a loss every mine is shown, the game itself only reveals the one
/// that was clicked.
fn glyph(cell: &Cell, status: GameStatus) -> char {
    match cell {
        Cell {
            is_revealed: true,
            is_mine: true,
            ..
        } => MINE,
        Cell {
            is_revealed: true,
            adjacent_mines: 0,
            ..
        } => EMPTY,
        Cell {
            is_revealed: true,
            adjacent_mines,
            ..
        } => char::from(b'0' + adjacent_mines),
        Cell {
            is_flagged: true, ..
        } => FLAG,
        Cell { is_mine: true, .. } if status == GameStatus::Lost => MINE,
        _ => HIDDEN,
    }
}

fn digits(n: usize) -> usize {
    n.checked_ilog10().unwrap_or(0) as usize + 1
}

pub(crate) fn board(game: &Game) -> String {
    let board = game.board();
    let status = game.status();
    let cell_width = digits(usize::from(board.columns().saturating_sub(1))) + 1;
    let label_width = digits(usize::from(board.rows().saturating_sub(1)));

    let mut out = String::new();
    let _ = write!(out, "{:label_width$}", "");
    for x in 0..board.columns() {
        let _ = write!(out, "{x:>cell_width$}");
    }
    out.push('\n');

    for (y, row) in board.iter_rows().enumerate() {
        let _ = write!(out, "{y:>label_width$}");
        for cell in row {
            let _ = write!(out, "{:>cell_width$}", glyph(cell, status));
        }
        out.push('\n');
    }
    out
}

pub(crate) fn status_line(game: &Game) -> String {
    let status = match game.status() {
        GameStatus::Idle => "ready",
        GameStatus::Playing => "playing",
        GameStatus::Won => "won",
        GameStatus::Lost => "lost",
    };
    format!(
        "{} | mines left: {} | time: {}s | {}",
        game.difficulty(),
        game.mines_remaining(),
        game.time_elapsed(),
        status
    )
}
