#![cfg(feature = "std")]

//! Text rendering of boards and game views.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::core::{Board, BoxCoord, Move, PlayerId};
use crate::protocol::domain::GameView;

/// Draw the board with `+` dots, `---` and `|` edges and owner digits.
///
/// ```text
///     0   1
///  0  +---+   +
///     | 1 |
///  1  +---+   +
/// ```
///
/// Row labels name dot rows; column labels name dot columns.
pub fn render_board(board: &Board, owners: &BTreeMap<BoxCoord, PlayerId>) -> String {
    let (rows, cols) = (board.rows(), board.cols());
    let drawn = |mv: Move| board.get_edge(mv).map(|e| e == 1).unwrap_or(false);
    let mut out = String::new();

    out.push_str("    ");
    for c in 0..=cols {
        let _ = write!(out, "{:<4}", c);
    }
    out.push('\n');

    for r in 0..=rows {
        let _ = write!(out, "{:>2}  +", r);
        for c in 0..cols {
            out.push_str(if drawn(Move::horizontal(r, c)) { "---+" } else { "   +" });
        }
        out.push('\n');
        if r == rows {
            break;
        }
        out.push_str("    ");
        for c in 0..=cols {
            out.push(if drawn(Move::vertical(r, c)) { '|' } else { ' ' });
            if c < cols {
                match owners.get(&BoxCoord::new(r, c)) {
                    Some(p) => {
                        let _ = write!(out, " {} ", p.number());
                    }
                    None => out.push_str("   "),
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Board, scores and whose turn it is.
pub fn render_game_view(view: &GameView) -> String {
    let mut out = match view.board() {
        Ok(board) => render_board(&board, &view.owners()),
        Err(e) => format!("(unrenderable board: {})\n", e),
    };
    let _ = writeln!(
        out,
        "Score: player 1 = {}, player 2 = {}",
        view.score(PlayerId::One),
        view.score(PlayerId::Two)
    );
    if view.game_over {
        let (one, two) = (view.score(PlayerId::One), view.score(PlayerId::Two));
        let verdict = match one.cmp(&two) {
            std::cmp::Ordering::Greater => "Player 1 wins!",
            std::cmp::Ordering::Less => "Player 2 wins!",
            std::cmp::Ordering::Equal => "It's a draw.",
        };
        let _ = writeln!(out, "Game over. {}", verdict);
    } else {
        let _ = writeln!(out, "Player {} to move", view.current_player);
    }
    out
}

pub fn print_game_view(view: &GameView) {
    print!("{}", render_game_view(view));
}
