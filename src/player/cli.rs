#![cfg(feature = "std")]

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use super::Player;
use crate::cli::render_board;
use crate::core::{Board, BoxCoord, GameSession, Move, Orientation, PlayerId};

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "Commands:\n  H r c   draw the horizontal edge at row r, column c\n  V r c   draw the vertical edge at row r, column c\n  reset   start the game over\n  help    show this message\n  quit    leave";

/// Parse `H r c` / `V r c`. Tokens may be separated by spaces or commas.
pub fn parse_move(input: &str) -> Result<Move, String> {
    let mut tokens = input
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|t| !t.is_empty());
    let orient = tokens.next().ok_or("Empty input")?;
    let mut chars = orient.chars();
    let orientation = match (chars.next().and_then(Orientation::from_code), chars.next()) {
        (Some(o), None) => o,
        _ => {
            return Err(format!(
                "Invalid orientation '{}' - must be H or V",
                orient
            ))
        }
    };
    let mut coord = |name: &str| -> Result<usize, String> {
        let tok = tokens
            .next()
            .ok_or_else(|| format!("Missing {} - expected e.g. \"H 0 1\"", name))?;
        tok.parse()
            .map_err(|_| format!("Invalid {} '{}' - must be a non-negative number", name, tok))
    };
    let r = coord("row")?;
    let c = coord("column")?;
    if tokens.next().is_some() {
        return Err("Too many values - expected e.g. \"H 0 1\"".to_string());
    }
    Ok(Move::new(orientation, r, c))
}

pub fn parse_command(input: &str) -> Result<Command, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "reset" => Ok(Command::Reset),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => parse_move(input).map(Command::Move),
    }
}

/// Prompt until a parsable command arrives. `None` on end of input.
pub fn prompt_command(prompt: &str) -> io::Result<Option<Command>> {
    let stdin = io::stdin();
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(cmd) => return Ok(Some(cmd)),
            Err(e) => println!("{}", e),
        }
    }
}

/// What the local player does with one parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Turn {
    Play(Move),
    Stop,
    Say(String),
}

/// Human player reading moves from stdin.
#[derive(Debug, Default)]
pub struct CliPlayer {
    owners: BTreeMap<BoxCoord, PlayerId>,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The board as shown before a prompt, owners included.
    pub fn board_text(&self, board: &Board) -> String {
        render_board(board, &self.owners)
    }

    fn interpret(cmd: Command, board: &Board) -> Turn {
        match cmd {
            Command::Move(mv) if board.is_legal(mv) => Turn::Play(mv),
            Command::Move(mv) => Turn::Say(format!("Illegal move: {}", mv)),
            Command::Reset => Turn::Say(
                "reset is not available in a local game; use quit to leave".to_string(),
            ),
            Command::Help => Turn::Say(HELP.to_string()),
            Command::Quit => Turn::Stop,
        }
    }
}

impl Player for CliPlayer {
    fn observe_session(&mut self, session: &GameSession) {
        self.owners = session.box_owners().clone();
    }

    fn select_move(&mut self, _rng: &mut SmallRng, board: &Board) -> Option<Move> {
        print!("{}", self.board_text(board));
        loop {
            let cmd = match prompt_command("move> ") {
                Ok(Some(cmd)) => cmd,
                Ok(None) => return None,
                Err(e) => {
                    eprintln!("Failed to read input: {}", e);
                    return None;
                }
            };
            match Self::interpret(cmd, board) {
                Turn::Play(mv) => return Some(mv),
                Turn::Stop => return None,
                Turn::Say(text) => println!("{}", text),
            }
        }
    }

    fn handle_move_result(&mut self, _mv: Move, completed: &[BoxCoord]) {
        for b in completed {
            println!("You closed box {} - go again!", b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!(parse_move("H 0 1"), Ok(Move::horizontal(0, 1)));
        assert_eq!(parse_move("v,2,3"), Ok(Move::vertical(2, 3)));
        assert_eq!(parse_move("  V 1   0 "), Ok(Move::vertical(1, 0)));
    }

    #[test]
    fn rejects_bad_moves() {
        assert!(parse_move("").is_err());
        assert!(parse_move("X 0 0").is_err());
        assert!(parse_move("HV 0 0").is_err());
        assert!(parse_move("H 0").is_err());
        assert!(parse_move("H -1 0").is_err());
        assert!(parse_move("H 0 0 0").is_err());
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("reset\n"), Ok(Command::Reset));
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("h 1 1"), Ok(Command::Move(Move::horizontal(1, 1))));
    }

    #[test]
    fn reset_is_refused_locally() {
        let board = Board::new(2, 2).unwrap();
        match CliPlayer::interpret(Command::Reset, &board) {
            Turn::Say(text) => assert!(text.contains("not available")),
            other => panic!("expected a message, got {:?}", other),
        }
        assert_eq!(CliPlayer::interpret(Command::Quit, &board), Turn::Stop);
        assert_eq!(CliPlayer::interpret(Command::Help, &board), Turn::Say(HELP.to_string()));
    }

    #[test]
    fn illegal_moves_are_reported() {
        let mut board = Board::new(1, 1).unwrap();
        board.apply_move(Move::vertical(0, 0)).unwrap();
        assert_eq!(
            CliPlayer::interpret(Command::Move(Move::vertical(0, 0)), &board),
            Turn::Say("Illegal move: V 0 0".to_string())
        );
        assert_eq!(
            CliPlayer::interpret(Command::Move(Move::vertical(0, 1)), &board),
            Turn::Play(Move::vertical(0, 1))
        );
    }

    #[test]
    fn shows_box_owners_from_session() {
        let mut session = GameSession::with_dimensions(1, 2).unwrap();
        for mv in [
            Move::horizontal(0, 1),
            Move::horizontal(1, 1),
            Move::vertical(0, 1),
            Move::vertical(0, 2),
        ] {
            session.submit(mv).unwrap();
        }
        assert_eq!(session.owner(BoxCoord::new(0, 1)), Some(PlayerId::Two));

        let mut player = CliPlayer::new();
        assert_eq!(player.board_text(session.board()).lines().nth(2), Some("        |   |"));
        player.observe_session(&session);
        let text = player.board_text(session.board());
        assert_eq!(text.lines().nth(2), Some("        | 2 |"));
    }
}
