//! Play command - a game in the terminal against the minimax opponent

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use tictactoe_core::{GameEngine, GameError, GameId, MoveOutcome};

#[derive(Args)]
pub struct PlayArgs {
    /// Two humans share the terminal instead of playing the algorithm
    #[arg(long)]
    pub two_player: bool,
}

/// A parsed line of input
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Place(usize, usize),
    Quit,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let engine = GameEngine::default();
    let id = engine.create(!args.two_player);

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_loop(&engine, id, stdin.lock(), stdout.lock())
}

/// Prompt, read, apply, until the game ends, the player quits, or input runs out
fn play_loop<R: BufRead, W: Write>(engine: &GameEngine, id: GameId, mut input: R, mut out: W) -> Result<()> {
    loop {
        let game = engine.get_game(id)?;
        write!(out, "\n{}", game.board())?;
        write!(out, "{} to move (row col, q to quit): ", game.current_player())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let (row, col) = match parse_command(&line) {
            Ok(Command::Place(row, col)) => (row, col),
            Ok(Command::Quit) => return Ok(()),
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                continue;
            }
        };

        match engine.apply_move(id, game.current_player(), row, col) {
            Ok(MoveOutcome::Won { winner, board }) => {
                write!(out, "\n{}", board)?;
                writeln!(out, "Player {} wins!", winner)?;
                return Ok(());
            }
            Ok(MoveOutcome::Tie { board }) => {
                write!(out, "\n{}", board)?;
                writeln!(out, "It's a tie!")?;
                return Ok(());
            }
            Ok(MoveOutcome::Continue { .. }) => {}
            Err(GameError::IllegalMove(reason)) => writeln!(out, "{}", reason)?,
            Err(err) => return Err(err.into()),
        }
    }
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Ok(Command::Quit);
    }

    let parts: Vec<&str> = line.split(|c: char| c.is_whitespace() || c == ',').filter(|s| !s.is_empty()).collect();
    match parts.as_slice() {
        [row, col] => {
            let row = row.parse().map_err(|_| format!("Bad row: {}", row))?;
            let col = col.parse().map_err(|_| format!("Bad column: {}", col))?;
            Ok(Command::Place(row, col))
        }
        _ => Err("Enter a move as: row col".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(against_algorithm: bool, script: &str) -> String {
        let engine = GameEngine::default();
        let id = engine.create(against_algorithm);
        let mut out = Vec::new();
        play_loop(&engine, id, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("1 2\n"), Ok(Command::Place(1, 2)));
        assert_eq!(parse_command("0,2"), Ok(Command::Place(0, 2)));
        assert_eq!(parse_command(" Q "), Ok(Command::Quit));
        assert!(parse_command("x 1").is_err());
        assert!(parse_command("1").is_err());
        assert!(parse_command("1 2 3").is_err());
    }

    #[test]
    fn test_two_player_win() {
        let out = run_script(false, "0 0\n1 1\n0 1\n2 2\n0 2\n");
        assert!(out.contains("Player X wins!"));
    }

    #[test]
    fn test_illegal_move_reprompts() {
        let out = run_script(false, "0 0\n0 0\n5 5\nq\n");
        assert!(out.contains("Cell already taken"));
        assert!(out.contains("Cell out of bounds"));
        assert!(out.contains("O to move"));
    }

    #[test]
    fn test_against_algorithm_human_keeps_turn() {
        let out = run_script(true, "0 0\n");
        // After the automated reply it is X's turn again
        assert_eq!(out.matches("X to move").count(), 2);
        assert!(!out.contains("O to move"));
    }

    #[test]
    fn test_bad_input_reported() {
        let out = run_script(false, "hello\n");
        assert!(out.contains("Enter a move as: row col"));
    }
}
