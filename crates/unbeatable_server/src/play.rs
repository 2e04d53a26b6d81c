//! Terminal front end.

use crate::error::GameError;
use crate::history::{GameHistory, format_duration};
use crate::session::GameSession;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};
use unbeatable_tictactoe::{Outcome, Player, Position};

/// Plays games on `input`/`output` until the player quits or input ends.
///
/// Returns the history of every game finished along the way.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<GameHistory> {
    let mut session = GameSession::new();
    let mut history = GameHistory::new();

    writeln!(output, "You are X. The computer is O.")?;
    loop {
        writeln!(output, "\n{}\n", session.board().display())?;
        write!(output, "Your move (1-9, or q to quit): ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        if line.eq_ignore_ascii_case("q") {
            break;
        }

        let Some(index) = parse_move(&line) else {
            writeln!(output, "Enter a cell number from 1 to 9.")?;
            continue;
        };

        match session.play_turn(index, &mut history) {
            Ok(turn) => {
                if let Some(pos) = turn.computer_move {
                    writeln!(output, "Computer plays {}.", pos)?;
                }
                if let Some(outcome) = turn.outcome {
                    writeln!(output, "\n{}\n", session.board().display())?;
                    writeln!(output, "{}", describe(outcome))?;
                    print_history(&history, &mut output)?;

                    write!(output, "Play again? [y/N]: ")?;
                    output.flush()?;
                    match read_line(&mut input)? {
                        Some(answer) if answer.eq_ignore_ascii_case("y") => {
                            session.reset();
                        }
                        _ => break,
                    }
                }
            }
            Err(GameError::InvalidMove(err)) => {
                debug!(error = %err, "Invalid terminal move");
                writeln!(output, "Invalid move: {}", err)?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(output, "Goodbye.")?;
    Ok(history)
}

/// Reads one trimmed line, or `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Accepts the 1-based numbers shown on the board, or a label like "center".
fn parse_move(line: &str) -> Option<usize> {
    match line.parse::<usize>() {
        Ok(number) => number.checked_sub(1),
        Err(_) => Position::parse(line).map(Position::to_index),
    }
}

fn describe(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won(Player::X) => "You win!",
        Outcome::Won(Player::O) => "The computer wins.",
        Outcome::Draw => "It's a draw.",
    }
}

fn print_history(history: &GameHistory, output: &mut impl Write) -> Result<()> {
    writeln!(output, "\nGame history:")?;
    for record in history.records() {
        writeln!(
            output,
            "  #{} {} ({})",
            record.id(),
            record.winner(),
            record
                .duration()
                .map_or_else(|| "untimed".to_string(), format_duration)
        )?;
    }
    Ok(())
}
