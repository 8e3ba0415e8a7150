//! Client side of the Go Text Protocol (GTP) spoken by the analysis engine.
//!
//! The opponent runs as a separate process. This module only builds the
//! command lines sent to it and parses the lines it answers with; the
//! transport is up to the caller.
//!
//! ## Example
//!
//! ```
//! use igo_sensei::board::{Board, Color};
//! use igo_sensei::gtp::{EngineMove, GtpCommand, parse_genmove};
//! use igo_sensei::position::Move;
//!
//! let board = Board::square(7);
//! let cmd = GtpCommand::GenMove(Color::White);
//! assert_eq!(cmd.encode(&board), "genmove white");
//!
//! let reply = parse_genmove(&board, "= C3").unwrap();
//! assert_eq!(reply, EngineMove::Play(Move::Play(board.xy_to_point(3, 3))));
//! ```

use crate::board::{Board, Color};
use crate::coord::{coord_to_point, move_to_coord};
use crate::error::GtpError;
use crate::position::Move;

/// Commands sent to the analysis engine.
#[derive(Clone, Debug, PartialEq)]
pub enum GtpCommand {
    ClearBoard,
    BoardSize(usize),
    Komi(f32),
    TimeSettings {
        main_time: u32,
        byoyomi: u32,
        stones: u32,
    },
    Play {
        color: Color,
        mv: Move,
    },
    GenMove(Color),
    FinalScore,
    Quit,
}

impl GtpCommand {
    /// The command line, without a trailing newline.
    pub fn encode(&self, board: &Board) -> String {
        match self {
            GtpCommand::ClearBoard => "clear_board".into(),
            GtpCommand::BoardSize(size) => format!("boardsize {size}"),
            GtpCommand::Komi(komi) => format!("komi {komi}"),
            GtpCommand::TimeSettings {
                main_time,
                byoyomi,
                stones,
            } => format!("time_settings {main_time} {byoyomi} {stones}"),
            GtpCommand::Play { color, mv } => format!("play {color} {}", move_to_coord(board, *mv)),
            GtpCommand::GenMove(color) => format!("genmove {color}"),
            GtpCommand::FinalScore => "final_score".into(),
            GtpCommand::Quit => "quit".into(),
        }
    }
}

/// A successful response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub id: Option<u32>,
    pub message: String,
}

/// The engine's answer to `genmove`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineMove {
    Play(Move),
    Resign,
}

/// The engine's answer to `final_score`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FinalScore {
    Draw,
    Win { winner: Color, margin: f32 },
}

/// Parse a response line of the form `=[id] message` or `?[id] message`.
///
/// # Errors
/// [`GtpError::Failure`] for a `?` response, [`GtpError::Malformed`] for
/// anything that is not a response.
pub fn parse_response(line: &str) -> Result<Response, GtpError> {
    let line = line.trim();
    let mut chars = line.chars();
    let status = chars.next();
    let (id, message) = parse_id(chars.as_str());
    match status {
        Some('=') => Ok(Response {
            id,
            message: message.to_string(),
        }),
        Some('?') => Err(GtpError::Failure(message.to_string())),
        _ => Err(GtpError::Malformed(line.to_string())),
    }
}

/// Parse the response to `genmove`: a coordinate, `pass` or `resign`.
pub fn parse_genmove(board: &Board, line: &str) -> Result<EngineMove, GtpError> {
    let response = parse_response(line)?;
    if response.message.eq_ignore_ascii_case("resign") {
        return Ok(EngineMove::Resign);
    }
    Ok(EngineMove::Play(coord_to_point(board, &response.message)?))
}

/// Parse the response to `final_score`: `0`, `B+n` or `W+n`.
pub fn parse_final_score(line: &str) -> Result<FinalScore, GtpError> {
    let response = parse_response(line)?;
    let message = response.message.as_str();
    if message == "0" {
        return Ok(FinalScore::Draw);
    }
    let malformed = || GtpError::Malformed(message.to_string());
    let (side, margin) = message.split_once('+').ok_or_else(malformed)?;
    let winner = match side {
        "B" | "b" => Color::Black,
        "W" | "w" => Color::White,
        _ => return Err(malformed()),
    };
    let margin: f32 = margin.parse().map_err(|_| malformed())?;
    Ok(FinalScore::Win { winner, margin })
}

/// Split an optional numeric id off the start of `s`.
fn parse_id(s: &str) -> (Option<u32>, &str) {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    match s[..end].parse::<u32>() {
        Ok(id) => (Some(id), s[end..].trim()),
        Err(_) => (None, s.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_with_id() {
        let (id, rest) = parse_id("123 D4");
        assert_eq!(id, Some(123));
        assert_eq!(rest, "D4");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, rest) = parse_id(" D4");
        assert_eq!(id, None);
        assert_eq!(rest, "D4");
    }

    #[test]
    fn test_encode_commands() {
        let board = Board::square(7);
        let d4 = board.xy_to_point(4, 4);
        let play = GtpCommand::Play {
            color: Color::Black,
            mv: Move::Play(d4),
        };
        assert_eq!(play.encode(&board), "play black D4");
        let pass = GtpCommand::Play {
            color: Color::White,
            mv: Move::Pass,
        };
        assert_eq!(pass.encode(&board), "play white pass");
        assert_eq!(GtpCommand::Komi(0.0).encode(&board), "komi 0");
        let time = GtpCommand::TimeSettings {
            main_time: 0,
            byoyomi: 3,
            stones: 1,
        };
        assert_eq!(time.encode(&board), "time_settings 0 3 1");
        assert_eq!(GtpCommand::ClearBoard.encode(&board), "clear_board");
    }

    #[test]
    fn test_parse_response_status() {
        assert_eq!(
            parse_response("=5 pass"),
            Ok(Response {
                id: Some(5),
                message: "pass".into()
            })
        );
        assert_eq!(
            parse_response("? illegal move"),
            Err(GtpError::Failure("illegal move".into()))
        );
        assert!(matches!(
            parse_response("D4"),
            Err(GtpError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_genmove() {
        let board = Board::square(7);
        assert_eq!(parse_genmove(&board, "= resign"), Ok(EngineMove::Resign));
        assert_eq!(
            parse_genmove(&board, "= pass"),
            Ok(EngineMove::Play(Move::Pass))
        );
        assert_eq!(
            parse_genmove(&board, "= G7"),
            Ok(EngineMove::Play(Move::Play(48)))
        );
        assert!(matches!(
            parse_genmove(&board, "= Z9"),
            Err(GtpError::Coord(_))
        ));
    }

    #[test]
    fn test_parse_final_score() {
        assert_eq!(parse_final_score("= 0"), Ok(FinalScore::Draw));
        assert_eq!(
            parse_final_score("= B+3"),
            Ok(FinalScore::Win {
                winner: Color::Black,
                margin: 3.0
            })
        );
        assert_eq!(
            parse_final_score("= W+2.5"),
            Ok(FinalScore::Win {
                winner: Color::White,
                margin: 2.5
            })
        );
        assert!(matches!(
            parse_final_score("= X+1"),
            Err(GtpError::Malformed(_))
        ));
    }
}
