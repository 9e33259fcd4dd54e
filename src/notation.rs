//! Text form of moves.
//!
//! Side turns use the usual face letters (`U D R L F B`), with `'` for a
//! counterclockwise quarter turn and `2` for a half turn. Whole-cube moves
//! use `x`, `y` and `z`, which follow `R`, `U` and `F` respectively.

use std::fmt;

use thiserror::Error;

use crate::cube::CubeMove;
use crate::geometry::{Axis, Direction, Side};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("move sequence is empty")]
    Empty,
    #[error("unknown face or axis `{0}`")]
    UnknownFace(String),
    #[error("unknown suffix in `{0}`, expected nothing, `'` or `2`")]
    UnknownSuffix(String),
}

const fn side_letter(side: Side) -> char {
    match side {
        Side::Front => 'F',
        Side::Back => 'B',
        Side::Right => 'R',
        Side::Left => 'L',
        Side::Up => 'U',
        Side::Down => 'D',
    }
}

fn side_from_letter(letter: char) -> Option<Side> {
    Side::ALL.into_iter().find(|&side| side_letter(side) == letter)
}

/// Whole-cube rotations share the clockwise sense of these sides.
const fn axis_reference(axis: Axis) -> Option<(char, Side)> {
    match axis {
        Axis::X => Some(('x', Side::Right)),
        Axis::Y => Some(('y', Side::Up)),
        Axis::Z => Some(('z', Side::Front)),
        Axis::None => None,
    }
}

impl fmt::Display for CubeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rotation = self.rotation();
        let (letter, reference) = match self.side() {
            Some(side) => (side_letter(side), side),
            None => match axis_reference(rotation.axis) {
                Some(pair) => pair,
                None => return write!(f, "."),
            },
        };

        let quarters = (rotation.angle / 90).rem_euclid(4);
        let clockwise = (reference.angle(Direction::Clockwise) / 90).rem_euclid(4);
        match quarters {
            0 => write!(f, "."),
            2 => write!(f, "{letter}2"),
            q if q == clockwise => write!(f, "{letter}"),
            _ => write!(f, "{letter}'"),
        }
    }
}

/// Parses a whitespace separated sequence such as `R U' F2 y`.
///
/// `R2` becomes two quarter turns, matching how turns are recorded; `x2`
/// stays a single half rotation of the whole cube.
pub fn parse(sequence: &str) -> Result<Vec<CubeMove>, ParseMoveError> {
    let mut moves = Vec::new();

    for token in sequence.split_whitespace() {
        let mut chars = token.chars();
        let letter = chars.next().ok_or(ParseMoveError::Empty)?;
        let suffix = chars.as_str();

        if let Some(side) = side_from_letter(letter) {
            match suffix {
                "" => moves.push(CubeMove::turn(side, Direction::Clockwise)),
                "'" => moves.push(CubeMove::turn(side, Direction::Counterclockwise)),
                "2" => {
                    moves.push(CubeMove::turn(side, Direction::Clockwise));
                    moves.push(CubeMove::turn(side, Direction::Clockwise));
                }
                _ => return Err(ParseMoveError::UnknownSuffix(token.to_string())),
            }
            continue;
        }

        let (axis, reference) = match letter {
            'x' => (Axis::X, Side::Right),
            'y' => (Axis::Y, Side::Up),
            'z' => (Axis::Z, Side::Front),
            _ => return Err(ParseMoveError::UnknownFace(token.to_string())),
        };
        let angle = match suffix {
            "" => reference.angle(Direction::Clockwise),
            "'" => reference.angle(Direction::Counterclockwise),
            "2" => 180,
            _ => return Err(ParseMoveError::UnknownSuffix(token.to_string())),
        };
        moves.push(CubeMove::whole(axis, angle));
    }

    if moves.is_empty() {
        return Err(ParseMoveError::Empty);
    }
    Ok(moves)
}

/// Formats moves as a space separated sequence.
pub fn format_moves(moves: &[CubeMove]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
