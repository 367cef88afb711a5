//! Pattern interpretation
//!
//! The [`Turtle`] walks a pattern one symbol at a time, keeping one live
//! [`CursorState`] and a [`BranchStack`] of saved states. Every `F` yields a
//! [`LineSegment`]; everything else only changes the cursor.
//!
//! # Symbols
//!
//! | Symbol | Effect                                   |
//! |--------|------------------------------------------|
//! | `F`    | move forward, emit a segment             |
//! | `f`    | move forward                             |
//! | `-`    | heading += angle step                    |
//! | `+`    | heading -= angle step                    |
//! | `\|`   | heading += 180°                          |
//! | `[`    | push the cursor                          |
//! | `]`    | pop the cursor (underflow is an error)   |
//! | other  | ignored                                  |

use super::command::Command;
use super::cursor::{BranchStack, CursorState};
use crate::lsystem::errors::LSystemError;
use crate::lsystem::model::Point;

/// A drawn line, in the same coordinates as the starting cursor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

/// Stateful pattern walker
#[derive(Debug, Clone)]
pub struct Turtle {
    cursor: CursorState,
    stack: BranchStack,
    segment_length: f64,
    angle_step: f64,
}

impl Turtle {
    pub fn new(initial: CursorState, segment_length: f64, angle_step: f64) -> Self {
        Turtle {
            cursor: initial,
            stack: BranchStack::new(),
            segment_length,
            angle_step,
        }
    }

    /// Current cursor
    pub fn state(&self) -> CursorState {
        self.cursor
    }

    /// Number of open branches
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Apply one symbol
    ///
    /// `index` is the symbol's position in the pattern and is only used to
    /// report where an unmatched `]` occurred.
    pub fn step(&mut self, index: usize, symbol: char) -> Result<Option<LineSegment>, LSystemError> {
        let Some(command) = Command::from_symbol(symbol) else {
            return Ok(None);
        };

        match command {
            Command::Draw => {
                let start = self.cursor.position;
                self.cursor.advance(self.segment_length);
                return Ok(Some(LineSegment {
                    start,
                    end: self.cursor.position,
                }));
            }
            Command::Move => self.cursor.advance(self.segment_length),
            Command::TurnLeft => self.cursor.rotate(self.angle_step),
            Command::TurnRight => self.cursor.rotate(-self.angle_step),
            Command::TurnAround => self.cursor.rotate(180.0),
            Command::Push => self.stack.push(self.cursor),
            Command::Pop => {
                self.cursor = self
                    .stack
                    .pop()
                    .ok_or(LSystemError::StackUnderflow { index })?;
            }
        }

        Ok(None)
    }
}

/// Walk `pattern` from `initial` and collect every drawn segment
///
/// Fails with [`LSystemError::StackUnderflow`] on the first `]` that has no
/// matching `[`. Branches left open at the end of the pattern are not an
/// error.
pub fn interpret(
    pattern: &str,
    initial: CursorState,
    segment_length: f64,
    angle_step: f64,
) -> Result<Vec<LineSegment>, LSystemError> {
    let mut turtle = Turtle::new(initial, segment_length, angle_step);
    let mut segments = Vec::new();

    for (index, symbol) in pattern.chars().enumerate() {
        if let Some(segment) = turtle.step(index, symbol)? {
            segments.push(segment);
        }
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> CursorState {
        CursorState::new(Point::new(0.0, 0.0), 0.0)
    }

    #[test]
    fn test_single_segment() {
        let segments = interpret("F", origin(), 1.0, 60.0).unwrap();
        assert_eq!(
            segments,
            vec![LineSegment {
                start: Point::new(0.0, 0.0),
                end: Point::new(1.0, 0.0),
            }]
        );
    }

    #[test]
    fn test_move_without_drawing() {
        let segments = interpret("fF", origin(), 2.0, 90.0).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, Point::new(2.0, 0.0));
        assert_eq!(segments[0].end, Point::new(4.0, 0.0));
    }

    #[test]
    fn test_turn_directions() {
        let mut turtle = Turtle::new(origin(), 1.0, 30.0);
        turtle.step(0, '-').unwrap();
        assert_eq!(turtle.state().heading(), 30.0);
        turtle.step(1, '+').unwrap();
        turtle.step(2, '+').unwrap();
        assert_eq!(turtle.state().heading(), -30.0);
        turtle.step(3, '|').unwrap();
        assert_eq!(turtle.state().heading(), 150.0);
    }

    #[test]
    fn test_branch_restores_state_exactly() {
        let start = CursorState::new(Point::new(3.5, 7.25), 33.0);
        let mut turtle = Turtle::new(start, 1.7, 25.0);

        turtle.step(0, '[').unwrap();
        assert_eq!(turtle.depth(), 1);
        turtle.step(1, 'F').unwrap();
        turtle.step(2, '-').unwrap();
        turtle.step(3, ']').unwrap();

        assert_eq!(turtle.state(), start);
        assert_eq!(turtle.depth(), 0);
    }

    #[test]
    fn test_unknown_symbols_are_ignored() {
        let segments = interpret("XFY7F", origin(), 1.0, 90.0).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].end, Point::new(2.0, 0.0));
    }

    #[test]
    fn test_unmatched_close_is_underflow() {
        assert_eq!(
            interpret("]", origin(), 1.0, 90.0),
            Err(LSystemError::StackUnderflow { index: 0 })
        );
        assert_eq!(
            interpret("F[F]]F", origin(), 1.0, 90.0),
            Err(LSystemError::StackUnderflow { index: 4 })
        );
    }

    #[test]
    fn test_open_branch_at_end_is_allowed() {
        let segments = interpret("F[F", origin(), 1.0, 90.0).unwrap();
        assert_eq!(segments.len(), 2);
    }
}
