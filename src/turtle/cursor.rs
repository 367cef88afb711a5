//! Turtle cursor and branch stack
//!
//! [`CursorState`] is a plain `Copy` value. Pushing it onto the
//! [`BranchStack`] stores an independent snapshot, so later moves of the
//! live cursor can never alter a saved branch point.

use crate::bounded::BoundedValue;
use crate::lsystem::model::Point;

/// Lower bound of the heading range, in degrees
pub const HEADING_MIN: f64 = -180.0;
/// Upper (exclusive) bound of the heading range, in degrees
pub const HEADING_MAX: f64 = 180.0;

/// Turtle position and heading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    pub position: Point,
    heading: BoundedValue<f64>,
}

impl CursorState {
    pub fn new(position: Point, heading: f64) -> Self {
        CursorState {
            position,
            heading: BoundedValue::wrapping(HEADING_MIN, HEADING_MAX, heading),
        }
    }

    /// Heading in degrees, always within `[-180, 180)`
    pub fn heading(&self) -> f64 {
        self.heading.get()
    }

    /// Turn by `degrees`; positive turns counter-clockwise on screen
    pub fn rotate(&mut self, degrees: f64) {
        self.heading.shift(degrees);
    }

    /// Advance along the current heading
    ///
    /// The Y axis points down, so a heading of 90° moves toward the top.
    pub fn advance(&mut self, length: f64) {
        let radians = self.heading().to_radians();
        self.position = Point::new(
            self.position.x + radians.cos() * length,
            self.position.y - radians.sin() * length,
        );
    }
}

/// LIFO store of saved cursor states
#[derive(Debug, Clone, Default)]
pub struct BranchStack {
    saved: Vec<CursorState>,
}

impl BranchStack {
    pub fn new() -> Self {
        BranchStack { saved: Vec::new() }
    }

    pub fn push(&mut self, state: CursorState) {
        self.saved.push(state);
    }

    /// Take the most recently saved state, if any
    pub fn pop(&mut self) -> Option<CursorState> {
        self.saved.pop()
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_is_wrapped_on_construction() {
        let cursor = CursorState::new(Point::default(), 190.0);
        assert_eq!(cursor.heading(), -170.0);
    }

    #[test]
    fn test_rotate_wraps() {
        let mut cursor = CursorState::new(Point::default(), 170.0);
        cursor.rotate(20.0);
        assert_eq!(cursor.heading(), -170.0);
        cursor.rotate(-20.0);
        assert_eq!(cursor.heading(), 170.0);
    }

    #[test]
    fn test_advance_up_is_negative_y() {
        let mut cursor = CursorState::new(Point::new(5.0, 5.0), 90.0);
        cursor.advance(2.0);
        assert!((cursor.position.x - 5.0).abs() < 1e-12);
        assert!((cursor.position.y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_pushed_state_is_a_snapshot() {
        let mut stack = BranchStack::new();
        let mut cursor = CursorState::new(Point::new(1.0, 1.0), 0.0);
        stack.push(cursor);

        cursor.advance(10.0);
        cursor.rotate(45.0);

        let saved = stack.pop().unwrap();
        assert_eq!(saved.position, Point::new(1.0, 1.0));
        assert_eq!(saved.heading(), 0.0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_stack() {
        let mut stack = BranchStack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.depth(), 0);
    }
}
