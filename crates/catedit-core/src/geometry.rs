#![forbid(unsafe_code)]

//! Geometric primitives.

use std::fmt;

/// A cursor or selection-anchor coordinate in the text buffer.
///
/// Both fields are 0-indexed. Editors reposition the same logical cursor many
/// times per keystroke, so the type is mutable in place; history records keep
/// plain copies, never aliases into a live position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Line index.
    pub row: usize,
    /// Column index within the line.
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The origin (top-left of the buffer).
    #[inline]
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Snapshot both fields at once.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Assign both fields at once.
    #[inline]
    pub fn set(&mut self, (row, col): (usize, usize)) {
        self.row = row;
        self.col = col;
    }
}

impl From<(usize, usize)> for Position {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    #[inline]
    fn from(pos: Position) -> Self {
        pos.get()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
