#![forbid(unsafe_code)]

//! Undo/redo history for a text editor buffer.
//!
//! Edits are recorded after they happen as [`ActionRecord`]s. Undo replays
//! each record's inverse action through the [`Editor`] surface; redo replays
//! the recorded action. Neither ever touches text directly.
//!
//! - **Reversal**: a fixed table maps every edit to its inverse, split by
//!   whether the edit changed the line count ([`reversal`]).
//! - **Merging**: runs of contiguous, stackable edits of the same whitespace
//!   class undo and redo as one step.
//! - **Bounded**: both stacks hold at most [`HistoryConfig::capacity`]
//!   records and drop their oldest entry when full.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                         History                          │
//! │  ┌──────────────┐   undo(): inverse   ┌──────────────┐   │
//! │  │  Undo Stack  │ ──────────────────► │  Redo Stack  │   │
//! │  │  ActionRecord│ ◄────────────────── │  ActionRecord│   │
//! │  └──────────────┘   redo(): forward   └──────────────┘   │
//! └─────────────────────────────┬────────────────────────────┘
//!                               │ set cursor, dispatch(tag, payload)
//!                               ▼
//!                          dyn Editor
//! ```
//!
//! # Quick Start
//!
//! ```
//! use catedit_core::{ActionTag, Position};
//! use catedit_history::undo::{CursorState, Editor, History};
//!
//! #[derive(Default)]
//! struct Cursor(Position, Position, bool);
//!
//! impl Editor for Cursor {
//!     fn cursor(&self) -> Position { self.0 }
//!     fn set_cursor(&mut self, pos: Position) { self.0 = pos; }
//!     fn anchor(&self) -> Position { self.1 }
//!     fn set_anchor(&mut self, pos: Position) { self.1 = pos; }
//!     fn selecting(&self) -> bool { self.2 }
//!     fn set_selecting(&mut self, selecting: bool) { self.2 = selecting; }
//! }
//!
//! let mut history = History::default();
//! for (col, c) in "hi".chars().enumerate() {
//!     history.add_parts(
//!         ActionTag::KeyString,
//!         false,
//!         CursorState::at(0, col),
//!         CursorState::at(0, col + 1),
//!         [c.to_string()],
//!     );
//! }
//!
//! let mut editor = Cursor::default();
//! assert_eq!(history.undo(&mut editor), Ok(2));
//! assert_eq!(editor.cursor(), Position::new(0, 0));
//! ```

pub mod editor;
pub mod history;
pub mod record;
pub mod reversal;

pub use editor::{Editor, capture, dispatch, restore};
pub use history::{CAPACITY_ENV, DEFAULT_CAPACITY, History, HistoryConfig, HistoryError};
pub use record::{ActionRecord, CursorState, escape_control};
