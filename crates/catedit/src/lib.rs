#![forbid(unsafe_code)]

//! catedit public facade crate.
//!
//! Re-exports the key translation layer from `catedit-core` and the
//! undo/redo engine from `catedit-history`, plus a prelude and a crate-wide
//! error type.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use catedit_core::action::{ActionGroup, ActionTag, ParseActionTagError};
pub use catedit_core::event::{KeyCode, KeyEvent, Modifiers};
pub use catedit_core::geometry::Position;
pub use catedit_core::keybinding::{HotkeyGroups, HotkeyTranslator};

// --- History re-exports ----------------------------------------------------

pub use catedit_history::undo::{
    ActionRecord, CursorState, Editor, History, HistoryConfig, HistoryError,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for catedit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Undo/redo consistency failure.
    History(HistoryError),
    /// A wire name that names no action.
    UnknownAction(ParseActionTagError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::History(err) => write!(f, "{err}"),
            Self::UnknownAction(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::History(err) => Some(err),
            Self::UnknownAction(err) => Some(err),
        }
    }
}

impl From<HistoryError> for Error {
    fn from(err: HistoryError) -> Self {
        Self::History(err)
    }
}

impl From<ParseActionTagError> for Error {
    fn from(err: ParseActionTagError) -> Self {
        Self::UnknownAction(err)
    }
}

/// Standard result type for catedit APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ActionRecord, ActionTag, CursorState, Editor, Error, History, HistoryConfig,
        HotkeyTranslator, KeyCode, KeyEvent, Modifiers, Position, Result,
    };

    pub use crate::{core, history};
}

pub use catedit_core as core;
pub use catedit_history as history;
