#![forbid(unsafe_code)]

//! Editing history for catedit.
//!
//! # Role in catedit
//! `catedit-history` owns undo and redo. The editor reports every completed
//! edit as an [`undo::ActionRecord`]; this crate stores the records in
//! bounded stacks and, on request, replays their inverses (or the edits
//! themselves) through the [`undo::Editor`] trait.
//!
//! # How it fits in the system
//! Action names and positions come from `catedit-core`. The editor
//! implements [`undo::Editor`] and owns the text; this crate never sees it.

pub mod undo;

pub use undo::{ActionRecord, CursorState, Editor, History, HistoryConfig, HistoryError};
