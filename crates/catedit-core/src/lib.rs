#![forbid(unsafe_code)]

//! Core: positions, key tokens, and the canonical action vocabulary.
//!
//! # Role in catedit
//! `catedit-core` is the input layer of the editor. It turns whatever the
//! terminal reports for a key press into one canonical [`action::ActionTag`]
//! and defines the [`geometry::Position`] type that cursors and selection
//! anchors are made of.
//!
//! # Primary responsibilities
//! - **ActionTag**: the closed vocabulary of edit actions and their groups.
//! - **KeyEvent**: typed key presses and their raw token names.
//! - **HotkeyTranslator**: alias folding from raw tokens to actions.
//! - **Position**: row/column coordinates.
//!
//! # How it fits in the system
//! The history engine (`catedit-history`) records and reverses actions
//! named by `catedit-core` tags; it never sees raw key tokens.

pub mod action;
pub mod event;
pub mod geometry;
pub mod keybinding;

pub use action::{ActionGroup, ActionTag, ParseActionTagError};
pub use event::{KeyCode, KeyEvent, Modifiers};
pub use geometry::Position;
pub use keybinding::{HotkeyGroups, HotkeyTranslator};
