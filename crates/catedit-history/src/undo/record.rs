#![forbid(unsafe_code)]

//! Action records: immutable snapshots of one reversible edit.
//!
//! An [`ActionRecord`] captures everything needed to undo or redo an edit
//! without looking at the buffer: which canonical action ran, whether it
//! changed the line count, the cursor/selection state on both sides of the
//! edit, and the text the action produced or consumed.
//!
//! # Invariants
//!
//! - The payload is never empty and its first element is never empty. A
//!   no-op edit (backspace at the top-left corner) never becomes a record.
//! - The tag is always reversible by at least one reversal table.
//!
//! Both are enforced by [`ActionRecord::new`], the only constructor.

use std::fmt;

use catedit_core::action::ActionTag;
use catedit_core::geometry::Position;

use super::reversal;

/// Cursor, selection anchor and selecting flag, captured together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CursorState {
    /// Cursor position.
    pub cursor: Position,
    /// Selection anchor position.
    pub anchor: Position,
    /// Whether a selection is active.
    pub selecting: bool,
}

impl CursorState {
    /// Create a new cursor state.
    #[must_use]
    pub const fn new(cursor: Position, anchor: Position, selecting: bool) -> Self {
        Self {
            cursor,
            anchor,
            selecting,
        }
    }

    /// A non-selecting state with cursor and anchor at the same spot.
    #[must_use]
    pub const fn at(row: usize, col: usize) -> Self {
        let pos = Position::new(row, col);
        Self::new(pos, pos, false)
    }
}

/// One reversible edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    tag: ActionTag,
    size_change: bool,
    pre: CursorState,
    post: CursorState,
    payload: Vec<String>,
}

impl ActionRecord {
    /// Build a record, or `None` if the edit must not enter history.
    ///
    /// Returns `None` when the payload is empty, when its first element is
    /// empty, or when no reversal table knows `tag`.
    #[must_use]
    pub fn new<I, S>(
        tag: ActionTag,
        size_change: bool,
        pre: CursorState,
        post: CursorState,
        payload: I,
    ) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !reversal::is_reversible(tag) {
            return None;
        }
        let payload: Vec<String> = payload.into_iter().map(Into::into).collect();
        if payload.first().is_none_or(String::is_empty) {
            return None;
        }
        Some(Self {
            tag,
            size_change,
            pre,
            post,
            payload,
        })
    }

    /// The action that was performed.
    #[must_use]
    pub const fn tag(&self) -> ActionTag {
        self.tag
    }

    /// Whether the edit added or removed at least one line.
    #[must_use]
    pub const fn size_change(&self) -> bool {
        self.size_change
    }

    /// State before the edit.
    #[must_use]
    pub const fn pre(&self) -> &CursorState {
        &self.pre
    }

    /// State after the edit.
    #[must_use]
    pub const fn post(&self) -> &CursorState {
        &self.post
    }

    #[must_use]
    pub const fn pre_cursor(&self) -> Position {
        self.pre.cursor
    }

    #[must_use]
    pub const fn post_cursor(&self) -> Position {
        self.post.cursor
    }

    #[must_use]
    pub const fn pre_anchor(&self) -> Position {
        self.pre.anchor
    }

    #[must_use]
    pub const fn post_anchor(&self) -> Position {
        self.post.anchor
    }

    #[must_use]
    pub const fn pre_selecting(&self) -> bool {
        self.pre.selecting
    }

    #[must_use]
    pub const fn post_selecting(&self) -> bool {
        self.post.selecting
    }

    /// Text the action produced or consumed, in order.
    #[must_use]
    pub fn payload(&self) -> &[String] {
        &self.payload
    }

    /// The first payload element (never empty).
    #[must_use]
    pub fn first(&self) -> &str {
        self.payload.first().map_or("", String::as_str)
    }

    /// Whitespace class used when deciding whether records merge.
    ///
    /// True when the first payload element consists only of whitespace.
    /// Later elements are not consulted.
    #[must_use]
    pub fn first_is_whitespace(&self) -> bool {
        let first = self.first();
        !first.is_empty() && first.chars().all(char::is_whitespace)
    }

    /// Approximate heap + inline size, for diagnostics.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        std::mem::size_of::<Self>()
            + self
                .payload
                .iter()
                .map(|s| std::mem::size_of::<String>() + s.len())
                .sum::<usize>()
    }
}

impl fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|[", self.tag)?;
        for (i, text) in self.payload.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}'", escape_control(text))?;
        }
        write!(
            f,
            "]|{}{}{}",
            self.size_change, self.pre.cursor, self.post.cursor
        )
    }
}

/// Escape the control characters an editor line can contain.
///
/// `\t`, `\n`, `\v`, `\f` and `\r` become their two-character escapes; every
/// other character is kept as is.
#[must_use]
pub fn escape_control(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{0b}' => out.push_str("\\v"),
            '\u{0c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}
