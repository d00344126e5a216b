#![forbid(unsafe_code)]

//! Reversal and stackability tables.
//!
//! Undoing an edit means running its inverse action with the same payload.
//! Which inverse depends on whether the edit changed the line count:
//!
//! | Edit | Inverse (same line count) | Inverse (line count changed) |
//! |------|---------------------------|------------------------------|
//! | `key_dc`, `key_dl`, `key_backspace`, `key_ctl_backspace` | `key_string` | `key_enter` |
//! | `key_string` | `key_backspace` | - |
//! | `key_enter` | `key_backspace` | - |
//! | `indent_tab` | `key_backspace` | `indent_btab` |
//! | `indent_btab` | `indent_tab` | - |
//! | `key_remove_chunk` | `key_add_chunk` | `key_add_chunk` |
//! | `key_add_chunk` | `key_remove_chunk` | `key_remove_chunk` |
//! | `key_replace_search` | `key_replace_search_reverse` | - |
//!
//! A backspace that joined two lines cannot be undone by inserting the
//! deleted character; the generic insert cannot recreate a line split, so
//! the multi-line table answers with `key_enter` instead.
//!
//! The tables are one exhaustive `match` over [`ActionTag`]: adding a tag
//! without deciding its reversal is a compile error.

use catedit_core::action::ActionTag;

/// One row of the reversal tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    single_line: Option<ActionTag>,
    multi_line: Option<ActionTag>,
    stackable: &'static [ActionTag],
}

impl Entry {
    const NONE: Self = Self::new(None, None, &[]);

    const fn new(
        single_line: Option<ActionTag>,
        multi_line: Option<ActionTag>,
        stackable: &'static [ActionTag],
    ) -> Self {
        Self {
            single_line,
            multi_line,
            stackable,
        }
    }
}

const fn entry(tag: ActionTag) -> Entry {
    use ActionTag::*;

    match tag {
        KeyDc => Entry::new(Some(KeyString), Some(KeyEnter), &[KeyDc]),
        KeyDl => Entry::new(Some(KeyString), Some(KeyEnter), &[]),
        KeyBackspace => Entry::new(Some(KeyString), Some(KeyEnter), &[KeyBackspace]),
        KeyCtlBackspace => Entry::new(Some(KeyString), Some(KeyEnter), &[]),
        KeyString => Entry::new(Some(KeyBackspace), None, &[KeyString]),
        KeyEnter => Entry::new(Some(KeyBackspace), None, &[]),
        IndentTab => Entry::new(Some(KeyBackspace), Some(IndentBtab), &[]),
        IndentBtab => Entry::new(Some(IndentTab), None, &[]),
        KeyRemoveChunk => Entry::new(Some(KeyAddChunk), Some(KeyAddChunk), &[KeyAddChunk]),
        KeyAddChunk => Entry::new(
            Some(KeyRemoveChunk),
            Some(KeyRemoveChunk),
            &[KeyRemoveChunk],
        ),
        KeyReplaceSearch => Entry::new(Some(KeyReplaceSearchReverse), None, &[]),

        // Only ever replayed as an inverse; never recorded itself.
        KeyReplaceSearchReverse => Entry::NONE,

        // Navigation, selection, viewport and commands leave the text alone.
        ActionBackground | ActionCopy | ActionInterrupt | ActionJump | ActionFind
        | ActionInsert | ActionReplace | ActionQuit | ActionReload | ActionSave
        | ActionTransform | ActionPaste | ActionCut | ActionResize => Entry::NONE,
        ScrollKeyLeft | ScrollKeyRight | ScrollKeyUp | ScrollKeyDown | ScrollKeyPageUp
        | ScrollKeyPageDown | ScrollKeyEnd | ScrollKeyHome => Entry::NONE,
        MoveKeyLeft | MoveKeyRight | MoveKeyUp | MoveKeyDown | MoveKeyCtlLeft
        | MoveKeyCtlRight | MoveKeyCtlUp | MoveKeyCtlDown | MoveKeyPageUp | MoveKeyPageDown
        | MoveKeyEnd | MoveKeyCtlEnd | MoveKeyHome | MoveKeyCtlHome => Entry::NONE,
        HistoryUndo | HistoryRedo => Entry::NONE,
        SelectKeyLeft | SelectKeyRight | SelectKeyUp | SelectKeyDown | SelectKeyPageUp
        | SelectKeyPageDown | SelectKeyEnd | SelectKeyHome | SelectKeyAll => Entry::NONE,
        FunctionHelp | FunctionReplace | FunctionSearch | FunctionReplaceR
        | FunctionSearchR => Entry::NONE,
    }
}

/// Inverse of an edit that kept the line count.
#[must_use]
pub const fn reverse_single_line(tag: ActionTag) -> Option<ActionTag> {
    entry(tag).single_line
}

/// Inverse of an edit that added or removed lines.
#[must_use]
pub const fn reverse_multi_line(tag: ActionTag) -> Option<ActionTag> {
    entry(tag).multi_line
}

/// Inverse of an edit, choosing the table by `size_change`.
#[must_use]
pub const fn reverse(tag: ActionTag, size_change: bool) -> Option<ActionTag> {
    if size_change {
        reverse_multi_line(tag)
    } else {
        reverse_single_line(tag)
    }
}

/// Whether either table knows how to reverse `tag`.
#[must_use]
pub const fn is_reversible(tag: ActionTag) -> bool {
    let e = entry(tag);
    e.single_line.is_some() || e.multi_line.is_some()
}

/// Tags that may merge with `tag` into one undo/redo step.
#[must_use]
pub const fn stackable_with(tag: ActionTag) -> &'static [ActionTag] {
    entry(tag).stackable
}

/// Whether `next` is listed as stackable with `prev`.
#[must_use]
pub fn is_stackable(prev: ActionTag, next: ActionTag) -> bool {
    stackable_with(prev).contains(&next)
}
