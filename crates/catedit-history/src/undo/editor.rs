#![forbid(unsafe_code)]

//! The editor capability surface the history engine replays through.
//!
//! The history engine never touches the text buffer. To undo or redo it
//! moves the editor's cursor state and then calls the editor operation named
//! by an [`ActionTag`], passing the record's payload. [`Editor`] is that
//! surface: six required accessors for the cursor state and one provided
//! method per replayable action.
//!
//! Every action method defaults to a no-op, so an editor that only
//! implements a subset still replays without failing; the unimplemented
//! actions are skipped.

use catedit_core::action::ActionTag;
use catedit_core::geometry::Position;

use super::record::CursorState;

/// Operations an editor exposes to the history engine.
///
/// Each action method receives the record payload as positional strings.
pub trait Editor {
    /// Current cursor position.
    fn cursor(&self) -> Position;

    /// Move the cursor.
    fn set_cursor(&mut self, pos: Position);

    /// Current selection anchor.
    fn anchor(&self) -> Position;

    /// Move the selection anchor.
    fn set_anchor(&mut self, pos: Position);

    /// Whether a selection is active.
    fn selecting(&self) -> bool;

    /// Enter or leave selection mode.
    fn set_selecting(&mut self, selecting: bool);

    /// Insert literal text at the cursor.
    fn key_string(&mut self, _payload: &[String]) {}

    /// Split the line at the cursor.
    fn key_enter(&mut self, _payload: &[String]) {}

    /// Delete left of the cursor.
    fn key_backspace(&mut self, _payload: &[String]) {}

    /// Delete the word left of the cursor.
    fn key_ctl_backspace(&mut self, _payload: &[String]) {}

    /// Delete under the cursor.
    fn key_dc(&mut self, _payload: &[String]) {}

    /// Delete the word right of the cursor.
    fn key_dl(&mut self, _payload: &[String]) {}

    /// Indent.
    fn indent_tab(&mut self, _payload: &[String]) {}

    /// Outdent.
    fn indent_btab(&mut self, _payload: &[String]) {}

    /// Remove a chunk of text (selection delete, cut).
    fn key_remove_chunk(&mut self, _payload: &[String]) {}

    /// Insert a chunk of text (paste).
    fn key_add_chunk(&mut self, _payload: &[String]) {}

    /// Replace a search hit.
    fn key_replace_search(&mut self, _payload: &[String]) {}

    /// Put a replaced search hit back.
    fn key_replace_search_reverse(&mut self, _payload: &[String]) {}
}

/// Invoke the editor operation named by `tag`.
///
/// Returns `false` when `tag` names no editor operation; nothing happens in
/// that case.
pub fn dispatch<E: Editor + ?Sized>(editor: &mut E, tag: ActionTag, payload: &[String]) -> bool {
    match tag {
        ActionTag::KeyString => editor.key_string(payload),
        ActionTag::KeyEnter => editor.key_enter(payload),
        ActionTag::KeyBackspace => editor.key_backspace(payload),
        ActionTag::KeyCtlBackspace => editor.key_ctl_backspace(payload),
        ActionTag::KeyDc => editor.key_dc(payload),
        ActionTag::KeyDl => editor.key_dl(payload),
        ActionTag::IndentTab => editor.indent_tab(payload),
        ActionTag::IndentBtab => editor.indent_btab(payload),
        ActionTag::KeyRemoveChunk => editor.key_remove_chunk(payload),
        ActionTag::KeyAddChunk => editor.key_add_chunk(payload),
        ActionTag::KeyReplaceSearch => editor.key_replace_search(payload),
        ActionTag::KeyReplaceSearchReverse => editor.key_replace_search_reverse(payload),
        _ => return false,
    }
    true
}

/// Snapshot the editor's cursor state.
#[must_use]
pub fn capture<E: Editor + ?Sized>(editor: &E) -> CursorState {
    CursorState::new(editor.cursor(), editor.anchor(), editor.selecting())
}

/// Force the editor's cursor state to `state`.
pub fn restore<E: Editor + ?Sized>(editor: &mut E, state: &CursorState) {
    editor.set_cursor(state.cursor);
    editor.set_anchor(state.anchor);
    editor.set_selecting(state.selecting);
}
