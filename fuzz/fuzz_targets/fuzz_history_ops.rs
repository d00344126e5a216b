#![no_main]

use arbitrary::Arbitrary;
use catedit_core::{ActionTag, Position};
use catedit_history::undo::{CursorState, Editor, History};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Add {
        tag: u8,
        size_change: bool,
        pre: (u8, u8),
        post: (u8, u8),
        text: String,
    },
    Undo,
    Redo,
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    ops: Vec<Op>,
}

#[derive(Default)]
struct CursorOnly(CursorState);

impl Editor for CursorOnly {
    fn cursor(&self) -> Position {
        self.0.cursor
    }
    fn set_cursor(&mut self, pos: Position) {
        self.0.cursor = pos;
    }
    fn anchor(&self) -> Position {
        self.0.anchor
    }
    fn set_anchor(&mut self, pos: Position) {
        self.0.anchor = pos;
    }
    fn selecting(&self) -> bool {
        self.0.selecting
    }
    fn set_selecting(&mut self, selecting: bool) {
        self.0.selecting = selecting;
    }
}

fn state((row, col): (u8, u8)) -> CursorState {
    CursorState::at(usize::from(row % 8), usize::from(col % 8))
}

fuzz_target!(|input: Input| {
    let mut history = History::with_capacity(usize::from(input.capacity));
    let capacity = history.capacity();
    let mut editor = CursorOnly::default();

    for op in input.ops.iter().take(256) {
        match op {
            Op::Add {
                tag,
                size_change,
                pre,
                post,
                text,
            } => {
                let tag = ActionTag::ALL[usize::from(*tag) % ActionTag::ALL.len()];
                let undo_before = history.undo_depth();
                let redo_before = history.redo_depth();
                let accepted =
                    history.add_parts(tag, *size_change, state(*pre), state(*post), [text.as_str()]);
                if accepted {
                    assert_eq!(history.redo_depth(), 0);
                    assert!(history.can_undo());
                } else {
                    assert_eq!(history.undo_depth(), undo_before);
                    assert_eq!(history.redo_depth(), redo_before);
                }
            }
            Op::Undo => {
                let total = history.undo_depth() + history.redo_depth();
                let _ = history.undo(&mut editor);
                assert!(history.undo_depth() + history.redo_depth() <= total);
            }
            Op::Redo => {
                let before = history.redo_depth();
                let replayed = history.redo(&mut editor);
                assert!(replayed <= before);
            }
            Op::Clear => {
                history.clear();
                assert!(!history.can_undo() && !history.can_redo());
            }
        }

        assert!(history.undo_depth() <= capacity);
        assert!(history.redo_depth() <= capacity);
    }
});
