//! Property-based invariant tests for the history engine.
//!
//! 1. Neither stack ever exceeds the capacity.
//! 2. Rejected edits leave both stacks untouched.
//! 3. Undo followed by redo returns the cursor state to where it was and
//!    restores both stack depths.
//! 4. Undo/redo on an empty stack changes nothing.
//! 5. Every undo step replays at least one record while records remain.

use catedit_core::{ActionTag, Position};
use catedit_history::undo::{CursorState, Editor, History, capture, reversal};
use proptest::prelude::*;

/// Editor that only tracks cursor state.
#[derive(Debug, Default)]
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

// ── Strategies ──────────────────────────────────────────────────────────

/// Tags that have a single-line inverse, so `size_change = false` records
/// always undo cleanly.
fn single_line_tag() -> impl Strategy<Value = ActionTag> {
    let tags: Vec<ActionTag> = ActionTag::ALL
        .iter()
        .copied()
        .filter(|t| reversal::reverse_single_line(*t).is_some())
        .collect();
    proptest::sample::select(tags)
}

fn state_strategy() -> impl Strategy<Value = CursorState> {
    (0usize..4, 0usize..6, 0usize..4, 0usize..6, any::<bool>()).prop_map(
        |(r, c, ar, ac, selecting)| {
            CursorState::new(Position::new(r, c), Position::new(ar, ac), selecting)
        },
    )
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("\t".to_string()),
        "[a-z]{1,3}",
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Add(ActionTag, CursorState, CursorState, String),
    Undo,
    Redo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (single_line_tag(), state_strategy(), state_strategy(), text_strategy())
            .prop_map(|(t, pre, post, s)| Op::Add(t, pre, post, s)),
        1 => Just(Op::Undo),
        1 => Just(Op::Redo),
    ]
}

fn apply(history: &mut History, editor: &mut CursorOnly, op: &Op) {
    match op {
        Op::Add(tag, pre, post, text) => {
            history.add_parts(*tag, false, *pre, *post, [text.as_str()]);
        }
        Op::Undo => {
            let _ = history.undo(editor);
        }
        Op::Redo => {
            history.redo(editor);
        }
    }
}

// ── Invariants ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn stacks_never_exceed_capacity(
        capacity in 1usize..8,
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let mut history = History::with_capacity(capacity);
        let mut editor = CursorOnly::default();
        for op in &ops {
            apply(&mut history, &mut editor, op);
            prop_assert!(history.undo_depth() <= capacity);
            prop_assert!(history.redo_depth() <= capacity);
        }
    }

    #[test]
    fn rejected_adds_change_nothing(
        ops in prop::collection::vec(op_strategy(), 0..32),
        pre in state_strategy(),
        post in state_strategy(),
    ) {
        let mut history = History::default();
        let mut editor = CursorOnly::default();
        for op in &ops {
            apply(&mut history, &mut editor, op);
        }
        let before = (history.undo_descriptions(usize::MAX), history.redo_descriptions(usize::MAX));

        prop_assert!(!history.add_parts(ActionTag::KeyString, false, pre, post, [""]));
        prop_assert!(!history.add_parts(ActionTag::MoveKeyUp, false, pre, post, ["x"]));
        let none: [&str; 0] = [];
        prop_assert!(!history.add_parts(ActionTag::KeyBackspace, false, pre, post, none));

        let after = (history.undo_descriptions(usize::MAX), history.redo_descriptions(usize::MAX));
        prop_assert_eq!(before, after);
    }

    #[test]
    fn undo_then_redo_round_trips(
        ops in prop::collection::vec(op_strategy(), 1..48),
    ) {
        let mut history = History::default();
        let mut editor = CursorOnly::default();
        for op in &ops {
            apply(&mut history, &mut editor, op);
        }
        prop_assume!(history.can_undo());

        let top = *history.peek_undo().unwrap().post();
        let depths = (history.undo_depth(), history.redo_depth());

        let undone = history.undo(&mut editor).unwrap();
        prop_assert!(undone >= 1);
        let redone = history.redo(&mut editor);

        prop_assert_eq!(undone, redone);
        prop_assert_eq!(capture(&editor), top);
        prop_assert_eq!((history.undo_depth(), history.redo_depth()), depths);
    }

    #[test]
    fn empty_stacks_are_noops(start in state_strategy()) {
        let mut history = History::default();
        let mut editor = CursorOnly(start);
        prop_assert_eq!(history.undo(&mut editor), Ok(0));
        prop_assert_eq!(history.redo(&mut editor), 0);
        prop_assert_eq!(capture(&editor), start);
    }

    #[test]
    fn undo_drains_in_bounded_steps(
        ops in prop::collection::vec(op_strategy(), 0..48),
    ) {
        let mut history = History::default();
        let mut editor = CursorOnly::default();
        for op in &ops {
            apply(&mut history, &mut editor, op);
        }
        let total = history.undo_depth();
        let mut replayed = 0;
        let mut steps = 0;
        while history.can_undo() {
            let n = history.undo(&mut editor).unwrap();
            prop_assert!(n >= 1);
            replayed += n;
            steps += 1;
            prop_assert!(steps <= total);
        }
        prop_assert_eq!(replayed, total);
    }
}
