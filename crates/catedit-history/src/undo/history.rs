#![forbid(unsafe_code)]

//! Bounded undo/redo stacks with greedy merging.
//!
//! [`History`] keeps two stacks of [`ActionRecord`]s, newest at the back.
//! Both are bounded by the same capacity; pushing onto a full stack evicts
//! its oldest record.
//!
//! # Invariants
//!
//! 1. `undo_depth() <= capacity()` and `redo_depth() <= capacity()`.
//! 2. Recording a new edit clears the redo stack.
//! 3. Moving records between stacks during undo/redo never clears either
//!    stack; it only evicts at capacity.
//! 4. A record whose inverse cannot be found is never popped.
//!
//! # Merging
//!
//! One call to [`History::undo`] reverts a whole run of small edits. After
//! the newest record is undone, the next one is merged into the same step
//! while all of these hold:
//!
//! - it ended exactly where the previous one started (`post == pre`),
//! - its tag is stackable with the previous tag,
//! - its whitespace class matches the first record of the run.
//!
//! Typing `cat` then undoing therefore removes the whole word, while typing
//! `cat dog` needs three undos (`dog`, the space, `cat`).
//!
//! ```text
//! add(c) add(a) add(t)
//! ┌─────────────────────────────────────┐
//! │ Undo: [c (0,0)->(0,1), a, t]        │
//! │ Redo: []                            │
//! └─────────────────────────────────────┘
//!
//! undo()  <-- t, a, c merge into one step
//! ┌─────────────────────────────────────┐
//! │ Undo: []                            │
//! │ Redo: [t, a, c]                     │
//! └─────────────────────────────────────┘
//! ```
//!
//! Redo walks the same chain forwards with the forward tags.

use std::collections::VecDeque;
use std::fmt;

use catedit_core::action::ActionTag;
use catedit_core::geometry::Position;

use super::editor::{Editor, dispatch, restore};
use super::record::{ActionRecord, CursorState};
use super::reversal;

/// Default number of records each stack holds.
pub const DEFAULT_CAPACITY: usize = 800;

/// Environment variable read by [`HistoryConfig::from_env`].
pub const CAPACITY_ENV: &str = "CATEDIT_HISTORY_CAPACITY";

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for [`History`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of records per stack. Always at least 1 once
    /// validated.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl HistoryConfig {
    /// Create a configuration with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Set the capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Load config from the environment.
    ///
    /// Reads `CATEDIT_HISTORY_CAPACITY`; values that do not parse as an
    /// unsigned integer are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an injectable lookup.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = get_env(CAPACITY_ENV)
            && let Ok(capacity) = val.trim().parse::<usize>()
        {
            config.capacity = capacity;
        }

        config.validated()
    }

    /// Clamp the capacity to at least 1.
    ///
    /// ```
    /// use catedit_history::undo::HistoryConfig;
    ///
    /// assert_eq!(HistoryConfig::new(0).validated().capacity, 1);
    /// ```
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.capacity = self.capacity.max(1);
        self
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Failures of the history engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// A recorded edit has no inverse for its line-count class.
    ///
    /// This is a consistency failure between what was recorded and the
    /// reversal tables; the record stays on the undo stack.
    Irreversible {
        /// Tag of the offending record.
        tag: ActionTag,
        /// Whether the record changed the line count.
        size_change: bool,
    },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Irreversible { tag, size_change } => {
                let table = if *size_change {
                    "multi-line"
                } else {
                    "single-line"
                };
                write!(f, "no {table} inverse for '{tag}'")
            }
        }
    }
}

impl std::error::Error for HistoryError {}

// ============================================================================
// History
// ============================================================================

/// Undo/redo history of one editor buffer.
#[derive(Clone, Default)]
pub struct History {
    /// Records available for undo (newest at back).
    undo_stack: VecDeque<ActionRecord>,
    /// Records available for redo (newest at back).
    redo_stack: VecDeque<ActionRecord>,
    config: HistoryConfig,
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("undo_depth", &self.undo_stack.len())
            .field("redo_depth", &self.redo_stack.len())
            .field("config", &self.config)
            .finish()
    }
}

impl History {
    /// Create an empty history. The capacity is clamped to at least 1.
    #[must_use]
    pub fn new(config: HistoryConfig) -> Self {
        let config = config.validated();
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            config,
        }
    }

    /// Create an empty history holding at most `capacity` records per stack.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(HistoryConfig::new(capacity))
    }

    // ========================================================================
    // Recording
    // ========================================================================

    /// Record a completed edit.
    ///
    /// Clears the redo stack, then pushes `record`, evicting the oldest undo
    /// record if the stack is full.
    pub fn add(&mut self, record: ActionRecord) {
        self.redo_stack.clear();
        tracing::debug!(
            tag = %record.tag(),
            size_change = record.size_change(),
            depth = self.undo_stack.len() + 1,
            "history add"
        );
        push(&mut self.undo_stack, record, self.config.capacity);
    }

    /// Build a record from its parts and add it.
    ///
    /// Returns `false`, leaving both stacks untouched, when the edit cannot
    /// be recorded: an empty payload, an empty first element or a tag that
    /// no reversal table knows.
    pub fn add_parts<I, S>(
        &mut self,
        tag: ActionTag,
        size_change: bool,
        pre: CursorState,
        post: CursorState,
        payload: I,
    ) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match ActionRecord::new(tag, size_change, pre, post, payload) {
            Some(record) => {
                self.add(record);
                true
            }
            None => {
                tracing::debug!(tag = %tag, "history add rejected");
                false
            }
        }
    }

    // ========================================================================
    // Undo / Redo
    // ========================================================================

    /// Undo the newest edit together with every edit that merges into it.
    ///
    /// Returns the number of records replayed; `Ok(0)` when there is nothing
    /// to undo. Each replayed record moves to the redo stack.
    ///
    /// # Errors
    ///
    /// [`HistoryError::Irreversible`] when a record has no inverse. That
    /// record is left on the undo stack and the editor is not touched for
    /// it; records already replayed in this call stay undone.
    pub fn undo<E: Editor + ?Sized>(&mut self, editor: &mut E) -> Result<usize, HistoryError> {
        let Some(is_space) = self.undo_stack.back().map(ActionRecord::first_is_whitespace) else {
            return Ok(0);
        };

        let mut replayed = 0;
        let mut last: Option<(Position, ActionTag)> = None;

        while let Some(next) = self.undo_stack.back() {
            if let Some((last_pre, last_tag)) = last
                && !merges(
                    last_pre,
                    next.post_cursor(),
                    last_tag,
                    next.tag(),
                    is_space,
                    next.first_is_whitespace(),
                )
            {
                break;
            }

            let Some(inverse) = reversal::reverse(next.tag(), next.size_change()) else {
                let err = HistoryError::Irreversible {
                    tag: next.tag(),
                    size_change: next.size_change(),
                };
                tracing::error!(tag = %next.tag(), size_change = next.size_change(), "{err}");
                return Err(err);
            };

            let Some(record) = self.undo_stack.pop_back() else {
                break;
            };
            tracing::trace!(record = %record, inverse = %inverse, "undo replay");
            restore(editor, record.post());
            dispatch(editor, inverse, record.payload());
            restore(editor, record.pre());

            last = Some((record.pre_cursor(), record.tag()));
            push(&mut self.redo_stack, record, self.config.capacity);
            replayed += 1;
        }

        tracing::debug!(
            merged = replayed,
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "undo"
        );
        Ok(replayed)
    }

    /// Redo the newest undone edit together with every edit that merges
    /// into it.
    ///
    /// Returns the number of records replayed; 0 when there is nothing to
    /// redo. Each replayed record moves back to the undo stack.
    pub fn redo<E: Editor + ?Sized>(&mut self, editor: &mut E) -> usize {
        let Some(is_space) = self.redo_stack.back().map(ActionRecord::first_is_whitespace) else {
            return 0;
        };

        let mut replayed = 0;
        let mut last: Option<(Position, ActionTag)> = None;

        while let Some(next) = self.redo_stack.back() {
            if let Some((last_post, last_tag)) = last
                && !merges(
                    last_post,
                    next.pre_cursor(),
                    next.tag(),
                    last_tag,
                    is_space,
                    next.first_is_whitespace(),
                )
            {
                break;
            }

            let Some(record) = self.redo_stack.pop_back() else {
                break;
            };
            tracing::trace!(record = %record, "redo replay");
            restore(editor, record.pre());
            dispatch(editor, record.tag(), record.payload());
            restore(editor, record.post());

            last = Some((record.post_cursor(), record.tag()));
            push(&mut self.undo_stack, record, self.config.capacity);
            replayed += 1;
        }

        tracing::debug!(
            merged = replayed,
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "redo"
        );
        replayed
    }

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    // ========================================================================
    // Info
    // ========================================================================

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// The record the next undo starts with.
    #[must_use]
    pub fn peek_undo(&self) -> Option<&ActionRecord> {
        self.undo_stack.back()
    }

    /// The record the next redo starts with.
    #[must_use]
    pub fn peek_redo(&self) -> Option<&ActionRecord> {
        self.redo_stack.back()
    }

    /// Rendered undo records, most recent first.
    pub fn undo_descriptions(&self, limit: usize) -> Vec<String> {
        describe(&self.undo_stack, limit)
    }

    /// Rendered redo records, most recent first.
    pub fn redo_descriptions(&self, limit: usize) -> Vec<String> {
        describe(&self.redo_stack, limit)
    }

    /// Maximum records per stack.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    #[must_use]
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Drop both stacks. The capacity is kept.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

/// Push onto a bounded stack, evicting from the front when full.
fn push(stack: &mut VecDeque<ActionRecord>, record: ActionRecord, capacity: usize) {
    while stack.len() >= capacity {
        if stack.pop_front().is_none() {
            break;
        }
    }
    stack.push_back(record);
}

/// Whether a candidate record joins the current run.
///
/// `newer` and `older` are the two tags in chronological order; stackability
/// is looked up on the newer one.
fn merges(
    edge: Position,
    candidate_edge: Position,
    newer: ActionTag,
    older: ActionTag,
    run_is_space: bool,
    candidate_is_space: bool,
) -> bool {
    edge == candidate_edge
        && reversal::is_stackable(newer, older)
        && candidate_is_space == run_is_space
}

fn describe(stack: &VecDeque<ActionRecord>, limit: usize) -> Vec<String> {
    stack.iter().rev().take(limit).map(ToString::to_string).collect()
}

// ============================================================================
// Tests
// ============================================================================
