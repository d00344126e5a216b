#![forbid(unsafe_code)]

//! Hotkey translation: raw key tokens to canonical actions.
//!
//! Terminals disagree about what a key is called. Ctrl+Left arrives as
//! `CTL_LEFT` on Windows consoles, `kLFT5` from xterm and `CTL_PAD4` from the
//! numeric keypad. [`HotkeyTranslator`] folds every alias into one
//! [`ActionTag`], so the editor and the history engine only ever deal with
//! canonical actions.
//!
//! # Key Concepts
//!
//! - **HOTKEYS**: the single immutable `(token, tag)` table. Everything else
//!   in this module is derived from it.
//!
//! - **HotkeyTranslator**: indexed view of the table. One process-wide
//!   instance is built on first use ([`HotkeyTranslator::global`]).
//!
//! - **HotkeyGroups**: the eight behavioral groups (key-edit, indent, action,
//!   scroll, move, history, select, function), computed from the table's
//!   value set via [`ActionTag::group`] rather than maintained by hand.
//!
//! # Example
//!
//! ```
//! use catedit_core::action::{ActionGroup, ActionTag};
//! use catedit_core::keybinding::HotkeyTranslator;
//!
//! let hotkeys = HotkeyTranslator::global();
//!
//! // Three spellings of Ctrl+Left resolve to the same action.
//! for token in ["CTL_LEFT", "kLFT5", "CTL_PAD4"] {
//!     assert_eq!(hotkeys.translate(token), Some(ActionTag::MoveKeyCtlLeft));
//! }
//!
//! // Unknown tokens are a no-op.
//! assert_eq!(hotkeys.translate("KEY_MYSTERY"), None);
//!
//! assert!(hotkeys.groups().contains(ActionGroup::History, ActionTag::HistoryUndo));
//! ```

use std::collections::BTreeSet;
use std::sync::OnceLock;

use ahash::AHashMap;

use crate::action::{ActionGroup, ActionTag};
use crate::event::{KEY_STRING_TOKEN, KeyEvent};

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Every raw token the editor understands, with the action it maps to.
///
/// Comments name the terminal family that emits the alias.
pub const HOTKEYS: &[(&str, ActionTag)] = &[
    // (shift -) newline
    ("^M", ActionTag::KeyEnter),           // CR
    ("^J", ActionTag::KeyEnter),           // LF
    ("PADENTER", ActionTag::KeyEnter),     // numpad
    ("SHF_PADENTER", ActionTag::KeyEnter),
    ("KEY_ENTER", ActionTag::KeyEnter),    // 'fn' mode
    // ctrl - newline
    ("CTL_ENTER", ActionTag::KeyEnter),    // windows
    ("CTL_PADENTER", ActionTag::KeyEnter), // numpad
    // delete
    ("KEY_DC", ActionTag::KeyDc),  // windows & xterm
    ("PADSTOP", ActionTag::KeyDc), // numpad
    // shift - delete
    ("KEY_SDC", ActionTag::KeyDc), // windows & xterm
    // alt - delete
    ("ALT_DEL", ActionTag::KeyDc),     // windows
    ("kDC3", ActionTag::KeyDc),        // xterm
    ("ALT_PADSTOP", ActionTag::KeyDc), // numpad
    // ctrl - delete
    ("CTL_DEL", ActionTag::KeyDl),     // windows
    ("kDC5", ActionTag::KeyDl),        // xterm
    ("CTL_PADSTOP", ActionTag::KeyDl), // numpad
    // (shift -) backspace
    ("^H", ActionTag::KeyBackspace),            // windows (ctrl-backspace on xterm)
    ("KEY_BACKSPACE", ActionTag::KeyBackspace), // xterm
    // alt - backspace
    ("ALT_BKSP", ActionTag::KeyBackspace), // windows
    // ctrl - backspace
    ("^?", ActionTag::KeyCtlBackspace), // windows
    // arrows
    ("KEY_LEFT", ActionTag::MoveKeyLeft), // windows & xterm
    ("KEY_RIGHT", ActionTag::MoveKeyRight),
    ("KEY_UP", ActionTag::MoveKeyUp),
    ("KEY_DOWN", ActionTag::MoveKeyDown),
    ("KEY_B1", ActionTag::MoveKeyLeft), // numpad
    ("KEY_B3", ActionTag::MoveKeyRight),
    ("KEY_A2", ActionTag::MoveKeyUp),
    ("KEY_C2", ActionTag::MoveKeyDown),
    // ctrl - arrows
    ("CTL_LEFT", ActionTag::MoveKeyCtlLeft), // windows
    ("CTL_RIGHT", ActionTag::MoveKeyCtlRight),
    ("CTL_UP", ActionTag::MoveKeyCtlUp),
    ("CTL_DOWN", ActionTag::MoveKeyCtlDown),
    ("kLFT5", ActionTag::MoveKeyCtlLeft), // xterm
    ("kRIT5", ActionTag::MoveKeyCtlRight),
    ("kUP5", ActionTag::MoveKeyCtlUp),
    ("kDN5", ActionTag::MoveKeyCtlDown),
    ("CTL_PAD4", ActionTag::MoveKeyCtlLeft), // numpad
    ("CTL_PAD6", ActionTag::MoveKeyCtlRight),
    ("CTL_PAD8", ActionTag::MoveKeyCtlUp),
    ("CTL_PAD2", ActionTag::MoveKeyCtlDown),
    // shift - arrows
    ("KEY_SLEFT", ActionTag::SelectKeyLeft), // windows
    ("KEY_SRIGHT", ActionTag::SelectKeyRight),
    ("KEY_SUP", ActionTag::SelectKeyUp),
    ("KEY_SDOWN", ActionTag::SelectKeyDown),
    ("KEY_SR", ActionTag::SelectKeyUp), // xterm
    ("KEY_SF", ActionTag::SelectKeyDown),
    // alt - arrows
    ("ALT_LEFT", ActionTag::ScrollKeyLeft), // windows
    ("ALT_RIGHT", ActionTag::ScrollKeyRight),
    ("ALT_UP", ActionTag::ScrollKeyUp),
    ("ALT_DOWN", ActionTag::ScrollKeyDown),
    ("kLFT3", ActionTag::ScrollKeyLeft), // xterm
    ("kRIT3", ActionTag::ScrollKeyRight),
    ("kUP3", ActionTag::ScrollKeyUp),
    ("kDN3", ActionTag::ScrollKeyDown),
    ("ALT_PAD4", ActionTag::ScrollKeyLeft), // numpad
    ("ALT_PAD6", ActionTag::ScrollKeyRight),
    ("ALT_PAD8", ActionTag::ScrollKeyUp),
    ("ALT_PAD2", ActionTag::ScrollKeyDown),
    // page
    ("KEY_PPAGE", ActionTag::MoveKeyPageUp), // windows & xterm
    ("KEY_NPAGE", ActionTag::MoveKeyPageDown),
    ("KEY_A3", ActionTag::MoveKeyPageUp), // numpad
    ("KEY_C3", ActionTag::MoveKeyPageDown),
    // ctrl - page
    ("CTL_PGUP", ActionTag::MoveKeyPageUp), // windows
    ("CTL_PGDN", ActionTag::MoveKeyPageDown),
    ("kPRV5", ActionTag::MoveKeyPageUp), // xterm
    ("kNXT5", ActionTag::MoveKeyPageDown),
    ("CTL_PAD9", ActionTag::MoveKeyPageUp), // numpad
    ("CTL_PAD3", ActionTag::MoveKeyPageDown),
    // shift - page
    ("KEY_SPREVIOUS", ActionTag::SelectKeyPageUp), // windows & xterm
    ("KEY_SNEXT", ActionTag::SelectKeyPageDown),
    // alt - page
    ("ALT_PGUP", ActionTag::ScrollKeyPageUp), // windows
    ("ALT_PGDN", ActionTag::ScrollKeyPageDown),
    ("kPRV3", ActionTag::ScrollKeyPageUp), // xterm
    ("kNXT3", ActionTag::ScrollKeyPageDown),
    ("ALT_PAD9", ActionTag::ScrollKeyPageUp), // numpad
    ("ALT_PAD3", ActionTag::ScrollKeyPageDown),
    // end
    ("KEY_END", ActionTag::MoveKeyEnd), // windows & xterm
    ("KEY_C1", ActionTag::MoveKeyEnd),  // numpad
    // ctrl - end
    ("CTL_END", ActionTag::MoveKeyCtlEnd),  // windows
    ("kEND5", ActionTag::MoveKeyCtlEnd),    // xterm
    ("CTL_PAD1", ActionTag::MoveKeyCtlEnd), // numpad
    // shift - end
    ("KEY_SEND", ActionTag::SelectKeyEnd), // windows & xterm
    // alt - end
    ("ALT_END", ActionTag::ScrollKeyEnd),  // windows
    ("kEND3", ActionTag::ScrollKeyEnd),    // xterm
    ("ALT_PAD1", ActionTag::ScrollKeyEnd), // numpad
    // pos/home
    ("KEY_HOME", ActionTag::MoveKeyHome), // windows & xterm
    ("KEY_A1", ActionTag::MoveKeyHome),   // numpad
    // ctrl - pos/home
    ("CTL_HOME", ActionTag::MoveKeyCtlHome), // windows
    ("kHOM5", ActionTag::MoveKeyCtlHome),    // xterm
    ("CTL_PAD7", ActionTag::MoveKeyCtlHome), // numpad
    // shift - pos/home
    ("KEY_SHOME", ActionTag::SelectKeyHome), // windows & xterm
    // alt - pos/home
    ("ALT_HOME", ActionTag::ScrollKeyHome), // windows
    ("kHOM3", ActionTag::ScrollKeyHome),    // xterm
    ("ALT_PAD7", ActionTag::ScrollKeyHome), // numpad
    // (shift +) tab
    ("^I", ActionTag::IndentTab),
    ("KEY_BTAB", ActionTag::IndentBtab), // windows & xterm
    // default alnum key
    (KEY_STRING_TOKEN, ActionTag::KeyString),
    // history
    ("^Z", ActionTag::HistoryUndo),
    ("^Y", ActionTag::HistoryRedo),
    // selection
    ("^A", ActionTag::SelectKeyAll),
    // actions
    ("^B", ActionTag::ActionBackground),
    ("^C", ActionTag::ActionCopy),
    ("^D", ActionTag::ActionInterrupt),
    ("^E", ActionTag::ActionJump),
    ("^F", ActionTag::ActionFind),
    ("^N", ActionTag::ActionInsert),
    ("^P", ActionTag::ActionReplace),
    ("^Q", ActionTag::ActionQuit),
    ("^R", ActionTag::ActionReload),
    ("^S", ActionTag::ActionSave),
    ("ALT_S", ActionTag::ActionSave),
    ("^T", ActionTag::ActionTransform),
    ("^V", ActionTag::ActionPaste),
    ("^X", ActionTag::ActionCut),
    ("KEY_RESIZE", ActionTag::ActionResize),
    // function keys
    ("KEY_F(1)", ActionTag::FunctionHelp),
    ("KEY_F(2)", ActionTag::FunctionReplace),
    ("KEY_F(3)", ActionTag::FunctionSearch),
    ("KEY_F(14)", ActionTag::FunctionReplaceR),
    ("KEY_F(15)", ActionTag::FunctionSearchR),
];

/// Keys accepted when editing a byte in hex mode.
pub const HEX_BYTE_KEYS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Check whether `c` is a hex digit key (either case).
#[must_use]
pub fn is_hex_byte_key(c: char) -> bool {
    HEX_BYTE_KEYS.contains(&c.to_ascii_uppercase())
}

// ---------------------------------------------------------------------------
// Derived groups
// ---------------------------------------------------------------------------

/// The table's value set, partitioned by [`ActionGroup`].
///
/// Built from [`HOTKEYS`] once; the sets are disjoint because every tag has
/// exactly one group.
#[derive(Debug, Clone, Default)]
pub struct HotkeyGroups {
    sets: [BTreeSet<ActionTag>; 8],
}

impl HotkeyGroups {
    /// Partition a table's values by group.
    #[must_use]
    pub fn from_table(table: &[(&str, ActionTag)]) -> Self {
        let mut groups = Self::default();
        for &(_, tag) in table {
            groups.sets[Self::slot(tag.group())].insert(tag);
        }
        groups
    }

    fn slot(group: ActionGroup) -> usize {
        ActionGroup::ALL
            .iter()
            .position(|g| *g == group)
            .unwrap_or_default()
    }

    /// All tags of one group.
    #[must_use]
    pub fn group(&self, group: ActionGroup) -> &BTreeSet<ActionTag> {
        &self.sets[Self::slot(group)]
    }

    /// Check whether `tag` is bound to a key and belongs to `group`.
    #[must_use]
    pub fn contains(&self, group: ActionGroup, tag: ActionTag) -> bool {
        self.group(group).contains(&tag)
    }

    /// Tags that insert literal text or otherwise edit the buffer directly.
    #[must_use]
    pub fn key(&self) -> &BTreeSet<ActionTag> {
        self.group(ActionGroup::Key)
    }

    /// Indent / outdent tags.
    #[must_use]
    pub fn indent(&self) -> &BTreeSet<ActionTag> {
        self.group(ActionGroup::Indent)
    }

    /// Explicit command tags.
    #[must_use]
    pub fn action(&self) -> &BTreeSet<ActionTag> {
        self.group(ActionGroup::Action)
    }

    /// Viewport scroll tags.
    #[must_use]
    pub fn scroll(&self) -> &BTreeSet<ActionTag> {
        self.group(ActionGroup::Scroll)
    }

    /// Cursor movement tags.
    #[must_use]
    pub fn movement(&self) -> &BTreeSet<ActionTag> {
        self.group(ActionGroup::Move)
    }

    /// Undo / redo tags.
    #[must_use]
    pub fn history(&self) -> &BTreeSet<ActionTag> {
        self.group(ActionGroup::History)
    }

    /// Selection tags.
    #[must_use]
    pub fn select(&self) -> &BTreeSet<ActionTag> {
        self.group(ActionGroup::Select)
    }

    /// Function-key tags.
    #[must_use]
    pub fn function(&self) -> &BTreeSet<ActionTag> {
        self.group(ActionGroup::Function)
    }

    /// Total number of distinct tags across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.iter().map(BTreeSet::len).sum()
    }

    /// Check if no tags are grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Translator
// ---------------------------------------------------------------------------

/// Maps raw key tokens to canonical [`ActionTag`]s.
///
/// The translator is immutable after construction. Use
/// [`HotkeyTranslator::global`] for the shared instance built from
/// [`HOTKEYS`].
#[derive(Debug, Clone)]
pub struct HotkeyTranslator {
    index: AHashMap<&'static str, ActionTag>,
    groups: HotkeyGroups,
}

impl Default for HotkeyTranslator {
    fn default() -> Self {
        Self::from_table(HOTKEYS)
    }
}

impl HotkeyTranslator {
    /// Build a translator from a `(token, tag)` table.
    ///
    /// Later entries win if a token appears twice.
    #[must_use]
    pub fn from_table(table: &[(&'static str, ActionTag)]) -> Self {
        let index: AHashMap<_, _> = table.iter().copied().collect();
        Self {
            index,
            groups: HotkeyGroups::from_table(table),
        }
    }

    /// The process-wide translator built from [`HOTKEYS`].
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<HotkeyTranslator> = OnceLock::new();
        GLOBAL.get_or_init(Self::default)
    }

    /// Translate a raw token. `None` means the key does nothing.
    #[must_use]
    pub fn translate(&self, token: &str) -> Option<ActionTag> {
        let tag = self.index.get(token).copied();
        if tag.is_none() {
            log_unmapped(token);
        }
        tag
    }

    /// Translate a typed key event through its canonical token.
    #[must_use]
    pub fn translate_event(&self, event: &KeyEvent) -> Option<ActionTag> {
        self.translate(&event.token())
    }

    /// The group of the action a token maps to, if any.
    #[must_use]
    pub fn group_of(&self, token: &str) -> Option<ActionGroup> {
        self.translate(token).map(ActionTag::group)
    }

    /// The derived groups of this translator's value set.
    #[must_use]
    pub fn groups(&self) -> &HotkeyGroups {
        &self.groups
    }

    /// Every token bound to `tag`, sorted.
    #[must_use]
    pub fn aliases(&self, tag: ActionTag) -> Vec<&'static str> {
        let mut tokens: Vec<_> = self
            .index
            .iter()
            .filter(|(_, t)| **t == tag)
            .map(|(token, _)| *token)
            .collect();
        tokens.sort_unstable();
        tokens
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the translator has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(feature = "tracing")]
fn log_unmapped(token: &str) {
    tracing::trace!(token, "unmapped hotkey token");
}

#[cfg(not(feature = "tracing"))]
fn log_unmapped(_token: &str) {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyCode, Modifiers};

    fn hotkeys() -> &'static HotkeyTranslator {
        HotkeyTranslator::global()
    }

    #[test]
    fn table_tokens_are_unique() {
        let mut tokens: Vec<_> = HOTKEYS.iter().map(|(t, _)| *t).collect();
        tokens.sort_unstable();
        let before = tokens.len();
        tokens.dedup();
        assert_eq!(before, tokens.len(), "duplicate token in HOTKEYS");
        assert_eq!(hotkeys().len(), HOTKEYS.len());
    }

    #[test]
    fn ctrl_left_aliases_agree() {
        for token in ["CTL_LEFT", "kLFT5", "CTL_PAD4"] {
            assert_eq!(hotkeys().translate(token), Some(ActionTag::MoveKeyCtlLeft));
        }
    }

    #[test]
    fn enter_aliases_agree() {
        for token in [
            "^M",
            "^J",
            "PADENTER",
            "SHF_PADENTER",
            "KEY_ENTER",
            "CTL_ENTER",
            "CTL_PADENTER",
        ] {
            assert_eq!(hotkeys().translate(token), Some(ActionTag::KeyEnter));
        }
    }

    #[test]
    fn delete_family() {
        assert_eq!(hotkeys().translate("kDC3"), Some(ActionTag::KeyDc));
        assert_eq!(hotkeys().translate("kDC5"), Some(ActionTag::KeyDl));
        assert_eq!(hotkeys().translate("^?"), Some(ActionTag::KeyCtlBackspace));
        assert_eq!(hotkeys().translate("^H"), Some(ActionTag::KeyBackspace));
    }

    #[test]
    fn unknown_token_is_noop() {
        assert_eq!(hotkeys().translate("KEY_F(9)"), None);
        assert_eq!(hotkeys().translate(""), None);
        assert_eq!(hotkeys().group_of("nope"), None);
    }

    #[test]
    fn typed_events_reach_the_table() {
        let ctrl_left = KeyEvent::new(KeyCode::Left).with_modifiers(Modifiers::CTRL);
        assert_eq!(
            hotkeys().translate_event(&ctrl_left),
            Some(ActionTag::MoveKeyCtlLeft)
        );

        let undo = KeyEvent::new(KeyCode::Char('z')).with_modifiers(Modifiers::CTRL);
        assert_eq!(hotkeys().translate_event(&undo), Some(ActionTag::HistoryUndo));

        let typed = KeyEvent::new(KeyCode::Char('q'));
        assert_eq!(hotkeys().translate_event(&typed), Some(ActionTag::KeyString));

        let search_r = KeyEvent::new(KeyCode::F(3)).with_modifiers(Modifiers::SHIFT);
        assert_eq!(
            hotkeys().translate_event(&search_r),
            Some(ActionTag::FunctionSearchR)
        );
    }

    #[test]
    fn groups_are_derived_from_values() {
        let groups = hotkeys().groups();
        assert!(groups.key().contains(&ActionTag::KeyString));
        assert!(groups.indent().contains(&ActionTag::IndentBtab));
        assert!(groups.action().contains(&ActionTag::ActionResize));
        assert!(groups.scroll().contains(&ActionTag::ScrollKeyHome));
        assert!(groups.movement().contains(&ActionTag::MoveKeyCtlEnd));
        assert!(groups.history().contains(&ActionTag::HistoryRedo));
        assert!(groups.select().contains(&ActionTag::SelectKeyAll));
        assert!(groups.function().contains(&ActionTag::FunctionHelp));

        // Tags with no key binding do not appear in any group.
        assert!(!groups.key().contains(&ActionTag::KeyAddChunk));
    }

    #[test]
    fn groups_are_disjoint_and_cover_every_value() {
        let groups = hotkeys().groups();
        let values: BTreeSet<_> = HOTKEYS.iter().map(|(_, tag)| *tag).collect();
        assert_eq!(groups.len(), values.len());
        for tag in values {
            let hits = ActionGroup::ALL
                .iter()
                .filter(|g| groups.contains(**g, tag))
                .count();
            assert_eq!(hits, 1, "{tag} must be in exactly one group");
        }
    }

    #[test]
    fn aliases_lists_every_token() {
        let aliases = hotkeys().aliases(ActionTag::ActionSave);
        assert_eq!(aliases, vec!["ALT_S", "^S"]);
        assert!(hotkeys().aliases(ActionTag::KeyRemoveChunk).is_empty());
    }

    #[test]
    fn custom_table() {
        let translator = HotkeyTranslator::from_table(&[("X", ActionTag::ActionQuit)]);
        assert_eq!(translator.translate("X"), Some(ActionTag::ActionQuit));
        assert_eq!(translator.translate("^Q"), None);
        assert_eq!(translator.groups().len(), 1);
    }

    #[test]
    fn hex_keys() {
        assert!(is_hex_byte_key('a'));
        assert!(is_hex_byte_key('F'));
        assert!(is_hex_byte_key('0'));
        assert!(!is_hex_byte_key('g'));
        assert!(!is_hex_byte_key(' '));
    }
}
