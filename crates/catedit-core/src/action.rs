#![forbid(unsafe_code)]

//! Canonical action vocabulary.
//!
//! Every key the editor understands resolves to exactly one [`ActionTag`].
//! The tag is the only identifier the history engine sees; it never learns
//! which physical key (or which terminal's alias for that key) produced it.
//!
//! # Wire names
//!
//! Each tag has a stable string name (`"key_string"`, `"move_key_ctl_left"`,
//! ...). The name's prefix decides the tag's [`ActionGroup`], so the grouping
//! can never drift from the vocabulary:
//!
//! | Prefix | Group |
//! |--------|-------|
//! | `key_` | [`ActionGroup::Key`] |
//! | `indent_` | [`ActionGroup::Indent`] |
//! | `action_` | [`ActionGroup::Action`] |
//! | `scroll_` | [`ActionGroup::Scroll`] |
//! | `move_` | [`ActionGroup::Move`] |
//! | `history_` | [`ActionGroup::History`] |
//! | `select_` | [`ActionGroup::Select`] |
//! | `function_` | [`ActionGroup::Function`] |

use std::fmt;
use std::str::FromStr;

macro_rules! action_tags {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, )+) => {
        /// A canonical edit action, independent of the key that produced it.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ActionTag {
            $( $(#[$doc])* $variant, )+
        }

        impl ActionTag {
            /// Every tag, in declaration order.
            pub const ALL: &'static [ActionTag] = &[ $( ActionTag::$variant, )+ ];

            /// Stable wire name of the tag.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( ActionTag::$variant => $name, )+
                }
            }
        }

        impl FromStr for ActionTag {
            type Err = ParseActionTagError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok(ActionTag::$variant), )+
                    _ => Err(ParseActionTagError(s.to_string())),
                }
            }
        }
    };
}

action_tags! {
    // -- literal edits --
    /// Insert literal text at the cursor.
    KeyString => "key_string",
    /// Split the line at the cursor.
    KeyEnter => "key_enter",
    /// Delete the character under the cursor.
    KeyDc => "key_dc",
    /// Delete the word right of the cursor.
    KeyDl => "key_dl",
    /// Delete the character left of the cursor.
    KeyBackspace => "key_backspace",
    /// Delete the word left of the cursor.
    KeyCtlBackspace => "key_ctl_backspace",
    /// Remove a selected chunk of text.
    KeyRemoveChunk => "key_remove_chunk",
    /// Insert a chunk of text (paste, replace).
    KeyAddChunk => "key_add_chunk",
    /// Replace a search hit.
    KeyReplaceSearch => "key_replace_search",
    /// Revert a search-hit replacement.
    KeyReplaceSearchReverse => "key_replace_search_reverse",

    // -- indentation --
    /// Indent (tab).
    IndentTab => "indent_tab",
    /// Outdent (shift+tab).
    IndentBtab => "indent_btab",

    // -- explicit actions --
    ActionBackground => "action_background",
    ActionCopy => "action_copy",
    ActionInterrupt => "action_interrupt",
    ActionJump => "action_jump",
    ActionFind => "action_find",
    ActionInsert => "action_insert",
    ActionReplace => "action_replace",
    ActionQuit => "action_quit",
    ActionReload => "action_reload",
    ActionSave => "action_save",
    ActionTransform => "action_transform",
    ActionPaste => "action_paste",
    ActionCut => "action_cut",
    ActionResize => "action_resize",

    // -- viewport scrolling (cursor stays put) --
    ScrollKeyLeft => "scroll_key_left",
    ScrollKeyRight => "scroll_key_right",
    ScrollKeyUp => "scroll_key_up",
    ScrollKeyDown => "scroll_key_down",
    ScrollKeyPageUp => "scroll_key_page_up",
    ScrollKeyPageDown => "scroll_key_page_down",
    ScrollKeyEnd => "scroll_key_end",
    ScrollKeyHome => "scroll_key_home",

    // -- cursor movement --
    MoveKeyLeft => "move_key_left",
    MoveKeyRight => "move_key_right",
    MoveKeyUp => "move_key_up",
    MoveKeyDown => "move_key_down",
    MoveKeyCtlLeft => "move_key_ctl_left",
    MoveKeyCtlRight => "move_key_ctl_right",
    MoveKeyCtlUp => "move_key_ctl_up",
    MoveKeyCtlDown => "move_key_ctl_down",
    MoveKeyPageUp => "move_key_page_up",
    MoveKeyPageDown => "move_key_page_down",
    MoveKeyEnd => "move_key_end",
    MoveKeyCtlEnd => "move_key_ctl_end",
    MoveKeyHome => "move_key_home",
    MoveKeyCtlHome => "move_key_ctl_home",

    // -- history control --
    HistoryUndo => "history_undo",
    HistoryRedo => "history_redo",

    // -- selection --
    SelectKeyLeft => "select_key_left",
    SelectKeyRight => "select_key_right",
    SelectKeyUp => "select_key_up",
    SelectKeyDown => "select_key_down",
    SelectKeyPageUp => "select_key_page_up",
    SelectKeyPageDown => "select_key_page_down",
    SelectKeyEnd => "select_key_end",
    SelectKeyHome => "select_key_home",
    SelectKeyAll => "select_key_all",

    // -- function keys --
    FunctionHelp => "function_help",
    FunctionReplace => "function_replace",
    FunctionSearch => "function_search",
    FunctionReplaceR => "function_replace_r",
    FunctionSearchR => "function_search_r",
}

impl ActionTag {
    /// The group this tag belongs to, derived from its wire-name prefix.
    #[must_use]
    pub fn group(self) -> ActionGroup {
        let name = self.as_str();
        ActionGroup::ALL
            .iter()
            .copied()
            .find(|group| name.starts_with(group.prefix()))
            .unwrap_or(ActionGroup::Key)
    }

    /// True for tags that change buffer contents when applied.
    #[must_use]
    pub fn is_edit(self) -> bool {
        matches!(self.group(), ActionGroup::Key | ActionGroup::Indent)
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown action wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseActionTagError(pub String);

impl fmt::Display for ParseActionTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action tag '{}'", self.0)
    }
}

impl std::error::Error for ParseActionTagError {}

/// Behavioral class of an [`ActionTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionGroup {
    /// Literal text edits (insert, delete, newline).
    Key,
    /// Indent / outdent.
    Indent,
    /// Explicit commands (save, copy, find, ...).
    Action,
    /// Viewport scroll without moving the cursor.
    Scroll,
    /// Cursor movement.
    Move,
    /// Undo / redo.
    History,
    /// Selection extension.
    Select,
    /// Function-key commands.
    Function,
}

impl ActionGroup {
    /// Every group, in declaration order.
    pub const ALL: [ActionGroup; 8] = [
        ActionGroup::Key,
        ActionGroup::Indent,
        ActionGroup::Action,
        ActionGroup::Scroll,
        ActionGroup::Move,
        ActionGroup::History,
        ActionGroup::Select,
        ActionGroup::Function,
    ];

    /// Wire-name prefix shared by every tag of this group.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Key => "key_",
            Self::Indent => "indent_",
            Self::Action => "action_",
            Self::Scroll => "scroll_",
            Self::Move => "move_",
            Self::History => "history_",
            Self::Select => "select_",
            Self::Function => "function_",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for &tag in ActionTag::ALL {
            assert_eq!(tag.as_str().parse::<ActionTag>(), Ok(tag));
        }
    }

    #[test]
    fn wire_names_are_unique() {
        let mut names: Vec<_> = ActionTag::ALL.iter().map(|t| t.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ActionTag::ALL.len());
    }

    #[test]
    fn every_tag_has_a_matching_prefix() {
        for &tag in ActionTag::ALL {
            let matching = ActionGroup::ALL
                .iter()
                .filter(|g| tag.as_str().starts_with(g.prefix()))
                .count();
            assert_eq!(matching, 1, "{tag} should match exactly one group prefix");
        }
    }

    #[test]
    fn groups_follow_prefixes() {
        assert_eq!(ActionTag::KeyString.group(), ActionGroup::Key);
        assert_eq!(ActionTag::KeyReplaceSearchReverse.group(), ActionGroup::Key);
        assert_eq!(ActionTag::IndentBtab.group(), ActionGroup::Indent);
        assert_eq!(ActionTag::ActionSave.group(), ActionGroup::Action);
        assert_eq!(ActionTag::ScrollKeyHome.group(), ActionGroup::Scroll);
        assert_eq!(ActionTag::MoveKeyCtlLeft.group(), ActionGroup::Move);
        assert_eq!(ActionTag::HistoryRedo.group(), ActionGroup::History);
        assert_eq!(ActionTag::SelectKeyAll.group(), ActionGroup::Select);
        assert_eq!(ActionTag::FunctionSearchR.group(), ActionGroup::Function);
    }

    #[test]
    fn edit_tags() {
        assert!(ActionTag::KeyBackspace.is_edit());
        assert!(ActionTag::IndentTab.is_edit());
        assert!(!ActionTag::MoveKeyLeft.is_edit());
        assert!(!ActionTag::HistoryUndo.is_edit());
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "key_teleport".parse::<ActionTag>().unwrap_err();
        assert_eq!(err, ParseActionTagError("key_teleport".to_string()));
        assert_eq!(err.to_string(), "unknown action tag 'key_teleport'");
    }

    #[test]
    fn display_uses_wire_name() {
        assert_eq!(ActionTag::MoveKeyPageDown.to_string(), "move_key_page_down");
    }
}
