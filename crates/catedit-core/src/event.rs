#![forbid(unsafe_code)]

//! Raw key events and their canonical token names.
//!
//! The terminal input layer hands the editor symbolic token names such as
//! `"KEY_LEFT"`, `"kLFT5"` or `"^Z"`. Those names are the raw input alphabet
//! that [`crate::keybinding::HotkeyTranslator`] understands. This module
//! provides a typed front for the same alphabet: a [`KeyEvent`] renders to
//! one canonical token via [`KeyEvent::token`], so callers that build events
//! in code and callers that forward terminal strings reach the same table.
//!
//! # Design Notes
//!
//! - Printable characters without Ctrl/Alt all render as the literal-text
//!   sentinel [`KEY_STRING_TOKEN`]; the character itself travels in the
//!   action payload, not in the token.
//! - Shifted function keys follow the curses convention (Shift+F2 = F14).
//! - `keypad` marks keys that came from the numeric keypad; it only changes
//!   the token for unmodified keys, matching the aliases terminals emit.

use bitflags::bitflags;

/// Token emitted for any printable character typed without Ctrl or Alt.
pub const KEY_STRING_TOKEN: &str = "_key_string";

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// True if the key came from the numeric keypad.
    pub keypad: bool,
}

impl KeyEvent {
    /// Create a new key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            keypad: false,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Mark the event as coming from the numeric keypad.
    #[must_use]
    pub const fn from_keypad(mut self) -> Self {
        self.keypad = true;
        self
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Alt modifier is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Check if Shift modifier is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Render the canonical raw token for this event.
    ///
    /// Ctrl takes precedence over Alt, and Alt over Shift, when several
    /// modifiers are held.
    #[must_use]
    pub fn token(&self) -> String {
        match self.code {
            KeyCode::Char(c) => self.char_token(c),
            KeyCode::Enter => self.enter_token().to_string(),
            KeyCode::Backspace => {
                if self.ctrl() {
                    "^?".to_string()
                } else if self.alt() {
                    "ALT_BKSP".to_string()
                } else {
                    "KEY_BACKSPACE".to_string()
                }
            }
            KeyCode::Tab if self.shift() => "KEY_BTAB".to_string(),
            KeyCode::Tab => "^I".to_string(),
            KeyCode::BackTab => "KEY_BTAB".to_string(),
            KeyCode::Delete => self.delete_token().to_string(),
            KeyCode::Left => self.arrow_token("LEFT", "KEY_SLEFT", "KEY_B1"),
            KeyCode::Right => self.arrow_token("RIGHT", "KEY_SRIGHT", "KEY_B3"),
            KeyCode::Up => self.arrow_token("UP", "KEY_SUP", "KEY_A2"),
            KeyCode::Down => self.arrow_token("DOWN", "KEY_SDOWN", "KEY_C2"),
            KeyCode::PageUp => {
                self.nav_token("CTL_PGUP", "ALT_PGUP", "KEY_SPREVIOUS", "KEY_PPAGE", "KEY_A3")
            }
            KeyCode::PageDown => {
                self.nav_token("CTL_PGDN", "ALT_PGDN", "KEY_SNEXT", "KEY_NPAGE", "KEY_C3")
            }
            KeyCode::Home => {
                self.nav_token("CTL_HOME", "ALT_HOME", "KEY_SHOME", "KEY_HOME", "KEY_A1")
            }
            KeyCode::End => self.nav_token("CTL_END", "ALT_END", "KEY_SEND", "KEY_END", "KEY_C1"),
            KeyCode::F(n) => {
                let n = if self.shift() { n.saturating_add(12) } else { n };
                format!("KEY_F({n})")
            }
            KeyCode::Resize => "KEY_RESIZE".to_string(),
        }
    }

    fn char_token(&self, c: char) -> String {
        if self.ctrl() {
            format!("^{}", c.to_ascii_uppercase())
        } else if self.alt() {
            format!("ALT_{}", c.to_ascii_uppercase())
        } else {
            KEY_STRING_TOKEN.to_string()
        }
    }

    fn enter_token(&self) -> &'static str {
        match (self.keypad, self.ctrl(), self.shift()) {
            (true, true, _) => "CTL_PADENTER",
            (true, false, true) => "SHF_PADENTER",
            (true, false, false) => "PADENTER",
            (false, true, _) => "CTL_ENTER",
            (false, false, _) => "^M",
        }
    }

    fn delete_token(&self) -> &'static str {
        match (self.keypad, self.ctrl(), self.alt(), self.shift()) {
            (true, true, _, _) => "CTL_PADSTOP",
            (true, false, true, _) => "ALT_PADSTOP",
            (true, false, false, _) => "PADSTOP",
            (false, true, _, _) => "CTL_DEL",
            (false, false, true, _) => "ALT_DEL",
            (false, false, false, true) => "KEY_SDC",
            (false, false, false, false) => "KEY_DC",
        }
    }

    fn arrow_token(&self, dir: &str, shifted: &str, pad: &str) -> String {
        if self.ctrl() {
            format!("CTL_{dir}")
        } else if self.alt() {
            format!("ALT_{dir}")
        } else if self.shift() {
            shifted.to_string()
        } else if self.keypad {
            pad.to_string()
        } else {
            format!("KEY_{dir}")
        }
    }

    fn nav_token(
        &self,
        ctrl: &'static str,
        alt: &'static str,
        shift: &'static str,
        plain: &'static str,
        pad: &'static str,
    ) -> String {
        let token = if self.ctrl() {
            ctrl
        } else if self.alt() {
            alt
        } else if self.shift() {
            shift
        } else if self.keypad {
            pad
        } else {
            plain
        };
        token.to_string()
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Backspace key.
    Backspace,

    /// Tab key.
    Tab,

    /// Shift+Tab (back-tab).
    BackTab,

    /// Delete key.
    Delete,

    /// Home key.
    Home,

    /// End key.
    End,

    /// Page Up key.
    PageUp,

    /// Page Down key.
    PageDown,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,

    /// Function key (F1-F24).
    F(u8),

    /// Terminal was resized (curses delivers this through the key stream).
    Resize,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}
