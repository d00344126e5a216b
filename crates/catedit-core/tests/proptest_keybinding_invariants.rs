//! Property-based invariant tests for hotkey translation.
//!
//! 1. Every typed key event renders a token; known tokens translate to a tag
//!    in exactly one derived group.
//! 2. Translation is a pure function of the token.
//! 3. All aliases of a tag translate back to that tag.
//! 4. Printable characters typed without Ctrl/Alt always insert text.
//! 5. Wire names parse back to the same tag.

use catedit_core::action::{ActionGroup, ActionTag};
use catedit_core::event::{KeyCode, KeyEvent, Modifiers};
use catedit_core::keybinding::{HOTKEYS, HotkeyTranslator};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn key_code_strategy() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        any::<char>().prop_map(KeyCode::Char),
        Just(KeyCode::Enter),
        Just(KeyCode::Backspace),
        Just(KeyCode::Tab),
        Just(KeyCode::BackTab),
        Just(KeyCode::Delete),
        Just(KeyCode::Home),
        Just(KeyCode::End),
        Just(KeyCode::PageUp),
        Just(KeyCode::PageDown),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
        Just(KeyCode::Left),
        Just(KeyCode::Right),
        (1u8..=24).prop_map(KeyCode::F),
        Just(KeyCode::Resize),
    ]
}

fn modifiers_strategy() -> impl Strategy<Value = Modifiers> {
    (0u8..8).prop_map(Modifiers::from_bits_truncate)
}

fn key_event_strategy() -> impl Strategy<Value = KeyEvent> {
    (key_code_strategy(), modifiers_strategy(), any::<bool>()).prop_map(|(code, mods, pad)| {
        let ev = KeyEvent::new(code).with_modifiers(mods);
        if pad { ev.from_keypad() } else { ev }
    })
}

fn tag_strategy() -> impl Strategy<Value = ActionTag> {
    proptest::sample::select(ActionTag::ALL.to_vec())
}

// ── Invariants ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn translated_events_land_in_exactly_one_group(ev in key_event_strategy()) {
        let hotkeys = HotkeyTranslator::global();
        let token = ev.token();
        prop_assert!(!token.is_empty());
        if let Some(tag) = hotkeys.translate(&token) {
            let hits = ActionGroup::ALL
                .iter()
                .filter(|g| hotkeys.groups().contains(**g, tag))
                .count();
            prop_assert_eq!(hits, 1);
        }
    }

    #[test]
    fn translation_is_deterministic(ev in key_event_strategy()) {
        let hotkeys = HotkeyTranslator::global();
        let first = hotkeys.translate_event(&ev);
        let second = hotkeys.translate(&ev.token());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn aliases_translate_back(tag in tag_strategy()) {
        let hotkeys = HotkeyTranslator::global();
        for token in hotkeys.aliases(tag) {
            prop_assert_eq!(hotkeys.translate(token), Some(tag));
        }
    }

    #[test]
    fn plain_printables_insert_text(c in any::<char>(), shift in any::<bool>()) {
        let mods = if shift { Modifiers::SHIFT } else { Modifiers::NONE };
        let ev = KeyEvent::new(KeyCode::Char(c)).with_modifiers(mods);
        prop_assert_eq!(
            HotkeyTranslator::global().translate_event(&ev),
            Some(ActionTag::KeyString)
        );
    }

    #[test]
    fn wire_names_parse_back(tag in tag_strategy()) {
        prop_assert_eq!(tag.as_str().parse::<ActionTag>(), Ok(tag));
    }

    #[test]
    fn arbitrary_strings_never_panic(token in ".{0,16}") {
        let hotkeys = HotkeyTranslator::global();
        let known = HOTKEYS.iter().any(|(t, _)| *t == token);
        prop_assert_eq!(hotkeys.translate(&token).is_some(), known);
    }
}

#[test]
fn every_table_token_has_a_group() {
    let hotkeys = HotkeyTranslator::global();
    for (token, tag) in HOTKEYS {
        assert_eq!(hotkeys.group_of(token), Some(tag.group()), "token {token}");
    }
}
