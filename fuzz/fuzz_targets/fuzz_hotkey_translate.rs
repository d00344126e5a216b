#![no_main]

use catedit_core::keybinding::HotkeyTranslator;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let hotkeys = HotkeyTranslator::global();
    let token = String::from_utf8_lossy(data);

    let tag = hotkeys.translate(&token);
    assert_eq!(tag, hotkeys.translate(&token), "translation must be pure");

    if let Some(tag) = tag {
        assert_eq!(hotkeys.group_of(&token), Some(tag.group()));
        assert!(hotkeys.aliases(tag).iter().any(|alias| **alias == *token));
    } else {
        assert!(hotkeys.group_of(&token).is_none());
    }
});
