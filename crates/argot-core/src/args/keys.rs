//! Name tables for key-chord arguments.

/// Modifier names accepted before the key, case-insensitive.
pub const MODIFIER_NAMES: &[&str] = &["CTRL", "ALT", "SHIFT", "META", "ALT_GRAPH"];

/// Virtual key names and codes. Matched case-insensitively, `VK_` optional.
#[rustfmt::skip]
pub const KEY_NAMES: &[(&str, u16)] = &[
    ("BACK_SPACE", 8), ("TAB", 9), ("ENTER", 10), ("ESCAPE", 27), ("SPACE", 32),
    ("PAGE_UP", 33), ("PAGE_DOWN", 34), ("END", 35), ("HOME", 36),
    ("LEFT", 37), ("UP", 38), ("RIGHT", 39), ("DOWN", 40),
    ("0", 48), ("1", 49), ("2", 50), ("3", 51), ("4", 52),
    ("5", 53), ("6", 54), ("7", 55), ("8", 56), ("9", 57),
    ("A", 65), ("B", 66), ("C", 67), ("D", 68), ("E", 69), ("F", 70), ("G", 71),
    ("H", 72), ("I", 73), ("J", 74), ("K", 75), ("L", 76), ("M", 77), ("N", 78),
    ("O", 79), ("P", 80), ("Q", 81), ("R", 82), ("S", 83), ("T", 84), ("U", 85),
    ("V", 86), ("W", 87), ("X", 88), ("Y", 89), ("Z", 90),
    ("F1", 112), ("F2", 113), ("F3", 114), ("F4", 115), ("F5", 116), ("F6", 117),
    ("F7", 118), ("F8", 119), ("F9", 120), ("F10", 121), ("F11", 122), ("F12", 123),
    ("DELETE", 127), ("INSERT", 155),
];

pub(crate) fn lookup_modifier(name: &str) -> Option<&'static str> {
    MODIFIER_NAMES
        .iter()
        .copied()
        .find(|m| m.eq_ignore_ascii_case(name))
}

pub(crate) fn lookup_key(name: &str) -> Option<(&'static str, u16)> {
    let bare = strip_vk(name);
    KEY_NAMES
        .iter()
        .copied()
        .find(|(k, _)| k.eq_ignore_ascii_case(bare))
}

fn strip_vk(name: &str) -> &str {
    match name.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("VK_") => &name[3..],
        _ => name,
    }
}
