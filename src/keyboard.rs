use regex::Regex;
use std::sync::LazyLock;

// Letters, ASCII digits, the printable keyboard symbols (plus € and £), space, newline, emoji.
static RE_KEYBOARD_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:\p{Letter}|[0-9~`?!@#$€£%^&*()_\-+={}\[\]\\ \n<>/.,:;"'|]|\p{Emoji})$"#)
        .unwrap()
});

/// Whether `c` survives the keyboard-only filter. Looks at one code point at a time.
pub fn is_keyboard_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    RE_KEYBOARD_CHAR.is_match(c.encode_utf8(&mut buf))
}

/// Drops every code point that is not keyboard-typeable. Returns the kept text and how many were dropped.
pub fn keep_keyboard_chars(text: &str) -> (String, usize) {
    let mut kept = String::with_capacity(text.len());
    let mut dropped = 0;
    for c in text.chars() {
        if is_keyboard_char(c) {
            kept.push(c);
        } else {
            dropped += 1;
        }
    }
    (kept, dropped)
}
