//! Printable width of decorated terminal strings.
//!
//! Every character outside an escape sequence counts as one column. Wide and
//! combining characters are not special-cased; the column math in the table
//! renderer makes the same assumption, so the two stay consistent.

const ESC: char = '\x1b';
const BEL: char = '\x07';

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Text,
    /// Just saw ESC, sequence kind not known yet
    Escape,
    /// CSI and friends: ends at the first ASCII letter
    Control,
    /// OSC: ends at BEL or ESC '\'
    OperatingSystem,
    /// Saw ESC inside an OSC, a '\' finishes it
    OperatingSystemEscape,
}

/// Number of terminal columns `s` occupies once escape sequences are hidden
pub fn printable_width(s: &str) -> usize {
    let mut n = 0;
    let mut mode = Mode::Text;

    for c in s.chars() {
        mode = match mode {
            Mode::Text if c == ESC => Mode::Escape,
            Mode::Text => {
                n += 1;
                Mode::Text
            }
            Mode::Escape if c == ']' => Mode::OperatingSystem,
            Mode::Escape | Mode::Control if c == ESC => Mode::Escape,
            Mode::Escape | Mode::Control if c.is_ascii_alphabetic() => Mode::Text,
            Mode::Escape | Mode::Control => Mode::Control,
            Mode::OperatingSystem if c == BEL => Mode::Text,
            Mode::OperatingSystem if c == ESC => Mode::OperatingSystemEscape,
            Mode::OperatingSystem => Mode::OperatingSystem,
            Mode::OperatingSystemEscape if c == '\\' => Mode::Text,
            Mode::OperatingSystemEscape if c == ESC => Mode::OperatingSystemEscape,
            Mode::OperatingSystemEscape => Mode::OperatingSystem,
        };
    }

    n
}

/// Keep at most `max` printable characters of plain text
pub fn clip(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
