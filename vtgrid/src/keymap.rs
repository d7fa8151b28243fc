//! Scan-code resolution
//!
//! The stage between the hardware and the encoder: raw PC scan codes are
//! looked up in the regular table, overridden by the control table while
//! ctrl is latched and by the shift table while shift is latched (shift wins
//! when both are down), then caps lock swaps letter case. Modifier keys only
//! update the latch register and never resolve to a key themselves.

use crate::input::Key;

const SCAN_LEFT_CTRL: u8 = 0x1d;
const SCAN_RIGHT_CTRL: u8 = 0x61;
const SCAN_LEFT_SHIFT: u8 = 0x2a;
const SCAN_RIGHT_SHIFT: u8 = 0x36;
const SCAN_LEFT_ALT: u8 = 0x38;
const SCAN_RIGHT_ALT: u8 = 0x64;
const SCAN_CAPS_LOCK: u8 = 0x3a;

const __: Option<Key> = None;

const fn ch(c: u8) -> Option<Key> {
    Some(Key::Char(c))
}

const fn fk(n: u8) -> Option<Key> {
    Some(Key::F(n))
}

#[rustfmt::skip]
static KEYMAP_BASE: [Option<Key>; 128] = [
    __, ch(0x1b),
    ch(b'1'), ch(b'2'), ch(b'3'), ch(b'4'), ch(b'5'),
    ch(b'6'), ch(b'7'), ch(b'8'), ch(b'9'), ch(b'0'),
    ch(b'-'), ch(b'='), ch(0x08),
    ch(b'\t'),
    ch(b'q'), ch(b'w'), ch(b'e'), ch(b'r'), ch(b't'),
    ch(b'y'), ch(b'u'), ch(b'i'), ch(b'o'), ch(b'p'),
    ch(b'['), ch(b']'), ch(b'\r'),
    __, // left ctrl
    ch(b'a'), ch(b's'), ch(b'd'), ch(b'f'), ch(b'g'),
    ch(b'h'), ch(b'j'), ch(b'k'), ch(b'l'),
    ch(b';'), ch(b'\''), ch(b'`'),
    __, // left shift
    ch(b'\\'),
    ch(b'z'), ch(b'x'), ch(b'c'), ch(b'v'), ch(b'b'), ch(b'n'), ch(b'm'),
    ch(b','), ch(b'.'), ch(b'/'),
    __, // right shift
    ch(b'*'),
    __, // left alt
    ch(b' '),
    __, // caps lock
    fk(1), fk(2), fk(3), fk(4), fk(5), fk(6), fk(7), fk(8), fk(9), fk(10),
    __, // num lock
    __, // scroll lock
    Some(Key::Home), Some(Key::Up), Some(Key::PageUp),
    ch(b'-'),
    Some(Key::Left), __, Some(Key::Right),
    ch(b'+'),
    Some(Key::End), Some(Key::Down), Some(Key::PageDown), Some(Key::Insert),
    ch(0x7f),
    __, __, __,
    fk(11), fk(12),
    __, __, __, __, __, __, __, __, __, __, __, __, __,
    __, __, __, __, __, __, __, __, __, __, __, __, __,
    __, __, __, __, __, __, __, __, __, __, __, __, __,
];

#[rustfmt::skip]
static KEYMAP_SHIFT: [Option<Key>; 54] = [
    __, ch(0x1b),
    ch(b'!'), ch(b'@'), ch(b'#'), ch(b'$'), ch(b'%'),
    ch(b'^'), ch(b'&'), ch(b'*'), ch(b'('), ch(b')'),
    ch(b'_'), ch(b'+'), ch(0x08),
    ch(b'\t'),
    ch(b'Q'), ch(b'W'), ch(b'E'), ch(b'R'), ch(b'T'),
    ch(b'Y'), ch(b'U'), ch(b'I'), ch(b'O'), ch(b'P'),
    ch(b'{'), ch(b'}'), ch(b'\r'),
    __,
    ch(b'A'), ch(b'S'), ch(b'D'), ch(b'F'), ch(b'G'),
    ch(b'H'), ch(b'J'), ch(b'K'), ch(b'L'),
    ch(b':'), ch(b'"'), ch(b'~'),
    __,
    ch(b'|'),
    ch(b'Z'), ch(b'X'), ch(b'C'), ch(b'V'), ch(b'B'), ch(b'N'), ch(b'M'),
    ch(b'<'), ch(b'>'), ch(b'?'),
];

#[rustfmt::skip]
static KEYMAP_CTRL: [Option<Key>; 58] = [
    __, ch(0x1b),
    ch(b'1'), ch(b'2'), ch(b'3'), ch(b'4'), ch(b'5'),
    ch(b'6'), ch(b'7'), ch(b'8'), ch(b'9'), ch(b'0'),
    ch(b'-'), ch(b'='), ch(0x08),
    ch(b'\t'),
    ch(0x11), ch(0x17), ch(0x05), ch(0x12), ch(0x14),
    ch(0x19), ch(0x15), ch(0x09), ch(0x0f), ch(0x10),
    ch(0x1b), ch(0x1d), ch(b'\r'),
    __,
    ch(0x01), ch(0x13), ch(0x04), ch(0x06), ch(0x07),
    ch(0x08), ch(0x0a), ch(0x0b), ch(0x0c),
    ch(b';'), ch(b'\''), ch(0x1e),
    __,
    ch(0x1c),
    ch(0x1a), ch(0x18), ch(0x03), ch(0x16), ch(0x02), ch(0x0e), ch(0x0d),
    ch(b','), ch(b'.'), ch(0x1f),
    ch(b'*'),
    __, __,
    Some(Key::Null), // ctrl-space
];

/// Latched modifier state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub caps: bool,
}

/// The scan-code resolver for one keyboard.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    mods: Modifiers,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modifiers(&self) -> Modifiers {
        self.mods
    }

    /// Feed one scan-code event. Returns the resolved key for a press of a
    /// mapped, non-modifier key; releases and unmapped codes resolve to
    /// nothing.
    pub fn process(&mut self, scancode: u8, pressed: bool) -> Option<Key> {
        match scancode {
            SCAN_LEFT_CTRL | SCAN_RIGHT_CTRL => {
                self.mods.ctrl = pressed;
                return None;
            }
            SCAN_LEFT_SHIFT | SCAN_RIGHT_SHIFT => {
                self.mods.shift = pressed;
                return None;
            }
            SCAN_LEFT_ALT | SCAN_RIGHT_ALT => {
                self.mods.alt = pressed;
                return None;
            }
            SCAN_CAPS_LOCK => {
                if pressed {
                    self.mods.caps = !self.mods.caps;
                }
                return None;
            }
            _ => {}
        }
        if !pressed {
            return None;
        }

        let idx = scancode as usize;
        let mut key = *KEYMAP_BASE.get(idx)?;
        if self.mods.ctrl {
            if let Some(&ctrl_key) = KEYMAP_CTRL.get(idx) {
                key = ctrl_key;
            }
        }
        // Shift wins when both modifiers are latched.
        if self.mods.shift {
            if let Some(&shift_key) = KEYMAP_SHIFT.get(idx) {
                key = shift_key;
            }
        }

        let key = key?;
        Some(self.apply_caps(key))
    }

    /// Caps lock swaps letter case in both directions, so caps plus shift
    /// yields lowercase again.
    fn apply_caps(&self, key: Key) -> Key {
        if !self.mods.caps {
            return key;
        }
        match key {
            Key::Char(c) if c.is_ascii_lowercase() => Key::Char(c.to_ascii_uppercase()),
            Key::Char(c) if c.is_ascii_uppercase() => Key::Char(c.to_ascii_lowercase()),
            other => other,
        }
    }
}
