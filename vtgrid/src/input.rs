//! Keyboard input encoding
//!
//! Maps a resolved key into the byte sequence a terminal application
//! expects. Two profiles exist and stay separate because their function-key
//! choices diverge: the minimal vt100 profile picks arrow encodings from the
//! ANM/CKM mode bits, while the rxvt profile covers the full navigation and
//! function-key set with fixed CSI sequences.

use vtgrid_core::Modes;

/// A key as delivered by a frontend, after scan-code resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable or control character.
    Char(u8),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    /// Function key F1..=F12.
    F(u8),
    /// The NUL key (ctrl-space).
    Null,
    /// Job-control suspend.
    Suspend,
}

/// Which outbound encoding profile a terminal instance uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEncoding {
    /// Minimal VT100: mode-dependent arrows, newline honors LNM.
    Vt100,
    /// rxvt: fixed CSI arrows plus navigation, function, and suspend keys.
    Rxvt,
}

/// Encode one key press into outbound bytes. An empty result means the
/// profile has no sequence for that key.
pub fn encode_key(key: Key, encoding: KeyEncoding, modes: &Modes) -> Vec<u8> {
    match encoding {
        KeyEncoding::Vt100 => encode_vt100(key, modes),
        KeyEncoding::Rxvt => encode_rxvt(key),
    }
}

fn encode_vt100(key: Key, modes: &Modes) -> Vec<u8> {
    match key {
        Key::Char(b'\n') => {
            if modes.newline {
                b"\r\n".to_vec()
            } else {
                b"\r".to_vec()
            }
        }
        Key::Char(c) => vec![c],
        Key::Up => vt100_arrow(b'A', modes),
        Key::Down => vt100_arrow(b'B', modes),
        Key::Right => vt100_arrow(b'C', modes),
        Key::Left => vt100_arrow(b'D', modes),
        Key::Null => vec![0x00],
        // The minimal profile has no sequences for the remaining keys.
        _ => Vec::new(),
    }
}

/// Arrow encoding selected by the ANM/CKM mode bits: VT52 single-letter,
/// ANSI CSI, or SS3.
fn vt100_arrow(letter: u8, modes: &Modes) -> Vec<u8> {
    if !modes.ansi {
        vec![0x1b, letter]
    } else if !modes.cursor_keys {
        vec![0x1b, b'[', letter]
    } else {
        vec![0x1b, b'O', letter]
    }
}

fn encode_rxvt(key: Key) -> Vec<u8> {
    match key {
        Key::Char(b'\n') => b"\r".to_vec(),
        Key::Char(c) => vec![c],
        Key::Up => b"\x1b[A".to_vec(),
        Key::Down => b"\x1b[B".to_vec(),
        Key::Right => b"\x1b[C".to_vec(),
        Key::Left => b"\x1b[D".to_vec(),
        Key::Insert => b"\x1b[2~".to_vec(),
        Key::Delete => b"\x1b[3~".to_vec(),
        Key::Home => b"\x1b[7~".to_vec(),
        Key::End => b"\x1b[8~".to_vec(),
        Key::PageUp => b"\x1b[5~".to_vec(),
        Key::PageDown => b"\x1b[6~".to_vec(),
        Key::Suspend => vec![0x1a],
        Key::Null => vec![0x00],
        Key::F(n) => rxvt_function_key(n),
    }
}

fn rxvt_function_key(n: u8) -> Vec<u8> {
    let code = match n {
        1 => 11,
        2 => 12,
        3 => 13,
        4 => 14,
        5 => 15,
        6 => 17,
        7 => 18,
        8 => 19,
        9 => 20,
        10 => 21,
        11 => 23,
        12 => 24,
        _ => return Vec::new(),
    };
    format!("\x1b[{}~", code).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vt100_arrow_vt52_by_default() {
        let modes = Modes::new();
        assert_eq!(encode_key(Key::Up, KeyEncoding::Vt100, &modes), b"\x1bA");
    }

    #[test]
    fn test_vt100_arrow_csi_in_ansi_mode() {
        let mut modes = Modes::new();
        modes.ansi = true;
        assert_eq!(encode_key(Key::Up, KeyEncoding::Vt100, &modes), b"\x1b[A");
    }

    #[test]
    fn test_vt100_arrow_ss3_with_cursor_keys_mode() {
        let mut modes = Modes::new();
        modes.ansi = true;
        modes.cursor_keys = true;
        assert_eq!(encode_key(Key::Up, KeyEncoding::Vt100, &modes), b"\x1bOA");
    }

    #[test]
    fn test_vt100_newline_honors_lnm() {
        let mut modes = Modes::new();
        assert_eq!(
            encode_key(Key::Char(b'\n'), KeyEncoding::Vt100, &modes),
            b"\r"
        );
        modes.newline = true;
        assert_eq!(
            encode_key(Key::Char(b'\n'), KeyEncoding::Vt100, &modes),
            b"\r\n"
        );
    }

    #[test]
    fn test_vt100_has_no_function_keys() {
        let modes = Modes::new();
        assert!(encode_key(Key::F(1), KeyEncoding::Vt100, &modes).is_empty());
        assert!(encode_key(Key::Home, KeyEncoding::Vt100, &modes).is_empty());
    }

    #[test]
    fn test_rxvt_arrows_ignore_modes() {
        let mut modes = Modes::new();
        modes.ansi = true;
        modes.cursor_keys = true;
        assert_eq!(encode_key(Key::Left, KeyEncoding::Rxvt, &modes), b"\x1b[D");
    }

    #[test]
    fn test_rxvt_navigation_keys() {
        let modes = Modes::new();
        assert_eq!(encode_key(Key::Insert, KeyEncoding::Rxvt, &modes), b"\x1b[2~");
        assert_eq!(encode_key(Key::Delete, KeyEncoding::Rxvt, &modes), b"\x1b[3~");
        assert_eq!(encode_key(Key::Home, KeyEncoding::Rxvt, &modes), b"\x1b[7~");
        assert_eq!(encode_key(Key::End, KeyEncoding::Rxvt, &modes), b"\x1b[8~");
        assert_eq!(encode_key(Key::PageUp, KeyEncoding::Rxvt, &modes), b"\x1b[5~");
        assert_eq!(encode_key(Key::PageDown, KeyEncoding::Rxvt, &modes), b"\x1b[6~");
    }

    #[test]
    fn test_rxvt_function_keys() {
        let modes = Modes::new();
        assert_eq!(encode_key(Key::F(1), KeyEncoding::Rxvt, &modes), b"\x1b[11~");
        assert_eq!(encode_key(Key::F(5), KeyEncoding::Rxvt, &modes), b"\x1b[15~");
        // F6 onward skips code 16.
        assert_eq!(encode_key(Key::F(6), KeyEncoding::Rxvt, &modes), b"\x1b[17~");
        assert_eq!(encode_key(Key::F(12), KeyEncoding::Rxvt, &modes), b"\x1b[24~");
        assert!(encode_key(Key::F(13), KeyEncoding::Rxvt, &modes).is_empty());
    }

    #[test]
    fn test_rxvt_suspend_is_ctrl_z() {
        let modes = Modes::new();
        assert_eq!(encode_key(Key::Suspend, KeyEncoding::Rxvt, &modes), [0x1a]);
    }

    #[test]
    fn test_plain_characters_pass_through() {
        let modes = Modes::new();
        assert_eq!(encode_key(Key::Char(b'x'), KeyEncoding::Vt100, &modes), b"x");
        assert_eq!(encode_key(Key::Char(0x03), KeyEncoding::Rxvt, &modes), [0x03]);
    }
}
