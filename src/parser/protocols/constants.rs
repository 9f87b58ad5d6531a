//! Byte/char constants for ESC and CSI final bytes, and DEC private mode
//! numbers. Centralizing these (rather than matching on raw chars inline)
//! keeps `perform.rs`'s dispatch tables self-documenting.

// ESC finals.
pub const ESC_DECSC_SAVE_CURSOR: u8 = b'7';
pub const ESC_DECRC_RESTORE_CURSOR: u8 = b'8';
pub const ESC_DECKPAM: u8 = b'=';
pub const ESC_DECKPNM: u8 = b'>';
pub const ESC_IND_INDEX_DOWN: u8 = b'D';
pub const ESC_NEL_NEXT_LINE: u8 = b'E';
pub const ESC_RI_REVERSE_INDEX: u8 = b'M';
pub const ESC_RIS_RESET: u8 = b'c';
pub const ESC_DECALN_INTERMEDIATE: u8 = b'#';
pub const ESC_DECALN_FINAL: u8 = b'8';
pub const ESC_HTS_SET_TAB_STOP: u8 = b'H';
/// Single Shift 2 / 3: apply G2/G3 to exactly the next printed character.
pub const ESC_SS2: u8 = b'N';
pub const ESC_SS3: u8 = b'O';

/// `%` intermediate: ECMA-35/ISO 2022 <-> UTF-8 coding-system designation
/// (`ESC % G` / `ESC % @` / `ESC % / G|H|I`).
pub const ESC_CODING_SYSTEM_PERCENT: u8 = b'%';
pub const ESC_CODING_SYSTEM_UTF8: u8 = b'G';
pub const ESC_CODING_SYSTEM_ISO2022: u8 = b'@';
/// Second intermediate byte of the `ESC % / G|H|I` (UTF-8 Level 1/2/3 lock)
/// form.
pub const ESC_CODING_SYSTEM_SLASH: u8 = b'/';

/// Intermediate bytes designating which G-set slot `(`, `)`, `*`, `+`) a
/// following final byte assigns a character map to.
pub const ESC_DESIGNATE_G0: u8 = b'(';
pub const ESC_DESIGNATE_G1: u8 = b')';
pub const ESC_DESIGNATE_G2: u8 = b'*';
pub const ESC_DESIGNATE_G3: u8 = b'+';

pub const ESC_SHIFT_IN: u8 = 0x0F; // SI
pub const ESC_SHIFT_OUT: u8 = 0x0E; // SO

// Private-mode prefix byte seen in `intermediates` for `CSI ? ... h/l`.
pub const CSI_PRIVATE_MODE_PREFIX: u8 = b'?';
// SP intermediate, used by `CSI SP q` (DECSCUSR).
pub const CSI_SPACE_INTERMEDIATE: u8 = b' ';
// `!` intermediate, used by `CSI ! p` (DECSTR soft reset).
pub const CSI_BANG_INTERMEDIATE: u8 = b'!';

// DEC private mode numbers.
pub const DEC_APPLICATION_CURSOR_KEYS: u16 = 1;
pub const DEC_COLUMN_132: u16 = 3;
pub const DEC_REVERSE_VIDEO: u16 = 5;
pub const DEC_ORIGIN_MODE: u16 = 6;
pub const DEC_AUTO_WRAP: u16 = 7;
pub const DEC_BLINK: u16 = 12;
pub const DEC_CURSOR_VISIBLE: u16 = 25;
pub const DEC_REVERSE_WRAPAROUND: u16 = 45;
pub const DEC_ALT_SCREEN_47: u16 = 47;
pub const DEC_ALT_SCREEN_1047: u16 = 1047;
pub const DEC_SAVE_CURSOR: u16 = 1048;
pub const DEC_ALT_SCREEN_1049: u16 = 1049;
pub const DEC_FOCUS_REPORT: u16 = 1004;
pub const DEC_META_SENDS_ESCAPE: u16 = 1036;
pub const DEC_ALT_SENDS_ESCAPE: u16 = 1039;
pub const DEC_BRACKETED_PASTE: u16 = 2004;

// Non-private (ANSI) mode numbers.
pub const ANSI_INSERT_MODE: u16 = 4;
pub const ANSI_AUTO_CR_ON_LF: u16 = 20;
