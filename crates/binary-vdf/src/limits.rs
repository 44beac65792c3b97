//! Format constants and decoding limits.

/// Tag byte opening a nested map entry.
pub const TAG_MAP: u8 = 0x00;

/// Tag byte for a string entry.
pub const TAG_STRING: u8 = 0x01;

/// Tag byte for a 32-bit number entry.
pub const TAG_NUMBER: u8 = 0x02;

/// Tag byte closing the current map.
pub const TAG_MAP_END: u8 = 0x08;

/// Terminator for keys and string values.
pub const NUL: u8 = 0x00;

/// Maximum number of nested maps, counting the root.
///
/// Applies to both directions so that anything the encoder emits can be
/// decoded again.
pub const MAX_NESTING_DEPTH: usize = 256;

/// High 32 bits of every shortcut identifier.
pub const SHORTCUT_ID_HIGH: u64 = 0x0200_0000;

/// Bit forced on in the low word of a shortcut identifier.
pub const SHORTCUT_ID_FLAG: u32 = 0x8000_0000;

/// Prefix of a shortcut launch URL.
pub const SHORTCUT_URL_PREFIX: &str = "steam://rungameid/";
