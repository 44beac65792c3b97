//! Steam shortcut identifiers.
//!
//! Non-Steam shortcuts are launched through a 64-bit game id derived from a
//! CRC-32 of the executable path followed by the app name:
//!
//! ```text
//! low  = crc32(exe || app_name) | 0x80000000
//! id   = (0x02000000 << 32) | low
//! url  = "steam://rungameid/" || decimal(id)
//! ```

use crc::{Algorithm, Crc};
use lazy_static::lazy_static;

use crate::limits::{SHORTCUT_ID_FLAG, SHORTCUT_ID_HIGH, SHORTCUT_URL_PREFIX};

/// CRC parameters used for shortcut ids.
///
/// Width 32, polynomial `0x04C11DB7`, init and final XOR `0xFFFFFFFF`,
/// reflected input and output. These match CRC-32/ISO-HDLC (zlib's crc32).
pub const SHORTCUT_CRC_ALGORITHM: Algorithm<u32> = Algorithm {
    width: 32,
    poly: 0x04C1_1DB7,
    init: 0xFFFF_FFFF,
    refin: true,
    refout: true,
    xorout: 0xFFFF_FFFF,
    check: 0xCBF4_3926,
    residue: 0xDEBB_20E3,
};

lazy_static! {
    static ref SHORTCUT_CRC: Crc<u32> = Crc::<u32>::new(&SHORTCUT_CRC_ALGORITHM);
}

/// Computes the shortcut checksum of `bytes`.
pub fn shortcut_crc(bytes: &[u8]) -> u32 {
    SHORTCUT_CRC.checksum(bytes)
}

/// Derives the 64-bit shortcut id for `input`.
pub fn shortcut_id(input: &str) -> u64 {
    let low = shortcut_crc(input.as_bytes()) | SHORTCUT_ID_FLAG;
    (SHORTCUT_ID_HIGH << 32) | u64::from(low)
}

/// Renders the shortcut id of `input` as an unsigned decimal string.
pub fn compute_hash(input: &str) -> String {
    shortcut_id(input).to_string()
}

/// Builds the launch URL for a shortcut.
///
/// The executable path comes first in the hashed input, with no separator.
/// Neither argument is validated.
pub fn compute_shortcut_url(app_name: &str, executable_path: &str) -> String {
    let mut input = String::with_capacity(executable_path.len() + app_name.len());
    input.push_str(executable_path);
    input.push_str(app_name);
    format!("{}{}", SHORTCUT_URL_PREFIX, compute_hash(&input))
}
