//! Binary VDF: the tagged key/value format Steam uses for files such as
//! `shortcuts.vdf`.
//!
//! This crate converts between byte buffers and an ordered tree of
//! [`VdfMap`]s, and derives the game ids Steam assigns to non-Steam
//! shortcuts.
//!
//! # Quick Start
//!
//! ```rust
//! use binary_vdf::{compute_shortcut_url, decode, encode, VdfMap};
//!
//! let shortcut = VdfMap::new()
//!     .with("AppName", "MyGame")
//!     .with("Exe", "/usr/bin/mygame")
//!     .with("LastPlayTime", 0u32);
//! let root = VdfMap::new().with("shortcuts", VdfMap::new().with("0", shortcut));
//!
//! let bytes = encode(&root).unwrap();
//! let decoded = decode(&bytes).unwrap();
//! assert_eq!(decoded, root);
//!
//! let url = compute_shortcut_url("MyGame", "/usr/bin/mygame");
//! assert!(url.starts_with("steam://rungameid/"));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (VdfMap, VdfValue, Tag)
//! - [`codec`]: Binary encoding/decoding
//! - [`shortcut`]: Shortcut ids, hashes and launch URLs
//! - [`error`]: Error types
//! - [`limits`]: Format constants and nesting limit
//!
//! # Wire Format
//!
//! There is no header, magic, or version. A map is a sequence of entries,
//! each a tag byte, a NUL-terminated key and a value, closed by `0x08`:
//!
//! | Tag    | Entry      | Value                          |
//! |--------|------------|--------------------------------|
//! | `0x00` | nested map | entries, then `0x08`           |
//! | `0x01` | string     | UTF-8 bytes, then `0x00`       |
//! | `0x02` | number     | 4 bytes, unsigned little-endian|
//!
//! Strings cannot contain NUL; the encoder rejects them rather than
//! truncating. The decoder ignores anything after the root map's end marker.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod shortcut;

// Re-export commonly used types at crate root
pub use codec::{decode, decode_at, decode_prefix, encode, encode_value};
pub use error::{DecodeError, EncodeError, ErrorCode};
pub use model::{Tag, VdfMap, VdfValue};
pub use shortcut::{compute_hash, compute_shortcut_url, shortcut_id};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
