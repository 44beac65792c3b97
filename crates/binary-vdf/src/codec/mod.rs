//! Binary encoding/decoding for VDF maps.

pub mod map;
pub mod primitives;

pub use map::{decode, decode_at, decode_prefix, encode, encode_value};
pub use primitives::{Reader, Writer};
