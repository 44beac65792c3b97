//! Value types stored in binary VDF maps.

use crate::limits::{TAG_MAP, TAG_MAP_END, TAG_NUMBER, TAG_STRING};
use crate::model::VdfMap;

/// Tag byte preceding every map entry, or closing a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    Map = TAG_MAP,
    String = TAG_STRING,
    Number = TAG_NUMBER,
    MapEnd = TAG_MAP_END,
}

impl Tag {
    /// Creates a Tag from its wire representation.
    pub fn from_u8(v: u8) -> Option<Tag> {
        match v {
            TAG_MAP => Some(Tag::Map),
            TAG_STRING => Some(Tag::String),
            TAG_NUMBER => Some(Tag::Number),
            TAG_MAP_END => Some(Tag::MapEnd),
            _ => None,
        }
    }

    /// Returns the wire byte for this tag.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// A value held under a key in a [`VdfMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VdfValue {
    /// UTF-8 text. Must not contain NUL to be encodable.
    String(String),

    /// Unsigned 32-bit integer, stored little-endian on the wire.
    Number(u32),

    /// Nested map.
    Map(VdfMap),
}

impl VdfValue {
    /// Returns the tag this value is written with.
    pub fn tag(&self) -> Tag {
        match self {
            VdfValue::String(_) => Tag::String,
            VdfValue::Number(_) => Tag::Number,
            VdfValue::Map(_) => Tag::Map,
        }
    }

    /// Returns a short human-readable name for the variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            VdfValue::String(_) => "string",
            VdfValue::Number(_) => "number",
            VdfValue::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            VdfValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            VdfValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&VdfMap> {
        match self {
            VdfValue::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut VdfMap> {
        match self {
            VdfValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the exact number of bytes this value occupies after its key.
    pub(crate) fn encoded_len(&self) -> usize {
        match self {
            VdfValue::String(s) => s.len() + 1,
            VdfValue::Number(_) => 4,
            VdfValue::Map(m) => m.encoded_len(),
        }
    }
}

impl From<&str> for VdfValue {
    fn from(s: &str) -> Self {
        VdfValue::String(s.to_string())
    }
}

impl From<String> for VdfValue {
    fn from(s: String) -> Self {
        VdfValue::String(s)
    }
}

impl From<u32> for VdfValue {
    fn from(n: u32) -> Self {
        VdfValue::Number(n)
    }
}

impl From<VdfMap> for VdfValue {
    fn from(m: VdfMap) -> Self {
        VdfValue::Map(m)
    }
}
