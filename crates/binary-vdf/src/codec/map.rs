//! Map encoding/decoding for the binary VDF format.
//!
//! A map is a run of `(tag, key, value)` entries closed by a single
//! end-of-map byte. Nested maps recurse in place; there are no length
//! prefixes, so the decoder walks the stream strictly forward.

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{MAX_NESTING_DEPTH, TAG_MAP_END};
use crate::model::{Tag, VdfMap, VdfValue};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes the map starting at the beginning of `input`.
///
/// Bytes after the root map's end marker are ignored.
pub fn decode(input: &[u8]) -> Result<VdfMap, DecodeError> {
    decode_at(input, 0)
}

/// Decodes the map starting at byte `offset` of `input`.
///
/// An offset at or past the end of the input is reported as truncation.
pub fn decode_at(input: &[u8], offset: usize) -> Result<VdfMap, DecodeError> {
    decode_prefix(input, offset).map(|(map, _)| map)
}

/// Decodes the map starting at `offset` and returns it together with the
/// position just past its end marker.
///
/// ```
/// use binary_vdf::codec::decode_prefix;
///
/// let data = [0x08, 0xAA, 0xBB];
/// let (map, end) = decode_prefix(&data, 0).unwrap();
/// assert!(map.is_empty());
/// assert_eq!(&data[end..], &[0xAA, 0xBB]);
/// ```
pub fn decode_prefix(input: &[u8], offset: usize) -> Result<(VdfMap, usize), DecodeError> {
    let mut reader = Reader::at(input, offset);
    let map = decode_map(&mut reader, 1)?;
    Ok((map, reader.position()))
}

fn decode_map(reader: &mut Reader<'_>, depth: usize) -> Result<VdfMap, DecodeError> {
    let mut map = VdfMap::new();
    loop {
        let position = reader.position();
        let byte = reader.read_byte("tag")?;
        let tag = Tag::from_u8(byte).ok_or(DecodeError::UnknownTag { tag: byte, position })?;

        let (key, value) = match tag {
            Tag::MapEnd => return Ok(map),
            Tag::String => {
                let key = reader.read_string("key")?;
                (key, VdfValue::String(reader.read_string("string value")?))
            }
            Tag::Number => {
                let key = reader.read_string("key")?;
                (key, VdfValue::Number(reader.read_u32("number value")?))
            }
            Tag::Map => {
                if depth >= MAX_NESTING_DEPTH {
                    return Err(DecodeError::NestingTooDeep {
                        max: MAX_NESTING_DEPTH,
                        position,
                    });
                }
                let key = reader.read_string("key")?;
                (key, VdfValue::Map(decode_map(reader, depth + 1)?))
            }
        };

        // Repeated keys: last value wins, first position is kept.
        map.insert(key, value);
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a map, including the root's trailing end-of-map marker.
pub fn encode(map: &VdfMap) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::with_capacity(map.encoded_len());
    encode_map(&mut writer, map, 1)?;
    Ok(writer.into_bytes())
}

/// Encodes a root value, which must be a map.
pub fn encode_value(value: &VdfValue) -> Result<Vec<u8>, EncodeError> {
    match value {
        VdfValue::Map(map) => encode(map),
        other => Err(EncodeError::UnsupportedValueType {
            found: other.type_name(),
        }),
    }
}

fn encode_map(writer: &mut Writer, map: &VdfMap, depth: usize) -> Result<(), EncodeError> {
    for (key, value) in map {
        writer.write_byte(value.tag().as_u8());
        writer.write_str(key, "key", key)?;
        match value {
            VdfValue::String(s) => writer.write_str(s, "string value", key)?,
            VdfValue::Number(n) => writer.write_u32(*n),
            VdfValue::Map(nested) => {
                if depth >= MAX_NESTING_DEPTH {
                    return Err(EncodeError::NestingTooDeep {
                        max: MAX_NESTING_DEPTH,
                        key: key.to_string(),
                    });
                }
                encode_map(writer, nested, depth + 1)?;
            }
        }
    }
    writer.write_byte(TAG_MAP_END);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn shortcuts_fixture() -> VdfMap {
        VdfMap::new().with(
            "shortcuts",
            VdfMap::new().with(
                "0",
                VdfMap::new()
                    .with("appid", 0xE4F9_04D4u32)
                    .with("AppName", "MyGame")
                    .with("Exe", "/usr/bin/mygame")
                    .with("StartDir", "/usr/bin/")
                    .with("IsHidden", 0u32)
                    .with("tags", VdfMap::new().with("0", "favorite")),
            ),
        )
    }

    /// Offsets of every tag byte (entry tags and end markers) in `map`'s
    /// encoding, given the map starts at `start`. Returns the end position.
    fn tag_positions(map: &VdfMap, start: usize, out: &mut Vec<usize>) -> usize {
        let mut pos = start;
        for (key, value) in map {
            out.push(pos);
            pos += 1 + key.len() + 1;
            pos = match value {
                VdfValue::String(s) => pos + s.len() + 1,
                VdfValue::Number(_) => pos + 4,
                VdfValue::Map(nested) => tag_positions(nested, pos, out),
            };
        }
        out.push(pos);
        pos + 1
    }

    #[test]
    fn test_empty_map() {
        let encoded = encode(&VdfMap::new()).unwrap();
        assert_eq!(encoded, vec![0x08]);
        assert_eq!(decode(&encoded).unwrap(), VdfMap::new());
    }

    #[test]
    fn test_exact_bytes() {
        let map = VdfMap::new()
            .with("a", VdfMap::new().with("x", 1u32))
            .with("b", "s");
        let encoded = encode(&map).unwrap();
        assert_eq!(
            encoded,
            vec![
                0x00, b'a', 0, //
                0x02, b'x', 0, 1, 0, 0, 0, //
                0x08, //
                0x01, b'b', 0, b's', 0, //
                0x08,
            ]
        );
        assert_eq!(encoded.len(), map.encoded_len());
    }

    #[test]
    fn test_nested_order_independent_of_key_name() {
        let map = VdfMap::new()
            .with("b", "s")
            .with("a", VdfMap::new().with("x", 1u32));
        let decoded = decode(&encode(&map).unwrap()).unwrap();
        assert_eq!(decoded.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(decoded, map);
    }

    #[test]
    fn test_shortcuts_roundtrip() {
        let map = shortcuts_fixture();
        let encoded = encode(&map).unwrap();
        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded, map);

        let entry = decoded
            .get_map("shortcuts")
            .and_then(|s| s.get_map("0"))
            .unwrap();
        assert_eq!(entry.get_str("AppName"), Some("MyGame"));
        assert_eq!(entry.get_u32("appid"), Some(0xE4F9_04D4));
    }

    #[test]
    fn test_decode_at_offset() {
        let map = VdfMap::new().with("k", "v");
        let mut data = b"header".to_vec();
        data.extend(encode(&map).unwrap());
        assert_eq!(decode_at(&data, 6).unwrap(), map);
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let map = VdfMap::new().with("n", 5u32);
        let encoded = encode(&map).unwrap();
        let mut data = encoded.clone();
        data.extend_from_slice(&[0xFF, 0x00, 0x13]);

        assert_eq!(decode(&data).unwrap(), map);
        let (_, end) = decode_prefix(&data, 0).unwrap();
        assert_eq!(end, encoded.len());
    }

    #[test]
    fn test_offset_past_end() {
        let result = decode_at(&[0x08], 2);
        assert_eq!(
            result,
            Err(DecodeError::UnexpectedEof { context: "tag", position: 2 })
        );
    }

    #[test]
    fn test_empty_input() {
        let result = decode(&[]);
        assert!(matches!(result, Err(DecodeError::UnexpectedEof { context: "tag", .. })));
    }

    #[test]
    fn test_unknown_tag() {
        let data = [0x01, b'k', 0, b'v', 0, 0x07, b'x', 0];
        let result = decode(&data);
        assert_eq!(result, Err(DecodeError::UnknownTag { tag: 0x07, position: 5 }));
    }

    #[test]
    fn test_truncated_number() {
        let data = [0x02, b'n', 0, 1, 2];
        let result = decode(&data);
        assert!(matches!(
            result,
            Err(DecodeError::UnexpectedEof { context: "number value", .. })
        ));
    }

    #[test]
    fn test_missing_end_marker() {
        let data = [0x01, b'k', 0, b'v', 0];
        let result = decode(&data);
        assert_eq!(
            result,
            Err(DecodeError::UnexpectedEof { context: "tag", position: 5 })
        );
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let data = [
            0x02, b'a', 0, 1, 0, 0, 0, //
            0x01, b'b', 0, b'x', 0, //
            0x02, b'a', 0, 2, 0, 0, 0, //
            0x08,
        ];
        let decoded = decode(&data).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(decoded.get_u32("a"), Some(2));
    }

    #[test]
    fn test_invalid_utf8_key() {
        let data = [0x01, 0xC3, 0x28, 0, b'v', 0, 0x08];
        let result = decode(&data);
        assert_eq!(
            result,
            Err(DecodeError::InvalidUtf8 { field: "key", position: 1 })
        );
    }

    #[test]
    fn test_nul_in_value_rejected() {
        let map = VdfMap::new().with("k", "a\0b");
        let result = encode(&map);
        assert_eq!(
            result,
            Err(EncodeError::IllegalNul { field: "string value", key: "k".to_string() })
        );
    }

    #[test]
    fn test_nul_in_key_rejected() {
        let map = VdfMap::new().with("outer", VdfMap::new().with("bad\0key", 1u32));
        let result = encode(&map);
        assert!(matches!(result, Err(EncodeError::IllegalNul { field: "key", .. })));
    }

    #[test]
    fn test_encode_value_requires_map() {
        assert_eq!(
            encode_value(&VdfValue::from("text")),
            Err(EncodeError::UnsupportedValueType { found: "string" })
        );
        assert_eq!(
            encode_value(&VdfValue::from(3u32)),
            Err(EncodeError::UnsupportedValueType { found: "number" })
        );
        let map = shortcuts_fixture();
        assert_eq!(encode_value(&VdfValue::from(map.clone())), encode(&map));
    }

    #[test]
    fn test_decode_nesting_limit() {
        let nested_bytes = |levels: usize| {
            let mut data = Vec::new();
            for _ in 0..levels {
                data.extend_from_slice(&[0x00, b'k', 0]);
            }
            data.extend(std::iter::repeat_n(0x08u8, levels + 1));
            data
        };

        assert!(decode(&nested_bytes(MAX_NESTING_DEPTH - 1)).is_ok());
        let result = decode(&nested_bytes(MAX_NESTING_DEPTH));
        assert_eq!(
            result,
            Err(DecodeError::NestingTooDeep {
                max: MAX_NESTING_DEPTH,
                position: (MAX_NESTING_DEPTH - 1) * 3,
            })
        );
    }

    #[test]
    fn test_encode_nesting_limit() {
        let nested_map = |levels: usize| {
            let mut map = VdfMap::new();
            for _ in 0..levels {
                map = VdfMap::new().with("k", map);
            }
            map
        };

        let ok = nested_map(MAX_NESTING_DEPTH - 1);
        assert_eq!(decode(&encode(&ok).unwrap()).unwrap(), ok);
        assert!(matches!(
            encode(&nested_map(MAX_NESTING_DEPTH)),
            Err(EncodeError::NestingTooDeep { .. })
        ));
    }

    fn arb_key() -> impl Strategy<Value = String> {
        "\\PC{0,8}"
    }

    fn arb_map() -> impl Strategy<Value = VdfMap> {
        let leaf = prop_oneof![
            "\\PC{0,12}".prop_map(VdfValue::String),
            any::<u32>().prop_map(VdfValue::Number),
        ];
        let value = leaf.prop_recursive(4, 48, 6, |inner| {
            prop::collection::vec((arb_key(), inner), 0..6)
                .prop_map(|entries| VdfValue::Map(entries.into_iter().collect::<VdfMap>()))
        });
        prop::collection::vec((arb_key(), value), 0..8)
            .prop_map(|entries| entries.into_iter().collect::<VdfMap>())
    }

    proptest! {
        #[test]
        fn prop_roundtrip(map in arb_map()) {
            let encoded = encode(&map).unwrap();
            prop_assert_eq!(encoded.len(), map.encoded_len());
            prop_assert_eq!(decode(&encoded).unwrap(), map);
        }

        #[test]
        fn prop_decode_at_offset(map in arb_map(), prefix in prop::collection::vec(any::<u8>(), 0..16)) {
            let mut data = prefix.clone();
            data.extend(encode(&map).unwrap());
            prop_assert_eq!(decode_at(&data, prefix.len()).unwrap(), map);
        }

        #[test]
        fn prop_truncation_detected(map in arb_map(), cut in any::<prop::sample::Index>()) {
            let encoded = encode(&map).unwrap();
            let len = cut.index(encoded.len());
            let result = decode(&encoded[..len]);
            prop_assert!(
                matches!(result, Err(DecodeError::UnexpectedEof { .. })),
                "prefix of {} bytes gave {:?}", len, result
            );
        }

        #[test]
        fn prop_unknown_tag_rejected(
            map in arb_map(),
            which in any::<prop::sample::Index>(),
            bad in (3u8..=255).prop_filter("valid tag", |b| *b != 0x08),
        ) {
            let mut encoded = encode(&map).unwrap();
            let mut positions = Vec::new();
            tag_positions(&map, 0, &mut positions);
            let position = *which.get(&positions);
            encoded[position] = bad;
            prop_assert_eq!(decode(&encoded), Err(DecodeError::UnknownTag { tag: bad, position }));
        }
    }
}
