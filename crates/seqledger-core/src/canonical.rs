//! Canonical CBOR encoding for deterministic record hashing.
//!
//! This module implements RFC 8949 Core Deterministic Encoding:
//! - Map keys sorted by encoded byte comparison
//! - Integers use smallest valid encoding
//! - Definite lengths only
//! - Floats always encode as 64-bit (payloads carry percentages)
//!
//! The canonical encoding is what makes record hashing order-independent:
//! the same logical payload map always serializes to identical bytes, no
//! matter what order its entries were inserted in.

use ciborium::value::Value;

use crate::crypto::Digest;
use crate::record::Payload;

/// Preimage field keys (integer keys for compact encoding).
///
/// Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const INDEX: u64 = 0;
    pub const TIMESTAMP: u64 = 1;
    pub const PAYLOAD: u64 = 2;
    pub const PREVIOUS_HASH: u64 = 3;
}

/// Encode the hash preimage of a record's fields to canonical bytes.
///
/// The record's `hash` field is `Digest::hash` of exactly these bytes.
pub fn hash_preimage(index: u64, timestamp: i64, payload: &Payload, previous_hash: &Digest) -> Vec<u8> {
    let entries = vec![
        (Value::Integer(keys::INDEX.into()), Value::Integer(index.into())),
        (
            Value::Integer(keys::TIMESTAMP.into()),
            Value::Integer(timestamp.into()),
        ),
        (Value::Integer(keys::PAYLOAD.into()), payload.clone()),
        (
            Value::Integer(keys::PREVIOUS_HASH.into()),
            Value::Bytes(previous_hash.0.to_vec()),
        ),
    ];
    canonical_value_bytes(&Value::Map(entries))
}

/// Encode a CBOR Value to canonical bytes.
pub fn canonical_value_bytes(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_value_to(&mut buf, value);
    buf
}

/// Recursively encode a CBOR value.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Integer(i) => {
            encode_integer(buf, *i);
        }
        Value::Bytes(b) => {
            encode_bytes(buf, b);
        }
        Value::Text(s) => {
            encode_text(buf, s);
        }
        Value::Array(arr) => {
            encode_array(buf, arr);
        }
        Value::Map(entries) => {
            encode_map_canonical(buf, entries);
        }
        Value::Bool(b) => {
            buf.push(if *b { 0xf5 } else { 0xf4 });
        }
        Value::Null => {
            buf.push(0xf6);
        }
        Value::Float(f) => {
            encode_float(buf, *f);
        }
        _ => {
            panic!("unsupported CBOR value type");
        }
    }
}

/// Encode a CBOR integer (major types 0 and 1).
fn encode_integer(buf: &mut Vec<u8>, i: ciborium::value::Integer) {
    let n: i128 = i.into();

    if n >= 0 {
        // Major type 0: unsigned integer
        encode_uint(buf, 0, n as u64);
    } else {
        // Major type 1: negative integer
        // CBOR encodes -1 as 0, -2 as 1, etc.
        let abs = (-1 - n) as u64;
        encode_uint(buf, 1, abs);
    }
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

/// Encode a text string (major type 3).
fn encode_text(buf: &mut Vec<u8>, s: &str) {
    encode_uint(buf, 3, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

/// Encode an array (major type 4).
fn encode_array(buf: &mut Vec<u8>, arr: &[Value]) {
    encode_uint(buf, 4, arr.len() as u64);
    for item in arr {
        encode_value_to(buf, item);
    }
}

/// Encode a float as a fixed 64-bit value (major type 7, additional 27).
///
/// RFC 8949 preferred serialization would shorten representable floats to 16
/// or 32 bits; a fixed width keeps the encoder simple and is just as
/// deterministic. NaN never appears in payloads.
fn encode_float(buf: &mut Vec<u8>, f: f64) {
    buf.push(0xfb);
    buf.extend_from_slice(&f.to_be_bytes());
}

/// Encode a map canonically (major type 5).
///
/// Keys are sorted by their encoded byte comparison.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) {
    // Encode all keys first to sort by encoded bytes
    let mut key_value_pairs: Vec<(Vec<u8>, &Value)> = entries
        .iter()
        .map(|(k, v)| {
            let mut key_buf = Vec::new();
            encode_value_to(&mut key_buf, k);
            (key_buf, v)
        })
        .collect();

    // Sort by encoded key bytes (lexicographic)
    key_value_pairs.sort_by(|a, b| a.0.cmp(&b.0));

    // Write map header
    encode_uint(buf, 5, key_value_pairs.len() as u64);

    // Write sorted key-value pairs
    for (key_bytes, value) in key_value_pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preimage_deterministic() {
        let payload = Value::Map(vec![(
            Value::Text("gc_content".into()),
            Value::Float(50.0),
        )]);
        let prev = Digest::hash(b"prev");

        let b1 = hash_preimage(3, 1736870400000, &payload, &prev);
        let b2 = hash_preimage(3, 1736870400000, &payload, &prev);
        assert_eq!(b1, b2);
    }

    #[test]
    fn test_preimage_sensitive_to_every_field() {
        let payload = Value::Text("genesis".into());
        let prev = Digest::ZERO;
        let base = hash_preimage(0, 1000, &payload, &prev);

        assert_ne!(base, hash_preimage(1, 1000, &payload, &prev));
        assert_ne!(base, hash_preimage(0, 1001, &payload, &prev));
        assert_ne!(
            base,
            hash_preimage(0, 1000, &Value::Text("tampered".into()), &prev)
        );
        assert_ne!(base, hash_preimage(0, 1000, &payload, &Digest::hash(b"x")));
    }

    #[test]
    fn test_map_insertion_order_irrelevant() {
        let forward = Value::Map(vec![
            (Value::Text("complement".into()), Value::Text("TACG".into())),
            (Value::Text("gc_content".into()), Value::Float(50.0)),
        ]);
        let reversed = Value::Map(vec![
            (Value::Text("gc_content".into()), Value::Float(50.0)),
            (Value::Text("complement".into()), Value::Text("TACG".into())),
        ]);

        assert_eq!(
            canonical_value_bytes(&forward),
            canonical_value_bytes(&reversed)
        );
    }

    #[test]
    fn test_integer_encoding() {
        // Test smallest encoding for various integer sizes
        let mut buf = Vec::new();

        // 0-23: single byte
        encode_uint(&mut buf, 0, 0);
        assert_eq!(buf, vec![0x00]);

        buf.clear();
        encode_uint(&mut buf, 0, 23);
        assert_eq!(buf, vec![0x17]);

        // 24-255: two bytes
        buf.clear();
        encode_uint(&mut buf, 0, 24);
        assert_eq!(buf, vec![0x18, 24]);

        buf.clear();
        encode_uint(&mut buf, 0, 255);
        assert_eq!(buf, vec![0x18, 255]);

        // 256-65535: three bytes
        buf.clear();
        encode_uint(&mut buf, 0, 256);
        assert_eq!(buf, vec![0x19, 0x01, 0x00]);

        buf.clear();
        encode_uint(&mut buf, 0, 65535);
        assert_eq!(buf, vec![0x19, 0xff, 0xff]);
    }

    #[test]
    fn test_float_encoding_fixed_width() {
        let mut buf = Vec::new();
        encode_float(&mut buf, 50.0);
        assert_eq!(buf.len(), 9);
        assert_eq!(buf[0], 0xfb);
        assert_eq!(&buf[1..], &50.0f64.to_be_bytes());
    }

    #[test]
    fn test_negative_integer_encoding() {
        let mut buf = Vec::new();
        encode_integer(&mut buf, (-1i64).into());
        assert_eq!(buf, vec![0x20]);

        buf.clear();
        encode_integer(&mut buf, (-25i64).into());
        assert_eq!(buf, vec![0x38, 24]);
    }

    #[test]
    fn test_map_key_ordering() {
        // Ensure integer keys are sorted correctly
        let mut buf = Vec::new();
        let entries = vec![
            (Value::Integer(8.into()), Value::Integer(80.into())),
            (Value::Integer(0.into()), Value::Integer(0.into())),
            (Value::Integer(5.into()), Value::Integer(50.into())),
        ];
        encode_map_canonical(&mut buf, &entries);

        // Map header (3 entries)
        assert_eq!(buf[0], 0xa3);
        // Keys should be in order: 0, 5, 8
        assert_eq!(buf[1], 0x00); // key 0
        assert_eq!(buf[2], 0x00); // value 0
        assert_eq!(buf[3], 0x05); // key 5
        assert_eq!(buf[4], 0x18); // value 50 (>23)
        assert_eq!(buf[5], 50);
        assert_eq!(buf[6], 0x08); // key 8
        assert_eq!(buf[7], 0x18); // value 80 (>23)
        assert_eq!(buf[8], 80);
    }
}
