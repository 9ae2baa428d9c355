//! Proptest generators for property-based testing.

use std::ops::Range;

use proptest::prelude::*;

use seqledger_analysis::Sequence;
use seqledger_core::{Digest, Payload, Record};

/// Generate a DNA string over {A, C, G, T} with length in `len`.
pub fn dna_string(len: Range<usize>) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof!["A", "C", "G", "T"], len)
        .prop_map(|parts| parts.concat())
}

/// Generate a validated sequence.
pub fn sequence(len: Range<usize>) -> impl Strategy<Value = Sequence> {
    dna_string(len).prop_map(|raw| Sequence::parse(&raw).expect("generated over the alphabet"))
}

/// Generate a random digest.
pub fn digest() -> impl Strategy<Value = Digest> {
    any::<[u8; 32]>().prop_map(Digest::from_bytes)
}

/// Generate a reasonable timestamp.
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=i64::MAX / 2
}

/// Generate a small structured payload (text, number, or flat map).
pub fn payload() -> impl Strategy<Value = Payload> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,32}".prop_map(Payload::Text),
        any::<i64>().prop_map(|n| Payload::Integer(n.into())),
        proptest::collection::vec(("[a-z]{1,8}", any::<i64>()), 0..6).prop_map(|entries| {
            Payload::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (Payload::Text(k), Payload::Integer(v.into())))
                    .collect(),
            )
        }),
    ]
}

/// Generate an arbitrary (not necessarily chain-consistent) record.
pub fn record() -> impl Strategy<Value = Record> {
    (0u64..1000, timestamp(), payload(), digest())
        .prop_map(|(index, ts, payload, prev)| Record::new(index, ts, payload, prev))
}
