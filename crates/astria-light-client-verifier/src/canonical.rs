//! Hand-rolled protobuf wire-format encoder for the canonical vote a
//! validator signs.
//!
//! This intentionally does not go through generated `prost` message types:
//! byte-for-byte control over proto3's "omit the zero value" rule and over
//! the length-delimited framing the signature is computed over is the
//! entire point of this module. The wire format itself — varint, tag,
//! length-delimited framing — is the same protobuf wire format the
//! teacher's `tendermint_proto::types::CanonicalVote` produces via codegen,
//! down to the `encode_length_delimited_to_vec` prefix (see
//! `block_verifier.rs::verify_vote_signature`): a varint encoding the byte
//! length of the vote message, followed by the message itself.

use crate::{
    commit::{
        BlockId,
        PartSetHeader,
    },
    time::Time,
};

/// Precommit, the only vote type a commit signature can canonicalize.
const SIGNED_MSG_TYPE_PRECOMMIT: u64 = 2;

fn write_varint(buf: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            break;
        }
        buf.push(byte | 0x80);
    }
}

fn write_tag(buf: &mut Vec<u8>, field_number: u32, wire_type: u8) {
    write_varint(buf, (u64::from(field_number) << 3) | u64::from(wire_type));
}

/// Writes a `bytes`/`string` scalar field, omitted entirely when empty
/// (proto3 default-value omission).
fn write_bytes_field(buf: &mut Vec<u8>, field_number: u32, data: &[u8]) {
    if data.is_empty() {
        return;
    }
    write_tag(buf, field_number, 2);
    write_varint(buf, data.len() as u64);
    buf.extend_from_slice(data);
}

/// Writes an embedded message field. Unlike scalars, message fields have
/// explicit presence in proto3: they are written whenever the field is
/// `Some`, even if every field inside encodes to nothing.
fn write_message_field(buf: &mut Vec<u8>, field_number: u32, body: &[u8]) {
    write_tag(buf, field_number, 2);
    write_varint(buf, body.len() as u64);
    buf.extend_from_slice(body);
}

/// Writes a `uint32` scalar, omitted when zero.
fn write_uint32_field(buf: &mut Vec<u8>, field_number: u32, value: u32) {
    if value == 0 {
        return;
    }
    write_tag(buf, field_number, 0);
    write_varint(buf, u64::from(value));
}

/// Writes an `sfixed64` scalar, omitted when zero.
fn write_sfixed64_field(buf: &mut Vec<u8>, field_number: u32, value: i64) {
    if value == 0 {
        return;
    }
    write_tag(buf, field_number, 1);
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Writes an `int64` varint scalar, omitted when zero. Protobuf sign-extends
/// negative values to 64 bits before varint-encoding them, which is exactly
/// what the `as u64` bit-reinterpretation below produces.
fn write_int64_field(buf: &mut Vec<u8>, field_number: u32, value: i64) {
    if value == 0 {
        return;
    }
    write_tag(buf, field_number, 0);
    write_varint(buf, value as u64);
}

/// Writes an `int32` varint scalar, omitted when zero. Also sign-extended to
/// 64 bits per protobuf's `int32` wire rule.
fn write_int32_field(buf: &mut Vec<u8>, field_number: u32, value: i32) {
    if value == 0 {
        return;
    }
    write_tag(buf, field_number, 0);
    write_varint(buf, i64::from(value) as u64);
}

fn encode_part_set_header(part_set_header: &PartSetHeader) -> Vec<u8> {
    let mut buf = Vec::new();
    write_uint32_field(&mut buf, 1, part_set_header.total);
    write_bytes_field(&mut buf, 2, &part_set_header.hash);
    buf
}

fn encode_block_id(block_id: &BlockId) -> Vec<u8> {
    let mut buf = Vec::new();
    write_bytes_field(&mut buf, 1, &block_id.hash);
    let part_set_header_body = encode_part_set_header(&block_id.part_set_header);
    write_message_field(&mut buf, 2, &part_set_header_body);
    buf
}

fn encode_timestamp(time: &Time) -> Result<Vec<u8>, Error> {
    let seconds: i64 = time
        .seconds
        .try_into()
        .map_err(|_| Error::TimestampOutOfRange)?;
    let mut buf = Vec::new();
    write_int64_field(&mut buf, 1, seconds);
    write_int32_field(&mut buf, 2, time.nanos as i32);
    Ok(buf)
}

/// Builds the canonical, field-tagged bytes a validator signs for a
/// precommit vote, not including the outer length-delimiter prefix.
fn canonical_vote_bytes(
    height: i128,
    round: u32,
    block_id: &BlockId,
    timestamp: Option<&Time>,
    chain_id: &str,
) -> Result<Vec<u8>, Error> {
    let height: i64 = height.try_into().map_err(|_| Error::HeightOutOfRange)?;
    let round: i64 = i64::from(round);

    let mut buf = Vec::new();
    write_tag(&mut buf, 1, 0);
    write_varint(&mut buf, SIGNED_MSG_TYPE_PRECOMMIT);
    write_sfixed64_field(&mut buf, 2, height);
    write_sfixed64_field(&mut buf, 3, round);
    let block_id_body = encode_block_id(block_id);
    write_message_field(&mut buf, 4, &block_id_body);
    if let Some(time) = timestamp {
        let timestamp_body = encode_timestamp(time)?;
        write_message_field(&mut buf, 5, &timestamp_body);
    }
    write_bytes_field(&mut buf, 6, chain_id.as_bytes());
    Ok(buf)
}

/// Builds the exact bytes a validator's Ed25519 signature is checked
/// against: a varint encoding the vote's byte length, followed by the
/// canonical vote encoding itself (`encode_length_delimited_to_vec`'s
/// framing, matching the teacher's `prost`-generated `CanonicalVote`).
pub fn signable_bytes(
    height: i128,
    round: u32,
    block_id: &BlockId,
    timestamp: Option<&Time>,
    chain_id: &str,
) -> Result<Vec<u8>, Error> {
    let vote = canonical_vote_bytes(height, round, block_id, timestamp, chain_id)?;
    let mut out = Vec::with_capacity(vote.len() + 4);
    write_varint(&mut out, vote.len() as u64);
    out.extend(vote);
    Ok(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("commit height does not fit in a 64-bit signed integer")]
    HeightOutOfRange,
    #[error("timestamp seconds does not fit in a 64-bit signed integer")]
    TimestampOutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_id() -> BlockId {
        BlockId {
            hash: [0x11; 32],
            part_set_header: PartSetHeader {
                total: 1,
                hash: [0x22; 32],
            },
        }
    }

    #[test]
    fn prefixes_with_a_length_delimiter() {
        let vote = canonical_vote_bytes(1, 0, &block_id(), None, "test-chain").unwrap();
        let bytes = signable_bytes(1, 0, &block_id(), None, "test-chain").unwrap();
        assert_eq!(bytes[0], vote.len() as u8);
        assert_eq!(&bytes[1..], vote.as_slice());
    }

    #[test]
    fn omits_zero_round() {
        let with_zero_round = canonical_vote_bytes(1, 0, &block_id(), None, "test-chain").unwrap();
        let with_nonzero_round =
            canonical_vote_bytes(1, 5, &block_id(), None, "test-chain").unwrap();
        assert!(with_zero_round.len() < with_nonzero_round.len());
    }

    #[test]
    fn omits_absent_timestamp() {
        let without_ts = canonical_vote_bytes(1, 0, &block_id(), None, "test-chain").unwrap();
        let with_ts = canonical_vote_bytes(
            1,
            0,
            &block_id(),
            Some(&Time {
                seconds: 100,
                nanos: 0,
            }),
            "test-chain",
        )
        .unwrap();
        assert!(with_ts.len() > without_ts.len());
    }

    #[test]
    fn differs_on_block_id_change() {
        let a = canonical_vote_bytes(1, 0, &block_id(), None, "test-chain").unwrap();
        let mut flipped = block_id();
        flipped.hash[0] ^= 0x01;
        let b = canonical_vote_bytes(1, 0, &flipped, None, "test-chain").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn chain_id_is_encoded_last() {
        let bytes = canonical_vote_bytes(1, 0, &block_id(), None, "test-chain").unwrap();
        // field 6, wire type 2 => tag byte 0x32
        let tag_pos = bytes.iter().rposition(|&b| b == 0x32).unwrap();
        assert!(bytes[tag_pos..].ends_with(b"test-chain"));
    }
}
