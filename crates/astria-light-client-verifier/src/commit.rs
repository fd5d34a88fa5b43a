//! Import and normalize the `/commit` RPC response into a [`SignedHeader`].

use base64::{
    engine::general_purpose::STANDARD,
    Engine as _,
};
use serde::Deserialize;

use crate::{
    address::{
        self,
        ADDRESS_LENGTH,
    },
    time::Time,
};

const HASH_LENGTH: usize = 32;
const SIGNATURE_LENGTH: usize = 64;

/// The total count of parts a block was split into, plus the Merkle root
/// hash over those parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartSetHeader {
    pub total: u32,
    pub hash: [u8; HASH_LENGTH],
}

/// Canonical identity of a block: its hash plus its part-set header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockId {
    pub hash: [u8; HASH_LENGTH],
    pub part_set_header: PartSetHeader,
}

/// `block.Version{ Block, App }`, defaulting to `0` on both fields when the
/// header omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Version {
    pub block: i128,
    pub app: i128,
}

#[derive(Debug, Clone)]
pub struct Header {
    pub version: Version,
    pub chain_id: String,
    pub height: i128,
    pub time: Time,
    pub last_block_id: Option<BlockId>,
    pub last_commit_hash: [u8; HASH_LENGTH],
    pub data_hash: [u8; HASH_LENGTH],
    pub validators_hash: [u8; HASH_LENGTH],
    pub next_validators_hash: [u8; HASH_LENGTH],
    pub consensus_hash: [u8; HASH_LENGTH],
    pub app_hash: Vec<u8>,
    pub last_results_hash: [u8; HASH_LENGTH],
    pub evidence_hash: [u8; HASH_LENGTH],
    pub proposer_address: [u8; ADDRESS_LENGTH],
}

/// The three-valued flag tendermint attaches to a commit signature slot.
/// `0` (unknown/unset) is reserved and never produced by a valid commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockIdFlag {
    Absent,
    Commit,
    Nil,
}

impl BlockIdFlag {
    fn from_i64(v: i64) -> Option<Self> {
        match v {
            1 => Some(Self::Absent),
            2 => Some(Self::Commit),
            3 => Some(Self::Nil),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommitSig {
    pub block_id_flag: BlockIdFlag,
    pub validator_address: [u8; ADDRESS_LENGTH],
    pub timestamp: Option<Time>,
    /// Empty for `Absent`/`Nil` votes, exactly 64 bytes for a `Commit` vote.
    pub signature: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct Commit {
    pub height: i128,
    pub round: u32,
    pub block_id: BlockId,
    pub signatures: Vec<CommitSig>,
}

#[derive(Debug, Clone)]
pub struct SignedHeader {
    pub header: Header,
    pub commit: Commit,
}

/// Imports a `/commit` JSON document's `signed_header` object.
///
/// # Errors
/// Returns [`Error`] on any shape, length, or height-consistency violation.
/// All variants are fatal.
pub fn import_signed_header(json: &str) -> Result<SignedHeader, Error> {
    let raw: RawDoc = serde_json::from_str(json).map_err(|e| Error(ErrorKind::Json(e.to_string())))?;
    let raw = raw.signed_header;

    let header_height: i128 = parse_decimal(&raw.header.height, "header.height")?;
    let commit_height: i128 = parse_decimal(&raw.commit.height, "commit.height")?;
    if header_height != commit_height {
        return Err(Error(ErrorKind::HeightMismatch {
            header: header_height,
            commit: commit_height,
        }));
    }

    let version = match raw.header.version {
        Some(v) => Version {
            block: parse_decimal(&v.block, "header.version.block")?,
            app: parse_decimal(&v.app, "header.version.app")?,
        },
        None => Version::default(),
    };

    let last_block_id = raw
        .header
        .last_block_id
        .map(convert_block_id)
        .transpose()?;

    let header = Header {
        version,
        chain_id: raw.header.chain_id,
        height: header_height,
        time: Time::parse(&raw.header.time).map_err(|_| {
            Error(ErrorKind::InvalidTimestamp(raw.header.time.clone()))
        })?,
        last_block_id,
        last_commit_hash: parse_hash(&raw.header.last_commit_hash, "header.last_commit_hash")?,
        data_hash: parse_hash(&raw.header.data_hash, "header.data_hash")?,
        validators_hash: parse_hash(&raw.header.validators_hash, "header.validators_hash")?,
        next_validators_hash: parse_hash(
            &raw.header.next_validators_hash,
            "header.next_validators_hash",
        )?,
        consensus_hash: parse_hash(&raw.header.consensus_hash, "header.consensus_hash")?,
        app_hash: hex::decode(&raw.header.app_hash)
            .map_err(|_| Error(ErrorKind::MalformedHex("header.app_hash".into())))?,
        last_results_hash: parse_hash(&raw.header.last_results_hash, "header.last_results_hash")?,
        evidence_hash: parse_hash(&raw.header.evidence_hash, "header.evidence_hash")?,
        proposer_address: address::from_hex(&raw.header.proposer_address)
            .map_err(|_| Error(ErrorKind::MalformedAddress(raw.header.proposer_address.clone())))?,
    };

    let round: u32 = parse_decimal(&raw.commit.round.to_string(), "commit.round")?;

    let block_id = convert_block_id(raw.commit.block_id)?;

    if raw.commit.signatures.is_empty() {
        return Err(Error(ErrorKind::EmptySignatures));
    }
    let mut signatures = Vec::with_capacity(raw.commit.signatures.len());
    for sig in raw.commit.signatures {
        let block_id_flag = BlockIdFlag::from_i64(sig.block_id_flag)
            .ok_or(Error(ErrorKind::InvalidBlockIdFlag(sig.block_id_flag)))?;
        let validator_address = address::from_hex(&sig.validator_address)
            .map_err(|_| Error(ErrorKind::MalformedAddress(sig.validator_address.clone())))?;
        let timestamp = match sig.timestamp {
            Some(ref ts) if !ts.is_empty() => Some(
                Time::parse(ts).map_err(|_| Error(ErrorKind::InvalidTimestamp(ts.clone())))?,
            ),
            _ => None,
        };
        let signature = match sig.signature {
            None => Vec::new(),
            Some(ref s) if s.is_empty() => Vec::new(),
            Some(ref s) => {
                let bytes = STANDARD
                    .decode(s)
                    .map_err(|_| Error(ErrorKind::MalformedSignature))?;
                if bytes.len() != SIGNATURE_LENGTH {
                    return Err(Error(ErrorKind::MalformedSignature));
                }
                bytes
            }
        };
        signatures.push(CommitSig {
            block_id_flag,
            validator_address,
            timestamp,
            signature,
        });
    }

    Ok(SignedHeader {
        header,
        commit: Commit {
            height: commit_height,
            round,
            block_id,
            signatures,
        },
    })
}

fn convert_block_id(raw: RawBlockId) -> Result<BlockId, Error> {
    Ok(BlockId {
        hash: parse_hash(&raw.hash, "block_id.hash")?,
        part_set_header: PartSetHeader {
            total: raw.parts.total,
            hash: parse_hash(&raw.parts.hash, "block_id.parts.hash")?,
        },
    })
}

fn parse_hash(s: &str, field: &'static str) -> Result<[u8; HASH_LENGTH], Error> {
    let bytes = hex::decode(s).map_err(|_| Error(ErrorKind::MalformedHex(field.to_string())))?;
    bytes
        .try_into()
        .map_err(|_| Error(ErrorKind::MalformedHex(field.to_string())))
}

fn parse_decimal<T>(s: &str, field: &'static str) -> Result<T, Error>
where
    T: std::str::FromStr,
{
    s.parse::<T>()
        .map_err(|_| Error(ErrorKind::InvalidInteger(field, s.to_string())))
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(ErrorKind);

#[derive(Debug, thiserror::Error)]
enum ErrorKind {
    #[error("failed to parse commit document as JSON: {0}")]
    Json(String),
    #[error("header height {header} does not match commit height {commit}")]
    HeightMismatch {
        header: i128,
        commit: i128,
    },
    #[error("failed to parse field `{0}` as an integer: `{1}`")]
    InvalidInteger(&'static str, String),
    #[error("malformed hex in field `{0}`")]
    MalformedHex(String),
    #[error("malformed address `{0}`")]
    MalformedAddress(String),
    #[error("malformed timestamp `{0}`")]
    InvalidTimestamp(String),
    #[error("commit signatures must not be empty")]
    EmptySignatures,
    #[error("invalid block_id_flag `{0}`")]
    InvalidBlockIdFlag(i64),
    #[error("signature must be absent or exactly 64 bytes")]
    MalformedSignature,
}

#[derive(Debug, Deserialize)]
struct RawDoc {
    signed_header: RawSignedHeader,
}

#[derive(Debug, Deserialize)]
struct RawSignedHeader {
    header: RawHeader,
    commit: RawCommit,
}

#[derive(Debug, Deserialize)]
struct RawHeader {
    version: Option<RawVersion>,
    chain_id: String,
    height: String,
    time: String,
    last_block_id: Option<RawBlockId>,
    last_commit_hash: String,
    data_hash: String,
    validators_hash: String,
    next_validators_hash: String,
    consensus_hash: String,
    app_hash: String,
    last_results_hash: String,
    evidence_hash: String,
    proposer_address: String,
}

#[derive(Debug, Deserialize)]
struct RawVersion {
    block: String,
    app: String,
}

#[derive(Debug, Deserialize)]
struct RawBlockId {
    hash: String,
    parts: RawPartSetHeader,
}

#[derive(Debug, Deserialize)]
struct RawPartSetHeader {
    total: u32,
    hash: String,
}

#[derive(Debug, Deserialize)]
struct RawCommit {
    height: String,
    round: i64,
    block_id: RawBlockId,
    signatures: Vec<RawCommitSig>,
}

#[derive(Debug, Deserialize)]
struct RawCommitSig {
    block_id_flag: i64,
    validator_address: String,
    timestamp: Option<String>,
    signature: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(round: &str, block_id_flag: &str, signature: &str) -> String {
        let h = "74".repeat(32);
        let template = concat!(
            "{\"signed_header\":{\"header\":{\"chain_id\":\"test-chain\",\"height\":\"79\",",
            "\"time\":\"2023-07-05T19:02:55.206600022Z\",\"last_block_id\":null,",
            "\"last_commit_hash\":\"<H>\",\"data_hash\":\"<H>\",\"validators_hash\":\"<H>\",",
            "\"next_validators_hash\":\"<H>\",\"consensus_hash\":\"<H>\",\"app_hash\":\"deadbeef\",",
            "\"last_results_hash\":\"<H>\",\"evidence_hash\":\"<H>\",",
            "\"proposer_address\":\"D223B03AE01B4A0296053E01A41AE1E2F9CDEBC9\"},",
            "\"commit\":{\"height\":\"79\",\"round\":<ROUND>,",
            "\"block_id\":{\"hash\":\"<H>\",\"parts\":{\"total\":1,\"hash\":\"<H>\"}},",
            "\"signatures\":[{\"block_id_flag\":<FLAG>,",
            "\"validator_address\":\"D223B03AE01B4A0296053E01A41AE1E2F9CDEBC9\",",
            "\"timestamp\":\"2023-07-05T19:02:55.206600022Z\",\"signature\":<SIG>}]}}}",
        );
        template
            .replace("<H>", &h)
            .replace("<ROUND>", round)
            .replace("<FLAG>", block_id_flag)
            .replace("<SIG>", signature)
    }

    #[test]
    fn imports_well_formed_commit() {
        let sig = STANDARD.encode([7u8; 64]);
        let json = doc("0", "2", &format!("\"{sig}\""));
        let signed_header = import_signed_header(&json).unwrap();
        assert_eq!(signed_header.header.height, 79);
        assert_eq!(signed_header.commit.signatures.len(), 1);
        assert_eq!(signed_header.commit.round, 0);
    }

    #[test]
    fn rejects_height_mismatch() {
        let sig = STANDARD.encode([7u8; 64]);
        let json = doc("0", "2", &format!("\"{sig}\""))
            .replacen("\"height\":\"79\"", "\"height\":\"80\"", 1);
        let err = import_signed_header(&json).unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn rejects_malformed_signature_length() {
        let sig = STANDARD.encode([7u8; 10]);
        let json = doc("0", "2", &format!("\"{sig}\""));
        let err = import_signed_header(&json).unwrap_err();
        assert!(err.to_string().contains("64 bytes"));
    }

    #[test]
    fn allows_absent_vote_with_no_signature() {
        let json = doc("0", "1", "null");
        let signed_header = import_signed_header(&json).unwrap();
        assert!(signed_header.commit.signatures[0].signature.is_empty());
    }
}
