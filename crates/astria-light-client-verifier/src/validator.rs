//! Import and normalize the `/validators` RPC response into a
//! [`ValidatorSet`] and its accompanying [`CryptoIndex`].

use std::collections::HashMap;

use base64::{
    engine::general_purpose::STANDARD,
    Engine as _,
};
use ed25519_consensus::VerificationKey;
use serde::Deserialize;

use crate::address::{
    self,
    ADDRESS_LENGTH,
};

const PUB_KEY_TYPE: &str = "tendermint/PubKeyEd25519";

/// A single validator as imported from the `/validators` response.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    pub address: [u8; ADDRESS_LENGTH],
    pub public_key_raw: [u8; 32],
    pub voting_power: u128,
}

/// The validator set for one height, plus its total voting power and an
/// address-keyed index for O(1) lookup during verification.
#[derive(Debug, Clone)]
pub struct ValidatorSet {
    pub height: i128,
    pub total_voting_power: u128,
    pub validators: Vec<Validator>,
    address_index: HashMap<String, usize>,
}

impl ValidatorSet {
    #[must_use]
    pub fn get(&self, address_hex: &str) -> Option<&Validator> {
        self.address_index
            .get(address_hex)
            .map(|&i| &self.validators[i])
    }

    #[must_use]
    pub fn contains(&self, address_hex: &str) -> bool {
        self.address_index.contains_key(address_hex)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

/// Maps an uppercase-hex validator address to a usable Ed25519 verifier
/// handle. A validator present in [`ValidatorSet`] but absent here had a key
/// that failed to load at import time; the verifier must treat that as a
/// known validator with an unverifiable signature, not as an unknown one.
#[derive(Debug, Clone, Default)]
pub struct CryptoIndex {
    keys: HashMap<String, VerificationKey>,
}

impl CryptoIndex {
    #[must_use]
    pub fn get(&self, address_hex: &str) -> Option<&VerificationKey> {
        self.keys.get(address_hex)
    }
}

/// Imports a `/validators` JSON document.
///
/// # Errors
/// Returns [`Error`] on any shape, length, or arithmetic violation. All
/// variants are fatal: a caller that received a malformed document has
/// nothing to verify against.
pub fn import_validator_set(json: &str) -> Result<(ValidatorSet, CryptoIndex), Error> {
    let raw: RawValidatorsDoc =
        serde_json::from_str(json).map_err(|e| Error(ErrorKind::Json(e.to_string())))?;

    let count: u64 = parse_decimal(&raw.count, "count")?;
    let total: u64 = parse_decimal(&raw.total, "total")?;
    let block_height: i128 = parse_decimal(&raw.block_height, "block_height")?;

    if raw.validators.is_empty() {
        return Err(Error(ErrorKind::EmptyValidatorSet));
    }
    if count != total || count < 2 {
        return Err(Error(ErrorKind::Pagination {
            count,
            total,
        }));
    }
    if raw.validators.len() as u64 != total {
        return Err(Error(ErrorKind::CountMismatch {
            declared: total,
            actual: raw.validators.len(),
        }));
    }

    let mut validators = Vec::with_capacity(raw.validators.len());
    let mut keys = HashMap::with_capacity(raw.validators.len());
    let mut address_index = HashMap::with_capacity(raw.validators.len());
    let mut total_voting_power: u128 = 0;

    for entry in raw.validators {
        let claimed_address = address::from_hex(&entry.address)
            .map_err(|_| Error(ErrorKind::MalformedAddress(entry.address.clone())))?;
        let claimed_address_hex = address::to_hex(&claimed_address);

        if entry.pub_key.key_type != PUB_KEY_TYPE {
            return Err(Error(ErrorKind::UnsupportedKeyType(
                entry.pub_key.key_type,
            )));
        }
        let key_bytes = STANDARD
            .decode(&entry.pub_key.value)
            .map_err(|_| Error(ErrorKind::MalformedKey(claimed_address_hex.clone())))?;
        let public_key_raw: [u8; 32] = key_bytes
            .try_into()
            .map_err(|_| Error(ErrorKind::MalformedKey(claimed_address_hex.clone())))?;

        let derived_address = address::derive_address(&public_key_raw);
        if derived_address != claimed_address {
            return Err(Error(ErrorKind::AddressKeyMismatch {
                claimed: claimed_address_hex,
                derived: address::to_hex(&derived_address),
            }));
        }

        if address_index.contains_key(&claimed_address_hex) {
            return Err(Error(ErrorKind::DuplicateAddress(claimed_address_hex)));
        }

        let voting_power: u128 = parse_decimal(&entry.voting_power, "voting_power")?;
        if voting_power < 1 {
            return Err(Error(ErrorKind::NonPositiveVotingPower(
                claimed_address_hex,
            )));
        }
        // proposer_priority is part of the wire shape but not part of the
        // Validator entity; only its parseability is part of the contract.
        let _: i128 = parse_decimal(&entry.proposer_priority, "proposer_priority")?;

        if let Ok(handle) = VerificationKey::try_from(&public_key_raw[..]) {
            keys.insert(claimed_address_hex.clone(), handle);
        }

        address_index.insert(claimed_address_hex, validators.len());
        total_voting_power += voting_power;
        validators.push(Validator {
            address: claimed_address,
            public_key_raw,
            voting_power,
        });
    }

    Ok((
        ValidatorSet {
            height: block_height,
            total_voting_power,
            validators,
            address_index,
        },
        CryptoIndex {
            keys,
        },
    ))
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
    #[error("failed to parse validator set document as JSON: {0}")]
    Json(String),
    #[error("validator set must not be empty")]
    EmptyValidatorSet,
    #[error("validator set must not be paginated: count={count}, total={total}")]
    Pagination {
        count: u64,
        total: u64,
    },
    #[error("declared total {declared} does not match {actual} validator entries")]
    CountMismatch {
        declared: u64,
        actual: usize,
    },
    #[error("malformed validator address `{0}`")]
    MalformedAddress(String),
    #[error("unsupported public key type `{0}`, only tendermint/PubKeyEd25519 is supported")]
    UnsupportedKeyType(String),
    #[error("malformed public key for validator `{0}`")]
    MalformedKey(String),
    #[error("validator address `{claimed}` does not match its public key (derived `{derived}`)")]
    AddressKeyMismatch {
        claimed: String,
        derived: String,
    },
    #[error("duplicate validator address `{0}`")]
    DuplicateAddress(String),
    #[error("validator `{0}` has non-positive voting power")]
    NonPositiveVotingPower(String),
    #[error("failed to parse field `{0}` as an integer: `{1}`")]
    InvalidInteger(&'static str, String),
}

#[derive(Debug, Deserialize)]
struct RawValidatorsDoc {
    block_height: String,
    validators: Vec<RawValidator>,
    count: String,
    total: String,
}

#[derive(Debug, Deserialize)]
struct RawValidator {
    address: String,
    pub_key: RawPubKey,
    voting_power: String,
    proposer_priority: String,
}

#[derive(Debug, Deserialize)]
struct RawPubKey {
    #[serde(rename = "type")]
    key_type: String,
    value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_pagination() {
        let json = r#"{"block_height":"1","validators":[
            {"address":"D223B03AE01B4A0296053E01A41AE1E2F9CDEBC9","pub_key":{"type":"tendermint/PubKeyEd25519","value":"tyPnz5GGblrx3PBjQRxZOHbzsPEI1E8lOh62QoPSWLw="},"voting_power":"1","proposer_priority":"0"},
            {"address":"D223B03AE01B4A0296053E01A41AE1E2F9CDEBC9","pub_key":{"type":"tendermint/PubKeyEd25519","value":"tyPnz5GGblrx3PBjQRxZOHbzsPEI1E8lOh62QoPSWLw="},"voting_power":"1","proposer_priority":"0"}
        ],"count":"2","total":"3"}"#;
        let err = import_validator_set(json).unwrap_err();
        assert!(err.to_string().contains("must not be paginated"));
    }

    #[test]
    fn rejects_unsupported_key_type() {
        let json = r#"{"block_height":"1","validators":[
            {"address":"D223B03AE01B4A0296053E01A41AE1E2F9CDEBC9","pub_key":{"type":"tendermint/PubKeySecp256k1","value":"tyPnz5GGblrx3PBjQRxZOHbzsPEI1E8lOh62QoPSWLw="},"voting_power":"1","proposer_priority":"0"},
            {"address":"0000000000000000000000000000000000000000","pub_key":{"type":"tendermint/PubKeyEd25519","value":"tyPnz5GGblrx3PBjQRxZOHbzsPEI1E8lOh62QoPSWLw="},"voting_power":"1","proposer_priority":"0"}
        ],"count":"2","total":"2"}"#;
        let err = import_validator_set(json).unwrap_err();
        assert!(err.to_string().contains("unsupported"));
    }

    #[test]
    fn rejects_address_key_mismatch() {
        let json = r#"{"block_height":"1","validators":[
            {"address":"0000000000000000000000000000000000000000","pub_key":{"type":"tendermint/PubKeyEd25519","value":"tyPnz5GGblrx3PBjQRxZOHbzsPEI1E8lOh62QoPSWLw="},"voting_power":"1","proposer_priority":"0"},
            {"address":"1111111111111111111111111111111111111111","pub_key":{"type":"tendermint/PubKeyEd25519","value":"tyPnz5GGblrx3PBjQRxZOHbzsPEI1E8lOh62QoPSWLw="},"voting_power":"1","proposer_priority":"0"}
        ],"count":"2","total":"2"}"#;
        let err = import_validator_set(json).unwrap_err();
        assert!(err.to_string().contains("does not match its public key"));
    }
}
