//! Verifies that a [`SignedHeader`]'s commit is signed by a super-majority
//! of a [`ValidatorSet`]'s total voting power.

use ed25519_consensus::Signature;
use tracing::warn;

use crate::{
    address,
    canonical,
    commit::{
        BlockIdFlag,
        SignedHeader,
    },
    time::Time,
    validator::{
        CryptoIndex,
        ValidatorSet,
    },
};

/// The result of verifying one commit against one validator set. Always
/// produced when preconditions hold; never thrown as an error.
#[derive(Debug, Clone)]
pub struct VerifyOutcome {
    pub ok: bool,
    pub quorum: bool,
    pub signed_power: u128,
    pub total_power: u128,
    pub header_time: Option<Time>,
    pub app_hash: Vec<u8>,
    pub block_id_hash: [u8; 32],
    pub unknown_validators: Vec<String>,
    pub invalid_signatures: Vec<String>,
    pub counted_signatures: usize,
}

/// Verifies `signed_header`'s commit against `validator_set`/`crypto_index`.
///
/// # Errors
/// Returns [`Error`] only for malformed input that indicates a caller bug
/// (mismatched heights, an empty validator set, a commit with no block ID,
/// etc.) — never for a commit that simply fails to reach quorum. A
/// non-quorum commit is reported through the returned [`VerifyOutcome`],
/// not through this `Result`.
pub fn verify_commit(
    signed_header: &SignedHeader,
    validator_set: &ValidatorSet,
    crypto_index: &CryptoIndex,
) -> Result<VerifyOutcome, Error> {
    let header = &signed_header.header;
    let commit = &signed_header.commit;

    if header.height != commit.height {
        return Err(Error(ErrorKind::HeightMismatch {
            header: header.height,
            commit: commit.height,
        }));
    }
    if validator_set.is_empty() {
        return Err(Error(ErrorKind::EmptyValidatorSet));
    }
    if validator_set.total_voting_power == 0 {
        return Err(Error(ErrorKind::NonPositiveTotalPower));
    }
    {
        let mut seen = std::collections::HashSet::with_capacity(validator_set.len());
        for validator in &validator_set.validators {
            if !seen.insert(validator.address) {
                return Err(Error(ErrorKind::DuplicateAddress(address::to_hex(
                    &validator.address,
                ))));
            }
        }
    }
    // spec.md's preconditions additionally require that `commit.block_id` is
    // present with a non-empty hash, that its `part_set_header` is present
    // with a non-empty hash, and that `part_set_header.total` is
    // non-negative. `BlockId`/`PartSetHeader` are mandatory (non-`Option`)
    // fields with fixed-size `[u8; 32]` hashes and a `u32` total, so the
    // type system enforces all of these unconditionally; there is no
    // "absent" or "empty" state a constructed `Commit` can be in.

    let mut signed_power: u128 = 0;
    let mut unknown_validators = Vec::new();
    let mut invalid_signatures = Vec::new();
    let mut counted_signatures = 0usize;

    for sig in &commit.signatures {
        if sig.block_id_flag != BlockIdFlag::Commit {
            continue;
        }

        let addr_hex = address::to_hex(&sig.validator_address);
        let Some(validator) = validator_set.get(&addr_hex) else {
            unknown_validators.push(addr_hex);
            continue;
        };

        counted_signatures += 1;

        if sig.signature.is_empty() {
            warn!(address = %addr_hex, "commit vote missing a signature");
            invalid_signatures.push(addr_hex);
            continue;
        }

        let Some(verification_key) = crypto_index.get(&addr_hex) else {
            warn!(address = %addr_hex, "no usable key for validator, treating signature as invalid");
            invalid_signatures.push(addr_hex);
            continue;
        };

        let verified = verify_one_signature(
            commit.height,
            commit.round,
            &commit.block_id,
            sig.timestamp.as_ref(),
            &header.chain_id,
            verification_key,
            &sig.signature,
        );

        match verified {
            Ok(()) => signed_power += validator.voting_power,
            Err(()) => {
                warn!(address = %addr_hex, "signature verification failed");
                invalid_signatures.push(addr_hex);
            }
        }
    }

    let quorum = signed_power * 3 > validator_set.total_voting_power * 2;

    Ok(VerifyOutcome {
        ok: quorum,
        quorum,
        signed_power,
        total_power: validator_set.total_voting_power,
        header_time: Some(header.time),
        app_hash: header.app_hash.clone(),
        block_id_hash: commit.block_id.hash,
        unknown_validators,
        invalid_signatures,
        counted_signatures,
    })
}

/// Reconstructs the canonical sign-bytes and checks the Ed25519 signature.
/// Any failure — a malformed signature, a bad canonical encoding, a
/// cryptographic mismatch — collapses to `Err(())`: per spec this is
/// reported evidence, not a fatal error.
fn verify_one_signature(
    height: i128,
    round: u32,
    block_id: &crate::commit::BlockId,
    timestamp: Option<&Time>,
    chain_id: &str,
    verification_key: &ed25519_consensus::VerificationKey,
    signature_bytes: &[u8],
) -> Result<(), ()> {
    let Ok(signature) = Signature::try_from(signature_bytes) else {
        return Err(());
    };
    let Ok(sign_bytes) = canonical::signable_bytes(height, round, block_id, timestamp, chain_id)
    else {
        return Err(());
    };
    verification_key.verify(&signature, &sign_bytes).map_err(|_| ())
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(ErrorKind);

#[derive(Debug, thiserror::Error)]
enum ErrorKind {
    #[error("header height {header} does not match commit height {commit}")]
    HeightMismatch {
        header: i128,
        commit: i128,
    },
    #[error("validator set must not be empty")]
    EmptyValidatorSet,
    #[error("validator set total voting power must be positive")]
    NonPositiveTotalPower,
    #[error("duplicate validator address `{0}` in validator set")]
    DuplicateAddress(String),
}

#[cfg(test)]
mod tests {
    use base64::{
        engine::general_purpose::STANDARD,
        Engine as _,
    };
    use ed25519_consensus::SigningKey;

    use super::*;
    use crate::{
        commit::{
            import_signed_header,
            BlockId,
            PartSetHeader,
        },
        validator::import_validator_set,
    };

    struct Fixture {
        validators_json: String,
        commit_json: String,
    }

    /// Builds a self-consistent `/validators` + `/commit` fixture for `n`
    /// validators of equal power 1, all casting genuine `Commit` votes,
    /// using freshly generated keys (never hard-coded key material).
    fn build_fixture(n: usize, chain_id: &str, height: u64, round: u32) -> (Fixture, Vec<SigningKey>) {
        let seeds: Vec<[u8; 32]> = (0..n as u8).map(|i| [i + 1; 32]).collect();
        let signing_keys: Vec<SigningKey> = seeds.into_iter().map(SigningKey::from).collect();

        let block_id = BlockId {
            hash: [0xAB; 32],
            part_set_header: PartSetHeader {
                total: 1,
                hash: [0xCD; 32],
            },
        };

        let mut validators_entries = Vec::new();
        for key in &signing_keys {
            let verification_key = key.verification_key();
            let public_key_raw = verification_key.to_bytes();
            let addr = address::derive_address(&public_key_raw);
            let addr_hex = address::to_hex(&addr);
            validators_entries.push(format!(
                r#"{{"address":"{addr}","pub_key":{{"type":"tendermint/PubKeyEd25519","value":"{key_b64}"}},"voting_power":"1","proposer_priority":"0"}}"#,
                addr = addr_hex,
                key_b64 = STANDARD.encode(public_key_raw),
            ));
        }
        let validators_json = format!(
            r#"{{"block_height":"{height}","validators":[{entries}],"count":"{n}","total":"{n}"}}"#,
            height = height,
            entries = validators_entries.join(","),
            n = n,
        );

        let timestamp = "2023-07-05T19:02:55.206600022Z";
        let time = Time::parse(timestamp).unwrap();

        let mut signatures_entries = Vec::new();
        for key in &signing_keys {
            let sign_bytes = canonical::signable_bytes(
                i128::from(height),
                round,
                &block_id,
                Some(&time),
                chain_id,
            )
            .unwrap();
            let signature = key.sign(&sign_bytes);
            let addr_hex = address::to_hex(&address::derive_address(&key.verification_key().to_bytes()));
            signatures_entries.push(format!(
                r#"{{"block_id_flag":2,"validator_address":"{addr}","timestamp":"{ts}","signature":"{sig_b64}"}}"#,
                addr = addr_hex,
                ts = timestamp,
                sig_b64 = STANDARD.encode(signature.to_bytes()),
            ));
        }

        let commit_json = format!(
            r#"{{"signed_header":{{"header":{{"chain_id":"{chain_id}","height":"{height}","time":"{ts}","last_block_id":null,"last_commit_hash":"{h}","data_hash":"{h}","validators_hash":"{h}","next_validators_hash":"{h}","consensus_hash":"{h}","app_hash":"deadbeef","last_results_hash":"{h}","evidence_hash":"{h}","proposer_address":"{proposer}"}},"commit":{{"height":"{height}","round":{round},"block_id":{{"hash":"{bid_hash}","parts":{{"total":1,"hash":"{bid_parts_hash}"}}}},"signatures":[{sigs}]}}}}}}"#,
            chain_id = chain_id,
            height = height,
            ts = timestamp,
            h = "74".repeat(32),
            proposer = address::to_hex(&address::derive_address(&signing_keys[0].verification_key().to_bytes())),
            round = round,
            bid_hash = hex::encode_upper(block_id.hash),
            bid_parts_hash = hex::encode_upper(block_id.part_set_header.hash),
            sigs = signatures_entries.join(","),
        );

        (
            Fixture {
                validators_json,
                commit_json,
            },
            signing_keys,
        )
    }

    #[test]
    fn s1_happy_path() {
        let (fixture, _keys) = build_fixture(4, "test-chain", 100, 0);
        let (validator_set, crypto_index) = import_validator_set(&fixture.validators_json).unwrap();
        let signed_header = import_signed_header(&fixture.commit_json).unwrap();
        let outcome = verify_commit(&signed_header, &validator_set, &crypto_index).unwrap();

        assert!(outcome.ok);
        assert!(outcome.quorum);
        assert_eq!(outcome.signed_power, 4);
        assert_eq!(outcome.total_power, 4);
        assert_eq!(outcome.counted_signatures, 4);
        assert!(outcome.unknown_validators.is_empty());
        assert!(outcome.invalid_signatures.is_empty());
    }

    #[test]
    fn s2_tampered_block_hash_fails_all_signatures() {
        let (fixture, _keys) = build_fixture(4, "test-chain", 100, 0);
        let (validator_set, crypto_index) = import_validator_set(&fixture.validators_json).unwrap();
        let mut tampered = fixture.commit_json.clone();
        // flip the last two hex characters of block_id.hash (AB repeated -> ...ABAB, tamper to ...ABAC)
        let needle = "ABAB\",\"parts\"";
        let replacement = "ABAC\",\"parts\"";
        assert!(tampered.contains(needle), "fixture shape changed");
        tampered = tampered.replacen(needle, replacement, 1);

        let signed_header = import_signed_header(&tampered).unwrap();
        let outcome = verify_commit(&signed_header, &validator_set, &crypto_index).unwrap();

        assert!(!outcome.ok);
        assert!(!outcome.quorum);
        assert_eq!(outcome.signed_power, 0);
        assert_eq!(outcome.invalid_signatures.len(), outcome.counted_signatures);
        assert_eq!(outcome.counted_signatures, 4);
    }

    #[test]
    fn s3_two_absent_votes_miss_quorum() {
        let (fixture, _keys) = build_fixture(4, "test-chain", 100, 0);
        let (validator_set, crypto_index) = import_validator_set(&fixture.validators_json).unwrap();
        // turn the first two Commit votes into Absent votes with no signature.
        let mut commit_json = fixture.commit_json.clone();
        for _ in 0..2 {
            commit_json = commit_json.replacen(
                "\"block_id_flag\":2,",
                "\"block_id_flag\":1,",
                1,
            );
        }
        let signed_header = import_signed_header(&commit_json).unwrap();
        let outcome = verify_commit(&signed_header, &validator_set, &crypto_index).unwrap();

        assert!(!outcome.ok);
        assert!(!outcome.quorum);
        assert_eq!(outcome.counted_signatures, 2);
        assert!(outcome.invalid_signatures.is_empty());
    }

    #[test]
    fn s4_one_corrupted_signature_still_reaches_quorum() {
        let (fixture, _keys) = build_fixture(4, "test-chain", 100, 0);
        let (validator_set, crypto_index) = import_validator_set(&fixture.validators_json).unwrap();
        let signed_header_clean = import_signed_header(&fixture.commit_json).unwrap();
        let first_addr = address::to_hex(&signed_header_clean.commit.signatures[0].validator_address);

        let mut signed_header = signed_header_clean;
        signed_header.commit.signatures[0].signature[0] ^= 0x01;

        let outcome = verify_commit(&signed_header, &validator_set, &crypto_index).unwrap();

        assert!(outcome.ok);
        assert!(outcome.quorum);
        assert_eq!(outcome.invalid_signatures, vec![first_addr]);
        assert_eq!(outcome.counted_signatures, 4);
    }

    #[test]
    fn s5_unknown_validator_still_reaches_quorum() {
        let (fixture, _keys) = build_fixture(4, "test-chain", 100, 0);
        let (validator_set, crypto_index) = import_validator_set(&fixture.validators_json).unwrap();
        let mut signed_header = import_signed_header(&fixture.commit_json).unwrap();
        signed_header.commit.signatures[0].validator_address = [0xFF; 20];

        let outcome = verify_commit(&signed_header, &validator_set, &crypto_index).unwrap();

        assert!(outcome.quorum);
        assert_eq!(outcome.unknown_validators, vec!["FF".repeat(20)]);
        assert_eq!(outcome.counted_signatures, 3);
        assert!(outcome.invalid_signatures.is_empty());
    }

    #[test]
    fn rejects_height_mismatch_as_fatal() {
        let (fixture, _keys) = build_fixture(4, "test-chain", 100, 0);
        let (validator_set, crypto_index) = import_validator_set(&fixture.validators_json).unwrap();
        let mut signed_header = import_signed_header(&fixture.commit_json).unwrap();
        signed_header.commit.height += 1;

        let err = verify_commit(&signed_header, &validator_set, &crypto_index).unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }
}
