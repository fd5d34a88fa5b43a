//! A light-client commit verifier for a Tendermint/CometBFT-style chain.
//!
//! Given the `/validators` listing and the `/commit` document for a single
//! height, this crate decides whether the commit is signed by a
//! super-majority of the validator set's total voting power, checking each
//! signature against a canonical byte encoding reconstructed from the
//! commit.
//!
//! The crate is organized as three components that compose linearly:
//! [`validator`] imports the validator set, [`commit`] imports the signed
//! header, and [`verify`] checks one against the other. Fetching the JSON
//! documents, any CLI tooling, and cross-height trust propagation are left
//! to callers.

pub mod address;
pub mod canonical;
pub mod commit;
pub mod time;
pub mod validator;
pub mod verify;

pub use commit::{
    import_signed_header,
    SignedHeader,
};
pub use validator::{
    import_validator_set,
    CryptoIndex,
    ValidatorSet,
};
pub use verify::{
    verify_commit,
    VerifyOutcome,
};
