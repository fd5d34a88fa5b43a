#![expect(
    clippy::missing_panics_doc,
    reason = "clippy lints that are not ok in production code but acceptable or wanted in tests"
)]

pub mod firm_only;
pub mod helpers;
pub mod shutdown;
pub mod soft_and_firm;
pub mod soft_only;

use helpers::{
    rollup_namespace,
    sequencer_namespace,
    ROLLUP_ID,
    SEQUENCER_CHAIN_ID,
};
