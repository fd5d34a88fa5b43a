// These are tests; failing with panics is ok.
#![allow(clippy::missing_panics_doc)]

mod ethereum;
mod mock_cometbft;
mod mock_sequencer;
mod test_bridge_withdrawer;

pub use self::{
    ethereum::default_rollup_address,
    mock_cometbft::*,
    mock_sequencer::MockSequencerServer,
    test_bridge_withdrawer::{
        assert_actions_eq,
        default_sequencer_address,
        make_bridge_unlock_action,
        make_ics20_withdrawal_action,
        TestBridgeWithdrawerConfig,
    },
};
