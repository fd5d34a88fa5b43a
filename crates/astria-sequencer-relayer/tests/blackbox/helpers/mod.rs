mod mock_celestia_app_server;
mod mock_sequencer_server;
mod test_sequencer_relayer;

pub use self::{
    mock_celestia_app_server::MockCelestiaAppServer,
    mock_sequencer_server::{
        MockSequencerServer,
        SequencerBlockToMount,
    },
    test_sequencer_relayer::TestSequencerRelayerConfig,
};
