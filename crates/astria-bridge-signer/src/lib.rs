mod bridge_signer;
mod build_info;
mod config;
mod grpc_server;
mod metrics;
mod verifier;

pub use bridge_signer::BridgeSigner;
pub use build_info::BUILD_INFO;
pub use config::Config;
pub use grpc_server::Server;
pub use metrics::Metrics;
pub use verifier::Verifier;
