pub(crate) mod api;
pub mod bridge;
pub mod bridge_service;
mod build_info;
pub mod config;
pub mod metrics_init;

pub use build_info::BUILD_INFO;
pub use config::Config;
