//! Scripts for deploying the NFT marketplace, propagating its address and ABI
//! to the front-end, and minting + listing a sample token.

pub mod config;
pub mod deploy;
pub mod deployments;
pub mod error;
pub mod events;
pub mod frontend;
pub mod mint;
pub mod network;

pub use config::{Config, NetworkKind};
pub use deployments::{DeploymentRecord, DeploymentRegistry, BASIC_NFT, NFT_MARKETPLACE};
pub use error::Error;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the fmt subscriber; `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
