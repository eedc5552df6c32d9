//! Error types for the marketplace scripts.

use std::fmt;

/// Script error type.
#[derive(Debug)]
pub enum Error {
    /// Configuration error.
    Config(String),
    /// Filesystem error.
    Io(String),
    /// Malformed JSON in a deployment or front-end file.
    Json(String),
    /// RPC / sandbox communication error.
    Chain(String),
    /// A submitted transaction failed on chain.
    Transaction(String),
    /// No deployment recorded for the contract on the network.
    NotDeployed { contract_name: String, network: String },
    /// An expected event was missing from the transaction logs.
    MissingEvent(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "config error: {msg}"),
            Error::Io(msg) => write!(f, "io error: {msg}"),
            Error::Json(msg) => write!(f, "json error: {msg}"),
            Error::Chain(msg) => write!(f, "chain error: {msg}"),
            Error::Transaction(msg) => write!(f, "transaction failed: {msg}"),
            Error::NotDeployed {
                contract_name,
                network,
            } => write!(f, "no deployment of {contract_name} on {network}"),
            Error::MissingEvent(event) => write!(f, "event {event} not found in logs"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<near_workspaces::result::ExecutionFailure> for Error {
    fn from(e: near_workspaces::result::ExecutionFailure) -> Self {
        Error::Transaction(format!("{e:?}"))
    }
}

impl From<near_workspaces::error::Error> for Error {
    fn from(e: near_workspaces::error::Error) -> Self {
        Error::Chain(e.to_string())
    }
}
