//! trawl-core
//!
//! Configuration snapshot, credential validation, and the result types
//! shared by the agent adapter and the HTTP layer.
//! No AWS SDK dependency.

pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod session;
