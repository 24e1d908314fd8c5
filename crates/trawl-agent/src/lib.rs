//! trawl-agent
//!
//! Bedrock agent invocation: credential gate, session setup, one streamed
//! `InvokeAgent` call, stream drain, and remote failure classification.

pub mod bedrock;
pub mod classify;
pub mod error;
pub mod invoke;
pub mod runtime;
pub mod stream;
