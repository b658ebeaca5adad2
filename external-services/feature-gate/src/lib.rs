//! Feature gate evaluation client for Paroki Engine
//!
//! A gate is an externally evaluated named boolean flag, resolved fresh per
//! decision. The process builds one [`GateClient`] at startup from
//! configuration and injects it wherever a gate decision is needed; this
//! crate owns no global state and no cache.

pub mod client;
pub mod error;

pub use client::{GateClient, HttpGateClient, StaticGateClient};
pub use error::{GateError, GateResult};
