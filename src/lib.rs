//! Strategic-scenario simulation, prioritization, and comparison engine.
//!
//! Local, deterministic models (runway projection, portfolio scoring,
//! scenario comparison) plus the validated contract with an external
//! analysis provider and a session-scoped scenario store.

pub mod compare;
pub mod config;
pub mod contract;
pub mod error;
pub mod output;
pub mod portfolio;
pub mod projection;
pub mod provider;
pub mod store;
pub mod sweep;
pub mod variables;
