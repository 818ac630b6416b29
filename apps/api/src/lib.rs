//! Giftwise — gift recommendation API.
//!
//! One LLM-backed generation route plus mock authentication. The `client`
//! module is the Rust side of the wizard's API contract.

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod gifts;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;
