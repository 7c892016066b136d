// WaniKani API module.
// Provides client and types for interacting with the WaniKani v2 REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::WaniKaniClient;
pub use types::*;
