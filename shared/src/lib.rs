//! Shared types for the HR client
//!
//! Wire models, list envelopes, auth DTOs and the status/authorization
//! policy used by every view.

pub mod client;
pub mod models;
pub mod policy;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{LoginRequest, StatusChange};
pub use response::{ErrorBody, ListMeta, ListResponse};
