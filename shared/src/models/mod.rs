//! Data models
//!
//! Wire shapes exchanged with the HR backend. Field names are camelCase on
//! the wire, enum codes snake_case. All ids are backend-assigned strings.

pub mod comment;
pub mod department;
pub mod document;
pub mod employee;
pub mod position;
pub mod priority;
pub mod request;
pub mod statistics;
pub mod task;
pub mod user;

// Re-exports
pub use comment::*;
pub use department::*;
pub use document::*;
pub use employee::*;
pub use position::*;
pub use priority::*;
pub use request::*;
pub use statistics::*;
pub use task::*;
pub use user::*;
