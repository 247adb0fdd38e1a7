//! HR Client - HTTP client for the HR management backend
//!
//! Cookie-session transport with one-shot re-authentication, one accessor
//! per backend resource, and the small persisted state a view layer needs
//! (signed-in user, last visited route). Authorization and display rules
//! live in [`shared::policy`].

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod notice;
pub mod store;

pub use api::{Disposition, FileContent, Upload};
pub use config::{ClientConfig, LogConfig};
pub use error::{ClientError, ClientResult, ErrorKind};
pub use http::HrClient;
pub use notice::{Notice, NoticeLevel};
pub use store::{DEFAULT_ROUTE, JsonStore, PUBLIC_ROUTES, RouteMemory, SessionSnapshot, SessionStore};

// Re-export shared types for convenience
pub use shared::{ListResponse, LoginRequest};
