//! API Response types
//!
//! List endpoints answer either with a bare array or with a paginated
//! envelope, depending on the resource:
//!
//! ```json
//! [ { ... }, { ... } ]
//!
//! {
//!     "data": [ { ... } ],
//!     "meta": { "page": 1, "limit": 20, "total": 42 }
//! }
//! ```
//!
//! [`ListResponse`] accepts both.

use serde::{Deserialize, Serialize};

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Total number of items
    pub total: u64,
}

impl ListMeta {
    /// Total number of pages
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit as u64) as u32
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

/// List endpoint payload, bare or paginated
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Paged { data: Vec<T>, meta: ListMeta },
}

impl<T> ListResponse<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Paged { data, .. } => data,
            Self::Bare(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paged { data, .. } => data,
            Self::Bare(items) => items,
        }
    }

    /// Pagination metadata, when the endpoint paginates
    pub fn meta(&self) -> Option<&ListMeta> {
        match self {
            Self::Paged { meta, .. } => Some(meta),
            Self::Bare(_) => None,
        }
    }

    /// Total item count; a bare list is its own total
    pub fn total(&self) -> u64 {
        match self {
            Self::Paged { meta, .. } => meta.total,
            Self::Bare(items) => items.len() as u64,
        }
    }
}

/// Backend error body
///
/// `message` is either a single string or a list of validation messages.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<ErrorMessage>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorBody {
    /// Human-readable message, joining validation lists with "; "
    pub fn text(&self) -> Option<String> {
        match &self.message {
            Some(ErrorMessage::One(message)) => Some(message.clone()),
            Some(ErrorMessage::Many(messages)) if !messages.is_empty() => {
                Some(messages.join("; "))
            }
            _ => self.error.clone(),
        }
    }
}
