//! Document Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Draft,
    UnderReview,
    Signed,
    Rejected,
    Expired,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 5] = [
        DocumentStatus::Draft,
        DocumentStatus::UnderReview,
        DocumentStatus::Signed,
        DocumentStatus::Rejected,
        DocumentStatus::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::UnderReview => "under_review",
            Self::Signed => "signed",
            Self::Rejected => "rejected",
            Self::Expired => "expired",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Contract,
    Certificate,
    Order,
    Statement,
    Report,
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 6] = [
        DocumentType::Contract,
        DocumentType::Certificate,
        DocumentType::Order,
        DocumentType::Statement,
        DocumentType::Report,
        DocumentType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Certificate => "certificate",
            Self::Order => "order",
            Self::Statement => "statement",
            Self::Report => "report",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub status: DocumentStatus,
    /// Author (employee id)
    #[serde(default)]
    pub created_by: Option<String>,
    /// Employee responsible for signing
    #[serde(default)]
    pub reviewer_id: Option<String>,
    /// Employee the document concerns
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Request this document was issued for
    #[serde(default)]
    pub source_request_id: Option<String>,
    /// Stored file, fetched through `files/{fileName}`
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Document list filter
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
