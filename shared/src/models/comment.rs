//! Comment Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use urlencoding::encode;
use validator::{Validate, ValidationError};

/// File stored by the backend and attached to a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Server-side name, used to fetch the content
    pub file_name: String,
    /// Name the file was uploaded with
    pub original_name: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

/// Record a comment thread hangs off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum CommentParent {
    Task(String),
    Request(String),
}

impl CommentParent {
    /// Path of the parent resource, e.g. `tasks/T1`; the id is percent-encoded
    pub fn path(&self) -> String {
        match self {
            Self::Task(id) => format!("tasks/{}", encode(id)),
            Self::Request(id) => format!("requests/{}", encode(id)),
        }
    }
}

/// Comment entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    /// Author (user id)
    pub author_id: String,
    #[serde(default)]
    pub author_name: Option<String>,
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn parent(&self) -> Option<CommentParent> {
        match (&self.task_id, &self.request_id) {
            (Some(id), _) => Some(CommentParent::Task(id.clone())),
            (None, Some(id)) => Some(CommentParent::Request(id.clone())),
            (None, None) => None,
        }
    }
}

/// Edit comment payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentUpdate {
    #[validate(custom(function = "not_blank"))]
    pub content: String,
}

/// Rejects empty and whitespace-only text
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("comment must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_path() {
        assert_eq!(CommentParent::Task("T1".into()).path(), "tasks/T1");
        assert_eq!(CommentParent::Request("R9".into()).path(), "requests/R9");
    }

    #[test]
    fn test_parent_path_encodes_id() {
        assert_eq!(CommentParent::Task("T1?x=1".into()).path(), "tasks/T1%3Fx%3D1");
        assert_eq!(CommentParent::Request("a/b#c".into()).path(), "requests/a%2Fb%23c");
    }

    #[test]
    fn test_blank_comment_update_rejected() {
        let blank = CommentUpdate {
            content: " \t\n".into(),
        };
        assert!(blank.validate().is_err());

        let text = CommentUpdate {
            content: " ok ".into(),
        };
        assert!(text.validate().is_ok());
    }

    #[test]
    fn test_parent_from_comment() {
        let json = r#"{"id":"C1","authorId":"U1","content":"done","requestId":"R1","attachments":[{"fileName":"a1.png","originalName":"scan.png"}]}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.parent(), Some(CommentParent::Request("R1".into())));
        assert_eq!(comment.attachments[0].original_name, "scan.png");
    }
}
