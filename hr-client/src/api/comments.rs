//! Comments API
//!
//! Comment threads hang off tasks and requests. New comments are posted as
//! multipart forms so files can travel with the text.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use shared::ListResponse;
use shared::models::{Comment, CommentParent, CommentUpdate};
use urlencoding::encode;
use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::http::HrClient;

/// Form field carrying attached files
const FILES_FIELD: &str = "files";

/// File to attach to a new comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Upload from memory; the content type is guessed from `file_name`
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read a file from disk
    pub fn from_path(path: impl AsRef<Path>) -> ClientResult<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ClientError::Validation(format!("invalid file name: {}", path.display())))?
            .to_string();
        let bytes = std::fs::read(path)?;
        Ok(Self::new(file_name, bytes))
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    fn to_part(&self) -> Part {
        let part = || Part::bytes(self.bytes.clone()).file_name(self.file_name.clone());
        part().mime_str(&self.content_type).unwrap_or_else(|_| part())
    }
}

fn comment_form(content: &str, uploads: &[Upload]) -> Form {
    uploads.iter().fold(
        Form::new().text("content", content.to_string()),
        |form, upload| form.part(FILES_FIELD, upload.to_part()),
    )
}

#[derive(Debug, Clone, Copy)]
pub struct CommentApi<'a> {
    client: &'a HrClient,
}

impl HrClient {
    pub fn comments(&self) -> CommentApi<'_> {
        CommentApi { client: self }
    }
}

impl CommentApi<'_> {
    /// Comments of a task or request, oldest first
    pub async fn list(&self, parent: &CommentParent) -> ClientResult<ListResponse<Comment>> {
        self.client.get(&format!("{}/comments", parent.path())).await
    }

    /// Post a comment with optional attachments
    pub async fn create(
        &self,
        parent: &CommentParent,
        content: &str,
        uploads: &[Upload],
    ) -> ClientResult<Comment> {
        if content.trim().is_empty() && uploads.is_empty() {
            return Err(ClientError::Validation(
                "comment must have text or attachments".to_string(),
            ));
        }

        let path = format!("{}/comments", parent.path());
        tracing::debug!(path = %path, attachments = uploads.len(), "Posting comment");
        let response = self
            .client
            .send(&path, |c, url| c.post(url).multipart(comment_form(content, uploads)))
            .await?;
        HrClient::decode(response).await
    }

    /// Replace the text of a comment; attachments are kept
    pub async fn update(&self, id: &str, content: &str) -> ClientResult<Comment> {
        let payload = CommentUpdate {
            content: content.to_string(),
        };
        payload.validate()?;
        self.client.put(&format!("comments/{}", encode(id)), &payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("comments/{}", encode(id))).await
    }
}
