//! Stored files (comment attachments, generated documents)

use std::path::{Path, PathBuf};

use reqwest::header::CONTENT_TYPE;
use urlencoding::encode;

use crate::error::ClientResult;
use crate::http::HrClient;

/// How a fetched file should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Save to disk
    Download,
    /// Show in place (images only)
    Inline,
}

/// File body fetched from the backend
#[derive(Debug, Clone)]
pub struct FileContent {
    pub file_name: String,
    pub content_type: String,
    pub disposition: Disposition,
    pub bytes: Vec<u8>,
}

impl FileContent {
    pub fn is_inline(&self) -> bool {
        self.disposition == Disposition::Inline
    }

    /// Write the file into `dir` under its own name, returning the full path
    pub fn save_to(&self, dir: impl AsRef<Path>) -> ClientResult<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let name = Path::new(&self.file_name)
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "download".into());
        let path = dir.join(name);
        std::fs::write(&path, &self.bytes)?;
        tracing::debug!(path = %path.display(), size = self.bytes.len(), "Saved file");
        Ok(path)
    }
}

fn is_image(content_type: &str) -> bool {
    content_type.trim().to_ascii_lowercase().starts_with("image/")
}

#[derive(Debug, Clone, Copy)]
pub struct FileApi<'a> {
    client: &'a HrClient,
}

impl HrClient {
    pub fn files(&self) -> FileApi<'_> {
        FileApi { client: self }
    }
}

impl FileApi<'_> {
    /// Fetch a file for saving
    pub async fn download(&self, file_name: &str) -> ClientResult<FileContent> {
        self.fetch(file_name, Disposition::Download).await
    }

    /// Fetch a file for viewing
    ///
    /// Images come back inline; anything else falls back to a download.
    pub async fn view(&self, file_name: &str) -> ClientResult<FileContent> {
        self.fetch(file_name, Disposition::Inline).await
    }

    async fn fetch(&self, file_name: &str, wanted: Disposition) -> ClientResult<FileContent> {
        let path = format!("files/{}", encode(file_name));
        let response = self.client.send(&path, |c, url| c.get(url)).await?;
        let response = HrClient::check(response).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| {
                mime_guess::from_path(file_name)
                    .first_or_octet_stream()
                    .essence_str()
                    .to_string()
            });
        let bytes = response.bytes().await?.to_vec();

        let disposition = match wanted {
            Disposition::Inline if is_image(&content_type) => Disposition::Inline,
            _ => Disposition::Download,
        };

        Ok(FileContent {
            file_name: file_name.to_string(),
            content_type,
            disposition,
            bytes,
        })
    }
}
