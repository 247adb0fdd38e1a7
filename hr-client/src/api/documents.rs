//! Documents API

use shared::models::{Document, DocumentQuery};
use shared::policy::DocumentAction;
use shared::{ListResponse, StatusChange};
use urlencoding::encode;

use crate::error::ClientResult;
use crate::http::HrClient;

#[derive(Debug, Clone, Copy)]
pub struct DocumentApi<'a> {
    client: &'a HrClient,
}

impl HrClient {
    pub fn documents(&self) -> DocumentApi<'_> {
        DocumentApi { client: self }
    }
}

impl DocumentApi<'_> {
    pub async fn list(&self, query: &DocumentQuery) -> ClientResult<ListResponse<Document>> {
        self.client.get_query("documents", query).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Document> {
        self.client.get(&format!("documents/{}", encode(id))).await
    }

    /// Sign or reject a document under review
    ///
    /// Documents in any other status are rejected by the backend.
    pub async fn apply_action(&self, id: &str, action: DocumentAction) -> ClientResult<Document> {
        let status = action.target_status();
        tracing::info!(document_id = id, action = ?action, "Applying document action");
        self.client
            .patch(&format!("documents/{}/status", encode(id)), &StatusChange { status })
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("documents/{}", encode(id))).await
    }
}
