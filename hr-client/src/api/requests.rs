//! Requests API (document, certificate and leave requests)

use shared::models::{Request, RequestCreate, RequestQuery, RequestStatus, RequestUpdate};
use shared::{ListResponse, StatusChange};
use urlencoding::encode;
use validator::Validate;

use crate::error::ClientResult;
use crate::http::HrClient;

#[derive(Debug, Clone, Copy)]
pub struct RequestApi<'a> {
    client: &'a HrClient,
}

impl HrClient {
    pub fn requests(&self) -> RequestApi<'_> {
        RequestApi { client: self }
    }
}

impl RequestApi<'_> {
    pub async fn list(&self, query: &RequestQuery) -> ClientResult<ListResponse<Request>> {
        self.client.get_query("requests", query).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Request> {
        self.client.get(&format!("requests/{}", encode(id))).await
    }

    /// Leave requests must carry a valid date range
    pub async fn create(&self, payload: &RequestCreate) -> ClientResult<Request> {
        payload.validate()?;
        self.client.post("requests", payload).await
    }

    pub async fn update(&self, id: &str, payload: &RequestUpdate) -> ClientResult<Request> {
        payload.validate()?;
        self.client.put(&format!("requests/{}", encode(id)), payload).await
    }

    pub async fn update_status(&self, id: &str, status: RequestStatus) -> ClientResult<Request> {
        tracing::debug!(request_id = id, status = %status, "Changing request status");
        self.client
            .patch(&format!("requests/{}/status", encode(id)), &StatusChange { status })
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("requests/{}", encode(id))).await
    }
}
