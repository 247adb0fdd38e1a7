//! Positions API

use serde::Serialize;
use shared::ListResponse;
use shared::models::{Position, PositionCreate, PositionUpdate};
use urlencoding::encode;
use validator::Validate;

use crate::error::ClientResult;
use crate::http::HrClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PositionFilter<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    department_id: Option<&'a str>,
}

#[derive(Debug, Clone, Copy)]
pub struct PositionApi<'a> {
    client: &'a HrClient,
}

impl HrClient {
    pub fn positions(&self) -> PositionApi<'_> {
        PositionApi { client: self }
    }
}

impl PositionApi<'_> {
    /// All positions, optionally limited to one department
    pub async fn list(&self, department_id: Option<&str>) -> ClientResult<ListResponse<Position>> {
        self.client
            .get_query("positions", &PositionFilter { department_id })
            .await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Position> {
        self.client.get(&format!("positions/{}", encode(id))).await
    }

    pub async fn create(&self, payload: &PositionCreate) -> ClientResult<Position> {
        payload.validate()?;
        self.client.post("positions", payload).await
    }

    pub async fn update(&self, id: &str, payload: &PositionUpdate) -> ClientResult<Position> {
        payload.validate()?;
        self.client.put(&format!("positions/{}", encode(id)), payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("positions/{}", encode(id))).await
    }
}
