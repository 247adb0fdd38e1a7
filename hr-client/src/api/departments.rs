//! Departments API

use shared::ListResponse;
use shared::models::{Department, DepartmentCreate, DepartmentUpdate};
use urlencoding::encode;
use validator::Validate;

use crate::error::ClientResult;
use crate::http::HrClient;

#[derive(Debug, Clone, Copy)]
pub struct DepartmentApi<'a> {
    client: &'a HrClient,
}

impl HrClient {
    pub fn departments(&self) -> DepartmentApi<'_> {
        DepartmentApi { client: self }
    }
}

impl DepartmentApi<'_> {
    pub async fn list(&self) -> ClientResult<ListResponse<Department>> {
        self.client.get("departments").await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Department> {
        self.client.get(&format!("departments/{}", encode(id))).await
    }

    pub async fn create(&self, payload: &DepartmentCreate) -> ClientResult<Department> {
        payload.validate()?;
        self.client.post("departments", payload).await
    }

    pub async fn update(&self, id: &str, payload: &DepartmentUpdate) -> ClientResult<Department> {
        payload.validate()?;
        self.client.put(&format!("departments/{}", encode(id)), payload).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("departments/{}", encode(id))).await
    }
}
