//! Employees API (directory)

use shared::ListResponse;
use shared::models::{Employee, EmployeeCreate, EmployeeQuery, EmployeeUpdate};
use urlencoding::encode;
use validator::Validate;

use crate::error::ClientResult;
use crate::http::HrClient;

#[derive(Debug, Clone, Copy)]
pub struct EmployeeApi<'a> {
    client: &'a HrClient,
}

impl HrClient {
    pub fn employees(&self) -> EmployeeApi<'_> {
        EmployeeApi { client: self }
    }
}

impl EmployeeApi<'_> {
    pub async fn list(&self, query: &EmployeeQuery) -> ClientResult<ListResponse<Employee>> {
        self.client.get_query("employees", query).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Employee> {
        self.client.get(&format!("employees/{}", encode(id))).await
    }

    pub async fn create(&self, payload: &EmployeeCreate) -> ClientResult<Employee> {
        payload.validate()?;
        self.client.post("employees", payload).await
    }

    pub async fn update(&self, id: &str, payload: &EmployeeUpdate) -> ClientResult<Employee> {
        payload.validate()?;
        self.client.put(&format!("employees/{}", encode(id)), payload).await
    }

    /// Mark the employee inactive; directory records are never hard-deleted
    pub async fn deactivate(&self, id: &str) -> ClientResult<Employee> {
        let payload = EmployeeUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        self.client.put(&format!("employees/{}", encode(id)), &payload).await
    }
}
