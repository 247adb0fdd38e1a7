//! Tasks API

use shared::models::{Task, TaskCreate, TaskQuery, TaskStatus, TaskUpdate};
use shared::{ListResponse, StatusChange};
use urlencoding::encode;
use validator::Validate;

use crate::error::ClientResult;
use crate::http::HrClient;

#[derive(Debug, Clone, Copy)]
pub struct TaskApi<'a> {
    client: &'a HrClient,
}

impl HrClient {
    pub fn tasks(&self) -> TaskApi<'_> {
        TaskApi { client: self }
    }
}

impl TaskApi<'_> {
    pub async fn list(&self, query: &TaskQuery) -> ClientResult<ListResponse<Task>> {
        self.client.get_query("tasks", query).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Task> {
        self.client.get(&format!("tasks/{}", encode(id))).await
    }

    pub async fn create(&self, payload: &TaskCreate) -> ClientResult<Task> {
        payload.validate()?;
        self.client.post("tasks", payload).await
    }

    /// Update content fields; status goes through [`update_status`](Self::update_status)
    pub async fn update(&self, id: &str, payload: &TaskUpdate) -> ClientResult<Task> {
        payload.validate()?;
        self.client.put(&format!("tasks/{}", encode(id)), payload).await
    }

    /// Transition the task, returning the updated record
    pub async fn update_status(&self, id: &str, status: TaskStatus) -> ClientResult<Task> {
        tracing::debug!(task_id = id, status = %status, "Changing task status");
        self.client
            .patch(&format!("tasks/{}/status", encode(id)), &StatusChange { status })
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&format!("tasks/{}", encode(id))).await
    }
}
