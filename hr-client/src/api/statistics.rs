//! Statistics API (reporting)

use shared::models::{AssigneeWorkload, Overview};

use crate::error::ClientResult;
use crate::http::HrClient;

#[derive(Debug, Clone, Copy)]
pub struct StatisticsApi<'a> {
    client: &'a HrClient,
}

impl HrClient {
    pub fn statistics(&self) -> StatisticsApi<'_> {
        StatisticsApi { client: self }
    }
}

impl StatisticsApi<'_> {
    /// Dashboard counters
    pub async fn overview(&self) -> ClientResult<Overview> {
        self.client.get("statistics/overview").await
    }

    /// Task workload per assignee
    pub async fn tasks_by_assignee(&self) -> ClientResult<Vec<AssigneeWorkload>> {
        self.client.get("statistics/tasks-by-assignee").await
    }
}
