//! Reporting Models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Dashboard overview
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_employees: u64,
    pub active_employees: u64,
    #[serde(default)]
    pub total_departments: u64,
    /// Task counts keyed by status code
    #[serde(default)]
    pub tasks_by_status: HashMap<String, u64>,
    /// Request counts keyed by status code
    #[serde(default)]
    pub requests_by_status: HashMap<String, u64>,
    #[serde(default)]
    pub overdue_tasks: u64,
}

impl Overview {
    pub fn total_tasks(&self) -> u64 {
        self.tasks_by_status.values().sum()
    }
}

/// Per-assignee task workload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeWorkload {
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub total: u64,
    #[serde(default)]
    pub completed: u64,
    #[serde(default)]
    pub overdue: u64,
}

impl AssigneeWorkload {
    /// Share of completed tasks, 0.0 when there are none
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_total_tasks() {
        let json = r#"{"totalEmployees":10,"activeEmployees":8,"tasksByStatus":{"todo":3,"done":4}}"#;
        let overview: Overview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.total_tasks(), 7);
        assert_eq!(overview.overdue_tasks, 0);
    }

    #[test]
    fn test_completion_rate() {
        let mut workload = AssigneeWorkload {
            employee_id: "E1".into(),
            employee_name: None,
            total: 0,
            completed: 0,
            overdue: 0,
        };
        assert_eq!(workload.completion_rate(), 0.0);
        workload.total = 4;
        workload.completed = 1;
        assert_eq!(workload.completion_rate(), 0.25);
    }
}
