//! Request Model (document / certificate / leave requests)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::Priority;

/// Request status
///
/// The type admits every status the backend may report. The subset offered
/// in a status selector is [`RequestStatus::SELECTABLE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    InProgress,
    Rejected,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 6] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::InProgress,
        RequestStatus::Rejected,
        RequestStatus::Completed,
        RequestStatus::Cancelled,
    ];

    /// Targets offered by the status selector, in display order
    pub const SELECTABLE: [RequestStatus; 4] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::InProgress,
        RequestStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::InProgress => "in_progress",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    Document,
    Certificate,
    LeaveVacation,
    LeaveSick,
    LeavePersonal,
    LeaveUnpaid,
    Other,
}

impl RequestType {
    pub const ALL: [RequestType; 7] = [
        RequestType::Document,
        RequestType::Certificate,
        RequestType::LeaveVacation,
        RequestType::LeaveSick,
        RequestType::LeavePersonal,
        RequestType::LeaveUnpaid,
        RequestType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Certificate => "certificate",
            Self::LeaveVacation => "leave_vacation",
            Self::LeaveSick => "leave_sick",
            Self::LeavePersonal => "leave_personal",
            Self::LeaveUnpaid => "leave_unpaid",
            Self::Other => "other",
        }
    }

    /// Leave requests carry a date range
    pub fn is_leave(&self) -> bool {
        matches!(
            self,
            Self::LeaveVacation | Self::LeaveSick | Self::LeavePersonal | Self::LeaveUnpaid
        )
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Creator (employee id)
    pub creator_id: String,
    /// Handling employee, if assigned
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub status: RequestStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Request {
    /// Inclusive day count of a leave request
    pub fn leave_days(&self) -> Option<i64> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if start <= end => Some((end - start).num_days() + 1),
            _ => None,
        }
    }
}

/// Create request payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_request_dates"))]
pub struct RequestCreate {
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    #[serde(default)]
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

fn validate_request_dates(payload: &RequestCreate) -> Result<(), ValidationError> {
    check_date_range(
        payload.request_type.is_leave(),
        payload.start_date,
        payload.end_date,
    )
}

/// Update request payload (content only)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_dates"))]
pub struct RequestUpdate {
    #[validate(length(min = 1, max = 255, message = "title must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

fn validate_update_dates(payload: &RequestUpdate) -> Result<(), ValidationError> {
    check_date_range(false, payload.start_date, payload.end_date)
}

fn check_date_range(
    required: bool,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(ValidationError::new("date_range")
            .with_message("start date must not be after end date".into())),
        (None, _) | (_, None) if required => Err(ValidationError::new("date_range")
            .with_message("leave requests need a start and end date".into())),
        _ => Ok(()),
    }
}

/// Request list filter
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub request_type: Option<RequestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
