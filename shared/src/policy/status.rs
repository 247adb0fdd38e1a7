//! Status transition tables and status affordances

use serde::{Deserialize, Serialize};

use super::access::{Actor, RecordParties, can_change_status};
use super::display::{ColorToken, Domain, color_of, label_of};
use crate::models::{Document, DocumentStatus, Request, RequestStatus, Task, TaskStatus};

/// Record kinds that carry a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Task,
    Request,
    Document,
}

impl EntityKind {
    /// Display domain of this kind's status codes
    pub fn status_domain(&self) -> Domain {
        match self {
            Self::Task => Domain::TaskStatus,
            Self::Request => Domain::RequestStatus,
            Self::Document => Domain::DocumentStatus,
        }
    }
}

/// Status value of any record kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum StatusCode {
    Task(TaskStatus),
    Request(RequestStatus),
    Document(DocumentStatus),
}

impl StatusCode {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Task(_) => EntityKind::Task,
            Self::Request(_) => EntityKind::Request,
            Self::Document(_) => EntityKind::Document,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task(status) => status.as_str(),
            Self::Request(status) => status.as_str(),
            Self::Document(status) => status.as_str(),
        }
    }

    pub fn label(&self) -> String {
        label_of(self.as_str(), self.kind().status_domain()).into_owned()
    }

    pub fn color(&self) -> ColorToken {
        color_of(self.as_str(), self.kind().status_domain())
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TaskStatus> for StatusCode {
    fn from(status: TaskStatus) -> Self {
        Self::Task(status)
    }
}

impl From<RequestStatus> for StatusCode {
    fn from(status: RequestStatus) -> Self {
        Self::Request(status)
    }
}

impl From<DocumentStatus> for StatusCode {
    fn from(status: DocumentStatus) -> Self {
        Self::Document(status)
    }
}

/// Targets a document under review can be moved to
const DOCUMENT_TARGETS: [DocumentStatus; 2] = [DocumentStatus::Signed, DocumentStatus::Rejected];

/// Statuses a selector may offer for `kind`, in display order
pub fn legal_statuses(kind: EntityKind) -> Vec<StatusCode> {
    match kind {
        EntityKind::Task => TaskStatus::ALL.into_iter().map(Into::into).collect(),
        EntityKind::Request => RequestStatus::SELECTABLE.into_iter().map(Into::into).collect(),
        EntityKind::Document => DOCUMENT_TARGETS.into_iter().map(Into::into).collect(),
    }
}

/// Statuses a record currently at `current` may be moved to
///
/// Tasks and requests may select any legal status; reachability is left to
/// the backend. Documents only leave `under_review`.
pub fn transition_targets(current: StatusCode) -> Vec<StatusCode> {
    match current {
        StatusCode::Document(DocumentStatus::UnderReview) => legal_statuses(EntityKind::Document),
        StatusCode::Document(_) => Vec::new(),
        other => legal_statuses(other.kind()),
    }
}

/// A record with a status field
pub trait StatusRecord: RecordParties {
    fn status_code(&self) -> StatusCode;
}

impl StatusRecord for Task {
    fn status_code(&self) -> StatusCode {
        self.status.into()
    }
}

impl StatusRecord for Request {
    fn status_code(&self) -> StatusCode {
        self.status.into()
    }
}

impl StatusRecord for Document {
    fn status_code(&self) -> StatusCode {
        self.status.into()
    }
}

/// How a view renders a record's status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusControl {
    /// Interactive selector over `options`
    Selector {
        current: StatusCode,
        options: Vec<StatusCode>,
    },
    /// Read-only badge
    Badge { current: StatusCode },
}

impl StatusControl {
    pub fn current(&self) -> StatusCode {
        match self {
            Self::Selector { current, .. } | Self::Badge { current } => *current,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Selector { .. })
    }

    /// Whether selecting `target` would issue a transition
    pub fn offers(&self, target: StatusCode) -> bool {
        match self {
            Self::Selector { options, .. } => options.contains(&target),
            Self::Badge { .. } => false,
        }
    }
}

/// Status affordance for `record` as seen by `actor`
///
/// Never omits the status: without an actor, or without permission or
/// targets, the result is a badge.
pub fn status_control<R>(actor: Option<&Actor>, record: &R) -> StatusControl
where
    R: StatusRecord + ?Sized,
{
    let current = record.status_code();
    if !can_change_status(actor, Some(record)) {
        return StatusControl::Badge { current };
    }

    let options = transition_targets(current);
    if options.is_empty() {
        StatusControl::Badge { current }
    } else {
        StatusControl::Selector { current, options }
    }
}

/// Review actions on a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentAction {
    Sign,
    Reject,
}

impl DocumentAction {
    pub fn target_status(&self) -> DocumentStatus {
        match self {
            Self::Sign => DocumentStatus::Signed,
            Self::Reject => DocumentStatus::Rejected,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sign => "Sign",
            Self::Reject => "Reject",
        }
    }
}

/// Actions available on `document`, empty unless it is under review
pub fn document_actions(actor: Option<&Actor>, document: Option<&Document>) -> Vec<DocumentAction> {
    let Some(doc) = document else {
        return Vec::new();
    };
    if doc.status != DocumentStatus::UnderReview || !can_change_status(actor, Some(doc)) {
        return Vec::new();
    }
    vec![DocumentAction::Sign, DocumentAction::Reject]
}
