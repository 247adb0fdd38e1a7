//! Edit / status-change authorization
//!
//! Advisory only: these checks decide which affordances a view renders.
//! The backend remains the enforcement point.

use crate::models::{Comment, Document, Request, Role, Task, User};

/// Principal evaluated by the policy functions
pub type Actor = User;

/// Identities a record is bound to
pub trait RecordParties {
    /// Employee who created the record
    fn creator_id(&self) -> Option<&str>;

    /// Employees the record is assigned to
    fn assignee_ids(&self) -> Vec<&str>;

    /// Whether `employee_id` is the creator or one of the assignees
    fn involves(&self, employee_id: &str) -> bool {
        self.creator_id() == Some(employee_id) || self.assignee_ids().contains(&employee_id)
    }
}

impl RecordParties for Task {
    fn creator_id(&self) -> Option<&str> {
        Some(&self.creator_id)
    }

    fn assignee_ids(&self) -> Vec<&str> {
        self.assignee_ids.iter().map(String::as_str).collect()
    }
}

impl RecordParties for Request {
    fn creator_id(&self) -> Option<&str> {
        Some(&self.creator_id)
    }

    fn assignee_ids(&self) -> Vec<&str> {
        self.assignee_id.as_deref().into_iter().collect()
    }
}

impl RecordParties for Document {
    fn creator_id(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    /// The reviewer is the document's assignee
    fn assignee_ids(&self) -> Vec<&str> {
        self.reviewer_id.as_deref().into_iter().collect()
    }
}

/// Whether `actor` may edit the content of `record`
///
/// True iff the actor's linked employee created the record or is assigned
/// to it, or the actor holds a privileged role. Fails closed when either
/// side has not loaded.
pub fn can_edit_record<R>(actor: Option<&Actor>, record: Option<&R>) -> bool
where
    R: RecordParties + ?Sized,
{
    let (Some(actor), Some(record)) = (actor, record) else {
        return false;
    };

    if actor.role.is_privileged() {
        return true;
    }

    actor
        .employee_id
        .as_deref()
        .is_some_and(|employee_id| record.involves(employee_id))
}

/// Whether `actor` may move `record` to another status
///
/// Same rule as [`can_edit_record`]; there is no separate status tier.
pub fn can_change_status<R>(actor: Option<&Actor>, record: Option<&R>) -> bool
where
    R: RecordParties + ?Sized,
{
    can_edit_record(actor, record)
}

/// Comments can be edited or deleted by their author only
pub fn can_modify_comment(actor: Option<&Actor>, comment: Option<&Comment>) -> bool {
    match (actor, comment) {
        (Some(actor), Some(comment)) => actor.id == comment.author_id,
        _ => false,
    }
}

/// Employee, department and position maintenance
pub fn can_manage_directory(actor: Option<&Actor>) -> bool {
    actor.is_some_and(|actor| matches!(actor.role, Role::Admin | Role::Hr))
}
