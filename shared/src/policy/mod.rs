//! Status / authorization policy
//!
//! Pure functions every view goes through to decide:
//! - whether an actor may edit a record or change its status ([`access`])
//! - which statuses a record may move to and how the status control renders ([`status`])
//! - the label and color of any enumerated code ([`display`])
//!
//! Nothing here performs I/O or panics. Absent actors or records are
//! ordinary inputs and always fail closed.

pub mod access;
pub mod display;
pub mod status;

pub use access::{
    Actor, RecordParties, can_change_status, can_edit_record, can_manage_directory,
    can_modify_comment,
};
pub use display::{ColorToken, Domain, color_of, label_of};
pub use status::{
    DocumentAction, EntityKind, StatusCode, StatusControl, StatusRecord, document_actions,
    legal_statuses, status_control, transition_targets,
};
