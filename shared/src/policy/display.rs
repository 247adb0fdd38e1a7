//! Display labels and colors for enumerated codes
//!
//! Both lookups are total: a code outside the table labels as itself and
//! takes [`ColorToken::Default`].

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Code families with their own label table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    TaskStatus,
    RequestStatus,
    DocumentStatus,
    DocumentType,
    RequestType,
    Priority,
    Role,
}

/// Tag color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    #[default]
    Default,
    Blue,
    Cyan,
    Green,
    Gold,
    Orange,
    Red,
    Purple,
    Gray,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Green => "green",
            Self::Gold => "gold",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Gray => "gray",
        }
    }
}

type Entry = (&'static str, &'static str, ColorToken);

const TASK_STATUS: &[Entry] = &[
    ("todo", "To do", ColorToken::Default),
    ("in_progress", "In progress", ColorToken::Blue),
    ("review", "In review", ColorToken::Purple),
    ("done", "Done", ColorToken::Green),
    ("cancelled", "Cancelled", ColorToken::Red),
];

const REQUEST_STATUS: &[Entry] = &[
    ("pending", "Pending", ColorToken::Gold),
    ("approved", "Approved", ColorToken::Green),
    ("in_progress", "In progress", ColorToken::Blue),
    ("rejected", "Rejected", ColorToken::Red),
    ("completed", "Completed", ColorToken::Cyan),
    ("cancelled", "Cancelled", ColorToken::Gray),
];

const DOCUMENT_STATUS: &[Entry] = &[
    ("draft", "Draft", ColorToken::Default),
    ("under_review", "Under review", ColorToken::Gold),
    ("signed", "Signed", ColorToken::Green),
    ("rejected", "Rejected", ColorToken::Red),
    ("expired", "Expired", ColorToken::Gray),
];

const DOCUMENT_TYPE: &[Entry] = &[
    ("contract", "Employment contract", ColorToken::Blue),
    ("certificate", "Certificate", ColorToken::Cyan),
    ("order", "Order", ColorToken::Purple),
    ("statement", "Statement", ColorToken::Gold),
    ("report", "Report", ColorToken::Default),
    ("other", "Other", ColorToken::Default),
];

const REQUEST_TYPE: &[Entry] = &[
    ("document", "Document", ColorToken::Blue),
    ("certificate", "Certificate", ColorToken::Cyan),
    ("leave_vacation", "Vacation leave", ColorToken::Green),
    ("leave_sick", "Sick leave", ColorToken::Orange),
    ("leave_personal", "Personal leave", ColorToken::Purple),
    ("leave_unpaid", "Unpaid leave", ColorToken::Gold),
    ("other", "Other", ColorToken::Default),
];

const PRIORITY: &[Entry] = &[
    ("low", "Low", ColorToken::Green),
    ("medium", "Medium", ColorToken::Blue),
    ("high", "High", ColorToken::Orange),
    ("critical", "Critical", ColorToken::Red),
];

const ROLE: &[Entry] = &[
    ("admin", "Administrator", ColorToken::Red),
    ("hr", "HR", ColorToken::Purple),
    ("manager", "Manager", ColorToken::Blue),
    ("employee", "Employee", ColorToken::Default),
];

fn table(domain: Domain) -> &'static [Entry] {
    match domain {
        Domain::TaskStatus => TASK_STATUS,
        Domain::RequestStatus => REQUEST_STATUS,
        Domain::DocumentStatus => DOCUMENT_STATUS,
        Domain::DocumentType => DOCUMENT_TYPE,
        Domain::RequestType => REQUEST_TYPE,
        Domain::Priority => PRIORITY,
        Domain::Role => ROLE,
    }
}

fn lookup(code: &str, domain: Domain) -> Option<&'static Entry> {
    table(domain).iter().find(|(c, _, _)| *c == code)
}

/// Human-readable label of `code` in `domain`
pub fn label_of(code: &str, domain: Domain) -> Cow<'_, str> {
    match lookup(code, domain) {
        Some((_, label, _)) => Cow::Borrowed(*label),
        None => Cow::Borrowed(code),
    }
}

/// Display color of `code` in `domain`
pub fn color_of(code: &str, domain: Domain) -> ColorToken {
    lookup(code, domain)
        .map(|(_, _, color)| *color)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        DocumentStatus, DocumentType, Priority, RequestStatus, RequestType, Role, TaskStatus,
    };

    fn every_code() -> Vec<(Domain, &'static str)> {
        let mut codes = Vec::new();
        codes.extend(TaskStatus::ALL.iter().map(|s| (Domain::TaskStatus, s.as_str())));
        codes.extend(RequestStatus::ALL.iter().map(|s| (Domain::RequestStatus, s.as_str())));
        codes.extend(DocumentStatus::ALL.iter().map(|s| (Domain::DocumentStatus, s.as_str())));
        codes.extend(DocumentType::ALL.iter().map(|t| (Domain::DocumentType, t.as_str())));
        codes.extend(RequestType::ALL.iter().map(|t| (Domain::RequestType, t.as_str())));
        codes.extend(Priority::ALL.iter().map(|p| (Domain::Priority, p.as_str())));
        codes.extend(Role::ALL.iter().map(|r| (Domain::Role, r.as_str())));
        codes
    }

    #[test]
    fn test_every_code_has_label() {
        for (domain, code) in every_code() {
            let entry = lookup(code, domain);
            assert!(entry.is_some(), "{code} missing from {domain:?}");
            assert!(!label_of(code, domain).is_empty());
        }
    }

    #[test]
    fn test_tables_have_no_stray_codes() {
        let known = every_code();
        for domain in [
            Domain::TaskStatus,
            Domain::RequestStatus,
            Domain::DocumentStatus,
            Domain::DocumentType,
            Domain::RequestType,
            Domain::Priority,
            Domain::Role,
        ] {
            for (code, _, _) in table(domain) {
                assert!(known.contains(&(domain, *code)), "stray {code} in {domain:?}");
            }
        }
    }

    #[test]
    fn test_unknown_code_falls_back() {
        assert_eq!(label_of("archived", Domain::TaskStatus), "archived");
        assert_eq!(color_of("archived", Domain::TaskStatus), ColorToken::Default);
        assert_eq!(label_of("", Domain::Role), "");
    }

    #[test]
    fn test_domain_scoping() {
        // in_progress exists in both status tables with its own entry
        assert_eq!(label_of("in_progress", Domain::RequestStatus), "In progress");
        assert_eq!(label_of("signed", Domain::TaskStatus), "signed");
        assert_eq!(color_of("rejected", Domain::DocumentStatus), ColorToken::Red);
    }

    #[test]
    fn test_selected_labels() {
        assert_eq!(label_of("leave_sick", Domain::RequestType), "Sick leave");
        assert_eq!(label_of("hr", Domain::Role), "HR");
        assert_eq!(color_of("critical", Domain::Priority), ColorToken::Red);
        assert_eq!(ColorToken::Gold.as_str(), "gold");
    }
}
