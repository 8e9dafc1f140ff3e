//! Board Models
//!
//! Tickets and users as delivered by the board endpoint, plus the typed
//! status/priority vocabularies used to group and decorate them.

use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Ticket identifier.
///
/// The endpoint ships text ids (`"CAM-1"`) but numeric ids are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawTicketId", into = "String")]
pub struct TicketId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTicketId {
    Text(String),
    Number(i64),
}

impl From<RawTicketId> for TicketId {
    fn from(raw: RawTicketId) -> Self {
        match raw {
            RawTicketId::Text(text) => TicketId(text),
            RawTicketId::Number(n) => TicketId(n.to_string()),
        }
    }
}

impl From<TicketId> for String {
    fn from(id: TicketId) -> Self {
        id.0
    }
}

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        TicketId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Workflow status of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    Done,
    Backlog,
}

impl Status {
    /// Column order when grouping by status
    pub const ALL: [Status; 4] = [Status::Todo, Status::InProgress, Status::Done, Status::Backlog];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "Todo",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
            Status::Backlog => "Backlog",
        }
    }

    /// Parse the wire literal; anything else is unrecognized.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Icon asset file name
    pub const fn icon_file(&self) -> &'static str {
        match self {
            Status::Todo => "To-do.svg",
            Status::InProgress => "in-progress.svg",
            Status::Done => "Done.svg",
            Status::Backlog => "backlog.svg",
        }
    }
}

/// Ticket priority, stored on the wire as 0..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    NoPriority = 0,
    Low = 1,
    Medium = 2,
    High = 3,
    Urgent = 4,
}

impl Priority {
    /// Column order when grouping by priority
    pub const COLUMN_ORDER: [Priority; 5] = [
        Priority::NoPriority,
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Priority::NoPriority),
            1 => Some(Priority::Low),
            2 => Some(Priority::Medium),
            3 => Some(Priority::High),
            4 => Some(Priority::Urgent),
            _ => None,
        }
    }

    pub fn level(&self) -> i64 {
        *self as i64
    }

    /// Column key, also used as the column title
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::NoPriority => "NoPriority",
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    /// Human readable label for tooltips
    pub fn label(&self) -> &'static str {
        match self {
            Priority::NoPriority => "No priority",
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    /// Icon asset file name
    pub const fn icon_file(&self) -> &'static str {
        match self {
            Priority::NoPriority => "No-priority.svg",
            Priority::Low => "Img - Low Priority.svg",
            Priority::Medium => "Img - Medium Priority.svg",
            Priority::High => "Img - High Priority.svg",
            Priority::Urgent => "SVG - Urgent Priority colour.svg",
        }
    }
}

/// A unit of work on the board
///
/// Status and priority are kept as delivered so that tickets carrying
/// unknown values stay in the flat list; use [`Ticket::status`] and
/// [`Ticket::priority`] to read them. Loosely typed fields never fail
/// decoding: null, missing or mistyped values become empty text or
/// [`UNKNOWN_PRIORITY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    /// Raw status literal
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: String,
    /// Raw priority level
    #[serde(default = "unknown_priority", deserialize_with = "lenient_priority")]
    pub priority: i64,
    /// Owning user, empty when unassigned
    #[serde(rename = "userId", default, deserialize_with = "lenient_text")]
    pub user_id: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_tags", skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<String>,
}

/// Priority recorded when the payload has no usable level
pub const UNKNOWN_PRIORITY: i64 = -1;

fn unknown_priority() -> i64 {
    UNKNOWN_PRIORITY
}

/// Any JSON value, keeping only the shapes a ticket field can use
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseList {
    List(Vec<LooseValue>),
    Other(IgnoredAny),
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_optional_text(deserializer)?.unwrap_or_default())
}

fn lenient_optional_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match LooseValue::deserialize(deserializer)? {
        LooseValue::Text(text) => Some(text),
        LooseValue::Integer(n) => Some(n.to_string()),
        LooseValue::Float(f) => Some(f.to_string()),
        LooseValue::Other(_) => None,
    })
}

/// Whole numbers only; text such as `"4"` is not a level.
fn lenient_priority<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(match LooseValue::deserialize(deserializer)? {
        LooseValue::Integer(n) => n,
        LooseValue::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => f as i64,
        _ => UNKNOWN_PRIORITY,
    })
}

fn lenient_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match LooseList::deserialize(deserializer)? {
        LooseList::List(values) => values
            .into_iter()
            .filter_map(|value| match value {
                LooseValue::Text(text) => Some(text),
                _ => None,
            })
            .collect(),
        LooseList::Other(_) => Vec::new(),
    })
}

impl Ticket {
    pub fn new(id: TicketId, title: impl Into<String>, status: Status, priority: Priority) -> Self {
        Self {
            id,
            title: title.into(),
            status: status.as_str().to_string(),
            priority: priority.level(),
            user_id: String::new(),
            kind: None,
            tag: Vec::new(),
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn status(&self) -> Option<Status> {
        Status::parse(&self.status)
    }

    pub fn priority(&self) -> Option<Priority> {
        Priority::from_level(self.priority)
    }
}

/// A ticket owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Avatar file name, relative to the asset base
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub available: bool,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: None,
            available: false,
        }
    }
}

/// Response envelope of the board endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardData {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_decode_endpoint_payload() {
        let json = r#"{
            "tickets": [
                {"id": "CAM-1", "title": "Update user profile page UI", "tag": ["Feature request"],
                 "userId": "usr-1", "status": "Todo", "priority": 4},
                {"id": 7, "title": "Numeric id", "userId": "usr-2", "status": "In Progress", "priority": 1}
            ],
            "users": [
                {"id": "usr-1", "name": "Anoop sharma", "available": false},
                {"id": "usr-2", "name": "Yogesh", "available": true, "image": "yogesh.png"}
            ]
        }"#;

        let data: BoardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.tickets.len(), 2);
        assert_eq!(data.tickets[0].id.as_str(), "CAM-1");
        assert_eq!(data.tickets[0].tag, vec!["Feature request".to_string()]);
        assert_eq!(data.tickets[1].id, TicketId::new("7"));
        assert_eq!(data.tickets[1].status(), Some(Status::InProgress));
        assert_eq!(data.users[1].image.as_deref(), Some("yogesh.png"));
        assert!(data.users[1].available);
        assert!(data.users[0].image.is_none());
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let data: BoardData = serde_json::from_str("{}").unwrap();
        assert!(data.tickets.is_empty());
        assert!(data.users.is_empty());
    }

    #[test]
    fn test_unknown_values_survive_decoding() {
        let json = r#"{"id": "X-1", "title": "odd", "status": "Blocked", "priority": 7}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.status, "Blocked");
        assert_eq!(ticket.status(), None);
        assert_eq!(ticket.priority(), None);
        assert_eq!(ticket.user_id, "");
    }

    #[test]
    fn test_null_and_missing_fields_keep_ticket() {
        let json = r#"[
            {"id": "A-1", "title": "no owner", "status": "Todo", "priority": 2, "userId": null},
            {"id": "A-2", "title": "no status", "status": null, "priority": 1, "userId": "u1"},
            {"id": "A-3", "title": "no priority", "status": "Done", "userId": "u1"},
            {"id": "A-4", "title": null, "status": 3, "priority": "high", "type": null, "tag": null},
            {"id": "A-5", "title": "float", "status": "Backlog", "priority": 3.0, "tag": ["x", 1]}
        ]"#;
        let tickets: Vec<Ticket> = serde_json::from_str(json).unwrap();
        assert_eq!(tickets.len(), 5);

        assert_eq!(tickets[0].user_id, "");
        assert_eq!(tickets[0].priority(), Some(Priority::Medium));
        assert_eq!(tickets[1].status, "");
        assert_eq!(tickets[1].status(), None);
        assert_eq!(tickets[2].priority, UNKNOWN_PRIORITY);
        assert_eq!(tickets[2].priority(), None);
        assert_eq!(tickets[3].title, "");
        assert_eq!(tickets[3].status, "3");
        assert_eq!(tickets[3].priority(), None);
        assert!(tickets[3].kind.is_none());
        assert!(tickets[3].tag.is_empty());
        assert_eq!(tickets[4].priority(), Some(Priority::High));
        assert_eq!(tickets[4].tag, vec!["x".to_string()]);
    }

    #[test]
    fn test_ticket_id_serializes_as_text() {
        let ticket = Ticket::new(TicketId::new("LOCAL-1"), "t", Status::Done, Priority::High);
        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["id"], "LOCAL-1");
        assert_eq!(value["status"], "Done");
        assert_eq!(value["priority"], 3);
    }

    #[rstest]
    #[case::no_priority(0, Priority::NoPriority)]
    #[case::low(1, Priority::Low)]
    #[case::medium(2, Priority::Medium)]
    #[case::high(3, Priority::High)]
    #[case::urgent(4, Priority::Urgent)]
    fn test_priority_levels(#[case] level: i64, #[case] expected: Priority) {
        assert_eq!(Priority::from_level(level), Some(expected));
        assert_eq!(expected.level(), level);
    }

    #[rstest]
    #[case(-1)]
    #[case(5)]
    #[case(7)]
    fn test_priority_out_of_range(#[case] level: i64) {
        assert_eq!(Priority::from_level(level), None);
    }

    #[test]
    fn test_status_literals() {
        for status in Status::ALL {
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
        assert_eq!(Status::parse("todo"), None);
        assert_eq!(Status::parse("InProgress"), None);
    }
}
