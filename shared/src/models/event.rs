//! Company Event Model

use serde::{Deserialize, Serialize};

/// Event kind, drives the icon shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Meeting,
    Birthday,
    Deadline,
}

impl EventKind {
    /// Symbolic icon name for this event kind
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Meeting => "users",
            Self::Birthday => "cake",
            Self::Deadline => "alert-circle",
        }
    }
}

/// Company event entity (dashboard "Upcoming Events" panel)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyEvent {
    #[serde(rename = "Id")]
    pub id: i64,
    pub title: String,
    /// Human-readable date label ("Today, 3:00 PM", "Tomorrow", ...)
    pub date: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

/// Create/update payload for a company event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyEventDraft {
    pub title: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_wire_format() {
        assert_eq!(serde_json::to_string(&EventKind::Meeting).unwrap(), "\"meeting\"");
        let kind: EventKind = serde_json::from_str("\"birthday\"").unwrap();
        assert_eq!(kind, EventKind::Birthday);
    }

    #[test]
    fn test_event_kind_icons() {
        assert_eq!(EventKind::Meeting.icon_name(), "users");
        assert_eq!(EventKind::Birthday.icon_name(), "cake");
        assert_eq!(EventKind::Deadline.icon_name(), "alert-circle");
    }
}
