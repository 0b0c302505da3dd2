use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single task record with description, status, and timestamps.
///
/// Field aliases accept the PascalCase spellings found in data files written
/// by older versions of the tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(alias = "Id")]
    pub id: u32,
    #[serde(alias = "Description")]
    pub description: String,
    #[serde(alias = "Status")]
    pub status: Status,
    #[serde(alias = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(alias = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// All possible states a todo can be in during its lifecycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Paused,
    Done,
}

impl Todo {
    /// Creates a new todo with both timestamps set to the same instant.
    pub fn new(id: u32, description: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            description,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the description and refreshes `updated_at`.
    pub fn set_description(&mut self, description: String) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Replaces the status and refreshes `updated_at`.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

impl Status {
    /// Parses user input into a status, ignoring case and hyphens, so
    /// "in-progress", "InProgress", and "INPROGRESS" all parse the same way.
    pub fn parse(input: &str) -> Option<Self> {
        match input.replace('-', "").to_lowercase().as_str() {
            "todo" => Some(Status::Todo),
            "inprogress" => Some(Status::InProgress),
            "paused" => Some(Status::Paused),
            "done" => Some(Status::Done),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Todo => "Todo",
            Status::InProgress => "InProgress",
            Status::Paused => "Paused",
            Status::Done => "Done",
        };
        write!(f, "{}", name)
    }
}
