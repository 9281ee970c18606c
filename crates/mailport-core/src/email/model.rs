//! Email entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::folder::FolderId;

/// Unique identifier for an email.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EmailId(pub u64);

impl EmailId {
    /// Create a new email ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EmailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An email message as seen by the application.
///
/// Values are copies built at request time; changing one never touches the
/// data source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Unique identifier.
    pub id: EmailId,
    /// Folder containing this email.
    pub folder_id: FolderId,
    /// Sender, either `address` or `Name <address>`.
    pub from: String,
    /// Recipient addresses.
    pub to: Vec<String>,
    /// Message subject.
    pub subject: String,
    /// Plain text body.
    pub body: String,
    /// When the message was received (or created, for drafts).
    pub received_at: DateTime<Utc>,
    /// Whether the message has been read.
    pub is_read: bool,
    /// Whether the message is flagged/starred.
    pub is_flagged: bool,
}
