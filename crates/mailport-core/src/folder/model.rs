//! Folder (mailbox) data model.

use serde::{Deserialize, Serialize};

/// Unique identifier for a folder, e.g. `"inbox"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(String);

impl FolderId {
    /// Create a new folder ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FolderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for FolderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A mail folder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_field_names)] // folder_type is clearer than just `kind`
pub struct Folder {
    /// Unique identifier.
    pub id: FolderId,
    /// Display name.
    pub name: String,
    /// Special-use role of the folder.
    pub folder_type: FolderType,
}

impl Folder {
    /// Creates a folder, detecting its type from the name.
    #[must_use]
    pub fn new(id: impl Into<FolderId>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            folder_type: FolderType::from_name(&name),
            name,
        }
    }
}

/// Type of folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FolderType {
    /// Inbox folder.
    Inbox,
    /// Sent mail folder.
    Sent,
    /// Drafts folder.
    Drafts,
    /// Trash folder.
    Trash,
    /// Spam/junk folder.
    Spam,
    /// Archive folder.
    Archive,
    /// Regular folder.
    #[default]
    Regular,
}

impl FolderType {
    /// Detect folder type from name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower == "inbox" {
            Self::Inbox
        } else if lower.contains("sent") {
            Self::Sent
        } else if lower.contains("draft") {
            Self::Drafts
        } else if lower.contains("trash") || lower.contains("deleted") {
            Self::Trash
        } else if lower.contains("spam") || lower.contains("junk") {
            Self::Spam
        } else if lower.contains("archive") {
            Self::Archive
        } else {
            Self::Regular
        }
    }

    /// Stable lowercase name, used by storage and wire formats.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Drafts => "drafts",
            Self::Trash => "trash",
            Self::Spam => "spam",
            Self::Archive => "archive",
            Self::Regular => "regular",
        }
    }

    /// Inverse of [`FolderType::as_str`].
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        [
            Self::Inbox,
            Self::Sent,
            Self::Drafts,
            Self::Trash,
            Self::Spam,
            Self::Archive,
            Self::Regular,
        ]
        .into_iter()
        .find(|kind| kind.as_str() == value)
    }
}

/// Message counts for one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderStats {
    /// Folder the counts belong to.
    pub folder_id: FolderId,
    /// Number of emails in the folder.
    pub total: u64,
    /// Number of unread emails.
    pub unread: u64,
    /// Number of flagged emails.
    pub flagged: u64,
}

impl FolderStats {
    /// Empty counts for a folder.
    #[must_use]
    pub const fn empty(folder_id: FolderId) -> Self {
        Self {
            folder_id,
            total: 0,
            unread: 0,
            flagged: 0,
        }
    }
}
