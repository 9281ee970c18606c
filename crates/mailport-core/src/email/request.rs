//! Email requests and gateway inputs.

use chrono::{DateTime, Utc};

use super::model::{Email, EmailId};
use crate::folder::FolderId;
use crate::pagination::PageRequest;

/// Order of an email listing.
///
/// Both orders break timestamp ties by ascending id, so repeated queries
/// over unchanged data always return the same sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmailSort {
    /// Most recently received first.
    #[default]
    NewestFirst,
    /// Least recently received first.
    OldestFirst,
}

/// Criteria an email must match to be listed.
///
/// Every `None` criterion excludes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailFilter {
    /// Only emails in this folder.
    pub folder_id: Option<FolderId>,
    /// Case-insensitive substring of subject, sender or body.
    pub search: Option<String>,
    /// Only emails with this read state.
    pub is_read: Option<bool>,
    /// Only emails with this flagged state.
    pub is_flagged: Option<bool>,
}

impl EmailFilter {
    /// Filter matching every email in one folder.
    #[must_use]
    pub fn folder(folder_id: impl Into<FolderId>) -> Self {
        Self {
            folder_id: Some(folder_id.into()),
            ..Self::default()
        }
    }

    /// Search text with surrounding whitespace removed.
    ///
    /// Blank search strings count as no criterion.
    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// A validated listing query, as handed to [`crate::EmailGateway::get_emails`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailQuery {
    /// Which emails to include.
    pub filter: EmailFilter,
    /// How to order them.
    pub sort: EmailSort,
    /// Which slice to return.
    pub page: PageRequest,
}

/// Request for [`crate::GetEmails`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetEmailsRequest {
    /// Which emails to include.
    pub filter: EmailFilter,
    /// How to order them.
    pub sort: EmailSort,
    /// 1-based page number, defaults to 1.
    pub page: Option<u32>,
    /// Page size, defaults to the use case's configured limit.
    pub limit: Option<u32>,
}

/// Request for [`crate::GetEmail`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetEmailRequest {
    /// Email to fetch.
    pub id: EmailId,
}

/// Request for [`crate::CreateEmail`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateEmailRequest {
    /// Folder to store the email in.
    pub folder_id: FolderId,
    /// Sender, either `address` or `Name <address>`.
    pub from: String,
    /// Recipient addresses.
    pub to: Vec<String>,
    /// Message subject.
    pub subject: String,
    /// Plain text body.
    pub body: String,
    /// Receive time, defaults to now.
    pub received_at: Option<DateTime<Utc>>,
    /// Initial read state.
    pub is_read: bool,
    /// Initial flagged state.
    pub is_flagged: bool,
}

/// A validated email to insert, as handed to [`crate::EmailGateway::create_email`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmail {
    /// Folder to store the email in.
    pub folder_id: FolderId,
    /// Sender.
    pub from: String,
    /// Recipient addresses.
    pub to: Vec<String>,
    /// Message subject.
    pub subject: String,
    /// Plain text body.
    pub body: String,
    /// Receive time.
    pub received_at: DateTime<Utc>,
    /// Initial read state.
    pub is_read: bool,
    /// Initial flagged state.
    pub is_flagged: bool,
}

impl NewEmail {
    /// Builds the stored entity once the data source has assigned an id.
    #[must_use]
    pub fn into_email(self, id: EmailId) -> Email {
        Email {
            id,
            folder_id: self.folder_id,
            from: self.from,
            to: self.to,
            subject: self.subject,
            body: self.body,
            received_at: self.received_at,
            is_read: self.is_read,
            is_flagged: self.is_flagged,
        }
    }
}

/// Changes to apply to an existing email. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailPatch {
    /// Move to another folder.
    pub folder_id: Option<FolderId>,
    /// New subject.
    pub subject: Option<String>,
    /// New read state.
    pub is_read: Option<bool>,
    /// New flagged state.
    pub is_flagged: Option<bool>,
}

impl EmailPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.folder_id.is_none()
            && self.subject.is_none()
            && self.is_read.is_none()
            && self.is_flagged.is_none()
    }

    /// Returns `email` with the patch applied.
    #[must_use]
    pub fn apply(&self, mut email: Email) -> Email {
        if let Some(folder_id) = &self.folder_id {
            email.folder_id = folder_id.clone();
        }
        if let Some(subject) = &self.subject {
            email.subject = subject.clone();
        }
        if let Some(is_read) = self.is_read {
            email.is_read = is_read;
        }
        if let Some(is_flagged) = self.is_flagged {
            email.is_flagged = is_flagged;
        }
        email
    }
}

/// Request for [`crate::UpdateEmail`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateEmailRequest {
    /// Email to update; required.
    pub id: Option<EmailId>,
    /// Changes to apply.
    pub patch: EmailPatch,
}

/// Request for [`crate::MarkEmailRead`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkEmailReadRequest {
    /// Email to update.
    pub id: EmailId,
    /// `true` to mark read, `false` to mark unread.
    pub read: bool,
}
