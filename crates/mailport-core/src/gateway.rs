//! Gateway ports: what use cases need from a data source.
//!
//! Use cases hold these traits as `Arc<dyn EmailGateway>` /
//! `Arc<dyn FolderGateway>` and never name a concrete adapter. Any adapter
//! (in-memory, remote, cached) must honour the same contract:
//!
//! - inputs arrive already validated, so ports do not re-validate;
//! - each call resolves to one complete value, never a partial result;
//! - list results are [`Page`]s whose summary comes from
//!   [`crate::PaginationSummary::new`];
//! - a missing identifier is [`crate::Error::NotFound`], and adapter
//!   failures are [`crate::Error::Backend`].
//!
//! Adapters document their own cancellation and timeout behaviour.

use async_trait::async_trait;

use crate::Result;
use crate::email::{Email, EmailId, EmailPatch, EmailQuery, NewEmail};
use crate::folder::{Folder, FolderId, FolderStats};
use crate::pagination::{Page, PageRequest};

/// Port for email storage and retrieval.
#[async_trait]
pub trait EmailGateway: Send + Sync {
    /// List emails matching `query`.
    ///
    /// Results are filtered, sorted by `query.sort` (ties broken by ascending
    /// id), then sliced. A page past the end is empty, not an error, and its
    /// summary still reports the full filtered count.
    ///
    /// # Errors
    ///
    /// Returns an error if the data source fails.
    async fn get_emails(&self, query: EmailQuery) -> Result<Page<Email>>;

    /// Fetch one email.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no email has this id.
    async fn get_email(&self, id: EmailId) -> Result<Email>;

    /// Store a new email and return it with its assigned id.
    ///
    /// The email is visible to every later query on the same gateway.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the target folder does not exist.
    async fn create_email(&self, email: NewEmail) -> Result<Email>;

    /// Apply `patch` to an existing email and return the updated value.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the email, or a folder it is being moved to,
    /// does not exist.
    async fn update_email(&self, id: EmailId, patch: EmailPatch) -> Result<Email>;
}

/// Port for folder listing and statistics.
#[async_trait]
pub trait FolderGateway: Send + Sync {
    /// List folders in the data source's natural order.
    ///
    /// # Errors
    ///
    /// Returns an error if the data source fails.
    async fn get_folders(&self, page: PageRequest) -> Result<Page<Folder>>;

    /// Count total, unread and flagged emails per folder.
    ///
    /// With `Some(folder)` the result holds exactly that folder's counts.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the requested folder does not exist.
    async fn get_folder_stats(&self, folder_id: Option<FolderId>) -> Result<Vec<FolderStats>>;
}
