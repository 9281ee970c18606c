//! Folder use cases.

use std::num::NonZeroU32;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::UseCase;
use crate::Result;
use crate::folder::{Folder, FolderStats, GetFolderStatsRequest, GetFoldersRequest};
use crate::gateway::FolderGateway;
use crate::pagination::{Page, PageRequest, default_limit};
use crate::validation::validate_folder_id;

/// Lists folders, one page at a time.
pub struct GetFolders {
    gateway: Arc<dyn FolderGateway>,
    default_limit: NonZeroU32,
}

impl GetFolders {
    /// Creates the use case with the default page size.
    #[must_use]
    pub fn new(gateway: Arc<dyn FolderGateway>) -> Self {
        Self {
            gateway,
            default_limit: default_limit(),
        }
    }

    /// Use `limit` when a request does not specify a page size.
    #[must_use]
    pub const fn with_default_limit(mut self, limit: NonZeroU32) -> Self {
        self.default_limit = limit;
        self
    }
}

#[async_trait]
impl UseCase for GetFolders {
    type Request = GetFoldersRequest;
    type Response = Page<Folder>;

    async fn execute(&self, request: GetFoldersRequest) -> Result<Page<Folder>> {
        let page = PageRequest::resolve(request.page, request.limit, self.default_limit)?;
        debug!(page = page.page(), limit = page.limit(), "Listing folders");
        self.gateway.get_folders(page).await
    }
}

/// Reports total, unread and flagged counts per folder.
pub struct GetFolderStats {
    gateway: Arc<dyn FolderGateway>,
}

impl GetFolderStats {
    /// Creates the use case.
    #[must_use]
    pub fn new(gateway: Arc<dyn FolderGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for GetFolderStats {
    type Request = GetFolderStatsRequest;
    type Response = Vec<FolderStats>;

    async fn execute(&self, request: GetFolderStatsRequest) -> Result<Vec<FolderStats>> {
        if let Some(folder_id) = &request.folder_id {
            validate_folder_id(folder_id)?;
        }
        self.gateway.get_folder_stats(request.folder_id).await
    }
}
