//! Folders and per-folder statistics.

mod model;

pub use model::{Folder, FolderId, FolderStats, FolderType};

/// Request for [`crate::GetFolders`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetFoldersRequest {
    /// 1-based page number, defaults to 1.
    pub page: Option<u32>,
    /// Page size, defaults to the use case's configured limit.
    pub limit: Option<u32>,
}

/// Request for [`crate::GetFolderStats`].
///
/// With no folder, statistics for every folder are returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetFolderStatsRequest {
    /// Restrict the result to one folder.
    pub folder_id: Option<FolderId>,
}
