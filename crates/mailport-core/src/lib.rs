//! # mailport-core
//!
//! Application core for the `mailport` email client.
//!
//! This crate provides:
//! - Domain models (emails, folders, folder statistics)
//! - Pagination requests and summaries
//! - Request validation
//! - **Mappers** - Bidirectional translation between representations
//! - **Gateway ports** - Traits every data source adapter implements
//! - **Use cases** - One struct per application operation
//!
//! Application code depends on the gateway traits only. Adapters (the
//! in-memory one in `mailport-memory`, or any future remote/database one)
//! are handed to the use cases at construction time.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use mailport_core::{GetEmails, GetEmailsRequest, EmailFilter, FolderId, UseCase};
//!
//! let get_emails = GetEmails::new(Arc::clone(&gateway));
//! let page = get_emails
//!     .execute(GetEmailsRequest {
//!         filter: EmailFilter::folder(FolderId::new("inbox")),
//!         page: Some(1),
//!         limit: Some(3),
//!         ..GetEmailsRequest::default()
//!     })
//!     .await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod email;
mod error;
pub mod folder;
pub mod gateway;
pub mod mapper;
pub mod pagination;
pub mod usecase;
pub mod validation;

pub use email::{
    CreateEmailRequest, Email, EmailFilter, EmailId, EmailPatch, EmailQuery, EmailSort,
    GetEmailRequest, GetEmailsRequest, MarkEmailReadRequest, NewEmail, UpdateEmailRequest,
};
pub use error::{Error, Result};
pub use folder::{
    Folder, FolderId, FolderStats, FolderType, GetFolderStatsRequest, GetFoldersRequest,
};
pub use gateway::{EmailGateway, FolderGateway};
pub use mapper::{
    AsyncMapper, DraftDto, DraftDtoMapper, EmailDto, EmailDtoMapper, FolderDto, FolderDtoMapper,
    Mapper, MappingError,
};
pub use pagination::{DEFAULT_PAGE_LIMIT, Page, PageRequest, PaginationSummary};
pub use usecase::{
    CreateEmail, GetEmail, GetEmails, GetFolderStats, GetFolders, MarkEmailRead, UpdateEmail,
    UseCase,
};
pub use validation::{ValidationError, ValidationResult};
