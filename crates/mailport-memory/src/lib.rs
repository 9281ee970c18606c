//! # mailport-memory
//!
//! In-process adapter for the `mailport-core` gateway ports.
//!
//! This crate provides:
//! - [`InMemoryMailbox`] - implements `EmailGateway` and `FolderGateway`
//! - The query engine (filter, sort, paginate, summarize) every listing
//!   runs through
//! - Stored record shapes and their mappers
//! - A fixed sample dataset to seed new instances with
//!
//! Nothing here is persisted; the dataset lives as long as the adapter.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use mailport_core::{EmailGateway, GetEmails, UseCase};
//! use mailport_memory::InMemoryMailbox;
//!
//! let mailbox = Arc::new(InMemoryMailbox::seeded());
//! let get_emails = GetEmails::new(mailbox);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod adapter;
mod query;
pub mod record;
pub mod seed;

pub use adapter::InMemoryMailbox;
pub use record::{EmailRecord, EmailRecordMapper, FolderRecord, FolderRecordMapper};
