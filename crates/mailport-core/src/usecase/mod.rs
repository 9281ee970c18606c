//! Use cases: one struct per application operation.
//!
//! Each use case is built with the gateways it needs and nothing else, so it
//! carries no state between calls. Validation happens here, before any
//! gateway is touched; gateway errors are returned unchanged.

use async_trait::async_trait;

use crate::Result;

mod email;
mod folder;

pub use email::{CreateEmail, GetEmail, GetEmails, MarkEmailRead, UpdateEmail};
pub use folder::{GetFolderStats, GetFolders};

/// A single named application operation.
#[async_trait]
pub trait UseCase: Send + Sync {
    /// Input of the operation.
    type Request: Send;
    /// Output of the operation.
    type Response: Send;

    /// Run the operation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if the request fails validation, otherwise
    /// whatever the underlying gateway returned.
    async fn execute(&self, request: Self::Request) -> Result<Self::Response>;
}
