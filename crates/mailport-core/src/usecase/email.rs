//! Email use cases.

use std::num::NonZeroU32;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use super::UseCase;
use crate::Result;
use crate::email::{
    CreateEmailRequest, Email, EmailPatch, EmailQuery, GetEmailRequest, GetEmailsRequest,
    MarkEmailReadRequest, NewEmail, UpdateEmailRequest,
};
use crate::gateway::EmailGateway;
use crate::pagination::{Page, PageRequest, default_limit};
use crate::validation::{ValidationError, validate_create, validate_patch};

/// Lists emails, one page at a time.
pub struct GetEmails {
    gateway: Arc<dyn EmailGateway>,
    default_limit: NonZeroU32,
}

impl GetEmails {
    /// Creates the use case with the default page size.
    #[must_use]
    pub fn new(gateway: Arc<dyn EmailGateway>) -> Self {
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
impl UseCase for GetEmails {
    type Request = GetEmailsRequest;
    type Response = Page<Email>;

    async fn execute(&self, request: GetEmailsRequest) -> Result<Page<Email>> {
        let page = PageRequest::resolve(request.page, request.limit, self.default_limit)?;
        debug!(
            folder = ?request.filter.folder_id,
            page = page.page(),
            limit = page.limit(),
            "Listing emails"
        );

        self.gateway
            .get_emails(EmailQuery {
                filter: request.filter,
                sort: request.sort,
                page,
            })
            .await
    }
}

/// Fetches a single email.
pub struct GetEmail {
    gateway: Arc<dyn EmailGateway>,
}

impl GetEmail {
    /// Creates the use case.
    #[must_use]
    pub fn new(gateway: Arc<dyn EmailGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for GetEmail {
    type Request = GetEmailRequest;
    type Response = Email;

    async fn execute(&self, request: GetEmailRequest) -> Result<Email> {
        self.gateway.get_email(request.id).await
    }
}

/// Stores a new email.
pub struct CreateEmail {
    gateway: Arc<dyn EmailGateway>,
}

impl CreateEmail {
    /// Creates the use case.
    #[must_use]
    pub fn new(gateway: Arc<dyn EmailGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for CreateEmail {
    type Request = CreateEmailRequest;
    type Response = Email;

    async fn execute(&self, request: CreateEmailRequest) -> Result<Email> {
        validate_create(&request)?;

        let email = self
            .gateway
            .create_email(NewEmail {
                folder_id: request.folder_id,
                from: request.from.trim().to_string(),
                to: request.to,
                subject: request.subject,
                body: request.body,
                received_at: request.received_at.unwrap_or_else(Utc::now),
                is_read: request.is_read,
                is_flagged: request.is_flagged,
            })
            .await?;

        info!(id = %email.id, folder = %email.folder_id, "Created email");
        Ok(email)
    }
}

/// Changes fields of an existing email.
///
/// An empty patch reads the email back without writing.
pub struct UpdateEmail {
    gateway: Arc<dyn EmailGateway>,
}

impl UpdateEmail {
    /// Creates the use case.
    #[must_use]
    pub fn new(gateway: Arc<dyn EmailGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for UpdateEmail {
    type Request = UpdateEmailRequest;
    type Response = Email;

    async fn execute(&self, request: UpdateEmailRequest) -> Result<Email> {
        let id = request.id.ok_or(ValidationError::MissingEmailId)?;
        validate_patch(&request.patch)?;
        if request.patch.is_empty() {
            debug!(%id, "Empty patch, nothing to write");
            return self.gateway.get_email(id).await;
        }

        debug!(%id, patch = ?request.patch, "Updating email");
        self.gateway.update_email(id, request.patch).await
    }
}

/// Marks an email read or unread.
///
/// Skips the write when the email is already in the requested state.
pub struct MarkEmailRead {
    gateway: Arc<dyn EmailGateway>,
}

impl MarkEmailRead {
    /// Creates the use case.
    #[must_use]
    pub fn new(gateway: Arc<dyn EmailGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UseCase for MarkEmailRead {
    type Request = MarkEmailReadRequest;
    type Response = Email;

    async fn execute(&self, request: MarkEmailReadRequest) -> Result<Email> {
        let current = self.gateway.get_email(request.id).await?;
        if current.is_read == request.read {
            return Ok(current);
        }

        let patch = EmailPatch {
            is_read: Some(request.read),
            ..EmailPatch::default()
        };
        self.gateway.update_email(request.id, patch).await
    }
}
