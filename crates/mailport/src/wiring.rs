//! Composition root: picks the adapter and builds the use cases.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use mailport_core::{
    CreateEmail, DraftDto, DraftDtoMapper, EmailGateway, FolderGateway, GetEmail, GetEmails,
    GetFolderStats, GetFolders, Mapper, MarkEmailRead, UpdateEmail, UseCase,
};
use mailport_memory::InMemoryMailbox;

use crate::config::{AppConfig, Backend};

/// Every use case the CLI can run, sharing one set of gateways.
pub struct Services {
    /// `emails`.
    pub get_emails: GetEmails,
    /// `show`.
    pub get_email: GetEmail,
    /// Config import.
    pub create_email: CreateEmail,
    /// `flag` and `move`.
    pub update_email: UpdateEmail,
    /// `mark-read`.
    pub mark_email_read: MarkEmailRead,
    /// `folders`.
    pub get_folders: GetFolders,
    /// `stats`.
    pub get_folder_stats: GetFolderStats,
}

/// Build the services for `config` and import its extra emails.
pub async fn build_services(config: &AppConfig) -> Result<Services> {
    let (emails, folders) = match config.backend {
        Backend::InMemory => {
            let mailbox = Arc::new(InMemoryMailbox::seeded());
            let emails: Arc<dyn EmailGateway> = mailbox.clone();
            let folders: Arc<dyn FolderGateway> = mailbox;
            (emails, folders)
        }
    };
    debug!(backend = ?config.backend, "Gateways ready");

    let limit = config.default_page_limit;
    let services = Services {
        get_emails: GetEmails::new(Arc::clone(&emails)).with_default_limit(limit),
        get_email: GetEmail::new(Arc::clone(&emails)),
        create_email: CreateEmail::new(Arc::clone(&emails)),
        update_email: UpdateEmail::new(Arc::clone(&emails)),
        mark_email_read: MarkEmailRead::new(emails),
        get_folders: GetFolders::new(Arc::clone(&folders)).with_default_limit(limit),
        get_folder_stats: GetFolderStats::new(folders),
    };

    services.import(&config.extra_emails).await?;
    Ok(services)
}

impl Services {
    async fn import(&self, drafts: &[DraftDto]) -> Result<()> {
        let mapper = DraftDtoMapper;
        for (index, draft) in drafts.iter().enumerate() {
            let request = mapper
                .map_from(draft.clone())
                .with_context(|| format!("extra_emails[{index}]"))?;
            let email = self
                .create_email
                .execute(request)
                .await
                .with_context(|| format!("extra_emails[{index}]"))?;
            debug!(id = %email.id, "Imported configured email");
        }
        if !drafts.is_empty() {
            info!(count = drafts.len(), "Imported emails from config");
        }
        Ok(())
    }
}
