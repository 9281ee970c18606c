//! In-memory implementation of the gateway ports.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use mailport_core::{
    Email, EmailGateway, EmailId, EmailPatch, EmailQuery, Error, Folder, FolderGateway, FolderId,
    FolderStats, Mapper, MappingError, NewEmail, Page, PageRequest, Result,
};

use crate::query::{Selection, paginate, select_emails};
use crate::record::{EmailRecord, EmailRecordMapper, FolderRecord, FolderRecordMapper};
use crate::seed;

/// Records owned by one adapter instance.
#[derive(Debug)]
struct Dataset {
    folders: Vec<FolderRecord>,
    emails: Vec<EmailRecord>,
}

impl Dataset {
    fn has_folder(&self, id: &str) -> bool {
        self.folders.iter().any(|f| f.id == id)
    }

    fn position(&self, id: EmailId) -> Option<usize> {
        self.emails.iter().position(|e| e.id == id.get())
    }

    /// `None` once the highest stored id is `u64::MAX`.
    fn next_id(&self) -> Option<u64> {
        self.emails
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
    }

    /// Reject ids used twice and emails filed under unknown folders.
    fn check(&self) -> Result<()> {
        let mut folder_ids = HashSet::new();
        for folder in &self.folders {
            if !folder_ids.insert(folder.id.as_str()) {
                return Err(duplicate("folder id", &folder.id));
            }
        }

        let mut email_ids = HashSet::new();
        for email in &self.emails {
            if !email_ids.insert(email.id) {
                return Err(duplicate("id", email.id));
            }
            if !folder_ids.contains(email.folder.as_str()) {
                return Err(Error::not_found("folder", &email.folder));
            }
        }
        Ok(())
    }
}

fn duplicate(field: &'static str, id: impl std::fmt::Display) -> Error {
    MappingError::InvalidField {
        field,
        reason: format!("duplicate value `{id}`"),
    }
    .into()
}

/// Email and folder gateway backed by an in-process dataset.
///
/// Writes hold the write lock for the whole read-modify-write, so readers
/// see either the state before a write or after it. Callers only ever get
/// mapped copies of the stored records.
///
/// Every call resolves as soon as the lock is acquired; dropping a pending
/// call has no effect on the dataset. There are no timeouts.
#[derive(Debug)]
pub struct InMemoryMailbox {
    dataset: RwLock<Dataset>,
    emails: EmailRecordMapper,
    folders: FolderRecordMapper,
}

impl InMemoryMailbox {
    /// Create a mailbox holding the sample dataset from [`crate::seed`].
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_records(seed::folders(), seed::emails())
    }

    /// Create an empty mailbox with no folders.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_records(Vec::new(), Vec::new())
    }

    /// Create a mailbox holding the given folders and emails, in that order.
    ///
    /// # Errors
    ///
    /// Returns a `Mapping` error if an entity cannot be stored (an empty
    /// folder, a receive time outside the storable range) or if an email or
    /// folder id appears twice. Returns `NotFound` if an email is filed under
    /// a folder missing from `folders`.
    pub fn with_dataset(folders: Vec<Folder>, emails: Vec<Email>) -> Result<Self> {
        let folder_mapper = FolderRecordMapper;
        let email_mapper = EmailRecordMapper;

        let folders = folders
            .into_iter()
            .map(|folder| folder_mapper.map_from(folder))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let emails = emails
            .into_iter()
            .map(|email| email_mapper.map_from(email))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let dataset = Dataset { folders, emails };
        dataset.check()?;
        Ok(Self::from_dataset(dataset))
    }

    fn from_records(folders: Vec<FolderRecord>, emails: Vec<EmailRecord>) -> Self {
        Self::from_dataset(Dataset { folders, emails })
    }

    fn from_dataset(dataset: Dataset) -> Self {
        Self {
            dataset: RwLock::new(dataset),
            emails: EmailRecordMapper,
            folders: FolderRecordMapper,
        }
    }

    /// Number of stored emails.
    pub async fn email_count(&self) -> usize {
        self.dataset.read().await.emails.len()
    }

    fn to_email(&self, record: &EmailRecord) -> Result<Email> {
        Ok(self.emails.map_to(record.clone())?)
    }

    fn to_page<T, U>(
        selection: Selection<'_, T>,
        map: impl FnMut(&T) -> Result<U>,
    ) -> Result<Page<U>> {
        let items = selection
            .items
            .into_iter()
            .map(map)
            .collect::<Result<Vec<_>>>()?;
        Ok(Page::new(items, selection.pagination))
    }
}

impl Default for InMemoryMailbox {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl EmailGateway for InMemoryMailbox {
    async fn get_emails(&self, query: EmailQuery) -> Result<Page<Email>> {
        let dataset = self.dataset.read().await;
        let selection = select_emails(&dataset.emails, &query);
        debug!(
            total = selection.pagination.total_items,
            returned = selection.items.len(),
            "Queried in-memory emails"
        );
        Self::to_page(selection, |record| self.to_email(record))
    }

    async fn get_email(&self, id: EmailId) -> Result<Email> {
        let dataset = self.dataset.read().await;
        let index = dataset
            .position(id)
            .ok_or_else(|| Error::not_found("email", id))?;
        self.to_email(&dataset.emails[index])
    }

    async fn create_email(&self, email: NewEmail) -> Result<Email> {
        let mut dataset = self.dataset.write().await;
        if !dataset.has_folder(email.folder_id.as_str()) {
            return Err(Error::not_found("folder", &email.folder_id));
        }

        let id = dataset
            .next_id()
            .map(EmailId)
            .ok_or_else(|| Error::backend("email id space exhausted"))?;
        let record = self.emails.map_from(email.into_email(id))?;
        let created = self.to_email(&record)?;
        dataset.emails.push(record);

        info!(%id, "Stored email in memory");
        Ok(created)
    }

    async fn update_email(&self, id: EmailId, patch: EmailPatch) -> Result<Email> {
        let mut dataset = self.dataset.write().await;
        let index = dataset
            .position(id)
            .ok_or_else(|| Error::not_found("email", id))?;
        if let Some(folder_id) = &patch.folder_id
            && !dataset.has_folder(folder_id.as_str())
        {
            return Err(Error::not_found("folder", folder_id));
        }

        let current = self.to_email(&dataset.emails[index])?;
        let record = self.emails.map_from(patch.apply(current))?;
        let updated = self.to_email(&record)?;
        dataset.emails[index] = record;

        debug!(%id, "Updated email in memory");
        Ok(updated)
    }
}

#[async_trait]
impl FolderGateway for InMemoryMailbox {
    async fn get_folders(&self, page: PageRequest) -> Result<Page<Folder>> {
        let dataset = self.dataset.read().await;
        let selection = paginate(dataset.folders.iter().collect(), page);
        Self::to_page(selection, |record| Ok(self.folders.map_to(record.clone())?))
    }

    async fn get_folder_stats(&self, folder_id: Option<FolderId>) -> Result<Vec<FolderStats>> {
        let dataset = self.dataset.read().await;

        let folders: Vec<&FolderRecord> = match &folder_id {
            Some(id) => {
                let folder = dataset
                    .folders
                    .iter()
                    .find(|f| f.id == id.as_str())
                    .ok_or_else(|| Error::not_found("folder", id))?;
                vec![folder]
            }
            None => dataset.folders.iter().collect(),
        };

        let mut stats: Vec<FolderStats> = folders
            .iter()
            .map(|f| FolderStats::empty(FolderId::new(f.id.clone())))
            .collect();
        let index: HashMap<&str, usize> = folders
            .iter()
            .enumerate()
            .map(|(i, f)| (f.id.as_str(), i))
            .collect();

        for record in &dataset.emails {
            if let Some(&i) = index.get(record.folder.as_str()) {
                let entry = &mut stats[i];
                entry.total += 1;
                entry.unread += u64::from(!record.is_read());
                entry.flagged += u64::from(record.is_flagged());
            }
        }

        Ok(stats)
    }
}
