//! Stored record shapes and the mappers between them and the entities.
//!
//! Records are what the dataset holds. They never leave the adapter; callers
//! only see entities produced by [`EmailRecordMapper`] and
//! [`FolderRecordMapper`].

use chrono::DateTime;

use mailport_core::{Email, EmailId, Folder, FolderId, FolderType, Mapper, MappingError};

/// Flag bit set on read emails.
pub const FLAG_READ: u8 = 0b01;
/// Flag bit set on flagged emails.
pub const FLAG_FLAGGED: u8 = 0b10;

const KNOWN_FLAGS: u8 = FLAG_READ | FLAG_FLAGGED;

/// A stored email row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRecord {
    /// Row identifier.
    pub id: u64,
    /// Folder identifier.
    pub folder: String,
    /// Sender.
    pub from: String,
    /// Recipients.
    pub to: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub body: String,
    /// Receive time in nanoseconds since the Unix epoch.
    pub received_at_ns: i64,
    /// Packed `FLAG_*` bits.
    pub flags: u8,
}

impl EmailRecord {
    /// Returns true if the read bit is set.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.flags & FLAG_READ != 0
    }

    /// Returns true if the flagged bit is set.
    #[must_use]
    pub const fn is_flagged(&self) -> bool {
        self.flags & FLAG_FLAGGED != 0
    }
}

/// Maps [`Email`] entities to and from [`EmailRecord`] rows.
///
/// Entities with a receive time outside the nanosecond range
/// (1677-09-21 to 2262-04-11) cannot be stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailRecordMapper;

impl Mapper<Email, EmailRecord> for EmailRecordMapper {
    fn map_from(&self, email: Email) -> Result<EmailRecord, MappingError> {
        if email.folder_id.as_str().is_empty() {
            return Err(MappingError::MissingField("folder"));
        }
        let received_at_ns =
            email
                .received_at
                .timestamp_nanos_opt()
                .ok_or_else(|| MappingError::InvalidField {
                    field: "received_at",
                    reason: format!("{} is outside the storable range", email.received_at),
                })?;

        let mut flags = 0;
        if email.is_read {
            flags |= FLAG_READ;
        }
        if email.is_flagged {
            flags |= FLAG_FLAGGED;
        }

        Ok(EmailRecord {
            id: email.id.get(),
            folder: email.folder_id.as_str().to_string(),
            from: email.from,
            to: email.to,
            subject: email.subject,
            body: email.body,
            received_at_ns,
            flags,
        })
    }

    fn map_to(&self, record: EmailRecord) -> Result<Email, MappingError> {
        if record.folder.is_empty() {
            return Err(MappingError::MissingField("folder"));
        }
        if record.flags & !KNOWN_FLAGS != 0 {
            return Err(MappingError::InvalidField {
                field: "flags",
                reason: format!("unknown bits in {:#04b}", record.flags),
            });
        }

        Ok(Email {
            id: EmailId(record.id),
            is_read: record.is_read(),
            is_flagged: record.is_flagged(),
            folder_id: FolderId::new(record.folder),
            from: record.from,
            to: record.to,
            subject: record.subject,
            body: record.body,
            received_at: DateTime::from_timestamp_nanos(record.received_at_ns),
        })
    }
}

/// A stored folder row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRecord {
    /// Folder identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Folder role as stored (`inbox`, `sent`, ...).
    pub kind: String,
}

/// Maps [`Folder`] entities to and from [`FolderRecord`] rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderRecordMapper;

impl Mapper<Folder, FolderRecord> for FolderRecordMapper {
    fn map_from(&self, folder: Folder) -> Result<FolderRecord, MappingError> {
        if folder.id.as_str().is_empty() {
            return Err(MappingError::MissingField("id"));
        }
        Ok(FolderRecord {
            id: folder.id.as_str().to_string(),
            name: folder.name,
            kind: folder.folder_type.as_str().to_string(),
        })
    }

    fn map_to(&self, record: FolderRecord) -> Result<Folder, MappingError> {
        if record.id.is_empty() {
            return Err(MappingError::MissingField("id"));
        }
        let folder_type =
            FolderType::parse(&record.kind).ok_or_else(|| MappingError::InvalidField {
                field: "kind",
                reason: format!("unknown folder kind `{}`", record.kind),
            })?;

        Ok(Folder {
            id: FolderId::new(record.id),
            name: record.name,
            folder_type,
        })
    }
}
