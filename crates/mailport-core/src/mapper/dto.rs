//! External JSON shapes and their mappers.
//!
//! DTOs mirror what a client or config file sends: camelCase keys and
//! optional fields. The mappers decide which fields are required.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Mapper, MappingError, required};
use crate::email::{CreateEmailRequest, Email, EmailId};
use crate::folder::{Folder, FolderId, FolderType};

/// An email in its external shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailDto {
    /// Email identifier.
    pub id: Option<u64>,
    /// Containing folder.
    pub folder_id: Option<String>,
    /// Sender.
    pub from: Option<String>,
    /// Recipients.
    #[serde(default)]
    pub to: Vec<String>,
    /// Subject line.
    pub subject: Option<String>,
    /// Plain text body.
    #[serde(default)]
    pub body: String,
    /// Receive time (RFC 3339).
    pub received_at: Option<DateTime<Utc>>,
    /// Read state.
    #[serde(default)]
    pub is_read: bool,
    /// Flagged state.
    #[serde(default)]
    pub is_flagged: bool,
}

/// Maps [`EmailDto`] to and from [`Email`].
///
/// `id`, `folderId`, `from`, `subject` and `receivedAt` are required.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailDtoMapper;

impl Mapper<EmailDto, Email> for EmailDtoMapper {
    fn map_from(&self, dto: EmailDto) -> Result<Email, MappingError> {
        Ok(Email {
            id: EmailId(required(dto.id, "id")?),
            folder_id: FolderId::new(required(dto.folder_id, "folderId")?),
            from: required(dto.from, "from")?,
            to: dto.to,
            subject: required(dto.subject, "subject")?,
            body: dto.body,
            received_at: required(dto.received_at, "receivedAt")?,
            is_read: dto.is_read,
            is_flagged: dto.is_flagged,
        })
    }

    fn map_to(&self, email: Email) -> Result<EmailDto, MappingError> {
        Ok(EmailDto {
            id: Some(email.id.get()),
            folder_id: Some(email.folder_id.as_str().to_string()),
            from: Some(email.from),
            to: email.to,
            subject: Some(email.subject),
            body: email.body,
            received_at: Some(email.received_at),
            is_read: email.is_read,
            is_flagged: email.is_flagged,
        })
    }
}

/// An email to create, in its external shape (no id yet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftDto {
    /// Target folder.
    pub folder_id: Option<String>,
    /// Sender.
    pub from: Option<String>,
    /// Recipients.
    #[serde(default)]
    pub to: Vec<String>,
    /// Subject line.
    pub subject: Option<String>,
    /// Plain text body.
    #[serde(default)]
    pub body: String,
    /// Receive time (RFC 3339); the creation time when absent.
    pub received_at: Option<DateTime<Utc>>,
    /// Initial read state.
    #[serde(default)]
    pub is_read: bool,
    /// Initial flagged state.
    #[serde(default)]
    pub is_flagged: bool,
}

/// Maps [`DraftDto`] to and from [`CreateEmailRequest`].
///
/// `folderId`, `from` and `subject` are required.
#[derive(Debug, Clone, Copy, Default)]
pub struct DraftDtoMapper;

impl Mapper<DraftDto, CreateEmailRequest> for DraftDtoMapper {
    fn map_from(&self, dto: DraftDto) -> Result<CreateEmailRequest, MappingError> {
        Ok(CreateEmailRequest {
            folder_id: FolderId::new(required(dto.folder_id, "folderId")?),
            from: required(dto.from, "from")?,
            to: dto.to,
            subject: required(dto.subject, "subject")?,
            body: dto.body,
            received_at: dto.received_at,
            is_read: dto.is_read,
            is_flagged: dto.is_flagged,
        })
    }

    fn map_to(&self, request: CreateEmailRequest) -> Result<DraftDto, MappingError> {
        Ok(DraftDto {
            folder_id: Some(request.folder_id.as_str().to_string()),
            from: Some(request.from),
            to: request.to,
            subject: Some(request.subject),
            body: request.body,
            received_at: request.received_at,
            is_read: request.is_read,
            is_flagged: request.is_flagged,
        })
    }
}

/// A folder in its external shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderDto {
    /// Folder identifier.
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Folder role (`inbox`, `sent`, ...).
    #[serde(rename = "type")]
    pub folder_type: Option<String>,
}

/// Maps [`FolderDto`] to and from [`Folder`].
///
/// `id` and `name` are required. A missing `type` is detected from the name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderDtoMapper;

impl Mapper<FolderDto, Folder> for FolderDtoMapper {
    fn map_from(&self, dto: FolderDto) -> Result<Folder, MappingError> {
        let id = required(dto.id, "id")?;
        if id.trim().is_empty() {
            return Err(MappingError::InvalidField {
                field: "id",
                reason: "must not be blank".to_string(),
            });
        }
        let name = required(dto.name, "name")?;
        let folder_type = match dto.folder_type {
            Some(value) => FolderType::parse(&value).ok_or_else(|| MappingError::InvalidField {
                field: "type",
                reason: format!("unknown folder type `{value}`"),
            })?,
            None => FolderType::from_name(&name),
        };

        Ok(Folder {
            id: FolderId::new(id),
            name,
            folder_type,
        })
    }

    fn map_to(&self, folder: Folder) -> Result<FolderDto, MappingError> {
        Ok(FolderDto {
            id: Some(folder.id.as_str().to_string()),
            name: Some(folder.name),
            folder_type: Some(folder.folder_type.as_str().to_string()),
        })
    }
}
