//! Request validation.
//!
//! Every check runs before a gateway is touched, so adapters only ever see
//! requests that satisfy these rules.

use crate::email::{CreateEmailRequest, EmailPatch};
use crate::folder::FolderId;

/// Validation error for use case requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Page number is zero (pages are 1-based).
    ZeroPage,
    /// Page size is zero.
    ZeroLimit,
    /// An update was requested without an email identifier.
    MissingEmailId,
    /// Folder identifier is empty.
    EmptyFolderId,
    /// Sender address is empty.
    EmptySender,
    /// Sender address format is invalid.
    InvalidSender,
    /// A recipient address format is invalid.
    InvalidRecipient,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ZeroPage => "Page must be 1 or greater",
            Self::ZeroLimit => "Limit must be 1 or greater",
            Self::MissingEmailId => "Email id is required",
            Self::EmptyFolderId => "Folder id is required",
            Self::EmptySender => "Sender address is required",
            Self::InvalidSender => "Invalid sender address format",
            Self::InvalidRecipient => "Invalid recipient address format",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::ZeroPage => "page",
            Self::ZeroLimit => "limit",
            Self::MissingEmailId => "id",
            Self::EmptyFolderId => "folder_id",
            Self::EmptySender | Self::InvalidSender => "from",
            Self::InvalidRecipient => "to",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a request.
pub type ValidationResult = Result<(), ValidationError>;

/// Validate a create request.
///
/// # Errors
///
/// Returns the first `ValidationError` found, checking the folder, then the
/// sender, then each recipient.
pub fn validate_create(request: &CreateEmailRequest) -> ValidationResult {
    validate_folder_id(&request.folder_id)?;

    if request.from.trim().is_empty() {
        return Err(ValidationError::EmptySender);
    }
    if !is_valid_email(address_of(&request.from)) {
        return Err(ValidationError::InvalidSender);
    }

    if request
        .to
        .iter()
        .any(|recipient| !is_valid_email(address_of(recipient)))
    {
        return Err(ValidationError::InvalidRecipient);
    }

    Ok(())
}

/// Validate an update patch.
///
/// # Errors
///
/// Returns `EmptyFolderId` if the patch moves the email to a blank folder id.
pub fn validate_patch(patch: &EmailPatch) -> ValidationResult {
    if let Some(folder_id) = &patch.folder_id {
        validate_folder_id(folder_id)?;
    }
    Ok(())
}

/// Validate a folder identifier.
///
/// # Errors
///
/// Returns `EmptyFolderId` if the identifier is blank.
pub fn validate_folder_id(folder_id: &FolderId) -> ValidationResult {
    if folder_id.as_str().trim().is_empty() {
        Err(ValidationError::EmptyFolderId)
    } else {
        Ok(())
    }
}

/// Extracts the bare address from `Name <address>` notation.
fn address_of(mailbox: &str) -> &str {
    if let Some(start) = mailbox.rfind('<')
        && let Some(end) = mailbox.rfind('>')
        && start < end
    {
        return &mailbox[start + 1..end];
    }
    mailbox
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    let email = email.trim();

    // Must contain exactly one @
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() {
        return false;
    }

    // Domain must contain at least one dot and not be empty
    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    !domain.split('.').any(str::is_empty)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request() -> CreateEmailRequest {
        CreateEmailRequest {
            folder_id: FolderId::new("inbox"),
            from: "Alice <alice@example.com>".to_string(),
            to: vec!["bob@example.com".to_string()],
            subject: "Hello".to_string(),
            ..CreateEmailRequest::default()
        }
    }

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@example.com"));
        assert!(is_valid_email("user@sub.example.com"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example..com"));
    }

    #[test]
    fn test_address_of() {
        assert_eq!(address_of("Alice <alice@example.com>"), "alice@example.com");
        assert_eq!(address_of("alice@example.com"), "alice@example.com");
        assert_eq!(address_of("broken > <"), "broken > <");
    }

    #[test]
    fn test_validate_complete_request() {
        assert!(validate_create(&request()).is_ok());
    }

    #[test]
    fn test_validate_blank_folder() {
        let mut req = request();
        req.folder_id = FolderId::new("  ");
        assert_eq!(validate_create(&req), Err(ValidationError::EmptyFolderId));
    }

    #[test]
    fn test_validate_sender() {
        let mut req = request();
        req.from = String::new();
        assert_eq!(validate_create(&req), Err(ValidationError::EmptySender));

        req.from = "not an address".to_string();
        assert_eq!(validate_create(&req), Err(ValidationError::InvalidSender));
    }

    #[test]
    fn test_validate_recipients() {
        let mut req = request();
        req.to.push("nobody".to_string());
        let err = validate_create(&req).unwrap_err();
        assert_eq!(err, ValidationError::InvalidRecipient);
        assert_eq!(err.field(), "to");
    }

    #[test]
    fn test_validate_patch_folder() {
        let patch = EmailPatch {
            folder_id: Some(FolderId::new("")),
            ..EmailPatch::default()
        };
        assert_eq!(validate_patch(&patch), Err(ValidationError::EmptyFolderId));
        assert!(validate_patch(&EmailPatch::default()).is_ok());
    }
}
