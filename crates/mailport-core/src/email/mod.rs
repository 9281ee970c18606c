//! Emails: the entity, listing criteria and write requests.

mod model;
mod request;

pub use model::{Email, EmailId};
pub use request::{
    CreateEmailRequest, EmailFilter, EmailPatch, EmailQuery, EmailSort, GetEmailRequest,
    GetEmailsRequest, MarkEmailReadRequest, NewEmail, UpdateEmailRequest,
};
