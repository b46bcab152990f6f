//! Core types for the IndiePitcher SDK.
//!
//! This module provides the entities, request payloads, and response
//! envelopes used by the IndiePitcher API.

pub mod contact;
pub mod email;
pub mod list;
pub mod response;

pub use contact::{Contact, CreateContact, UpdateContact};
pub use email::{EmailBodyFormat, SendEmail, SendEmailToContact, SendEmailToMailingList};
pub use list::{CreateMailingListPortalSession, MailingList, MailingListPortalSession};
pub use response::{
    ContactResponse, ContactsResponse, EmptyResponse, MailingListPortalSessionResponse,
    MailingListsResponse, PaginatedResponse, PaginationMetadata, Response,
};
