//! IndiePitcher SDK - Rust client library for the IndiePitcher email
//! marketing API.
//!
//! This crate provides typed models and an async HTTP client for managing
//! contacts, mailing lists, and transactional email through the
//! IndiePitcher REST API.
//!
//! # Entity Types
//!
//! - [`Contact`] — A contact in the audience
//! - [`MailingList`] — A mailing list with its subscriber count
//! - [`MailingListPortalSession`] — A session for managing subscriptions
//!
//! # Request Payloads
//!
//! - [`CreateContact`], [`UpdateContact`] — Audience changes
//! - [`CreateMailingListPortalSession`] — Portal session requests
//! - [`SendEmail`], [`SendEmailToContact`], [`SendEmailToMailingList`] —
//!   Outbound email
//!
//! # Response Envelopes
//!
//! - [`Response`], [`PaginatedResponse`] — Generic wrappers the API places
//!   around every payload
//!
//! All API calls go through [`IndiePitcherClient`]; see the [`client`]
//! module for configuration options.
//!
//! # Example
//!
//! ```rust
//! use indiepitcher::{CreateContact, EmailBodyFormat, SendEmail};
//!
//! let contact = CreateContact::new("jane@example.com")
//!     .with_name("Jane Doe")
//!     .with_subscribed_to_lists(vec!["newsletter".to_string()]);
//! assert_eq!(contact.email, "jane@example.com");
//!
//! let email = SendEmail::new(
//!     "jane@example.com",
//!     "Welcome!",
//!     "Thanks for signing up.",
//!     EmailBodyFormat::Markdown,
//! );
//! assert_eq!(email.body_format, EmailBodyFormat::Markdown);
//! ```

pub mod client;
pub mod types;

pub use client::{ClientConfig, Error, IndiePitcherClient};
pub use types::{
    Contact, ContactResponse, ContactsResponse, CreateContact, CreateMailingListPortalSession,
    EmailBodyFormat, EmptyResponse, MailingList, MailingListPortalSession,
    MailingListPortalSessionResponse, MailingListsResponse, PaginatedResponse, PaginationMetadata,
    Response, SendEmail, SendEmailToContact, SendEmailToMailingList, UpdateContact,
};

/// Result type for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;
