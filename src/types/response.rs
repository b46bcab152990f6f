//! Response envelope types for the IndiePitcher SDK.
//!
//! This module provides the generic wrappers the API places around every
//! payload, along with aliases for the concrete envelopes each endpoint
//! returns.

use serde::{Deserialize, Serialize};

use super::contact::Contact;
use super::list::{MailingList, MailingListPortalSession};

/// Generic envelope around a single response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response<T> {
    /// Whether the call succeeded.
    pub success: bool,

    /// The payload.
    pub data: T,
}

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    /// Current page number, starting at 1.
    pub page: u32,

    /// Maximum number of items per page.
    pub per: u32,

    /// Total number of items across all pages.
    pub total: u32,
}

impl PaginationMetadata {
    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        if self.per == 0 {
            return 0;
        }
        self.total.div_ceil(self.per)
    }

    /// Returns true if this is the last page.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.page >= self.total_pages()
    }
}

/// Generic envelope around a paginated list payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Whether the call succeeded.
    pub success: bool,

    /// The items on the current page.
    pub data: Vec<T>,

    /// Pagination metadata for the full collection.
    pub metadata: PaginationMetadata,
}

impl<T> PaginatedResponse<T> {
    /// Returns the number of items on the current page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the current page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Envelope for calls that return no meaningful payload.
///
/// The wire `data` field is `null` for these calls and decodes to the
/// unit value.
pub type EmptyResponse = Response<()>;

/// Envelope around a single [`Contact`].
pub type ContactResponse = Response<Contact>;

/// Paginated envelope around [`Contact`] items.
pub type ContactsResponse = PaginatedResponse<Contact>;

/// Paginated envelope around [`MailingList`] items.
pub type MailingListsResponse = PaginatedResponse<MailingList>;

/// Envelope around a [`MailingListPortalSession`].
pub type MailingListPortalSessionResponse = Response<MailingListPortalSession>;
