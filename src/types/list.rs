//! Mailing list types for the IndiePitcher SDK.
//!
//! This module provides the mailing list entity and the request/response
//! pair for subscription management portal sessions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A mailing list contacts can subscribe to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailingList {
    /// Unique list name, used to reference the list in API calls.
    pub name: String,

    /// Human-readable title shown to subscribers.
    pub title: String,

    /// Number of contacts subscribed to the list.
    pub num_subscribers: u32,
}

impl MailingList {
    /// Returns true if no contact is subscribed to the list.
    #[must_use]
    pub const fn has_no_subscribers(&self) -> bool {
        self.num_subscribers == 0
    }
}

impl fmt::Display for MailingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} subscribers)", self.name, self.num_subscribers)
    }
}

/// Payload for creating a mailing list portal session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMailingListPortalSession {
    /// Email of the contact the session is created for.
    pub contact_email: String,

    /// URL the portal redirects back to when the contact is done.
    pub return_url: String,
}

impl CreateMailingListPortalSession {
    /// Creates a payload for the given contact and return URL.
    #[must_use]
    pub fn new(contact_email: impl Into<String>, return_url: impl Into<String>) -> Self {
        Self {
            contact_email: contact_email.into(),
            return_url: return_url.into(),
        }
    }
}

/// A short-lived session letting a contact manage their subscriptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailingListPortalSession {
    /// URL of the hosted portal session.
    pub url: String,

    /// When the session URL stops working.
    pub expires_at: DateTime<Utc>,

    /// URL the portal redirects back to.
    pub return_url: String,
}

impl MailingListPortalSession {
    /// Returns true if the session URL is expired at the given instant.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
