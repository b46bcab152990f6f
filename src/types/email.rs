//! Email sending types for the IndiePitcher SDK.
//!
//! This module provides the body format enum and the payloads for the three
//! sending endpoints: plain transactional email, email to specific contacts,
//! and email to a whole mailing list.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format of an email body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailBodyFormat {
    /// Markdown source, rendered to HTML by the server.
    Markdown,
    /// Raw HTML, used as-is.
    Html,
}

impl EmailBodyFormat {
    /// Returns the wire name of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for EmailBodyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload for sending a single transactional email.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmail {
    /// Recipient email address.
    pub to: String,

    /// Subject line.
    pub subject: String,

    /// Email body in the declared format.
    pub body: String,

    /// Format of the body.
    pub body_format: EmailBodyFormat,

    /// Track when recipients open the email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_email_opens: Option<bool>,

    /// Track clicks on links in the email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_email_link_clicks: Option<bool>,
}

impl SendEmail {
    /// Creates a payload with the required fields and no tracking overrides.
    #[must_use]
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        body_format: EmailBodyFormat,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            body_format,
            track_email_opens: None,
            track_email_link_clicks: None,
        }
    }

    /// Enables or disables open tracking.
    #[must_use]
    pub fn with_track_email_opens(mut self, track: bool) -> Self {
        self.track_email_opens = Some(track);
        self
    }

    /// Enables or disables link click tracking.
    #[must_use]
    pub fn with_track_email_link_clicks(mut self, track: bool) -> Self {
        self.track_email_link_clicks = Some(track);
        self
    }
}

/// Payload for sending a personalized email to one or more contacts.
///
/// Recipients must be members of the mailing list named in `list`. Exactly
/// one of `contact_email` or `contact_emails` is expected by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailToContact {
    /// Subject line.
    pub subject: String,

    /// Email body in the declared format.
    pub body: String,

    /// Format of the body.
    pub body_format: EmailBodyFormat,

    /// Mailing list the recipients must belong to.
    pub list: String,

    /// Single recipient contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    /// Multiple recipient contact emails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_emails: Option<Vec<String>>,

    /// Delay delivery by this many seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_seconds: Option<f64>,

    /// Delay delivery until this instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_until_date: Option<DateTime<Utc>>,

    /// Track when recipients open the email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_email_opens: Option<bool>,

    /// Track clicks on links in the email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_email_link_clicks: Option<bool>,
}

impl SendEmailToContact {
    /// Creates a payload with the required fields and no recipients set.
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        body_format: EmailBodyFormat,
        list: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            body_format,
            list: list.into(),
            contact_email: None,
            contact_emails: None,
            delay_seconds: None,
            delay_until_date: None,
            track_email_opens: None,
            track_email_link_clicks: None,
        }
    }

    /// Sets a single recipient.
    #[must_use]
    pub fn with_contact_email(mut self, contact_email: impl Into<String>) -> Self {
        self.contact_email = Some(contact_email.into());
        self
    }

    /// Sets multiple recipients.
    #[must_use]
    pub fn with_contact_emails(mut self, contact_emails: Vec<String>) -> Self {
        self.contact_emails = Some(contact_emails);
        self
    }

    /// Delays delivery by the given number of seconds.
    #[must_use]
    pub fn with_delay_seconds(mut self, delay_seconds: f64) -> Self {
        self.delay_seconds = Some(delay_seconds);
        self
    }

    /// Delays delivery until the given instant.
    #[must_use]
    pub fn with_delay_until_date(mut self, delay_until_date: DateTime<Utc>) -> Self {
        self.delay_until_date = Some(delay_until_date);
        self
    }

    /// Enables or disables open tracking.
    #[must_use]
    pub fn with_track_email_opens(mut self, track: bool) -> Self {
        self.track_email_opens = Some(track);
        self
    }

    /// Enables or disables link click tracking.
    #[must_use]
    pub fn with_track_email_link_clicks(mut self, track: bool) -> Self {
        self.track_email_link_clicks = Some(track);
        self
    }
}

/// Payload for sending an email to every subscriber of a mailing list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailToMailingList {
    /// Subject line.
    pub subject: String,

    /// Email body in the declared format.
    pub body: String,

    /// Format of the body.
    pub body_format: EmailBodyFormat,

    /// Mailing list to send to.
    pub list: String,

    /// Delay delivery by this many seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_seconds: Option<f64>,

    /// Delay delivery until this instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_until_date: Option<DateTime<Utc>>,

    /// Track when recipients open the email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_email_opens: Option<bool>,

    /// Track clicks on links in the email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_email_link_clicks: Option<bool>,
}

impl SendEmailToMailingList {
    /// Creates a payload with the required fields and no scheduling set.
    #[must_use]
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        body_format: EmailBodyFormat,
        list: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            body_format,
            list: list.into(),
            delay_seconds: None,
            delay_until_date: None,
            track_email_opens: None,
            track_email_link_clicks: None,
        }
    }

    /// Delays delivery by the given number of seconds.
    #[must_use]
    pub fn with_delay_seconds(mut self, delay_seconds: f64) -> Self {
        self.delay_seconds = Some(delay_seconds);
        self
    }

    /// Delays delivery until the given instant.
    #[must_use]
    pub fn with_delay_until_date(mut self, delay_until_date: DateTime<Utc>) -> Self {
        self.delay_until_date = Some(delay_until_date);
        self
    }

    /// Enables or disables open tracking.
    #[must_use]
    pub fn with_track_email_opens(mut self, track: bool) -> Self {
        self.track_email_opens = Some(track);
        self
    }

    /// Enables or disables link click tracking.
    #[must_use]
    pub fn with_track_email_link_clicks(mut self, track: bool) -> Self {
        self.track_email_link_clicks = Some(track);
        self
    }
}
