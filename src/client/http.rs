//! HTTP client implementation.
//!
//! Provides the main HTTP client for interacting with the IndiePitcher
//! REST API. Every operation performs exactly one request; there is no
//! retry or backoff layer.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::ClientConfig;
use super::error::Error;
use crate::types::{
    ContactResponse, ContactsResponse, CreateContact, CreateMailingListPortalSession,
    EmptyResponse, MailingListPortalSessionResponse, MailingListsResponse, SendEmail,
    SendEmailToContact, SendEmailToMailingList, UpdateContact,
};

/// Maximum number of contacts accepted by a single bulk create call.
pub const MAX_CONTACTS_PER_BATCH: usize = 100;

/// Default page size when listing contacts.
pub const DEFAULT_CONTACTS_PER_PAGE: u32 = 50;

/// Default page size when listing mailing lists.
pub const DEFAULT_LISTS_PER_PAGE: u32 = 10;

/// API error response format.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    reason: String,
}

/// Body of the delete contact call.
#[derive(Debug, Serialize)]
struct DeleteContact<'a> {
    email: &'a str,
}

/// HTTP client for the IndiePitcher REST API.
///
/// The API key is fixed at construction and attached to every request as
/// a bearer credential. The client wraps a shared connection pool and is
/// cheap to clone.
#[derive(Debug, Clone)]
pub struct IndiePitcherClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl IndiePitcherClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| Error::InvalidConfig("api_key is not a valid header value".to_string()))?;
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Request)?;

        Ok(Self { config, http })
    }

    /// Creates a new client for the production API with the given API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot
    /// be created.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::new(ClientConfig::new(api_key))
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Makes a GET request to the given path.
    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        debug!("GET {}", path);
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Self::decode(path, response).await
    }

    /// Makes a POST request with a JSON body.
    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!("POST {}", path);
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(path, response).await
    }

    /// Makes a PATCH request with a JSON body.
    async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!("PATCH {}", path);
        let response = self.http.patch(self.url(path)).json(body).send().await?;
        Self::decode(path, response).await
    }

    /// Checks the response status and decodes the body.
    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, Error> {
        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() >= 400 {
            return Err(Self::api_error(path, status, &body));
        }

        debug!("{} -> {}", path, status.as_u16());
        serde_json::from_str(&body).map_err(|e| Error::Deserialization(e.to_string()))
    }

    /// Maps an error status response to [`Error::Api`].
    ///
    /// The documented error shape is `{"reason": "..."}`. Anything else
    /// falls back to the raw body, or to the canonical status reason when
    /// the body is empty, so the HTTP failure is never masked by a parse
    /// failure.
    fn api_error(path: &str, status: StatusCode, body: &str) -> Error {
        let reason = match serde_json::from_str::<ApiErrorResponse>(body) {
            Ok(error_resp) => error_resp.reason,
            Err(_) => {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                } else {
                    trimmed.to_string()
                }
            }
        };

        warn!("{} -> {}: {}", path, status.as_u16(), reason);
        Error::Api {
            status: status.as_u16(),
            reason,
        }
    }

    /// Finds a contact by email address.
    ///
    /// # Arguments
    ///
    /// * `email` - Email address of the contact to look up
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or no contact with the given
    /// email exists.
    pub async fn find_contact(&self, email: &str) -> Result<ContactResponse, Error> {
        self.get("/contacts/find", &[("email", email)]).await
    }

    /// Lists contacts in the audience.
    ///
    /// # Arguments
    ///
    /// * `page` - Page number (default: 1)
    /// * `per_page` - Contacts per page (default: 50)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_contacts(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<ContactsResponse, Error> {
        let page = page.unwrap_or(1);
        let per = per_page.unwrap_or(DEFAULT_CONTACTS_PER_PAGE);
        self.get("/contacts", &[("page", page), ("per", per)]).await
    }

    /// Adds a new contact to the audience.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, for example when a contact
    /// with the same email already exists and `update_if_exists` is not
    /// set.
    pub async fn create_contact(&self, contact: &CreateContact) -> Result<ContactResponse, Error> {
        self.post("/contacts/create", contact).await
    }

    /// Adds up to [`MAX_CONTACTS_PER_BATCH`] contacts in a single call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] without touching the network when more
    /// than [`MAX_CONTACTS_PER_BATCH`] contacts are passed, or an API error
    /// if the request fails.
    pub async fn create_contacts(
        &self,
        contacts: &[CreateContact],
    ) -> Result<ContactsResponse, Error> {
        if contacts.len() > MAX_CONTACTS_PER_BATCH {
            return Err(Error::Validation(format!(
                "cannot create more than {} contacts in a single call, got {}",
                MAX_CONTACTS_PER_BATCH,
                contacts.len()
            )));
        }
        self.post("/contacts/create_many", contacts).await
    }

    /// Updates an existing contact.
    ///
    /// Fields left unset on the payload are not modified.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the contact does not exist.
    pub async fn update_contact(&self, contact: &UpdateContact) -> Result<ContactResponse, Error> {
        self.patch("/contacts/update", contact).await
    }

    /// Deletes a contact by email address.
    ///
    /// # Arguments
    ///
    /// * `email` - Email address of the contact to delete
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_contact(&self, email: &str) -> Result<EmptyResponse, Error> {
        self.post("/contacts/delete", &DeleteContact { email }).await
    }

    /// Lists the mailing lists of the project.
    ///
    /// # Arguments
    ///
    /// * `page` - Page number (default: 1)
    /// * `per_page` - Lists per page (default: 10)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_mailing_lists(
        &self,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<MailingListsResponse, Error> {
        let page = page.unwrap_or(1);
        let per = per_page.unwrap_or(DEFAULT_LISTS_PER_PAGE);
        self.get("/lists", &[("page", page), ("per", per)]).await
    }

    /// Creates a portal session where a contact can manage their list
    /// subscriptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_mailing_list_portal_session(
        &self,
        session: &CreateMailingListPortalSession,
    ) -> Result<MailingListPortalSessionResponse, Error> {
        self.post("/lists/portal_session", session).await
    }

    /// Sends a transactional email to a single recipient.
    ///
    /// The recipient does not have to be a contact in the audience.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn send_email(&self, email: &SendEmail) -> Result<EmptyResponse, Error> {
        self.post("/email/transactional", email).await
    }

    /// Sends a personalized email to one or more contacts.
    ///
    /// The recipients must be members of the mailing list named in the
    /// payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn send_email_to_contact(
        &self,
        email: &SendEmailToContact,
    ) -> Result<EmptyResponse, Error> {
        self.post("/email/contact", email).await
    }

    /// Sends an email to every subscriber of a mailing list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn send_email_to_mailing_list(
        &self,
        email: &SendEmailToMailingList,
    ) -> Result<EmptyResponse, Error> {
        self.post("/email/list", email).await
    }
}
