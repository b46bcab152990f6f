//! HTTP client for the IndiePitcher REST API.
//!
//! This module provides a type-safe HTTP client for interacting with the
//! IndiePitcher REST API.
//!
//! # Example
//!
//! ```rust,no_run
//! use indiepitcher::client::{ClientConfig, IndiePitcherClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("ip_secret_key").with_timeout(Duration::from_secs(10));
//!     let client = IndiePitcherClient::new(config)?;
//!
//!     // List the first page of contacts
//!     let contacts = client.list_contacts(None, None).await?;
//!     println!("{} contacts total", contacts.metadata.total);
//!
//!     // Look up a single contact
//!     let found = client.find_contact("jane@example.com").await?;
//!     println!("found {}", found.data);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::Error;
pub use http::IndiePitcherClient;
