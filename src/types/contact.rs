//! Contact types for the IndiePitcher SDK.
//!
//! This module provides the contact entity together with the payloads for
//! creating and updating contacts. Optional payload fields that are unset
//! are omitted from the serialized JSON entirely, which the API reads as
//! "leave unchanged".

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A contact in the IndiePitcher audience.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Email address, the contact's natural key.
    pub email: String,

    /// Identifier of the contact in your own system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Preferred language code, such as `en`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    /// When the contact's address hard bounced, if it ever did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_bounced_at: Option<DateTime<Utc>>,

    /// Names of the mailing lists the contact is subscribed to.
    #[serde(default)]
    pub subscribed_to_lists: Vec<String>,

    /// Arbitrary custom properties attached to the contact.
    #[serde(default)]
    pub custom_properties: HashMap<String, Value>,
}

impl Contact {
    /// Returns true if the contact is subscribed to the given mailing list.
    #[must_use]
    pub fn is_subscribed_to(&self, list: &str) -> bool {
        self.subscribed_to_lists.iter().any(|name| name == list)
    }

    /// Returns true if the contact's address has hard bounced.
    #[must_use]
    pub const fn has_hard_bounced(&self) -> bool {
        self.hard_bounced_at.is_some()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.email),
            None => write!(f, "{}", self.email),
        }
    }
}

/// Payload for creating a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContact {
    /// Email address of the contact to create.
    pub email: String,

    /// Identifier of the contact in your own system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Preferred language code, such as `en`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    /// Update the contact instead of failing when it already exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_if_exists: Option<bool>,

    /// Keep existing list subscriptions untouched when updating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_list_subscriptions_when_updating: Option<bool>,

    /// Mailing lists to subscribe the contact to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subscribed_to_lists: Vec<String>,

    /// Custom properties to attach to the contact.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom_properties: HashMap<String, Value>,
}

impl CreateContact {
    /// Creates a payload with the given email and nothing else set.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            user_id: None,
            avatar_url: None,
            name: None,
            language_code: None,
            update_if_exists: None,
            ignore_list_subscriptions_when_updating: None,
            subscribed_to_lists: Vec::new(),
            custom_properties: HashMap::new(),
        }
    }

    /// Sets the identifier of the contact in your own system.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Sets the avatar image URL.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the preferred language code.
    #[must_use]
    pub fn with_language_code(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = Some(language_code.into());
        self
    }

    /// Updates the contact instead of failing when it already exists.
    #[must_use]
    pub fn with_update_if_exists(mut self, update_if_exists: bool) -> Self {
        self.update_if_exists = Some(update_if_exists);
        self
    }

    /// Keeps existing list subscriptions untouched when updating.
    #[must_use]
    pub fn with_ignore_list_subscriptions_when_updating(mut self, ignore: bool) -> Self {
        self.ignore_list_subscriptions_when_updating = Some(ignore);
        self
    }

    /// Sets the mailing lists to subscribe the contact to.
    #[must_use]
    pub fn with_subscribed_to_lists(mut self, lists: Vec<String>) -> Self {
        self.subscribed_to_lists = lists;
        self
    }

    /// Sets a single custom property on the contact.
    #[must_use]
    pub fn with_custom_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.custom_properties.insert(key.into(), value);
        self
    }
}

/// Payload for partially updating an existing contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContact {
    /// Email address of the contact to update.
    pub email: String,

    /// Identifier of the contact in your own system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Preferred language code, such as `en`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    /// Mailing lists to additionally subscribe the contact to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_list_subscriptions: Option<Vec<String>>,

    /// Mailing lists to unsubscribe the contact from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_list_subscriptions: Option<Vec<String>>,

    /// Custom properties to overwrite on the contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_properties: Option<HashMap<String, Value>>,
}

impl UpdateContact {
    /// Creates a payload with the given email and nothing else set.
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            user_id: None,
            avatar_url: None,
            name: None,
            language_code: None,
            added_list_subscriptions: None,
            removed_list_subscriptions: None,
            custom_properties: None,
        }
    }

    /// Sets the identifier of the contact in your own system.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Sets the avatar image URL.
    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the preferred language code.
    #[must_use]
    pub fn with_language_code(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = Some(language_code.into());
        self
    }

    /// Sets the mailing lists to additionally subscribe the contact to.
    #[must_use]
    pub fn with_added_list_subscriptions(mut self, lists: Vec<String>) -> Self {
        self.added_list_subscriptions = Some(lists);
        self
    }

    /// Sets the mailing lists to unsubscribe the contact from.
    #[must_use]
    pub fn with_removed_list_subscriptions(mut self, lists: Vec<String>) -> Self {
        self.removed_list_subscriptions = Some(lists);
        self
    }

    /// Sets the custom properties to overwrite on the contact.
    #[must_use]
    pub fn with_custom_properties(mut self, properties: HashMap<String, Value>) -> Self {
        self.custom_properties = Some(properties);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_contact() -> Contact {
        Contact {
            email: "test@example.com".to_string(),
            user_id: Some("123".to_string()),
            name: Some("Test User".to_string()),
            avatar_url: Some("https://example.com/avatar.png".to_string()),
            language_code: Some("en".to_string()),
            hard_bounced_at: None,
            subscribed_to_lists: vec!["list1".to_string(), "list2".to_string()],
            custom_properties: HashMap::from([("plan".to_string(), json!("pro"))]),
        }
    }

    #[test]
    fn test_contact_deserializes_with_missing_optionals() {
        let json = r#"{"email":"test@example.com","name":"Test User","userId":"123","subscribedToLists":["list1"]}"#;
        let contact: Contact = serde_json::from_str(json).expect("deserialize");

        assert_eq!(contact.email, "test@example.com");
        assert_eq!(contact.name.as_deref(), Some("Test User"));
        assert_eq!(contact.user_id.as_deref(), Some("123"));
        assert!(contact.avatar_url.is_none());
        assert!(contact.language_code.is_none());
        assert!(contact.hard_bounced_at.is_none());
        assert_eq!(contact.subscribed_to_lists, vec!["list1".to_string()]);
        assert!(contact.custom_properties.is_empty());
    }

    #[test]
    fn test_contact_camel_case_round_trip() {
        let contact = create_test_contact();
        let json = serde_json::to_string(&contact).expect("serialize");

        assert!(json.contains("userId"));
        assert!(json.contains("avatarUrl"));
        assert!(json.contains("languageCode"));
        assert!(json.contains("subscribedToLists"));
        assert!(json.contains("customProperties"));
        assert!(!json.contains("user_id"));

        let parsed: Contact = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.email, contact.email);
        assert_eq!(parsed.user_id, contact.user_id);
        assert_eq!(parsed.name, contact.name);
        assert_eq!(parsed.avatar_url, contact.avatar_url);
        assert_eq!(parsed.language_code, contact.language_code);
        assert_eq!(parsed.subscribed_to_lists, contact.subscribed_to_lists);
        assert_eq!(parsed.custom_properties, contact.custom_properties);
    }

    #[test]
    fn test_contact_hard_bounced_at_parses() {
        let json = r#"{"email":"bounced@example.com","hardBouncedAt":"2025-03-01T12:00:00Z"}"#;
        let contact: Contact = serde_json::from_str(json).expect("deserialize");

        assert!(contact.has_hard_bounced());
        let bounced_at = contact.hard_bounced_at.expect("hard bounced at");
        assert_eq!(bounced_at.to_rfc3339(), "2025-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_contact_is_subscribed_to() {
        let contact = create_test_contact();
        assert!(contact.is_subscribed_to("list1"));
        assert!(contact.is_subscribed_to("list2"));
        assert!(!contact.is_subscribed_to("list3"));
    }

    #[test]
    fn test_contact_display() {
        let contact = create_test_contact();
        assert_eq!(contact.to_string(), "Test User <test@example.com>");

        let anonymous = Contact {
            name: None,
            ..create_test_contact()
        };
        assert_eq!(anonymous.to_string(), "test@example.com");
    }

    #[test]
    fn test_create_contact_serializes_exact_keys() {
        let contact = CreateContact::new("new@example.com")
            .with_name("New User")
            .with_user_id("456")
            .with_subscribed_to_lists(vec!["list1".to_string()]);

        let value = serde_json::to_value(&contact).expect("serialize");
        assert_eq!(
            value,
            json!({
                "email": "new@example.com",
                "name": "New User",
                "userId": "456",
                "subscribedToLists": ["list1"],
            })
        );
    }

    #[test]
    fn test_create_contact_minimal_payload() {
        let contact = CreateContact::new("minimal@example.com");
        let value = serde_json::to_value(&contact).expect("serialize");

        assert_eq!(value, json!({"email": "minimal@example.com"}));
    }

    #[test]
    fn test_create_contact_builder() {
        let contact = CreateContact::new("new@example.com")
            .with_user_id("456")
            .with_avatar_url("https://example.com/a.png")
            .with_name("New User")
            .with_language_code("de")
            .with_update_if_exists(true)
            .with_ignore_list_subscriptions_when_updating(false)
            .with_subscribed_to_lists(vec!["list1".to_string()])
            .with_custom_property("plan", json!("pro"))
            .with_custom_property("seats", json!(5));

        assert_eq!(contact.email, "new@example.com");
        assert_eq!(contact.user_id.as_deref(), Some("456"));
        assert_eq!(contact.avatar_url.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(contact.name.as_deref(), Some("New User"));
        assert_eq!(contact.language_code.as_deref(), Some("de"));
        assert_eq!(contact.update_if_exists, Some(true));
        assert_eq!(contact.ignore_list_subscriptions_when_updating, Some(false));
        assert_eq!(contact.subscribed_to_lists, vec!["list1".to_string()]);
        assert_eq!(contact.custom_properties.get("plan"), Some(&json!("pro")));
        assert_eq!(contact.custom_properties.get("seats"), Some(&json!(5)));
    }

    #[test]
    fn test_create_contact_custom_properties_serialized_when_set() {
        let contact = CreateContact::new("props@example.com")
            .with_custom_property("tags", json!(["beta", "founder"]));

        let value = serde_json::to_value(&contact).expect("serialize");
        assert_eq!(
            value,
            json!({
                "email": "props@example.com",
                "customProperties": {"tags": ["beta", "founder"]},
            })
        );
    }

    #[test]
    fn test_update_contact_omits_unset_fields() {
        let update = UpdateContact::new("test@example.com");
        let value = serde_json::to_value(&update).expect("serialize");

        assert_eq!(value, json!({"email": "test@example.com"}));
    }

    #[test]
    fn test_update_contact_round_trip() {
        let update = UpdateContact::new("test@example.com")
            .with_name("Renamed User")
            .with_added_list_subscriptions(vec!["weekly".to_string()])
            .with_removed_list_subscriptions(vec!["daily".to_string()])
            .with_custom_properties(HashMap::from([("plan".to_string(), json!("free"))]));

        let json = serde_json::to_string(&update).expect("serialize");
        assert!(json.contains("addedListSubscriptions"));
        assert!(json.contains("removedListSubscriptions"));

        let parsed: UpdateContact = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.email, update.email);
        assert_eq!(parsed.name, update.name);
        assert_eq!(parsed.added_list_subscriptions, update.added_list_subscriptions);
        assert_eq!(parsed.removed_list_subscriptions, update.removed_list_subscriptions);
        assert_eq!(parsed.custom_properties, update.custom_properties);
    }
}
