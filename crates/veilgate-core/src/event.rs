//! Structured event records.
//!
//! Every mutating registry operation appends one event to the registry's
//! log. Events exist for external observers; nothing in the core reads them
//! back, and they carry no contract state.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::crypto::Commitment;

/// One append-only event record: a name plus named fields.
///
/// Serializes for observers; never read back by the core, so it does not
/// deserialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Operation name, e.g. `identity-created`.
    pub name: &'static str,
    /// Named field values in emission order.
    pub fields: Vec<(&'static str, EventValue)>,
}

impl Event {
    /// Start an event with no fields.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Append a field.
    pub fn with(mut self, name: &'static str, value: impl Into<EventValue>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    /// Look up a field by name. First match wins.
    pub fn field(&self, name: &str) -> Option<&EventValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }
}

/// A single event field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventValue {
    Uint(u64),
    Bool(bool),
    Text(String),
    Bytes(Bytes),
    Account(AccountId),
    Commitment(Commitment),
}

impl From<u64> for EventValue {
    fn from(value: u64) -> Self {
        EventValue::Uint(value)
    }
}

impl From<u32> for EventValue {
    fn from(value: u32) -> Self {
        EventValue::Uint(u64::from(value))
    }
}

impl From<u8> for EventValue {
    fn from(value: u8) -> Self {
        EventValue::Uint(u64::from(value))
    }
}

impl From<bool> for EventValue {
    fn from(value: bool) -> Self {
        EventValue::Bool(value)
    }
}

impl From<&str> for EventValue {
    fn from(value: &str) -> Self {
        EventValue::Text(value.to_string())
    }
}

impl From<String> for EventValue {
    fn from(value: String) -> Self {
        EventValue::Text(value)
    }
}

impl From<Bytes> for EventValue {
    fn from(value: Bytes) -> Self {
        EventValue::Bytes(value)
    }
}

impl From<AccountId> for EventValue {
    fn from(value: AccountId) -> Self {
        EventValue::Account(value)
    }
}

impl From<Commitment> for EventValue {
    fn from(value: Commitment) -> Self {
        EventValue::Commitment(value)
    }
}
