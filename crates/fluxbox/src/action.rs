//! Actions
//!
//! An action is a typed message delivered to every store. The type is an
//! opaque identifier, the payload an opaque value the store never inspects
//! on its own.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Payload carried by an action, passed through to handlers unmodified
pub type Payload = serde_json::Value;

/// Identifier of an action type, e.g. `"ADD_TODO"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionType(String);

impl ActionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActionType {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ActionType {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for ActionType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A message `{type, payload}` delivered to stores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    #[serde(default)]
    pub payload: Payload,
}

impl Action {
    pub fn new(action_type: impl Into<ActionType>, payload: Payload) -> Self {
        Self {
            action_type: action_type.into(),
            payload,
        }
    }

    /// Action without payload (`null`)
    pub fn bare(action_type: impl Into<ActionType>) -> Self {
        Self::new(action_type, Payload::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_uses_type_key() {
        let action: Action =
            serde_json::from_str(r#"{"type": "ADD_TODO", "payload": {"text": "milk"}}"#).unwrap();
        assert_eq!(action.action_type, ActionType::from("ADD_TODO"));
        assert_eq!(action.payload, json!({"text": "milk"}));
    }

    #[test]
    fn test_missing_payload_is_null() {
        let action: Action = serde_json::from_str(r#"{"type": "RESET"}"#).unwrap();
        assert_eq!(action, Action::bare("RESET"));
    }

    #[test]
    fn test_action_type_display() {
        assert_eq!(ActionType::new("ACTION").to_string(), "ACTION");
        assert_eq!(ActionType::from("ACTION").as_str(), "ACTION");
    }
}
