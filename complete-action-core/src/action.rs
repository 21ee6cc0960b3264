//! The action objects handed to a dispatcher

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the type string
pub const TYPE_KEY: &str = "type";
/// Key holding the raw payload when no custom payload hook applies
pub const PAYLOAD_KEY: &str = "payload";

/// A plain action object: a `type` string plus either a `payload` or the
/// fields returned by a custom payload hook
///
/// Serializes as a flat JSON object, so it can be handed straight to any
/// flux-style dispatcher that speaks JSON.
///
/// # Example
/// ```
/// use complete_action_core::{make_action, ActionConfig};
/// use serde_json::json;
///
/// let products = make_action("Products", ActionConfig::default()).unwrap();
/// let action = products.success(Some(json!([1, 2, 3]))).unwrap();
///
/// assert_eq!(action.action_type(), Some("GET_PRODUCTS_SUCCESSFUL"));
/// assert_eq!(action.payload(), Some(&json!([1, 2, 3])));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action {
    fields: Map<String, Value>,
}

impl Action {
    /// Create an action holding only a type string
    pub fn new(action_type: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(TYPE_KEY.to_string(), Value::String(action_type.into()));
        Self { fields }
    }

    /// Set the `payload` field
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.fields.insert(PAYLOAD_KEY.to_string(), payload);
        self
    }

    /// Shallow-merge fields into the action; incoming keys win
    pub fn merge(mut self, fields: Map<String, Value>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// The `type` field, if it is a string
    pub fn action_type(&self) -> Option<&str> {
        self.fields.get(TYPE_KEY).and_then(Value::as_str)
    }

    /// The `payload` field
    pub fn payload(&self) -> Option<&Value> {
        self.fields.get(PAYLOAD_KEY)
    }

    /// Any field by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume into the underlying map
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Action> for Value {
    fn from(action: Action) -> Self {
        Value::Object(action.fields)
    }
}

impl PartialEq<Value> for Action {
    fn eq(&self, other: &Value) -> bool {
        other.as_object() == Some(&self.fields)
    }
}
