//! Naming options and custom payload hooks

use crate::error::ActionError;
use crate::variant::Variant;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Signature of a custom payload hook
///
/// Receives the raw payload (`None` when the caller gave none) and returns the
/// fields to merge into the action in place of the default `payload` field.
pub type PayloadFn = dyn Fn(Option<Value>) -> Map<String, Value> + Send + Sync;

/// A configured custom payload hook
///
/// Hooks built in code are always [`PayloadHook::Callable`]. Configuration read
/// from JSON cannot carry functions, so a hook key found there is kept as
/// [`PayloadHook::NotCallable`] and rejected when its variant is invoked.
#[derive(Clone)]
pub enum PayloadHook {
    /// A function that maps the payload to action fields
    Callable(Arc<PayloadFn>),
    /// A configured value that is not a function
    NotCallable(Value),
}

impl PayloadHook {
    /// Wrap a closure as a callable hook
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(Option<Value>) -> Map<String, Value> + Send + Sync + 'static,
    {
        PayloadHook::Callable(Arc::new(hook))
    }

    /// Whether the hook can be invoked
    pub fn is_callable(&self) -> bool {
        matches!(self, PayloadHook::Callable(_))
    }
}

impl fmt::Debug for PayloadHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadHook::Callable(_) => f.write_str("PayloadHook::Callable(..)"),
            PayloadHook::NotCallable(value) => {
                f.debug_tuple("PayloadHook::NotCallable").field(value).finish()
            }
        }
    }
}

/// Options that shape the generated type strings and payloads
///
/// All options are optional. Empty strings count as absent and fall back to
/// the defaults (`GET` prefix, `SUCCESSFUL` / `FAILURE` suffixes, no namespace).
///
/// # Example
/// ```
/// use complete_action_core::ActionConfig;
///
/// let config = ActionConfig::default()
///     .with_prefix("FETCH")
///     .with_fail_suffix("REJECTED");
/// assert_eq!(config.prefix(), Some("FETCH"));
/// assert_eq!(config.success_suffix(), None);
/// ```
///
/// Configuration can also be read from JSON using the camelCase keys
/// `namespace`, `prefix`, `successSuffix`, `failSuffix`, `customRequestPayload`,
/// `customSuccessPayload` and `customFailurePayload`. Unknown keys are ignored.
/// Falsy values (`null`, `false`, `0`, `""`) count as absent; numbers and
/// `true` given for a string option are used in their textual form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "RawActionConfig")]
pub struct ActionConfig {
    /// Prepended to the type string as `<namespace>/`
    pub namespace: Option<String>,
    /// Verb used instead of `GET`
    pub prefix: Option<String>,
    /// Suffix used instead of `SUCCESSFUL`
    pub success_suffix: Option<String>,
    /// Suffix used instead of `FAILURE`
    pub fail_suffix: Option<String>,
    /// Hook for `request` actions
    pub request_payload: Option<PayloadHook>,
    /// Hook for `success` actions
    pub success_payload: Option<PayloadHook>,
    /// Hook for `fail` actions
    pub failure_payload: Option<PayloadHook>,
}

impl ActionConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from a JSON value
    ///
    /// Fails with [`ActionError::InvalidConfigType`] unless `value` is an object.
    pub fn from_value(value: &Value) -> Result<Self, ActionError> {
        if !value.is_object() {
            return Err(ActionError::InvalidConfigType);
        }
        Ok(Self::deserialize(value)?)
    }

    /// Read configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Set the namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the verb prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the success suffix
    pub fn with_success_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.success_suffix = Some(suffix.into());
        self
    }

    /// Set the failure suffix
    pub fn with_fail_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.fail_suffix = Some(suffix.into());
        self
    }

    /// Set the hook for `request` actions
    pub fn with_request_payload<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<Value>) -> Map<String, Value> + Send + Sync + 'static,
    {
        self.request_payload = Some(PayloadHook::new(hook));
        self
    }

    /// Set the hook for `success` actions
    pub fn with_success_payload<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<Value>) -> Map<String, Value> + Send + Sync + 'static,
    {
        self.success_payload = Some(PayloadHook::new(hook));
        self
    }

    /// Set the hook for `fail` actions
    pub fn with_failure_payload<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<Value>) -> Map<String, Value> + Send + Sync + 'static,
    {
        self.failure_payload = Some(PayloadHook::new(hook));
        self
    }

    /// The namespace, if set and non-empty
    pub fn namespace(&self) -> Option<&str> {
        non_empty(&self.namespace)
    }

    /// The prefix, if set and non-empty
    pub fn prefix(&self) -> Option<&str> {
        non_empty(&self.prefix)
    }

    /// The success suffix, if set and non-empty
    pub fn success_suffix(&self) -> Option<&str> {
        non_empty(&self.success_suffix)
    }

    /// The failure suffix, if set and non-empty
    pub fn fail_suffix(&self) -> Option<&str> {
        non_empty(&self.fail_suffix)
    }

    /// The payload hook configured for a variant
    pub fn hook(&self, variant: Variant) -> Option<&PayloadHook> {
        match variant {
            Variant::Request => self.request_payload.as_ref(),
            Variant::Success => self.success_payload.as_ref(),
            Variant::Fail => self.failure_payload.as_ref(),
        }
    }
}

fn non_empty(option: &Option<String>) -> Option<&str> {
    option.as_deref().filter(|s| !s.is_empty())
}

/// Wire shape of [`ActionConfig`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawActionConfig {
    namespace: Option<Value>,
    prefix: Option<Value>,
    success_suffix: Option<Value>,
    fail_suffix: Option<Value>,
    custom_request_payload: Option<Value>,
    custom_success_payload: Option<Value>,
    custom_failure_payload: Option<Value>,
}

impl TryFrom<RawActionConfig> for ActionConfig {
    type Error = String;

    fn try_from(raw: RawActionConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            namespace: text_option("namespace", raw.namespace)?,
            prefix: text_option("prefix", raw.prefix)?,
            success_suffix: text_option("successSuffix", raw.success_suffix)?,
            fail_suffix: text_option("failSuffix", raw.fail_suffix)?,
            request_payload: not_callable(raw.custom_request_payload),
            success_payload: not_callable(raw.custom_success_payload),
            failure_payload: not_callable(raw.custom_failure_payload),
        })
    }
}

// Falsy values count as absent; truthy scalars are used as text.
fn text_option(key: &str, value: Option<Value>) -> Result<Option<String>, String> {
    match value.filter(is_truthy) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Bool(_)) => Ok(Some("true".to_string())),
        Some(Value::Number(n)) => Ok(Some(number_text(&n))),
        Some(other) => Err(format!("option `{key}` should be a string, got {other}")),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    match (n.as_i64(), n.as_u64(), n.as_f64()) {
        (Some(i), _, _) => i.to_string(),
        (_, Some(u), _) => u.to_string(),
        (_, _, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

// Falsy hook values count as absent.
fn not_callable(value: Option<Value>) -> Option<PayloadHook> {
    value.filter(is_truthy).map(PayloadHook::NotCallable)
}

/// JavaScript-style truthiness of a JSON value
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
