//! Input checks for action creators and their calls
//!
//! The typed API (`&str`, [`ActionConfig`], [`Variant`]) rules out most shape
//! errors at compile time. These checks cover what remains, plus the
//! duck-typed JSON entry points where any value may show up.

use crate::config::{is_truthy, ActionConfig, PayloadFn, PayloadHook};
use crate::error::ActionError;
use crate::variant::Variant;
use serde_json::Value;

/// Check an action name given as a string
pub fn check_name(name: &str) -> Result<&str, ActionError> {
    if name.is_empty() {
        return Err(ActionError::MissingName);
    }
    Ok(name)
}

/// Check an action name given as any JSON value
///
/// `null` and `""` are missing; any other non-string has the wrong type.
pub fn name_from_value(name: &Value) -> Result<&str, ActionError> {
    match name {
        Value::Null => Err(ActionError::MissingName),
        Value::String(s) => check_name(s),
        _ => Err(ActionError::InvalidNameType),
    }
}

/// Read configuration given as an optional JSON value
///
/// Absent and falsy values (`null`, `false`, `0`, `""`) mean no
/// configuration. Anything else must be an object.
pub fn config_from_value(config: Option<&Value>) -> Result<ActionConfig, ActionError> {
    match config {
        Some(value) if is_truthy(value) => ActionConfig::from_value(value),
        _ => Ok(ActionConfig::default()),
    }
}

/// Parse a request type given as a string
pub fn variant_from_str(variant: &str) -> Result<Variant, ActionError> {
    variant.parse()
}

/// Parse a request type given as any JSON value
pub fn variant_from_value(variant: &Value) -> Result<Variant, ActionError> {
    match variant {
        Value::Null => Err(ActionError::MissingVariant),
        Value::String(s) => variant_from_str(s),
        _ => Err(ActionError::InvalidVariantType),
    }
}

/// Look up the payload hook for a variant, rejecting one that is not callable
///
/// Only the hook of the requested variant is inspected.
pub fn payload_hook(
    config: &ActionConfig,
    variant: Variant,
) -> Result<Option<&PayloadFn>, ActionError> {
    match config.hook(variant) {
        None => Ok(None),
        Some(PayloadHook::Callable(hook)) => Ok(Some(hook.as_ref())),
        Some(PayloadHook::NotCallable(_)) => Err(ActionError::InvalidPayloadHook {
            variant,
            key: variant.hook_key(),
        }),
    }
}
