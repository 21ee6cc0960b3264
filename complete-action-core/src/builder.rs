//! Assembles action objects from a resolved type and a payload

use crate::action::Action;
use crate::config::ActionConfig;
use crate::error::ActionError;
use crate::naming::resolve_type;
use crate::validate::payload_hook;
use crate::variant::Variant;
use serde_json::Value;

/// Build the action for one variant
///
/// With a custom payload hook for `variant`, the result is `{ type }` merged
/// with the hook's fields (hook fields win on collision). Without one, the
/// result is `{ type, payload }`; a `None` payload leaves the key out.
///
/// Fails with [`ActionError::InvalidPayloadHook`] when the hook for `variant`
/// is configured but not callable.
pub fn build_action(
    name: &str,
    variant: Variant,
    config: &ActionConfig,
    payload: Option<Value>,
) -> Result<Action, ActionError> {
    let hook = payload_hook(config, variant)?;
    let action = Action::new(resolve_type(name, variant, config));

    let action = match (hook, payload) {
        (Some(hook), payload) => action.merge(hook(payload)),
        (None, Some(payload)) => action.with_payload(payload),
        (None, None) => action,
    };

    tracing::trace!(
        action_type = action.action_type().unwrap_or_default(),
        variant = %variant,
        custom_payload = hook.is_some(),
        "Action built"
    );

    Ok(action)
}
