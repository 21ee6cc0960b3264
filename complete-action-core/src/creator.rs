//! The action creator factory
//!
//! [`make_action`] validates a name and configuration once and returns an
//! [`ActionCreator`]. The creator is called with a request type (`"request"`,
//! `"success"` or `"fail"`) and an optional payload, and returns a fresh
//! [`Action`] every time.
//!
//! # Example
//!
//! ```
//! use complete_action_core::{make_action, ActionConfig};
//! use serde_json::json;
//!
//! let products = make_action(
//!     "Products",
//!     ActionConfig::default().with_prefix("FETCH").with_fail_suffix("REJECTED"),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     products.create("fail", None).unwrap(),
//!     json!({ "type": "FETCH_PRODUCTS_REJECTED" })
//! );
//! ```

use crate::action::Action;
use crate::builder::build_action;
use crate::config::ActionConfig;
use crate::error::ActionError;
use crate::naming::{resolve_type, TypeNames};
use crate::validate;
use crate::variant::Variant;
use serde_json::Value;
use std::sync::Arc;

/// Create an action creator for `name`
///
/// Fails with [`ActionError::MissingName`] if `name` is empty.
pub fn make_action(name: &str, config: ActionConfig) -> Result<ActionCreator, ActionError> {
    let name = validate::check_name(name)?;
    Ok(ActionCreator::new(name, config))
}

/// Create an action creator from untyped JSON inputs
///
/// Accepts whatever a dynamic caller hands over: the name must be a non-empty
/// string and the configuration, when present, must be an object.
///
/// # Example
/// ```
/// use complete_action_core::{make_action_from_value, ActionError};
/// use serde_json::json;
///
/// let err = make_action_from_value(&json!("Products"), Some(&json!("Options"))).unwrap_err();
/// assert!(matches!(err, ActionError::InvalidConfigType));
/// ```
pub fn make_action_from_value(
    name: &Value,
    config: Option<&Value>,
) -> Result<ActionCreator, ActionError> {
    let name = validate::name_from_value(name)?;
    let config = validate::config_from_value(config)?;
    Ok(ActionCreator::new(name, config))
}

/// Builds the request / success / failure actions of one operation
///
/// Holds the name and configuration captured at construction. Cloning is
/// cheap and clones share them; nothing is mutated after construction, so a
/// creator can be called from any number of threads.
#[derive(Debug, Clone)]
pub struct ActionCreator {
    name: Arc<str>,
    config: Arc<ActionConfig>,
}

impl ActionCreator {
    fn new(name: &str, config: ActionConfig) -> Self {
        let creator = Self {
            name: Arc::from(name),
            config: Arc::new(config),
        };
        tracing::debug!(
            name = %creator.name,
            request_type = %creator.type_for(Variant::Request),
            "Action creator ready"
        );
        creator
    }

    /// The action name given at construction
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configuration given at construction
    pub fn config(&self) -> &ActionConfig {
        &self.config
    }

    /// Build an action for a request type string
    ///
    /// Fails with [`ActionError::MissingVariant`] for an empty string and
    /// [`ActionError::UnknownVariant`] for anything other than `request`,
    /// `success` or `fail`.
    pub fn create(&self, variant: &str, payload: Option<Value>) -> Result<Action, ActionError> {
        let variant = validate::variant_from_str(variant)?;
        self.dispatch(variant, payload)
    }

    /// Build an action for a request type given as any JSON value
    pub fn create_from_value(
        &self,
        variant: &Value,
        payload: Option<Value>,
    ) -> Result<Action, ActionError> {
        let variant = validate::variant_from_value(variant)?;
        self.dispatch(variant, payload)
    }

    /// Build an action for a variant
    ///
    /// Only fails when the custom payload hook for `variant` is not callable.
    pub fn dispatch(&self, variant: Variant, payload: Option<Value>) -> Result<Action, ActionError> {
        build_action(&self.name, variant, &self.config, payload)
    }

    /// Build a `request` action
    pub fn request(&self, payload: Option<Value>) -> Result<Action, ActionError> {
        self.dispatch(Variant::Request, payload)
    }

    /// Build a `success` action
    pub fn success(&self, payload: Option<Value>) -> Result<Action, ActionError> {
        self.dispatch(Variant::Success, payload)
    }

    /// Build a `fail` action
    pub fn fail(&self, payload: Option<Value>) -> Result<Action, ActionError> {
        self.dispatch(Variant::Fail, payload)
    }

    /// The type string of one variant
    pub fn type_for(&self, variant: Variant) -> String {
        resolve_type(&self.name, variant, &self.config)
    }

    /// All three type strings
    pub fn types(&self) -> TypeNames {
        TypeNames::resolve(&self.name, &self.config)
    }
}
