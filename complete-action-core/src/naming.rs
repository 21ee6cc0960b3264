//! Type string resolution
//!
//! A type string is assembled as `[<namespace>/]<prefix>_<NAME>[_<suffix>]`:
//!
//! | variant   | shape                             | default suffix |
//! |-----------|-----------------------------------|----------------|
//! | `request` | `<namespace>/<prefix>_<NAME>`     | none           |
//! | `success` | `<namespace>/<prefix>_<NAME>_<S>` | `SUCCESSFUL`   |
//! | `fail`    | `<namespace>/<prefix>_<NAME>_<S>` | `FAILURE`      |
//!
//! The namespace segment is omitted when no namespace is configured and the
//! prefix defaults to `GET`.

use crate::config::ActionConfig;
use crate::variant::Variant;

/// Verb used when no prefix is configured
pub const DEFAULT_PREFIX: &str = "GET";
/// Suffix used for `success` when none is configured
pub const DEFAULT_SUCCESS_SUFFIX: &str = "SUCCESSFUL";
/// Suffix used for `fail` when none is configured
pub const DEFAULT_FAIL_SUFFIX: &str = "FAILURE";

/// Resolve the type string for one variant
///
/// # Example
/// ```
/// use complete_action_core::{naming::resolve_type, ActionConfig, Variant};
///
/// let config = ActionConfig::default().with_namespace("PRODUCTS");
/// assert_eq!(resolve_type("Items", Variant::Request, &config), "PRODUCTS/GET_ITEMS");
/// assert_eq!(
///     resolve_type("Items", Variant::Fail, &config),
///     "PRODUCTS/GET_ITEMS_FAILURE"
/// );
/// ```
pub fn resolve_type(name: &str, variant: Variant, config: &ActionConfig) -> String {
    let mut resolved = String::new();

    if let Some(namespace) = config.namespace() {
        resolved.push_str(namespace);
        resolved.push('/');
    }

    resolved.push_str(config.prefix().unwrap_or(DEFAULT_PREFIX));
    resolved.push('_');
    resolved.push_str(&name.to_uppercase());

    if let Some(suffix) = suffix_for(variant, config) {
        resolved.push('_');
        resolved.push_str(suffix);
    }

    resolved
}

fn suffix_for(variant: Variant, config: &ActionConfig) -> Option<&str> {
    match variant {
        Variant::Request => None,
        Variant::Success => Some(config.success_suffix().unwrap_or(DEFAULT_SUCCESS_SUFFIX)),
        Variant::Fail => Some(config.fail_suffix().unwrap_or(DEFAULT_FAIL_SUFFIX)),
    }
}

/// The three type strings of one action family
///
/// Handy for matching on incoming actions in a reducer without building any.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeNames {
    /// Type of `request` actions
    pub request: String,
    /// Type of `success` actions
    pub success: String,
    /// Type of `fail` actions
    pub fail: String,
}

impl TypeNames {
    /// Resolve all three type strings
    pub fn resolve(name: &str, config: &ActionConfig) -> Self {
        Self {
            request: resolve_type(name, Variant::Request, config),
            success: resolve_type(name, Variant::Success, config),
            fail: resolve_type(name, Variant::Fail, config),
        }
    }

    /// Type string for a variant
    pub fn get(&self, variant: Variant) -> &str {
        match variant {
            Variant::Request => &self.request,
            Variant::Success => &self.success,
            Variant::Fail => &self.fail,
        }
    }

    /// Which variant a type string belongs to, if any
    pub fn variant_of(&self, action_type: &str) -> Option<Variant> {
        Variant::ALL
            .into_iter()
            .find(|variant| self.get(*variant) == action_type)
    }
}
