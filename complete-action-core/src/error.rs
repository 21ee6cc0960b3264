//! Errors raised while building action creators and actions

use crate::variant::Variant;
use thiserror::Error;

/// Every precondition that can fail, either when an action creator is built
/// or when it is called.
///
/// Errors are returned to the caller as-is; nothing is retried or logged.
#[derive(Error, Debug)]
pub enum ActionError {
    /// The action name was absent or empty.
    #[error("You need to set the name of the action.")]
    MissingName,

    /// The action name was present but not a string.
    #[error("The action name should be a string.")]
    InvalidNameType,

    /// The options were present but not an object.
    #[error("The options should be an object.")]
    InvalidConfigType,

    /// The options object could not be deserialized.
    #[error("The options could not be read: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// The request type was absent or empty.
    #[error("You should define your request type.")]
    MissingVariant,

    /// The request type was present but not a string.
    #[error("The request type name should be a string.")]
    InvalidVariantType,

    /// The request type is not one of `request`, `success` or `fail`.
    #[error("Unknown request type `{0}`, expected one of: request, success, fail.")]
    UnknownVariant(String),

    /// The payload hook configured for the invoked variant is not callable.
    #[error("options.{key} should be a function.")]
    InvalidPayloadHook {
        /// Variant that needed the hook
        variant: Variant,
        /// Configuration key holding the hook
        key: &'static str,
    },
}
