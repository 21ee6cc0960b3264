//! The three phases of an asynchronous operation

use crate::error::ActionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which phase of an asynchronous operation an action represents
///
/// Parsed from the request type strings `"request"`, `"success"` and `"fail"`.
///
/// # Example
/// ```
/// use complete_action_core::Variant;
///
/// let variant: Variant = "success".parse().unwrap();
/// assert_eq!(variant, Variant::Success);
/// assert_eq!(variant.as_str(), "success");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// The operation was started
    Request,
    /// The operation completed
    Success,
    /// The operation failed
    Fail,
}

impl Variant {
    /// All variants, in lifecycle order
    pub const ALL: [Variant; 3] = [Variant::Request, Variant::Success, Variant::Fail];

    /// The request type string for this variant
    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Request => "request",
            Variant::Success => "success",
            Variant::Fail => "fail",
        }
    }

    /// Configuration key of the custom payload hook used by this variant
    pub const fn hook_key(self) -> &'static str {
        match self {
            Variant::Request => "customRequestPayload",
            Variant::Success => "customSuccessPayload",
            Variant::Fail => "customFailurePayload",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(ActionError::MissingVariant),
            "request" => Ok(Variant::Request),
            "success" => Ok(Variant::Success),
            "fail" => Ok(Variant::Fail),
            other => Err(ActionError::UnknownVariant(other.to_string())),
        }
    }
}
