//! Test utilities for code built on complete-action
//!
//! - [`ActionRecorder`]: wraps an [`ActionCreator`] and keeps every action it builds
//! - Assertion macros for checking recorded actions by type string
//!
//! # Example
//!
//! ```
//! use complete_action_core::testing::ActionRecorder;
//! use complete_action_core::{assert_emitted, assert_not_emitted, make_action, ActionConfig};
//!
//! let products = make_action("Products", ActionConfig::default()).unwrap();
//! let mut recorder = ActionRecorder::new(products);
//!
//! recorder.request(None).unwrap();
//! recorder.fail(None).unwrap();
//!
//! let actions = recorder.drain_emitted();
//! assert_emitted!(actions, "GET_PRODUCTS");
//! assert_emitted!(actions, "GET_PRODUCTS_FAILURE");
//! assert_not_emitted!(actions, "GET_PRODUCTS_SUCCESSFUL");
//! ```

use serde_json::Value;

use crate::action::Action;
use crate::creator::ActionCreator;
use crate::error::ActionError;
use crate::variant::Variant;

/// Records every action built through a wrapped [`ActionCreator`].
///
/// Failed calls are not recorded.
#[derive(Debug, Clone)]
pub struct ActionRecorder {
    creator: ActionCreator,
    emitted: Vec<Action>,
}

impl ActionRecorder {
    /// Wrap a creator.
    pub fn new(creator: ActionCreator) -> Self {
        Self {
            creator,
            emitted: Vec::new(),
        }
    }

    /// The wrapped creator.
    pub fn creator(&self) -> &ActionCreator {
        &self.creator
    }

    /// Build and record an action for a request type string.
    pub fn create(&mut self, variant: &str, payload: Option<Value>) -> Result<Action, ActionError> {
        let action = self.creator.create(variant, payload)?;
        Ok(self.record(action))
    }

    /// Build and record an action for a variant.
    pub fn dispatch(
        &mut self,
        variant: Variant,
        payload: Option<Value>,
    ) -> Result<Action, ActionError> {
        let action = self.creator.dispatch(variant, payload)?;
        Ok(self.record(action))
    }

    /// Build and record a `request` action.
    pub fn request(&mut self, payload: Option<Value>) -> Result<Action, ActionError> {
        self.dispatch(Variant::Request, payload)
    }

    /// Build and record a `success` action.
    pub fn success(&mut self, payload: Option<Value>) -> Result<Action, ActionError> {
        self.dispatch(Variant::Success, payload)
    }

    /// Build and record a `fail` action.
    pub fn fail(&mut self, payload: Option<Value>) -> Result<Action, ActionError> {
        self.dispatch(Variant::Fail, payload)
    }

    /// Take all recorded actions, oldest first.
    pub fn drain_emitted(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.emitted)
    }

    /// Check if any actions were recorded.
    pub fn has_emitted(&self) -> bool {
        !self.emitted.is_empty()
    }

    fn record(&mut self, action: Action) -> Action {
        self.emitted.push(action.clone());
        action
    }
}

/// Assert that an action has the given type string.
///
/// # Example
///
/// ```
/// use complete_action_core::{assert_action_type, make_action, ActionConfig};
///
/// let action = make_action("Products", ActionConfig::default())
///     .unwrap()
///     .request(None)
///     .unwrap();
/// assert_action_type!(action, "GET_PRODUCTS");
/// ```
#[macro_export]
macro_rules! assert_action_type {
    ($action:expr, $action_type:expr) => {
        assert_eq!(
            $action.action_type(),
            Some($action_type),
            "Expected action of type `{}`, got: {:?}",
            $action_type,
            $action
        );
    };
}

/// Assert that an action with the given type string was emitted.
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $action_type:expr) => {
        assert!(
            $actions
                .iter()
                .any(|a| a.action_type() == Some($action_type)),
            "Expected action of type `{}` to be emitted, but got: {:?}",
            $action_type,
            $actions
        );
    };
}

/// Assert that no action with the given type string was emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $action_type:expr) => {
        assert!(
            !$actions
                .iter()
                .any(|a| a.action_type() == Some($action_type)),
            "Expected action of type `{}` NOT to be emitted, but it was: {:?}",
            $action_type,
            $actions
        );
    };
}

/// Count how many emitted actions have the given type string.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $action_type:expr) => {
        $actions
            .iter()
            .filter(|a| a.action_type() == Some($action_type))
            .count()
    };
}
