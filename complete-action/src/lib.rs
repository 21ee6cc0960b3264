//! complete-action: Request / success / failure actions from a single name
//!
//! Flux-style state management spells out three actions for every asynchronous
//! operation. `make_action` builds all of them from one name and a handful of
//! naming options.
//!
//! # Example
//! ```
//! use complete_action::prelude::*;
//! use serde_json::json;
//!
//! let items = make_action("Items", ActionConfig::default().with_namespace("PRODUCTS")).unwrap();
//!
//! assert_eq!(items.create("request", None).unwrap(), json!({ "type": "PRODUCTS/GET_ITEMS" }));
//! assert_eq!(items.types().fail, "PRODUCTS/GET_ITEMS_FAILURE");
//! ```

// Re-export everything from core
pub use complete_action_core::*;

/// Prelude for convenient imports
pub mod prelude {
    // Factory
    pub use complete_action_core::{make_action, make_action_from_value, ActionCreator};

    // Types
    pub use complete_action_core::{Action, ActionConfig, PayloadHook, TypeNames, Variant};

    // Errors
    pub use complete_action_core::ActionError;

    // Testing
    pub use complete_action_core::testing::ActionRecorder;
    pub use complete_action_core::{
        assert_action_type, assert_emitted, assert_not_emitted, count_emitted,
    };
}
