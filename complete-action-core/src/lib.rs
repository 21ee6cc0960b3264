//! Core types for complete-action
//!
//! Flux-style code describes every asynchronous operation with three actions:
//! one when the operation starts, one when it succeeds and one when it fails.
//! This crate builds all three from a single name.
//!
//! # Core Concepts
//!
//! - **ActionCreator**: Returned by [`make_action`], builds actions on demand
//! - **Variant**: Which phase an action represents (`request`, `success`, `fail`)
//! - **ActionConfig**: Namespace, prefix, suffixes and custom payload hooks
//! - **Action**: The produced object, a `type` string plus a payload
//!
//! # Basic Example
//!
//! ```
//! use complete_action_core::prelude::*;
//! use serde_json::json;
//!
//! let products = make_action("Products", ActionConfig::default()).unwrap();
//!
//! assert_eq!(products.create("request", None).unwrap(), json!({ "type": "GET_PRODUCTS" }));
//! assert_eq!(
//!     products.create("success", Some(json!({ "test": 123 }))).unwrap(),
//!     json!({ "type": "GET_PRODUCTS_SUCCESSFUL", "payload": { "test": 123 } })
//! );
//! ```
//!
//! # Custom Payloads
//!
//! A payload hook replaces the default `payload` field with its own fields.
//! Each variant has its own hook; the others keep the default shape.
//!
//! ```
//! use complete_action_core::prelude::*;
//! use serde_json::{json, Map, Value};
//!
//! let products = make_action(
//!     "Products",
//!     ActionConfig::default().with_failure_payload(|payload| {
//!         let mut fields = Map::new();
//!         fields.insert("error".into(), payload.unwrap_or(Value::Null));
//!         fields
//!     }),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     products.fail(Some(json!("timeout"))).unwrap(),
//!     json!({ "type": "GET_PRODUCTS_FAILURE", "error": "timeout" })
//! );
//! ```
//!
//! # Matching in Reducers
//!
//! ```ignore
//! let types = products.types();
//!
//! fn reducer(state: &mut AppState, action: &Action) -> bool {
//!     match types.variant_of(action.action_type().unwrap_or_default()) {
//!         Some(Variant::Request) => { state.loading = true; true }
//!         Some(Variant::Success) => { state.loading = false; true }
//!         Some(Variant::Fail) => { state.loading = false; state.failed = true; true }
//!         None => false,
//!     }
//! }
//! ```

pub mod action;
pub mod builder;
pub mod config;
pub mod creator;
pub mod error;
pub mod naming;
pub mod testing;
pub mod validate;
pub mod variant;

// Core exports
pub use action::Action;
pub use config::{ActionConfig, PayloadFn, PayloadHook};
pub use creator::{make_action, make_action_from_value, ActionCreator};
pub use error::ActionError;
pub use naming::TypeNames;
pub use variant::Variant;

// Testing exports
pub use testing::ActionRecorder;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::config::{ActionConfig, PayloadHook};
    pub use crate::creator::{make_action, make_action_from_value, ActionCreator};
    pub use crate::error::ActionError;
    pub use crate::naming::TypeNames;
    pub use crate::variant::Variant;
}
