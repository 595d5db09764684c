//! Component-tree view layer.
//!
//! # Responsibility
//! - Provide the element/text node builder used by every renderer.
//! - Attach interaction handlers as typed actions.
//!
//! # Invariants
//! - All markup leaves this module through escaping serializers.

pub mod action;
pub mod node;

pub use action::Action;
pub use node::{Element, Node};
