//! Interaction state shared by renderers and page bindings.
//!
//! # Responsibility
//! - Own toggle-region visibility and lightbox state explicitly instead of
//!   through ambient page globals.
//! - Ship the browser bindings that dispatch rendered actions.
//!
//! # Invariants
//! - Renderers read this state; only interaction operations mutate it.

pub mod bindings;
pub mod state;
