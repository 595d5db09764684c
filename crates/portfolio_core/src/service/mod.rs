//! Use-case orchestration layer.
//!
//! # Responsibility
//! - Coordinate data loading, rendering and page injection.
//!
//! # Invariants
//! - Services stay transport-agnostic; sources are injected.

pub mod page_controller;
