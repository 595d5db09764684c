//! Derived annotations over loaded projects.
//!
//! # Responsibility
//! - Infer display tags from free text.
//! - Classify media entries and build their embeddable markup.
//!
//! # Invariants
//! - Annotation is pure; inputs are never mutated.

pub mod media;
pub mod tags;
