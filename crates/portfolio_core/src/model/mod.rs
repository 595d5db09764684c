//! Portfolio domain model.
//!
//! # Responsibility
//! - Define canonical data structures loaded from the project data source.
//! - Keep one project shape for both solo and team sections.
//!
//! # Invariants
//! - Every rendered project is identified by a stable, page-unique id.
//! - Snapshots are read-only after id assignment.

pub mod project;
