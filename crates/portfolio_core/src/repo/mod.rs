//! Data access abstractions for project documents.
//!
//! # Responsibility
//! - Define the read-only project source contract.
//! - Isolate file and HTTP transport details from page orchestration.
//!
//! # Invariants
//! - Sources return semantic errors (`Status`) in addition to transport
//!   errors.

pub mod project_source;
