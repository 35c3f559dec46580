//! Core domain logic for workflow-lint
//!
//! This module contains pure logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Finding, Report, Reference, Severity)
//! - `services/` - Pattern registry, reference extraction, name and section filters

pub mod models;
pub mod services;
