//! Application layer - Composite reports
//!
//! This module combines several domain operations into single report structures.

pub mod report;
