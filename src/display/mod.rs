//! Display formatting for terminal output
//!
//! Small text helpers shared by the report views.

pub mod report;
