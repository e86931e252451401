//! Domain logic for the projectdesk dashboard.
//!
//! The `core` crate contains no storage or I/O; every function takes the
//! data it works on as arguments, and "now" is always passed in by the
//! caller.

pub mod calendar;
pub mod comment;
pub mod employee;
pub mod error;
pub mod grouping;
pub mod project;
pub mod timespan;
pub mod types;
pub mod work_log;
