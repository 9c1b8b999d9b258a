//! Utility modules for the Tasklist application.
//!
//! - [`datetime`] - Formatting of stored creation times

pub mod datetime;
