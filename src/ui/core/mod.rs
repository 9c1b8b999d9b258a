//! Core UI functionality for the Tasklist application.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//!
//! Components turn key events into [`Action`]s, then apply them in
//! [`Component::update`]. The root component forwards whatever its children
//! leave unhandled and performs the storage write once the action settles.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
