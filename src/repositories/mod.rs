//! Repository layer on top of the key-value store.

pub mod task;

pub use task::{RepositoryError, TaskRepository};
