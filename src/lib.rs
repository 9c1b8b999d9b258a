//! Tasklist - a terminal to-do list
//!
//! Add, edit, complete and delete tasks, filter them by status, and keep them
//! in a local key-value store between runs. The interface is built with
//! Ratatui.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`todo`] - Task model and list operations
//! * [`storage`] - Local key-value storage backends
//! * [`repositories`] - Task collection persistence on top of storage
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging setup for the `log` facade
pub mod logger;

/// Repository layer for the stored task collection
pub mod repositories;

/// Local key-value storage
pub mod storage;

/// Task model and list operations
pub mod todo;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;
