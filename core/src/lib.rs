//! Core library for Tasker
//!
//! This crate contains the board's business logic, including:
//! - Task model and status/priority enums
//! - In-memory task storage

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
