//! Route handlers

pub mod board;
pub mod health;
pub mod task;
