//! Core building blocks: configuration, error types, and shared models.

pub mod config;
pub mod error;
pub mod models;
