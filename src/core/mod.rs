//! Core library components.
//!
//! This module contains the reusable business logic for configuration
//! parsing, name resolution, and sync orchestration.

pub mod config;
pub mod document;
pub mod engine;
pub mod env;
pub mod mapping;
pub mod report;
pub mod status;
pub mod store;
