//! Core library components.
//!
//! This module contains the reusable logic: the store abstraction and its
//! backends, the backup archive format, export formats, and configuration.

pub mod archive;
pub mod config;
pub mod constants;
pub mod find;
pub mod format;
pub mod store;
pub mod types;
pub mod validation;
