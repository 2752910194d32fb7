//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod catalog;
pub mod resolve;
