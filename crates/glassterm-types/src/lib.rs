//! Foundation types for glassterm.
//!
//! Platform-agnostic types shared by every glassterm crate: the text color
//! table, input events, window modes, configuration, and error types.

pub mod color;
pub mod config;
pub mod error;
pub mod input;
pub mod window;
