//! Common types shared across the conversion core.
//!
//! This module provides the unified error type and the resolved color
//! primitive used by both the style engine and the layout engine, ensuring a
//! consistent API for users.

// Submodule declarations
pub mod color;
pub mod error;

// Re-exports for convenience
pub use color::Rgb;
pub use error::{Error, Result};
