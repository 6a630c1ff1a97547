//! Core types for Mado Creatives.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod status;

pub use status::*;
