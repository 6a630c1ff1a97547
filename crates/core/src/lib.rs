//! Mado Creatives Core - Shared types library.
//!
//! This crate provides common types used across the Mado Creatives platform:
//! - `server` - Public JSON API and admin dashboard backend
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`slug`] - URL-safe slug derivation from display names
//! - [`types`] - Status enums shared between the API and its clients

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod slug;
pub mod types;

pub use slug::slugify;
pub use types::*;
