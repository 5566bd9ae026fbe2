//! Common types and utilities shared across framesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Error types
//! - Identifiers (PageId)

pub mod error;
mod page_id;

pub use error::{Error, Result};
pub use page_id::PageId;
