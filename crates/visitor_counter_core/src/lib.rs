//! Shared visitor counter primitives.
//!
//! This crate owns the counter record identity, the invocation input type, the
//! response envelope and the store error taxonomy. It intentionally excludes
//! AWS SDK and Lambda runtime concerns.

pub mod contract;
pub mod error;
pub mod response;
