//! AWS-oriented adapters and handlers for the visitor counter.
//!
//! This crate owns runtime integration details (the Lambda handler, the
//! DynamoDB adapter and environment configuration) on top of the contract
//! primitives in `visitor_counter_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
