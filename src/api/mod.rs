//! HTTP API layer for request/response handling.
//!
//! Translates HTTP requests into domain operations and formats responses
//! according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers

pub mod dto;
pub mod handlers;
