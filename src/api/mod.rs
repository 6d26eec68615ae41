//! JSON surface of the service: the health check.
//!
//! # Modules
//!
//! - [`dto`] - Response payloads
//! - [`handlers`] - JSON handlers

pub mod dto;
pub mod handlers;
