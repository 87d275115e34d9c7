//! Networking modules for the agency REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP calls and error taxonomy; `types` defines the
//! shared wire schema.

pub mod api;
pub mod types;
