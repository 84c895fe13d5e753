//! Networking modules for the TIX REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends requests, `outcome` interprets the `{code, data}`
//! envelope, and `types` defines the shared wire schema.

pub mod api;
pub mod outcome;
pub mod types;
