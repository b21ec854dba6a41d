//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the server.

pub mod api;
