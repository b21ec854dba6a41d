//! Client state that outlives a single component.
//!
//! SYSTEM CONTEXT
//! ==============
//! State here is read and written across page loads within one tab, so it is
//! kept in tab-scoped storage rather than reactive signals.

pub mod cache_clear;
