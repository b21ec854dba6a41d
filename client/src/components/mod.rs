//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components wrap browser-side behavior (mount observers, prefetching,
//! busy buttons) so pages can compose them without repeating web-sys glue.

pub mod cache_clear_observer;
pub mod loading_button;
pub mod logout_button;
pub mod prefetch_routes;
