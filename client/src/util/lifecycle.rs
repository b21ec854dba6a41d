//! Mount/unmount hooks for components that run one-shot browser work.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos effects only run in the browser, after the component is attached,
//! so an effect that reads no signals is a mount hook. [`on_attach`] wraps
//! that and guarantees the callback runs at most once per mount.
//! [`Attachment`] is the matching unmount signal: scheduled work checks it
//! before doing anything, and [`detach_on_cleanup`] flips it when the
//! owning component is disposed.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

/// Shared "still mounted" flag for work scheduled by a component.
#[derive(Debug, Clone)]
pub struct Attachment {
    attached: Arc<AtomicBool>,
}

impl Attachment {
    #[must_use]
    pub fn new() -> Self {
        Self { attached: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Relaxed)
    }

    /// Mark the owning component as gone. Idempotent.
    pub fn detach(&self) {
        self.attached.store(false, Ordering::Relaxed);
    }
}

impl Default for Attachment {
    fn default() -> Self {
        Self::new()
    }
}

/// Detach `attachment` when the current reactive owner is cleaned up.
pub fn detach_on_cleanup(attachment: &Attachment) {
    let attachment = attachment.clone();
    on_cleanup(move || attachment.detach());
}

/// Run `callback` once, after the current component is attached to the page.
/// Never runs during server rendering.
pub fn on_attach<F>(callback: F)
where
    F: FnOnce() + 'static,
{
    let mut callback = Some(callback);
    Effect::new(move || {
        if let Some(callback) = callback.take() {
            callback();
        }
    });
}
