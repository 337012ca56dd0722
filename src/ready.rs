//! One-time "content ready" signal used to dismiss the loading skeleton.

use std::sync::atomic::{AtomicBool, Ordering};

/// Id of the loading placeholder in `index.html`
pub const SKELETON_ID: &str = "skeleton";

/// Class that hides an element
pub const HIDDEN_CLASS: &str = "u-hidden";

/// Fires at most once
#[derive(Debug, Default)]
pub struct ReadyLatch {
    fired: AtomicBool,
}

impl ReadyLatch {
    pub const fn new() -> Self {
        Self { fired: AtomicBool::new(false) }
    }

    /// Run `emit` on the first call only; returns whether it ran
    pub fn fire(&self, emit: impl FnOnce()) -> bool {
        if self.fired.swap(true, Ordering::AcqRel) {
            return false;
        }
        emit();
        true
    }
}

static CONTENT_READY: ReadyLatch = ReadyLatch::new();

/// Hide `#skeleton`, once per session
pub fn mark_content_ready() {
    CONTENT_READY.fire(|| {
        let skeleton = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(SKELETON_ID));
        match skeleton {
            Some(el) => {
                if let Err(e) = el.class_list().add_1(HIDDEN_CLASS) {
                    web_sys::console::warn_1(&format!("[Ready] Failed to hide skeleton: {:?}", e).into());
                }
            }
            None => web_sys::console::warn_1(&"[Ready] No #skeleton element".into()),
        }
    });
}
