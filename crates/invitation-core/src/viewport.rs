//! Viewport capability.
//!
//! The card only needs one bit from the window: is it narrower than the
//! breakpoint. [`SharedViewport`] is the implementation the desktop shell
//! feeds from resize events; tests construct it at a fixed size.

use std::sync::atomic::{AtomicU32, Ordering};

/// Width below which the layout switches to its narrow (phone) form.
pub const DEFAULT_NARROW_BREAKPOINT: u32 = 768;

/// Supplies the "is narrow" signal consumed by layout and animation density.
pub trait ViewportObserver: Send + Sync {
    fn is_narrow(&self) -> bool;
}

/// Logical window size stored atomically so resize handlers and timer tasks
/// can share it without locking.
#[derive(Debug)]
pub struct SharedViewport {
    width: AtomicU32,
    height: AtomicU32,
    breakpoint: u32,
}

impl SharedViewport {
    pub fn new(width: u32, height: u32, breakpoint: u32) -> Self {
        Self {
            width: AtomicU32::new(width),
            height: AtomicU32::new(height),
            breakpoint,
        }
    }

    /// Record a new logical size. Returns true if the narrow signal flipped.
    pub fn resize(&self, width: u32, height: u32) -> bool {
        let was_narrow = self.is_narrow();
        self.width.store(width, Ordering::Relaxed);
        self.height.store(height, Ordering::Relaxed);
        was_narrow != self.is_narrow()
    }

    pub fn width(&self) -> u32 {
        self.width.load(Ordering::Relaxed)
    }

    pub fn height(&self) -> u32 {
        self.height.load(Ordering::Relaxed)
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }
}

impl ViewportObserver for SharedViewport {
    fn is_narrow(&self) -> bool {
        self.width() < self.breakpoint
    }
}
