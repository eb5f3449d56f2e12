//! Session observers
//!
//! The display side of a fetch run. A session reports progress lines into
//! numbered slots and asks its observer, between pages, whether it should
//! stop. The fetch logic never renders anything itself.

use crate::model::CollectedCard;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::warn;

/// Receives progress from a fetch session
pub trait SessionObserver: Send {
    /// Show `text` in display slot `slot`
    fn report_line(&mut self, slot: usize, text: &str);

    /// Whether the run should stop before the next page is requested
    fn halt_requested(&self) -> bool {
        false
    }

    /// Called once when a halt stopped the run
    fn on_halt(&mut self, _cards: &[CollectedCard]) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SessionObserver for NullObserver {
    fn report_line(&mut self, _slot: usize, _text: &str) {}
}

// ============================================================================
// Halt Handle
// ============================================================================

/// Cloneable stop flag shared between a session and whoever may stop it
#[derive(Debug, Clone, Default)]
pub struct HaltHandle {
    flag: Arc<AtomicBool>,
}

impl HaltHandle {
    /// Create a new, untriggered handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the session to stop scheduling pages
    pub fn halt(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether a halt has been requested
    pub fn is_halted(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Debug Corner
// ============================================================================

/// Fixed number of debug text slots
///
/// Writing to a slot past the end never grows the list; the write is
/// redirected to slot 0 with an overflow note instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugCorner {
    lines: Vec<String>,
}

impl DebugCorner {
    /// Create a corner with `size` empty slots
    pub fn new(size: usize) -> Self {
        Self {
            lines: vec![String::new(); size],
        }
    }

    /// Number of slots
    pub fn size(&self) -> usize {
        self.lines.len()
    }

    /// Set the text of `slot`
    pub fn set_text(&mut self, slot: usize, text: impl Into<String>) {
        let size = self.lines.len();
        if slot >= size {
            warn!("Debug corner slot {} out of range (size {})", slot, size);
            if let Some(first) = self.lines.first_mut() {
                *first = format!("{slot} ← index>={size} not supported");
            }
        } else {
            self.lines[slot] = text.into();
        }
    }

    /// Text of `slot`, if it exists
    pub fn line(&self, slot: usize) -> Option<&str> {
        self.lines.get(slot).map(String::as_str)
    }

    /// All slots, slot 0 first
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the slots bottom-up, slot 0 on the last line
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .rev()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl SessionObserver for DebugCorner {
    fn report_line(&mut self, slot: usize, text: &str) {
        self.set_text(slot, text);
    }
}
