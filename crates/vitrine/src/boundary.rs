//! Fault isolation for independently rendered page sections.
//!
//! A [`SectionBoundary`] wraps one section's render attempt. A panic
//! inside the wrapped draw call is caught at the boundary, reported to a
//! diagnostic sink, and latched: from that point on the boundary renders
//! nothing, and sibling sections keep rendering normally. The latch is
//! never reset for the lifetime of the boundary.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use ratatui::{buffer::Buffer, layout::Rect};
use tracing::error;

/// Fallback label for unlabeled sections.
const FALLBACK_LABEL: &str = "section";

/// One-way diagnostic reporting. Fire-and-forget, never fails the caller.
pub trait DiagnosticSink {
    fn report(&self, label: &str, fault: &str, context: &str);
}

/// Production sink that logs through `tracing`.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, label: &str, fault: &str, context: &str) {
        error!(label, fault, context, "section render failed; output suppressed");
    }
}

/// Sticky fault boundary around one renderable section.
#[derive(Debug)]
pub struct SectionBoundary {
    label: Option<String>,
    crashed: bool,
}

impl SectionBoundary {
    /// Create a boundary, optionally labeled for diagnostics.
    pub fn new(label: Option<&str>) -> Self {
        Self {
            label: label.map(str::to_string),
            crashed: false,
        }
    }

    /// Whether a fault has been latched.
    pub fn crashed(&self) -> bool {
        self.crashed
    }

    /// Attempt one render of the wrapped section.
    ///
    /// On success the section's output is copied into `buf` unchanged. On
    /// panic the boundary latches, reports once to `sink`, and leaves `buf`
    /// untouched; all later attempts render nothing without re-running the
    /// section.
    pub fn render(
        &mut self,
        buf: &mut Buffer,
        area: Rect,
        sink: &dyn DiagnosticSink,
        draw: impl FnOnce(&mut Buffer),
    ) {
        if self.crashed {
            return;
        }

        // Draw into a scratch buffer so a partial render never leaks into
        // the frame when the section faults midway.
        let mut scratch = Buffer::empty(area);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| draw(&mut scratch)));

        match outcome {
            Ok(()) => {
                for y in area.top()..area.bottom() {
                    for x in area.left()..area.right() {
                        if let (Some(src), Some(dst)) =
                            (scratch.cell((x, y)), buf.cell_mut((x, y)))
                        {
                            *dst = src.clone();
                        }
                    }
                }
            }
            Err(payload) => {
                self.crashed = true;
                let label = self.label.as_deref().unwrap_or(FALLBACK_LABEL);
                sink.report(label, &fault_message(payload.as_ref()), &format!("{area:?}"));
            }
        }
    }
}

/// Extract a printable message from a panic payload.
fn fault_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
