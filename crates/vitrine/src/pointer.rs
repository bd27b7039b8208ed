//! Pointer sampling for mouse-driven visual effects.
//!
//! The sampler keeps the latest normalized pointer position in a plain
//! mutable cell. Updates never wake the render loop: consumers read the
//! cell on demand inside their own draw calls, which deliberately
//! decouples pointer motion from the frame cadence. Last write wins.

use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, MouseEvent, MouseEventKind};
use crossterm::execute;
use vitrine_core::PointerSample;

/// Read-only handle to the sampler's cell. One intended reader per
/// activation; updates are a single pair write, so a read never observes
/// a half-updated position.
#[derive(Debug, Clone)]
pub struct PointerReader {
    sample: Rc<Cell<PointerSample>>,
}

impl PointerReader {
    /// The most recent sample, or the default `{0, 0}` if no pointer
    /// event has ever arrived.
    pub fn read(&self) -> PointerSample {
        self.sample.get()
    }
}

/// Owns the pointer subscription and the sample cell.
#[derive(Debug)]
pub struct PointerSampler {
    sample: Rc<Cell<PointerSample>>,
    active: bool,
}

impl PointerSampler {
    pub fn new() -> Self {
        Self {
            sample: Rc::new(Cell::new(PointerSample::default())),
            active: false,
        }
    }

    /// Hand out the reader for this activation.
    pub fn reader(&self) -> PointerReader {
        PointerReader {
            sample: Rc::clone(&self.sample),
        }
    }

    /// Whether the subscription is currently live.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Subscribe to pointer movement by enabling mouse capture.
    ///
    /// Callers gate this on a pointer-capable host (a TTY); without one
    /// the sampler is never activated and the sample stays at the
    /// default.
    pub fn activate(&mut self, out: &mut impl Write) -> io::Result<()> {
        if !self.active {
            execute!(out, EnableMouseCapture)?;
            self.active = true;
        }
        Ok(())
    }

    /// Fold one mouse event into the sample.
    ///
    /// Only movement updates the cell; clicks and scrolls are not
    /// position signals. Events after teardown are ignored.
    pub fn handle(&self, event: MouseEvent, width: u16, height: u16) {
        if !self.active {
            return;
        }
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.sample
                    .set(PointerSample::from_cell(event.column, event.row, width, height));
            }
            _ => {}
        }
    }

    /// Release the subscription. Effective exactly once; later calls are
    /// no-ops.
    pub fn deactivate(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.active {
            execute!(out, DisableMouseCapture)?;
            self.active = false;
        }
        Ok(())
    }
}

impl Default for PointerSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};

    fn moved(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn activated() -> PointerSampler {
        let mut sampler = PointerSampler::new();
        sampler.activate(&mut Vec::<u8>::new()).unwrap();
        sampler
    }

    #[test]
    fn test_sample_defaults_to_origin() {
        let sampler = PointerSampler::new();
        assert_eq!(sampler.reader().read(), PointerSample::default());
    }

    #[test]
    fn test_center_move_resolves_to_zero() {
        let sampler = activated();
        sampler.handle(moved(50, 25), 101, 51);
        assert_eq!(sampler.reader().read(), PointerSample { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_corner_moves_resolve_to_bounds() {
        let sampler = activated();
        let reader = sampler.reader();

        sampler.handle(moved(0, 0), 80, 24);
        assert_eq!(reader.read(), PointerSample { x: -1.0, y: -1.0 });

        sampler.handle(moved(79, 23), 80, 24);
        assert_eq!(reader.read(), PointerSample { x: 1.0, y: 1.0 });
    }

    #[test]
    fn test_last_write_wins() {
        let sampler = activated();
        sampler.handle(moved(0, 0), 80, 24);
        sampler.handle(moved(79, 23), 80, 24);
        assert_eq!(sampler.reader().read(), PointerSample { x: 1.0, y: 1.0 });
    }

    #[test]
    fn test_clicks_are_not_position_signals() {
        let sampler = activated();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 79,
            row: 23,
            modifiers: KeyModifiers::NONE,
        };
        sampler.handle(click, 80, 24);
        assert_eq!(sampler.reader().read(), PointerSample::default());
    }

    #[test]
    fn test_inactive_sampler_stays_at_default() {
        let sampler = PointerSampler::new();
        sampler.handle(moved(79, 23), 80, 24);
        assert_eq!(sampler.reader().read(), PointerSample::default());
    }

    #[test]
    fn test_no_updates_after_teardown() {
        let mut sampler = activated();
        sampler.handle(moved(0, 0), 80, 24);
        sampler.deactivate(&mut Vec::<u8>::new()).unwrap();

        sampler.handle(moved(79, 23), 80, 24);
        assert_eq!(sampler.reader().read(), PointerSample { x: -1.0, y: -1.0 });
    }

    #[test]
    fn test_teardown_is_effective_once() {
        let mut sampler = activated();

        let mut first: Vec<u8> = Vec::new();
        sampler.deactivate(&mut first).unwrap();
        assert!(!first.is_empty());
        assert!(!sampler.active());

        let mut second: Vec<u8> = Vec::new();
        sampler.deactivate(&mut second).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn test_activation_is_effective_once() {
        let mut sampler = PointerSampler::new();
        assert!(!sampler.active());

        let mut first: Vec<u8> = Vec::new();
        sampler.activate(&mut first).unwrap();
        assert!(!first.is_empty());
        assert!(sampler.active());

        let mut second: Vec<u8> = Vec::new();
        sampler.activate(&mut second).unwrap();
        assert!(second.is_empty());
    }
}
