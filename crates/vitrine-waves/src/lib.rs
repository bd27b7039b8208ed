//! Procedural wave band animation for the vitrine landing page.
//!
//! Renders a fixed set of vertical bars whose timing offsets are drawn
//! fresh from a random source on every render pass. Visual size and
//! opacity are a pure function of the `animating` flag.

mod band;

pub use band::{ELEMENT_COUNT, MAX_DELAY_SECS, WaveElement, build_elements, render};
