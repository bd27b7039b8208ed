//! Wave band rendering.

use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vitrine_core::Accent;

/// Number of wave elements in the band.
pub const ELEMENT_COUNT: usize = 12;

/// Upper bound (exclusive) for the per-element timing offset in seconds.
pub const MAX_DELAY_SECS: f32 = 1.5;

/// Period of one full wave oscillation in seconds.
const WAVE_PERIOD_SECS: f32 = 1.2;

/// Bar height fraction when the band is not animating.
const REST_PEAK: f32 = 0.4;

/// Bar opacity when the band is not animating.
const REST_OPACITY: f32 = 0.45;

/// A single bar of the wave band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveElement {
    /// Timing offset in seconds, drawn fresh on every render pass.
    pub delay_secs: f32,
    /// Whether the band is in motion.
    pub animating: bool,
}

impl WaveElement {
    /// Maximum bar height as a fraction of the band area.
    pub fn peak_frac(self) -> f32 {
        if self.animating { 1.0 } else { REST_PEAK }
    }

    /// Bar opacity in `[0, 1]`.
    pub fn opacity(self) -> f32 {
        if self.animating { 1.0 } else { REST_OPACITY }
    }

    /// Current bar height as a fraction of the band area.
    ///
    /// Animating bars oscillate continuously, phase-shifted by their
    /// timing offset. Static bars sit at the rest height.
    pub fn height_frac(self, elapsed_secs: f32) -> f32 {
        if !self.animating {
            return REST_PEAK;
        }
        let phase = (elapsed_secs - self.delay_secs) / WAVE_PERIOD_SECS;
        let wave = (phase * std::f32::consts::TAU).sin();
        (0.55 + 0.45 * wave) * self.peak_frac()
    }
}

/// Build the band's elements, drawing each timing offset from `rng`.
///
/// Offsets are not persisted: callers rebuild the band on every render
/// pass, re-randomizing the per-element delays each time.
pub fn build_elements<R: Rng + ?Sized>(rng: &mut R, animating: bool) -> Vec<WaveElement> {
    (0..ELEMENT_COUNT)
        .map(|_| WaveElement {
            delay_secs: rng.random_range(0.0..MAX_DELAY_SECS),
            animating,
        })
        .collect()
}

/// Render the wave band into `area`.
///
/// `tilt` is the normalized pointer x position; it leans the wave phase
/// toward the pointer without changing bar sizing.
pub fn render(
    area: Rect,
    buf: &mut Buffer,
    elements: &[WaveElement],
    elapsed_secs: f32,
    accent: Accent,
    tilt: f32,
) {
    if area.width == 0 || area.height == 0 || elements.is_empty() {
        return;
    }

    let color = accent.color();
    let height = area.height as f32;
    let lines: Vec<Line> = (0..area.height)
        .map(|y| {
            let spans: Vec<Span> = (0..area.width)
                .map(|x| {
                    let idx = (x as usize * elements.len()) / area.width as usize;
                    let element = elements[idx.min(elements.len() - 1)];
                    // Pointer tilt leans the oscillation phase sideways
                    let local_elapsed = elapsed_secs + tilt * 0.3 * (idx as f32);
                    let bar_rows = (element.height_frac(local_elapsed) * height).round() as u16;
                    let rows_from_bottom = area.height - 1 - y;

                    if rows_from_bottom < bar_rows {
                        let ch = if rows_from_bottom + 1 == bar_rows { "▄" } else { "█" };
                        Span::styled(ch, Style::new().fg(dim(color, element.opacity())))
                    } else {
                        Span::raw(" ")
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    Paragraph::new(lines).render(area, buf);
}

/// Scale an RGB color toward black by `opacity`.
fn dim(color: Color, opacity: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * opacity) as u8,
            (g as f32 * opacity) as u8,
            (b as f32 * opacity) as u8,
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_band_always_has_twelve_elements() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(build_elements(&mut rng, true).len(), ELEMENT_COUNT);
        assert_eq!(build_elements(&mut rng, false).len(), ELEMENT_COUNT);
    }

    #[test]
    fn test_delays_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            for element in build_elements(&mut rng, true) {
                assert!(element.delay_secs >= 0.0);
                assert!(element.delay_secs < MAX_DELAY_SECS);
            }
        }
    }

    #[test]
    fn test_static_band_reports_reduced_parameters() {
        let mut rng = StdRng::seed_from_u64(1);
        for element in build_elements(&mut rng, false) {
            assert_eq!(element.peak_frac(), REST_PEAK);
            assert_eq!(element.opacity(), REST_OPACITY);
            // No motion: height is constant over time
            assert_eq!(element.height_frac(0.0), element.height_frac(3.7));
        }
    }

    #[test]
    fn test_animating_band_reports_full_parameters() {
        let mut rng = StdRng::seed_from_u64(1);
        for element in build_elements(&mut rng, true) {
            assert_eq!(element.peak_frac(), 1.0);
            assert_eq!(element.opacity(), 1.0);
        }
    }

    #[test]
    fn test_animating_height_stays_in_bounds() {
        let element = WaveElement {
            delay_secs: 0.9,
            animating: true,
        };
        for step in 0..100 {
            let frac = element.height_frac(step as f32 * 0.05);
            assert!((0.0..=1.0).contains(&frac));
        }
    }

    #[test]
    fn test_render_fills_bottom_row_when_animating() {
        let mut rng = StdRng::seed_from_u64(3);
        let elements = build_elements(&mut rng, true);
        let area = Rect::new(0, 0, 24, 6);
        let mut buf = Buffer::empty(area);
        render(area, &mut buf, &elements, 0.5, Accent::Cyan, 0.0);

        // Every bar oscillates above 10% height, so the bottom row is solid
        let bottom = area.height - 1;
        let filled = (0..area.width)
            .filter(|&x| buf[(x, bottom)].symbol() != " ")
            .count();
        assert_eq!(filled, area.width as usize);
    }
}
