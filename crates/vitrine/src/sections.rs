//! Page sections.
//!
//! Each section is an opaque renderable unit with a label; the page
//! wraps every one in its own fault isolation boundary, so these draw
//! functions are free to assume nothing about their siblings.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Paragraph, Widget},
};
use rand::rngs::ThreadRng;
use vitrine_core::{Accent, PointerSample};

/// Per-frame inputs shared by every section.
pub struct SectionCtx<'a> {
    pub accent: Accent,
    pub animating: bool,
    pub elapsed_secs: f32,
    pub pointer: PointerSample,
    pub rng: &'a mut ThreadRng,
}

/// One renderable page section.
pub struct Section {
    pub label: &'static str,
    pub draw: fn(Rect, &mut Buffer, &mut SectionCtx),
}

/// The page, top to bottom.
pub fn page() -> Vec<Section> {
    vec![
        Section {
            label: "hero",
            draw: draw_hero,
        },
        Section {
            label: "features",
            draw: draw_features,
        },
        Section {
            label: "waves",
            draw: draw_waves,
        },
        Section {
            label: "footer",
            draw: draw_footer,
        },
    ]
}

fn draw_hero(area: Rect, buf: &mut Buffer, ctx: &mut SectionCtx) {
    let color = ctx.accent.color();
    let title = Line::from("v i t r i n e").bold().fg(color).centered();
    let tagline = Line::from("a landing page for your terminal")
        .dark_gray()
        .centered();

    // A small glint follows the pointer along the banner, read on demand
    // from the sampler cell.
    let glint_col = ((ctx.pointer.x + 1.0) / 2.0 * (area.width.saturating_sub(1)) as f32) as u16;
    let glint_row = area.top();

    Paragraph::new(vec![Line::default(), title, tagline]).render(area, buf);
    if let Some(cell) = buf.cell_mut((area.left() + glint_col, glint_row)) {
        cell.set_symbol("✦").set_style(Style::new().fg(color));
    }
}

fn draw_features(area: Rect, buf: &mut Buffer, ctx: &mut SectionCtx) {
    let color = ctx.accent.color();
    let lines = vec![
        Line::default(),
        Line::from("◆ sections that fail alone, never together").fg(color),
        Line::from("◆ pointer-aware effects with zero re-renders").fg(color),
        Line::from("◆ structured metadata, ready for indexing").fg(color),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn draw_waves(area: Rect, buf: &mut Buffer, ctx: &mut SectionCtx) {
    // Delays are redrawn every pass on purpose; the band shimmers rather
    // than repeating a fixed pattern.
    let elements = vitrine_waves::build_elements(ctx.rng, ctx.animating);
    vitrine_waves::render(
        area,
        buf,
        &elements,
        ctx.elapsed_secs,
        ctx.accent,
        ctx.pointer.x,
    );
}

fn draw_footer(area: Rect, buf: &mut Buffer, ctx: &mut SectionCtx) {
    let color = ctx.accent.color();
    let help = Line::from(vec![
        "q".bold().fg(color),
        " quit  ".dark_gray(),
        "a".bold().fg(color),
        " toggle animation  ".dark_gray(),
        "c".bold().fg(color),
        " cycle accent".dark_gray(),
    ])
    .centered();
    Paragraph::new(help).render(area, buf);
}
