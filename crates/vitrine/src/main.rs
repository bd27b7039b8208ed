use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::tty::IsTty;
use rand::rngs::ThreadRng;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use serde_json::json;
use vitrine_config::Config;
use vitrine_metadata::MetadataBlock;

mod boundary;
mod pointer;
mod sections;

use boundary::{SectionBoundary, TracingSink};
use pointer::{PointerReader, PointerSampler};
use sections::{Section, SectionCtx};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = vitrine_config::load();

    // Machine-consumption mode: emit the structured data blocks and exit.
    if std::env::args().any(|arg| arg == "--metadata") {
        for block in metadata_blocks(&config)? {
            println!("{}", block.body);
        }
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// Build the page's structured data records, in document order.
fn metadata_blocks(config: &Config) -> Result<Vec<MetadataBlock>, serde_json::Error> {
    let site = &config.site;

    // The site identity serializes as-is; only the schema.org framing is
    // added on top.
    let mut website = serde_json::to_value(site)?;
    website["@context"] = json!("https://schema.org");
    website["@type"] = json!("WebSite");

    let application = json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": site.name,
        "applicationCategory": "DeveloperApplication",
        "url": site.url,
    });

    vitrine_metadata::inject_all(&[website, application])
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    /// User configuration.
    config: Config,
    /// Launch instant, drives animation time.
    started: Instant,
    /// Pointer subscription and sample cell.
    sampler: PointerSampler,
    /// The one reader for this activation.
    pointer: PointerReader,
    /// Diagnostic sink for crashed sections.
    sink: TracingSink,
    /// Page sections, each behind its own fault boundary.
    sections: Vec<(Section, SectionBoundary)>,
    /// Last known viewport size, for pointer normalization.
    viewport: (u16, u16),
    /// Random source for per-render animation offsets.
    rng: ThreadRng,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let sampler = PointerSampler::new();
        let pointer = sampler.reader();
        let sections = sections::page()
            .into_iter()
            .map(|section| {
                let label = section.label;
                (section, SectionBoundary::new(Some(label)))
            })
            .collect();

        Self {
            running: false,
            config,
            started: Instant::now(),
            sampler,
            pointer,
            sink: TracingSink,
            sections,
            viewport: (0, 0),
            rng: rand::rng(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        if self.config.mouse && io::stdout().is_tty() {
            self.sampler.activate(&mut io::stdout())?;
        }

        let result = self.event_loop(&mut terminal);
        self.finish(result, &mut io::stdout())
    }

    /// Drive draw/event turns until quit or error.
    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Release the pointer subscription, then surface the loop's result.
    ///
    /// Runs on the error path too: a failed draw must not leave the
    /// terminal emitting mouse escape sequences.
    fn finish(
        &mut self,
        result: color_eyre::Result<()>,
        out: &mut impl Write,
    ) -> color_eyre::Result<()> {
        let teardown = self.sampler.deactivate(out);
        result.and_then(|()| teardown.map_err(Into::into))
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.viewport = (area.width, area.height);

        let chunks = Layout::vertical([
            Constraint::Length(4), // Hero banner
            Constraint::Fill(1),   // Feature list
            Constraint::Length(8), // Wave band
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let mut ctx = SectionCtx {
            accent: self.config.accent,
            animating: self.config.animating,
            elapsed_secs: self.started.elapsed().as_secs_f32(),
            pointer: self.pointer.read(),
            rng: &mut self.rng,
        };

        let buf = frame.buffer_mut();
        for ((section, isolation), chunk) in self.sections.iter_mut().zip(chunks.iter()) {
            isolation.render(buf, *chunk, &self.sink, |scratch| {
                (section.draw)(*chunk, scratch, &mut ctx)
            });
        }
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so the wave band keeps moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => {
                    let (width, height) = self.viewport;
                    self.sampler.handle(mouse, width, height);
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('a')) => self.config.animating = !self.config.animating,
            (_, KeyCode::Char('c')) => self.config.accent = self.config.accent.next(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
