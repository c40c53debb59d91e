//! Platform runners (headless)
//!
//! The runner owns the `Scheduler` and the last `Frame`. External triggers
//! arrive one at a time; each is fully applied (handler run, recomposition
//! done, frame rendered) before the next one is read.

pub mod backend;
pub mod command;

use std::io::{BufRead, Write};

use anyhow::Context;
use reprise_core::*;
use reprise_ui::layout_and_paint;

pub use backend::{JsonBackend, TextBackend};
pub use command::{Command, CommandError, Target};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug)]
pub struct HeadlessConfig {
    pub size: (u32, u32),
    pub format: OutputFormat,
    /// Abort on the first bad command or unknown target instead of noting it
    /// and reading on.
    pub strict: bool,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            size: (320, 240),
            format: OutputFormat::Text,
            strict: false,
        }
    }
}

pub struct HeadlessApp {
    root: Box<dyn FnMut(&mut Scheduler) -> View>,
    sched: Scheduler,
    frame: Option<Frame>,
    clicks: u64,
}

impl HeadlessApp {
    pub fn new(root: impl FnMut(&mut Scheduler) -> View + 'static) -> Self {
        Self {
            root: Box::new(root),
            sched: Scheduler::new(),
            frame: None,
            clicks: 0,
        }
    }

    pub fn with_size(mut self, size: (u32, u32)) -> Self {
        self.sched.size = size;
        self
    }

    /// The current frame, composing first if state changed since the last one.
    pub fn frame(&mut self) -> &Frame {
        if self.sched.is_dirty() {
            self.frame = None;
        }
        let (sched, root) = (&mut self.sched, &mut self.root);
        self.frame
            .get_or_insert_with(|| sched.compose(root, layout_and_paint))
    }

    /// Recomposes if needed; returns whether it did.
    pub fn pump(&mut self) -> bool {
        let stale = self.frame.is_none() || self.sched.is_dirty();
        if stale {
            self.frame();
        }
        stale
    }

    /// Clicks `target` in the current frame. Returns whether the click caused
    /// a recomposition.
    pub fn click(&mut self, target: &Target) -> Result<bool, RuntimeError> {
        let frame = self.frame();
        let region = match target {
            Target::Id(id) => frame.hit_region(*id),
            Target::Label(label) => frame.hit_region_by_label(label),
            Target::Point(p) => frame.hit_test(*p),
        }
        .ok_or_else(|| RuntimeError::UnknownTarget(target.to_string()))?;
        let on_click = region
            .on_click
            .clone()
            .ok_or_else(|| RuntimeError::NoHandler(region.label.clone()))?;
        log::debug!("click #{} `{}`", region.id, region.label);

        on_click.call();
        self.clicks += 1;
        Ok(self.pump())
    }

    pub fn click_label(&mut self, label: &str) -> Result<bool, RuntimeError> {
        self.click(&Target::Label(label.to_string()))
    }

    pub fn compositions(&self) -> u64 {
        self.sched.compositions()
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    /// Human-readable counters for the `stats` command.
    pub fn stats(&self) -> Vec<String> {
        let mut lines = vec![
            format!("compositions: {}", self.compositions()),
            format!("clicks: {}", self.clicks),
        ];
        lines.extend(
            render_counts()
                .into_iter()
                .map(|(key, n)| format!("renders {key}: {n}")),
        );
        lines
    }
}

/// Runs `app` against a command stream, rendering every new frame through
/// `backend`.
pub fn run_headless(
    app: &mut HeadlessApp,
    config: &HeadlessConfig,
    input: impl BufRead,
    backend: &mut dyn RenderBackend,
) -> anyhow::Result<()> {
    backend.configure_surface(config.size.0, config.size.1);
    backend.frame(app.frame())?;

    for (n, line) in input.lines().enumerate() {
        let line = line.context("reading commands")?;
        let cmd = match Command::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) if config.strict => {
                return Err(e).with_context(|| format!("line {}", n + 1));
            }
            Err(e) => {
                log::warn!("line {}: {e}", n + 1);
                backend.message(&format!("line {}: {e}", n + 1))?;
                continue;
            }
        };

        match cmd {
            Command::Click(target) => match app.click(&target) {
                Ok(true) => backend.frame(app.frame())?,
                Ok(false) => backend.message("no change")?,
                Err(e @ (RuntimeError::UnknownTarget(_) | RuntimeError::NoHandler(_)))
                    if !config.strict =>
                {
                    log::warn!("{e}");
                    backend.message(&e.to_string())?;
                }
                Err(e) => return Err(e.into()),
            },
            Command::Frame => backend.frame(app.frame())?,
            Command::Stats => {
                for line in app.stats() {
                    backend.message(&line)?;
                }
            }
            Command::Quit => break,
        }
    }
    Ok(())
}

/// Builds the backend `config.format` names over `out` and runs `root`.
pub fn run_headless_app(
    root: impl FnMut(&mut Scheduler) -> View + 'static,
    config: HeadlessConfig,
    input: impl BufRead,
    out: impl Write,
) -> anyhow::Result<()> {
    let mut app = HeadlessApp::new(root).with_size(config.size);
    log::info!(
        "headless run: {}x{}, {:?} output",
        config.size.0,
        config.size.1,
        config.format
    );
    match config.format {
        OutputFormat::Text => run_headless(&mut app, &config, input, &mut TextBackend::new(out)),
        OutputFormat::Json => run_headless(&mut app, &config, input, &mut JsonBackend::new(out)),
    }
}
