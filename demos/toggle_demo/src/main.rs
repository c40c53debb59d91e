use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use reprise_platform::{HeadlessConfig, OutputFormat, run_headless_app};
use toggle_demo::App;

/// Drives the toggle demo headlessly. Commands (`click <label>`,
/// `click #<id>`, `tap <x> <y>`, `frame`, `stats`, `quit`) are read one per
/// line; every new frame is printed.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Print frames as JSON lines.
    #[arg(long)]
    json: bool,
    /// Stop at the first bad command or unknown target.
    #[arg(long)]
    strict: bool,
    #[arg(long, default_value_t = 320)]
    width: u32,
    #[arg(long, default_value_t = 240)]
    height: u32,
}

impl Args {
    fn config(&self) -> HeadlessConfig {
        HeadlessConfig {
            size: (self.width, self.height),
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            strict: self.strict,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.config();
    let out = io::stdout().lock();

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            run_headless_app(App, config, BufReader::new(file), out)
        }
        None => run_headless_app(App, config, io::stdin().lock(), out),
    }
}
