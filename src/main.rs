//! sankey-flow CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{Level, warn};

use sankey_flow::config::{RenderConfig, palette_preset};
use sankey_flow::{Renderer, SankeyRenderer, StageLayout, SvgRenderer};

/// Flow text to Sankey diagram SVG.
#[derive(Parser, Debug)]
#[command(
    name = "sankey-flow",
    version = env!("SANKEY_FLOW_VERSION"),
    about = "Flow text (`Source [value] Target` lines) to Sankey diagram SVG"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// TOML settings file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Diagram width, margins included
    #[arg(long)]
    width: Option<f64>,

    /// Diagram height, margins included
    #[arg(long)]
    height: Option<f64>,

    /// Flow curvature (0..1)
    #[arg(long)]
    curvature: Option<f64>,

    /// Palette preset (default, tableau, slate)
    #[arg(long)]
    palette: Option<String>,

    /// Title drawn above the diagram
    #[arg(long)]
    title: Option<String>,

    /// Report skipped input lines on stderr
    #[arg(long)]
    diagnostics: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let out = match SankeyRenderer::new(StageLayout).render(&text, &config) {
        Ok(out) => out,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if cli.diagnostics {
        for d in &out.diagnostics {
            eprintln!("skipped {}", d);
        }
    }
    if out.diagram.is_empty() {
        warn!("no flow data; nothing to draw");
    }

    let rendered = SvgRenderer.render(&out.diagram);

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path.display(), e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}

/// Settings file first, then command-line overrides.
fn build_config(cli: &Cli) -> Result<RenderConfig, sankey_flow::ConfigError> {
    let mut config = match cli.config {
        Some(ref path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if let Some(w) = cli.width {
        config.width = w;
    }
    if let Some(h) = cli.height {
        config.height = h;
    }
    if let Some(c) = cli.curvature {
        config.flow_curvature = c;
    }
    if let Some(ref name) = cli.palette {
        config.palette = palette_preset(name)?;
    }
    if let Some(ref title) = cli.title {
        config.title = Some(title.clone());
    }
    config.validate()?;
    Ok(config)
}
