//! Point Menu CLI
//!
//! Usage:
//!   point-menu --tap X,Y --panel WxH --viewport WxH [OPTIONS]
//!
//! Options:
//!   -o, --offset <PX>      Clearance between tap point and panel
//!   -c, --config <FILE>    Menu configuration file (TOML format)
//!   -f, --format <FORMAT>  Output format: text, json, css or svg
//!   -d, --debug            Log candidate scores to stderr
//!   -h, --help             Print help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use point_menu::layout::rank_candidates;
use point_menu::renderer::{frame_style, panel_transform, stem_transform};
use point_menu::{
    parse_point, parse_size, place, render_svg, Direction, MenuConfig, ParseError, Placement,
    Point, SvgConfig,
};

#[derive(Parser)]
#[command(name = "point-menu")]
#[command(about = "Place a floating menu next to a tap point")]
struct Cli {
    /// Tap point as X,Y in viewport pixels
    #[arg(short, long)]
    tap: String,

    /// Rendered panel size as WIDTHxHEIGHT
    #[arg(short, long)]
    panel: String,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(short, long)]
    viewport: String,

    /// Clearance between tap point and panel (overrides config)
    #[arg(short, long)]
    offset: Option<f64>,

    /// Menu configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log candidate scores to stderr
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Css,
    Svg,
}

#[derive(Serialize)]
struct JsonOutput {
    position: Point,
    direction: Direction,
    stem: JsonStem,
}

#[derive(Serialize)]
struct JsonStem {
    origin: Point,
    rotation_degrees: f64,
    axis_offset: f64,
    length: f64,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => match MenuConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => MenuConfig::default(),
    };
    if let Some(offset) = cli.offset {
        config.layout.offset = offset;
    }

    let tap = argument("--tap", &cli.tap, parse_point);
    let panel = argument("--panel", &cli.panel, parse_size);
    let viewport = argument("--viewport", &cli.viewport, parse_size);

    if cli.debug {
        if let Ok(ranked) = rank_candidates(tap, panel, viewport, config.layout.offset) {
            for c in &ranked {
                tracing::debug!(
                    direction = %c.direction,
                    x = c.rect.x,
                    y = c.rect.y,
                    visible_area = c.visible_area,
                    "candidate"
                );
            }
        }
    }

    let placement = match place(tap, panel, viewport, &config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let output = match cli.format {
        Format::Text => text_output(&placement),
        Format::Json => match json_output(&placement) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Format::Css => css_output(&placement, &config),
        Format::Svg => render_svg(&placement, viewport, &SvgConfig::default()),
    };
    println!("{}", output);
}

/// Parse one geometry argument, exiting with a diagnostic on failure
fn argument<T>(name: &str, source: &str, parse: fn(&str) -> Result<T, ParseError>) -> T {
    match parse(source) {
        Ok(value) => value,
        Err(e) => {
            eprint!("{}", e.format(source, name));
            std::process::exit(1);
        }
    }
}

fn text_output(placement: &Placement) -> String {
    let layout = &placement.layout;
    let stem = &placement.stem;
    let mut out = String::new();
    out.push_str(&format!("direction: {}\n", layout.direction));
    out.push_str(&format!("position:  {}, {}\n", layout.position.x, layout.position.y));
    out.push_str(&format!(
        "stem:      origin {}, {} rotate {}deg offset {} length {}",
        stem.origin.x, stem.origin.y, stem.rotation_degrees, stem.axis_offset, stem.length
    ));
    out
}

fn json_output(placement: &Placement) -> Result<String, serde_json::Error> {
    let output = JsonOutput {
        position: placement.layout.position,
        direction: placement.layout.direction,
        stem: JsonStem {
            origin: placement.stem.origin,
            rotation_degrees: placement.stem.rotation_degrees,
            axis_offset: placement.stem.axis_offset,
            length: placement.stem.length,
        },
    };
    serde_json::to_string_pretty(&output)
}

/// Panel and stem rules plus an entrance `@keyframes` block
fn css_output(placement: &Placement, config: &MenuConfig) -> String {
    let layout = &placement.layout;
    let mut css = String::new();
    css.push_str(&format!(".point-menu {{ transform: {}; }}\n", panel_transform(layout)));
    css.push_str(&format!(
        ".point-menu-stem {{ transform: {}; }}\n",
        stem_transform(&placement.stem)
    ));

    let name = format!("point-menu-enter-{}", layout.direction.as_str().to_lowercase());
    css.push_str(&format!("@keyframes {} {{\n", name));
    let frames = config.animation.keyframes(layout.direction, 4);
    let last = frames.len() - 1;
    for (i, frame) in frames.iter().enumerate() {
        css.push_str(&format!("  {}% {{ {} }}\n", i * 100 / last, frame_style(layout, frame)));
    }
    css.push('}');
    css
}
