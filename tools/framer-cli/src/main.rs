//! Framer CLI: composite photos into a frame from the command line.
//!
//! Usage:
//!   framer compose <FRAME> <CONTENT>... --region x,y,w,h -o out.png
//!   framer export <FRAME> <CONTENT>... --region x,y,w,h [-o DIR]
//!   framer layout --image WxH --region x,y,w,h [--mode M]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use framer_common::config::{FramerConfig, OutputFormat};
use framer_model::fit_mode::FitMode;
use framer_model::geometry::{PanOffset, Rect, Size};

mod commands;

use commands::{parse_pan, parse_rect, parse_size};

#[derive(Parser)]
#[command(
    name = "framer",
    about = "Place photos inside a region of a frame image and export them",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: $XDG_CONFIG_HOME/framer/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Inputs shared by `compose` and `export`.
#[derive(Args, Debug, Clone)]
pub struct SceneArgs {
    /// Frame image
    pub frame: PathBuf,

    /// Content images, in order
    #[arg(required = true)]
    pub content: Vec<PathBuf>,

    /// Target region as x,y,w,h (frame pixels, or display units with --display)
    #[arg(long, value_parser = parse_rect)]
    pub region: Option<Rect>,

    /// Size the frame is shown at, as WxH; region corners are scaled from it
    #[arg(long, value_parser = parse_size)]
    pub display: Option<Size>,

    /// JSON file with pointer events to replay instead of --region
    #[arg(long, conflicts_with = "region")]
    pub gestures: Option<PathBuf>,

    /// Fit mode: contain, fill-center, pannable-cover, tile
    #[arg(long)]
    pub mode: Option<FitMode>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one content item into the frame
    Compose {
        #[command(flatten)]
        scene: SceneArgs,

        /// Pan offset as dx,dy (pannable-cover only)
        #[arg(long, value_parser = parse_pan, allow_hyphen_values = true)]
        pan: Option<PanOffset>,

        /// 0-based content index to render
        #[arg(long, default_value = "0")]
        index: usize,

        /// Keep the region outline in the output
        #[arg(long)]
        outline: bool,

        /// Output file; format follows the extension
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render every content item and save each one
    Export {
        #[command(flatten)]
        scene: SceneArgs,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Delay between rendering and capturing each item, in milliseconds
        #[arg(long)]
        settle_ms: Option<u64>,

        /// Output format: png or jpeg
        #[arg(long)]
        format: Option<OutputFormat>,

        /// File name prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Print the export summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the draw plan for an image size and region
    Layout {
        /// Content image size as WxH
        #[arg(long, value_parser = parse_size)]
        image: Size,

        /// Target region as x,y,w,h
        #[arg(long, value_parser = parse_rect)]
        region: Rect,

        /// Fit mode
        #[arg(long, default_value = "contain")]
        mode: FitMode,

        /// Pan offset as dx,dy
        #[arg(long, value_parser = parse_pan, allow_hyphen_values = true)]
        pan: Option<PanOffset>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FramerConfig::load_from(path),
        None => FramerConfig::load(),
    };

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    framer_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Compose {
            scene,
            pan,
            index,
            outline,
            output,
        } => commands::compose::run(&config, scene, pan, index, outline, output).await,
        Commands::Export {
            scene,
            output,
            settle_ms,
            format,
            prefix,
            json,
        } => commands::export::run(&config, scene, output, settle_ms, format, prefix, json).await,
        Commands::Layout {
            image,
            region,
            mode,
            pan,
        } => commands::layout::run(image, region, mode, pan.unwrap_or_default()),
    }
}
