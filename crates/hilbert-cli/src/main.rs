//! Command‑line entry point for the `hilbert` tool.
//!
//! Provides subcommands to export a curve's points, render it to PNG, and
//! launch the GUI.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
    process,
};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hilbert::{
    CurveParams, MAX_DEPTH,
    params::{DEFAULT_DEPTH, DEFAULT_LENGTH},
};
use hilbert_img::{Palette, StrokeOptions, parse_color, save_png};
use image::Rgba;
use log::LevelFilter;

/// CLI command implementations.
mod cmd;

#[derive(Parser)]
#[command(name = "hilbert")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(
        short,
        global = true,
        action = clap::ArgAction::Count,
        help = "Sets the level of verbosity"
    )]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Curve geometry shared by the generating subcommands.
#[derive(Args, Clone, Copy, Debug)]
struct CurveArgs {
    /// Recursion depth.
    #[arg(
        short = 'd',
        long = "depth",
        default_value_t = DEFAULT_DEPTH,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_DEPTH)),
        help = "Recursion depth (the curve has 4^DEPTH points)"
    )]
    depth: u32,

    /// Canvas width, and height unless `--height` is given.
    #[arg(
        short = 's',
        long = "size",
        value_name = "PIXELS",
        default_value_t = DEFAULT_LENGTH,
        help = "Maximum length of the curve on both axes"
    )]
    size: u32,

    /// Optional canvas height for non-square curves.
    #[arg(
        long = "height",
        value_name = "PIXELS",
        help = "Canvas height, when it differs from --size"
    )]
    height: Option<u32>,
}

impl CurveArgs {
    /// Convert to library parameters.
    fn params(self) -> CurveParams {
        CurveParams {
            depth: self.depth,
            width: self.size,
            height: self.height.unwrap_or(self.size),
        }
    }
}

#[derive(Subcommand)]
/// Subcommands supported by the `hilbert` tool.
enum Commands {
    #[command(about = "Write the curve's points as text, one \"X, Y\" per line")]
    /// Export the generated point list.
    Points {
        /// Curve geometry.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(help = "Optional output file path (.txt appended when no extension); stdout when omitted")]
        /// Optional output file path.
        output: Option<PathBuf>,
    },

    #[command(about = "Render the curve to a PNG image")]
    /// Render the curve canvas.
    Image {
        /// Curve geometry.
        #[command(flatten)]
        curve: CurveArgs,

        #[arg(
            short = 'w',
            long = "line-width",
            value_name = "PIXELS",
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Line width in pixels for the curve stroke"
        )]
        /// Stroke width for the rendered curve.
        line_width: u32,

        #[arg(
            long = "fg",
            visible_alias = "foreground",
            value_parser = parse_color,
            default_value = "black",
            value_name = "COLOR",
            help = "Line color (name or hex; RGB/RRGGBB with optional alpha, '#' optional)"
        )]
        /// Stroke color for the curve.
        foreground: Rgba<u8>,

        #[arg(
            long = "bg",
            visible_alias = "background",
            value_parser = parse_color,
            default_value = "wheat",
            value_name = "COLOR",
            help = "Background color (name or hex; RGB/RRGGBB with optional alpha, '#' optional)"
        )]
        /// Background color for the canvas.
        background: Rgba<u8>,

        #[arg(help = "Optional output file path (.png appended when no extension); opens a viewer when omitted")]
        /// Optional output file path (launches a viewer when not provided).
        output: Option<PathBuf>,
    },

    #[command(about = "Open GUI window")]
    /// Launch the interactive GUI.
    Gui,
}

/// Map the `-v` count to a log level.
fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .parse_default_env()
        .init();
}

/// Report the written file, or exit with an error.
fn report_ok<E: Display>(result: Result<Option<PathBuf>, E>) {
    match result {
        Ok(Some(path)) => eprintln!("Saved {}", path.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Handle the `image` subcommand: save the PNG or show it in a viewer.
fn handle_image(
    params: CurveParams,
    stroke: StrokeOptions,
    output: Option<&Path>,
) -> Result<Option<PathBuf>> {
    let image = cmd::render(params, stroke)?;
    if let Some(path) = output {
        return Ok(Some(save_png(path, &image)?));
    }
    println!("No output file provided; opening viewer (close the window to finish)...");
    hilbert_img::view_image(&hilbert_gui::window_title(params.depth), image)?;
    Ok(None)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        Commands::Points { curve, output } => {
            report_ok(cmd::points(curve.params(), output.as_deref()));
        }
        Commands::Image {
            curve,
            line_width,
            foreground,
            background,
            output,
        } => report_ok(handle_image(
            curve.params(),
            StrokeOptions {
                line_width,
                palette: Palette {
                    foreground,
                    background,
                },
            },
            output.as_deref(),
        )),
        Commands::Gui => report_ok(hilbert_gui::gui().map(|()| None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_defaults() {
        let cli = Cli::try_parse_from(["hilbert", "points"]).unwrap();
        let Commands::Points { curve, output } = cli.command else {
            panic!("expected points");
        };
        assert_eq!(curve.params(), CurveParams::default());
        assert!(output.is_none());
    }

    #[test]
    fn non_square_and_colors() {
        let cli = Cli::try_parse_from([
            "hilbert", "-vv", "image", "-d", "6", "-s", "640", "--height", "480", "--fg",
            "#ff0000", "out.png",
        ])
        .unwrap();
        assert_eq!(cli.v, 2);
        let Commands::Image {
            curve,
            foreground,
            background,
            output,
            ..
        } = cli.command
        else {
            panic!("expected image");
        };
        assert_eq!(
            curve.params(),
            CurveParams {
                depth: 6,
                width: 640,
                height: 480
            }
        );
        assert_eq!(foreground, Rgba([0xff, 0, 0, 0xff]));
        assert_eq!(background, Rgba([0xf5, 0xde, 0xb3, 0xff]));
        assert_eq!(output, Some(PathBuf::from("out.png")));
    }

    #[test]
    fn rejects_invalid_arguments() {
        assert!(Cli::try_parse_from(["hilbert", "points", "-d", "13"]).is_err());
        assert!(Cli::try_parse_from(["hilbert", "points", "-d", "-1"]).is_err());
        assert!(Cli::try_parse_from(["hilbert", "image", "-w", "0"]).is_err());
        assert!(Cli::try_parse_from(["hilbert", "image", "--bg", "nope"]).is_err());
    }

    #[test]
    fn image_output_is_saved_as_png() -> Result<()> {
        let td = tempfile::tempdir()?;
        let stroke = StrokeOptions {
            line_width: 1,
            palette: Palette {
                foreground: Rgba([0, 0, 0, 0xff]),
                background: Rgba([0xff, 0xff, 0xff, 0xff]),
            },
        };
        let saved = handle_image(
            CurveParams::square(2, 16),
            stroke,
            Some(&td.path().join("curve")),
        )?;
        assert_eq!(saved, Some(td.path().join("curve.png")));
        assert_eq!(image::open(td.path().join("curve.png"))?.width(), 16);
        Ok(())
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }
}
