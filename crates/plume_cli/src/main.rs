//! Plume CLI
//!
//! Scale path data and build icons from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use plume_core::{scale_with, Color, CommandKind, ParseMode, ScaleFactor};
use plume_icons::{icons, to_svg, IconBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::PlumeConfig;

#[derive(Parser)]
#[command(name = "plume")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scale SVG path data and build icons", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./plume.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scale every number in a path by a factor
    Scale {
        /// Path data, e.g. "M4 6v4h2z"
        path: String,

        /// Scale factor
        #[arg(short, long, conflicts_with_all = ["from", "to"])]
        factor: Option<f64>,

        /// Reference size the path was authored at
        #[arg(long, requires = "to")]
        from: Option<f64>,

        /// Requested size
        #[arg(long, requires = "from")]
        to: Option<f64>,

        /// Drop unknown commands and stray characters instead of failing
        #[arg(long)]
        lenient: bool,
    },

    /// Build a built-in icon at a given size
    Icon {
        /// Icon name (see `plume list`)
        name: String,

        /// Edge length
        #[arg(short, long)]
        size: Option<f64>,

        /// Width override
        #[arg(long)]
        width: Option<f64>,

        /// Height override
        #[arg(long)]
        height: Option<f64>,

        /// Fill color (#RGB, #RRGGBB, #RRGGBBAA or a name)
        #[arg(long)]
        fill: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Path)]
        format: OutputFormat,
    },

    /// List built-in icons
    List,

    /// Show supported path commands
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Scaled path data only
    Path,
    /// Standalone SVG document
    Svg,
    /// Drawable description as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Scale {
            path,
            factor,
            from,
            to,
            lenient,
        } => cmd_scale(&path, factor, from, to, lenient),

        Commands::Icon {
            name,
            size,
            width,
            height,
            fill,
            format,
        } => {
            let config = PlumeConfig::load(cli.config.as_deref(), Path::new("."))?;
            let overrides = IconOverrides {
                size,
                width,
                height,
                fill: fill.as_deref(),
            };
            cmd_icon(&config, &name, &overrides, format)
        }

        Commands::List => cmd_list(),

        Commands::Info => cmd_info(),
    }
}

fn resolve_factor(factor: Option<f64>, from: Option<f64>, to: Option<f64>) -> Result<ScaleFactor> {
    match (factor, from, to) {
        (Some(factor), _, _) => Ok(ScaleFactor::new(factor)?),
        (None, Some(from), Some(to)) => Ok(ScaleFactor::ratio(to, from)?),
        _ => anyhow::bail!("Either --factor or both --from and --to are required"),
    }
}

fn cmd_scale(
    path: &str,
    factor: Option<f64>,
    from: Option<f64>,
    to: Option<f64>,
    lenient: bool,
) -> Result<()> {
    let factor = resolve_factor(factor, from, to)?;
    let mode = if lenient {
        ParseMode::Lenient
    } else {
        ParseMode::Strict
    };

    debug!("Scaling by {} ({:?})", factor.get(), mode);

    let scaled = scale_with(path, factor.get(), mode)?;
    println!("{}", scaled);

    Ok(())
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Default)]
struct IconOverrides<'a> {
    size: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    fill: Option<&'a str>,
}

fn render_icon(
    config: &PlumeConfig,
    name: &str,
    overrides: &IconOverrides<'_>,
    format: OutputFormat,
) -> Result<String> {
    let icon = plume_icons::lookup(name)?;

    let mut options = config.icon.clone();
    if let Some(size) = overrides.size {
        options.size = size;
    }
    if let Some(width) = overrides.width {
        options.width = Some(width);
    }
    if let Some(height) = overrides.height {
        options.height = Some(height);
    }
    if let Some(fill) = overrides.fill {
        options.fill = Color::parse(fill)?;
    }

    let drawable = IconBuilder::new(icon).with_options(options).build()?;

    Ok(match format {
        OutputFormat::Path => drawable.path.to_string(),
        OutputFormat::Svg => to_svg(&drawable),
        OutputFormat::Json => serde_json::to_string_pretty(&drawable)?,
    })
}

fn cmd_icon(
    config: &PlumeConfig,
    name: &str,
    overrides: &IconOverrides<'_>,
    format: OutputFormat,
) -> Result<()> {
    info!("Building icon '{}'", name);
    println!("{}", render_icon(config, name, overrides, format)?);
    Ok(())
}

fn cmd_list() -> Result<()> {
    for icon in icons::ALL {
        println!("{:<12} reference size {}", icon.name, icon.reference_size);
    }
    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("Plume");
    println!("=====");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Path commands (uppercase absolute, lowercase relative):");
    for kind in CommandKind::ALL {
        println!("  {} / {}  {}", kind.letter(false), kind.letter(true), kind.name());
    }
    println!();
    println!("Built-in icons: {}", icons::ALL.len());

    Ok(())
}
