use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guessme::models::{AppConfig, GridExport, PredictRequest, CONFIG_FILE_ENV};
use guessme::rendering::grid_to_png;
use guessme::stroke_raster::{render_ascii, CanvasPreprocessor, PreprocessOptions};

#[derive(Parser)]
#[command(name = "guessme")]
#[command(version)]
#[command(about = "Guessme - turn canvas strokes into digit classifier inputs")]
struct Cli {
    /// Config file (overrides the CONFIG_FILE environment variable)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rasterize a drawing into the classifier grid
    Render {
        /// Request JSON file, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Output file (stdout when omitted; required for png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
        format: OutputFormat,

        /// PNG pixels per grid cell
        #[arg(long, default_value_t = 10)]
        scale: u32,

        /// Emit standardized classifier values instead of intensities (json only)
        #[arg(long)]
        normalize: bool,

        #[command(flatten)]
        overrides: PipelineOverrides,
    },
    /// Print the effective configuration as YAML
    Config {
        #[command(flatten)]
        overrides: PipelineOverrides,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
    Png,
}

/// Pipeline settings that take precedence over the config file.
#[derive(Args)]
struct PipelineOverrides {
    /// Output grid side length
    #[arg(long)]
    grid_size: Option<usize>,

    /// Input canvas side length
    #[arg(long)]
    canvas_size: Option<f64>,

    /// Enable stroke thickening
    #[arg(long)]
    dilate: bool,

    /// Disable centroid recentering
    #[arg(long)]
    no_center: bool,

    /// Disable Gaussian smoothing
    #[arg(long)]
    no_blur: bool,

    /// Window size for dilation and smoothing (odd)
    #[arg(long)]
    kernel_size: Option<usize>,

    /// Gaussian standard deviation
    #[arg(long)]
    sigma: Option<f64>,

    /// Print the ASCII view of the grid to stderr
    #[arg(long)]
    debug: bool,
}

impl PipelineOverrides {
    fn apply(&self, mut options: PreprocessOptions) -> PreprocessOptions {
        if let Some(size) = self.grid_size {
            options = options.grid_size(size);
        }
        if let Some(size) = self.canvas_size {
            options = options.canvas_size(size);
        }
        if let Some(size) = self.kernel_size {
            options = options.kernel_size(size);
        }
        if let Some(sigma) = self.sigma {
            options = options.sigma(sigma);
        }
        if self.dilate {
            options = options.dilate(true);
        }
        if self.no_center {
            options = options.center(false);
        }
        if self.no_blur {
            options = options.blur(false);
        }
        if self.debug {
            options = options.debug(true);
        }
        options
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI; stdout carries command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guessme=warn,stroke_raster=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli.config.clone().or_else(AppConfig::path_from_env);

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            format,
            scale,
            normalize,
            overrides,
        }) => {
            let config = load_config(config_path.as_deref(), &overrides)?;
            run_render_command(&config, &input, output.as_deref(), format, scale, normalize)
        }
        Some(Commands::Config { overrides }) => {
            let config = load_config(config_path.as_deref(), &overrides)?;
            print!("{}", config.to_yaml()?);
            Ok(())
        }
        None => {
            run_status_command(config_path.as_deref());
            Ok(())
        }
    }
}

/// Defaults, then the config file, then command-line overrides.
fn load_config(path: Option<&Path>, overrides: &PipelineOverrides) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load(path)?;
    config.preprocess = overrides.apply(config.preprocess);
    config.validate()?;
    Ok(config)
}

fn read_request(input: &str) -> anyhow::Result<PredictRequest> {
    let content = if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)
            .map_err(|e| anyhow::anyhow!("Failed to read {input}: {e}"))?
    };
    let request: PredictRequest = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Invalid request JSON: {e}"))?;
    if request.is_empty() {
        tracing::warn!("Request has no points, output will be blank");
    }
    Ok(request)
}

/// Rasterize a request and write it in the chosen format
fn run_render_command(
    config: &AppConfig,
    input: &str,
    output: Option<&Path>,
    format: OutputFormat,
    scale: u32,
    normalize: bool,
) -> anyhow::Result<()> {
    let request = read_request(input)?;
    let preprocessor = CanvasPreprocessor::new(config.preprocess.clone())?;
    let result = preprocessor.process_strokes(&request.to_strokes());

    if let Some(debug) = &result.debug {
        if format != OutputFormat::Ascii {
            eprintln!("{debug}");
        }
    }

    let bytes = match format {
        OutputFormat::Ascii => {
            let mut text = render_ascii(&result.grid);
            text.push('\n');
            text.into_bytes()
        }
        OutputFormat::Json => {
            let export = if normalize {
                let input = config.normalization.apply(&result.grid);
                GridExport::from_values(input.size(), input.values())
            } else {
                GridExport::from_grid(&result.grid)
            };
            let mut json = serde_json::to_string_pretty(&export.with_debug(result.debug))?;
            json.push('\n');
            json.into_bytes()
        }
        OutputFormat::Png => {
            if output.is_none() {
                anyhow::bail!("PNG output requires --output");
            }
            grid_to_png(&result.grid, scale)?
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, &bytes)?;
            println!("Rendered {} ({} bytes)", path.display(), bytes.len());
        }
        None => {
            use std::io::Write;
            std::io::stdout().write_all(&bytes)?;
        }
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_env = std::env::var(CONFIG_FILE_ENV).ok();

    // Header
    println!("Guessme v{VERSION}");
    println!("Canvas stroke preprocessing for digit classifiers\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_env.as_deref().unwrap_or("(not set)")
    );

    // Config section
    println!("\nConfiguration:");
    let config = match config_path {
        Some(path) if path.exists() => {
            println!("  Source:  {}", path.display());
            AppConfig::load(Some(path))
        }
        Some(path) => {
            println!("  Source:  defaults ({} not found)", path.display());
            Ok(AppConfig::default())
        }
        None => {
            println!("  Source:  defaults");
            Ok(AppConfig::default())
        }
    };

    match config {
        Ok(config) => {
            let p = &config.preprocess;
            let on_off = |b: bool| if b { "on" } else { "off" };
            println!("  Canvas:  {}x{}", p.canvas_size, p.canvas_size);
            println!("  Grid:    {}x{}", p.grid_size, p.grid_size);
            println!(
                "  Stages:  dilate {}, center {}, blur {} (kernel {}, sigma {})",
                on_off(p.dilate),
                on_off(p.center),
                on_off(p.blur),
                p.kernel_size,
                p.sigma
            );
            println!("  Labels:  {} (top {})", config.labels.len(), config.top_k);
        }
        Err(e) => println!("  Error:   {e}"),
    }

    // Commands section
    println!("\nCommands:");
    println!("  guessme render   Rasterize a drawing to ASCII, JSON or PNG");
    println!("  guessme config   Print the effective configuration");
    println!("\nRun 'guessme --help' for more details.");
}
