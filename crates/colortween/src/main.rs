//! `colortween`: convert and interpolate CSS colors from the terminal.
//!
//! ```text
//! colortween convert '#f80' 'hsl(200,50%,40%)'
//! colortween --mode hsl tween '#f00' '#00f' 0.5
//! colortween --swatch ramp '#000' '#fff' --steps 8
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use colortween::{normalize, swatch, ColorSpace, EnvReader, Interpolator, RealEnv, TweenConfig};
use console::style;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Convert and interpolate CSS color strings in RGB or HSL space.
#[derive(Parser)]
#[command(name = "colortween")]
#[command(version)]
#[command(about = "Convert and interpolate CSS color strings in RGB or HSL space")]
struct Cli {
    /// Color space to work in [default: rgb]
    #[arg(short, long, global = true, value_name = "rgb|hsl")]
    mode: Option<ColorSpace>,

    /// YAML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Prefix each color with a terminal swatch
    #[arg(short, long, global = true)]
    swatch: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each color in the active space
    Convert(ConvertArgs),

    /// Interpolate between two colors
    Tween(TweenArgs),

    /// Print evenly spaced colors from START to END
    Ramp(RampArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Colors to convert
    #[arg(value_name = "COLOR", required = true)]
    colors: Vec<String>,
}

#[derive(Args)]
struct TweenArgs {
    /// Start color
    start: String,

    /// End color
    end: String,

    /// Position between START (0.0) and END (1.0); not clamped
    #[arg(allow_negative_numbers = true)]
    ratio: f64,
}

#[derive(Args)]
struct RampArgs {
    /// Start color
    start: String,

    /// End color
    end: String,

    /// Number of samples, endpoints included
    #[arg(short = 'n', long, default_value_t = 5)]
    steps: usize,

    /// Print the samples as a JSON array
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli, &RealEnv)?;
    info!(mode = %config.mode, "resolved color space");
    let interpolator = Interpolator::from_config(&config);

    match &cli.command {
        Commands::Convert(args) => convert(args, &interpolator, cli.swatch),
        Commands::Tween(args) => tween(args, &interpolator, cli.swatch),
        Commands::Ramp(args) => ramp(args, &interpolator, cli.swatch),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Layers the configuration: defaults, then `--config`, then the
/// environment, then `--mode`.
fn resolve_config(cli: &Cli, env: &impl EnvReader) -> anyhow::Result<TweenConfig> {
    let config = match &cli.config {
        Some(path) => TweenConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => TweenConfig::default(),
    };
    let mut config = config.with_env_override(env)?;
    if let Some(mode) = cli.mode {
        debug!(%mode, "mode set on the command line");
        config.mode = mode;
    }
    Ok(config)
}

fn print_color(color: &str, with_swatch: bool) -> anyhow::Result<()> {
    if with_swatch {
        println!("{} {}", swatch(color)?, color);
    } else {
        println!("{}", color);
    }
    Ok(())
}

fn convert(
    args: &ConvertArgs,
    interpolator: &Interpolator,
    with_swatch: bool,
) -> anyhow::Result<()> {
    let mut failed = 0;
    for color in &args.colors {
        match normalize(color, interpolator.space()) {
            Ok(normalized) => print_color(&normalized, with_swatch)?,
            Err(err) => {
                eprintln!("{} {}", style("error:").red().bold(), err);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{} of {} colors could not be read", failed, args.colors.len());
    }
    Ok(())
}

fn tween(args: &TweenArgs, interpolator: &Interpolator, with_swatch: bool) -> anyhow::Result<()> {
    let color = interpolator
        .try_tween(&args.start, &args.end, args.ratio)
        .with_context(|| format!("tweening {} to {}", args.start, args.end))?;
    print_color(&color, with_swatch)
}

fn ramp(args: &RampArgs, interpolator: &Interpolator, with_swatch: bool) -> anyhow::Result<()> {
    let colors = interpolator
        .ramp(&args.start, &args.end, args.steps)
        .with_context(|| format!("building a ramp from {} to {}", args.start, args.end))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&colors)?);
        return Ok(());
    }
    for color in &colors {
        print_color(color, with_swatch)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use colortween::{MockEnv, MODE_ENV_VAR};
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("colortween").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mode_flag_parses_case_insensitively() {
        let cli = parse(&["--mode", "HSL", "convert", "#fff"]);
        assert_eq!(cli.mode, Some(ColorSpace::Hsl));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let result = Cli::try_parse_from(["colortween", "--mode", "lab", "convert", "#fff"]);
        assert!(result.is_err());
    }

    #[test]
    fn tween_accepts_negative_ratio() {
        let cli = parse(&["tween", "#000", "#fff", "-0.5"]);
        match cli.command {
            Commands::Tween(args) => assert_eq!(args.ratio, -0.5),
            _ => panic!("expected tween"),
        }
    }

    #[test]
    fn ramp_defaults_to_five_steps() {
        let cli = parse(&["ramp", "#000", "#fff"]);
        match cli.command {
            Commands::Ramp(args) => {
                assert_eq!(args.steps, 5);
                assert!(!args.json);
            }
            _ => panic!("expected ramp"),
        }
    }

    #[test]
    fn resolve_defaults_to_rgb() {
        let cli = parse(&["convert", "#fff"]);
        let config = resolve_config(&cli, &MockEnv::new()).unwrap();
        assert_eq!(config, TweenConfig::default());
    }

    #[test]
    fn env_overrides_config_file_and_flag_overrides_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode: hsl\nproperties: [fill]").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = parse(&["--config", &path, "convert", "#fff"]);
        let config = resolve_config(&cli, &MockEnv::new()).unwrap();
        assert_eq!(config.mode, ColorSpace::Hsl);
        assert_eq!(config.properties, vec!["fill"]);

        let env = MockEnv::new().with_var(MODE_ENV_VAR, "rgb");
        let config = resolve_config(&cli, &env).unwrap();
        assert_eq!(config.mode, ColorSpace::Rgb);

        let cli = parse(&["--config", &path, "--mode", "hsl", "convert", "#fff"]);
        let config = resolve_config(&cli, &env).unwrap();
        assert_eq!(config.mode, ColorSpace::Hsl);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = parse(&["--config", "/nonexistent/colortween.yaml", "convert", "#fff"]);
        let err = resolve_config(&cli, &MockEnv::new()).unwrap_err();
        assert!(format!("{:#}", err).contains("colortween.yaml"));
    }

    #[test]
    fn convert_fails_when_any_color_is_unreadable() {
        let args = ConvertArgs {
            colors: vec!["#fff".into(), "nope".into()],
        };
        let err = convert(&args, &Interpolator::default(), false).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 colors could not be read");
    }

    #[test]
    fn tween_reports_unreadable_colors() {
        let args = TweenArgs {
            start: "#fff".into(),
            end: "nope".into(),
            ratio: 0.5,
        };
        assert!(tween(&args, &Interpolator::default(), false).is_err());
    }
}
