use anyhow::{Context, Result};
use bokeh_models::color::{Color, DEFAULT_NAN_COLOR};
use bokeh_models::mappers::MarkerType;
use bokeh_models::model::Transform;
use bokeh_models::palettes::{palette_by_name, parse_palette, Palette};
use bokeh_models::ranges::{FactorRange, Range};
use bokeh_models::transforms::Distribution;
use bokeh_transform::{
    cumsum, dodge, factor_cmap, factor_mark, jitter, linear_cmap, log_cmap, stack, transform,
    ColorMapperOptions, DataSpec, FactorCmapOptions, FactorMarkOptions, JitterOptions,
};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Print the DataSpec JSON that applies a client-side transform to a data column
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Log more detail to stderr (-v for debug, -vv for trace). Overrides RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Offset a column by a fixed value
    Dodge {
        field: String,

        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Categorical factors of the column, used to build a FactorRange
        #[arg(long, value_delimiter = ',')]
        factors: Vec<String>,
    },

    /// Add random noise to a column
    Jitter {
        field: String,

        /// Width of the random distribution
        #[arg(long, allow_negative_numbers = true)]
        width: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        mean: f64,

        /// "uniform" or "normal"
        #[arg(long, default_value = "uniform")]
        distribution: String,

        /// Categorical factors of the column, used to build a FactorRange
        #[arg(long, value_delimiter = ',')]
        factors: Vec<String>,
    },

    /// Color a categorical column
    FactorCmap {
        field: String,

        #[command(flatten)]
        palette: PaletteArgs,

        #[arg(long, value_delimiter = ',', required = true)]
        factors: Vec<String>,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        start: i64,

        #[arg(long, allow_negative_numbers = true)]
        end: Option<i64>,

        #[arg(long, default_value = DEFAULT_NAN_COLOR)]
        nan_color: String,
    },

    /// Color a numeric column on a linear scale
    LinearCmap(ContinuousCmapArgs),

    /// Color a numeric column on a log scale
    LogCmap(ContinuousCmapArgs),

    /// Sum columns row-wise, in the order given
    Stack {
        #[arg(required = true)]
        fields: Vec<String>,
    },

    /// Running sum of a column
    Cumsum {
        field: String,

        #[arg(long)]
        include_zero: bool,
    },

    /// Choose marker shapes for a categorical column
    FactorMark {
        field: String,

        /// Comma separated marker names, e.g. circle,square,triangle
        #[arg(long, value_delimiter = ',', required = true)]
        markers: Vec<String>,

        #[arg(long, value_delimiter = ',', required = true)]
        factors: Vec<String>,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        start: i64,

        #[arg(long, allow_negative_numbers = true)]
        end: Option<i64>,
    },

    /// Apply any transform, given as JSON, to a column
    Transform {
        field: String,

        /// Transform model, e.g. '{"type": "Dodge", "value": 0.5}'
        json: String,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct PaletteArgs {
    /// Named palette, e.g. Category10_5
    #[arg(long)]
    palette: Option<String>,

    /// Comma separated CSS colors, e.g. red,#00ff00
    #[arg(long, value_delimiter = ',')]
    colors: Option<Vec<String>>,
}

impl PaletteArgs {
    fn resolve(&self) -> Result<Palette> {
        match (&self.palette, &self.colors) {
            (Some(name), _) => {
                palette_by_name(name).with_context(|| format!("Failed to load palette {name}"))
            }
            (None, Some(colors)) => parse_palette(colors).context("Failed to parse --colors"),
            (None, None) => anyhow::bail!("Either --palette or --colors is required"),
        }
    }
}

#[derive(Args)]
struct ContinuousCmapArgs {
    field: String,

    #[command(flatten)]
    palette: PaletteArgs,

    #[arg(long, allow_negative_numbers = true)]
    low: f64,

    #[arg(long, allow_negative_numbers = true)]
    high: f64,

    #[arg(long)]
    low_color: Option<String>,

    #[arg(long)]
    high_color: Option<String>,

    #[arg(long, default_value = DEFAULT_NAN_COLOR)]
    nan_color: String,
}

impl ContinuousCmapArgs {
    fn options(&self) -> Result<ColorMapperOptions> {
        Ok(ColorMapperOptions {
            low_color: parse_optional_color(self.low_color.as_deref())?,
            high_color: parse_optional_color(self.high_color.as_deref())?,
            nan_color: parse_color(&self.nan_color)?,
        })
    }
}

fn parse_color(s: &str) -> Result<Color> {
    Color::parse(s).with_context(|| format!("Invalid color {s}"))
}

fn parse_optional_color(s: Option<&str>) -> Result<Option<Color>> {
    s.map(parse_color).transpose()
}

fn factor_range(factors: Vec<String>) -> Option<Range> {
    if factors.is_empty() {
        None
    } else {
        Some(FactorRange::new(factors).into())
    }
}

fn build_spec(command: Commands) -> Result<DataSpec> {
    let spec = match command {
        Commands::Dodge {
            field,
            value,
            factors,
        } => dodge(field, value, factor_range(factors)),
        Commands::Jitter {
            field,
            width,
            mean,
            distribution,
            factors,
        } => jitter(
            field,
            width,
            JitterOptions {
                mean,
                distribution: Distribution::parse(&distribution)?,
                range: factor_range(factors),
            },
        ),
        Commands::FactorCmap {
            field,
            palette,
            factors,
            start,
            end,
            nan_color,
        } => factor_cmap(
            field,
            palette.resolve()?,
            factors,
            FactorCmapOptions {
                start,
                end,
                nan_color: parse_color(&nan_color)?,
            },
        ),
        Commands::LinearCmap(args) => {
            let options = args.options()?;
            linear_cmap(args.field, args.palette.resolve()?, args.low, args.high, options)
        }
        Commands::LogCmap(args) => {
            let options = args.options()?;
            log_cmap(args.field, args.palette.resolve()?, args.low, args.high, options)
        }
        Commands::Stack { fields } => stack(fields),
        Commands::Cumsum {
            field,
            include_zero,
        } => cumsum(field, include_zero),
        Commands::FactorMark {
            field,
            markers,
            factors,
            start,
            end,
        } => {
            let markers = markers
                .iter()
                .map(|m| MarkerType::parse(m))
                .collect::<Result<Vec<_>, _>>()?;
            factor_mark(field, markers, factors, FactorMarkOptions { start, end })
        }
        Commands::Transform { field, json } => {
            let model: Transform =
                serde_json::from_str(&json).context("Failed to parse transform JSON")?;
            transform(field, model)
        }
    };
    Ok(spec)
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let pretty = cli.pretty;
    let spec = build_spec(cli.command)?;
    debug!(field = spec.field_name(), "built DataSpec");

    let json = if pretty {
        spec.to_json_pretty()?
    } else {
        spec.to_json()?
    };
    println!("{json}");
    Ok(())
}
