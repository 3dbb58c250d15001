use {
  anyhow::{Context, Result},
  clap::Parser,
  std::{path::PathBuf, process::ExitCode},
  voronoi_raster::{
    config::{self, Config},
    error
  }
};

/// Rasterize a Voronoi diagram of random seeds into a binary PPM image
#[derive(Parser)]
#[command(name = "voronoi", version, about, long_about = None)]
struct Cli {
  /// Number of seed points
  #[arg(short = 'n', long = "points", default_value_t = config::DEFAULT_POINT_COUNT)]
  points: usize,

  /// Minkowski exponent (1 = Manhattan, 2 = Euclidean, large = Chebyshev)
  #[arg(short = 'p', long, default_value_t = config::DEFAULT_EXPONENT)]
  exponent: f64,

  /// Canvas width in pixels
  #[arg(short = 'W', long, default_value_t = config::DEFAULT_WIDTH)]
  width: u32,

  /// Canvas height in pixels
  #[arg(short = 'H', long, default_value_t = config::DEFAULT_HEIGHT)]
  height: u32,

  /// Radius of the seed markers, 0 marks a single pixel
  #[arg(short, long, default_value_t = config::DEFAULT_MARKER_RADIUS)]
  radius: u32,

  /// Derive seed colors from their coordinates instead of the 16-color palette
  #[arg(short, long)]
  auto_colors: bool,

  /// Output file (`.png` requires the `png` feature)
  #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
  output: PathBuf,

  /// Random seed for reproducible output
  #[arg(short, long)]
  seed: Option<u64>,

  /// Rasterize on a single thread
  #[arg(long)]
  serial: bool,

  /// Log stage timings and seed positions
  #[arg(short, long)]
  verbose: bool,
}

impl From<Cli> for Config {
  fn from(cli: Cli) -> Self {
    Config {
      point_count: cli.points,
      exponent: cli.exponent,
      width: cli.width,
      height: cli.height,
      marker_radius: cli.radius,
      auto_colors: cli.auto_colors,
      output: cli.output,
      seed: cli.seed,
      parallel: !cli.serial
    }
  }
}

fn try_main(config: Config) -> Result<()> {
  let output = config.output.clone();
  voronoi_raster::run(&config)
    .with_context(|| format!("failed to render {}", output.display()))
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  let level = if cli.verbose { "debug" } else { "info" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
    .init();

  match try_main(cli.into()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      log::error!("{}", error::display(err.as_ref()));
      let code = err.downcast_ref::<error::Error>()
        .map(error::Error::exit_code)
        .unwrap_or(1);
      ExitCode::from(code)
    }
  }
}
