use {
  anyhow::{Context, Result},
  clap::{CommandFactory, Parser, ValueEnum},
  disk_mosaic::{
    codec,
    config::{Config, DEFAULT_ITERATIONS, DEFAULT_OUTPUT, MIN_ITERATIONS},
    error::Error,
    geometry::ClipPolicy
  },
  std::path::PathBuf,
  tracing::info,
  tracing_subscriber::EnvFilter
};

#[derive(Parser)]
#[command(name = "disk-mosaic", version)]
#[command(about = "Recreate an image out of randomly stamped circles")]
struct Args {
  /// Source image
  input: Option<PathBuf>,

  /// Output image path
  #[arg(default_value = DEFAULT_OUTPUT)]
  output: PathBuf,

  /// Number of iterations, at least 100000
  #[arg(default_value_t = DEFAULT_ITERATIONS)]
  iterations: u64,

  /// Start with large circles and shrink them towards the end of the run
  #[arg(short, long)]
  anneal: bool,

  /// How circles crossing the image border are clipped
  #[arg(long, value_enum, default_value_t = Clip::RowStop)]
  clip: Clip,

  /// Seed for the random generator, defaults to the current time
  #[arg(long)]
  seed: Option<u64>
}

#[derive(Copy, Clone, ValueEnum)]
enum Clip {
  /// Drop the rest of a row at the first pixel outside the image
  RowStop,
  /// Skip only the pixels outside the image
  Filter
}

impl From<Clip> for ClipPolicy {
  fn from(clip: Clip) -> Self {
    match clip {
      Clip::RowStop => ClipPolicy::RowStop,
      Clip::Filter => ClipPolicy::Filter
    }
  }
}

impl Args {
  fn config(&self) -> Config {
    Config::default()
      .with_output(&self.output)
      .with_iterations(self.iterations)
      .with_annealing(self.anneal)
      .with_clip(self.clip.into())
      .with_seed(self.seed)
  }
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .init();
}

fn run(args: &Args) -> Result<()> {
  let input = args.input.as_ref().ok_or(Error::MissingInput)?;
  let report = codec::run(input, &args.config())
    .with_context(|| format!("failed to process {}", input.display()))?;
  info!(
    accepted = report.stats.accepted,
    mean_squared_error = report.mean_squared_error,
    "done"
  );
  Ok(())
}

fn main() -> Result<()> {
  init_tracing();
  let args = Args::parse();

  match run(&args) {
    Err(err) => match err.downcast_ref::<Error>() {
      Some(Error::MissingInput) => {
        println!("Pass an image file as the first command line argument.");
        println!("{}", Args::command().render_usage());
        Ok(())
      }
      Some(Error::TooFewIterations { .. }) => {
        println!("Number of iterations must be at least {}.", MIN_ITERATIONS);
        Ok(())
      }
      _ => Err(err)
    },
    ok => ok
  }
}
