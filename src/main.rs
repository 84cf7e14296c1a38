use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fdm_travelwave::{emit, Animation, ChartRenderer, Config, FieldSpec, GifSink, OutputMode,
                     Problem, Solution};

/// Long-wave (tsunami) propagation over a variable seabed
#[derive(Parser)]
#[command(name = "fdm_travelwave", version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a problem given on the command line
    Solve(SolveArgs),
    /// Solve a problem described by a TOML file
    Config {
        file: PathBuf,
    },
    /// Render the animation described by a TOML file
    Animate {
        file: PathBuf,
    },
}

/// Field arguments are a number or `gaussian:A:C:W[:OFFSET]` / `cosine:A:C:HALF_WIDTH`.
#[derive(Args)]
struct SolveArgs {
    /// Number of gridpoints in space (intervals)
    mx: usize,
    /// Number of gridpoints in time (steps)
    mt: usize,
    /// Length of the spatial domain
    length: f64,
    /// Total time to solve for
    final_time: f64,
    /// Seabed height along x
    seabed: String,
    /// Initial displacement
    displacement: String,
    /// Initial velocity
    velocity: String,
    /// `data` prints the arrays, `plot` draws a chart
    #[arg(default_value = "plot")]
    mode: String,
    /// Where to write the chart in plot mode
    #[arg(short, long, default_value = "travelwave.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Solve(args) => solve(args),
        Commands::Config { file } => solve_config(file),
        Commands::Animate { file } => animate(file),
    }
}

fn solve(args: SolveArgs) -> Result<()> {
    let problem = Problem::new(args.mx, args.mt, args.length, args.final_time)
        .seabed(FieldSpec::parse("seabed", &args.seabed)?)
        .displacement(FieldSpec::parse("displacement", &args.displacement)?)
        .velocity(FieldSpec::parse("velocity", &args.velocity)?);
    let mut renderer = ChartRenderer::new(&args.output);
    let solution = problem.solve().context("solve failed")?;
    report(&solution);
    let mode: OutputMode = args.mode.parse()?;
    finish(mode, solution, &mut renderer)
}

fn solve_config(file: PathBuf) -> Result<()> {
    let config = Config::from_file(&file)
        .with_context(|| format!("loading {}", file.display()))?;
    let mut renderer = ChartRenderer::new(&config.output.path)
        .with_size(config.output.width, config.output.height);
    let solution = config.problem()?.solve().context("solve failed")?;
    report(&solution);
    finish(config.mode()?, solution, &mut renderer)
}

fn animate(file: PathBuf) -> Result<()> {
    let config = Config::from_file(&file)
        .with_context(|| format!("loading {}", file.display()))?;
    let settings = config.animation.clone().unwrap_or_default();
    let problem = config.problem()?;
    let animation = Animation::new(&problem, settings.frames)
        .time_per_frame(settings.time_per_frame)
        .interval_ms(settings.interval_ms);
    let mut sink = GifSink::with_size(&settings.path,
                                      (config.output.width, config.output.height),
                                      animation.interval())?;
    let frames = animation.play(&mut sink)?;
    info!(frames, path = %settings.path.display(), "animation done");
    Ok(())
}

fn report(solution: &Solution) {
    info!(requested_steps = solution.requested_steps,
          effective_steps = solution.effective_steps,
          dt = solution.dt,
          "solved");
}

fn finish(mode: OutputMode, solution: Solution, renderer: &mut ChartRenderer) -> Result<()> {
    if let Some(solution) = emit(mode, solution, renderer)? {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        writeln!(out, "# x h_sb u")?;
        let rows = solution.x.iter().zip(solution.seabed.iter()).zip(solution.displacement.iter());
        for ((x, h), u) in rows {
            writeln!(out, "{} {} {}", x, h, u)?;
        }
        out.flush()?;
    }
    Ok(())
}
