use maze_core::{
    DrawConfig, ExitPolicy, MazeBuilderConfig, MazeStats, RenderStyle, RngDraws, create_maze,
    render_maze,
};

use std::{fs, path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use rand::Rng;
use tracing::{Level, event};

#[derive(Parser, Debug)]
#[command(version, about = "Generates rectangular mazes by recursive partitioning", long_about = None)]
struct Args {
    /// Number of cells in each row
    #[arg(short = 'W', long, default_value_t = 110)]
    width: u32,

    /// Number of cells in each column
    #[arg(short = 'H', long, default_value_t = 25)]
    height: u32,

    /// Seed for the random draws, picked at random when absent
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(short = 'S', long, default_value_t, value_enum)]
    style: RenderStyle,

    /// How the exit is chosen once the entry is placed
    #[arg(short, long, default_value_t, value_enum)]
    exit_policy: ExitPolicy,

    /// Mark every cell with its distance to the nearer endpoint
    #[arg(short, long)]
    distances: bool,

    /// Mark the shortest path from entry to exit
    #[arg(long)]
    solution: bool,

    /// Log shape statistics of the generated maze
    #[arg(long)]
    stats: bool,

    /// Write the drawing to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    event!(Level::INFO, "Using seed {}", seed);

    let start = Instant::now();

    let config = MazeBuilderConfig::with_exit_policy(args.exit_policy);
    let generated = create_maze(args.width, args.height, &config, &mut RngDraws::seeded(seed))
        .context("Failed to generate maze")?;

    event!(
        Level::INFO,
        "Generated [{}x{}] maze in {:?}, entry at {}, exit at {}",
        args.width,
        args.height,
        start.elapsed(),
        generated.entry().cell,
        generated.exit().cell
    );

    if args.stats {
        event!(Level::INFO, "{}", MazeStats::collect(&generated));
    }

    let draw_config = DrawConfig {
        show_distances: args.distances,
        show_solution: args.solution,
    };
    let drawing = render_maze(&generated, args.style, &draw_config);

    match args.output {
        Some(path) => {
            fs::write(&path, drawing.to_string())
                .with_context(|| format!("Failed to write maze to {}", path.display()))?;
            event!(Level::INFO, "Saved maze to {}", path.display());
        }
        None => print!("{}", drawing),
    }

    Ok(())
}
