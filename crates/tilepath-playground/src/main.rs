use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use anyhow::Context;
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;
use structopt::StructOpt;
use tilepath_core::Point;
use tilepath_paths::Algorithm;
use tilepath_playground::{PlaygroundConfig, Session, TickEvent};

/// Route a player across generated terrain and print what the search sees.
#[derive(Debug, StructOpt)]
#[structopt(name = "tilepath")]
struct Opt {
    /// Path to a JSON playground config. Missing fields use defaults
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to run
    #[structopt(short, long, default_value = "100")]
    ticks: usize,

    /// Print a frame every N ticks. 0 prints only the last frame
    #[structopt(long, default_value = "10")]
    print_every: usize,

    /// Override the grid width
    #[structopt(long)]
    width: Option<i32>,

    /// Override the grid height
    #[structopt(long)]
    height: Option<i32>,

    /// Override the search algorithm: astar, astar4, astar_simple,
    /// dijkstra, dijkstra4
    #[structopt(short, long)]
    algorithm: Option<Algorithm>,

    /// Override the terrain seed
    #[structopt(long)]
    noise_seed: Option<u32>,

    /// Override the endpoint seed
    #[structopt(long)]
    seed: Option<u64>,

    /// Search one expansion per tick and show the frontier
    #[structopt(long)]
    stepwise: bool,

    /// The logging level. See
    /// https://docs.rs/log/0.4/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

fn load_config(path: &Path) -> anyhow::Result<PlaygroundConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("error reading config file {path:?}"))?;
    serde_json::from_str(&text).with_context(|| format!("error parsing config file {path:?}"))
}

fn build_config(opt: &Opt) -> anyhow::Result<PlaygroundConfig> {
    let mut config = match &opt.config {
        Some(path) => load_config(path)?,
        None => PlaygroundConfig::default(),
    };
    config.size = Point::new(
        opt.width.unwrap_or(config.size.x),
        opt.height.unwrap_or(config.size.y),
    );
    if let Some(algorithm) = opt.algorithm {
        config.search.algorithm = algorithm;
    }
    if let Some(seed) = opt.noise_seed {
        config.noise.seed = seed;
    }
    if let Some(seed) = opt.seed {
        config.seed = seed;
    }
    config.stepwise |= opt.stepwise;
    Ok(config)
}

fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = build_config(&opt)?;
    let mut session = Session::new(config).context("invalid playground config")?;

    let mut routes = 0;
    for tick in 1..=opt.ticks {
        let event = session.tick();
        match event {
            TickEvent::Planned { .. } => routes += 1,
            TickEvent::NoRoute => info!("tick {tick}: no route available"),
            _ => {}
        }
        let last = tick == opt.ticks;
        if last || (opt.print_every > 0 && tick % opt.print_every == 0) {
            println!("tick {tick}: {event:?}");
            print!("{}", session.render_ascii());
            println!();
        }
    }
    info!("ran {} ticks, planned {routes} routes", opt.ticks);
    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err:#}");
            1
        }
    };
    process::exit(exit_code);
}
