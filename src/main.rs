#![warn(clippy::all)]

use anyhow::{anyhow, bail, Context, Result};
use log::{info, LevelFilter};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;
use torus_life::utils::{generate_config, read_config, write_config};
use torus_life::{Config, Grid, Mode};

const USAGE: &str = "usage:
  torus_life run <config> [--steps N] [--workers K] [--print] [--log-level LEVEL]
  torus_life generate <path> [--height H] [--width W] [--fill-rate P] [--seed S] [--log-level LEVEL]";

enum Command {
    Run {
        config: PathBuf,
        steps: u64,
        workers: usize,
        print: bool,
    },
    Generate {
        path: PathBuf,
        height: usize,
        width: usize,
        fill_rate: f64,
        seed: Option<u64>,
    },
}

struct MainArgs {
    command: Command,
    log_level: LevelFilter,
}

fn parse_value<T: FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let raw = args
        .get(i)
        .ok_or_else(|| anyhow!("{flag} requires a value"))?;
    raw.parse()
        .map_err(|_| anyhow!("invalid value for {flag}: {raw}"))
}

fn parse_args(args: &[String]) -> Result<MainArgs> {
    let (sub, target) = match args {
        [_, sub, target, ..] => (sub.as_str(), PathBuf::from(target)),
        _ => bail!("missing arguments\n{USAGE}"),
    };

    let mut log_level = LevelFilter::Info;
    let (mut steps, mut workers) = (Config::DEFAULT_STEPS, Config::DEFAULT_WORKERS);
    let mut print = false;
    let (mut height, mut width) = (Config::DEFAULT_SIDE, Config::DEFAULT_SIDE);
    let (mut fill_rate, mut seed) = (Config::DEFAULT_FILL_RATE, None);

    let mut i = 3;
    while i < args.len() {
        match (sub, args[i].as_str()) {
            (_, "--log-level") => {
                i += 1;
                log_level = parse_value(args, i, "--log-level")?;
            }
            ("run", "--steps") => {
                i += 1;
                steps = parse_value(args, i, "--steps")?;
            }
            ("run", "--workers") => {
                i += 1;
                workers = parse_value(args, i, "--workers")?;
            }
            ("run", "--print") => print = true,
            ("generate", "--height") => {
                i += 1;
                height = parse_value(args, i, "--height")?;
            }
            ("generate", "--width") => {
                i += 1;
                width = parse_value(args, i, "--width")?;
            }
            ("generate", "--fill-rate") => {
                i += 1;
                fill_rate = parse_value(args, i, "--fill-rate")?;
            }
            ("generate", "--seed") => {
                i += 1;
                seed = Some(parse_value(args, i, "--seed")?);
            }
            (_, other) => bail!("unknown argument: {other}\n{USAGE}"),
        }
        i += 1;
    }

    let command = match sub {
        "run" => Command::Run {
            config: target,
            steps,
            workers,
            print,
        },
        "generate" => Command::Generate {
            path: target,
            height,
            width,
            fill_rate,
            seed,
        },
        other => bail!("unknown command: {other}\n{USAGE}"),
    };
    Ok(MainArgs { command, log_level })
}

fn run(config: PathBuf, steps: u64, workers: usize, print: bool) -> Result<()> {
    let lines = read_config(&config)?;
    let mut grid = Grid::from_lines(&lines)
        .with_context(|| format!("invalid configuration {}", config.display()))?;
    info!(
        "Loaded {}x{} grid, population = {}",
        grid.height(),
        grid.width(),
        grid.population()
    );

    let timer = Instant::now();
    grid.evolve(steps, Mode::with_workers(workers))?;
    info!(
        "Advanced {steps} generations on {workers} worker(s) in {:?}, population = {}",
        timer.elapsed(),
        grid.population()
    );

    if print {
        print!("{grid}");
    }
    Ok(())
}

fn generate(
    path: PathBuf,
    height: usize,
    width: usize,
    fill_rate: f64,
    seed: Option<u64>,
) -> Result<()> {
    let lines = generate_config(height, width, fill_rate, seed)?;
    write_config(&path, &lines)?;
    info!("Wrote {height}x{width} configuration to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let MainArgs { command, log_level } = parse_args(&args)?;
    simple_logger::SimpleLogger::new().with_level(log_level).init()?;

    match command {
        Command::Run {
            config,
            steps,
            workers,
            print,
        } => run(config, steps, workers, print),
        Command::Generate {
            path,
            height,
            width,
            fill_rate,
            seed,
        } => generate(path, height, width, fill_rate, seed),
    }
}
