//! Reading and generating line-based grid configurations.
//!
//! A configuration is one line per grid row; every character is a cell,
//! [`Config::LIVE_MARKER`] is live and anything else is dead.

use super::Config;
use anyhow::{ensure, Context, Result};
use std::path::Path;

/// Reads the configuration lines from `path`.
pub fn read_config(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration {}", path.display()))?;
    Ok(parse_config(&data))
}

/// Splits configuration text into rows, dropping CR of CRLF line endings.
pub fn parse_config(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim_end_matches('\r').to_owned())
        .collect()
}

/// Generates `height` random rows of `width` cells each.
///
/// Every cell is live independently with probability `fill_rate`.
/// `seed` - random seed (if `None`, then random seed is generated)
pub fn generate_config(
    height: usize,
    width: usize,
    fill_rate: f64,
    seed: Option<u64>,
) -> Result<Vec<String>> {
    use rand::{Rng, SeedableRng};

    ensure!(
        (0.0..=1.0).contains(&fill_rate),
        "fill rate must be within [0, 1], got {fill_rate}"
    );
    let mut rng = if let Some(x) = seed {
        rand_chacha::ChaCha8Rng::seed_from_u64(x)
    } else {
        rand_chacha::ChaCha8Rng::from_entropy()
    };
    let lines = (0..height)
        .map(|_| {
            (0..width)
                .map(|_| {
                    if rng.gen_bool(fill_rate) {
                        Config::LIVE_MARKER
                    } else {
                        Config::DEAD_MARKER
                    }
                })
                .collect()
        })
        .collect();
    Ok(lines)
}

/// Writes `lines` to `path`, each terminated by `'\n'`.
pub fn write_config<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    let path = path.as_ref();
    let mut data = String::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for line in lines {
        data.push_str(line.as_ref());
        data.push('\n');
    }
    std::fs::write(path, data)
        .with_context(|| format!("failed to write configuration {}", path.display()))
}
