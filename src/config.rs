//! Command-line configuration for the terminal game.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::{EngineConfig, PieceCatalog};
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH, TICK_MS};

pub const USAGE: &str = "\
usage: tui-blocks [options]

  --shapes <path>   load the shape catalog from a file (default: tetrominoes)
  --seed <u32>      seed for piece selection (default: from the clock)
  --tick-ms <ms>    gravity interval in milliseconds (default: 1000)
  --width <n>       field width in cells (default: 10)
  --height <n>      field height in cells (default: 20)
  -h, --help        show this help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub shapes: Option<String>,
    pub seed: Option<u32>,
    pub tick_ms: u64,
    pub width: usize,
    pub height: usize,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shapes: None,
            seed: None,
            tick_ms: TICK_MS,
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            show_help: false,
        }
    }
}

impl Config {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Engine parameters; without an explicit seed one is derived from the clock.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            field_width: self.width,
            field_height: self.height,
            seed: self.seed.unwrap_or_else(seed_from_clock),
        }
    }

    /// Built-in tetrominoes, or the catalog file named by `--shapes`.
    pub fn load_catalog(&self) -> Result<PieceCatalog> {
        let catalog = match &self.shapes {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|e| anyhow!("cannot read shape file {}: {}", path, e))?;
                PieceCatalog::parse(&text)
                    .map_err(|e| anyhow!("invalid shape file {}: {}", path, e))?
            }
            None => PieceCatalog::standard()?,
        };
        Ok(catalog)
    }
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Config> {
    let mut config = Config::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--shapes" => {
                config.shapes = Some(value(args, &mut i, "--shapes")?.to_string());
            }
            "--seed" => {
                let v = value(args, &mut i, "--seed")?;
                config.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?,
                );
            }
            "--tick-ms" => {
                let v = value(args, &mut i, "--tick-ms")?;
                config.tick_ms = match v.parse::<u64>() {
                    Ok(ms) if ms > 0 => ms,
                    _ => return Err(anyhow!("invalid --tick-ms value: {}", v)),
                };
            }
            "--width" => config.width = dimension(args, &mut i, "--width")?,
            "--height" => config.height = dimension(args, &mut i, "--height")?,
            "-h" | "--help" => config.show_help = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(config)
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn dimension(args: &[String], i: &mut usize, flag: &str) -> Result<usize> {
    let v = value(args, i, flag)?;
    match v.parse::<usize>() {
        Ok(n) if (1..=u8::MAX as usize).contains(&n) => Ok(n),
        _ => Err(anyhow!("invalid {} value: {}", flag, v)),
    }
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn defaults_without_args() {
        assert_eq!(parse_args(&[]).unwrap(), Config::default());
    }

    #[test]
    fn parses_every_flag() {
        let config = parse_args(&args(
            "--shapes pieces.txt --seed 7 --tick-ms 250 --width 12 --height 24",
        ))
        .unwrap();
        assert_eq!(config.shapes.as_deref(), Some("pieces.txt"));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.engine_config().field_width, 12);
        assert_eq!(config.engine_config().field_height, 24);
        assert_eq!(config.engine_config().seed, 7);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse_args(&args("--seed")).is_err());
        assert!(parse_args(&args("--seed -3")).is_err());
        assert!(parse_args(&args("--tick-ms 0")).is_err());
        assert!(parse_args(&args("--width 0")).is_err());
        assert!(parse_args(&args("--bogus")).is_err());
    }

    #[test]
    fn help_flag_is_recorded() {
        assert!(parse_args(&args("-h")).unwrap().show_help);
    }

    #[test]
    fn standard_catalog_loads_by_default() {
        assert_eq!(Config::default().load_catalog().unwrap().len(), 7);
    }

    #[test]
    fn missing_shape_file_is_an_error() {
        let config = Config {
            shapes: Some("/nonexistent/shapes.txt".into()),
            ..Config::default()
        };
        let err = config.load_catalog().unwrap_err();
        assert!(err.to_string().contains("cannot read shape file"));
    }
}
