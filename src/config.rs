//! Runtime configuration: environment variables, overridden by command-line flags.
//!
//! | Variable | Flag | Meaning |
//! |---|---|---|
//! | `TUI2048_SEED` | `--seed N` | RNG seed (default: derived from the clock) |
//! | `TUI2048_BEST_SCORE_PATH` | `--best-file PATH` | Best-score file (default: `~/.tui-2048/best_score`) |
//! | `TUI2048_LOG_PATH` | `--log-file PATH` | Log file (default: `tui-2048.log` in the temp dir) |
//! | `TUI2048_MOUSE=0` | `--no-mouse` | Disable mouse swipes |

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    /// `None` keeps the best score in memory only
    pub best_score_path: Option<PathBuf>,
    /// `None` disables logging
    pub log_path: Option<PathBuf>,
    pub mouse: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in [`AppConfig::from_env`])
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("TUI2048_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let best_score_path = var("TUI2048_BEST_SCORE_PATH")
            .map(PathBuf::from)
            .or_else(|| var("HOME").map(|home| PathBuf::from(home).join(".tui-2048").join("best_score")));

        let log_path = Some(
            var("TUI2048_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| env::temp_dir().join("tui-2048.log")),
        );

        let mouse = var("TUI2048_MOUSE")
            .map(|s| !matches!(s.to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no"))
            .unwrap_or(true);

        Self {
            seed,
            best_score_path,
            log_path,
            mouse,
        }
    }

    /// Apply command-line flags (program name excluded)
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                }
                "--best-file" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --best-file"))?;
                    self.best_score_path = Some(PathBuf::from(v));
                }
                "--log-file" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log-file"))?;
                    self.log_path = Some(PathBuf::from(v));
                }
                "--no-log" => self.log_path = None,
                "--no-mouse" => self.mouse = false,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(self)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn env_values_are_read() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("TUI2048_SEED", "42"),
            ("TUI2048_BEST_SCORE_PATH", "/tmp/best"),
            ("TUI2048_LOG_PATH", " /tmp/log "),
            ("TUI2048_MOUSE", "false"),
        ]));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.best_score_path, Some(PathBuf::from("/tmp/best")));
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/log")));
        assert!(!cfg.mouse);
    }

    #[test]
    fn defaults_without_env() {
        let cfg = AppConfig::from_lookup(lookup(&[("HOME", "/home/player")]));
        assert_eq!(
            cfg.best_score_path,
            Some(PathBuf::from("/home/player/.tui-2048/best_score"))
        );
        assert!(cfg.mouse);
        assert!(cfg.log_path.is_some());

        let cfg = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg.best_score_path, None);
    }

    #[test]
    fn flags_override_env() {
        let cfg = AppConfig::from_lookup(lookup(&[("TUI2048_SEED", "1")]))
            .with_args(&args(&["--seed", "7", "--best-file", "b", "--no-mouse", "--no-log"]))
            .unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.best_score_path, Some(PathBuf::from("b")));
        assert_eq!(cfg.log_path, None);
        assert!(!cfg.mouse);
    }

    #[test]
    fn bad_flags_are_errors() {
        let base = AppConfig::from_lookup(lookup(&[]));
        assert!(base.clone().with_args(&args(&["--seed"])).is_err());
        assert!(base.clone().with_args(&args(&["--seed", "x"])).is_err());
        assert!(base.with_args(&args(&["--fast"])).is_err());
    }
}
