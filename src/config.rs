use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Settings read from an optional YAML file and then overridden from the
/// command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory list files are saved to and opened from.
    pub data_dir: PathBuf,
    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            data_dir: PathBuf::from("lists"),
            log_level: String::from("warn"),
        }
    }
}

impl Config {
    pub fn from_reader(reader: impl std::io::Read) -> Result<Config, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }

    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let file = File::open(path)
            .with_context(|| format!("opening config file {}", path.display()))?;
        let reader = std::io::BufReader::new(file);
        Config::from_reader(reader)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// `--dir` and `--verbose` win over whatever the file said.
    pub fn with_overrides(mut self, data_dir: Option<&str>, verbose: bool) -> Config {
        if let Some(dir) = data_dir {
            self.data_dir = PathBuf::from(dir);
        }
        if verbose {
            self.log_level = String::from("debug");
        }
        self
    }
}
