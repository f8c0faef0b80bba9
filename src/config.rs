//! Command-line and environment configuration

use clap::Parser;
use directories::ProjectDirs;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine data directory")]
    NoDataDirectory,
    #[error("failed to create data directory {path}: {source}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Find words on a 4x4 board of letter dice
#[derive(Debug, Clone, Parser)]
#[command(name = "boggle", version)]
pub struct Config {
    /// Word list, one word per line
    #[arg(short, long, env = "BOGGLE_LEXICON", default_value = "bogwords.txt")]
    pub lexicon: PathBuf,

    /// Fixed seed for reproducible boards
    #[arg(long, env = "BOGGLE_SEED")]
    pub seed: Option<u64>,

    /// Where to write logs. Defaults to boggle.log in the data directory.
    #[arg(long, env = "BOGGLE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Random source for shaking the dice
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Resolve the log file path, creating the data directory if needed.
    pub fn log_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }

        let data_dir = Self::data_dir()?;
        std::fs::create_dir_all(&data_dir).map_err(|source| ConfigError::CreateDirFailed {
            path: data_dir.clone(),
            source,
        })?;
        Ok(data_dir.join("boggle.log"))
    }

    /// OS-standard data directory:
    /// - Linux: `$XDG_DATA_HOME/boggle/` or `~/.local/share/boggle/`
    /// - macOS: `~/Library/Application Support/boggle/`
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "boggle")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(ConfigError::NoDataDirectory)
    }
}
