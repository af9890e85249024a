//! CLI configuration from the environment.
use std::env;
use std::path::PathBuf;

/// Settings that apply to every subcommand.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Data directory holding `config.toml`, `recipes/` and `tags/`.
    pub data_dir: PathBuf,

    /// Log directory override; the platform cache directory otherwise.
    pub log_dir: Option<PathBuf>,

    /// World seed for simulated worlds.
    pub world_seed: u64,
}

impl CliConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    pub const DEFAULT_WORLD_SEED: u64 = 0;

    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SHRINE_DATA_DIR` - Data directory (default: `./data`)
    /// - `SHRINE_LOG_DIR` - Log directory (default: platform cache directory)
    /// - `SHRINE_WORLD_SEED` - Seed of simulated worlds (default: 0)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("SHRINE_DATA_DIR") {
            config.data_dir = dir;
        }
        config.log_dir = read_env::<PathBuf>("SHRINE_LOG_DIR");
        if let Some(seed) = read_env::<u64>("SHRINE_WORLD_SEED") {
            config.world_seed = seed;
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            log_dir: None,
            world_seed: Self::DEFAULT_WORLD_SEED,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
