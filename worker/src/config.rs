use anyhow::Context;
use creep_spawner::prelude::SpawnerConfig;
use serde_derive::Serialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerConfig {
    /// Path of the spawner json configuration, defaults are used if not set
    pub spawner_config: Option<PathBuf>,
    pub ticks: u64,
    pub target_tick_freq_ms: u64,
    pub energy_capacity: u32,
    /// Upper bound of the energy regenerated per tick
    pub energy_income: u32,
    pub seed: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            spawner_config: None,
            ticks: 100,
            target_tick_freq_ms: 0,
            energy_capacity: 300,
            energy_income: 10,
            seed: 0xCA0,
        }
    }
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("Failed to parse {}={:?}", key, value)),
        Err(_) => Ok(default),
    }
}

impl WorkerConfig {
    pub fn load() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            spawner_config: env::var("CAO_SPAWNER_CONFIG").ok().map(PathBuf::from),
            ticks: parse_var("CAO_TICKS", defaults.ticks)?,
            target_tick_freq_ms: parse_var(
                "CAO_TARGET_TICK_FREQ_MS",
                defaults.target_tick_freq_ms,
            )?,
            energy_capacity: parse_var("CAO_ENERGY_CAPACITY", defaults.energy_capacity)?,
            energy_income: parse_var("CAO_ENERGY_INCOME", defaults.energy_income)?,
            seed: parse_var("CAO_SEED", defaults.seed)?,
        })
    }

    pub fn spawner_config(&self) -> anyhow::Result<SpawnerConfig> {
        match self.spawner_config.as_ref() {
            Some(path) => SpawnerConfig::from_file(path)
                .with_context(|| format!("Failed to load spawner config {:?}", path)),
            None => Ok(SpawnerConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_default_and_value() {
        env::remove_var("CAO_TEST_UNSET_VAR");
        assert_eq!(parse_var("CAO_TEST_UNSET_VAR", 7u32).unwrap(), 7);

        env::set_var("CAO_TEST_SET_VAR", "42");
        assert_eq!(parse_var("CAO_TEST_SET_VAR", 7u32).unwrap(), 42);

        env::set_var("CAO_TEST_BAD_VAR", "many");
        assert!(parse_var("CAO_TEST_BAD_VAR", 7u32).is_err());
    }

    #[test]
    fn test_default_spawner_config() {
        let conf = WorkerConfig::default();
        let spawner = conf.spawner_config().expect("default config");
        assert_eq!(spawner.category, "worker");
    }

    #[test]
    fn test_example_spawner_config() {
        let conf = WorkerConfig {
            spawner_config: Some(
                PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("spawner.example.json"),
            ),
            ..Default::default()
        };
        let spawner = conf.spawner_config().expect("example config");
        let catalog = spawner.build_catalog().expect("catalog");
        assert_eq!(catalog.len(), 5);
        assert_eq!(
            catalog.select_best("fighter", 300).map(|t| t.cost()),
            Some(280)
        );
    }
}
