use crate::error::ConfigurationError;
use crate::parts::PriceTable;
use crate::templates::{default_template_configs, Catalog, TemplateConfig};
use serde_derive::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

pub const DEFAULT_CATEGORY: &str = "worker";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_owned()
}

/// Spawner configuration, loaded once at startup.
///
/// Every field is optional in the json representation, missing fields fall back to the game
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnerConfig {
    /// Category spawned by [crate::Spawner::run]
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub prices: PriceTable,
    #[serde(default = "default_template_configs")]
    pub templates: Vec<TemplateConfig>,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            prices: PriceTable::DEFAULT,
            templates: default_template_configs(),
        }
    }
}

impl SpawnerConfig {
    pub fn from_json_str(payload: &str) -> Result<Self, ConfigurationError> {
        let conf = serde_json::from_str(payload)?;
        Ok(conf)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigurationError> {
        let conf = serde_json::from_reader(reader)?;
        Ok(conf)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Builds the catalog, computing every template's cost with the configured prices
    pub fn build_catalog(&self) -> Result<Catalog, ConfigurationError> {
        Catalog::from_configs(self.templates.as_slice(), &self.prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::BodyPart;

    #[test]
    fn empty_json_is_the_default() {
        let conf = SpawnerConfig::from_json_str("{}").expect("parse");
        assert_eq!(conf.category, "worker");
        assert_eq!(conf.prices, PriceTable::DEFAULT);

        let catalog = conf.build_catalog().expect("catalog");
        assert_eq!(&catalog, Catalog::default_catalog());
    }

    #[test]
    fn full_config_is_parsed() {
        let conf = SpawnerConfig::from_json_str(
            r#"{
                "category": "healer",
                "prices": {
                    "move": 50, "work": 100, "carry": 50, "attack": 80,
                    "heal": 200, "ranged_attack": 150, "tough": 10, "claim": 600
                },
                "templates": [
                    { "category": "healer", "size": "small", "body": ["heal", "move"] },
                    { "category": "healer", "size": "medium", "body": ["tough", "heal", "heal", "move", "move"] }
                ]
            }"#,
        )
        .expect("parse");

        assert_eq!(conf.category, "healer");
        assert_eq!(conf.prices.price(BodyPart::Heal), 200);

        let catalog = conf.build_catalog().expect("catalog");
        let costs: Vec<_> = catalog.templates().iter().map(|t| t.cost()).collect();
        assert_eq!(costs, vec![250, 510]);
    }

    #[test]
    fn unknown_part_in_template_is_an_error() {
        let res = SpawnerConfig::from_json_str(
            r#"{ "templates": [ { "category": "worker", "size": "small", "body": ["laser"] } ] }"#,
        );
        match res {
            Err(ConfigurationError::Deserialize(_)) => {}
            res => panic!("unexpected result {:?}", res),
        }
    }

    #[test]
    fn incomplete_price_table_is_an_error() {
        let res = SpawnerConfig::from_json_str(r#"{ "prices": { "move": 50 } }"#);
        assert!(res.is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        match SpawnerConfig::from_file("/nonexistent/spawner.json") {
            Err(ConfigurationError::Io(_)) => {}
            res => panic!("unexpected result {:?}", res),
        }
    }

    #[test]
    fn overflowing_template_cost_is_an_error() {
        let conf = SpawnerConfig::from_json_str(
            r#"{
                "prices": {
                    "move": 50, "work": 100, "carry": 50, "attack": 80,
                    "heal": 250, "ranged_attack": 150, "tough": 10, "claim": 4000000000
                },
                "templates": [
                    { "category": "claimer", "size": "double", "body": ["claim", "claim"] }
                ]
            }"#,
        )
        .expect("parse");

        match conf.build_catalog() {
            Err(ConfigurationError::CostOverflow { .. }) => {}
            res => panic!("unexpected result {:?}", res),
        }
    }
}
