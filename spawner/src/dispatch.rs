//! Turns a selected template into a spawn request against the host.
//!
//! The host owns the actual spawn structure, the energy and the naming registry. Everything the
//! spawner needs from it is passed in explicitly: the budget and the tick used to name the creep.
//!
use crate::config::SpawnerConfig;
use crate::error::ConfigurationError;
use crate::logging::logger_or_default;
use crate::parts::BodyPart;
use crate::templates::Catalog;
use crate::Time;
use slog::{debug, info, o, trace, warn, Logger};

/// Reasons the host may refuse a spawn request
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    #[error("Spawn is busy")]
    Busy,
    #[error("Not enough energy")]
    NotEnoughEnergy,
    #[error("A creep with the same name already exists")]
    NameExists,
    #[error("Invalid body")]
    InvalidBody,
}

pub trait SpawnHost {
    /// Request a new creep. The body is in the order the creep should be built.
    fn spawn_creep(&mut self, body: &[BodyPart], name: &str) -> Result<(), SpawnError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Spawned {
        name: String,
        size: String,
        cost: u32,
    },
    /// No template of the category fits in the budget. Not an error, try again next tick.
    NothingAffordable { budget: i64 },
    Rejected(SpawnError),
}

/// `worker` at tick 1234 becomes `Worker1234`
pub fn creep_name(category: &str, time: Time) -> String {
    let mut chars = category.chars();
    let mut name = String::with_capacity(category.len() + 20);
    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
        name.push_str(chars.as_str());
    }
    name.push_str(&time.0.to_string());
    name
}

pub struct Spawner {
    logger: Logger,
    catalog: Catalog,
    category: String,
}

impl Spawner {
    /// Builds the catalog from the configuration. Fails if any template is invalid.
    pub fn new(
        logger: impl Into<Option<Logger>>,
        config: &SpawnerConfig,
    ) -> Result<Self, ConfigurationError> {
        let logger = logger_or_default(logger);
        let catalog = config.build_catalog()?;
        debug!(
            logger,
            "Spawner initialized with {} templates, default category {:?}",
            catalog.len(),
            config.category
        );
        Ok(Self::with_catalog(logger, catalog, config.category.as_str()))
    }

    pub fn with_catalog(
        logger: impl Into<Option<Logger>>,
        catalog: Catalog,
        category: &str,
    ) -> Self {
        Self {
            logger: logger_or_default(logger),
            catalog,
            category: category.to_owned(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    /// Issue at most one spawn request for the configured category
    pub fn run<H: SpawnHost + ?Sized>(
        &self,
        host: &mut H,
        budget: i64,
        time: Time,
    ) -> DispatchOutcome {
        self.run_for(host, self.category.as_str(), budget, time)
    }

    pub fn run_for<H: SpawnHost + ?Sized>(
        &self,
        host: &mut H,
        category: &str,
        budget: i64,
        time: Time,
    ) -> DispatchOutcome {
        let logger = self
            .logger
            .new(o!("tick" => time.0, "category" => category.to_owned()));

        let template = match self.catalog.select_best(category, budget) {
            Some(t) => t,
            None => {
                trace!(logger, "Nothing affordable with budget {}", budget);
                return DispatchOutcome::NothingAffordable { budget };
            }
        };

        let name = creep_name(category, time);
        debug!(
            logger,
            "Spawning {} {:?} cost: {} budget: {}",
            template.size(),
            name,
            template.cost(),
            budget
        );

        match host.spawn_creep(template.body(), name.as_str()) {
            Ok(()) => {
                info!(
                    logger,
                    "Spawned {}", name;
                    "size" => template.size(),
                    "cost" => template.cost()
                );
                DispatchOutcome::Spawned {
                    name,
                    size: template.size().to_owned(),
                    cost: template.cost(),
                }
            }
            Err(err) => {
                warn!(logger, "Host rejected spawn of {}: {}", name, err);
                DispatchOutcome::Rejected(err)
            }
        }
    }
}
