pub use crate::config::SpawnerConfig;
pub use crate::dispatch::{creep_name, DispatchOutcome, SpawnError, SpawnHost, Spawner};
pub use crate::error::ConfigurationError;
pub use crate::parts::{compute_cost, BodyPart, PriceTable, MAX_CREEP_SIZE};
pub use crate::selector::select_best;
pub use crate::templates::{Catalog, Template, TemplateConfig};
pub use crate::Time;
