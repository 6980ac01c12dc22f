//! Picks the biggest creep template a spawn can afford and requests it from the host.
//!
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod parts;
pub mod prelude;
pub mod selector;
pub mod templates;

#[cfg(test)]
mod utils;

pub use dispatch::Spawner;
use serde_derive::{Deserialize, Serialize};

/// Host tick counter
#[derive(Clone, Debug, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Time(pub u64);
