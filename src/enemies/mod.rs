//! Enemies module - zombie AI, its senses, and data-driven definitions.

mod ai;
pub mod bridge;
mod components;
pub mod controller;
pub mod data;
pub mod error;
mod plugin;
pub mod senses;

pub use ai::{AnimatorSignalEvent, ZombieAttackEvent};
pub use components::*;
pub use controller::{DamageOutcome, EnemyController, EnemyState};
pub use data::{EnemyConfig, ZombieDefinition, ZombieRegistry};
pub use error::{ConfigError, DataLoadError};
pub use plugin::{EnemyPlugin, ZombieSet};
