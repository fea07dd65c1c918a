//! Zombie Survival - enemy AI for a third-person survival prototype.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Global events and the clock
//! - **Player**: The tagged entity enemies hunt
//! - **Enemies**: Zombie state machine, its senses, and definitions
//!
//! The zombie state machine itself (`enemies::EnemyController`) is plain
//! Rust and can be driven without an `App`; the plugins only feed it.

pub mod core;
pub mod enemies;
pub mod player;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct ZombieSurvivalPlugin;

impl Plugin for ZombieSurvivalPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Enemy systems
            .add_plugins(enemies::EnemyPlugin);
    }
}
