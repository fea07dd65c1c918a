//! Enemy plugin - registers all zombie systems.

use bevy::prelude::*;

use super::ai;
use super::data::{load_zombie_definitions, ZombieRegistry};

/// Ordering label for the zombie AI systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZombieSet;

/// Enemy plugin - handles zombie definitions, AI, and death.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<ZombieRegistry>()
            .add_event::<ai::AnimatorSignalEvent>()
            .add_event::<ai::ZombieAttackEvent>()
            .add_systems(Startup, load_zombie_definitions)
            // Damage lands before the tick so a hit this frame already
            // stuns; signals are drained after everything that emits them.
            .add_systems(
                Update,
                (
                    ai::apply_zombie_damage,
                    ai::tick_zombies,
                    ai::move_zombies,
                    ai::dispatch_animator_signals,
                    ai::despawn_dead_zombies,
                )
                    .chain()
                    .in_set(ZombieSet),
            );
    }
}
