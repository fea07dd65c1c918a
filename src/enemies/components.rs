//! Enemy-related components.

use bevy::prelude::*;

use super::bridge::{NavAgent, PlayerLocator, SignalBuffer};
use super::controller::EnemyController;
use super::data::{ZombieDefinition, ZombieRegistry};
use super::error::ConfigError;

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Enemy type identifier (matches RON file name).
#[derive(Component, Clone, Debug)]
pub struct EnemyType(pub String);

/// Controller wired to the ECS-backed senses.
pub type ZombieBrain = EnemyController<PlayerLocator, NavAgent, SignalBuffer>;

/// Zombie AI. Owns the state machine and its senses.
#[derive(Component)]
pub struct Zombie {
    pub brain: ZombieBrain,
}

/// Walking speed in units per second.
#[derive(Component, Clone, Copy, Debug)]
pub struct MoveSpeed(pub f32);

/// How long a dead zombie lingers. Copied into its `DeathTimer` on death.
#[derive(Component, Clone, Copy, Debug)]
pub struct DespawnDelay(pub f32);

/// Timer for death animation before despawn.
#[derive(Component)]
pub struct DeathTimer(pub Timer);

impl DeathTimer {
    pub fn from_seconds(seconds: f32) -> Self {
        Self(Timer::from_seconds(seconds, TimerMode::Once))
    }
}

/// Everything a zombie entity needs, built from its definition.
pub fn zombie_bundle(
    zombie_type: &str,
    definition: &ZombieDefinition,
    position: Vec3,
) -> Result<impl Bundle, ConfigError> {
    definition.validate()?;

    let brain = EnemyController::new(
        definition.config,
        position,
        PlayerLocator::default(),
        NavAgent::default(),
        SignalBuffer::default(),
    )?;

    Ok((
        Enemy,
        EnemyType(zombie_type.to_string()),
        Zombie { brain },
        MoveSpeed(definition.move_speed),
        DespawnDelay(definition.despawn_delay),
        Transform::from_translation(position),
    ))
}

/// Spawn a zombie from the registry. Logs and returns `None` for unknown
/// types or definitions that fail validation.
pub fn spawn_zombie(
    commands: &mut Commands,
    registry: &ZombieRegistry,
    zombie_type: &str,
    position: Vec3,
) -> Option<Entity> {
    let Some(definition) = registry.get(zombie_type) else {
        warn!("Unknown zombie type: {}", zombie_type);
        return None;
    };

    match zombie_bundle(zombie_type, definition, position) {
        Ok(bundle) => {
            info!("Spawned {} at {:?}", definition.name, position);
            Some(commands.spawn(bundle).id())
        }
        Err(e) => {
            error!("Rejected {} spawn: {}", zombie_type, e);
            None
        }
    }
}
