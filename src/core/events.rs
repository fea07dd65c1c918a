//! Global events used for cross-system communication.
//!
//! Events allow decoupled systems to communicate. For example, a weapon
//! sends DamageEvents, and the enemy systems receive them to apply damage
//! to their controllers. This keeps systems independent and testable.

use bevy::prelude::*;

/// Sent when an entity takes damage.
#[derive(Event, Clone, Debug)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage, if any
    pub source: Option<Entity>,
    /// Amount of health to remove
    pub amount: f32,
}

/// Sent when an entity dies (health reaches 0).
///
/// Systems can listen for this to play death effects, drop loot, etc.
/// The entity itself lingers until its death has been resolved.
#[derive(Event, Clone, Debug)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
    /// Entity that killed them (if any)
    pub killed_by: Option<Entity>,
}
