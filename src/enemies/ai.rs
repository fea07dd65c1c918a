//! Zombie AI systems. These only feed and drain the controllers; every
//! decision is made inside `EnemyController`.

use bevy::prelude::*;

use super::bridge::AnimatorSignal;
use super::components::{DeathTimer, DespawnDelay, MoveSpeed, Zombie};
use super::controller::DamageOutcome;
use crate::core::{Clock, DamageEvent, DeathEvent};
use crate::player::Player;

/// Closer than this to the destination counts as arrived.
const ARRIVAL_EPSILON: f32 = 0.1;

/// Animator notification raised by a zombie.
#[derive(Event, Clone, Copy, Debug)]
pub struct AnimatorSignalEvent {
    pub entity: Entity,
    pub signal: AnimatorSignal,
}

/// Sent each time a zombie performs an attack.
#[derive(Event, Clone, Copy, Debug)]
pub struct ZombieAttackEvent {
    pub attacker: Entity,
    pub target: Option<Entity>,
}

/// Route damage events to zombie controllers.
pub fn apply_zombie_damage(
    mut commands: Commands,
    time: Res<Time>,
    mut damage_events: EventReader<DamageEvent>,
    mut zombie_query: Query<(&mut Zombie, &DespawnDelay)>,
    mut death_events: EventWriter<DeathEvent>,
) {
    let now = time.now();

    for event in damage_events.read() {
        let Ok((mut zombie, despawn_delay)) = zombie_query.get_mut(event.target) else {
            continue;
        };

        if zombie.brain.apply_damage(event.amount, now) == DamageOutcome::Killed {
            commands
                .entity(event.target)
                .insert(DeathTimer::from_seconds(despawn_delay.0));
            death_events.send(DeathEvent {
                entity: event.target,
                killed_by: event.source,
            });
        }
    }
}

/// Hand every zombie the current player snapshot and step its controller.
pub fn tick_zombies(
    time: Res<Time>,
    player_query: Query<(Entity, &Transform), (With<Player>, Without<Zombie>)>,
    mut zombie_query: Query<(&Transform, &mut Zombie), Without<Player>>,
) {
    let now = time.now();
    let players: Vec<(Entity, Vec3)> = player_query
        .iter()
        .map(|(entity, transform)| (entity, transform.translation))
        .collect();

    for (transform, mut zombie) in zombie_query.iter_mut() {
        let brain = &mut zombie.brain;
        brain.locator_mut().refresh(&players);
        brain.set_position(transform.translation);
        brain.tick(now);
    }
}

/// Walk zombies toward their navigation destination.
pub fn move_zombies(time: Res<Time>, mut zombie_query: Query<(&mut Transform, &Zombie, &MoveSpeed)>) {
    for (mut transform, zombie, speed) in zombie_query.iter_mut() {
        let Some(destination) = zombie.brain.navigator().active_destination() else {
            continue;
        };

        // Horizontal only
        let direction = Vec3::new(
            destination.x - transform.translation.x,
            0.0,
            destination.z - transform.translation.z,
        );
        let distance = direction.length();
        if distance <= ARRIVAL_EPSILON {
            continue;
        }

        let step = (speed.0 * time.delta_secs()).min(distance);
        transform.translation += direction / distance * step;

        let look_target = Vec3::new(destination.x, transform.translation.y, destination.z);
        transform.look_at(look_target, Vec3::Y);
    }
}

/// Forward queued animator signals as events.
pub fn dispatch_animator_signals(
    mut zombie_query: Query<(Entity, &mut Zombie)>,
    mut signal_events: EventWriter<AnimatorSignalEvent>,
    mut attack_events: EventWriter<ZombieAttackEvent>,
) {
    for (entity, mut zombie) in zombie_query.iter_mut() {
        if zombie.brain.animator().is_empty() {
            continue;
        }

        let target = zombie.brain.target();
        for signal in zombie.brain.animator_mut().drain() {
            if signal == AnimatorSignal::Attack {
                info!("Zombie {:?} attacks {:?}", entity, target);
                attack_events.send(ZombieAttackEvent {
                    attacker: entity,
                    target,
                });
            }
            signal_events.send(AnimatorSignalEvent { entity, signal });
        }
    }
}

/// Despawn zombies after death animation completes.
pub fn despawn_dead_zombies(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DeathTimer, &mut Zombie)>,
) {
    for (entity, mut death_timer, mut zombie) in query.iter_mut() {
        death_timer.0.tick(time.delta());

        // Wait for death animation to complete before despawning
        if death_timer.0.finished() && zombie.brain.resolve_death() {
            commands.entity(entity).despawn_recursive();
        }
    }
}
