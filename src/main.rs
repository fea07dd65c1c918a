//! Zombie Survival - headless demo.
//!
//! Spawns a player and a zombie, walks the player into the zombie's reach,
//! then hits the zombie until it dies. Watch the log for state changes.

use std::time::Duration;

use bevy::app::{AppExit, ScheduleRunnerPlugin};
use bevy::log::LogPlugin;
use bevy::prelude::*;

use zombie_survival::core::DamageEvent;
use zombie_survival::enemies::{spawn_zombie, Zombie, ZombieAttackEvent, ZombieRegistry};
use zombie_survival::player::Player;

/// Seconds after which the player starts swinging at the zombie.
const FIGHT_BACK_AT: f32 = 6.0;
const SWING_INTERVAL: f32 = 0.8;
const SWING_DAMAGE: f32 = 25.0;
const DEMO_LENGTH: f32 = 15.0;

#[derive(Resource)]
struct SwingTimer(Timer);

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(zombie_survival::ZombieSurvivalPlugin)
        .insert_resource(SwingTimer(Timer::from_seconds(SWING_INTERVAL, TimerMode::Repeating)))
        .add_systems(PostStartup, setup_scene)
        .add_systems(Update, (approach_zombie, fight_back, log_attacks, end_demo))
        .run();
}

fn setup_scene(mut commands: Commands, registry: Res<ZombieRegistry>) {
    commands.spawn((Player, Transform::from_xyz(0.0, 0.0, 9.0)));

    if spawn_zombie(&mut commands, &registry, "zombie", Vec3::ZERO).is_none() {
        warn!("No zombie definition loaded; the demo will be quiet");
    }
}

/// The player shuffles toward the origin until the fight starts.
fn approach_zombie(time: Res<Time>, mut player_query: Query<&mut Transform, With<Player>>) {
    if time.elapsed_secs() >= FIGHT_BACK_AT {
        return;
    }
    for mut transform in player_query.iter_mut() {
        transform.translation.z = (transform.translation.z - 0.5 * time.delta_secs()).max(1.0);
    }
}

fn fight_back(
    time: Res<Time>,
    mut swing_timer: ResMut<SwingTimer>,
    player_query: Query<Entity, With<Player>>,
    zombie_query: Query<Entity, With<Zombie>>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    if time.elapsed_secs() < FIGHT_BACK_AT {
        return;
    }

    swing_timer.0.tick(time.delta());
    if !swing_timer.0.just_finished() {
        return;
    }

    let source = player_query.get_single().ok();
    for zombie in zombie_query.iter() {
        damage_events.send(DamageEvent {
            target: zombie,
            source,
            amount: SWING_DAMAGE,
        });
    }
}

fn log_attacks(mut attack_events: EventReader<ZombieAttackEvent>) {
    for event in attack_events.read() {
        info!("Player takes a hit from {:?}", event.attacker);
    }
}

fn end_demo(time: Res<Time>, mut exit: EventWriter<AppExit>) {
    if time.elapsed_secs() >= DEMO_LENGTH {
        exit.send(AppExit::Success);
    }
}
