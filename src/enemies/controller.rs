//! Enemy behavior controller.
//!
//! A tick-driven state machine with five states. It senses targets through a
//! [`TargetLocator`], moves through a [`Navigator`] and reports to an
//! [`AnimatorSink`]. Time is always passed in, never read, so a run is fully
//! determined by its inputs.
//!
//! Transitions:
//!
//! - `Idle -> Walking` when a target is within detection range
//! - `Walking -> Attacking` within attack range, `-> Idle` when the target is
//!   gone or out of detection range
//! - `Attacking -> Walking` when the target leaves attack range, `-> Idle`
//!   when it is gone. Staying in range attacks once per cooldown.
//! - any live state `-> Stunned` on non-lethal damage, `-> Dead` on lethal
//! - `Stunned` re-evaluates ranges once `stun_duration` has passed since the
//!   last hit
//! - `Dead` is terminal

use bevy::prelude::*;

use super::data::EnemyConfig;
use super::error::ConfigError;
use super::senses::{AnimatorSink, Navigator, TargetLocator};

/// Enemy behavior state. Exactly one is active per controller.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EnemyState {
    /// Standing still, waiting for a target to enter detection range.
    #[default]
    Idle,
    /// Moving toward the target.
    Walking,
    /// In attack range, attacking whenever the cooldown allows.
    Attacking,
    /// Reeling from a hit; can't act until the stun wears off.
    Stunned,
    /// Terminal. Waiting for the death to be resolved by the host.
    Dead,
}

impl EnemyState {
    /// Integer code sent to the animator.
    pub fn code(self) -> i32 {
        match self {
            EnemyState::Idle => 0,
            EnemyState::Walking => 1,
            EnemyState::Attacking => 2,
            EnemyState::Stunned => 3,
            EnemyState::Dead => 4,
        }
    }
}

/// What a call to [`EnemyController::apply_damage`] did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DamageOutcome {
    /// Already dead, or the amount wasn't positive.
    Ignored,
    Stunned,
    Killed,
}

pub struct EnemyController<L: TargetLocator, N, A> {
    config: EnemyConfig,
    state: EnemyState,
    health: f32,
    position: Vec3,
    target: Option<L::Target>,
    last_attack_time: Option<f32>,
    /// Time of the most recent non-lethal hit while stunned.
    stunned_at: Option<f32>,
    death_resolved: bool,
    locator: L,
    navigator: N,
    animator: A,
}

impl<L, N, A> EnemyController<L, N, A>
where
    L: TargetLocator,
    N: Navigator,
    A: AnimatorSink,
{
    /// Build a controller in `Idle` with full health.
    pub fn new(
        config: EnemyConfig,
        position: Vec3,
        locator: L,
        navigator: N,
        mut animator: A,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        animator.set_state(EnemyState::Idle.code());

        Ok(Self {
            config,
            state: EnemyState::Idle,
            health: config.max_health,
            position,
            target: None,
            last_attack_time: None,
            stunned_at: None,
            death_resolved: false,
            locator,
            navigator,
            animator,
        })
    }

    /// Advance the state machine by one step.
    pub fn tick(&mut self, now: f32) {
        let target_position = self.refresh_target();

        if self.is_dead() {
            return;
        }

        let sensed = target_position.map(|position| (position, self.position.distance(position)));

        match self.state {
            EnemyState::Idle => self.handle_idle(sensed),
            EnemyState::Walking => self.handle_walking(sensed),
            EnemyState::Attacking => self.handle_attacking(sensed, now),
            EnemyState::Stunned => self.handle_stunned(sensed, now),
            EnemyState::Dead => {}
        }
    }

    /// Take a hit at time `now`.
    ///
    /// Lethal damage kills immediately, cancelling any pending stun recovery.
    /// Non-lethal damage (re)starts the stun from `now`.
    pub fn apply_damage(&mut self, amount: f32, now: f32) -> DamageOutcome {
        if self.is_dead() || amount.is_nan() || amount <= 0.0 {
            return DamageOutcome::Ignored;
        }

        self.health = (self.health - amount).max(0.0);
        self.navigator.set_movement_enabled(false);

        if self.health <= 0.0 {
            self.stunned_at = None;
            self.change_state(EnemyState::Dead);
            info!("Enemy died at {:.2}s", now);
            DamageOutcome::Killed
        } else {
            self.stunned_at = Some(now);
            self.change_state(EnemyState::Stunned);
            DamageOutcome::Stunned
        }
    }

    /// Host signal that the death sequence has played out. Returns `true`
    /// only the first time it is called on a dead controller.
    pub fn resolve_death(&mut self) -> bool {
        if !self.is_dead() || self.death_resolved {
            return false;
        }
        self.death_resolved = true;
        true
    }

    /// Drop the bound target. The next tick asks the locator again.
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    pub fn state(&self) -> EnemyState {
        self.state
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.state == EnemyState::Dead
    }

    pub fn is_death_resolved(&self) -> bool {
        self.death_resolved
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    pub fn target(&self) -> Option<L::Target> {
        self.target
    }

    pub fn last_attack_time(&self) -> Option<f32> {
        self.last_attack_time
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn locator_mut(&mut self) -> &mut L {
        &mut self.locator
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    /// Keep the bound target while it still resolves, otherwise bind the
    /// nearest candidate. Returns the target's position.
    fn refresh_target(&mut self) -> Option<Vec3> {
        if let Some(target) = self.target {
            if let Some(position) = self.locator.position_of(target) {
                return Some(position);
            }
            debug!("Lost target {:?}", target);
            self.target = None;
        }

        let target = self.locator.find_nearest(self.position)?;
        let position = self.locator.position_of(target)?;
        self.target = Some(target);
        Some(position)
    }

    fn handle_idle(&mut self, sensed: Option<(Vec3, f32)>) {
        self.navigator.set_movement_enabled(false);

        if let Some((_, distance)) = sensed {
            if distance <= self.config.detection_range {
                self.change_state(EnemyState::Walking);
            }
        }
    }

    fn handle_walking(&mut self, sensed: Option<(Vec3, f32)>) {
        let Some((target_position, distance)) = sensed else {
            self.navigator.set_movement_enabled(false);
            self.change_state(EnemyState::Idle);
            return;
        };

        if distance <= self.config.attack_range {
            self.navigator.set_movement_enabled(false);
            self.change_state(EnemyState::Attacking);
        } else if distance > self.config.detection_range {
            self.navigator.set_movement_enabled(false);
            self.change_state(EnemyState::Idle);
        } else {
            self.navigator.set_movement_enabled(true);
            self.navigator.set_destination(target_position);
        }
    }

    fn handle_attacking(&mut self, sensed: Option<(Vec3, f32)>, now: f32) {
        self.navigator.set_movement_enabled(false);

        let Some((_, distance)) = sensed else {
            self.change_state(EnemyState::Idle);
            return;
        };

        if distance > self.config.attack_range {
            self.change_state(EnemyState::Walking);
        } else if self.cooldown_ready(now) {
            self.perform_attack(now);
        }
    }

    fn handle_stunned(&mut self, sensed: Option<(Vec3, f32)>, now: f32) {
        self.navigator.set_movement_enabled(false);

        let elapsed = self
            .stunned_at
            .map_or(f32::INFINITY, |stunned_at| now - stunned_at);

        if elapsed >= self.config.stun_duration {
            self.recover(sensed);
        }
    }

    /// Leave `Stunned` based on where the target is. Never attacks.
    fn recover(&mut self, sensed: Option<(Vec3, f32)>) {
        self.stunned_at = None;

        let next = match sensed {
            Some((_, distance)) if distance <= self.config.attack_range => EnemyState::Attacking,
            Some((_, distance)) if distance <= self.config.detection_range => EnemyState::Walking,
            _ => EnemyState::Idle,
        };
        self.change_state(next);
    }

    fn cooldown_ready(&self, now: f32) -> bool {
        self.last_attack_time
            .map_or(true, |last| now - last >= self.config.attack_cooldown)
    }

    fn perform_attack(&mut self, now: f32) {
        self.animator.trigger_attack();
        self.last_attack_time = Some(now);
        debug!("Enemy attacks {:?} at {:.2}s", self.target, now);
    }

    fn change_state(&mut self, next: EnemyState) {
        if self.state != next {
            debug!("Enemy state {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        self.animator.set_state(next.code());
    }
}
