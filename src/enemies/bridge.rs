//! ECS-backed implementations of the enemy senses.
//!
//! Each zombie owns one of each. Systems fill the locator with a fresh
//! snapshot before ticking and drain the navigator and signal buffer after.

use bevy::prelude::*;

use super::senses::{AnimatorSink, Navigator, TargetLocator};

/// Read-only snapshot of player positions for one frame.
#[derive(Default, Clone, Debug)]
pub struct PlayerLocator {
    players: Vec<(Entity, Vec3)>,
}

impl PlayerLocator {
    /// Replace the snapshot.
    pub fn refresh(&mut self, players: &[(Entity, Vec3)]) {
        self.players.clear();
        self.players.extend_from_slice(players);
    }
}

impl TargetLocator for PlayerLocator {
    type Target = Entity;

    fn find_nearest(&self, from: Vec3) -> Option<Entity> {
        self.players
            .iter()
            .min_by(|(_, a), (_, b)| from.distance_squared(*a).total_cmp(&from.distance_squared(*b)))
            .map(|(entity, _)| *entity)
    }

    fn position_of(&self, target: Entity) -> Option<Vec3> {
        self.players
            .iter()
            .find(|(entity, _)| *entity == target)
            .map(|(_, position)| *position)
    }
}

/// Where the zombie wants to go. `move_zombies` does the actual walking.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct NavAgent {
    pub movement_enabled: bool,
    pub destination: Option<Vec3>,
}

impl NavAgent {
    /// Destination to steer toward this frame, if moving.
    pub fn active_destination(&self) -> Option<Vec3> {
        self.destination.filter(|_| self.movement_enabled)
    }
}

impl Navigator for NavAgent {
    fn set_movement_enabled(&mut self, enabled: bool) {
        self.movement_enabled = enabled;
    }

    fn set_destination(&mut self, destination: Vec3) {
        self.destination = Some(destination);
    }
}

/// Discrete notification for the animation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorSignal {
    State(i32),
    Attack,
}

/// Queues animator signals until `dispatch_animator_signals` drains them.
#[derive(Default, Clone, Debug)]
pub struct SignalBuffer {
    pending: Vec<AnimatorSignal>,
}

impl SignalBuffer {
    pub fn drain(&mut self) -> std::vec::Drain<'_, AnimatorSignal> {
        self.pending.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl AnimatorSink for SignalBuffer {
    fn set_state(&mut self, code: i32) {
        self.pending.push(AnimatorSignal::State(code));
    }

    fn trigger_attack(&mut self) {
        self.pending.push(AnimatorSignal::Attack);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locator_picks_nearest_player() {
        let near = Entity::from_raw(1);
        let far = Entity::from_raw(2);
        let mut locator = PlayerLocator::default();
        locator.refresh(&[(far, Vec3::new(9.0, 0.0, 0.0)), (near, Vec3::new(0.0, 0.0, 3.0))]);

        assert_eq!(locator.find_nearest(Vec3::ZERO), Some(near));
        assert_eq!(locator.position_of(far), Some(Vec3::new(9.0, 0.0, 0.0)));
    }

    #[test]
    fn empty_snapshot_finds_nothing() {
        let player = Entity::from_raw(1);
        let mut locator = PlayerLocator::default();
        locator.refresh(&[(player, Vec3::ONE)]);
        locator.refresh(&[]);

        assert_eq!(locator.find_nearest(Vec3::ZERO), None);
        assert_eq!(locator.position_of(player), None);
    }

    #[test]
    fn stopped_agent_has_no_active_destination() {
        let mut agent = NavAgent::default();
        agent.set_destination(Vec3::X);
        assert_eq!(agent.active_destination(), None);

        agent.set_movement_enabled(true);
        assert_eq!(agent.active_destination(), Some(Vec3::X));
    }

    #[test]
    fn signal_buffer_drains_in_order() {
        let mut buffer = SignalBuffer::default();
        buffer.set_state(2);
        buffer.trigger_attack();

        let signals: Vec<_> = buffer.drain().collect();
        assert_eq!(signals, vec![AnimatorSignal::State(2), AnimatorSignal::Attack]);
        assert!(buffer.is_empty());
    }
}
