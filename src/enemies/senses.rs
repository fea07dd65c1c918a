//! Capabilities an enemy controller senses and acts through.
//!
//! The controller never reaches into the world directly. Everything it
//! knows about targets comes from a [`TargetLocator`], and everything it
//! does leaves through a [`Navigator`] or an [`AnimatorSink`].

use bevy::prelude::*;

/// Finds hostile targets and resolves their current positions.
///
/// Targets are weak handles: the controller only looks them up, it never
/// owns them. A handle that no longer resolves is treated as gone.
pub trait TargetLocator {
    type Target: Copy + PartialEq + std::fmt::Debug;

    /// Nearest candidate to `from`, if any.
    fn find_nearest(&self, from: Vec3) -> Option<Self::Target>;

    /// Current position of `target`, or `None` once it has disappeared.
    fn position_of(&self, target: Self::Target) -> Option<Vec3>;
}

/// Moves the enemy body. Fire-and-forget.
pub trait Navigator {
    fn set_movement_enabled(&mut self, enabled: bool);
    fn set_destination(&mut self, destination: Vec3);
}

/// Write-only channel to whatever plays the enemy's animations.
pub trait AnimatorSink {
    /// Discrete state code (see `EnemyState::code`).
    fn set_state(&mut self, code: i32);
    fn trigger_attack(&mut self);
}
