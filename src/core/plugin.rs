//! Core plugin that registers the global events.

use bevy::prelude::*;

use super::events::*;

/// Core plugin - must be added first as other plugins depend on it.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<DeathEvent>();
    }
}
