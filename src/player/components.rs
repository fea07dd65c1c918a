//! Player-related components.

use bevy::prelude::*;

/// Marker component for the player entity. Enemies only ever target
/// entities carrying it.
#[derive(Component, Default, Clone, Copy, Debug)]
pub struct Player;
