//! Core module - events and capabilities shared by every other system.
//!
//! This module provides the foundation that all other game systems build upon.

mod clock;
mod events;
mod plugin;

pub use clock::*;
pub use events::*;
pub use plugin::CorePlugin;
