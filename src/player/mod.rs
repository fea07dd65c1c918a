//! Player module - the entity enemies hunt.

mod components;

pub use components::*;
