//! Time source for anything that schedules by absolute time.

use bevy::prelude::*;

/// Monotonic time in seconds.
pub trait Clock {
    fn now(&self) -> f32;
}

impl<T: Default> Clock for Time<T> {
    fn now(&self) -> f32 {
        self.elapsed_secs()
    }
}

/// A clock that only moves when told to. Handy for replaying scenarios.
#[derive(Resource, Default, Clone, Copy, Debug, PartialEq)]
pub struct ManualClock(pub f32);

impl ManualClock {
    pub fn advance(&mut self, seconds: f32) {
        self.0 += seconds;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f32 {
        self.0
    }
}
