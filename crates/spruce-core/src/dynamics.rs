//! Frame-rate independent exponential damping.
//!
//! Every progress value in the scene moves toward its target with
//! `target + (current - target) * exp(-rate * dt)`. The same wall-clock
//! interval produces the same change no matter how it is sliced into ticks,
//! and no `dt >= 0` can overshoot.

use crate::particle::OrnamentClass;

/// Distance from the target below which progress counts as arrived.
pub const SETTLE_EPSILON: f32 = 1e-4;

/// Damping rate and the progress above which secondary motion stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicsProfile {
    /// Exponential decay rate in 1/s.
    pub rate: f32,
    /// Secondary motion runs while progress is below this.
    pub settle_threshold: f32,
}

impl DynamicsProfile {
    pub const HEAVY: Self = Self {
        rate: 1.0,
        settle_threshold: 0.9,
    };
    pub const MEDIUM: Self = Self {
        rate: 2.0,
        settle_threshold: 0.9,
    };
    pub const LIGHT: Self = Self {
        rate: 3.5,
        settle_threshold: 0.95,
    };
    /// Shared foliage channel. The threshold is where breathing starts; the
    /// floating bob has its own lower bound, [`FOLIAGE_FLOAT_BELOW`].
    pub const FOLIAGE: Self = Self {
        rate: 1.0 / 2.0,
        settle_threshold: 0.8,
    };

    /// Stock profile for an ornament class.
    pub fn for_class(class: OrnamentClass) -> Self {
        match class {
            OrnamentClass::Heavy => Self::HEAVY,
            OrnamentClass::Medium => Self::MEDIUM,
            OrnamentClass::Light => Self::LIGHT,
        }
    }

    /// Whether secondary motion is active at `progress`.
    pub fn in_motion(&self, progress: f32) -> bool {
        progress < self.settle_threshold
    }

    /// Seconds to halve the distance to target.
    pub fn half_life(&self) -> f32 {
        std::f32::consts::LN_2 / self.rate
    }
}

/// Foliage floats while shared progress is below this.
pub const FOLIAGE_FLOAT_BELOW: f32 = 0.5;

/// One exponential damping step.
///
/// `dt` that is zero, negative or NaN leaves `current` untouched.
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    if !(dt > 0.0) {
        return current;
    }
    let next = target + (current - target) * (-rate * dt).exp();
    // exp keeps us between current and target; clamp only guards rounding.
    let (lo, hi) = if current < target {
        (current, target)
    } else {
        (target, current)
    };
    next.clamp(lo, hi)
}

pub fn is_settled(progress: f32, target: f32) -> bool {
    (progress - target).abs() <= SETTLE_EPSILON
}

/// A single damped progress value with a fixed rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressChannel {
    pub value: f32,
    pub rate: f32,
}

impl ProgressChannel {
    pub fn new(rate: f32) -> Self {
        Self { value: 0.0, rate }
    }

    pub fn advance(&mut self, target: f32, dt: f32) -> f32 {
        self.value = damp(self.value, target, self.rate, dt);
        self.value
    }

    pub fn is_settled(&self, target: f32) -> bool {
        is_settled(self.value, target)
    }
}
