// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for the gesture resolver.

use core::fmt;

/// Gesture resolver settings.
///
/// The defaults match the touchscreen remote's behavior; build a custom
/// configuration with the `with_*` methods and pass it to
/// [`GestureResolver::with_config`](crate::GestureResolver::with_config).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// A touch grabs a marker within `radius × pickup_multiplier` pixels.
    pub pickup_multiplier: f64,
    /// Maximum number of simultaneous marker, barycenter and hidden-reference drags.
    pub max_concurrent_drags: usize,
    /// Anchor-to-touch distance, in pixels, below which a vector gesture
    /// reports a distance ratio of `1.0`.
    pub min_vector_distance: f64,
    /// Pixel distance between an authoritative position and the optimistic
    /// one beyond which the optimistic entry is dropped.
    pub correction_threshold: f64,
}

impl GestureConfig {
    /// Default pickup multiplier.
    pub const PICKUP_MULTIPLIER: f64 = 1.25;
    /// Default drag cap.
    pub const MAX_CONCURRENT_DRAGS: usize = 10;
    /// Default minimum vector baseline distance in pixels.
    pub const MIN_VECTOR_DISTANCE: f64 = 10.0;
    /// Default optimistic-cache correction threshold in pixels.
    pub const CORRECTION_THRESHOLD: f64 = 5.0;

    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pickup_multiplier: Self::PICKUP_MULTIPLIER,
            max_concurrent_drags: Self::MAX_CONCURRENT_DRAGS,
            min_vector_distance: Self::MIN_VECTOR_DISTANCE,
            correction_threshold: Self::CORRECTION_THRESHOLD,
        }
    }

    /// Returns a copy with the given pickup multiplier.
    #[must_use]
    pub fn with_pickup_multiplier(mut self, multiplier: f64) -> Self {
        self.pickup_multiplier = multiplier;
        self
    }

    /// Returns a copy with the given drag cap.
    #[must_use]
    pub fn with_max_concurrent_drags(mut self, max: usize) -> Self {
        self.max_concurrent_drags = max;
        self
    }

    /// Returns a copy with the given minimum vector distance.
    #[must_use]
    pub fn with_min_vector_distance(mut self, distance: f64) -> Self {
        self.min_vector_distance = distance;
        self
    }

    /// Returns a copy with the given correction threshold.
    #[must_use]
    pub fn with_correction_threshold(mut self, threshold: f64) -> Self {
        self.correction_threshold = threshold;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pickup_multiplier.is_finite() && self.pickup_multiplier > 0.0) {
            return Err(ConfigError::PickupMultiplier(self.pickup_multiplier));
        }
        if self.max_concurrent_drags == 0 {
            return Err(ConfigError::MaxConcurrentDrags(self.max_concurrent_drags));
        }
        if !(self.min_vector_distance.is_finite() && self.min_vector_distance >= 0.0) {
            return Err(ConfigError::MinVectorDistance(self.min_vector_distance));
        }
        if !(self.correction_threshold.is_finite() && self.correction_threshold >= 0.0) {
            return Err(ConfigError::CorrectionThreshold(self.correction_threshold));
        }
        Ok(())
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when a [`GestureConfig`] value is out of range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The pickup multiplier must be finite and positive.
    PickupMultiplier(f64),
    /// At least one drag must be allowed.
    MaxConcurrentDrags(usize),
    /// The minimum vector distance must be finite and non-negative.
    MinVectorDistance(f64),
    /// The correction threshold must be finite and non-negative.
    CorrectionThreshold(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PickupMultiplier(v) => {
                write!(f, "pickup multiplier must be finite and positive, got {v}")
            }
            Self::MaxConcurrentDrags(v) => {
                write!(f, "max concurrent drags must be at least 1, got {v}")
            }
            Self::MinVectorDistance(v) => {
                write!(f, "minimum vector distance must be finite and non-negative, got {v}")
            }
            Self::CorrectionThreshold(v) => {
                write!(f, "correction threshold must be finite and non-negative, got {v}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
