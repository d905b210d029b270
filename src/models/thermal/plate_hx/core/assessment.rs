//! Performance assessment of a channel velocity.
//!
//! Too slow a flow lets deposits settle (fouling); too fast a flow erodes the
//! plates and drives up pressure drop. [`VelocityLimits`] holds the band
//! edges and [`classify`] applies the conventional ones.

use std::fmt;

use uom::si::{f64::Velocity, velocity::meter_per_second};

/// How serious a verdict is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// Velocity band a value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityBand {
    /// Below the recommended minimum.
    BelowRange,

    /// Inside the recommended range but outside the optimal band.
    Acceptable,

    /// Inside the optimal band.
    Optimal,

    /// Above the recommended maximum.
    AboveRange,
}

/// Outcome of classifying a velocity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the velocity lies within the recommended range.
    pub is_valid: bool,

    /// Advisory text for display.
    pub message: String,

    /// Display severity.
    pub severity: Severity,

    /// Band the velocity fell into.
    pub band: VelocityBand,
}

/// Band edges used to classify a channel velocity.
///
/// The recommended range is `min..=max` and the optimal band is
/// `optimal_min..=optimal_max`. Limits are expected to be ordered
/// `min <= optimal_min <= optimal_max <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityLimits {
    /// Lowest recommended velocity.
    pub min: Velocity,

    /// Lower edge of the optimal band.
    pub optimal_min: Velocity,

    /// Upper edge of the optimal band.
    pub optimal_max: Velocity,

    /// Highest recommended velocity.
    pub max: Velocity,
}

impl Default for VelocityLimits {
    fn default() -> Self {
        Self {
            min: Velocity::new::<meter_per_second>(0.3),
            optimal_min: Velocity::new::<meter_per_second>(0.6),
            optimal_max: Velocity::new::<meter_per_second>(2.0),
            max: Velocity::new::<meter_per_second>(3.0),
        }
    }
}

impl VelocityLimits {
    /// Returns the band `velocity` falls into.
    ///
    /// The range edges are inclusive: a velocity equal to `min` or `max` is
    /// acceptable, and one equal to `optimal_min` or `optimal_max` is optimal.
    /// `NaN` compares false everywhere and lands in [`VelocityBand::Acceptable`].
    #[must_use]
    pub fn band(&self, velocity: Velocity) -> VelocityBand {
        if velocity < self.min {
            VelocityBand::BelowRange
        } else if velocity > self.max {
            VelocityBand::AboveRange
        } else if velocity >= self.optimal_min && velocity <= self.optimal_max {
            VelocityBand::Optimal
        } else {
            VelocityBand::Acceptable
        }
    }

    /// Classifies `velocity` against these limits.
    #[must_use]
    pub fn classify(&self, velocity: Velocity) -> Verdict {
        let band = self.band(velocity);
        let range = format!(
            "{}-{} m/s",
            self.min.get::<meter_per_second>(),
            self.max.get::<meter_per_second>()
        );

        let (is_valid, severity, message) = match band {
            VelocityBand::BelowRange => (
                false,
                Severity::Warning,
                format!("Velocity is below recommended range ({range}). Risk of fouling."),
            ),
            VelocityBand::AboveRange => (
                false,
                Severity::Error,
                format!(
                    "Velocity is above recommended range ({range}). \
                     Risk of erosion and high pressure drop."
                ),
            ),
            VelocityBand::Optimal => (
                true,
                Severity::Info,
                format!(
                    "Velocity is in the optimal range ({}-{} m/s).",
                    self.optimal_min.get::<meter_per_second>(),
                    self.optimal_max.get::<meter_per_second>()
                ),
            ),
            VelocityBand::Acceptable => (
                true,
                Severity::Info,
                "Velocity is within acceptable range.".to_owned(),
            ),
        };

        Verdict {
            is_valid,
            message,
            severity,
            band,
        }
    }
}

/// Classifies a channel velocity against the default [`VelocityLimits`].
///
/// | Velocity       | Valid | Severity |
/// |----------------|-------|----------|
/// | `v < 0.3`      | no    | warning  |
/// | `v > 3`        | no    | error    |
/// | `0.6 ≤ v ≤ 2`  | yes   | info     |
/// | otherwise      | yes   | info     |
#[must_use]
pub fn classify(velocity: Velocity) -> Verdict {
    VelocityLimits::default().classify(velocity)
}
