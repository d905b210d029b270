//! Closed-form helpers for incompressible flow through fixed areas.
//!
//! These are the geometric building blocks shared by flow-velocity models:
//! the area of a circular passage and the mean velocity of a volume rate
//! through a cross-section.
//!
//! # Example
//!
//! ```
//! use phe_flow::support::flow::{circular_area, mean_velocity};
//! use uom::si::{
//!     f64::{Length, VolumeRate},
//!     length::meter,
//!     velocity::meter_per_second,
//!     volume_rate::cubic_meter_per_hour,
//! };
//!
//! let area = circular_area(Length::new::<meter>(0.1));
//! let v = mean_velocity(VolumeRate::new::<cubic_meter_per_hour>(36.0), area).unwrap();
//! assert!((v.get::<meter_per_second>() - 1.2732).abs() < 1e-3);
//! ```

use std::f64::consts::PI;

use crate::support::constraint::{ConstraintResult, NonZero};
use uom::si::f64::{Area, Length, Velocity, VolumeRate};

/// Cross-sectional area of a circular passage, `π d² / 4`.
///
/// Always non-negative for a real diameter.
#[must_use]
pub fn circular_area(diameter: Length) -> Area {
    diameter * diameter * PI / 4.0
}

/// Mean velocity of a volume rate through a cross-section, `Q / A`.
///
/// Negative areas are not rejected and yield a negative velocity.
///
/// # Errors
///
/// Returns `Err` if `area` is exactly zero or `NaN`.
pub fn mean_velocity(volume_rate: VolumeRate, area: Area) -> ConstraintResult<Velocity> {
    let area = NonZero::new(area)?;
    Ok(volume_rate / area.into_inner())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, length::millimeter, velocity::meter_per_second,
        volume_rate::cubic_meter_per_second,
    };

    use super::*;
    use crate::support::constraint::ConstraintError;

    #[test]
    fn circular_area_of_port() {
        let area = circular_area(Length::new::<millimeter>(100.0));
        assert_relative_eq!(area.get::<square_meter>(), PI * 0.01 / 4.0);
    }

    #[test]
    fn circular_area_is_sign_independent() {
        let d = Length::new::<millimeter>(50.0);
        assert_eq!(circular_area(d), circular_area(-d));
    }

    #[test]
    fn velocity_through_area() -> ConstraintResult<()> {
        let v = mean_velocity(
            VolumeRate::new::<cubic_meter_per_second>(0.01),
            Area::new::<square_meter>(0.05),
        )?;
        assert_relative_eq!(v.get::<meter_per_second>(), 0.2);
        Ok(())
    }

    #[test]
    fn negative_area_passes_through() -> ConstraintResult<()> {
        let v = mean_velocity(
            VolumeRate::new::<cubic_meter_per_second>(0.01),
            Area::new::<square_meter>(-0.05),
        )?;
        assert_relative_eq!(v.get::<meter_per_second>(), -0.2);
        Ok(())
    }

    #[test]
    fn zero_area_is_rejected() {
        let result = mean_velocity(
            VolumeRate::new::<cubic_meter_per_second>(0.01),
            Area::new::<square_meter>(0.0),
        );
        assert_eq!(result, Err(ConstraintError::Zero));
    }
}
