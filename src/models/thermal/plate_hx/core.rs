//! Flow velocity calculation for one side of a plate heat exchanger.
//!
//! The calculation is a fixed chain of closed-form relations:
//! flow gap → channel count → flow area → channel velocity, then port area
//! and port velocity when a port diameter is given. The channel count is the
//! only validation gate; a zero flow area is the only arithmetic fault.

mod assessment;
mod error;
mod formulas;
mod input;
mod results;
mod steps;

#[cfg(test)]
pub(crate) mod test_support;

pub use assessment::{Severity, VelocityBand, VelocityLimits, Verdict, classify};
pub use error::{FlowStage, InputField, VelocityError};
pub use formulas::{
    channel_velocity, flow_area, flow_gap, number_of_channels, port_area, port_velocity,
};
pub use input::Input;
pub use results::{PortFlow, Results};
pub use steps::{Steps, describe};

use tracing::{debug, trace};
use uom::si::{area::square_meter, length::meter, velocity::meter_per_second};

/// Computes the flow characteristics for `input`.
///
/// The volume rate is taken in SI (m³/s); a rate built with
/// `cubic_meter_per_hour` is divided by 3600 on construction.
///
/// # Errors
///
/// Returns the first [`VelocityError`] encountered, with no partial results:
///
/// - [`VelocityError::NonFinite`] if any input quantity is `NaN` or infinite.
/// - [`VelocityError::Configuration`] if the plates do not split into a whole
///   number of channels per pass.
/// - [`VelocityError::DivisionByZero`] if the channel or port area is zero.
pub fn compute(input: &Input) -> Result<Results, VelocityError> {
    input.check_finite()?;

    let q = input.volume_rate;

    let gap = flow_gap(input.plate_pitch, input.plate_thickness);
    trace!(flow_gap_m = gap.get::<meter>(), "step 1");

    let channels = number_of_channels(input.plates, input.passes)?;
    trace!(channels, "step 2");

    let area = flow_area(channels, input.plate_width, gap, input.corrugation_factor);
    trace!(flow_area_m2 = area.get::<square_meter>(), "step 3");

    let velocity = channel_velocity(q, area)?;
    trace!(velocity_mps = velocity.get::<meter_per_second>(), "step 4");

    let port = match input.effective_port_diameter() {
        Some(diameter) => {
            let area = port_area(diameter);
            let velocity = port_velocity(q, area)?;
            trace!(
                port_area_m2 = area.get::<square_meter>(),
                port_velocity_mps = velocity.get::<meter_per_second>(),
                "port"
            );
            Some(PortFlow { area, velocity })
        }
        None => {
            debug!("no positive port diameter; skipping port velocity");
            None
        }
    };

    Ok(Results {
        flow_gap: gap,
        channels,
        flow_area: area,
        velocity,
        port,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{
        f64::{Length, VolumeRate},
        length::millimeter,
        volume_rate::cubic_meter_per_hour,
    };

    use super::test_support::{canonical, canonical_with_port};
    use super::*;
    use crate::support::constraint::ConstraintError;

    #[test]
    fn canonical_scenario() -> Result<(), VelocityError> {
        let results = compute(&canonical())?;

        assert_relative_eq!(results.flow_gap.get::<meter>(), 0.0034, epsilon = 1e-12);
        assert_eq!(results.channels, 25);
        assert_relative_eq!(
            results.flow_area.get::<square_meter>(),
            0.048_875,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            results.velocity.get::<meter_per_second>(),
            0.204_60,
            epsilon = 1e-4
        );
        assert_eq!(results.port, None);
        Ok(())
    }

    #[test]
    fn port_scenario() -> Result<(), VelocityError> {
        let results = compute(&canonical_with_port())?;
        let port = results.port.expect("port flow should be computed");

        assert_relative_eq!(
            port.area.get::<square_meter>(),
            std::f64::consts::PI * 0.01 / 4.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            port.velocity.get::<meter_per_second>(),
            1.2732,
            epsilon = 1e-3
        );
        Ok(())
    }

    #[test]
    fn uneven_plate_split_is_a_configuration_error() {
        let input = Input {
            plates: 50,
            passes: 3,
            ..canonical_with_port()
        };
        assert_eq!(
            compute(&input),
            Err(VelocityError::Configuration {
                plates: 50,
                passes: 3
            })
        );
    }

    #[test]
    fn zero_gap_is_a_division_by_zero() {
        let input = Input {
            plate_thickness: Length::new::<meter>(0.004),
            ..canonical()
        };
        assert_eq!(
            compute(&input),
            Err(VelocityError::DivisionByZero {
                stage: FlowStage::Channel
            })
        );
    }

    #[test]
    fn single_plate_has_no_flow_area() {
        let input = Input {
            plates: 1,
            ..canonical()
        };
        assert_eq!(
            compute(&input),
            Err(VelocityError::DivisionByZero {
                stage: FlowStage::Channel
            })
        );
    }

    #[test]
    fn negative_gap_propagates() -> Result<(), VelocityError> {
        let input = Input {
            plate_thickness: Length::new::<meter>(0.005),
            ..canonical()
        };
        let results = compute(&input)?;
        assert!(results.flow_area.get::<square_meter>() < 0.0);
        assert!(results.velocity.get::<meter_per_second>() < 0.0);
        Ok(())
    }

    #[test]
    fn non_positive_port_diameter_skips_port() -> Result<(), VelocityError> {
        for d in [0.0, -0.1] {
            let input = Input {
                port_diameter: Some(Length::new::<meter>(d)),
                ..canonical()
            };
            assert_eq!(compute(&input)?.port, None);
        }
        Ok(())
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let input = Input {
            volume_rate: VolumeRate::new::<cubic_meter_per_hour>(f64::NAN),
            ..canonical()
        };
        assert_eq!(
            compute(&input),
            Err(VelocityError::NonFinite {
                field: InputField::VolumeRate,
                reason: ConstraintError::NotANumber,
            })
        );
    }

    proptest! {
        #[test]
        fn compute_is_deterministic(
            flow in 0.1..500.0_f64,
            channels in 1_u32..200,
            passes in 1_u32..4,
            diameter_mm in prop::option::of(-50_i32..300),
        ) {
            let input = Input {
                volume_rate: VolumeRate::new::<cubic_meter_per_hour>(flow),
                plates: channels * passes + 1,
                passes,
                port_diameter: diameter_mm.map(|d| Length::new::<millimeter>(f64::from(d))),
                ..canonical()
            };
            let first = compute(&input);
            let second = compute(&input);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn port_fields_follow_diameter(diameter_mm in prop::option::of(-50_i32..300)) {
            let input = Input {
                port_diameter: diameter_mm.map(|d| Length::new::<millimeter>(f64::from(d))),
                ..canonical()
            };
            let results = compute(&input).unwrap();
            let expects_port = diameter_mm.is_some_and(|d| d > 0);
            prop_assert_eq!(results.port.is_some(), expects_port);
        }
    }
}
