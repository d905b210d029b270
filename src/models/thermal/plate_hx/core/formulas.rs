//! Closed-form relations for plate pack flow geometry.
//!
//! Symbols follow the usual PHE notation:
//!
//! - `b = p - t`: flow gap from pitch `p` and thickness `t`
//! - `N_ch = (N_pl - 1) / N_pass`: channels per pass on one fluid side
//! - `A_flow = N_ch × W_p × b × φ`: total channel flow area
//! - `v = Q / A_flow`: mean channel velocity
//! - `A_port = π × D_port² / 4`, `v_port = Q / A_port`: port area and velocity

use uom::si::f64::{Area, Length, Ratio, Velocity, VolumeRate};

use crate::support::flow::{circular_area, mean_velocity};

use super::{FlowStage, VelocityError};

/// Flow gap between adjacent plates, `b = p - t`.
///
/// A thickness at or above the pitch gives a zero or negative gap, which is
/// returned as is.
#[must_use]
pub fn flow_gap(plate_pitch: Length, plate_thickness: Length) -> Length {
    plate_pitch - plate_thickness
}

/// Number of channels per pass, `N_ch = (N_pl - 1) / N_pass`.
///
/// A plate pack of `N_pl` plates has `N_pl - 1` gaps, shared evenly between
/// the passes. The result is a physical count and is never rounded.
///
/// # Errors
///
/// Returns [`VelocityError::Configuration`] if the gaps do not divide evenly
/// among the passes, or if either count is zero.
pub fn number_of_channels(plates: u32, passes: u32) -> Result<u32, VelocityError> {
    let invalid = VelocityError::Configuration { plates, passes };

    let gaps = plates.checked_sub(1).ok_or(invalid)?;
    if passes == 0 || gaps % passes != 0 {
        return Err(invalid);
    }

    Ok(gaps / passes)
}

/// Total channel flow area, `A_flow = N_ch × W_p × b × φ`.
#[must_use]
pub fn flow_area(channels: u32, plate_width: Length, flow_gap: Length, corrugation: Ratio) -> Area {
    plate_width * f64::from(channels) * flow_gap * corrugation
}

/// Mean velocity in the channels, `v = Q / A_flow`.
///
/// # Errors
///
/// Returns [`VelocityError::DivisionByZero`] if `flow_area` is exactly zero.
pub fn channel_velocity(volume_rate: VolumeRate, flow_area: Area) -> Result<Velocity, VelocityError> {
    mean_velocity(volume_rate, flow_area)
        .map_err(|err| VelocityError::from_divisor(FlowStage::Channel, err))
}

/// Port cross-sectional area, `A_port = π × D_port² / 4`.
#[must_use]
pub fn port_area(port_diameter: Length) -> Area {
    circular_area(port_diameter)
}

/// Mean velocity through the port, `v_port = Q / A_port`.
///
/// # Errors
///
/// Returns [`VelocityError::DivisionByZero`] if `port_area` is exactly zero.
pub fn port_velocity(volume_rate: VolumeRate, port_area: Area) -> Result<Velocity, VelocityError> {
    mean_velocity(volume_rate, port_area)
        .map_err(|err| VelocityError::from_divisor(FlowStage::Port, err))
}
