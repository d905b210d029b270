use uom::si::f64::{Length, Ratio, VolumeRate};

use crate::support::constraint::{Finite, IsFinite, StrictlyPositive};

use super::{InputField, VelocityError};

/// Geometry and operating point of one fluid side of a plate heat exchanger.
///
/// No physical plausibility is enforced beyond what [`compute`](super::compute)
/// checks: a thickness at or above the pitch, or a corrugation factor outside
/// the usual 1.04 to 1.25 band, is computed as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    /// Volumetric flow rate on this side.
    pub volume_rate: VolumeRate,

    /// Number of physical plates in the pack.
    pub plates: u32,

    /// Number of passes the fluid makes through the pack.
    pub passes: u32,

    /// Centre-to-centre plate spacing.
    pub plate_pitch: Length,

    /// Plate thickness.
    pub plate_thickness: Length,

    /// Effective plate width.
    pub plate_width: Length,

    /// Corrugation factor (φ), the effective-to-flat flow area ratio.
    pub corrugation_factor: Ratio,

    /// Port diameter, if port velocity is wanted.
    pub port_diameter: Option<Length>,
}

impl Input {
    /// Returns the port diameter if it should produce port outputs.
    ///
    /// Only a present, strictly positive diameter counts.
    pub(super) fn effective_port_diameter(&self) -> Option<Length> {
        self.port_diameter
            .and_then(|d| StrictlyPositive::new(d).ok())
            .map(|d| d.into_inner())
    }

    /// Rejects `NaN` and infinite quantities.
    pub(super) fn check_finite(&self) -> Result<(), VelocityError> {
        check(InputField::VolumeRate, self.volume_rate)?;
        check(InputField::PlatePitch, self.plate_pitch)?;
        check(InputField::PlateThickness, self.plate_thickness)?;
        check(InputField::PlateWidth, self.plate_width)?;
        check(InputField::CorrugationFactor, self.corrugation_factor)?;
        if let Some(diameter) = self.port_diameter {
            check(InputField::PortDiameter, diameter)?;
        }
        Ok(())
    }
}

fn check(field: InputField, value: impl IsFinite) -> Result<(), VelocityError> {
    Finite::new(value)
        .map(|_| ())
        .map_err(|reason| VelocityError::NonFinite { field, reason })
}
