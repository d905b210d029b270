use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while computing plate heat exchanger flow velocities.
///
/// Each variant describes an invalid configuration, not a transient fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VelocityError {
    /// The plate and pass counts do not produce a whole number of channels.
    #[error(
        "invalid configuration: number of channels must be an integer \
         ({plates} plates, {passes} passes); check plate count and pass configuration"
    )]
    Configuration {
        /// Number of plates in the pack.
        plates: u32,

        /// Number of passes.
        passes: u32,
    },

    /// A velocity was requested through a zero flow area.
    #[error("{stage} area cannot be zero")]
    DivisionByZero {
        /// Stage whose area was zero.
        stage: FlowStage,
    },

    /// A flow area evaluated to `NaN`, so no velocity can be derived from it.
    #[error("{stage} area is not a number")]
    UndefinedArea {
        /// Stage whose area was undefined.
        stage: FlowStage,
    },

    /// An input quantity was `NaN` or infinite.
    #[error("{field} is not finite: {reason}")]
    NonFinite {
        /// Offending input field.
        field: InputField,

        /// Underlying constraint violation.
        reason: ConstraintError,
    },
}

impl VelocityError {
    /// Maps a failed divisor check into the error for the given stage.
    pub(super) fn from_divisor(stage: FlowStage, err: ConstraintError) -> Self {
        match err {
            ConstraintError::Zero => Self::DivisionByZero { stage },
            _ => Self::UndefinedArea { stage },
        }
    }
}

/// Where along the flow path a velocity is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStage {
    /// Between the plates.
    Channel,

    /// Through the inlet/outlet port.
    Port,
}

impl fmt::Display for FlowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Channel => "channel flow",
            Self::Port => "port",
        })
    }
}

/// Real-valued input fields checked for finiteness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    VolumeRate,
    PlatePitch,
    PlateThickness,
    PlateWidth,
    CorrugationFactor,
    PortDiameter,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VolumeRate => "volumetric flow rate",
            Self::PlatePitch => "plate pitch",
            Self::PlateThickness => "plate thickness",
            Self::PlateWidth => "effective plate width",
            Self::CorrugationFactor => "corrugation factor",
            Self::PortDiameter => "port diameter",
        })
    }
}
