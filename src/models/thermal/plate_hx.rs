//! Plate heat exchanger flow velocity models.
//!
//! This module provides [`twine_core::Model`] implementations that compute
//! channel and port velocities for one fluid side of a plate heat exchanger.
//! The computational core is in the internal [`core`] module; its public
//! pieces are re-exported here.
//!
//! - [`PlateHx`] maps an [`Input`] to [`Results`].
//! - [`PlateHxReport`] also narrates the steps and assesses the velocity,
//!   returning a [`Report`].
//!
//! # Example
//!
//! ```
//! use phe_flow::models::thermal::plate_hx::{Input, PlateHxReport, Severity};
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Length, Ratio, VolumeRate},
//!     length::meter,
//!     ratio::ratio,
//!     velocity::meter_per_second,
//!     volume_rate::cubic_meter_per_hour,
//! };
//!
//! let input = Input {
//!     volume_rate: VolumeRate::new::<cubic_meter_per_hour>(36.0),
//!     plates: 51,
//!     passes: 2,
//!     plate_pitch: Length::new::<meter>(0.004),
//!     plate_thickness: Length::new::<meter>(0.0006),
//!     plate_width: Length::new::<meter>(0.5),
//!     corrugation_factor: Ratio::new::<ratio>(1.15),
//!     port_diameter: None,
//! };
//!
//! let report = PlateHxReport::default().call(&input).unwrap();
//!
//! assert_eq!(report.results.channels, 25);
//! assert!((report.results.velocity.get::<meter_per_second>() - 0.2046).abs() < 1e-4);
//! assert_eq!(report.verdict.severity, Severity::Warning);
//! assert_eq!(report.steps.flow_gap, "b = p - t = 0.004 - 0.0006 = 0.0034 m");
//! ```

pub(crate) mod core;

pub use self::core::{
    FlowStage, Input, InputField, PortFlow, Results, Severity, Steps, VelocityBand,
    VelocityError, VelocityLimits, Verdict, channel_velocity, classify, compute, describe,
    flow_area, flow_gap, number_of_channels, port_area, port_velocity,
};

use twine_core::Model;

/// Computes plate heat exchanger flow characteristics.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlateHx;

impl Model for PlateHx {
    type Input = Input;
    type Output = Results;
    type Error = VelocityError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        compute(input)
    }
}

/// Computes flow characteristics and prepares them for display.
///
/// The velocity is assessed against [`limits`](Self::limits), which default to
/// the conventional 0.3 to 3 m/s range with a 0.6 to 2 m/s optimum.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlateHxReport {
    /// Band edges used for the velocity assessment.
    pub limits: VelocityLimits,
}

/// Everything a results panel shows for one calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Computed flow characteristics.
    pub results: Results,

    /// Narrated calculation steps.
    pub steps: Steps,

    /// Assessment of the channel velocity.
    pub verdict: Verdict,
}

impl Model for PlateHxReport {
    type Input = Input;
    type Output = Report;
    type Error = VelocityError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let results = compute(input)?;
        Ok(Report {
            steps: describe(input, &results),
            verdict: self.limits.classify(results.velocity),
            results,
        })
    }
}
