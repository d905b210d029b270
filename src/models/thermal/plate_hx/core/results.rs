//! Results of a plate heat exchanger velocity calculation.

use uom::si::{
    area::square_centimeter,
    f64::{Area, Length, Velocity},
    length::millimeter,
};

/// Flow characteristics derived for one fluid side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Results {
    /// Gap between adjacent plates.
    pub flow_gap: Length,

    /// Channels per pass.
    pub channels: u32,

    /// Total channel flow area.
    pub flow_area: Area,

    /// Mean channel velocity.
    pub velocity: Velocity,

    /// Port area and velocity, present only when a positive port diameter was given.
    pub port: Option<PortFlow>,
}

/// Flow through the inlet/outlet port.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortFlow {
    /// Port cross-sectional area.
    pub area: Area,

    /// Mean velocity through the port.
    pub velocity: Velocity,
}

impl Results {
    /// Flow gap in millimetres, as shown on a results panel.
    #[must_use]
    pub fn flow_gap_mm(&self) -> f64 {
        self.flow_gap.get::<millimeter>()
    }

    /// Channel flow area in square centimetres.
    #[must_use]
    pub fn flow_area_cm2(&self) -> f64 {
        self.flow_area.get::<square_centimeter>()
    }

    /// Port area in square centimetres, if a port was computed.
    #[must_use]
    pub fn port_area_cm2(&self) -> Option<f64> {
        self.port.map(|port| port.area.get::<square_centimeter>())
    }
}
