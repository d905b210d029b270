//! Human-readable narration of a completed calculation.
//!
//! Every value shown comes from the [`Input`] or the already computed
//! [`Results`], so the narration always agrees with what was returned.

use uom::si::{
    area::square_meter, length::meter, ratio::ratio, velocity::meter_per_second,
    volume_rate::{cubic_meter_per_hour, cubic_meter_per_second},
};

use super::{Input, Results};

/// One formatted line per calculation step, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Steps {
    /// Step 1: flow gap.
    pub flow_gap: String,

    /// Step 2: number of channels.
    pub channels: String,

    /// Step 3: total flow area.
    pub flow_area: String,

    /// Step 4: channel velocity.
    pub velocity: String,

    /// Port velocity, present only when the results carry port flow.
    pub port_velocity: Option<String>,
}

impl Steps {
    /// Iterates over the step lines in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.flow_gap.as_str()),
            Some(self.channels.as_str()),
            Some(self.flow_area.as_str()),
            Some(self.velocity.as_str()),
            self.port_velocity.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// Formats each step of a calculation as `symbol = formula = numbers = value unit`.
///
/// Lengths and velocities are shown to 4 decimals and areas to 6. Rounding
/// applies to the text only.
#[must_use]
pub fn describe(input: &Input, results: &Results) -> Steps {
    let q_per_hour = input.volume_rate.get::<cubic_meter_per_hour>();
    let q = input.volume_rate.get::<cubic_meter_per_second>();
    let gap = results.flow_gap.get::<meter>();
    let area = results.flow_area.get::<square_meter>();

    Steps {
        flow_gap: format!(
            "b = p - t = {} - {} = {gap:.4} m",
            echo(input.plate_pitch.get::<meter>()),
            echo(input.plate_thickness.get::<meter>()),
        ),
        channels: format!(
            "N_ch = (N_pl - 1) / N_pass = ({} - 1) / {} = {} channels",
            input.plates, input.passes, results.channels,
        ),
        flow_area: format!(
            "A_flow = N_ch × W_p × b × φ = {} × {} × {gap:.4} × {} = {area:.6} m²",
            results.channels,
            echo(input.plate_width.get::<meter>()),
            echo(input.corrugation_factor.get::<ratio>()),
        ),
        velocity: format!(
            "v = Q / A_flow = {} m³/h ({q:.6} m³/s) / {area:.6} = {:.4} m/s",
            echo(q_per_hour),
            results.velocity.get::<meter_per_second>(),
        ),
        port_velocity: results.port.map(|port| {
            format!(
                "v_port = Q / A_port = {q:.6} m³/s / {:.6} = {:.4} m/s",
                port.area.get::<square_meter>(),
                port.velocity.get::<meter_per_second>(),
            )
        }),
    }
}

/// Formats an input value in its shortest form.
///
/// Unit conversion can leave noise in the last bits (36 m³/h reads back as
/// 36.00000000000001), so values are snapped to 10 decimals first.
fn echo(value: f64) -> String {
    let scaled = value * 1e10;
    if scaled.is_finite() && scaled.abs() < 1e15 {
        format!("{}", scaled.round() / 1e10)
    } else {
        format!("{value}")
    }
}
