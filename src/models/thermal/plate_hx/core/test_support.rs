use uom::si::{
    f64::{Length, Ratio, VolumeRate},
    length::meter,
    ratio::ratio,
    volume_rate::cubic_meter_per_hour,
};

use super::Input;

/// Worked example: 36 m³/h through 51 plates in 2 passes, no port.
pub(crate) fn canonical() -> Input {
    Input {
        volume_rate: VolumeRate::new::<cubic_meter_per_hour>(36.0),
        plates: 51,
        passes: 2,
        plate_pitch: Length::new::<meter>(0.004),
        plate_thickness: Length::new::<meter>(0.0006),
        plate_width: Length::new::<meter>(0.5),
        corrugation_factor: Ratio::new::<ratio>(1.15),
        port_diameter: None,
    }
}

/// The worked example with a 100 mm port.
pub(crate) fn canonical_with_port() -> Input {
    Input {
        port_diameter: Some(Length::new::<meter>(0.1)),
        ..canonical()
    }
}
