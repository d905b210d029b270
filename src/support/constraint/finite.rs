use uom::si::{Dimension, Quantity, Units};

use super::{Constrained, Constraint, ConstraintError};

/// Values that can report whether they are finite.
///
/// Implemented for `f64` and for every `f64`-backed [`uom`] quantity.
pub trait IsFinite {
    /// Returns `true` if the value is `NaN`.
    fn is_nan_value(&self) -> bool;

    /// Returns `true` if the value is neither `NaN` nor infinite.
    fn is_finite_value(&self) -> bool;
}

impl IsFinite for f64 {
    fn is_nan_value(&self) -> bool {
        self.is_nan()
    }

    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

impl<D, U> IsFinite for Quantity<D, U, f64>
where
    D: Dimension + ?Sized,
    U: Units<f64> + ?Sized,
{
    fn is_nan_value(&self) -> bool {
        self.value.is_nan()
    }

    fn is_finite_value(&self) -> bool {
        self.value.is_finite()
    }
}

/// Marker type enforcing that a value is finite (neither `NaN` nor infinite).
///
/// # Examples
///
/// ```
/// use phe_flow::support::constraint::{ConstraintError, Finite};
/// use uom::si::{f64::Length, length::meter};
///
/// assert!(Finite::new(Length::new::<meter>(-0.5)).is_ok());
/// assert_eq!(Finite::new(f64::NAN).unwrap_err(), ConstraintError::NotANumber);
/// assert_eq!(Finite::new(f64::INFINITY).unwrap_err(), ConstraintError::Infinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finite;

impl Finite {
    /// Constructs a [`Constrained<T, Finite>`] if the value is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] for `NaN` and
    /// [`ConstraintError::Infinite`] for either infinity.
    pub fn new<T: IsFinite>(value: T) -> Result<Constrained<T, Finite>, ConstraintError> {
        Constrained::<T, Finite>::new(value)
    }
}

impl<T: IsFinite> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan_value() {
            Err(ConstraintError::NotANumber)
        } else if value.is_finite_value() {
            Ok(())
        } else {
            Err(ConstraintError::Infinite)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, VolumeRate},
        length::meter,
        volume_rate::cubic_meter_per_hour,
    };

    #[test]
    fn floats() {
        assert!(Finite::new(0.0).is_ok());
        assert!(Finite::new(-1.5e300).is_ok());
        assert_eq!(Finite::new(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(Finite::new(f64::NEG_INFINITY), Err(ConstraintError::Infinite));
    }

    #[test]
    fn lengths() {
        assert!(Finite::new(Length::new::<meter>(0.004)).is_ok());
        assert!(Finite::new(Length::new::<meter>(f64::NAN)).is_err());
    }

    #[test]
    fn volume_rates() {
        let q = VolumeRate::new::<cubic_meter_per_hour>(36.0);
        assert_eq!(Finite::new(q).unwrap().into_inner(), q);

        let q = VolumeRate::new::<cubic_meter_per_hour>(f64::INFINITY);
        assert_eq!(Finite::new(q), Err(ConstraintError::Infinite));
    }
}
