use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is not equal to zero.
///
/// Useful for divisors: a `Constrained<Area, NonZero>` can be divided into
/// without a zero check at the call site. Negative values are allowed.
///
/// # Examples
///
/// ```
/// use phe_flow::support::constraint::NonZero;
/// use uom::si::{area::square_meter, f64::Area};
///
/// assert!(NonZero::new(Area::new::<square_meter>(-0.01)).is_ok());
/// assert!(NonZero::new(Area::new::<square_meter>(0.0)).is_err());
/// assert!(NonZero::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero (of either sign) or `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
