//! Type-level numeric constraints for flow quantities.
//!
//! A [`Constrained<T, C>`] wraps a value that has been checked once, at
//! construction, against the marker constraint `C`. After that the wrapper
//! can be passed around without re-validating.
//!
//! # Provided constraints
//!
//! - [`Finite`]: Neither `NaN` nor infinite
//! - [`NonZero`]: Not equal to zero
//! - [`StrictlyPositive`]: Greater than zero
//!
//! Each marker also has an associated `new()` constructor
//! (e.g., `NonZero::new(area)`).
//!
//! # Extending
//!
//! Implement [`Constraint<T>`] for your own zero-sized marker type to add a
//! new invariant.

mod finite;
mod non_zero;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use finite::{Finite, IsFinite};
pub use non_zero::NonZero;
pub use strictly_positive::StrictlyPositive;

/// A numeric invariant checked when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that `value` satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Reason a value failed a [`Constraint`].
///
/// This enum is marked `#[non_exhaustive]` and may grow new variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is infinite")]
    Infinite,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use phe_flow::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::millimeter};
///
/// let pitch = Constrained::<_, StrictlyPositive>::new(Length::new::<millimeter>(4.0)).unwrap();
/// assert_eq!(pitch.into_inner(), Length::new::<millimeter>(4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
