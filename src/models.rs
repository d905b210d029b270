//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the calculation lives. The model module re-exports the parts of the
//! `core` API that callers need and adds thin [`twine_core::Model`] adapters
//! on top. A single `core` may back several adapters (e.g., one returning bare
//! results and one returning a display-ready report).

pub mod thermal;
