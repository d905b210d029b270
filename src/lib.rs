//! # PHE Flow
//!
//! Flow velocity models for plate heat exchangers, built for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given the plate pack geometry and a volumetric flow rate, the models
//! compute the flow gap, channel count, channel flow area, channel velocity,
//! and optionally the port velocity, then assess the channel velocity
//! against fouling and erosion limits.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! All quantities are [`uom`] types, so callers may supply them in any unit
//! (e.g., a flow rate in m³/h and a plate pitch in mm).
//!
//! Note: Only utilities at the crate-level (in [`support`]) and the re-exports
//! in each model module are part of the public API. A model's `core` module
//! remains private.

pub mod models;
pub mod support;
