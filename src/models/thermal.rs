//! Thermal systems models.
//!
//! This module contains models for thermal equipment such as heat exchangers.

pub mod plate_hx;
