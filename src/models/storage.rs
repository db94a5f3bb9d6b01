//! Liquid storage models.
//!
//! This module contains models of storage vessels, currently the horizontal
//! cylindrical tanks used for propane, heating oil, and water.

pub mod horizontal_tank;
