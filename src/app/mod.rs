//! Application core — pure domain logic, zero I/O.
//!
//! This module wires the control-loop building blocks in
//! [`crate::control`] into a single per-tick cycle.  All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
