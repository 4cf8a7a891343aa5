//! Per-tick aerodynamic force model for a powered, steerable flying body.
//!
//! The [`model`] module is the engine-agnostic core: every fixed step it turns
//! control inputs and the current rigid-body state into one world-frame force
//! and one world-frame torque. The [`components`], [`systems`] and [`plugins`]
//! modules adapt that core to a Bevy app, including a reference integrator for
//! headless runs.

pub mod components;
pub mod config;
pub mod model;
pub mod plugins;
pub mod systems;
pub mod utils;
