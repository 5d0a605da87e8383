//! # Skirmish Headless
//!
//! The external frame/input collaborator for the simulation core,
//! packaged as a headless binary for demos and CI: loads a RON
//! scenario, drives a strict tick-then-render loop at a fixed
//! timestep, applies scripted commands, and renders frames as ASCII
//! to the log.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ascii;
pub mod runner;
pub mod scenario;
