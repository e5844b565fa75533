//! # Sunbright Library
//!
//! Internal library for the sunbright binary.
//!
//! This library exists to enable testing of the internals and to keep CLI
//! dispatch (main.rs) separate from application logic.
//!
//! ## Architecture
//!
//! - **Core Logic**: `core` maps sun altitude to brightness and theme and runs
//!   the one-shot [`core::Pipeline`]
//! - **Geographic**: `geo` holds coordinates and the sun position provider
//!   (NREL SPA)
//! - **Backends**: `backend` drives `ddcutil` and `plasma-apply-colorscheme`
//!   (or just reports in dry-run mode)
//! - **Configuration**: `config` for TOML-based settings with validation
//! - **Infrastructure**: argument parsing, time sources, logging and utilities

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod backend;
pub mod config;
pub mod constants;
pub mod core;
pub mod geo;
pub mod time_source;
pub mod utils;
