//! # Config Crate
//!
//! Centralized configuration constants for the cylindrical relief pipeline.
//! Physical defaults, tolerances and limits are defined here so the mesh
//! library and the command line tool agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{cylinder_radius, DepthMode, ReliefConfig, PIXEL_SIZE};
//!
//! let config = ReliefConfig::default();
//! assert_eq!(config.pixel_size, PIXEL_SIZE);
//! assert_eq!(config.depth, DepthMode::FractionOfRadius(0.1));
//!
//! // A 100 pixel wide image wraps into a cylinder whose circumference
//! // is exactly 100 pixels long.
//! let radius = cylinder_radius(100, PIXEL_SIZE);
//! let circumference = radius * std::f64::consts::TAU;
//! assert!((circumference - 100.0 * PIXEL_SIZE).abs() < 1e-12);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit Depth**: Carve depth is either a fraction of the radius or an
//!   absolute length, never an implicit mix of both
//! - **No Dependencies**: This crate stays free of third-party crates

pub mod constants;
