//! # Config Crate
//!
//! Centralized layout constants for the topological circuit geometry
//! pipeline. Lattice spacing, opacities and the default color table are
//! defined here so that every builder reads them from one immutable
//! [`constants::LayoutConfig`] value instead of ambient globals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{LayoutConfig, SPACE};
//!
//! let config = LayoutConfig::default();
//! // Lattice index 2 lands one full pitch from the origin.
//! assert_eq!(2.0 * SPACE, config.pitch());
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit Threading**: Builders receive a `&LayoutConfig`
//! - **No Dependencies**: Pure values and a validating constructor

pub mod constants;
