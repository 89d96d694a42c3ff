//! # scaling-loss
//!
//! Scaling-law loss estimation for language-model configurations.
//!
//! Three fixed power laws (Kaplan et al. 2020, arXiv:2001.08361) map
//! compute, dataset size and parameter count to an isolated loss each.
//! The estimated loss of a configuration is the worst of the three, and the
//! dimension that produced it is reported as the bottleneck.
//!
//! ## Modules
//!
//! - [`model`] — Per-dimension power-law table (constants)
//! - [`law`] — Isolated loss, estimated loss and bottleneck selection
//! - [`input`] — Text field parsing and per-field outcomes
//! - [`render`] — Text lines and serializable reports
//! - [`session`] — Event-driven recomputation over three input fields
//! - [`curve`] — Log-spaced curve samples for plotting a dimension
//! - [`equation`] — Plain-text and LaTeX rendering of each power law
//! - [`config`] — YAML configuration for default inputs
//! - [`error`] — Error types

pub mod config;
pub mod curve;
pub mod equation;
pub mod error;
pub mod input;
pub mod law;
pub mod model;
pub mod render;
pub mod session;
