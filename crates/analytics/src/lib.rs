//! # Perch Analytics Engine
//!
//! This crate provides the tools for evaluating a short-term-rental property
//! as an investment. It acts as the "unbiased judge" of the system.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `MetricsEngine` is a stateless calculator.
//!   It takes a `Property` as input and produces a `CalculationResult` as
//!   output, fresh on every call. Results are never cached or accumulated:
//!   the surrounding UI recomputes them per keystroke while the user drags
//!   assumption sliders, so a call must stay allocation-light.
//! - **Total over its domain:** The engine never panics and raises no errors.
//!   Metrics that are undefined for a given input (a zero-year loan term, a
//!   zero purchase price) come back as `None` rather than a crash, and the
//!   caller renders them as "N/A".
//!
//! ## Public API
//!
//! - `MetricsEngine`: The main struct that contains the calculation logic.
//! - `CalculationResult`: The standardized struct that holds the derived
//!   investment metrics.
//! - `format_currency` / `format_percent`: presentation helpers for
//!   rendering engine output.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod format;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::MetricsEngine;
pub use format::{format_currency, format_percent};
pub use report::CalculationResult;
