//! # Utils
//!
//! Ambient engineering concerns that sit alongside the analytics core rather
//! than being part of it: structured logging setup and a couple of small
//! numeric/test helpers shared by the unit-test suites across the crate.
//!
//! ## Logger (`logger`)
//!
//! Idempotent `tracing` subscriber setup, configurable via the `LOGLEVEL`
//! environment variable:
//!
//! ```rust
//! use optionanalytics::utils::setup_logger;
//!
//! setup_logger();
//! ```
//!
//! ## Other (`others`)
//!
//! A tolerance-based floating-point equality check used by test assertions
//! that don't need the stricter epsilon `approx::assert_relative_eq!` takes.
//!
//! ## Tests (`tests`)
//!
//! `assert_positivef64_relative_eq!`, a relative-equality assertion for
//! [`crate::model::positive::Positive`] values, mirroring the semantics of
//! `approx::assert_relative_eq!` for the newtype.

pub mod logger;
pub mod others;

pub use logger::{setup_logger, setup_logger_with_level};
pub(crate) use others::approx_equal;
