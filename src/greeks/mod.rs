//! Greek calculation helpers shared across the pricing-model family (C2).
//!
//! Closed-form models ([`crate::pricing::black_scholes`] and the American
//! approximations built on it) get their Greeks from [`utils::bs_greeks`].
//! Lattice and Monte-Carlo models have no closed form and instead use the
//! finite-difference and lattice-node extraction helpers in [`numerical`].

pub mod numerical;
pub mod utils;

pub use utils::{d1, d2};
