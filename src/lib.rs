//! # paramdist
//!
//! Closed-form parametric probability distributions for uncertainty
//! quantification, no-std compatible. Every density, distribution function,
//! quantile, moment and gradient is evaluated in closed form, with no
//! numerical integration or root finding.
//!
//! ## Quick start
//!
//! ```
//! use paramdist::stats::{ContinuousDistribution, Exponential, ParametricDistribution};
//!
//! let mut e = Exponential::new(2.0_f64, 1.0).unwrap();
//! assert_eq!(e.pdf(1.0), 2.0);
//! assert_eq!(e.parameter_description(), ["lambda", "gamma"]);
//!
//! e.set_parameter([4.0, 0.0]).unwrap();
//! assert!((e.mean() - 0.25).abs() < 1e-15);
//! assert!(e.set_lambda(-1.0).is_err());
//! assert_eq!(e.lambda(), 4.0);
//! ```
//!
//! ## Modules
//!
//! - [`stats`] — The distribution contract ([`stats::ContinuousDistribution`],
//!   [`stats::ParametricDistribution`]) and the shifted [`stats::Exponential`]
//!   distribution. Support ranges are [`stats::Interval`] values.
//!
//! - [`special`] — Special functions used by the closed forms ([`special::factorial`]).
//!
//! - [`traits`] — Element traits: [`Scalar`] and [`FloatScalar`] (`f32`, `f64`).
//!
//! ## Randomness
//!
//! Realizations take the generator as `&mut dyn rand::RngCore`; any `rand`
//! generator works and its thread-safety is the caller's concern.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` |
//! | `alloc`   | via std  | Batch evaluation, sampling into `Vec`, boxed polymorphic clone |
//! | `libm`    | baseline | Pure-Rust software float fallback |
//! | `serde`   | no       | Persistence of distribution parameters |
//! | `all`     | no       | All features: `std` + `serde` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod special;
pub mod stats;
pub mod traits;

pub use num_complex::Complex;
pub use stats::{ContinuousDistribution, Exponential, Interval, ParametricDistribution, StatsError};
pub use traits::{FloatScalar, Scalar};
