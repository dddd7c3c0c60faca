//! # uniform-sum
//!
//! The Irwin–Hall (uniform sum) distribution in pure Rust, no-std compatible:
//! closed-form density, cumulative distribution, survival, quantile, and
//! moments of the sum of `n` independent standard-uniform variables.
//!
//! ## Quick start
//!
//! ```
//! use uniform_sum::stats::{ContinuousDistribution, IrwinHall};
//!
//! let d = IrwinHall::<f64>::new(2).unwrap();
//! assert!((d.cdf(1.0) - 0.5).abs() < 1e-14); // midpoint of [0, 2]
//! assert!((d.pdf(0.5) - d.pdf(1.5)).abs() < 1e-14); // symmetric about n/2
//! assert!((d.cdf(0.3) + d.sf(0.3) - 1.0).abs() < 1e-15);
//! ```
//!
//! Slice in, `Vec` out (requires `alloc`):
//!
//! ```
//! use uniform_sum::stats::irwin_hall::{cumulative_probability, survival_probability};
//!
//! let xs = [0.0_f64, 0.5, 1.0, 1.5, 2.0];
//! let f = cumulative_probability(&xs, 2).unwrap();
//! let s = survival_probability(&xs, 2).unwrap();
//! for (a, b) in f.iter().zip(&s) {
//!     assert!((a + b - 1.0).abs() < 1e-15);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`stats`] — [`ContinuousDistribution`](stats::ContinuousDistribution)
//!   trait, [`StatsError`](stats::StatsError), batch helpers, and the
//!   [`IrwinHall`](stats::IrwinHall) distribution with its slice-level
//!   free functions in [`stats::irwin_hall`].
//!
//! - [`special`] — Factorials and binomial coefficients, direct and in log
//!   space.
//!
//! - [`traits`] — Element traits: [`Scalar`] and [`FloatScalar`] (f32/f64).
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` impls |
//! | `alloc` | via std | Slice-level functions returning `Vec` |
//! | `libm`  | no      | Pure-Rust software float fallback for `no_std` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod special;
pub mod stats;
pub mod traits;

pub use stats::{ContinuousDistribution, IrwinHall, Moments, StatsError};
pub use traits::{FloatScalar, Scalar};
