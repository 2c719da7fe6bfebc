//! # Parity Curves
//!
//! Annual-rate curves keyed by tenor in years.
//!
//! A [`RateCurve`] is a sorted set of [`CurvePoint`]s. Looking up a tenor
//! first finds its [`Bracket`] (the pair of points around it, or a single
//! point past either end), then interpolates linearly inside the bracket.
//! Tenors beyond the curve take the rate of the nearest end point.
//!
//! ## Example
//!
//! ```rust
//! use parity_curves::prelude::*;
//!
//! let curve: RateCurve = "0.5:4.1,2:4.4,10:4.9".parse().unwrap();
//!
//! assert!((curve.rate_at(1.25).unwrap() - 4.25).abs() < 1e-12);
//! assert_eq!(curve.rate_at(30.0).unwrap(), 4.9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod curve;
pub mod error;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::{bracket, interpolate_rate, Bracket, CurvePoint, RateCurve};
    pub use crate::error::{CurveError, CurveResult};
}

pub use curve::{bracket, interpolate_rate, Bracket, CurvePoint, RateCurve};
pub use error::{CurveError, CurveResult};
