//! # Parity Math
//!
//! Numerical building blocks for the Parity bond valuation library.
//!
//! - **Solvers**: the [`RootFinder`](solvers::RootFinder) interface and a
//!   derivative-free, line-searched Newton solver
//! - **Interpolation**: two-point linear interpolation and extrapolation
//!
//! Objectives are fallible (`Fn(f64) -> MathResult<f64>`), so a function
//! that is undefined at a trial point reports a [`MathError::Domain`] instead
//! of producing a misleading number.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::linear;
    pub use crate::solvers::{
        newton_raphson_numerical, NewtonSolver, RootFinder, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
