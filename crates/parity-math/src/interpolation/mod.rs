//! Interpolation between tabulated points.
//!
//! - [`linear`]: straight line through two points, also used to extrapolate
//!   past either end of a table

mod linear;

pub use linear::linear;
