//! Rate curve, bracketing, and interpolation.

use std::fmt;
use std::str::FromStr;

use parity_math::interpolation::linear;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// A single curve node: annual rate (percent) at a tenor (years).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Tenor in years.
    pub tenor: f64,
    /// Annual rate in percent.
    pub rate: f64,
}

impl CurvePoint {
    /// Creates a curve point.
    #[must_use]
    pub fn new(tenor: f64, rate: f64) -> Self {
        Self { tenor, rate }
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tenor, self.rate)
    }
}

/// The curve points that bound a tenor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket {
    /// A single point: the tenor is at or beyond one end of the curve, or the
    /// curve has one point.
    Point(CurvePoint),
    /// Two neighbouring points with `left.tenor < tenor <= right.tenor`.
    Segment {
        /// Nearest point strictly below the tenor.
        left: CurvePoint,
        /// Nearest point at or above the tenor.
        right: CurvePoint,
    },
}

/// A tenor-to-rate curve.
///
/// Points are kept sorted by tenor. A curve always has at least one point and
/// never holds two points with the same tenor.
///
/// # Example
///
/// ```rust
/// use parity_curves::{CurvePoint, RateCurve};
///
/// let curve = RateCurve::from_pairs(&[(2.0, 4.4), (0.5, 4.1)]).unwrap();
/// assert_eq!(curve.points()[0], CurvePoint::new(0.5, 4.1));
/// assert_eq!(curve.rate_at(0.5).unwrap(), 4.1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CurvePoint>", into = "Vec<CurvePoint>")]
pub struct RateCurve {
    points: Vec<CurvePoint>,
}

impl RateCurve {
    /// Creates a curve from points in any order.
    ///
    /// # Errors
    ///
    /// - `CurveError::EmptyCurve` if there are no points
    /// - `CurveError::NonFinitePoint` if a tenor or rate is NaN or infinite
    /// - `CurveError::DuplicateTenor` if two points share a tenor
    pub fn new(points: impl IntoIterator<Item = CurvePoint>) -> CurveResult<Self> {
        let mut points: Vec<CurvePoint> = points.into_iter().collect();
        if points.is_empty() {
            return Err(CurveError::EmptyCurve);
        }

        if let Some(bad) = points
            .iter()
            .find(|p| !(p.tenor.is_finite() && p.rate.is_finite()))
        {
            return Err(CurveError::NonFinitePoint {
                tenor: bad.tenor,
                rate: bad.rate,
            });
        }

        points.sort_by(|a, b| a.tenor.total_cmp(&b.tenor));

        if let Some(pair) = points.windows(2).find(|w| w[0].tenor == w[1].tenor) {
            return Err(CurveError::DuplicateTenor {
                tenor: pair[1].tenor,
            });
        }

        Ok(Self { points })
    }

    /// Creates a curve from `(tenor, rate)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> CurveResult<Self> {
        Self::new(pairs.iter().map(|&(tenor, rate)| CurvePoint::new(tenor, rate)))
    }

    /// Returns the points in ascending tenor order.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a curve cannot be built without points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the bracket around `tenor`.
    #[must_use]
    pub fn bracket(&self, tenor: f64) -> Bracket {
        // Index of the first point with tenor >= the query.
        let split = self.points.partition_point(|p| p.tenor < tenor);

        if split == self.points.len() {
            return Bracket::Point(self.points[split - 1]);
        }
        if split == 0 {
            return Bracket::Point(self.points[0]);
        }

        Bracket::Segment {
            left: self.points[split - 1],
            right: self.points[split],
        }
    }

    /// Returns the interpolated rate at `tenor`.
    pub fn rate_at(&self, tenor: f64) -> CurveResult<f64> {
        interpolate_rate(&self.bracket(tenor), tenor)
    }
}

impl TryFrom<Vec<CurvePoint>> for RateCurve {
    type Error = CurveError;

    fn try_from(points: Vec<CurvePoint>) -> CurveResult<Self> {
        Self::new(points)
    }
}

impl From<RateCurve> for Vec<CurvePoint> {
    fn from(curve: RateCurve) -> Self {
        curve.points
    }
}

impl FromStr for RateCurve {
    type Err = CurveError;

    /// Parses `tenor:rate` pairs separated by commas, e.g. `0.5:4.1,2:4.4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let points = s
            .split(',')
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(parse_point)
            .collect::<CurveResult<Vec<_>>>()?;

        Self::new(points)
    }
}

fn parse_point(fragment: &str) -> CurveResult<CurvePoint> {
    let (tenor, rate) = fragment
        .split_once(':')
        .ok_or_else(|| CurveError::parse(fragment, "expected tenor:rate"))?;

    let tenor = tenor
        .trim()
        .parse::<f64>()
        .map_err(|e| CurveError::parse(fragment, format!("bad tenor: {e}")))?;
    let rate = rate
        .trim()
        .parse::<f64>()
        .map_err(|e| CurveError::parse(fragment, format!("bad rate: {e}")))?;

    Ok(CurvePoint::new(tenor, rate))
}

impl fmt::Display for RateCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{point}")?;
        }
        Ok(())
    }
}

/// Returns the bracket around `tenor` on `curve`.
///
/// Free-function form of [`RateCurve::bracket`].
#[must_use]
pub fn bracket(tenor: f64, curve: &RateCurve) -> Bracket {
    curve.bracket(tenor)
}

/// Evaluates a bracket at `tenor`.
///
/// A point bracket returns its rate unchanged. A segment is evaluated on the
/// line through both points, so a tenor equal to `right.tenor` returns
/// `right.rate` exactly.
///
/// # Errors
///
/// Returns `CurveError::Interpolation` for a segment whose two tenors
/// coincide, which a [`RateCurve`] never produces.
pub fn interpolate_rate(bracket: &Bracket, tenor: f64) -> CurveResult<f64> {
    match *bracket {
        Bracket::Point(point) => Ok(point.rate),
        Bracket::Segment { left, right } => Ok(linear(
            left.tenor, left.rate, right.tenor, right.rate, tenor,
        )?),
    }
}
