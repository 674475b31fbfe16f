use std::fmt;

use crate::integration::integrationerror::{
    IntegrationError,
    Result
};

/// Absolute distance from a whole number under which `(upper - lower) / step_size`
/// is treated as an exact multiple of the step. A snapped last slice is at most
/// `step_size * SNAP_TOLERANCE` wider than the others.
const SNAP_TOLERANCE: f64 = 1e-9;

/// The interval `[lower, upper]` cut into slices of `step_size`.
///
/// Samples are `lower + i * step_size` followed by `upper` itself. The final
/// sample never overshoots `upper`: when the width is not a multiple of the
/// step, the last slice is shorter than `step_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    lower: f64,
    upper: f64,
    step_size: f64,
    stepped_samples: usize,
    exact_multiple: bool
}

impl Bounds {
    pub fn new(lower: f64, upper: f64, step_size: f64) -> Result<Bounds> {
        let invalid = IntegrationError::InvalidBounds { lower, upper, step_size };
        if !(lower.is_finite() && upper.is_finite() && step_size.is_finite()) {
            return Err(invalid);
        }
        if step_size <= 0.0 || upper <= lower {
            return Err(invalid);
        }

        let ratio = (upper - lower) / step_size;
        if !ratio.is_finite() || ratio >= (isize::MAX / 2) as f64 {
            return Err(invalid);
        }
        let nearest = ratio.round();
        let (stepped_samples, exact_multiple) = if nearest >= 1.0 && (ratio - nearest).abs() <= SNAP_TOLERANCE {
            (nearest as usize, true)
        } else {
            let whole = ratio.floor() as usize;
            // lower + whole * step_size can round onto or past upper
            if whole >= 1 && lower + whole as f64 * step_size >= upper {
                (whole, true)
            } else {
                (whole + 1, false)
            }
        };

        Ok(Bounds { lower, upper, step_size, stepped_samples, exact_multiple })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Number of samples, always at least 2.
    pub fn len(&self) -> usize {
        self.stepped_samples + 1
    }

    pub fn slice_count(&self) -> usize {
        self.stepped_samples
    }

    /// True when the last slice is exactly `step_size` wide.
    pub fn is_exact_multiple(&self) -> bool {
        self.exact_multiple
    }

    /// The `index`-th sample, or `None` past the end.
    pub fn sample(&self, index: usize) -> Option<f64> {
        if index < self.stepped_samples {
            Some(self.lower + index as f64 * self.step_size)
        } else if index == self.stepped_samples {
            Some(self.upper)
        } else {
            None
        }
    }

    pub fn iter(&self) -> BoundsIterator<'_> {
        BoundsIterator {
            bounds: self,
            index: 0
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bounds: [{} - {}], step_size: {}", self.lower, self.upper, self.step_size)
    }
}

impl<'a> IntoIterator for &'a Bounds {
    type Item = f64;
    type IntoIter = BoundsIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct BoundsIterator<'a> {
    bounds: &'a Bounds,
    index: usize
}

impl<'a> Iterator for BoundsIterator<'a> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.bounds.sample(self.index);
        if result.is_some() {
            self.index += 1;
        }
        result
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for BoundsIterator<'a> {}
