use crate::integration::integrationerror::Result;

/// A single-variable function the quadrature rules can sample.
pub trait Curve {
    fn value(&self, x: f64) -> Result<f64>;

    /// Smallest input the curve is defined at, if it is restricted.
    fn min_x(&self) -> Option<f64> {
        None
    }
}
