use std::fmt::Display;

use crate::integration::bounds::Bounds;
use crate::integration::diagnosticsink::{
    DiagnosticSink,
    SilentSink
};
use crate::integration::integrationerror::{
    IntegrationError,
    Result
};
use crate::integration::integrationrequest::IntegrationRequest;
use crate::integration::quadraturerule::QuadratureRule;
use crate::math::curve::curve::Curve;
use crate::math::polynomial::polynomial::Polynomial;

/// Sums per-slice quadrature estimates over a sample sequence.
///
/// Slices are visited strictly left to right and added to one running total,
/// so repeated runs are bit-identical.
pub struct Integrator<'a> {
    sink: &'a dyn DiagnosticSink
}

impl<'a> Integrator<'a> {
    pub fn new(sink: &'a dyn DiagnosticSink) -> Integrator<'a> {
        Integrator { sink }
    }

    pub fn silent() -> Integrator<'static> {
        Integrator { sink: &SilentSink }
    }

    pub fn integrate<C>(&self, curve: &C, bounds: &Bounds, rule: QuadratureRule) -> Result<f64>
        where C: Curve + Display + ?Sized {
        self.sink.describe(bounds, &curve, rule);
        self.accumulate(curve, bounds.iter(), rule)
    }

    pub fn integrate_request(&self, request: &IntegrationRequest) -> Result<f64> {
        self.integrate(request.polynomial(), request.bounds(), request.rule())
    }

    /// Walks `samples` pairwise, `(s[0], s[1]), (s[1], s[2]), ...`.
    pub fn accumulate<C, I>(&self, curve: &C, samples: I, rule: QuadratureRule) -> Result<f64>
        where C: Curve + ?Sized,
              I: IntoIterator<Item = f64> {
        let mut samples = samples.into_iter();
        let mut lower = samples
            .next()
            .ok_or(IntegrationError::DegenerateSamples { count: 0 })?;

        let mut total_area = 0.0;
        let mut slice_count = 0;
        for upper in samples {
            let area = rule.estimate(curve, lower, upper)?;
            self.sink.slice(slice_count, lower, upper, area);
            total_area += area;
            slice_count += 1;
            lower = upper;
        }
        if slice_count == 0 {
            return Err(IntegrationError::DegenerateSamples { count: 1 });
        }

        self.sink.finish(rule, slice_count, total_area);
        Ok(total_area)
    }
}

/// Area under `polynomial` over `bounds` with no diagnostic output.
pub fn integrate(polynomial: &Polynomial, bounds: &Bounds, rule: QuadratureRule) -> Result<f64> {
    Integrator::silent().integrate(polynomial, bounds, rule)
}

pub fn integrate_request(request: &IntegrationRequest) -> Result<f64> {
    Integrator::silent().integrate_request(request)
}
