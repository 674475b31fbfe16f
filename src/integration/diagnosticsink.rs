use std::fmt::Display;

use crate::integration::bounds::Bounds;
use crate::integration::quadraturerule::QuadratureRule;

/// Receives descriptive output from an integration run.
///
/// Reporting never affects the numeric result. Callers that want no output
/// pass `SilentSink`.
pub trait DiagnosticSink {
    fn describe(&self, bounds: &Bounds, curve: &dyn Display, rule: QuadratureRule);

    fn slice(&self, _index: usize, _lower: f64, _upper: f64, _area: f64) {}

    fn finish(&self, _rule: QuadratureRule, _slice_count: usize, _area: f64) {}
}

pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn describe(&self, _bounds: &Bounds, _curve: &dyn Display, _rule: QuadratureRule) {}
}

/// Forwards diagnostics to the `log` facade: descriptions at `info`, the
/// slice count at `debug` and every slice at `trace`.
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn describe(&self, bounds: &Bounds, curve: &dyn Display, rule: QuadratureRule) {
        log::info!("{}", bounds);
        log::info!("{}", curve);
        log::info!("Algorithm: {}", rule);
    }

    fn slice(&self, index: usize, lower: f64, upper: f64, area: f64) {
        log::trace!("slice {}: [{} - {}] = {}", index, lower, upper, area);
    }

    fn finish(&self, rule: QuadratureRule, slice_count: usize, area: f64) {
        log::debug!("{} summed {} slices to {}", rule, slice_count, area);
    }
}
