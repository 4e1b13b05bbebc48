//! Min-max normalisation of metric columns.

/// Rescales a column of values onto `[0, 1]`.
///
/// A column whose values are all equal has no spread to rescale; every entry
/// then takes the configured fallback.
///
/// # Examples
/// ```
/// use nextplate_scorer::MinMaxScaler;
///
/// let scaled = MinMaxScaler::default().normalise(&[2.0, 4.0, 6.0]);
/// assert_eq!(scaled, vec![0.0, 0.5, 1.0]);
///
/// let flat = MinMaxScaler::with_fallback(0.5).normalise(&[3.0, 3.0]);
/// assert_eq!(flat, vec![0.5, 0.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxScaler {
    fallback: f64,
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self { fallback: 0.0 }
    }
}

impl MinMaxScaler {
    /// Build a scaler with a custom fallback for degenerate columns.
    ///
    /// The fallback is clamped to `[0, 1]`; non-finite values become `0`.
    #[must_use]
    pub fn with_fallback(fallback: f64) -> Self {
        let fallback = if fallback.is_finite() {
            fallback.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { fallback }
    }

    /// Value assigned to every entry of a constant column.
    #[must_use]
    pub const fn fallback(&self) -> f64 {
        self.fallback
    }

    /// Rescale `values` so the minimum maps to `0` and the maximum to `1`.
    ///
    /// Output order matches input order. Results are clamped to `[0, 1]` to
    /// absorb rounding at the extremes.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "min-max scaling is float arithmetic"
    )]
    pub fn normalise(&self, values: &[f64]) -> Vec<f64> {
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let spread = max - min;
        if !spread.is_finite() || spread <= 0.0 {
            return vec![self.fallback; values.len()];
        }
        values
            .iter()
            .map(|&v| ((v - min) / spread).clamp(0.0, 1.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[1.0, 3.0], &[0.0, 1.0])]
    #[case(&[10.0, 0.0, 5.0], &[1.0, 0.0, 0.5])]
    #[case(&[], &[])]
    fn scales_onto_unit_interval(#[case] input: &[f64], #[case] expected: &[f64]) {
        assert_eq!(MinMaxScaler::default().normalise(input), expected);
    }

    #[rstest]
    #[case(&[7.0])]
    #[case(&[2.0, 2.0, 2.0])]
    fn constant_columns_use_fallback(#[case] input: &[f64]) {
        let scaled = MinMaxScaler::default().normalise(input);
        assert!(scaled.iter().all(|v| *v == 0.0));
        assert_eq!(scaled.len(), input.len());
    }

    #[rstest]
    #[case(1.5, 1.0)]
    #[case(-1.0, 0.0)]
    #[case(f64::NAN, 0.0)]
    #[case(0.25, 0.25)]
    fn fallback_is_clamped(#[case] raw: f64, #[case] expected: f64) {
        assert_eq!(MinMaxScaler::with_fallback(raw).fallback(), expected);
    }
}
