/// Ordinary least-squares line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearModel {
    /// Fit a line through paired samples.
    ///
    /// Returns `None` when there are no samples or the slices differ in
    /// length. When every `x` is the same (a single sample, or all sales on
    /// one day) the slope is zero and the line sits at the mean of `y`.
    pub fn fit(x: &[f64], y: &[f64]) -> Option<Self> {
        if x.is_empty() || x.len() != y.len() {
            return None;
        }

        let n = x.len() as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;

        let (mut sxx, mut sxy) = (0.0, 0.0);
        for (xi, yi) in x.iter().zip(y) {
            sxx += (xi - mean_x) * (xi - mean_x);
            sxy += (xi - mean_x) * (yi - mean_y);
        }

        let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };
        Some(Self {
            intercept: mean_y - slope * mean_x,
            slope,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}
