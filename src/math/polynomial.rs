/// A dense univariate polynomial with real coefficients.
///
/// Coefficients are stored highest degree first, so
/// `Polynomial::new(vec![2.0, 0.0, -1.0])` is `2x^2 - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients ordered highest degree first.
    ///
    /// An empty coefficient list is treated as the zero polynomial.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        if coefficients.is_empty() {
            return Self {
                coefficients: vec![0.0],
            };
        }
        Self { coefficients }
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Returns the analytic derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let n = self.coefficients.len();
        if n <= 1 {
            return Self {
                coefficients: vec![0.0],
            };
        }
        let coefficients = self
            .coefficients
            .iter()
            .take(n - 1)
            .enumerate()
            .map(|(i, &c)| {
                #[allow(clippy::cast_precision_loss)]
                let power = (n - 1 - i) as f64;
                c * power
            })
            .collect();
        Self { coefficients }
    }

    /// Returns the degree of the polynomial (trailing zeros are not stripped).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns the constant term, i.e. the value at `x = 0`.
    #[must_use]
    pub fn constant(&self) -> f64 {
        // Horner at x = 0 collapses to the last stored coefficient.
        self.coefficients[self.coefficients.len() - 1]
    }

    /// Returns the coefficients, highest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}
