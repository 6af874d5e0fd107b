use crate::error::{IntegrationError, Result};

/// Default absolute tolerance for [`adaptive_simpson`], tight enough for at
/// least six significant digits on the magnitudes this crate integrates.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Maximum interval-halving depth before the current estimate is accepted.
const MAX_DEPTH: u32 = 32;

/// Integrates `f` over `[a, b]` with adaptive Simpson quadrature.
///
/// Each accepted panel applies Richardson extrapolation, giving the method
/// fifth-order accuracy on smooth integrands. Subdivision stops once the
/// local error estimate drops below the (halved per level) tolerance or the
/// depth cap is reached.
///
/// # Errors
///
/// Returns [`IntegrationError::NonFinite`] if the integrand evaluates to a
/// non-finite value at any sampled abscissa.
pub fn adaptive_simpson<F>(f: F, a: f64, b: f64, tolerance: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if a == b {
        return Ok(0.0);
    }
    let m = 0.5 * (a + b);
    let fa = sample(&f, a)?;
    let fm = sample(&f, m)?;
    let fb = sample(&f, b)?;
    let whole = simpson(fa, fm, fb, b - a);
    subdivide(&f, a, m, b, fa, fm, fb, whole, tolerance, MAX_DEPTH)
}

/// Evaluates the integrand and rejects non-finite values.
fn sample<F>(f: &F, x: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let y = f(x);
    if y.is_finite() {
        Ok(y)
    } else {
        Err(IntegrationError::NonFinite { at: x }.into())
    }
}

/// Simpson's rule over a panel of the given width.
fn simpson(fa: f64, fm: f64, fb: f64, width: f64) -> f64 {
    width / 6.0 * (fa + 4.0 * fm + fb)
}

#[allow(clippy::too_many_arguments)]
fn subdivide<F>(
    f: &F,
    a: f64,
    m: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tolerance: f64,
    depth: u32,
) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = sample(f, lm)?;
    let frm = sample(f, rm)?;
    let left = simpson(fa, flm, fm, m - a);
    let right = simpson(fm, frm, fb, b - m);
    let delta = left + right - whole;

    if depth == 0 || delta.abs() <= 15.0 * tolerance {
        return Ok(left + right + delta / 15.0);
    }

    let half_tol = 0.5 * tolerance;
    let first = subdivide(f, a, lm, m, fa, flm, fm, left, half_tol, depth - 1)?;
    let second = subdivide(f, m, rm, b, fm, frm, fb, right, half_tol, depth - 1)?;
    Ok(first + second)
}
