//! Integer and rational helpers for closure-period detection.
//!
//! Periodic curve families close after a whole number of `2π` laps. The lap
//! count comes from a frequency ratio. That ratio is reduced with a GCD when
//! both sides are integers. Otherwise a bounded continued-fraction
//! approximation is used.

/// Greatest common divisor of two values after rounding them to integers.
///
/// Signs are ignored. Returns 1 when both values round to zero, so the
/// result is always usable as a divisor.
///
/// # Example
///
/// ```
/// use guilloche::ratio::gcd_rounded;
///
/// assert_eq!(gcd_rounded(12.0, 18.0), 6.0);
/// assert_eq!(gcd_rounded(2.6, -4.0), 1.0);
/// assert_eq!(gcd_rounded(0.0, 0.0), 1.0);
/// ```
pub fn gcd_rounded(a: f64, b: f64) -> f64 {
    let (mut a, mut b) = (a.abs().round(), b.abs().round());
    if !a.is_finite() || !b.is_finite() {
        return 1.0;
    }
    while b > 0.0 {
        let t = a % b;
        a = b;
        b = t;
    }
    if a > 0.0 {
        a
    } else {
        1.0
    }
}

/// Greatest common divisor of two integers.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple of two integers.
///
/// Returns 0 if either input is 0, and saturates at `u64::MAX` instead of
/// overflowing.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b)).saturating_mul(b)
}

/// Least common multiple of a set of positive integers.
///
/// Zeros are skipped. Returns 1 for an empty (or all-zero) set.
pub fn lcm_all<I>(values: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    values
        .into_iter()
        .filter(|&v| v != 0)
        .fold(1, lcm)
}

/// A rational number `p / q` with `q >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Ratio {
    pub p: i64,
    pub q: u64,
}

impl Ratio {
    /// Returns the value of the ratio as a float.
    pub fn value(self) -> f64 {
        self.p as f64 / self.q as f64
    }
}

/// Upper bound on continued-fraction terms. Doubles converge well before this.
const MAX_TERMS: usize = 64;

/// Approximates `x` by `p / q` using continued fractions.
///
/// Convergents are generated until `|x - p/q| < tol`, or until the next
/// convergent's denominator would exceed `max_den`. The last accepted
/// convergent is returned. Non-finite input yields `0/1`.
///
/// # Example
///
/// ```
/// use guilloche::ratio::rationalize;
///
/// let r = rationalize(103.0 / 37.0, 1e-9, 20_000);
/// assert_eq!((r.p, r.q), (103, 37));
///
/// // Bounded denominator: π is approximated, never matched exactly.
/// let pi = rationalize(std::f64::consts::PI, 1e-12, 1000);
/// assert_eq!((pi.p, pi.q), (355, 113));
/// ```
pub fn rationalize(x: f64, tol: f64, max_den: u64) -> Ratio {
    if !x.is_finite() {
        return Ratio { p: 0, q: 1 };
    }
    let max_den = max_den.max(1) as f64;

    // Convergent recurrences: h_n = a_n h_{n-1} + h_{n-2}, same for k.
    let (mut h1, mut h0) = (1.0_f64, 0.0_f64);
    let (mut k1, mut k0) = (0.0_f64, 1.0_f64);
    let mut b = x;

    for _ in 0..MAX_TERMS {
        let a = b.floor();
        let h2 = a * h1 + h0;
        let k2 = a * k1 + k0;
        if !(k2 <= max_den) {
            break;
        }
        h0 = h1;
        k0 = k1;
        h1 = h2;
        k1 = k2;

        if (x - h1 / k1).abs() < tol {
            break;
        }
        let frac = b - a;
        if frac <= 0.0 {
            break;
        }
        b = 1.0 / frac;
    }

    // The first convergent always has denominator 1, so `k1 >= 1` here.
    Ratio {
        p: h1 as i64,
        q: k1 as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_gcd_rounded() {
        assert_eq!(gcd_rounded(3.0, 2.0), 1.0);
        assert_eq!(gcd_rounded(24.0, 168.0), 24.0);
        assert_eq!(gcd_rounded(-24.0, 216.0), 24.0);
        assert_eq!(gcd_rounded(5.0, 0.0), 5.0);
        assert_eq!(gcd_rounded(0.2, 0.4), 1.0);
        assert_eq!(gcd_rounded(f64::NAN, 4.0), 1.0);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(0, 6), 0);
        assert_eq!(lcm_all([12, 36, 6]), 36);
        assert_eq!(lcm_all([0, 0]), 1);
        assert_eq!(lcm_all(std::iter::empty()), 1);
        assert_eq!(lcm_all([3, 5, 7]), 105);
    }

    #[test]
    fn test_lcm_saturates() {
        assert_eq!(lcm(u64::MAX, u64::MAX - 1), u64::MAX);
    }

    #[test]
    fn test_rationalize_integer() {
        let r = rationalize(7.0, 1e-9, 20_000);
        assert_eq!((r.p, r.q), (7, 1));
    }

    #[test]
    fn test_rationalize_simple_fraction() {
        // Hypotrochoid R=140, r=37 gives K = 103/37.
        let r = rationalize((140.0 - 37.0) / 37.0, 1e-9, 20_000);
        assert_eq!((r.p, r.q), (103, 37));
        let half = rationalize(2.5, 1e-9, 20_000);
        assert_eq!((half.p, half.q), (5, 2));
    }

    #[test]
    fn test_rationalize_negative() {
        let r = rationalize(-2.5, 1e-9, 20_000);
        assert_eq!(r.q, 2);
        assert!((r.value() + 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_rationalize_bounded_denominator() {
        let r = rationalize(PI, 1e-15, 100);
        assert!(r.q <= 100);
        assert_eq!((r.p, r.q), (22, 7));
    }

    #[test]
    fn test_rationalize_non_finite() {
        assert_eq!(rationalize(f64::NAN, 1e-9, 10), Ratio { p: 0, q: 1 });
        assert_eq!(rationalize(f64::INFINITY, 1e-9, 10), Ratio { p: 0, q: 1 });
    }
}
