//! Real polynomials and real-root extraction.
//!
//! Coefficients are stored lowest degree first. Construction from a slice
//! with [`Polynomial::new`] takes them highest degree first, the way they are
//! usually written down.
//!
//! Roots of degree one and two are computed in closed form. Higher degrees
//! are isolated between the roots of the derivative (found recursively) and
//! refined by bisection, which keeps the search deterministic and bounded.

use std::ops::{Add, Mul, Neg, Sub};

/// Leading coefficients at or below this fraction of the largest one are dropped.
const TRIM_TOLERANCE: f64 = 1e-12;
/// Relative discriminant band treated as a double root.
const DISCRIMINANT_TOLERANCE: f64 = 1e-12;
/// |p(x)| below this fraction of Σ|c_i||x|^i counts as a root.
const ROOT_ZERO_TOLERANCE: f64 = 1e-10;
/// Roots closer than this (relative) are merged.
const ROOT_MERGE_TOLERANCE: f64 = 1e-10;
const MAX_BISECTIONS: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefs: Vec<f64>,
}

impl Polynomial {
    /// Build from coefficients ordered highest degree first.
    pub fn new(descending: &[f64]) -> Self {
        Self::from_ascending(descending.iter().rev().copied().collect())
    }

    /// Build from coefficients ordered lowest degree first.
    pub fn from_ascending(mut coefs: Vec<f64>) -> Self {
        if coefs.is_empty() {
            coefs.push(0.0);
        }
        Self { coefs }
    }

    pub fn zero() -> Self {
        Self { coefs: vec![0.0] }
    }

    pub fn constant(value: f64) -> Self {
        Self { coefs: vec![value] }
    }

    /// Formal degree (number of stored coefficients minus one).
    pub fn degree(&self) -> usize {
        self.coefs.len() - 1
    }

    /// Coefficient of `x^power`, zero beyond the stored degree.
    pub fn coefficient(&self, power: usize) -> f64 {
        self.coefs.get(power).copied().unwrap_or(0.0)
    }

    /// Coefficients lowest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefs
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.coefs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Σ |c_i| |x|^i, the scale against which `eval(x)` is judged to be zero.
    fn eval_magnitude(&self, x: f64) -> f64 {
        let ax = x.abs();
        self.coefs.iter().rev().fold(0.0, |acc, &c| acc * ax + c.abs())
    }

    pub fn derivative(&self) -> Self {
        if self.coefs.len() == 1 {
            return Self::zero();
        }
        Self::from_ascending(
            self.coefs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, &c)| c * i as f64)
                .collect(),
        )
    }

    pub fn max_abs_coefficient(&self) -> f64 {
        self.coefs.iter().fold(0.0_f64, |m, c| m.max(c.abs()))
    }

    /// Drop leading coefficients whose magnitude is at most `tolerance`
    /// times the largest coefficient.
    pub fn trimmed(&self, tolerance: f64) -> Self {
        let scale = self.max_abs_coefficient();
        if scale == 0.0 {
            return Self::zero();
        }
        let mut coefs = self.coefs.clone();
        while coefs.len() > 1 && coefs.last().map_or(false, |c| c.abs() <= tolerance * scale) {
            coefs.pop();
        }
        Self { coefs }
    }

    /// True when every coefficient is within `tolerance` of zero.
    pub fn is_zero(&self, tolerance: f64) -> bool {
        self.max_abs_coefficient() <= tolerance
    }

    /// All real roots, ascending, with repeated roots reported once.
    pub fn real_roots(&self) -> Vec<f64> {
        let p = self.trimmed(TRIM_TOLERANCE);
        match p.degree() {
            0 => Vec::new(),
            1 => vec![-p.coefs[0] / p.coefs[1]],
            2 => p.quadratic_roots(),
            _ => {
                let bound = p.cauchy_bound();
                p.isolate_roots(-bound, bound)
            }
        }
    }

    /// Real roots inside the closed interval `[min, max]`, ascending.
    pub fn roots_in_interval(&self, min: f64, max: f64) -> Vec<f64> {
        if min > max {
            return Vec::new();
        }
        let p = self.trimmed(TRIM_TOLERANCE);
        match p.degree() {
            0 => Vec::new(),
            1 | 2 => p
                .real_roots()
                .into_iter()
                .filter(|r| *r >= min && *r <= max)
                .collect(),
            _ => p.isolate_roots(min, max),
        }
    }

    fn quadratic_roots(&self) -> Vec<f64> {
        let (c, b, a) = (self.coefs[0], self.coefs[1], self.coefs[2]);
        let disc = b * b - 4.0 * a * c;
        let scale = (b * b).max((4.0 * a * c).abs());
        if disc.abs() <= DISCRIMINANT_TOLERANCE * scale {
            return vec![-b / (2.0 * a)];
        }
        if disc < 0.0 {
            return Vec::new();
        }
        let q = -0.5 * (b + b.signum() * disc.sqrt());
        let (r1, r2) = (q / a, c / q);
        if r1 <= r2 {
            vec![r1, r2]
        } else {
            vec![r2, r1]
        }
    }

    /// Upper bound on the magnitude of every root.
    fn cauchy_bound(&self) -> f64 {
        let lead = self.coefs[self.degree()];
        let max_ratio = self.coefs[..self.degree()]
            .iter()
            .fold(0.0_f64, |m, c| m.max((c / lead).abs()));
        1.0 + max_ratio
    }

    fn is_root_at(&self, x: f64) -> bool {
        self.eval(x).abs() <= ROOT_ZERO_TOLERANCE * self.eval_magnitude(x)
    }

    /// Roots in `[min, max]` for an already trimmed polynomial.
    ///
    /// The derivative's roots split the interval into monotone pieces; each
    /// piece holds at most one root, found by bisection on a sign change.
    /// Critical points where the value vanishes are the repeated roots.
    fn isolate_roots(&self, min: f64, max: f64) -> Vec<f64> {
        let mut fence = vec![min];
        fence.extend(
            self.derivative()
                .roots_in_interval(min, max)
                .into_iter()
                .filter(|&c| c > min && c < max),
        );
        fence.push(max);

        let signs: Vec<f64> = fence
            .iter()
            .map(|&x| if self.is_root_at(x) { 0.0 } else { self.eval(x).signum() })
            .collect();

        let mut roots: Vec<f64> = fence
            .iter()
            .zip(&signs)
            .filter(|(_, s)| **s == 0.0)
            .map(|(&x, _)| x)
            .collect();

        for i in 0..fence.len() - 1 {
            if signs[i] * signs[i + 1] < 0.0 {
                roots.push(self.bisect(fence[i], fence[i + 1], signs[i]));
            }
        }

        roots.sort_by(|a, b| a.total_cmp(b));
        roots.dedup_by(|a, b| (*a - *b).abs() <= ROOT_MERGE_TOLERANCE * a.abs().max(1.0));
        roots
    }

    fn bisect(&self, mut lo: f64, mut hi: f64, lo_sign: f64) -> f64 {
        for _ in 0..MAX_BISECTIONS {
            let mid = 0.5 * (lo + hi);
            if mid <= lo || mid >= hi {
                break;
            }
            let value = self.eval(mid);
            if value == 0.0 {
                return mid;
            }
            if value.signum() == lo_sign {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        0.5 * (lo + hi)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let len = self.coefs.len().max(rhs.coefs.len());
        Polynomial::from_ascending(
            (0..len).map(|i| self.coefficient(i) + rhs.coefficient(i)).collect(),
        )
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let len = self.coefs.len().max(rhs.coefs.len());
        Polynomial::from_ascending(
            (0..len).map(|i| self.coefficient(i) - rhs.coefficient(i)).collect(),
        )
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let mut coefs = vec![0.0; self.coefs.len() + rhs.coefs.len() - 1];
        for (i, a) in self.coefs.iter().enumerate() {
            for (j, b) in rhs.coefs.iter().enumerate() {
                coefs[i + j] += a * b;
            }
        }
        Polynomial::from_ascending(coefs)
    }
}

impl Mul<f64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: f64) -> Polynomial {
        Polynomial::from_ascending(self.coefs.iter().map(|c| c * rhs).collect())
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self * -1.0
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        &self - &rhs
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl Mul<f64> for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: f64) -> Polynomial {
        &self * rhs
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}
