//! Bézout-matrix resultants for eliminating one variable between two
//! polynomial equations.
//!
//! Both inputs are polynomials in an eliminated variable `r` whose
//! coefficients are themselves polynomials in a kept variable `s`. The
//! determinant of their Bézout matrix is a polynomial in `s` that vanishes
//! exactly where the two equations share a root in `r`.

use crate::geometry::Polynomial;

/// Bézout matrix of `f(r) = Σ f_i r^i` and `g(r) = Σ g_i r^i`.
///
/// Coefficient slices are lowest degree first; the shorter one is padded
/// with zeros. The matrix is `n × n` for `n = max(deg f, deg g)`.
pub fn bezout_matrix(f: &[Polynomial], g: &[Polynomial]) -> Vec<Vec<Polynomial>> {
    let n = f.len().max(g.len()).saturating_sub(1);
    let coef = |c: &[Polynomial], i: usize| c.get(i).cloned().unwrap_or_else(Polynomial::zero);

    let mut matrix = vec![vec![Polynomial::zero(); n]; n];
    for p in 1..=n {
        for q in 0..p {
            let c = &coef(f, p) * &coef(g, q) - &coef(f, q) * &coef(g, p);
            for k in 0..(p - q) {
                let entry = &mut matrix[q + k][p - 1 - k];
                *entry = &*entry + &c;
            }
        }
    }
    matrix
}

/// Resultant of `f` and `g` with respect to their coefficient index variable.
pub fn resultant(f: &[Polynomial], g: &[Polynomial]) -> Polynomial {
    determinant(&bezout_matrix(f, g))
}

/// Determinant by cofactor expansion along the first row. Only used for the
/// small matrices the curve solvers produce (at most 3 × 3).
pub fn determinant(matrix: &[Vec<Polynomial>]) -> Polynomial {
    match matrix.len() {
        0 => Polynomial::constant(1.0),
        1 => matrix[0][0].clone(),
        n => (0..n).fold(Polynomial::zero(), |acc, j| {
            let minor: Vec<Vec<Polynomial>> = matrix[1..]
                .iter()
                .map(|row| {
                    row.iter()
                        .enumerate()
                        .filter(|(k, _)| *k != j)
                        .map(|(_, p)| p.clone())
                        .collect()
                })
                .collect();
            let term = &matrix[0][j] * &determinant(&minor);
            if j % 2 == 0 {
                acc + term
            } else {
                acc - term
            }
        }),
    }
}
