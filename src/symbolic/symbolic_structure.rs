//! Structural predicates used to decide which integration rule describes an
//! expression: constant, sum, product, pure power of the variable, polynomial
//! (with its degree), rational function, linear argument.
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_simplify::{CanonicalMode, TermSum};
use crate::symbolic::utils::is_integer;

/// highest degree for which dense coefficients are built
pub const MAX_POLYNOMIAL_DEGREE: usize = 64;

impl Expr {
    /// true if the expression does not depend on `var`
    pub fn is_constant_in(&self, var: &str) -> bool {
        !self.contains_variable(var)
    }

    /// top level node is a sum or a difference
    pub fn is_additive(&self) -> bool {
        matches!(self, Expr::Add(..) | Expr::Sub(..))
    }

    /// top level node is a product or a quotient
    pub fn is_product(&self) -> bool {
        matches!(self, Expr::Mul(..) | Expr::Div(..))
    }

    /// number of factors of a flattened product, 1 for anything else
    pub fn factor_count(&self) -> usize {
        match self {
            Expr::Mul(lhs, rhs) | Expr::Div(lhs, rhs) => lhs.factor_count() + rhs.factor_count(),
            _ => 1,
        }
    }

    /// `x^n` with constant `n`
    pub fn is_pure_power_of(&self, var: &str) -> bool {
        matches!(self, Expr::Pow(base, exp)
            if matches!(base.as_ref(), Expr::Var(name) if name == var)
                && matches!(exp.as_ref(), Expr::Const(_)))
    }

    /// Exponent `n` if the expression is `x`, `x^n` or `1/x^n`.
    pub fn as_power_of(&self, var: &str) -> Option<f64> {
        match self {
            Expr::Var(name) if name == var => Some(1.0),
            Expr::Pow(base, exp) => match (base.as_ref(), exp.as_ref()) {
                (Expr::Var(name), Expr::Const(n)) if name == var => Some(*n),
                _ => None,
            },
            Expr::Div(numerator, denominator) if numerator.is_one() => {
                denominator.as_power_of(var).map(|n| -n)
            }
            _ => None,
        }
    }

    /// Splits off the numeric coefficient: `3x^2/2` gives `(1.5, x^2)`.
    pub fn as_coeff_mul(&self) -> (f64, Expr) {
        let sum = self.canonical_terms(CanonicalMode::COLLECT);
        if sum.is_empty() {
            return (0.0, Expr::Const(1.0));
        }
        match sum.single() {
            Some(term) => (term.coeff, term.monic().to_expr()),
            None => (1.0, sum.to_expr()),
        }
    }

    /// Coefficients `c[k]` of `x^k` of the expanded expression, `None` if it is
    /// not a polynomial with numeric coefficients or its degree exceeds
    /// [`MAX_POLYNOMIAL_DEGREE`].
    pub fn polynomial_coefficients(&self, var: &str) -> Option<Vec<f64>> {
        let sum = self.canonical_terms(CanonicalMode::EXPAND);
        let mut coefficients = vec![0.0];
        for term in sum.ordered() {
            let power = match term.factors.len() {
                0 => 0.0,
                1 => {
                    let factor = term.factors.values().next()?;
                    match &factor.base {
                        Expr::Var(name) if name == var => factor.power,
                        _ => return None,
                    }
                }
                _ => return None,
            };
            if !is_integer(power) || power < 0.0 || power > MAX_POLYNOMIAL_DEGREE as f64 {
                return None;
            }
            let power = power.round() as usize;
            if coefficients.len() <= power {
                coefficients.resize(power + 1, 0.0);
            }
            coefficients[power] += term.coeff;
        }
        Some(coefficients)
    }

    /// Degree in `var` of a polynomial expression; coefficients may be any
    /// expression free of `var` (`sin(2) x^2` has degree 2).
    pub fn polynomial_degree(&self, var: &str) -> Option<usize> {
        let sum = self.canonical_terms(CanonicalMode::EXPAND);
        polynomial_degree_of(&sum, var)
    }

    pub fn is_polynomial(&self, var: &str) -> bool {
        self.polynomial_degree(var).is_some()
    }

    /// quotient of polynomials in `var`
    pub fn is_rational_function(&self, var: &str) -> bool {
        let sum = self.canonical_terms(CanonicalMode::COLLECT);
        sum.ordered().iter().all(|term| {
            term.factors.values().all(|factor| {
                if factor.base.is_constant_in(var) {
                    return true;
                }
                if !is_integer(factor.power) {
                    return false;
                }
                match &factor.base {
                    Expr::Var(name) => name == var,
                    base @ (Expr::Add(..) | Expr::Sub(..)) => base.is_polynomial(var),
                    _ => false,
                }
            })
        })
    }

    /// `(a, b)` if the expression is `a x + b` with `a != 0`
    pub fn linear_coefficients(&self, var: &str) -> Option<(f64, f64)> {
        match self.polynomial_coefficients(var)?.as_slice() {
            [b, a] if *a != 0.0 => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Powers of sums above the expansion limit stay unexpanded, so a factor
/// `(p(x))^n` counts with degree `deg(p) * n`.
fn polynomial_degree_of(sum: &TermSum, var: &str) -> Option<usize> {
    let mut degree = 0usize;
    for term in sum.ordered() {
        let mut term_degree = 0usize;
        for factor in term.factors.values() {
            if factor.base.is_constant_in(var) {
                continue;
            }
            if !is_integer(factor.power) || factor.power < 0.0 {
                return None;
            }
            let power = factor.power.round() as usize;
            let base_degree = match &factor.base {
                Expr::Var(name) if name == var => 1,
                base @ (Expr::Add(..) | Expr::Sub(..)) => base.polynomial_degree(var)?,
                _ => return None,
            };
            term_degree = term_degree.saturating_add(base_degree.saturating_mul(power));
        }
        degree = degree.max(term_degree);
    }
    Some(degree)
}
