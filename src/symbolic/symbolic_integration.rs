//! Symbolic integration over the canonical terms of an expression.
//!
//! `integrate` splits the expression into canonical terms (linearity), pulls the
//! factors free of the variable out of each term and looks the remaining factors
//! up in a table of known forms:
//!
//! - powers `x^n` (`ln(x)` for `n = -1`)
//! - `sin, cos, tan, cot, exp, ln` and the inverse trigonometric functions of `ax + b`
//! - `sin^2, cos^2, tan^2, cot^2, 1/cos^2, 1/sin^2` of `ax + b`
//! - `(ax + b)^n`, `1/(ax^2 + c)`, `c^(ax + b)`
//! - `x^n e^(ax)`, `x^n sin(ax)`, `x^n cos(ax)` (tabular integration by parts), `x^n ln(x)`
//! - substitution `f(g(x)) g'(x)` and `g(x)^n g'(x)`
//!
//! A term matching nothing is expanded once and retried addend by addend; if that
//! fails too the integral is reported as unsupported. `definite_integrate` applies the
//! fundamental theorem, `quad` integrates numerically with Gauss-Legendre quadrature
//! and refuses intervals on which the integrand has a pole.
use crate::symbolic::symbolic_engine::{Expr, FunctionKind};
use crate::symbolic::symbolic_simplify::{CanonicalMode, Factor, Term, factor_key};
use crate::symbolic::utils::{approx_eq, is_integer, linspace};
use gauss_quad::GaussLegendre;

/// highest power of x integrated by repeated integration by parts
const MAX_PARTS_DEGREE: f64 = 12.0;
/// points of the interval sampled when looking for singularities
const SINGULARITY_SAMPLES: usize = 201;

fn unsupported(term: &Term) -> String {
    format!(
        "Cannot integrate {} with the available integration rules",
        term.to_expr()
    )
}

/// ∫x^n dx
fn power_rule(x: Expr, n: f64) -> Expr {
    if approx_eq(n, -1.0) {
        x.ln()
    } else {
        x.pow(Expr::Const(n + 1.0)) / Expr::Const(n + 1.0)
    }
}

/// m-th repeated antiderivative of f(u) for u = ax + b, f one of exp, sin, cos
fn repeated_antiderivative(kind: FunctionKind, u: &Expr, a: f64, m: usize) -> Option<Expr> {
    let u = Box::new(u.clone());
    let body = match (kind, m % 4) {
        (FunctionKind::Exp, _) => Expr::Exp(u),
        (FunctionKind::Sin, 1) => -Expr::cos(u),
        (FunctionKind::Sin, 2) => -Expr::sin(u),
        (FunctionKind::Sin, 3) => Expr::cos(u),
        (FunctionKind::Sin, _) => Expr::sin(u),
        (FunctionKind::Cos, 1) => Expr::sin(u),
        (FunctionKind::Cos, 2) => -Expr::cos(u),
        (FunctionKind::Cos, 3) => -Expr::sin(u),
        (FunctionKind::Cos, _) => Expr::cos(u),
        _ => return None,
    };
    Some(Expr::Const(1.0 / a.powi(m as i32)) * body)
}

/// ∫(ax + b)^n dx and ∫1/(ax^2 + c) dx
fn integrate_sum_power(base: &Expr, p: f64, var: &str) -> Option<Expr> {
    if let Some((a, _)) = base.linear_coefficients(var) {
        return Some(if approx_eq(p, -1.0) {
            base.clone().ln() / Expr::Const(a)
        } else {
            base.clone().pow(Expr::Const(p + 1.0)) / Expr::Const(a * (p + 1.0))
        });
    }
    if approx_eq(p, -1.0) {
        if let Some([c0, c1, c2]) = base.polynomial_coefficients(var).as_deref() {
            if *c1 == 0.0 && *c2 != 0.0 && c0 / c2 > 0.0 {
                let alpha = (c0 / c2).sqrt();
                let arg = Expr::var(var) / Expr::Const(alpha);
                return Some(Expr::arctg(Box::new(arg)) / Expr::Const(c2 * alpha));
            }
        }
    }
    None
}

/// ∫f(ax + b)^p dx for the functions of the table
fn integrate_function_power(base: &Expr, p: f64, var: &str) -> Option<Expr> {
    let kind = base.function_kind()?;
    let u = base.function_argument()?.clone();
    let (a, _) = u.linear_coefficients(var)?;
    let bu = || Box::new(u.clone());
    let one_plus_u2 = || Expr::Const(1.0) + u.clone().pow(Expr::Const(2.0));
    let sqrt_one_minus_u2 = || (Expr::Const(1.0) - u.clone().pow(Expr::Const(2.0))).sqrt();
    let double_u = || Box::new(Expr::Const(2.0) * u.clone());
    let result = if approx_eq(p, 1.0) {
        match kind {
            FunctionKind::Sin => -Expr::cos(bu()),
            FunctionKind::Cos => Expr::sin(bu()),
            FunctionKind::Exp => Expr::Exp(bu()),
            FunctionKind::Tan => -Expr::cos(bu()).ln(),
            FunctionKind::Cot => Expr::sin(bu()).ln(),
            FunctionKind::Ln => u.clone() * Expr::Ln(bu()) - u.clone(),
            FunctionKind::Arcsin => u.clone() * Expr::arcsin(bu()) + sqrt_one_minus_u2(),
            FunctionKind::Arccos => u.clone() * Expr::arccos(bu()) - sqrt_one_minus_u2(),
            FunctionKind::Arctan => {
                u.clone() * Expr::arctg(bu()) - one_plus_u2().ln() / Expr::Const(2.0)
            }
            FunctionKind::Arccot => {
                u.clone() * Expr::arcctg(bu()) + one_plus_u2().ln() / Expr::Const(2.0)
            }
        }
    } else if approx_eq(p, 2.0) {
        match kind {
            FunctionKind::Sin => {
                u.clone() / Expr::Const(2.0) - Expr::sin(double_u()) / Expr::Const(4.0)
            }
            FunctionKind::Cos => {
                u.clone() / Expr::Const(2.0) + Expr::sin(double_u()) / Expr::Const(4.0)
            }
            FunctionKind::Tan => Expr::tg(bu()) - u.clone(),
            FunctionKind::Cot => -Expr::ctg(bu()) - u.clone(),
            _ => return None,
        }
    } else if approx_eq(p, -1.0) {
        match kind {
            FunctionKind::Tan => Expr::sin(bu()).ln(),
            FunctionKind::Cot => -Expr::cos(bu()).ln(),
            _ => return None,
        }
    } else if approx_eq(p, -2.0) {
        match kind {
            FunctionKind::Cos => Expr::tg(bu()),
            FunctionKind::Sin => -Expr::ctg(bu()),
            _ => return None,
        }
    } else {
        return None;
    };
    Some(result / Expr::Const(a))
}

/// a single factor depending on the variable
fn integrate_factor(factor: &Factor, var: &str) -> Option<Expr> {
    let p = factor.power;
    match &factor.base {
        Expr::Var(_) => Some(power_rule(factor.base.clone(), p)),
        base @ (Expr::Add(..) | Expr::Sub(..)) => integrate_sum_power(base, p, var),
        // c^(ax + b)
        Expr::Pow(b, e) if approx_eq(p, 1.0) => {
            let k = b.as_const().filter(|k| *k > 0.0 && *k != 1.0)?;
            let (a, _) = e.linear_coefficients(var)?;
            Some(factor.base.clone() / Expr::Const(a * k.ln()))
        }
        base if base.function_kind().is_some() => integrate_function_power(base, p, var),
        _ => None,
    }
}

/// x^n times one function factor: tabular integration by parts
fn integrate_pair(first: &Factor, second: &Factor, var: &str) -> Option<Expr> {
    let (power, other) = match (&first.base, &second.base) {
        (Expr::Var(_), _) => (first, second),
        (_, Expr::Var(_)) => (second, first),
        _ => return None,
    };
    if !approx_eq(other.power, 1.0) {
        return None;
    }
    let x = Expr::var(var);
    let n = power.power;
    let kind = other.base.function_kind()?;
    let u = other.base.function_argument()?;
    match kind {
        // ∫x^n ln(x) dx
        FunctionKind::Ln if *u == x => {
            if approx_eq(n, -1.0) {
                return Some(u.clone().ln().pow(Expr::Const(2.0)) / Expr::Const(2.0));
            }
            let m = n + 1.0;
            Some(
                x.clone().pow(Expr::Const(m)) * u.clone().ln() / Expr::Const(m)
                    - x.pow(Expr::Const(m)) / Expr::Const(m * m),
            )
        }
        // ∫x^n f(ax + b) dx = Σ (-1)^k (x^n)^(k) F_(k+1)
        FunctionKind::Exp | FunctionKind::Sin | FunctionKind::Cos => {
            if !is_integer(n) || n < 1.0 || n > MAX_PARTS_DEGREE {
                return None;
            }
            let (a, _) = u.linear_coefficients(var)?;
            let n = n.round() as usize;
            let mut falling = 1.0;
            let mut result = Expr::Const(0.0);
            for k in 0..=n {
                let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                let derivative = Expr::Const(sign * falling) * x.clone().pow(Expr::Const((n - k) as f64));
                result = result + derivative * repeated_antiderivative(kind, u, a, k + 1)?;
                falling *= (n - k) as f64;
            }
            Some(result)
        }
        _ => None,
    }
}

/// ∫f(g) g' dx for f in exp, sin, cos and ∫g^p g' dx
fn integrate_by_substitution(factors: &[&Factor], var: &str) -> Option<Expr> {
    for (i, candidate) in factors.iter().enumerate() {
        let mut rest = Term::constant(1.0);
        for (j, factor) in factors.iter().enumerate() {
            if i != j {
                rest.factors
                    .insert(factor_key(&factor.base), (*factor).clone());
            }
        }
        let rest = rest.to_expr().canonical_terms(CanonicalMode::EXPAND);
        let ratio_to_derivative = |inner: &Expr| {
            let derivative = inner.diff(var).canonical_terms(CanonicalMode::EXPAND);
            rest.ratio_to(&derivative)
        };
        let base = &candidate.base;
        if approx_eq(candidate.power, 1.0) {
            if let (Some(kind), Some(inner)) = (base.function_kind(), base.function_argument()) {
                let outer = match kind {
                    FunctionKind::Exp => Some(Expr::Exp(Box::new(inner.clone()))),
                    FunctionKind::Sin => Some(-Expr::cos(Box::new(inner.clone()))),
                    FunctionKind::Cos => Some(Expr::sin(Box::new(inner.clone()))),
                    _ => None,
                };
                if let (Some(outer), Some(k)) = (outer, ratio_to_derivative(inner)) {
                    return Some(Expr::Const(k) * outer);
                }
            }
        }
        if let Some(k) = ratio_to_derivative(base) {
            return Some(Expr::Const(k) * power_rule(base.clone(), candidate.power));
        }
    }
    None
}

/// antiderivative of one canonical term from the table, without expansion
fn integrate_term_by_table(term: &Term, var: &str) -> Option<Expr> {
    let (constant_factors, var_factors): (Vec<&Factor>, Vec<&Factor>) = term
        .factors
        .values()
        .partition(|f| f.base.is_constant_in(var));
    let mut constant_part = Term::constant(term.coeff);
    for factor in constant_factors {
        constant_part
            .factors
            .insert(factor_key(&factor.base), factor.clone());
    }
    let antiderivative = match var_factors.as_slice() {
        [] => Some(Expr::var(var)),
        [single] => integrate_factor(single, var),
        [first, second] => integrate_pair(first, second, var),
        _ => None,
    }
    .or_else(|| integrate_by_substitution(&var_factors, var))?;
    Some(constant_part.to_expr() * antiderivative)
}

fn integrate_term(term: &Term, var: &str) -> Result<Expr, String> {
    if let Some(result) = integrate_term_by_table(term, var) {
        return Ok(result);
    }
    // distribute products of sums and retry addend by addend
    let expanded = term.to_expr().canonical_terms(CanonicalMode::EXPAND);
    if expanded.len() > 1 || expanded.single().is_some_and(|t| t != term) {
        let mut result = Expr::Const(0.0);
        for addend in expanded.ordered() {
            let integral = integrate_term_by_table(addend, var).ok_or_else(|| unsupported(addend))?;
            result = result + integral;
        }
        return Ok(result);
    }
    Err(unsupported(term))
}

/// strips positive constant powers: the zeros of `g^n` are those of `g`
fn power_root(mut expr: &Expr) -> &Expr {
    while let Expr::Pow(base, exp) = expr {
        match exp.as_const() {
            Some(n) if n > 0.0 => expr = base,
            _ => break,
        }
    }
    expr
}

/// Subexpressions whose zeros are poles of `expr`: denominators, bases of
/// negative powers, `cos` under `tan` and `sin` under `cot`.
fn collect_denominators(expr: &Expr, out: &mut Vec<Expr>) {
    match expr {
        Expr::Var(_) | Expr::Const(_) => {}
        Expr::Add(lhs, rhs) | Expr::Sub(lhs, rhs) | Expr::Mul(lhs, rhs) => {
            collect_denominators(lhs, out);
            collect_denominators(rhs, out);
        }
        Expr::Div(lhs, rhs) => {
            out.push(power_root(rhs).clone());
            collect_denominators(lhs, out);
            collect_denominators(rhs, out);
        }
        Expr::Pow(base, exp) => {
            if exp.as_const().is_some_and(|n| n < 0.0) {
                out.push(power_root(base).clone());
            }
            collect_denominators(base, out);
            collect_denominators(exp, out);
        }
        Expr::tg(arg) => {
            out.push(Expr::cos(arg.clone()));
            collect_denominators(arg, out);
        }
        Expr::ctg(arg) => {
            out.push(Expr::sin(arg.clone()));
            collect_denominators(arg, out);
        }
        other => {
            if let Some(arg) = other.function_argument() {
                collect_denominators(arg, out);
            }
        }
    }
}

impl Expr {
    /// SYMBOLIC INTEGRATION

    /// Indefinite integral with respect to `var`, without the constant of
    /// integration, in canonical form.
    /// # Example
    /// ```
    /// use RustedIntegrals::symbolic::symbolic_engine::Expr;
    /// let f = Expr::parse_expression("x^2 + 3x").unwrap();
    /// assert_eq!(f.integrate("x").unwrap().to_string(), "x^3/3 + 3x^2/2");
    /// ```
    pub fn integrate(&self, var: &str) -> Result<Expr, String> {
        let sum = self.canonical_terms(CanonicalMode::COLLECT);
        let mut result = Expr::Const(0.0);
        for term in sum.ordered() {
            result = result + integrate_term(term, var)?;
        }
        Ok(result.simplify())
    }

    /// Definite integration using the fundamental theorem of calculus
    pub fn definite_integrate(&self, var: &str, lower: f64, upper: f64) -> Result<f64, String> {
        self.integrate(var)?.antiderivative_increment(var, lower, upper)
    }

    /// `F(upper) - F(lower)` for an antiderivative `F`; an error if it is not finite.
    pub fn antiderivative_increment(&self, var: &str, lower: f64, upper: f64) -> Result<f64, String> {
        let upper_val = self.eval1D(var, upper)?;
        let lower_val = self.eval1D(var, lower)?;
        let value = upper_val - lower_val;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(format!(
                "The antiderivative {} is not finite on [{}, {}]",
                self, lower, upper
            ))
        }
    }

    /// A point of `[lower, upper]` at or next to which the expression is not
    /// defined: a non-finite interior sample, or a denominator that vanishes or
    /// changes sign between two samples.
    pub fn singular_point(&self, var: &str, lower: f64, upper: f64) -> Result<Option<f64>, String> {
        let points = linspace(lower, upper, SINGULARITY_SAMPLES);
        let f = self.lambdify1D(var)?;
        let interior = &points[1..points.len() - 1];
        if let Some(x) = interior.iter().find(|x| !f(**x).is_finite()) {
            return Ok(Some(*x));
        }
        let mut denominators = Vec::new();
        collect_denominators(self, &mut denominators);
        for denominator in denominators.iter().filter(|d| d.contains_variable(var)) {
            let d = denominator.lambdify1D(var)?;
            let values: Vec<f64> = points.iter().map(|x| d(*x)).collect();
            if let Some(i) = values.iter().position(|v| *v == 0.0 || !v.is_finite()) {
                return Ok(Some(points[i]));
            }
            if let Some(i) = values.windows(2).position(|w| w[0].signum() != w[1].signum()) {
                return Ok(Some((points[i] + points[i + 1]) / 2.0));
            }
        }
        Ok(None)
    }

    /// Numerical integration over a finite interval with Gauss-Legendre quadrature
    pub fn quad(&self, var: &str, degree: usize, lower: f64, upper: f64) -> Result<f64, String> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err("Gauss-Legendre quadrature needs a finite interval".to_string());
        }
        if let Some(point) = self.singular_point(var, lower, upper)? {
            return Err(format!(
                "{} is singular near {} = {} on [{}, {}], the integral may diverge",
                self, var, point, lower, upper
            ));
        }
        let f = self.lambdify1D(var)?;
        let quad = GaussLegendre::new(degree)
            .map_err(|e| format!("Failed to create Gauss-Legendre quadrature: {:?}", e))?;
        let result = quad.integrate(lower, upper, &f);
        if result.is_finite() {
            Ok(result)
        } else {
            Err(format!(
                "{} cannot be integrated numerically on [{}, {}]",
                self, lower, upper
            ))
        }
    }
}

#[cfg(test)]
mod integration_tests {
    use crate::symbolic::symbolic_engine::Expr;
    use approx::assert_relative_eq;

    fn parse(text: &str) -> Expr {
        Expr::parse_expression(text).unwrap()
    }

    /// F' = f on sample points of (0, 1), and F - expected is constant there
    fn check(f: &str, expected: &str) {
        let f = parse(f);
        let expected = parse(expected);
        let result = f.integrate("x").unwrap();
        let derivative = result.diff("x");
        let shift = result.eval1D("x", 0.5).unwrap() - expected.eval1D("x", 0.5).unwrap();
        for t in [0.3, 0.6, 0.9] {
            assert_relative_eq!(
                derivative.eval1D("x", t).unwrap(),
                f.eval1D("x", t).unwrap(),
                epsilon = 1e-9
            );
            assert_relative_eq!(
                result.eval1D("x", t).unwrap() - expected.eval1D("x", t).unwrap(),
                shift,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_integrate_constant() {
        assert_eq!(parse("5").integrate("x").unwrap(), parse("5x"));
        assert_eq!(parse("0").integrate("x").unwrap(), Expr::Const(0.0));
    }

    #[test]
    fn test_integrate_polynomial() {
        assert_eq!(parse("x^2").integrate("x").unwrap(), parse("x^3/3"));
        assert_eq!(parse("x^2 + 3x").integrate("x").unwrap(), parse("x^3/3 + 3x^2/2"));
        check("4x^3 - 2x + 1", "x^4 - x^2 + x");
    }

    #[test]
    fn test_integrate_reciprocal_and_roots() {
        check("1/x", "ln(x)");
        check("3/x^2", "-3/x");
        check("sqrt(x)", "2x^(3/2)/3");
    }

    #[test]
    fn test_integrate_trigonometric() {
        assert_eq!(parse("sin(x)").integrate("x").unwrap(), parse("-cos(x)"));
        check("cos(2x)", "sin(2x)/2");
        check("tan(x)", "-ln(cos(x))");
        check("cot(x)", "ln(sin(x))");
        check("sin(x)^2", "x/2 - sin(2x)/4");
        check("1/cos(x)^2", "tan(x)");
    }

    #[test]
    fn test_integrate_exponential_and_log() {
        check("exp(3x)", "exp(3x)/3");
        check("e^x", "e^x");
        check("ln(x)", "x ln(x) - x");
        check("2^x", "2^x/ln(2)");
    }

    #[test]
    fn test_integrate_inverse_trigonometric() {
        check("arctan(x)", "x arctan(x) - ln(1 + x^2)/2");
        check("arcsin(x)", "x arcsin(x) + sqrt(1 - x^2)");
    }

    #[test]
    fn test_integrate_linear_argument_powers() {
        check("(2x + 1)^3", "(2x + 1)^4/8");
        check("1/(2x + 1)", "ln(2x + 1)/2");
        check("1/(x^2 + 4)", "arctan(x/2)/2");
    }

    #[test]
    fn test_integrate_by_parts() {
        check("x exp(x)", "x exp(x) - exp(x)");
        check("x^2 exp(x)", "x^2 exp(x) - 2x exp(x) + 2exp(x)");
        check("x sin(x)", "sin(x) - x cos(x)");
        check("x ln(x)", "x^2 ln(x)/2 - x^2/4");
    }

    #[test]
    fn test_integrate_by_substitution() {
        check("sin(x) cos(x)", "sin(x)^2/2");
        check("x exp(x^2)", "exp(x^2)/2");
        check("2x/(x^2 + 1)", "ln(x^2 + 1)");
        check("x (x^2 + 1)^3", "(x^2 + 1)^4/8");
    }

    #[test]
    fn test_integrate_after_expansion() {
        check("x(x + 1)", "x^3/3 + x^2/2");
        check("(x + 1)(x - 1)", "x^3/3 - x");
    }

    #[test]
    fn test_unsupported_integrals() {
        assert!(parse("exp(x^2)").integrate("x").is_err());
        assert!(parse("sin(x)/x").integrate("x").is_err());
        assert!(parse("1/(x^2 - 1)").integrate("x").is_err());
    }

    #[test]
    fn test_definite_integrate() {
        assert_relative_eq!(parse("x^2").definite_integrate("x", 0.0, 1.0).unwrap(), 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(
            parse("sin(x)").definite_integrate("x", 0.0, std::f64::consts::PI).unwrap(),
            2.0,
            epsilon = 1e-12
        );
        assert!(parse("1/x").definite_integrate("x", 0.0, 1.0).is_err());
    }

    #[test]
    fn test_quad_gauss_legendre() {
        let value = parse("exp(-x^2)").quad("x", 20, 0.0, 1.0).unwrap();
        assert_relative_eq!(value, 0.746824132812427, epsilon = 1e-10);
        let value = parse("x^3").quad("x", 5, 0.0, 2.0).unwrap();
        assert_relative_eq!(value, 4.0, epsilon = 1e-10);
        assert!(parse("x").quad("x", 5, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_quad_refuses_poles() {
        assert!(parse("1/x").quad("x", 20, -1.0, 1.0).is_err());
        assert!(parse("1/x").quad("x", 20, -1.0, 2.0).is_err());
        assert!(parse("1/x^2").quad("x", 20, -1.0, 2.0).is_err());
        assert!(parse("1/x").quad("x", 20, 0.0, 1.0).is_err());
        assert!(parse("tan(x)").quad("x", 20, 0.0, 2.0).is_err());
        assert!(parse("sqrt(x)").quad("x", 20, -1.0, 1.0).is_err());
        let value = parse("1/x").quad("x", 20, -2.0, -1.0).unwrap();
        assert_relative_eq!(value, -(2f64.ln()), epsilon = 1e-8);
        let value = parse("1/(x^2 + 1)").quad("x", 20, -1.0, 1.0).unwrap();
        assert_relative_eq!(value, std::f64::consts::FRAC_PI_2, epsilon = 1e-8);
    }

    #[test]
    fn test_singular_point_location() {
        let point = parse("1/(x - 1)").singular_point("x", 0.0, 2.0).unwrap().unwrap();
        assert_relative_eq!(point, 1.0, epsilon = 1e-2);
        assert_eq!(parse("exp(x)").singular_point("x", -5.0, 5.0).unwrap(), None);
    }

    #[test]
    fn test_antiderivative_increment() {
        let antiderivative = parse("x^3/3");
        assert_relative_eq!(antiderivative.antiderivative_increment("x", 0.0, 3.0).unwrap(), 9.0, epsilon = 1e-12);
        assert!(parse("ln(x)").antiderivative_increment("x", -1.0, 1.0).is_err());
    }

    #[test]
    fn test_huge_exponents_are_unsupported() {
        assert!(parse("sin(x^100000000000000000000)").integrate("x").is_err());
        assert!(parse("1/(x^1000000000 + 1)").integrate("x").is_err());
    }

    #[test]
    fn test_antiderivatives_numerically() {
        for f in ["x^2 exp(x)", "x cos(2x)", "1/(x^2 + 4)", "ln(x)"] {
            let antiderivative = parse(f).integrate("x").unwrap();
            let (norma, _) = antiderivative.compare_num1D("x", 1.0, 2.0, 20, 1e-5).unwrap();
            let values = parse(f).lambdify1D_from_linspace("x", 1.0, 2.0, 20).unwrap();
            let derivative = antiderivative.diff("x").lambdify1D_from_linspace("x", 1.0, 2.0, 20).unwrap();
            for (a, b) in values.iter().zip(derivative.iter()) {
                assert_relative_eq!(a, b, epsilon = 1e-9);
            }
            assert!(norma < 1e-5, "{}: {}", f, norma);
        }
    }
}
