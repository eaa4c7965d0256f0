//! # Canonical Form Module
//!
//! Algebraic normalisation of symbolic expressions. Every expression is taken
//! apart into a sum of terms, each term being a numeric coefficient times a
//! product of factors `base^power`. Like terms are collected, numerical
//! constants are folded and powers of equal bases are merged; the result is
//! rebuilt into an `Expr` in a deterministic order.
//!
//! ## Modes
//!
//! - **collect** (`simplify`): products of sums are kept as factors, only numeric
//!   coefficients are distributed: `2(x + 1) = 2x + 2`, but `x(x + 1)` stays.
//! - **expand** (`expand`): products are distributed over sums and small positive
//!   integer powers of sums are multiplied out: `(x + 1)^2 = x^2 + 2x + 1`.
//! - **decide** (`simplifies_to_zero`): full expansion, `tan`/`cot` rewritten as
//!   quotients of `sin` and `cos`, and sums used as factors normalised to a unit
//!   leading coefficient. An expression is zero iff no term survives.
//!
//! ## Term Order
//!
//! Polynomial terms first by descending degree, then terms carrying functions or
//! negative powers, the constant last: `x^2 + 3x + sin(x) + 1`.
//!
//! ## Rebuild Conventions
//!
//! The rebuilt tree mirrors what the parser produces for the printed text, so
//! `3x^2/2` parses and simplifies to the same tree: coefficient first, rational
//! coefficients as a division by the denominator, negative powers as a division,
//! subtraction for negative terms.
use crate::symbolic::symbolic_engine::{Expr, FunctionKind};
use crate::symbolic::utils::{approx_eq, is_integer, to_fraction};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// highest integer power of a sum multiplied out by expansion
const MAX_EXPANDED_POWER: f64 = 8.0;
const MAX_CLEARED_DENOMINATORS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CanonicalMode {
    pub expand: bool,
    pub decide: bool,
}

impl CanonicalMode {
    pub(crate) const COLLECT: Self = Self {
        expand: false,
        decide: false,
    };
    pub(crate) const EXPAND: Self = Self {
        expand: true,
        decide: false,
    };
    pub(crate) const DECIDE: Self = Self {
        expand: true,
        decide: true,
    };
}

/// `base^power` inside a term
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Factor {
    pub base: Expr,
    pub power: f64,
}

/// `coeff * Π base^power`, factors keyed by `factor_key` of their base
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Term {
    pub coeff: f64,
    pub factors: BTreeMap<String, Factor>,
}

/// sum of terms, keyed by term signature
#[derive(Clone, Debug, PartialEq, Default)]
pub(crate) struct TermSum {
    terms: BTreeMap<String, Term>,
}

/// Ordering key of a factor base: variables, then functions, then sums, then the rest.
pub(crate) fn factor_key(base: &Expr) -> String {
    let rank = match base {
        Expr::Var(_) => 0,
        Expr::Add(..) | Expr::Sub(..) => 2,
        other if other.function_kind().is_some() => 1,
        _ => 3,
    };
    format!("{}{:?}", rank, base)
}

fn power_expr(base: &Expr, power: f64) -> Expr {
    if approx_eq(power, 1.0) {
        base.clone()
    } else {
        Expr::Pow(Box::new(base.clone()), Box::new(Expr::Const(power)))
    }
}

fn product_of(acc: Option<Expr>, factor: Expr) -> Option<Expr> {
    Some(match acc {
        Some(acc) => Expr::Mul(Box::new(acc), Box::new(factor)),
        None => factor,
    })
}

/// values of functions at constant arguments that are exact integers
fn exact_function_value(kind: FunctionKind, arg: f64) -> Option<f64> {
    if arg == 0.0 {
        return match kind {
            FunctionKind::Exp | FunctionKind::Cos => Some(1.0),
            FunctionKind::Sin | FunctionKind::Tan | FunctionKind::Arcsin | FunctionKind::Arctan => {
                Some(0.0)
            }
            _ => None,
        };
    }
    if arg == 1.0 && kind == FunctionKind::Ln {
        return Some(0.0);
    }
    None
}

impl Term {
    pub(crate) fn constant(coeff: f64) -> Self {
        Term {
            coeff,
            factors: BTreeMap::new(),
        }
    }

    pub(crate) fn atom(base: Expr, power: f64) -> Self {
        let mut factors = BTreeMap::new();
        factors.insert(factor_key(&base), Factor { base, power });
        Term {
            coeff: 1.0,
            factors,
        }
    }

    pub(crate) fn is_constant(&self) -> bool {
        self.factors.is_empty()
    }

    fn signature(&self) -> String {
        self.factors
            .iter()
            .map(|(key, f)| format!("{}^{:?}", key, f.power))
            .collect::<Vec<_>>()
            .join("*")
    }

    /// total power of the variables in the term
    pub(crate) fn degree(&self) -> f64 {
        self.factors
            .values()
            .filter(|f| matches!(f.base, Expr::Var(_)))
            .map(|f| f.power)
            .sum()
    }

    fn order_class(&self) -> u8 {
        if self.factors.is_empty() {
            2
        } else if self
            .factors
            .values()
            .all(|f| matches!(f.base, Expr::Var(_)) && f.power > 0.0)
        {
            0
        } else {
            1
        }
    }

    pub(crate) fn scaled(&self, k: f64) -> Term {
        Term {
            coeff: self.coeff * k,
            factors: self.factors.clone(),
        }
    }

    /// the same term with coefficient 1
    pub(crate) fn monic(&self) -> Term {
        self.scaled(1.0 / self.coeff)
    }

    fn multiply(&self, other: &Term, mode: CanonicalMode) -> Term {
        let mut factors = self.factors.clone();
        for (key, factor) in &other.factors {
            factors
                .entry(key.clone())
                .and_modify(|f| f.power += factor.power)
                .or_insert_with(|| factor.clone());
        }
        Term {
            coeff: self.coeff * other.coeff,
            factors,
        }
        .finish(mode)
    }

    /// drops vanished powers and merges exponentials: e^a * e^b = e^(a + b)
    fn finish(mut self, mode: CanonicalMode) -> Term {
        self.factors.retain(|_, f| !approx_eq(f.power, 0.0));
        let exp_keys: Vec<String> = self
            .factors
            .iter()
            .filter(|(_, f)| matches!(f.base, Expr::Exp(_)))
            .map(|(key, _)| key.clone())
            .collect();
        let needs_merge = exp_keys.len() > 1
            || exp_keys
                .first()
                .and_then(|key| self.factors.get(key))
                .is_some_and(|f| !approx_eq(f.power, 1.0));
        if !needs_merge {
            return self;
        }
        let mut exponent = Expr::Const(0.0);
        for key in exp_keys {
            if let Some(Factor {
                base: Expr::Exp(arg),
                power,
            }) = self.factors.remove(&key)
            {
                exponent = exponent + Expr::Const(power) * *arg;
            }
        }
        let exponent = TermSum::from_expr(&exponent, mode);
        if exponent.as_constant() == Some(0.0) {
            return self;
        }
        let merged = Expr::Exp(Box::new(exponent.to_expr()));
        self.factors
            .insert(factor_key(&merged), Factor { base: merged, power: 1.0 });
        self
    }

    /// Rebuilds the term as an expression, sign included.
    pub(crate) fn to_expr(&self) -> Expr {
        let mut numerator_factors = Vec::new();
        let mut denominator_factors = Vec::new();
        for factor in self.factors.values() {
            if factor.power < 0.0 {
                denominator_factors.push(power_expr(&factor.base, -factor.power));
            } else {
                numerator_factors.push(power_expr(&factor.base, factor.power));
            }
        }
        let (numer_coeff, denom_coeff) = match to_fraction(self.coeff) {
            Some(ratio) => (*ratio.numer() as f64, *ratio.denom() as f64),
            None => (self.coeff, 1.0),
        };
        let mut numerator = None;
        if numer_coeff != 1.0 || numerator_factors.is_empty() {
            numerator = Some(Expr::Const(numer_coeff));
        }
        for factor in numerator_factors {
            numerator = product_of(numerator, factor);
        }
        let numerator = numerator.unwrap_or(Expr::Const(numer_coeff));
        let mut denominator = None;
        if denom_coeff != 1.0 {
            denominator = Some(Expr::Const(denom_coeff));
        }
        for factor in denominator_factors {
            denominator = product_of(denominator, factor);
        }
        match denominator {
            Some(denominator) => Expr::Div(Box::new(numerator), Box::new(denominator)),
            None => numerator,
        }
    }
}

impl TermSum {
    pub(crate) fn zero() -> Self {
        TermSum::default()
    }

    pub(crate) fn constant(c: f64) -> Self {
        TermSum::from_term(Term::constant(c))
    }

    pub(crate) fn from_term(term: Term) -> Self {
        let mut sum = TermSum::zero();
        sum.add_term(term);
        sum
    }

    pub(crate) fn len(&self) -> usize {
        self.terms.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub(crate) fn single(&self) -> Option<&Term> {
        if self.terms.len() == 1 {
            self.terms.values().next()
        } else {
            None
        }
    }

    /// value of a sum without variable factors
    pub(crate) fn as_constant(&self) -> Option<f64> {
        match self.terms.len() {
            0 => Some(0.0),
            1 => self
                .terms
                .values()
                .next()
                .filter(|t| t.is_constant())
                .map(|t| t.coeff),
            _ => None,
        }
    }

    pub(crate) fn add_term(&mut self, term: Term) {
        if term.coeff == 0.0 {
            return;
        }
        let signature = term.signature();
        match self.terms.get_mut(&signature) {
            Some(existing) => {
                if approx_eq(existing.coeff, -term.coeff) {
                    self.terms.remove(&signature);
                } else {
                    existing.coeff += term.coeff;
                }
            }
            None => {
                self.terms.insert(signature, term);
            }
        }
    }

    pub(crate) fn add(mut self, other: TermSum) -> TermSum {
        for (_, term) in other.terms {
            self.add_term(term);
        }
        self
    }

    pub(crate) fn scale(&self, k: f64) -> TermSum {
        if k == 0.0 {
            return TermSum::zero();
        }
        let mut out = TermSum::zero();
        for term in self.terms.values() {
            out.add_term(term.scaled(k));
        }
        out
    }

    /// Terms in canonical order.
    pub(crate) fn ordered(&self) -> Vec<&Term> {
        let mut terms: Vec<&Term> = self.terms.values().collect();
        terms.sort_by(|a, b| {
            a.order_class()
                .cmp(&b.order_class())
                .then(b.degree().partial_cmp(&a.degree()).unwrap_or(Ordering::Equal))
                .then(a.signature().cmp(&b.signature()))
        });
        terms
    }

    /// A multi-term sum as a single factor `(sum)^power`.
    fn atom_term(&self, power: f64, mode: CanonicalMode) -> Term {
        let mut coeff = 1.0;
        let mut base = self.clone();
        if mode.decide {
            let leading = self.ordered().first().map(|t| t.coeff).unwrap_or(1.0);
            if leading != 1.0 && (leading > 0.0 || is_integer(power)) {
                base = self.scale(1.0 / leading);
                coeff = leading.powf(power);
            }
        }
        let mut term = Term::atom(base.to_expr(), power);
        term.coeff = coeff;
        term
    }

    fn as_factor_term(&self, mode: CanonicalMode) -> Term {
        match self.terms.len() {
            0 => Term::constant(0.0),
            1 => self
                .terms
                .values()
                .next()
                .cloned()
                .unwrap_or_else(|| Term::constant(0.0)),
            _ => self.atom_term(1.0, mode),
        }
    }

    /// `(a + b) * c / (a + b)` must cancel instead of being distributed
    fn divides_out(&self, other: &TermSum, mode: CanonicalMode) -> bool {
        if self.len() < 2 {
            return false;
        }
        let Some(term) = other.single() else {
            return false;
        };
        let atom = self.as_factor_term(mode);
        atom.factors
            .keys()
            .any(|key| term.factors.get(key).is_some_and(|f| f.power < 0.0))
    }

    pub(crate) fn multiply(&self, other: &TermSum, mode: CanonicalMode) -> TermSum {
        if self.is_empty() || other.is_empty() {
            return TermSum::zero();
        }
        if let Some(c) = self.as_constant() {
            return other.scale(c);
        }
        if let Some(c) = other.as_constant() {
            return self.scale(c);
        }
        if let (Some(a), Some(b)) = (self.single(), other.single()) {
            return TermSum::from_term(a.multiply(b, mode));
        }
        if mode.expand && !self.divides_out(other, mode) && !other.divides_out(self, mode) {
            let mut out = TermSum::zero();
            for a in self.terms.values() {
                for b in other.terms.values() {
                    out.add_term(a.multiply(b, mode));
                }
            }
            return out;
        }
        let a = self.as_factor_term(mode);
        let b = other.as_factor_term(mode);
        TermSum::from_term(a.multiply(&b, mode))
    }

    pub(crate) fn power_const(&self, n: f64, mode: CanonicalMode) -> TermSum {
        if n == 0.0 {
            return TermSum::constant(1.0);
        }
        if self.is_empty() {
            return if n > 0.0 {
                TermSum::zero()
            } else {
                TermSum::constant(f64::INFINITY)
            };
        }
        if n == 1.0 {
            return self.clone();
        }
        if let Some(term) = self.single() {
            if term.coeff > 0.0 || is_integer(n) {
                let factors = term
                    .factors
                    .iter()
                    .map(|(key, f)| {
                        (
                            key.clone(),
                            Factor {
                                base: f.base.clone(),
                                power: f.power * n,
                            },
                        )
                    })
                    .collect();
                let raised = Term {
                    coeff: term.coeff.powf(n),
                    factors,
                };
                return TermSum::from_term(raised.finish(mode));
            }
            // negative coefficient under a fractional power
            return TermSum::from_term(Term::atom(term.to_expr(), n));
        }
        if mode.expand && is_integer(n) && n >= 2.0 && n <= MAX_EXPANDED_POWER {
            let mut acc = self.clone();
            for _ in 1..(n.round() as usize) {
                acc = acc.multiply(self, mode);
            }
            return acc;
        }
        TermSum::from_term(self.atom_term(n, mode))
    }

    fn power(&self, exponent: &TermSum, mode: CanonicalMode) -> TermSum {
        if let Some(n) = exponent.as_constant() {
            return self.power_const(n, mode);
        }
        // (e^u)^v = e^(u v)
        if let Some(term) = self.single() {
            if term.coeff == 1.0 && term.factors.len() == 1 {
                if let Some(Factor {
                    base: Expr::Exp(arg),
                    power,
                }) = term.factors.values().next()
                {
                    let new_exponent =
                        Expr::Const(*power) * arg.as_ref().clone() * exponent.to_expr();
                    return TermSum::function(FunctionKind::Exp, &new_exponent, mode);
                }
            }
        }
        let base = self.to_expr();
        TermSum::from_term(Term::atom(
            Expr::Pow(Box::new(base), Box::new(exponent.to_expr())),
            1.0,
        ))
    }

    fn function(kind: FunctionKind, arg: &Expr, mode: CanonicalMode) -> TermSum {
        let arg_sum = TermSum::from_expr(arg, mode);
        if let Some(value) = arg_sum
            .as_constant()
            .and_then(|c| exact_function_value(kind, c))
        {
            return TermSum::constant(value);
        }
        let arg_expr = arg_sum.to_expr();
        match (kind, &arg_expr) {
            (FunctionKind::Exp, Expr::Ln(inner)) | (FunctionKind::Ln, Expr::Exp(inner)) => {
                return TermSum::from_expr(inner, mode);
            }
            (FunctionKind::Tan, _) if mode.decide => {
                let mut term = Term::atom(Expr::sin(Box::new(arg_expr.clone())), 1.0);
                let cos = Expr::cos(Box::new(arg_expr.clone()));
                term.factors
                    .insert(factor_key(&cos), Factor { base: cos, power: -1.0 });
                return TermSum::from_term(term);
            }
            (FunctionKind::Cot, _) if mode.decide => {
                let mut term = Term::atom(Expr::cos(Box::new(arg_expr.clone())), 1.0);
                let sin = Expr::sin(Box::new(arg_expr.clone()));
                term.factors
                    .insert(factor_key(&sin), Factor { base: sin, power: -1.0 });
                return TermSum::from_term(term);
            }
            _ => {}
        }
        TermSum::from_term(Term::atom(Expr::apply_function(kind, arg_expr), 1.0))
    }

    /// Decomposes an expression into its canonical sum of terms.
    pub(crate) fn from_expr(expr: &Expr, mode: CanonicalMode) -> TermSum {
        match expr {
            Expr::Const(c) => TermSum::constant(*c),
            Expr::Var(_) => TermSum::from_term(Term::atom(expr.clone(), 1.0)),
            Expr::Add(lhs, rhs) => {
                TermSum::from_expr(lhs, mode).add(TermSum::from_expr(rhs, mode))
            }
            Expr::Sub(lhs, rhs) => {
                TermSum::from_expr(lhs, mode).add(TermSum::from_expr(rhs, mode).scale(-1.0))
            }
            Expr::Mul(lhs, rhs) => {
                TermSum::from_expr(lhs, mode).multiply(&TermSum::from_expr(rhs, mode), mode)
            }
            Expr::Div(lhs, rhs) => {
                let reciprocal = TermSum::from_expr(rhs, mode).power_const(-1.0, mode);
                TermSum::from_expr(lhs, mode).multiply(&reciprocal, mode)
            }
            Expr::Pow(base, exponent) => TermSum::from_expr(base, mode)
                .power(&TermSum::from_expr(exponent, mode), mode),
            _ => match (expr.function_kind(), expr.function_argument()) {
                (Some(kind), Some(arg)) => TermSum::function(kind, arg, mode),
                _ => TermSum::from_term(Term::atom(expr.clone(), 1.0)),
            },
        }
    }

    /// `k` such that `self = k * other` term by term
    pub(crate) fn ratio_to(&self, other: &TermSum) -> Option<f64> {
        if self.is_empty() || self.len() != other.len() {
            return None;
        }
        let mut ratio: Option<f64> = None;
        for (signature, term) in &self.terms {
            let counterpart = other.terms.get(signature)?;
            let r = term.coeff / counterpart.coeff;
            match ratio {
                Some(previous) if !approx_eq(previous, r) => return None,
                _ => ratio = Some(r),
            }
        }
        ratio
    }

    /// `base^k` clearing the most negative power of the first factor found in a
    /// denominator
    fn lowest_denominator(&self) -> Option<Term> {
        let (key, base) = self.terms.values().find_map(|term| {
            term.factors
                .iter()
                .find(|(_, f)| f.power < 0.0)
                .map(|(key, f)| (key.clone(), f.base.clone()))
        })?;
        let lowest = self
            .terms
            .values()
            .filter_map(|term| term.factors.get(&key).map(|f| f.power))
            .fold(0.0, f64::min);
        let mut factors = BTreeMap::new();
        factors.insert(
            key,
            Factor {
                base,
                power: -lowest,
            },
        );
        Some(Term {
            coeff: 1.0,
            factors,
        })
    }

    /// Rebuilds the sum, terms in canonical order.
    pub(crate) fn to_expr(&self) -> Expr {
        let mut acc: Option<Expr> = None;
        for term in self.ordered() {
            acc = Some(match acc {
                None => term.to_expr(),
                Some(prev) if term.coeff < 0.0 => {
                    Expr::Sub(Box::new(prev), Box::new(term.scaled(-1.0).to_expr()))
                }
                Some(prev) => Expr::Add(Box::new(prev), Box::new(term.to_expr())),
            });
        }
        acc.unwrap_or(Expr::Const(0.0))
    }
}

impl Expr {
    //___________________________________CANONICAL FORM____________________________________

    pub(crate) fn canonical_terms(&self, mode: CanonicalMode) -> TermSum {
        TermSum::from_expr(self, mode)
    }

    /// Collects like terms, folds constants and merges powers, keeping products of
    /// sums unexpanded.
    /// # Example
    /// ```
    /// use RustedIntegrals::symbolic::symbolic_engine::Expr;
    /// let expr = Expr::parse_expression("x + 2x + 3 - 1").unwrap();
    /// assert_eq!(expr.simplify(), Expr::parse_expression("3x + 2").unwrap());
    /// ```
    pub fn simplify(&self) -> Expr {
        self.canonical_terms(CanonicalMode::COLLECT).to_expr()
    }

    /// Distributes products over sums and multiplies out integer powers of sums.
    pub fn expand(&self) -> Expr {
        self.canonical_terms(CanonicalMode::EXPAND).to_expr()
    }

    /// Addends of the simplified expression in canonical order, each with its sign.
    pub fn ordered_terms(&self) -> Vec<Expr> {
        self.canonical_terms(CanonicalMode::COLLECT)
            .ordered()
            .into_iter()
            .map(|term| term.to_expr())
            .collect()
    }

    /// true if the expression reduces to 0 after full expansion with trigonometric
    /// quotients rewritten in terms of sine and cosine.
    ///
    /// Denominators are cleared one at a time: `x/(x + 1) + 1/(x + 1) - 1` is
    /// multiplied by `x + 1` and decided again.
    pub fn simplifies_to_zero(&self) -> bool {
        let mut sum = self.canonical_terms(CanonicalMode::DECIDE);
        for _ in 0..MAX_CLEARED_DENOMINATORS {
            if sum.is_empty() {
                return true;
            }
            let Some(denominator) = sum.lowest_denominator() else {
                return false;
            };
            let mut cleared = TermSum::zero();
            for term in sum.terms.values() {
                cleared.add_term(term.multiply(&denominator, CanonicalMode::DECIDE));
            }
            sum = cleared.to_expr().canonical_terms(CanonicalMode::DECIDE);
        }
        sum.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Expr {
        Expr::parse_expression(text).unwrap()
    }

    #[test]
    fn test_collect_like_terms() {
        assert_eq!(parse("x + x").simplify(), parse("2x"));
        assert_eq!(parse("x + 2x + 3 - 1").simplify(), parse("3x + 2"));
        assert_eq!(parse("x - x").simplify(), Expr::Const(0.0));
    }

    #[test]
    fn test_canonical_input_is_reproduced() {
        for text in ["x^2 + 3x", "x^3/3 + 3x^2/2", "5x", "-cos(x)", "-x^2/2", "x^2 - 1"] {
            assert_eq!(parse(text).simplify(), parse(text), "{}", text);
        }
    }

    #[test]
    fn test_term_order() {
        assert_eq!(parse("3 + x + x^2").simplify(), parse("x^2 + x + 3"));
        assert_eq!(parse("sin(x) + 1 + x").simplify(), parse("x + sin(x) + 1"));
    }

    #[test]
    fn test_numeric_coefficients_are_distributed() {
        assert_eq!(parse("2(x + 1)").simplify(), parse("2x + 2"));
        assert_eq!(parse("(x + 1)/2").simplify(), parse("x/2 + 1/2"));
    }

    #[test]
    fn test_products_of_sums_are_kept() {
        let expr = parse("x(x + 1)");
        assert_eq!(expr.simplify(), expr);
        assert_eq!(expr.expand(), parse("x^2 + x"));
    }

    #[test]
    fn test_expand_square() {
        assert_eq!(parse("(x + 1)^2").expand(), parse("x^2 + 2x + 1"));
        assert_eq!(parse("(x - 1)(x + 1)").expand(), parse("x^2 - 1"));
    }

    #[test]
    fn test_powers_merge() {
        assert_eq!(parse("x * x^2").simplify(), parse("x^3"));
        assert_eq!(parse("x^3 / x").simplify(), parse("x^2"));
        assert_eq!(parse("x / x").simplify(), Expr::Const(1.0));
        assert_eq!(parse("1/x").simplify(), parse("1/x"));
    }

    #[test]
    fn test_exact_function_values() {
        assert_eq!(parse("sin(0) + exp(0) + ln(1)").simplify(), Expr::Const(1.0));
        assert_eq!(parse("exp(ln(x))").simplify(), parse("x"));
    }

    #[test]
    fn test_exponentials_merge() {
        assert_eq!(parse("exp(x) * exp(x)").simplify(), parse("exp(2x)"));
        assert_eq!(parse("exp(x) / exp(x)").simplify(), Expr::Const(1.0));
    }

    #[test]
    fn test_ordered_terms() {
        let terms = parse("3x + x^2").ordered_terms();
        assert_eq!(terms, vec![parse("x^2"), parse("3x")]);
        let terms = parse("x^2 - 3x").ordered_terms();
        assert_eq!(terms, vec![parse("x^2"), parse("-3x")]);
    }

    #[test]
    fn test_simplifies_to_zero() {
        assert!(parse("(x + 1)^2 - x^2 - 2x - 1").simplifies_to_zero());
        assert!(parse("tan(x) - sin(x)/cos(x)").simplifies_to_zero());
        assert!(parse("x/(x + 1) + 1/(x + 1) - 1").simplifies_to_zero());
        assert!(parse("2/(2x + 2) - 1/(x + 1)").simplifies_to_zero());
        assert!(!parse("x").simplifies_to_zero());
        assert!(!parse("sin(x) - cos(x)").simplifies_to_zero());
    }
}
