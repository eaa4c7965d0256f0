//! Explains how one addend of the integrand was integrated.
//!
//! The shape of the term is matched against an ordered list of patterns:
//! constant, product `k·f(x)`, pure power `x^n`, the variable itself,
//! sine / cosine / exponential, anything else. The antiderivative shown in
//! every step is the one supplied by the caller; nothing is integrated here.
use crate::integration::step::{DraftStep, StepKind};
use crate::symbolic::symbolic_engine::{Expr, FunctionKind};
use crate::symbolic::symbolic_traits::MathEngine;
use crate::symbolic::symbolic_typeset::Notation;
use crate::symbolic::utils::{approx_eq, format_number, is_integer};
use log::debug;

/// exponent as it appears inside a plain formula: `3`, `(-2)`, `(3/2)`
fn exponent_text(n: f64) -> String {
    let text = format_number(n);
    if is_integer(n) && n >= 0.0 {
        text
    } else {
        format!("({})", text)
    }
}

/// `∫x^n dx = x^(n+1)/(n+1)`, or the logarithm for `n = -1`
fn power_rule_formula(n: f64) -> String {
    if approx_eq(n, -1.0) {
        return format!("∫x^{} dx = ln|x|", exponent_text(n));
    }
    let raised = exponent_text(n + 1.0);
    format!("∫x^{} dx = x^{}/{}", exponent_text(n), raised, raised)
}

/// `x^(n+1)/(n+1)` as an expression, `ln(x)` for `n = -1`
fn power_rule_expr(var: &str, n: f64) -> Expr {
    if approx_eq(n, -1.0) {
        return Expr::var(var).ln();
    }
    Expr::Div(
        Expr::var(var).pow(Expr::Const(n + 1.0)).boxed(),
        Expr::Const(n + 1.0).boxed(),
    )
}

/// Builds the draft steps explaining `∫term dvar`.
pub struct TermStepGenerator<'a> {
    engine: &'a dyn MathEngine,
    notation: Notation,
}

impl<'a> TermStepGenerator<'a> {
    pub fn new(engine: &'a dyn MathEngine, notation: Notation) -> Self {
        TermStepGenerator { engine, notation }
    }

    /// Steps for term number `term_index` (counted from 1). Never empty: when
    /// the term cannot be explained a single generic step is returned.
    pub fn generate(
        &self,
        term: &Expr,
        var: &str,
        term_antiderivative: &Expr,
        term_index: usize,
    ) -> Vec<DraftStep> {
        match self.try_generate(term, var, term_antiderivative, term_index) {
            Ok(steps) if !steps.is_empty() => steps,
            Ok(_) => vec![self.fallback(term, var, term_antiderivative, term_index)],
            Err(e) => {
                debug!("term {} ({}) explained generically: {}", term_index, term, e);
                vec![self.fallback(term, var, term_antiderivative, term_index)]
            }
        }
    }

    fn render(&self, expr: &Expr) -> String {
        self.engine.render(expr, self.notation)
    }

    fn integral(&self, expr: &Expr, var: &str) -> String {
        self.engine.render_integral(expr, var, self.notation)
    }

    /// `k·F` in the chosen notation
    fn scaled(&self, coeff: f64, expr: &Expr) -> String {
        let coeff = self.render(&Expr::Const(coeff));
        match self.notation {
            Notation::Plain => format!("{}·{}", coeff, self.render(expr)),
            Notation::Latex => format!("{} \\cdot {}", coeff, self.render(expr)),
        }
    }

    fn step(&self, term_index: usize, description: String) -> DraftStep {
        DraftStep::new(
            StepKind::TermIntegration { term: term_index },
            format!("Term {}: {}", term_index, description),
        )
    }

    /// `∫term dx = antiderivative`
    fn integral_equation(&self, term: &Expr, var: &str, antiderivative: &Expr) -> String {
        format!("{} = {}", self.integral(term, var), self.render(antiderivative))
    }

    fn fallback(&self, term: &Expr, var: &str, antiderivative: &Expr, term_index: usize) -> DraftStep {
        self.step(term_index, "integrate".to_string())
            .with_result(self.integral_equation(term, var, antiderivative))
    }

    fn try_generate(
        &self,
        term: &Expr,
        var: &str,
        antiderivative: &Expr,
        term_index: usize,
    ) -> Result<Vec<DraftStep>, String> {
        if var.is_empty() {
            return Err("no integration variable".to_string());
        }
        let variable = Expr::var(var);

        if term.is_constant_in(var) {
            if term.as_const().is_some_and(|k| !k.is_finite()) {
                return Err(format!("{} is not a finite constant", term));
            }
            let step = self
                .step(term_index, format!("integrate the constant {}", self.render(term)))
                .with_explanation("∫k dx = k·x")
                .with_result(self.integral_equation(term, var, antiderivative));
            return Ok(vec![step]);
        }

        if term.is_product() {
            let (coeff, variable_part) = term.as_coeff_mul();
            if !coeff.is_finite() {
                return Err(format!("non-finite coefficient in {}", term));
            }
            let mut steps = Vec::new();
            if !approx_eq(coeff, 1.0) {
                let coefficient = self.render(&Expr::Const(coeff));
                let factored = format!("{} {}", coefficient, self.integral(&variable_part, var));
                steps.push(
                    self.step(term_index, format!("factor out the constant {}", coefficient))
                        .with_explanation("∫k·f(x) dx = k·∫f(x) dx")
                        .with_result(factored),
                );
            }
            let power_step = match variable_part.as_power_of(var) {
                Some(n) if variable_part == variable => self
                    .step(term_index, format!("apply the power rule to {}", var))
                    .with_explanation("∫x dx = x²/2")
                    .with_result(self.power_result(coeff, var, n, antiderivative)),
                Some(n) => self
                    .step(
                        term_index,
                        format!("apply the power rule to {}", self.render(&variable_part)),
                    )
                    .with_explanation(power_rule_formula(n))
                    .with_result(self.power_result(coeff, var, n, antiderivative)),
                None => self
                    .step(term_index, format!("integrate {}", self.render(term)))
                    .with_result(self.integral_equation(term, var, antiderivative)),
            };
            steps.push(power_step);
            return Ok(steps);
        }

        if term.is_pure_power_of(var) {
            let n = term
                .as_power_of(var)
                .ok_or_else(|| format!("exponent of {} is not a number", term))?;
            let step = self
                .step(term_index, "apply the power rule".to_string())
                .with_explanation(power_rule_formula(n))
                .with_result(self.power_result(1.0, var, n, antiderivative));
            return Ok(vec![step]);
        }

        if *term == variable {
            let step = self
                .step(term_index, format!("integrate {}", var))
                .with_explanation("∫x dx = x²/2")
                .with_result(self.power_result(1.0, var, 1.0, antiderivative));
            return Ok(vec![step]);
        }

        let mnemonics = [
            (FunctionKind::Sin, "∫sin(x) dx = -cos(x)"),
            (FunctionKind::Cos, "∫cos(x) dx = sin(x)"),
            (FunctionKind::Exp, "∫e^x dx = e^x"),
        ];
        if let Some((kind, formula)) = mnemonics.iter().find(|(kind, _)| term.has_function(*kind)) {
            let step = self
                .step(term_index, format!("integrate {}", kind))
                .with_explanation(*formula)
                .with_result(self.integral_equation(term, var, antiderivative));
            return Ok(vec![step]);
        }

        let step = self
            .step(term_index, format!("integrate {}", self.render(term)))
            .with_result(self.integral_equation(term, var, antiderivative));
        Ok(vec![step])
    }

    /// `k·x^(n+1)/(n+1) = F`, the coefficient left out when it is 1
    fn power_result(&self, coeff: f64, var: &str, n: f64, antiderivative: &Expr) -> String {
        let power = power_rule_expr(var, n);
        let lhs = if approx_eq(coeff, 1.0) {
            self.render(&power)
        } else {
            self.scaled(coeff, &power)
        };
        format!("{} = {}", lhs, self.render(antiderivative))
    }
}
