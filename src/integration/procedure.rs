//! # Procedure assembly
//!
//! Orchestrates the worked solution of `∫f dx`:
//! 1. the integral to solve
//! 2. the rule to apply (omitted when the integrand cannot be classified)
//! 3. the expanded integrand, if expanding changed more than the order of terms
//! 4. linearity: one integral per addend, the steps for every addend, the
//!    combined antiderivative (a single addend gets its steps directly)
//! 5. the simplified antiderivative, if simplifying changed it
//! 6. the result `F + C`
//! 7. a verification by differentiation, present only when the engine decides
//!    that `F' - f` is zero
//!
//! Any engine failure inside 1-7 discards the partial derivation and yields the
//! single step `∫f dx = F + C`.
use crate::integration::rule_classifier::classify;
use crate::integration::step::{DraftStep, Procedure, StepKind};
use crate::integration::term_steps::TermStepGenerator;
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_traits::MathEngine;
use crate::symbolic::symbolic_typeset::Notation;
use itertools::Itertools;
use log::{debug, info, warn};

pub struct ProcedureAssembler<'a> {
    engine: &'a dyn MathEngine,
    notation: Notation,
}

impl<'a> ProcedureAssembler<'a> {
    pub fn new(engine: &'a dyn MathEngine, notation: Notation) -> Self {
        ProcedureAssembler { engine, notation }
    }

    /// Worked solution of `∫expr dvar` with the given antiderivative. Never empty.
    /// # Example
    /// ```
    /// use RustedIntegrals::integration::procedure::ProcedureAssembler;
    /// use RustedIntegrals::symbolic::symbolic_engine::Expr;
    /// use RustedIntegrals::symbolic::symbolic_traits::SymbolicEngine;
    /// use RustedIntegrals::symbolic::symbolic_typeset::Notation;
    /// let expr = Expr::parse_expression("x^2 + 3x").unwrap();
    /// let antiderivative = expr.integrate("x").unwrap();
    /// let engine = SymbolicEngine;
    /// let procedure = ProcedureAssembler::new(&engine, Notation::Plain).assemble(&expr, "x", &antiderivative);
    /// for step in &procedure {
    ///     println!("{}", step);
    /// }
    /// assert!(procedure.has_verification());
    /// ```
    pub fn assemble(&self, expr: &Expr, var: &str, antiderivative: &Expr) -> Procedure {
        match self.try_assemble(expr, var, antiderivative) {
            Ok(procedure) => procedure,
            Err(e) => {
                warn!("step-by-step derivation of {} failed: {}", expr, e);
                Procedure::fallback(&self.integral(expr, var), &self.render(antiderivative))
            }
        }
    }

    /// Same as [`ProcedureAssembler::assemble`] but reports the first engine failure
    /// instead of falling back.
    pub fn try_assemble(
        &self,
        expr: &Expr,
        var: &str,
        antiderivative: &Expr,
    ) -> Result<Procedure, String> {
        let mut drafts = Vec::new();

        drafts.push(
            DraftStep::new(StepKind::IntegralToSolve, "Integral to solve")
                .with_result(self.integral(expr, var)),
        );

        if let Some(rule_info) = classify(expr, var) {
            drafts.push(
                DraftStep::new(
                    StepKind::RuleIdentification,
                    format!("Rule to apply: {}", rule_info.rule_name),
                )
                .with_explanation(rule_info.explanation),
            );
        }

        let expanded = self.engine.expand(expr)?;
        let collected = self.engine.simplify(expr)?;
        if expanded != collected && expanded.is_additive() {
            drafts.push(
                DraftStep::new(StepKind::Expansion, "Expand the expression")
                    .with_result(self.integral(&expanded, var)),
            );
        }

        let terms = if expanded.is_additive() {
            self.engine.ordered_terms(&expanded)?
        } else {
            Vec::new()
        };
        let generator = TermStepGenerator::new(self.engine, self.notation);
        if terms.len() > 1 {
            let split = terms.iter().map(|term| self.integral(term, var)).join(" + ");
            drafts.push(
                DraftStep::new(
                    StepKind::Linearity,
                    "Apply linearity of the integral (split the sum)",
                )
                .with_explanation("∫(f + g) dx = ∫f dx + ∫g dx")
                .with_result(split),
            );
            for (i, term) in terms.iter().enumerate() {
                let term_antiderivative = self.engine.integrate(term, var)?;
                debug!("term {}: ∫{} = {}", i + 1, term, term_antiderivative);
                drafts.extend(generator.generate(term, var, &term_antiderivative, i + 1));
            }
            drafts.push(
                DraftStep::new(StepKind::Combination, "Combine the integrated terms")
                    .with_result(self.render(antiderivative)),
            );
        } else {
            drafts.extend(generator.generate(&expanded, var, antiderivative, 1));
        }

        let simplified = self.engine.simplify(antiderivative)?;
        if simplified != *antiderivative {
            drafts.push(
                DraftStep::new(StepKind::Simplification, "Simplify the result")
                    .with_result(self.render(&simplified)),
            );
        }

        drafts.push(
            DraftStep::new(
                StepKind::FinalResult,
                "Final result (add the constant of integration)",
            )
            .with_result(format!("{} + C", self.render(antiderivative))),
        );

        let derivative = self
            .engine
            .simplify(&self.engine.differentiate(antiderivative, var)?)?;
        let difference = derivative.clone() - collected;
        match self.engine.is_zero(&difference) {
            Ok(true) => drafts.push(
                DraftStep::new(StepKind::Verification, "Verification (differentiate to check)")
                    .with_explanation(
                        "Differentiating the result must give back the original function",
                    )
                    .with_result(self.derivative_equation(antiderivative, &derivative, var)),
            ),
            Ok(false) => debug!("could not confirm d/d{}({}) = {}", var, antiderivative, expr),
            Err(e) => debug!("verification of {} undecided: {}", antiderivative, e),
        }

        let procedure = Procedure::from_drafts(drafts);
        info!("derivation of ∫{} d{} has {} steps", expr, var, procedure.len());
        Ok(procedure)
    }

    fn render(&self, expr: &Expr) -> String {
        self.engine.render(expr, self.notation)
    }

    fn integral(&self, expr: &Expr, var: &str) -> String {
        self.engine.render_integral(expr, var, self.notation)
    }

    /// `d/dx(F) = F'`
    fn derivative_equation(&self, antiderivative: &Expr, derivative: &Expr, var: &str) -> String {
        match self.notation {
            Notation::Plain => format!(
                "d/d{}({}) = {}",
                var,
                self.render(antiderivative),
                self.render(derivative)
            ),
            Notation::Latex => format!(
                "\\frac{{d}}{{d{}}}\\left({}\\right) = {}",
                var,
                self.render(antiderivative),
                self.render(derivative)
            ),
        }
    }
}
