#[cfg(test)]
mod tests {
    use crate::integration::procedure::ProcedureAssembler;
    use crate::integration::step::{Procedure, StepKind};
    use crate::symbolic::symbolic_engine::Expr;
    use crate::symbolic::symbolic_traits::{MathEngine, SymbolicEngine};
    use crate::symbolic::symbolic_typeset::Notation;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeSet;

    /// Delegates to the native engine, failing on the operations named in `fail_on`.
    struct FaultyEngine {
        fail_on: &'static [&'static str],
    }

    impl FaultyEngine {
        fn check(&self, operation: &str) -> Result<(), String> {
            if self.fail_on.iter().any(|name| *name == operation) {
                Err(format!("{} is not available", operation))
            } else {
                Ok(())
            }
        }
    }

    impl MathEngine for FaultyEngine {
        fn integrate(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
            self.check("integrate")?;
            SymbolicEngine.integrate(expr, var)
        }
        fn differentiate(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
            self.check("differentiate")?;
            SymbolicEngine.differentiate(expr, var)
        }
        fn simplify(&self, expr: &Expr) -> Result<Expr, String> {
            self.check("simplify")?;
            SymbolicEngine.simplify(expr)
        }
        fn expand(&self, expr: &Expr) -> Result<Expr, String> {
            self.check("expand")?;
            SymbolicEngine.expand(expr)
        }
        fn ordered_terms(&self, expr: &Expr) -> Result<Vec<Expr>, String> {
            self.check("ordered_terms")?;
            SymbolicEngine.ordered_terms(expr)
        }
        fn is_zero(&self, expr: &Expr) -> Result<bool, String> {
            self.check("is_zero")?;
            SymbolicEngine.is_zero(expr)
        }
        fn render(&self, expr: &Expr, notation: Notation) -> String {
            SymbolicEngine.render(expr, notation)
        }
        fn get_type(&self) -> String {
            "faulty".to_string()
        }
    }

    fn procedure_with(engine: &dyn MathEngine, text: &str, notation: Notation) -> Procedure {
        let expr = Expr::parse_expression(text).unwrap();
        let antiderivative = expr.integrate("x").unwrap();
        ProcedureAssembler::new(engine, notation).assemble(&expr, "x", &antiderivative)
    }

    fn procedure(text: &str) -> Procedure {
        procedure_with(&SymbolicEngine, text, Notation::Plain)
    }

    fn result_of(procedure: &Procedure, kind: StepKind) -> String {
        procedure
            .find(kind)
            .and_then(|step| step.formatted_result.clone())
            .unwrap_or_default()
    }

    fn assert_consecutive(procedure: &Procedure) {
        let orders: Vec<usize> = procedure.iter().map(|step| step.order).collect();
        let expected: Vec<usize> = (1..=procedure.len()).collect();
        assert_eq!(orders, expected);
    }

    fn term_indices(procedure: &Procedure) -> Vec<usize> {
        procedure
            .iter()
            .filter_map(|step| match step.kind {
                StepKind::TermIntegration { term } => Some(term),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_polynomial_sum() {
        let procedure = procedure("x^2 + 3x");
        assert_consecutive(&procedure);
        assert_eq!(result_of(&procedure, StepKind::IntegralToSolve), "∫(x^2 + 3x) dx");
        assert_eq!(
            procedure.find(StepKind::RuleIdentification).unwrap().description,
            "Rule to apply: power rule"
        );
        assert!(procedure.find(StepKind::Expansion).is_none());
        assert_eq!(result_of(&procedure, StepKind::Linearity), "∫x^2 dx + ∫3x dx");
        assert_eq!(term_indices(&procedure), vec![1, 2, 2]);
        assert_eq!(result_of(&procedure, StepKind::Combination), "x^3/3 + 3x^2/2");
        assert!(procedure.find(StepKind::Simplification).is_none());
        assert_eq!(result_of(&procedure, StepKind::FinalResult), "x^3/3 + 3x^2/2 + C");
        let verification = procedure.find(StepKind::Verification).unwrap();
        assert!(verification.is_verification);
        assert_eq!(
            verification.formatted_result.as_deref(),
            Some("d/dx(x^3/3 + 3x^2/2) = x^2 + 3x")
        );
        assert_eq!(procedure.len(), 9);
        assert_eq!(procedure.steps().last().unwrap().kind, StepKind::Verification);
    }

    #[test]
    fn test_constant() {
        let procedure = procedure("5");
        assert_consecutive(&procedure);
        assert_eq!(
            procedure.find(StepKind::RuleIdentification).unwrap().description,
            "Rule to apply: constant rule"
        );
        let term = procedure.find(StepKind::TermIntegration { term: 1 }).unwrap();
        assert_eq!(term.explanation.as_deref(), Some("∫k dx = k·x"));
        assert_eq!(term.formatted_result.as_deref(), Some("∫5 dx = 5x"));
        assert!(procedure.find(StepKind::Linearity).is_none());
        assert_eq!(result_of(&procedure, StepKind::FinalResult), "5x + C");
    }

    #[test]
    fn test_sine() {
        let procedure = procedure("sin(x)");
        assert_consecutive(&procedure);
        assert_eq!(
            procedure.find(StepKind::RuleIdentification).unwrap().description,
            "Rule to apply: sine rule"
        );
        let term = procedure.find(StepKind::TermIntegration { term: 1 }).unwrap();
        assert_eq!(term.explanation.as_deref(), Some("∫sin(x) dx = -cos(x)"));
        assert_eq!(result_of(&procedure, StepKind::FinalResult), "-cos(x) + C");
        assert!(procedure.has_verification());
    }

    #[test]
    fn test_engine_failure_gives_single_fallback_step() {
        let engine = FaultyEngine { fail_on: &["integrate"] };
        let expr = Expr::parse_expression("x^2 + 3x").unwrap();
        let antiderivative = expr.integrate("x").unwrap();
        let procedure =
            ProcedureAssembler::new(&engine, Notation::Plain).assemble(&expr, "x", &antiderivative);
        assert!(procedure.is_fallback());
        let step = &procedure.steps()[0];
        assert_eq!(step.order, 1);
        assert_eq!(step.description, "Integral computed");
        assert_eq!(
            step.formatted_result.as_deref(),
            Some("∫(x^2 + 3x) dx = x^3/3 + 3x^2/2 + C")
        );
        let direct = ProcedureAssembler::new(&engine, Notation::Plain).try_assemble(
            &expr,
            "x",
            &antiderivative,
        );
        assert!(direct.is_err());
    }

    #[test]
    fn test_every_engine_failure_is_absorbed() {
        let failures: [&'static [&'static str]; 4] =
            [&["expand"], &["simplify"], &["differentiate"], &["ordered_terms"]];
        for fail_on in failures {
            let engine = FaultyEngine { fail_on };
            let procedure = procedure_with(&engine, "x^2 + 3x", Notation::Latex);
            assert!(procedure.is_fallback(), "{:?}", fail_on);
            assert_eq!(
                procedure.steps()[0].formatted_result.as_deref(),
                Some("\\int \\left(x^{2} + 3 x\\right)\\, dx = \\frac{x^{3}}{3} + \\frac{3 x^{2}}{2} + C")
            );
        }
    }

    #[test]
    fn test_undecided_verification_is_silent() {
        let engine = FaultyEngine { fail_on: &["is_zero"] };
        let procedure = procedure_with(&engine, "x^2 + 3x", Notation::Plain);
        assert!(!procedure.is_fallback());
        assert!(!procedure.has_verification());
        assert_eq!(procedure.steps().last().unwrap().kind, StepKind::FinalResult);
        assert_consecutive(&procedure);
    }

    #[test]
    fn test_wrong_antiderivative_is_not_verified() {
        let expr = Expr::parse_expression("x^2").unwrap();
        let wrong = Expr::parse_expression("x^3").unwrap();
        let procedure =
            ProcedureAssembler::new(&SymbolicEngine, Notation::Plain).assemble(&expr, "x", &wrong);
        assert!(!procedure.has_verification());
        assert_eq!(result_of(&procedure, StepKind::FinalResult), "x^3 + C");
    }

    #[test]
    fn test_expansion_step() {
        let procedure = procedure("(x + 1)^2");
        assert_consecutive(&procedure);
        assert_eq!(result_of(&procedure, StepKind::Expansion), "∫(x^2 + 2x + 1) dx");
        assert_eq!(
            result_of(&procedure, StepKind::Linearity),
            "∫x^2 dx + ∫2x dx + ∫1 dx"
        );
        let distinct: BTreeSet<usize> = term_indices(&procedure).into_iter().collect();
        assert_eq!(distinct, BTreeSet::from([1, 2, 3]));
        assert!(procedure.has_verification());
    }

    #[test]
    fn test_simplification_step() {
        let expr = Expr::parse_expression("2x^2").unwrap();
        let third = Expr::parse_expression("x^3/3").unwrap();
        let unsimplified = third.clone() + third;
        let procedure = ProcedureAssembler::new(&SymbolicEngine, Notation::Plain).assemble(
            &expr,
            "x",
            &unsimplified,
        );
        assert_eq!(result_of(&procedure, StepKind::Simplification), "2x^3/3");
        assert!(procedure.has_verification());
    }

    #[test]
    fn test_latex_notation() {
        let procedure = procedure_with(&SymbolicEngine, "x^2 + 3x", Notation::Latex);
        assert_eq!(
            result_of(&procedure, StepKind::IntegralToSolve),
            "\\int \\left(x^{2} + 3 x\\right)\\, dx"
        );
        assert_eq!(
            result_of(&procedure, StepKind::FinalResult),
            "\\frac{x^{3}}{3} + \\frac{3 x^{2}}{2} + C"
        );
        assert!(result_of(&procedure, StepKind::Verification).starts_with("\\frac{d}{dx}\\left("));
    }

    #[test]
    fn test_power_rule_exponent_is_raised_by_one() {
        let cases = [
            ("2x^3", "∫x^3 dx = x^4/4"),
            ("x^5", "∫x^5 dx = x^6/6"),
            ("-3x^2", "∫x^2 dx = x^3/3"),
            ("7x", "∫x dx = x²/2"),
            ("5x^(1/2)", "∫x^(1/2) dx = x^(3/2)/(3/2)"),
            ("4/x^3", "∫x^(-3) dx = x^(-2)/(-2)"),
        ];
        for (text, formula) in cases {
            let procedure = procedure(text);
            assert!(
                procedure
                    .iter()
                    .any(|step| step.explanation.as_deref() == Some(formula)),
                "{}: {}",
                text,
                procedure
            );
        }
    }

    #[test]
    fn test_mixed_transcendental_sum() {
        let procedure = procedure("sin(x) + cos(x) + exp(x)");
        assert_consecutive(&procedure);
        // first matching check wins
        assert_eq!(
            procedure.find(StepKind::RuleIdentification).unwrap().description,
            "Rule to apply: sine rule"
        );
        assert_eq!(procedure.count(StepKind::Linearity), 1);
        assert_eq!(procedure.count(StepKind::Combination), 1);
        let distinct: BTreeSet<usize> = term_indices(&procedure).into_iter().collect();
        assert_eq!(distinct.len(), 3);
        assert!(procedure.has_verification());
    }

    #[test]
    fn test_random_polynomials() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let degree: usize = rng.random_range(1..=5);
            let text = (0..=degree)
                .rev()
                .map(|k| {
                    let coeff: i32 = rng.random_range(1..=9);
                    match k {
                        0 => format!("{}", coeff),
                        1 => format!("{}x", coeff),
                        _ => format!("{}x^{}", coeff, k),
                    }
                })
                .collect::<Vec<_>>()
                .join(" + ");
            let procedure = procedure(&text);
            assert_consecutive(&procedure);
            assert!(!procedure.is_fallback(), "{}", text);
            assert_eq!(procedure.count(StepKind::Linearity), 1, "{}", text);
            assert_eq!(procedure.count(StepKind::Combination), 1, "{}", text);
            let indices = term_indices(&procedure);
            let distinct: BTreeSet<usize> = indices.iter().copied().collect();
            assert_eq!(distinct.len(), degree + 1, "{}", text);
            // term steps sit between the linearity and the combine steps
            let linearity = procedure.find(StepKind::Linearity).unwrap().order;
            let combination = procedure.find(StepKind::Combination).unwrap().order;
            assert!(procedure
                .iter()
                .filter(|step| matches!(step.kind, StepKind::TermIntegration { .. }))
                .all(|step| step.order > linearity && step.order < combination));
            assert!(procedure.has_verification(), "{}", text);
        }
    }
}
