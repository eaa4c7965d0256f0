//! # Integral calculator
//!
//! Entry point used by the CLI and by library callers: parse the function,
//! integrate it, optionally evaluate a definite integral, and explain the
//! result step by step.
//!
//! # Example
//! ```
//! use RustedIntegrals::integration::config::IntegratorConfig;
//! use RustedIntegrals::integration::service::calculate_integral;
//! use RustedIntegrals::symbolic::symbolic_typeset::Notation;
//! let config = IntegratorConfig { notation: Notation::Plain, ..Default::default() };
//! let result = calculate_integral("x^2", Some(("0", "1")), &config).unwrap();
//! assert_eq!(result.indefinite_integral_text, "x^3/3");
//! let definite = result.definite.unwrap();
//! assert!((definite.value - 1.0 / 3.0).abs() < 1e-12);
//! assert_eq!(definite.formatted, "∫[0, 1] x^2 dx = 1/3");
//! ```
use crate::integration::config::IntegratorConfig;
use crate::integration::error::IntegrationError;
use crate::integration::procedure::ProcedureAssembler;
use crate::integration::step::Procedure;
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_traits::{MathEngine, SymbolicEngine};
use crate::symbolic::symbolic_typeset::Notation;
use log::{debug, info, warn};
use rayon::prelude::*;

/// How the value of a definite integral was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefiniteMethod {
    FundamentalTheorem,
    GaussLegendre,
}

impl DefiniteMethod {
    pub fn description(&self) -> &'static str {
        match self {
            DefiniteMethod::FundamentalTheorem => "F(b) - F(a) with the symbolic antiderivative",
            DefiniteMethod::GaussLegendre => "Gauss-Legendre quadrature of the integrand",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefiniteIntegral {
    pub lower: f64,
    pub upper: f64,
    pub value: f64,
    pub method: DefiniteMethod,
    /// `∫[a, b] f dx = value` in the configured notation
    pub formatted: String,
}

/// Everything computed for one function.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegralResult {
    pub function: Expr,
    pub antiderivative: Expr,
    /// the integrand in the configured notation
    pub original_function: String,
    /// the antiderivative in the configured notation
    pub indefinite_integral: String,
    /// the antiderivative as plain text
    pub indefinite_integral_text: String,
    pub definite: Option<DefiniteIntegral>,
    /// why the definite integral could not be evaluated
    pub limit_error: Option<String>,
    pub procedure: Procedure,
}

impl IntegralResult {
    pub fn is_definite(&self) -> bool {
        self.definite.is_some()
    }
}

/// A limit given as text: a number or a constant expression such as `pi/2`.
struct Limit {
    expr: Expr,
    value: f64,
}

fn parse_limit(text: &str, var: &str) -> Result<Limit, IntegrationError> {
    let invalid = |reason: String| IntegrationError::InvalidLimit {
        limit: text.to_string(),
        reason,
    };
    let expr = Expr::parse_expression(text).map_err(invalid)?;
    let variables = expr.all_arguments_are_variables();
    if !variables.is_empty() {
        return Err(invalid(format!("depends on {}", variables.join(", "))));
    }
    let value = expr.eval1D(var, 0.0).map_err(invalid)?;
    if !value.is_finite() {
        return Err(invalid("is not a finite number".to_string()));
    }
    Ok(Limit {
        expr: expr.simplify(),
        value,
    })
}

/// Both limits or none; an empty string counts as a missing limit.
fn parse_limits(
    limits: Option<(&str, &str)>,
    var: &str,
) -> Result<Option<(Limit, Limit)>, IntegrationError> {
    let Some((lower, upper)) = limits else {
        return Ok(None);
    };
    match (lower.trim(), upper.trim()) {
        ("", "") => Ok(None),
        ("", _) | (_, "") => Err(IntegrationError::MismatchedLimits),
        (lower, upper) => Ok(Some((parse_limit(lower, var)?, parse_limit(upper, var)?))),
    }
}

fn definite_integral(
    engine: &dyn MathEngine,
    expr: &Expr,
    antiderivative: &Expr,
    (lower, upper): (&Limit, &Limit),
    config: &IntegratorConfig,
) -> Result<DefiniteIntegral, String> {
    let var = config.variable.as_str();
    let (value, method) = match antiderivative.antiderivative_increment(var, lower.value, upper.value) {
        Ok(value) => (value, DefiniteMethod::FundamentalTheorem),
        Err(e) => {
            warn!("{}, falling back to quadrature", e);
            let value = expr.quad(var, config.quadrature_degree, lower.value, upper.value)?;
            (value, DefiniteMethod::GaussLegendre)
        }
    };
    let formatted = format!(
        "{} = {}",
        expr.definite_integral_notation(var, &lower.expr, &upper.expr, config.notation),
        engine.render(&Expr::Const(value), config.notation)
    );
    debug!("definite integral: {} ({})", formatted, method.description());
    Ok(DefiniteIntegral {
        lower: lower.value,
        upper: upper.value,
        value,
        method,
        formatted,
    })
}

/// [`calculate_integral`] with a caller-supplied math engine.
pub fn calculate_integral_with(
    engine: &dyn MathEngine,
    function_text: &str,
    limits: Option<(&str, &str)>,
    config: &IntegratorConfig,
) -> Result<IntegralResult, IntegrationError> {
    let function_text = function_text.trim();
    if function_text.is_empty() {
        return Err(IntegrationError::EmptyFunction);
    }
    let var = config.variable.as_str();
    info!("integrating {} with respect to {}", function_text, var);
    let limits = parse_limits(limits, var)?;
    let function = Expr::parse_expression(function_text).map_err(IntegrationError::Parse)?;
    let antiderivative = engine
        .integrate(&function, var)
        .map_err(IntegrationError::Integration)?;
    info!("∫{} d{} = {}", function, var, antiderivative);

    let (definite, limit_error) = match &limits {
        None => (None, None),
        Some((lower, upper)) => {
            match definite_integral(engine, &function, &antiderivative, (lower, upper), config) {
                Ok(definite) => (Some(definite), None),
                Err(e) => {
                    warn!("definite integral of {} failed: {}", function, e);
                    (None, Some(format!("Error computing the definite integral: {}", e)))
                }
            }
        }
    };

    let procedure =
        ProcedureAssembler::new(engine, config.notation).assemble(&function, var, &antiderivative);
    Ok(IntegralResult {
        original_function: engine.render(&function, config.notation),
        indefinite_integral: engine.render(&antiderivative, config.notation),
        indefinite_integral_text: engine.render(&antiderivative, Notation::Plain),
        function,
        antiderivative,
        definite,
        limit_error,
        procedure,
    })
}

/// Integrates `function_text` with the native engine; `limits` turns it into a
/// definite integral.
pub fn calculate_integral(
    function_text: &str,
    limits: Option<(&str, &str)>,
    config: &IntegratorConfig,
) -> Result<IntegralResult, IntegrationError> {
    calculate_integral_with(&SymbolicEngine, function_text, limits, config)
}

/// Indefinite integrals of a batch of functions, computed in parallel. Results
/// keep the order of the input.
pub fn calculate_integrals_parallel(
    functions: &[&str],
    config: &IntegratorConfig,
) -> Vec<Result<IntegralResult, IntegrationError>> {
    info!("integrating {} functions in parallel", functions.len());
    functions
        .par_iter()
        .map(|function| calculate_integral(function, None, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn plain() -> IntegratorConfig {
        IntegratorConfig {
            notation: Notation::Plain,
            ..Default::default()
        }
    }

    struct NoIntegrals;

    impl MathEngine for NoIntegrals {
        fn integrate(&self, expr: &Expr, _var: &str) -> Result<Expr, String> {
            Err(format!("no antiderivative for {}", expr))
        }
        fn differentiate(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
            SymbolicEngine.differentiate(expr, var)
        }
        fn simplify(&self, expr: &Expr) -> Result<Expr, String> {
            SymbolicEngine.simplify(expr)
        }
        fn expand(&self, expr: &Expr) -> Result<Expr, String> {
            SymbolicEngine.expand(expr)
        }
        fn ordered_terms(&self, expr: &Expr) -> Result<Vec<Expr>, String> {
            SymbolicEngine.ordered_terms(expr)
        }
        fn is_zero(&self, expr: &Expr) -> Result<bool, String> {
            SymbolicEngine.is_zero(expr)
        }
        fn render(&self, expr: &Expr, notation: Notation) -> String {
            SymbolicEngine.render(expr, notation)
        }
        fn get_type(&self) -> String {
            "none".to_string()
        }
    }

    #[test]
    fn test_indefinite() {
        let result = calculate_integral("x^2 + 3x", None, &plain()).unwrap();
        assert_eq!(result.indefinite_integral_text, "x^3/3 + 3x^2/2");
        assert_eq!(result.original_function, "x^2 + 3x");
        assert!(!result.is_definite());
        assert!(result.limit_error.is_none());
        assert!(result.procedure.has_verification());
    }

    #[test]
    fn test_latex_envelope() {
        let result = calculate_integral("sin(x)", None, &IntegratorConfig::default()).unwrap();
        assert_eq!(result.original_function, "\\sin{\\left(x \\right)}");
        assert_eq!(result.indefinite_integral, "-\\cos{\\left(x \\right)}");
        assert_eq!(result.indefinite_integral_text, "-cos(x)");
    }

    #[test]
    fn test_definite_by_fundamental_theorem() {
        let result = calculate_integral("x^2", Some(("0", "1")), &plain()).unwrap();
        let definite = result.definite.unwrap();
        assert_relative_eq!(definite.value, 1.0 / 3.0, epsilon = 1e-12);
        assert_eq!(definite.method, DefiniteMethod::FundamentalTheorem);
        let result = calculate_integral("sin(x)", Some(("0", "pi")), &plain()).unwrap();
        assert_relative_eq!(result.definite.unwrap().value, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_definite_falls_back_to_quadrature() {
        // ln(x) has no real value on [-2, -1]
        let result = calculate_integral("1/x", Some(("-2", "-1")), &plain()).unwrap();
        let definite = result.definite.unwrap();
        assert_eq!(definite.method, DefiniteMethod::GaussLegendre);
        assert_relative_eq!(definite.value, -(2.0f64.ln()), epsilon = 1e-8);
    }

    #[test]
    fn test_divergent_definite_integral_is_reported() {
        let result = calculate_integral("1/x", Some(("-1", "1")), &plain()).unwrap();
        assert!(result.definite.is_none());
        let message = result.limit_error.unwrap();
        assert!(message.starts_with("Error computing the definite integral"), "{}", message);
        assert!(message.contains("singular"), "{}", message);
        assert!(!result.procedure.is_empty());
    }

    #[test]
    fn test_huge_exponent_is_an_integration_error() {
        for function in ["sin(x^100000000000000000000)", "1/(x^1000000000 + 1)"] {
            assert!(matches!(
                calculate_integral(function, None, &plain()),
                Err(IntegrationError::Integration(_))
            ));
        }
    }

    #[test]
    fn test_limit_errors() {
        assert_eq!(
            calculate_integral("x", Some(("", "1")), &plain()).unwrap_err(),
            IntegrationError::MismatchedLimits
        );
        assert!(calculate_integral("x", Some(("", " ")), &plain()).unwrap().definite.is_none());
        assert!(matches!(
            calculate_integral("x", Some(("x", "1")), &plain()),
            Err(IntegrationError::InvalidLimit { .. })
        ));
        assert!(matches!(
            calculate_integral("x", Some(("0", "1/0")), &plain()),
            Err(IntegrationError::InvalidLimit { .. })
        ));
        let result = calculate_integral("x", Some(("pi/2", "pi")), &plain()).unwrap();
        let definite = result.definite.unwrap();
        assert_relative_eq!(definite.lower, PI / 2.0);
        assert_relative_eq!(definite.value, 3.0 * PI * PI / 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_upstream_errors() {
        assert_eq!(
            calculate_integral("   ", None, &plain()).unwrap_err(),
            IntegrationError::EmptyFunction
        );
        assert!(matches!(
            calculate_integral("x^", None, &plain()),
            Err(IntegrationError::Parse(_))
        ));
        assert!(matches!(
            calculate_integral_with(&NoIntegrals, "x", None, &plain()),
            Err(IntegrationError::Integration(_))
        ));
    }

    #[test]
    fn test_other_variable() {
        let config = IntegratorConfig {
            variable: "t".to_string(),
            notation: Notation::Plain,
            ..Default::default()
        };
        let result = calculate_integral("cos(t)", Some(("0", "pi/2")), &config).unwrap();
        assert_eq!(result.indefinite_integral_text, "sin(t)");
        assert_relative_eq!(result.definite.unwrap().value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_batch_keeps_order() {
        let functions = ["5", "x^2 + 3x", "sin(x)", "", "exp(2x)"];
        let results = calculate_integrals_parallel(&functions, &plain());
        assert_eq!(results.len(), functions.len());
        let texts: Vec<String> = results
            .iter()
            .map(|r| match r {
                Ok(result) => result.indefinite_integral_text.clone(),
                Err(e) => e.to_string(),
            })
            .collect();
        assert_eq!(texts[0], "5x");
        assert_eq!(texts[1], "x^3/3 + 3x^2/2");
        assert_eq!(texts[2], "-cos(x)");
        assert_eq!(texts[3], "No function was provided");
        assert_eq!(texts[4], "e^(2x)/2");
    }
}
