//! Names the integration rule that best describes an integrand.
//!
//! The checks form an ordered chain evaluated top to bottom and the first
//! match wins. An integrand holding both sine and cosine is therefore reported
//! under the sine rule.
use crate::integration::step::{IntegrationRule, RuleInfo};
use crate::symbolic::symbolic_engine::{Expr, FunctionKind};
use log::debug;

type RuleCheck = fn(&Expr, &str) -> Option<IntegrationRule>;

fn polynomial_rule(expr: &Expr, var: &str) -> Option<IntegrationRule> {
    match expr.polynomial_degree(var)? {
        0 => Some(IntegrationRule::Constant),
        1 => Some(IntegrationRule::Linear),
        _ => Some(IntegrationRule::Power),
    }
}

fn sine_rule(expr: &Expr, _var: &str) -> Option<IntegrationRule> {
    expr.has_function(FunctionKind::Sin)
        .then_some(IntegrationRule::Sine)
}

fn cosine_rule(expr: &Expr, _var: &str) -> Option<IntegrationRule> {
    expr.has_function(FunctionKind::Cos)
        .then_some(IntegrationRule::Cosine)
}

fn tangent_rule(expr: &Expr, _var: &str) -> Option<IntegrationRule> {
    expr.has_function(FunctionKind::Tan)
        .then_some(IntegrationRule::Tangent)
}

fn exponential_rule(expr: &Expr, _var: &str) -> Option<IntegrationRule> {
    expr.has_function(FunctionKind::Exp)
        .then_some(IntegrationRule::Exponential)
}

fn logarithm_rule(expr: &Expr, _var: &str) -> Option<IntegrationRule> {
    expr.has_function(FunctionKind::Ln)
        .then_some(IntegrationRule::ByPartsLogarithmic)
}

fn rational_rule(expr: &Expr, var: &str) -> Option<IntegrationRule> {
    expr.is_rational_function(var)
        .then_some(IntegrationRule::RationalFunction)
}

fn product_rule(expr: &Expr, _var: &str) -> Option<IntegrationRule> {
    (expr.is_product() && expr.factor_count() >= 2).then_some(IntegrationRule::ByPartsProduct)
}

fn general_rule(_expr: &Expr, _var: &str) -> Option<IntegrationRule> {
    Some(IntegrationRule::General)
}

/// Priority order of the checks.
const RULE_CHAIN: [RuleCheck; 9] = [
    polynomial_rule,
    sine_rule,
    cosine_rule,
    tangent_rule,
    exponential_rule,
    logarithm_rule,
    rational_rule,
    product_rule,
    general_rule,
];

/// Rule for `∫expr d(var)`, `None` when the integrand cannot be classified.
/// # Example
/// ```
/// use RustedIntegrals::symbolic::symbolic_engine::Expr;
/// use RustedIntegrals::integration::rule_classifier::classify;
/// let expr = Expr::parse_expression("x^2 + 3x").unwrap();
/// assert_eq!(classify(&expr, "x").unwrap().rule_name, "power rule");
/// ```
pub fn classify(expr: &Expr, var: &str) -> Option<RuleInfo> {
    if var.is_empty() {
        debug!("no integration variable, {} left unclassified", expr);
        return None;
    }
    let rule = RULE_CHAIN.iter().find_map(|check| check(expr, var))?;
    debug!("{} classified under the {}", expr, rule);
    Some(RuleInfo::from(rule))
}
