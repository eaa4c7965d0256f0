//! # Steps of a worked integration
//!
//! A [`Procedure`] is the ordered list of [`Step`]s explaining one integral. The
//! generators of step content ([`crate::integration::rule_classifier`],
//! [`crate::integration::term_steps`]) only produce unnumbered [`DraftStep`]s;
//! numbering happens once, in [`Procedure::from_drafts`], so orders are always
//! `1..N` with no gaps.
use std::fmt;
use strum_macros::{Display, EnumIter};

/// What a step does inside the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    IntegralToSolve,
    RuleIdentification,
    Expansion,
    Linearity,
    /// one of the steps explaining term `term` (counted from 1)
    TermIntegration { term: usize },
    Combination,
    Simplification,
    FinalResult,
    Verification,
    Fallback,
}

/// Step content before the assembler gives it a position.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftStep {
    pub kind: StepKind,
    pub description: String,
    pub explanation: Option<String>,
    pub formatted_result: Option<String>,
    pub is_verification: bool,
}

impl DraftStep {
    pub fn new(kind: StepKind, description: impl Into<String>) -> Self {
        DraftStep {
            kind,
            description: description.into(),
            explanation: None,
            formatted_result: None,
            is_verification: kind == StepKind::Verification,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_result(mut self, formatted_result: impl Into<String>) -> Self {
        self.formatted_result = Some(formatted_result.into());
        self
    }

    fn numbered(self, order: usize) -> Step {
        Step {
            order,
            kind: self.kind,
            description: self.description,
            explanation: self.explanation,
            formatted_result: self.formatted_result,
            is_verification: self.is_verification,
        }
    }
}

/// One numbered line of the derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub order: usize,
    pub kind: StepKind,
    pub description: String,
    pub explanation: Option<String>,
    pub formatted_result: Option<String>,
    pub is_verification: bool,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.order, self.description)?;
        if let Some(explanation) = &self.explanation {
            write!(f, " [{}]", explanation)?;
        }
        if let Some(result) = &self.formatted_result {
            write!(f, ": {}", result)?;
        }
        Ok(())
    }
}

/// Ordered, never empty sequence of steps for one integral.
#[derive(Debug, Clone, PartialEq)]
pub struct Procedure {
    steps: Vec<Step>,
}

impl Procedure {
    /// Numbers the drafts 1..N in the order they were emitted.
    pub fn from_drafts(drafts: Vec<DraftStep>) -> Self {
        let steps = drafts
            .into_iter()
            .enumerate()
            .map(|(i, draft)| draft.numbered(i + 1))
            .collect();
        Procedure { steps }
    }

    /// The single step `∫f dx = F + C` shown when the detailed derivation fails.
    pub fn fallback(integral: &str, antiderivative: &str) -> Self {
        let step = DraftStep::new(StepKind::Fallback, "Integral computed")
            .with_result(format!("{} = {} + C", integral, antiderivative));
        Procedure::from_drafts(vec![step])
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// first step of the given kind
    pub fn find(&self, kind: StepKind) -> Option<&Step> {
        self.steps.iter().find(|step| step.kind == kind)
    }

    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|step| step.kind == kind).count()
    }

    pub fn has_verification(&self) -> bool {
        self.steps.iter().any(|step| step.is_verification)
    }

    pub fn is_fallback(&self) -> bool {
        self.steps.len() == 1 && self.steps[0].kind == StepKind::Fallback
    }
}

impl<'a> IntoIterator for &'a Procedure {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}

/// Integration rules the classifier can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum IntegrationRule {
    #[strum(serialize = "constant rule")]
    Constant,
    #[strum(serialize = "linear-function rule")]
    Linear,
    #[strum(serialize = "power rule")]
    Power,
    #[strum(serialize = "sine rule")]
    Sine,
    #[strum(serialize = "cosine rule")]
    Cosine,
    #[strum(serialize = "tangent rule")]
    Tangent,
    #[strum(serialize = "exponential rule")]
    Exponential,
    #[strum(serialize = "integration by parts")]
    ByPartsLogarithmic,
    #[strum(serialize = "rational-function rule")]
    RationalFunction,
    #[strum(serialize = "integration by parts")]
    ByPartsProduct,
    #[strum(serialize = "general integration techniques")]
    General,
}

impl IntegrationRule {
    /// mnemonic formula shown next to the rule name
    pub fn explanation(&self) -> &'static str {
        match self {
            IntegrationRule::Constant => "∫k dx = kx + C",
            IntegrationRule::Linear => "∫(ax + b) dx = (a/2)x² + bx + C",
            IntegrationRule::Power => "∫xⁿ dx = xⁿ⁺¹/(n+1) + C",
            IntegrationRule::Sine => "∫sin(x) dx = -cos(x) + C",
            IntegrationRule::Cosine => "∫cos(x) dx = sin(x) + C",
            IntegrationRule::Tangent => "∫tan(x) dx = -ln|cos(x)| + C",
            IntegrationRule::Exponential => "∫eˣ dx = eˣ + C",
            IntegrationRule::ByPartsLogarithmic => "∫ln(x) dx = x·ln(x) - x + C",
            IntegrationRule::RationalFunction => "May require partial fractions",
            IntegrationRule::ByPartsProduct => "∫u dv = uv - ∫v du",
            IntegrationRule::General => "Standard integration techniques are applied",
        }
    }
}

/// Rule name and formula for the "rule to apply" step.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleInfo {
    pub rule: IntegrationRule,
    pub rule_name: String,
    pub explanation: String,
}

impl From<IntegrationRule> for RuleInfo {
    fn from(rule: IntegrationRule) -> Self {
        RuleInfo {
            rule,
            rule_name: rule.to_string(),
            explanation: rule.explanation().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_orders_are_consecutive() {
        let drafts = vec![
            DraftStep::new(StepKind::IntegralToSolve, "Integral to solve"),
            DraftStep::new(StepKind::FinalResult, "Final result"),
            DraftStep::new(StepKind::Verification, "Verification"),
        ];
        let procedure = Procedure::from_drafts(drafts);
        let orders: Vec<usize> = procedure.iter().map(|step| step.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert!(procedure.has_verification());
        assert!(!procedure.steps()[0].is_verification);
    }

    #[test]
    fn test_fallback_procedure() {
        let procedure = Procedure::fallback("∫x dx", "x^2/2");
        assert!(procedure.is_fallback());
        assert_eq!(procedure.steps()[0].order, 1);
        assert_eq!(
            procedure.steps()[0].formatted_result.as_deref(),
            Some("∫x dx = x^2/2 + C")
        );
        assert_eq!(procedure.to_string(), "1. Integral computed: ∫x dx = x^2/2 + C\n");
    }

    #[test]
    fn test_every_rule_has_a_formula() {
        for rule in IntegrationRule::iter() {
            let info = RuleInfo::from(rule);
            assert!(!info.rule_name.is_empty());
            assert!(!info.explanation.is_empty());
        }
        assert_eq!(IntegrationRule::ByPartsProduct.to_string(), "integration by parts");
        assert_eq!(IntegrationRule::Sine.explanation(), "∫sin(x) dx = -cos(x) + C");
    }
}
