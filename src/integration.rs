//! Step-by-step explanation of integrals.
//!
//! # Example
//! ```
//! use RustedIntegrals::integration::config::IntegratorConfig;
//! use RustedIntegrals::integration::service::calculate_integral;
//! use RustedIntegrals::integration::step::StepKind;
//! use RustedIntegrals::symbolic::symbolic_typeset::Notation;
//! let config = IntegratorConfig { notation: Notation::Plain, ..Default::default() };
//! let result = calculate_integral("x^2 + 3x", None, &config).unwrap();
//! for step in &result.procedure {
//!     println!("{}", step);
//! }
//! let last = result.procedure.find(StepKind::FinalResult).unwrap();
//! assert_eq!(last.formatted_result.as_deref(), Some("x^3/3 + 3x^2/2 + C"));
//! ```
/// settings read from TOML
pub mod config;
pub mod error;
/// worked solution of one integral: rule, expansion, linearity, terms, verification
pub mod procedure;
mod procedure_tests;
/// names the integration rule of an integrand
pub mod rule_classifier;
/// calculate_integral: parse, integrate, evaluate limits, explain
pub mod service;
/// Step, Procedure, RuleInfo
pub mod step;
/// steps explaining a single addend
pub mod term_steps;
