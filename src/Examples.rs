//! examples of usage of RustedIntegrals
/// worked integrals, definite integrals, batches
pub mod integration_examples;
/// Symbolic operations examples
pub mod symbolic_examples;
