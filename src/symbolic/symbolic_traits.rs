// SYMBOLIC TRAITS //////////////////////////////////////////////////////////////////
// The procedure builder talks to a math engine only through the MathEngine trait.
// The native engine is implemented below; add other engines here as needed

use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_typeset::Notation;

/// Operations the step-by-step procedure needs from a computer algebra system.
/// Every operation is deterministic and free of side effects; `Err` carries a
/// readable reason.
pub trait MathEngine: Send + Sync {
    /// antiderivative without the constant of integration
    fn integrate(&self, expr: &Expr, var: &str) -> Result<Expr, String>;
    fn differentiate(&self, expr: &Expr, var: &str) -> Result<Expr, String>;
    fn simplify(&self, expr: &Expr) -> Result<Expr, String>;
    fn expand(&self, expr: &Expr) -> Result<Expr, String>;
    /// addends of `expr` in the engine's canonical, stable order
    fn ordered_terms(&self, expr: &Expr) -> Result<Vec<Expr>, String>;
    /// `Ok(true)` only if the engine can establish that `expr` is identically zero
    fn is_zero(&self, expr: &Expr) -> Result<bool, String>;
    fn render(&self, expr: &Expr, notation: Notation) -> String;
    /// `∫expr dvar` in the chosen notation
    fn render_integral(&self, expr: &Expr, var: &str, notation: Notation) -> String {
        expr.integral_notation(var, notation)
    }
    fn get_type(&self) -> String;
}

///////////////// IMPLEMENTATION OF THE TRAIT FOR THE NATIVE ENGINE /////////////////////////
#[derive(Clone, Copy, Debug, Default)]
pub struct SymbolicEngine;

impl MathEngine for SymbolicEngine {
    fn integrate(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        expr.integrate(var)
    }
    fn differentiate(&self, expr: &Expr, var: &str) -> Result<Expr, String> {
        Ok(expr.diff(var))
    }
    fn simplify(&self, expr: &Expr) -> Result<Expr, String> {
        Ok(expr.simplify())
    }
    fn expand(&self, expr: &Expr) -> Result<Expr, String> {
        Ok(expr.expand())
    }
    fn ordered_terms(&self, expr: &Expr) -> Result<Vec<Expr>, String> {
        Ok(expr.ordered_terms())
    }
    fn is_zero(&self, expr: &Expr) -> Result<bool, String> {
        Ok(expr.simplifies_to_zero())
    }
    fn render(&self, expr: &Expr, notation: Notation) -> String {
        expr.typeset(notation)
    }
    fn get_type(&self) -> String {
        "native".to_string()
    }
}

/////////////////////////////////////////////////////////////////////////////////////////
// FACTORY METHODS  ////////////////////////////////////////////////////////////////////
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SymbolicEngineType {
    #[default]
    Native,
    // Add other engines here as needed
}

impl SymbolicEngineType {
    pub fn create_engine(&self) -> Box<dyn MathEngine> {
        match self {
            SymbolicEngineType::Native => Box::new(SymbolicEngine),
        }
    }
}
