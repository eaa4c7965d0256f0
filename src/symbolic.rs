#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedIntegrals::symbolic::symbolic_engine::Expr;
/// let parsed_expression = Expr::parse_expression("x^2 + 3x").unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// assert_eq!(parsed_expression.to_string(), "x^2 + 3x");
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) holds the expression tree and arithmetic on it
/// 2) differentiates a symbolic expression and turns it into a Rust function
/// 3) compares analytical and numerical derivatives
///# Example#
/// ```
/// use RustedIntegrals::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("x + exp(x)").unwrap();
/// let df_dx = f.diff("x");
/// println!("df_dx = {}", df_dx);
/// let f_res = f.lambdify1D("x").unwrap()(0.0);
/// assert!((f_res - 1.0).abs() < 1e-12);
/// // compare numerical and analtical derivatives on a linspace
/// let (norm, res) = f.compare_num1D("x", 0.0, 1.0, 100, 1e-4).unwrap();
/// println!("norm = {}, res = {}", norm, res);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
///________________________________________________________________________________________________________________________________________________
/// collecting like terms, expanding and ordering addends of a symbolic expression
pub mod symbolic_simplify;
/// structural queries: polynomial coefficients, linear arguments, powers of the variable
pub mod symbolic_structure;
///________________________________________________________________________________________________________________________________________________
/// table-driven symbolic integration, definite integrals and Gauss-Legendre quadrature
///# Example
/// ```
/// use RustedIntegrals::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("sin(x)").unwrap();
/// let antiderivative = f.integrate("x").unwrap();
/// assert_eq!(antiderivative.to_string(), "-cos(x)");
/// let area = f.definite_integrate("x", 0.0, std::f64::consts::PI).unwrap();
/// assert!((area - 2.0).abs() < 1e-10);
/// ```
pub mod symbolic_integration;
/// the seam between the step-by-step procedure and a computer algebra system
pub mod symbolic_traits;
/// plain text and LaTeX rendering
pub mod symbolic_typeset;
///______________________________________________________________________________________________________________________________________________
/// the collection of numeric helpers: fractions, number formatting, linspace
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
