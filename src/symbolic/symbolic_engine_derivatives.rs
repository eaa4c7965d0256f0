//! # Symbolic Engine Derivatives Module
//!
//! Differentiation and numerical evaluation of expressions of one variable.
//!
//! ## Key Methods
//!
//! - `diff(var)` - analytical derivative (power, product, quotient and chain rules)
//! - `eval1D(var, value)` - direct evaluation at a point
//! - `lambdify1D(var)` - closure `f64 -> f64` for repeated evaluation (quadrature)
//! - `compare_num1D(...)` - analytical derivative against a central difference, used
//!   to cross-check antiderivatives numerically
//!
//! Derivatives are returned unsimplified; callers pass them through `simplify`
//! or `simplifies_to_zero`.

use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{linspace, norm, numerical_derivative};
use std::f64::consts::PI;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to a variable.
    ///
    /// - Power rule: d/dx(u^n) = n*u^(n-1)*u'
    /// - Product rule: d/dx(f*g) = f'*g + f*g'
    /// - Quotient rule: d/dx(f/g) = (f'*g - g'*f)/g^2
    /// - Chain rule for every function node
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x^2").unwrap();
    /// let df_dx = f.diff("x").simplify(); // 2x
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Pow(rhs.clone(), Box::new(Expr::Const(2.0)))),
            ),
            Expr::Pow(base, exp) if exp.is_constant_in(var) => Expr::Mul(
                Box::new(Expr::Mul(
                    exp.clone(),
                    Box::new(Expr::Pow(
                        base.clone(),
                        Box::new(Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0)))),
                    )),
                )),
                Box::new(base.diff(var)),
            ),
            // u^v = e^(v ln u)
            Expr::Pow(base, exp) => Expr::Mul(
                Box::new(self.clone()),
                Box::new(Expr::Add(
                    Box::new(Expr::Mul(
                        Box::new(exp.diff(var)),
                        Box::new(Expr::Ln(base.clone())),
                    )),
                    Box::new(Expr::Div(
                        Box::new(Expr::Mul(exp.clone(), Box::new(base.diff(var)))),
                        base.clone(),
                    )),
                )),
            ),
            Expr::Exp(expr) => {
                Expr::Mul(Box::new(Expr::Exp(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::Ln(expr) => Expr::Div(Box::new(expr.diff(var)), expr.clone()),
            Expr::sin(expr) => {
                Expr::Mul(Box::new(Expr::cos(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::cos(expr) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::sin(expr.clone())),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::tg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::cos(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::ctg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::sin(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::arcsin(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Pow(
                    Box::new(Expr::Sub(
                        Box::new(Expr::Const(1.0)),
                        Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                    )),
                    Box::new(Expr::Const(0.5)),
                )),
            ),
            Expr::arccos(expr) => Expr::Div(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(expr.diff(var)),
                )),
                Box::new(Expr::Pow(
                    Box::new(Expr::Sub(
                        Box::new(Expr::Const(1.0)),
                        Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                    )),
                    Box::new(Expr::Const(0.5)),
                )),
            ),
            Expr::arctg(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Add(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                )),
            ),
            Expr::arcctg(expr) => Expr::Div(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(expr.diff(var)),
                )),
                Box::new(Expr::Add(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                )),
            ),
        }
    } // end of diff

    /// names of all variables of the expression, sorted and deduplicated
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        fn collect(expr: &Expr, names: &mut Vec<String>) {
            match expr {
                Expr::Var(name) => names.push(name.clone()),
                Expr::Const(_) => {}
                Expr::Add(lhs, rhs)
                | Expr::Sub(lhs, rhs)
                | Expr::Mul(lhs, rhs)
                | Expr::Div(lhs, rhs)
                | Expr::Pow(lhs, rhs) => {
                    collect(lhs, names);
                    collect(rhs, names);
                }
                _ => {
                    if let Some(arg) = expr.function_argument() {
                        collect(arg, names);
                    }
                }
            }
        }
        let mut names = Vec::new();
        collect(self, &mut names);
        names.sort();
        names.dedup();
        names
    }

    /// Evaluates the expression with `var = value`; any other variable is an error.
    pub fn eval1D(&self, var: &str, value: f64) -> Result<f64, String> {
        let unary = |expr: &Expr| expr.eval1D(var, value);
        let result = match self {
            Expr::Var(name) if name == var => value,
            Expr::Var(name) => {
                return Err(format!(
                    "variable '{}' has no value, only '{}' can be evaluated",
                    name, var
                ));
            }
            Expr::Const(val) => *val,
            Expr::Add(lhs, rhs) => unary(lhs)? + unary(rhs)?,
            Expr::Sub(lhs, rhs) => unary(lhs)? - unary(rhs)?,
            Expr::Mul(lhs, rhs) => unary(lhs)? * unary(rhs)?,
            Expr::Div(lhs, rhs) => unary(lhs)? / unary(rhs)?,
            Expr::Pow(base, exp) => unary(base)?.powf(unary(exp)?),
            Expr::Exp(expr) => unary(expr)?.exp(),
            Expr::Ln(expr) => unary(expr)?.ln(),
            Expr::sin(expr) => unary(expr)?.sin(),
            Expr::cos(expr) => unary(expr)?.cos(),
            Expr::tg(expr) => unary(expr)?.tan(),
            Expr::ctg(expr) => 1.0 / unary(expr)?.tan(),
            Expr::arcsin(expr) => unary(expr)?.asin(),
            Expr::arccos(expr) => unary(expr)?.acos(),
            Expr::arctg(expr) => unary(expr)?.atan(),
            Expr::arcctg(expr) => PI / 2.0 - unary(expr)?.atan(),
        };
        Ok(result)
    } // end of eval1D

    /// Turns the expression into a closure of `var`. Fails if the expression
    /// contains any other variable.
    /// # Example
    /// ```
    /// use RustedIntegrals::symbolic::symbolic_engine::Expr;
    /// let f = Expr::parse_expression("x^2").unwrap();
    /// let func = f.lambdify1D("x").unwrap();
    /// assert_eq!(func(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self, var: &str) -> Result<Box<dyn Fn(f64) -> f64 + Send + Sync>, String> {
        let foreign: Vec<String> = self
            .all_arguments_are_variables()
            .into_iter()
            .filter(|name| name != var)
            .collect();
        if !foreign.is_empty() {
            return Err(format!(
                "lambdify1D can only be used with expressions of '{}', found: {:?}",
                var, foreign
            ));
        }
        let expr = self.clone();
        let var = var.to_string();
        Ok(Box::new(move |x| expr.eval1D(&var, x).unwrap_or(f64::NAN)))
    } // end of lambdify1D

    /// Evaluates the expression on `num_values` evenly spaced points of `[start, end]`.
    pub fn lambdify1D_from_linspace(
        &self,
        var: &str,
        start: f64,
        end: f64,
        num_values: usize,
    ) -> Result<Vec<f64>, String> {
        let func = self.lambdify1D(var)?;
        Ok(linspace(start, end, num_values)
            .into_iter()
            .map(|x| func(x))
            .collect())
    }

    /// Validates the analytical derivative against a central difference on
    /// `[start, end]`. Returns the norm of the difference and whether it is
    /// below `max_norm`.
    pub fn compare_num1D(
        &self,
        var: &str,
        start: f64,
        end: f64,
        num_values: usize,
        max_norm: f64,
    ) -> Result<(f64, bool), String> {
        let analytical_derivative =
            self.diff(var)
                .lambdify1D_from_linspace(var, start, end, num_values)?;
        let analytical_function = self.lambdify1D(var)?;
        let step = 1e-4 * (end - start) / (num_values.max(2) as f64 - 1.0);
        let domain = linspace(start, end, num_values);
        let numerical = numerical_derivative(analytical_function, &domain, step);
        let norma_val = norm(&analytical_derivative, &numerical);
        Ok((norma_val, norma_val < max_norm))
    }
}
