//! # Symbolic Engine Module
//!
//! Core expression type of the crate. Every other symbolic module extends `Expr`
//! with an `impl Expr` block:
//!
//! - `parse_expr` - text to `Expr`
//! - `symbolic_simplify` - canonical form, expansion and the zero decision
//! - `symbolic_structure` - structural predicates (polynomial, rational, product...)
//! - `symbolic_engine_derivatives` - differentiation and numerical evaluation
//! - `symbolic_integration` - symbolic and definite integration
//! - `symbolic_typeset` - plain-text (`Display`) and LaTeX rendering
//!
//! ## Main Structures
//!
//! ### `Expr` Enum
//! - **Variables**: `Var(String)` - symbolic variables like "x"
//! - **Constants**: `Const(f64)` - numerical constants
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Pow` - basic arithmetic
//! - **Functions**: `Exp`, `Ln`, `sin`, `cos`, `tg`, `ctg` and the inverse trigonometric functions
//!
//! ### `FunctionKind`
//! Names a transcendental function independently of its argument, used by the
//! `has_function` predicate ("does this term contain a sine?").
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Expression Tree**: Uses Box<Expr> for nested expressions
//! 2. **Operator Overloading**: std::ops traits give natural syntax: `x.clone() * x + c`
//! 3. **Non-standard Function Names**: mathematical notation (tg, ctg, arctg) for the
//!    variants, standard names (tan, cot, arctan) when printing

#![allow(non_camel_case_types)]

use strum_macros::{Display, EnumIter};

/// Core symbolic expression enum representing mathematical expressions as an abstract syntax tree.
///
/// # Examples
/// ```rust, ignore
/// use RustedIntegrals::symbolic::symbolic_engine::Expr;
/// let x = Expr::Var("x".to_string());
/// let expr = Expr::Add(Box::new(x), Box::new(Expr::Const(2.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name (e.g., "x", "t")
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Exponential function: e^x
    Exp(Box<Expr>),
    /// Natural logarithm: ln(x)
    Ln(Box<Expr>),
    /// Sine function: sin(x)
    sin(Box<Expr>),
    /// Cosine function: cos(x)
    cos(Box<Expr>),
    /// Tangent function: tan(x)
    tg(Box<Expr>),
    /// Cotangent function: cot(x)
    ctg(Box<Expr>),
    /// Arcsine function: arcsin(x)
    arcsin(Box<Expr>),
    /// Arccosine function: arccos(x)
    arccos(Box<Expr>),
    /// Arctangent function: arctan(x)
    arctg(Box<Expr>),
    /// Arccotangent function: arccot(x)
    arcctg(Box<Expr>),
}

/// Transcendental functions a term can be searched for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum FunctionKind {
    #[strum(serialize = "exponential")]
    Exp,
    #[strum(serialize = "logarithm")]
    Ln,
    #[strum(serialize = "sine")]
    Sin,
    #[strum(serialize = "cosine")]
    Cos,
    #[strum(serialize = "tangent")]
    Tan,
    #[strum(serialize = "cotangent")]
    Cot,
    #[strum(serialize = "arcsine")]
    Arcsin,
    #[strum(serialize = "arccosine")]
    Arccos,
    #[strum(serialize = "arctangent")]
    Arctan,
    #[strum(serialize = "arccotangent")]
    Arccot,
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Shorthand for `Expr::Var(name.to_string())`.
    pub fn var(name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates exponential function e^(self).
    pub fn exp(self) -> Expr {
        Expr::Exp(self.boxed())
    }

    /// Creates natural logarithm ln(self).
    pub fn ln(self) -> Expr {
        Expr::Ln(self.boxed())
    }

    /// Creates power expression self^rhs.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// Square root as a power with exponent 1/2.
    pub fn sqrt(self) -> Expr {
        Expr::Pow(self.boxed(), Box::new(Expr::Const(0.5)))
    }

    /// Checks if expression is exactly zero (constant 0.0).
    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Const(val) if *val == 0.0)
    }

    /// Checks if expression is exactly one (constant 1.0).
    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Const(val) if *val == 1.0)
    }

    /// Numerical value if the expression is a bare constant.
    pub fn as_const(&self) -> Option<f64> {
        match self {
            Expr::Const(c) => Some(*c),
            _ => None,
        }
    }

    /// Argument of a single-argument function node, `None` for everything else.
    pub fn function_argument(&self) -> Option<&Expr> {
        match self {
            Expr::Exp(arg)
            | Expr::Ln(arg)
            | Expr::sin(arg)
            | Expr::cos(arg)
            | Expr::tg(arg)
            | Expr::ctg(arg)
            | Expr::arcsin(arg)
            | Expr::arccos(arg)
            | Expr::arctg(arg)
            | Expr::arcctg(arg) => Some(arg),
            _ => None,
        }
    }

    /// Which function this node applies, if it is a function node.
    pub fn function_kind(&self) -> Option<FunctionKind> {
        match self {
            Expr::Exp(_) => Some(FunctionKind::Exp),
            Expr::Ln(_) => Some(FunctionKind::Ln),
            Expr::sin(_) => Some(FunctionKind::Sin),
            Expr::cos(_) => Some(FunctionKind::Cos),
            Expr::tg(_) => Some(FunctionKind::Tan),
            Expr::ctg(_) => Some(FunctionKind::Cot),
            Expr::arcsin(_) => Some(FunctionKind::Arcsin),
            Expr::arccos(_) => Some(FunctionKind::Arccos),
            Expr::arctg(_) => Some(FunctionKind::Arctan),
            Expr::arcctg(_) => Some(FunctionKind::Arccot),
            _ => None,
        }
    }

    /// Builds the function node of the given kind around `arg`.
    pub fn apply_function(kind: FunctionKind, arg: Expr) -> Expr {
        let arg = arg.boxed();
        match kind {
            FunctionKind::Exp => Expr::Exp(arg),
            FunctionKind::Ln => Expr::Ln(arg),
            FunctionKind::Sin => Expr::sin(arg),
            FunctionKind::Cos => Expr::cos(arg),
            FunctionKind::Tan => Expr::tg(arg),
            FunctionKind::Cot => Expr::ctg(arg),
            FunctionKind::Arcsin => Expr::arcsin(arg),
            FunctionKind::Arccos => Expr::arccos(arg),
            FunctionKind::Arctan => Expr::arctg(arg),
            FunctionKind::Arccot => Expr::arcctg(arg),
        }
    }

    /// Substitutes a variable with a constant value throughout the expression.
    pub fn set_variable(&self, var: &str, value: f64) -> Expr {
        self.substitute_variable(var, &Expr::Const(value))
    }

    /// substitute a variable with an expression
    pub fn substitute_variable(&self, var: &str, replacement: &Expr) -> Expr {
        match self {
            Expr::Var(name) if name == var => replacement.clone(),
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => Expr::Add(
                Box::new(lhs.substitute_variable(var, replacement)),
                Box::new(rhs.substitute_variable(var, replacement)),
            ),
            Expr::Sub(lhs, rhs) => Expr::Sub(
                Box::new(lhs.substitute_variable(var, replacement)),
                Box::new(rhs.substitute_variable(var, replacement)),
            ),
            Expr::Mul(lhs, rhs) => Expr::Mul(
                Box::new(lhs.substitute_variable(var, replacement)),
                Box::new(rhs.substitute_variable(var, replacement)),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(lhs.substitute_variable(var, replacement)),
                Box::new(rhs.substitute_variable(var, replacement)),
            ),
            Expr::Pow(base, exp) => Expr::Pow(
                Box::new(base.substitute_variable(var, replacement)),
                Box::new(exp.substitute_variable(var, replacement)),
            ),
            _ => {
                // function nodes: rebuild around the substituted argument
                let kind = self.function_kind();
                let arg = self.function_argument();
                match (kind, arg) {
                    (Some(kind), Some(arg)) => {
                        Expr::apply_function(kind, arg.substitute_variable(var, replacement))
                    }
                    _ => self.clone(),
                }
            }
        }
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Var(name) => name == var_name,
            Expr::Const(_) => false,
            Expr::Add(left, right)
            | Expr::Sub(left, right)
            | Expr::Mul(left, right)
            | Expr::Div(left, right)
            | Expr::Pow(left, right) => {
                left.contains_variable(var_name) || right.contains_variable(var_name)
            }
            _ => self
                .function_argument()
                .is_some_and(|arg| arg.contains_variable(var_name)),
        }
    }

    /// check if a function of the given kind occurs anywhere in the tree
    pub fn has_function(&self, kind: FunctionKind) -> bool {
        match self {
            Expr::Var(_) | Expr::Const(_) => false,
            Expr::Add(left, right)
            | Expr::Sub(left, right)
            | Expr::Mul(left, right)
            | Expr::Div(left, right)
            | Expr::Pow(left, right) => left.has_function(kind) || right.has_function(kind),
            _ => {
                self.function_kind() == Some(kind)
                    || self
                        .function_argument()
                        .is_some_and(|arg| arg.has_function(kind))
            }
        }
    }

    /// Number of nodes in the tree, a rough complexity measure.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Var(_) | Expr::Const(_) => 1,
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Pow(l, r) => 1 + l.node_count() + r.node_count(),
            _ => 1 + self.function_argument().map_or(0, |arg| arg.node_count()),
        }
    }
}
