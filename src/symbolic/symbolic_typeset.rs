//! Typesetting of expressions.
//!
//! `Display` writes the plain notation read back by the parser (`x^3/3 + 3x^2/2`,
//! `-cos(x)`, `2sin(x)`, `e^(2x)`); `to_latex` writes LaTeX source
//! (`\frac{x^{3}}{3}`, `\sin{\left(x \right)}`). `Notation` selects between them.
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{format_number, format_number_latex};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// How formatted results are typeset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Notation {
    #[default]
    #[strum(serialize = "latex")]
    Latex,
    #[strum(serialize = "plain")]
    Plain,
}

const PREC_SUM: u8 = 1;
const PREC_PRODUCT: u8 = 2;
const PREC_POWER: u8 = 3;
const PREC_ATOM: u8 = 4;

fn is_negative_const(expr: &Expr) -> bool {
    matches!(expr, Expr::Const(c) if *c < 0.0 || (*c == 0.0 && c.is_sign_negative()))
}

fn is_minus_one(expr: &Expr) -> bool {
    matches!(expr, Expr::Const(c) if *c == -1.0)
}

/// binding strength of the printed form
fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Add(..) | Expr::Sub(..) => PREC_SUM,
        Expr::Mul(..) | Expr::Div(..) => PREC_PRODUCT,
        Expr::Pow(_, exp) if exp.as_const() == Some(0.5) => PREC_ATOM,
        Expr::Pow(..) => PREC_POWER,
        Expr::Exp(arg) if !arg.is_one() => PREC_POWER,
        Expr::Const(c) if *c < 0.0 => PREC_SUM,
        Expr::Const(c) if format_number(*c).contains('/') => PREC_PRODUCT,
        _ => PREC_ATOM,
    }
}

/// a constant may be written directly in front of this factor: 3x, 2sin(x), 5(x + 1)
fn juxtaposable(expr: &Expr) -> bool {
    match expr {
        Expr::Var(_) => true,
        Expr::Pow(base, _) => matches!(base.as_ref(), Expr::Var(_)) || base.function_kind().is_some(),
        Expr::Exp(_) => true,
        Expr::Add(..) | Expr::Sub(..) => true,
        Expr::Mul(lhs, _) => juxtaposable(lhs),
        other => other.function_kind().is_some(),
    }
}

fn function_name(expr: &Expr) -> &'static str {
    match expr {
        Expr::Ln(_) => "ln",
        Expr::sin(_) => "sin",
        Expr::cos(_) => "cos",
        Expr::tg(_) => "tan",
        Expr::ctg(_) => "cot",
        Expr::arcsin(_) => "arcsin",
        Expr::arccos(_) => "arccos",
        Expr::arctg(_) => "arctan",
        Expr::arcctg(_) => "arccot",
        _ => "exp",
    }
}

fn plain(expr: &Expr) -> String {
    let wrap = |e: &Expr, min_prec: u8| {
        let text = plain(e);
        if precedence(e) < min_prec {
            format!("({})", text)
        } else {
            text
        }
    };
    match expr {
        Expr::Var(name) => name.clone(),
        Expr::Const(c) => format_number(*c),
        Expr::Add(lhs, rhs) => {
            let right = plain(rhs);
            match right.strip_prefix('-') {
                Some(rest) if !rhs.is_additive() => format!("{} - {}", plain(lhs), rest),
                _ => format!("{} + {}", plain(lhs), wrap(rhs, PREC_SUM)),
            }
        }
        Expr::Sub(lhs, rhs) => {
            let right = plain(rhs);
            if rhs.is_additive() || right.starts_with('-') {
                format!("{} - ({})", plain(lhs), right)
            } else {
                format!("{} - {}", plain(lhs), right)
            }
        }
        Expr::Mul(lhs, rhs) if is_minus_one(lhs) => format!("-{}", wrap(rhs, PREC_PRODUCT)),
        Expr::Mul(lhs, rhs) => {
            if let Expr::Const(c) = lhs.as_ref() {
                let coefficient = format_number(*c);
                if !coefficient.contains('/') && juxtaposable(rhs) {
                    return format!("{}{}", coefficient, wrap(rhs, PREC_PRODUCT));
                }
            }
            let right = wrap(rhs, PREC_PRODUCT);
            let right = if right.starts_with('-') {
                format!("({})", right)
            } else {
                right
            };
            format!("{}*{}", wrap(lhs, PREC_PRODUCT), right)
        }
        Expr::Div(lhs, rhs) => {
            let numerator = wrap(lhs, PREC_PRODUCT);
            let denominator = wrap(rhs, PREC_POWER);
            format!("{}/{}", numerator, denominator)
        }
        Expr::Pow(base, exp) if exp.as_const() == Some(0.5) => format!("sqrt({})", plain(base)),
        Expr::Pow(base, exp) => {
            let base_text = if precedence(base) < PREC_ATOM || is_negative_const(base) {
                format!("({})", plain(base))
            } else {
                plain(base)
            };
            format!("{}^{}", base_text, plain_exponent(exp))
        }
        Expr::Exp(arg) if arg.is_one() => "e".to_string(),
        Expr::Exp(arg) => format!("e^{}", plain_exponent(arg)),
        other => {
            let arg = other
                .function_argument()
                .map(plain)
                .unwrap_or_default();
            format!("{}({})", function_name(other), arg)
        }
    }
}

fn plain_exponent(exp: &Expr) -> String {
    let text = plain(exp);
    let simple = match exp {
        Expr::Var(_) => true,
        Expr::Const(c) => *c >= 0.0 && !text.contains('/') && !text.contains('.'),
        _ => false,
    };
    if simple { text } else { format!("({})", text) }
}

fn latex_function_name(expr: &Expr) -> &'static str {
    match expr {
        Expr::Ln(_) => "\\ln",
        Expr::sin(_) => "\\sin",
        Expr::cos(_) => "\\cos",
        Expr::tg(_) => "\\tan",
        Expr::ctg(_) => "\\cot",
        Expr::arcsin(_) => "\\arcsin",
        Expr::arccos(_) => "\\arccos",
        Expr::arctg(_) => "\\arctan",
        Expr::arcctg(_) => "\\operatorname{arccot}",
        _ => "\\exp",
    }
}

fn latex(expr: &Expr) -> String {
    let wrap = |e: &Expr, min_prec: u8| {
        let text = latex(e);
        if precedence(e) < min_prec && !matches!(e, Expr::Div(..)) {
            format!("\\left({}\\right)", text)
        } else {
            text
        }
    };
    match expr {
        Expr::Var(name) => name.clone(),
        Expr::Const(c) => format_number_latex(*c),
        Expr::Add(lhs, rhs) => {
            let right = latex(rhs);
            match right.strip_prefix('-') {
                Some(rest) if !rhs.is_additive() => format!("{} - {}", latex(lhs), rest),
                _ => format!("{} + {}", latex(lhs), right),
            }
        }
        Expr::Sub(lhs, rhs) => {
            let right = latex(rhs);
            if rhs.is_additive() || right.starts_with('-') {
                format!("{} - \\left({}\\right)", latex(lhs), right)
            } else {
                format!("{} - {}", latex(lhs), right)
            }
        }
        Expr::Mul(lhs, rhs) if is_minus_one(lhs) => format!("-{}", wrap(rhs, PREC_PRODUCT)),
        Expr::Mul(lhs, rhs) => {
            let right = wrap(rhs, PREC_PRODUCT);
            let joiner = if matches!(rhs.as_ref(), Expr::Const(_)) || right.starts_with('-') {
                " \\cdot "
            } else {
                " "
            };
            format!("{}{}{}", wrap(lhs, PREC_PRODUCT), joiner, right)
        }
        Expr::Div(lhs, rhs) => match lhs.as_ref() {
            // keep the sign in front of the fraction
            Expr::Mul(sign, rest) if is_minus_one(sign) => {
                format!("-\\frac{{{}}}{{{}}}", latex(rest), latex(rhs))
            }
            Expr::Const(c) if *c < 0.0 => {
                format!("-\\frac{{{}}}{{{}}}", format_number_latex(-c), latex(rhs))
            }
            _ => format!("\\frac{{{}}}{{{}}}", latex(lhs), latex(rhs)),
        },
        Expr::Pow(base, exp) if exp.as_const() == Some(0.5) => format!("\\sqrt{{{}}}", latex(base)),
        Expr::Pow(base, exp) if base.function_kind().is_some() && !matches!(base.as_ref(), Expr::Exp(_)) => {
            let arg = base.function_argument().map(latex).unwrap_or_default();
            format!(
                "{}^{{{}}}{{\\left({} \\right)}}",
                latex_function_name(base),
                latex(exp),
                arg
            )
        }
        Expr::Pow(base, exp) => {
            let base_text = if precedence(base) < PREC_ATOM || is_negative_const(base) {
                format!("\\left({}\\right)", latex(base))
            } else {
                latex(base)
            };
            format!("{}^{{{}}}", base_text, latex(exp))
        }
        Expr::Exp(arg) if arg.is_one() => "e".to_string(),
        Expr::Exp(arg) => format!("e^{{{}}}", latex(arg)),
        other => {
            let arg = other.function_argument().map(latex).unwrap_or_default();
            format!("{}{{\\left({} \\right)}}", latex_function_name(other), arg)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", plain(self))
    }
}

impl Expr {
    /// LaTeX source of the expression.
    /// # Example
    /// ```
    /// use RustedIntegrals::symbolic::symbolic_engine::Expr;
    /// let expr = Expr::parse_expression("x^3/3").unwrap();
    /// assert_eq!(expr.to_latex(), "\\frac{x^{3}}{3}");
    /// ```
    pub fn to_latex(&self) -> String {
        latex(self)
    }

    pub fn typeset(&self, notation: Notation) -> String {
        match notation {
            Notation::Latex => self.to_latex(),
            Notation::Plain => self.to_string(),
        }
    }

    /// `∫f dx` in the chosen notation, sums put in brackets.
    pub fn integral_notation(&self, var: &str, notation: Notation) -> String {
        match notation {
            Notation::Plain if self.is_additive() => format!("∫({}) d{}", self, var),
            Notation::Plain => format!("∫{} d{}", self, var),
            Notation::Latex if self.is_additive() => {
                format!("\\int \\left({}\\right)\\, d{}", self.to_latex(), var)
            }
            Notation::Latex => format!("\\int {}\\, d{}", self.to_latex(), var),
        }
    }

    /// `∫_a^b f dx` in the chosen notation.
    pub fn definite_integral_notation(
        &self,
        var: &str,
        lower: &Expr,
        upper: &Expr,
        notation: Notation,
    ) -> String {
        match notation {
            Notation::Plain => format!(
                "∫[{}, {}] {}",
                lower,
                upper,
                self.integral_notation(var, notation).trim_start_matches('∫')
            ),
            Notation::Latex => format!(
                "\\int_{{{}}}^{{{}}} {}\\, d{}",
                lower.to_latex(),
                upper.to_latex(),
                if self.is_additive() {
                    format!("\\left({}\\right)", self.to_latex())
                } else {
                    self.to_latex()
                },
                var
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn parse(text: &str) -> Expr {
        Expr::parse_expression(text).unwrap()
    }

    #[test]
    fn test_plain_round_trip_of_canonical_text() {
        for text in [
            "x^3/3 + 3x^2/2",
            "5x",
            "-cos(x)",
            "x^2 + 3x",
            "-x^2/2",
            "2sin(x)",
            "x^2 - 1",
            "1/x",
            "ln(x)",
            "e^x",
            "e^(2x)",
            "sqrt(x)",
            "x^(3/2)",
            "tan(x)",
            "arctan(x)",
            "x*ln(x) - x",
            "1/(x + 1)",
            "2(x + 1)",
        ] {
            assert_eq!(parse(text).to_string(), text, "{}", text);
        }
    }

    #[test]
    fn test_plain_signs() {
        let expr = Expr::Add(Box::new(Expr::var("x")), Box::new(Expr::Const(-1.0)));
        assert_eq!(expr.to_string(), "x - 1");
        let expr = Expr::Sub(Box::new(Expr::var("x")), Box::new(parse("x + 1")));
        assert_eq!(expr.to_string(), "x - (x + 1)");
        assert_eq!(Expr::Const(-2.0).pow(Expr::Const(2.0)).to_string(), "(-2)^2");
    }

    #[test]
    fn test_plain_constants() {
        assert_eq!(parse("pi").to_string(), "π");
        assert_eq!(parse("e").to_string(), "e");
        assert_eq!((Expr::Const(1.5) * Expr::var("x")).to_string(), "3/2*x");
    }

    #[test]
    fn test_latex() {
        assert_eq!(parse("x^3/3 + 3x^2/2").to_latex(), "\\frac{x^{3}}{3} + \\frac{3 x^{2}}{2}");
        assert_eq!(parse("-cos(x)").to_latex(), "-\\cos{\\left(x \\right)}");
        assert_eq!(parse("e^(2x)").to_latex(), "e^{2 x}");
        assert_eq!(parse("sqrt(x)").to_latex(), "\\sqrt{x}");
        assert_eq!(parse("sin(x)^2").to_latex(), "\\sin^{2}{\\left(x \\right)}");
        assert_eq!(parse("-x^2/2").to_latex(), "-\\frac{x^{2}}{2}");
        assert_eq!(parse("2(x + 1)").to_latex(), "2 \\left(x + 1\\right)");
    }

    #[test]
    fn test_integral_notation() {
        assert_eq!(parse("5").integral_notation("x", Notation::Plain), "∫5 dx");
        assert_eq!(parse("x^2 + 3x").integral_notation("x", Notation::Plain), "∫(x^2 + 3x) dx");
        assert_eq!(parse("sin(x)").integral_notation("x", Notation::Latex), "\\int \\sin{\\left(x \\right)}\\, dx");
        assert_eq!(
            parse("x^2").definite_integral_notation("x", &Expr::Const(0.0), &Expr::Const(1.0), Notation::Plain),
            "∫[0, 1] x^2 dx"
        );
    }

    #[test]
    fn test_notation_from_str() {
        assert_eq!(Notation::from_str("plain").unwrap(), Notation::Plain);
        assert_eq!(Notation::from_str("LaTeX").unwrap(), Notation::Latex);
        assert!(Notation::from_str("mathml").is_err());
        assert_eq!(Notation::Plain.to_string(), "plain");
    }
}
