//! a module turns a String expression into a symbolic expression
//!# Example
//! ```
//! use RustedIntegrals::symbolic::symbolic_engine::Expr;
//! let parsed_expression = Expr::parse_expression("x^2 + 3x").unwrap();
//! println!(" parsed_expression {}", parsed_expression);
//! ```
use crate::symbolic::symbolic_engine::{Expr, FunctionKind};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, digit0, digit1, multispace0},
    combinator::{all_consuming, map_res, opt, recognize},
    multi::many0,
    sequence::{delimited, pair},
};
use std::f64::consts::PI;
//                  grammar (lowest precedence first)
//   sum      := product (('+' | '-') product)*
//   product  := unary (('*' | '/') unary | <implicit> power)*
//   unary    := ('-' | '+') unary | power
//   power    := primary (('^' | '**') unary)?          right associative
//   primary  := number | '(' sum ')' | name '(' sum ')' | name power | name
//
// implicit multiplication is recognised when a factor is directly followed by
// a letter or an opening bracket: 3x, 2sin(x), x(x+1), (x+1)(x-1)
type ParseResult<'a> = IResult<&'a str, Expr>;

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

fn negate(expr: Expr) -> Expr {
    match expr {
        Expr::Const(c) => Expr::Const(-c),
        other => -other,
    }
}

/// function names understood by the parser, Spanish `sen` and the
/// `tg`/`ctg`/`arctg` notation included
fn function_by_name(name: &str) -> Option<FunctionKind> {
    match name {
        "exp" => Some(FunctionKind::Exp),
        "ln" | "log" => Some(FunctionKind::Ln),
        "sin" | "sen" => Some(FunctionKind::Sin),
        "cos" => Some(FunctionKind::Cos),
        "tan" | "tg" => Some(FunctionKind::Tan),
        "cot" | "ctg" => Some(FunctionKind::Cot),
        "arcsin" | "asin" => Some(FunctionKind::Arcsin),
        "arccos" | "acos" => Some(FunctionKind::Arccos),
        "arctan" | "atan" | "arctg" => Some(FunctionKind::Arctan),
        "arccot" | "acot" | "arcctg" => Some(FunctionKind::Arccot),
        _ => None,
    }
}

fn parse_number(input: &str) -> ParseResult<'_> {
    let digits = alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ));
    let mut number = map_res(digits, |s: &str| s.parse::<f64>().map(Expr::Const));
    number.parse(input)
}

fn parse_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))
    .parse(input)
}

fn parse_parenthesized(input: &str) -> ParseResult<'_> {
    delimited(ws(char('(')), parse_sum, ws(char(')'))).parse(input)
}

fn parse_named(input: &str) -> ParseResult<'_> {
    let (rest, name) = parse_name(input)?;
    if name == "sqrt" || function_by_name(name).is_some() {
        // sin(x)^2 squares the sine, sin x^2 takes the sine of x^2
        let (rest, argument) = if rest.trim_start().starts_with('(') {
            parse_parenthesized(rest)?
        } else {
            parse_power(rest)?
        };
        let node = match function_by_name(name) {
            Some(kind) => Expr::apply_function(kind, argument),
            None => argument.sqrt(),
        };
        return Ok((rest, node));
    }
    let node = match name {
        "pi" => Expr::Const(PI),
        "e" => Expr::Exp(Box::new(Expr::Const(1.0))),
        _ => Expr::Var(name.to_string()),
    };
    Ok((rest, node))
}

fn parse_primary(input: &str) -> ParseResult<'_> {
    ws(alt((parse_number, parse_parenthesized, parse_named))).parse(input)
}

fn parse_power(input: &str) -> ParseResult<'_> {
    let (input, base) = parse_primary(input)?;
    match ws(alt((tag("**"), tag("^")))).parse(input) {
        Ok((rest, _)) => {
            let (rest, exponent) = parse_unary(rest)?;
            let node = match base {
                // e^u is the exponential function
                Expr::Exp(ref arg) if arg.is_one() => Expr::Exp(Box::new(exponent)),
                base => Expr::Pow(Box::new(base), Box::new(exponent)),
            };
            Ok((rest, node))
        }
        Err(nom::Err::Error(_)) => Ok((input, base)),
        Err(e) => Err(e),
    }
}

fn parse_unary(input: &str) -> ParseResult<'_> {
    match ws(alt((char('-'), char('+')))).parse(input) {
        Ok((rest, sign)) => {
            let (rest, operand) = parse_unary(rest)?;
            let node = if sign == '-' { negate(operand) } else { operand };
            Ok((rest, node))
        }
        Err(nom::Err::Error(_)) => parse_power(input),
        Err(e) => Err(e),
    }
}

fn starts_implicit_factor(input: &str) -> bool {
    input
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '(')
}

fn parse_product(input: &str) -> ParseResult<'_> {
    let (mut input, mut acc) = parse_unary(input)?;
    loop {
        match ws(alt((char('*'), char('/')))).parse(input) {
            Ok((rest, op)) => {
                let (rest, rhs) = parse_unary(rest)?;
                acc = if op == '*' {
                    Expr::Mul(Box::new(acc), Box::new(rhs))
                } else {
                    Expr::Div(Box::new(acc), Box::new(rhs))
                };
                input = rest;
            }
            Err(nom::Err::Error(_)) if starts_implicit_factor(input) => {
                let (rest, rhs) = parse_power(input)?;
                acc = Expr::Mul(Box::new(acc), Box::new(rhs));
                input = rest;
            }
            Err(nom::Err::Error(_)) => return Ok((input, acc)),
            Err(e) => return Err(e),
        }
    }
}

fn parse_sum(input: &str) -> ParseResult<'_> {
    let (mut input, mut acc) = parse_product(input)?;
    loop {
        match ws(alt((char('+'), char('-')))).parse(input) {
            Ok((rest, op)) => {
                let (rest, rhs) = parse_product(rest)?;
                acc = if op == '+' {
                    Expr::Add(Box::new(acc), Box::new(rhs))
                } else {
                    Expr::Sub(Box::new(acc), Box::new(rhs))
                };
                input = rest;
            }
            Err(nom::Err::Error(_)) => return Ok((input, acc)),
            Err(e) => return Err(e),
        }
    }
}

/// Parses a whole function text; the entire input has to be consumed.
pub fn parse_expression_func(input: &str) -> Result<Expr, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Error parsing the function: empty input".to_string());
    }
    match all_consuming(parse_sum).parse(trimmed) {
        Ok((_, expr)) => Ok(expr),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let position = trimmed.len() - e.input.len();
            let near: String = e.input.chars().take(12).collect();
            if near.is_empty() {
                Err(format!(
                    "Error parsing the function '{}': unexpected end of input",
                    trimmed
                ))
            } else {
                Err(format!(
                    "Error parsing the function '{}': unexpected input at position {} near '{}'",
                    trimmed,
                    position + 1,
                    near
                ))
            }
        }
        Err(nom::Err::Incomplete(_)) => Err(format!(
            "Error parsing the function '{}': incomplete input",
            trimmed
        )),
    }
}

impl Expr {
    /// Parses user text such as `x^2 + 3x`, `2sin(x)`, `e^(2x)` or `sen x` into an expression.
    pub fn parse_expression(input: &str) -> Result<Expr, String> {
        parse_expression_func(input)
    }
}
