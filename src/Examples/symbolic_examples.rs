#![allow(non_snake_case)]

use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_typeset::Notation;

#[allow(dead_code)]
pub fn sym_examples(example: usize) -> Result<(), String> {
    match example {
        0 => {
            //parse expression from string to symbolic expression
            let input = "3x^2 + 2sin(x) - e^(2x)";
            let parsed_expression = Expr::parse_expression(input)?;
            println!(" parsed_expression {}", parsed_expression);
            println!(" as LaTeX {}", parsed_expression.typeset(Notation::Latex));
            // return vec of all arguments
            let all = parsed_expression.all_arguments_are_variables();
            println!("all arguments are variables {:?}", all);
            // differentiate with respect to x
            let df_dx = parsed_expression.diff("x");
            println!("df_dx = {}", df_dx.simplify());
        }
        1 => {
            // function of 1 argument (1D examples)
            let f = Expr::parse_expression("ln(x)")?;
            //convert symbolic expression to a Rust function and evaluate the function
            let f_res = f.lambdify1D("x")?(1.0);
            let df_dx = f.diff("x");
            println!("df_dx = {}, ln(1) = {}", df_dx, f_res);

            let f = Expr::parse_expression("x + exp(x)")?;
            let start = 0.0;
            let end = 10f64;
            let num_values = 100;
            let max_norm = 1e-4;
            // compare numerical and analtical derivatives for a given linspace defined by start, end values and number of values.
            // a norm of the difference between the two of them is returned, and the answer is true if the norm is below max_norm
            let (norm, res) = f.compare_num1D("x", start, end, num_values, max_norm)?;
            println!("norm = {}, res = {}", norm, res);
        }
        2 => {
            // collecting, expanding and ordering terms
            let f = Expr::parse_expression("(x + 1)^3 - x(x + 2)")?;
            println!("simplified: {}", f.simplify());
            println!("expanded: {}", f.expand());
            for term in f.expand().ordered_terms() {
                println!("  term {}", term);
            }
            let zero = Expr::parse_expression("tan(x) cos(x) - sin(x)")?;
            println!("{} is zero: {}", zero, zero.simplifies_to_zero());
        }
        3 => {
            // symbolic antiderivative, definite integral and Gauss-Legendre quadrature
            let f = Expr::parse_expression("x^2 exp(x)")?;
            let antiderivative = f.integrate("x")?;
            println!("∫{} dx = {} + C", f, antiderivative);
            let exact = f.definite_integrate("x", 0.0, 1.0)?;
            let numerical = f.quad("x", 20, 0.0, 1.0)?;
            println!("on [0, 1]: exact {}, quadrature {}", exact, numerical);
        }
        _ => println!("no symbolic example {}", example),
    }
    Ok(())
}
