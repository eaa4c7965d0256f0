use crate::Utils::report::{integral_report, procedure_table};
use crate::integration::config::IntegratorConfig;
use crate::integration::procedure::ProcedureAssembler;
use crate::integration::service::{calculate_integral, calculate_integrals_parallel};
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_traits::SymbolicEngineType;
use crate::symbolic::symbolic_typeset::Notation;
use log::info;

pub fn integration_examples(example: usize, config: &IntegratorConfig) {
    match example {
        0 => {
            // worked solutions of the textbook cases
            for function in ["x^2 + 3x", "5", "sin(x)", "(x + 1)^2"] {
                match calculate_integral(function, None, config) {
                    Ok(result) => println!("{}\n", integral_report(&result)),
                    Err(e) => println!("{}: {}", function, e),
                }
            }
        }
        1 => {
            // definite integrals; the second one needs quadrature
            for (function, lower, upper) in [("x^2", "0", "1"), ("1/x", "-2", "-1"), ("cos(x)", "0", "pi/2")] {
                match calculate_integral(function, Some((lower, upper)), config) {
                    Ok(result) => println!("{}\n", integral_report(&result)),
                    Err(e) => println!("{}: {}", function, e),
                }
            }
        }
        2 => {
            // assembling a procedure directly from an expression and its antiderivative
            let engine = SymbolicEngineType::Native.create_engine();
            let expr = match Expr::parse_expression("x ln(x)") {
                Ok(expr) => expr,
                Err(e) => {
                    println!("{}", e);
                    return;
                }
            };
            match engine.integrate(&expr, "x") {
                Ok(antiderivative) => {
                    let procedure = ProcedureAssembler::new(engine.as_ref(), Notation::Plain)
                        .assemble(&expr, "x", &antiderivative);
                    println!("{}", procedure_table(&procedure));
                }
                Err(e) => println!("{}", e),
            }
        }
        3 => {
            // a batch integrated in parallel
            let functions = ["x^3 - 2x", "exp(3x)", "1/(x^2 + 1)", "x sin(x)", "tan(x)", "sqrt(x)"];
            let results = calculate_integrals_parallel(&functions, config);
            for (function, result) in functions.iter().zip(results) {
                match result {
                    Ok(result) => info!(
                        "∫{} dx = {} + C ({} steps)",
                        function,
                        result.indefinite_integral_text,
                        result.procedure.len()
                    ),
                    Err(e) => info!("{}: {}", function, e),
                }
            }
        }
        _ => println!("no integration example {}", example),
    }
}
