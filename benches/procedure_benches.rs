use RustedIntegrals::integration::config::IntegratorConfig;
use RustedIntegrals::integration::procedure::ProcedureAssembler;
use RustedIntegrals::integration::service::{calculate_integral, calculate_integrals_parallel};
use RustedIntegrals::symbolic::symbolic_engine::Expr;
use RustedIntegrals::symbolic::symbolic_traits::SymbolicEngine;
use RustedIntegrals::symbolic::symbolic_typeset::Notation;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_assemble(c: &mut Criterion) {
    let engine = SymbolicEngine;
    let expr = Expr::parse_expression("(x + 1)^4 + 3x sin(x) - exp(2x)").unwrap();
    let antiderivative = expr.integrate("x").unwrap();
    let assembler = ProcedureAssembler::new(&engine, Notation::Latex);
    c.bench_function("assemble procedure", |b| {
        b.iter(|| assembler.assemble(black_box(&expr), "x", black_box(&antiderivative)))
    });
}

fn bench_calculate_integral(c: &mut Criterion) {
    let config = IntegratorConfig::default();
    c.bench_function("calculate_integral x^2 + 3x on [0, 1]", |b| {
        b.iter(|| calculate_integral(black_box("x^2 + 3x"), Some(("0", "1")), &config))
    });
}

fn bench_parallel_batch(c: &mut Criterion) {
    let config = IntegratorConfig::default();
    let functions = [
        "x^2 + 3x",
        "5",
        "sin(x)",
        "x exp(x)",
        "1/(x^2 + 4)",
        "(2x + 1)^5",
        "x^2 ln(x)",
        "cos(3x) + tan(x)",
    ];
    c.bench_function("parallel batch of 8", |b| {
        b.iter(|| calculate_integrals_parallel(black_box(&functions), &config))
    });
}

criterion_group!(benches, bench_assemble, bench_calculate_integral, bench_parallel_batch);
criterion_main!(benches);
