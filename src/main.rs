#![allow(non_snake_case)]
use RustedIntegrals::Examples::integration_examples::integration_examples;
use RustedIntegrals::Examples::symbolic_examples::sym_examples;
use RustedIntegrals::Utils::logger::init_logger;
use RustedIntegrals::Utils::report::integral_report;
use RustedIntegrals::integration::config::IntegratorConfig;
use RustedIntegrals::integration::service::calculate_integral;
use RustedIntegrals::symbolic::symbolic_typeset::Notation;
use log::{error, info};
use std::env;
use std::process;

const USAGE: &str = "usage: RustedIntegrals <function> [<lower> <upper>] [--config <file.toml>]";

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let config = match args.iter().position(|arg| arg == "--config") {
        Some(i) => {
            if i + 1 >= args.len() {
                eprintln!("{}", USAGE);
                process::exit(2);
            }
            let path = args.remove(i + 1);
            args.remove(i);
            match IntegratorConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(2);
                }
            }
        }
        // plain text reads better in a terminal
        None => IntegratorConfig {
            notation: Notation::Plain,
            ..Default::default()
        },
    };
    init_logger(config.log_level, config.log_file.as_deref());

    let limits = match args.as_slice() {
        [] => {
            info!("no function given, running the examples");
            for example in 0..4 {
                integration_examples(example, &config);
            }
            for example in 0..4 {
                if let Err(e) = sym_examples(example) {
                    error!("symbolic example {} failed: {}", example, e);
                }
            }
            return;
        }
        [_] => None,
        [_, lower, upper] => Some((lower.as_str(), upper.as_str())),
        _ => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };
    match calculate_integral(&args[0], limits, &config) {
        Ok(result) => println!("{}", integral_report(&result)),
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
