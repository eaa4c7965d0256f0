/*
Pretty printing of a worked integral as a table.
*/
use crate::integration::service::IntegralResult;
use crate::integration::step::Procedure;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(PartialEq, Tabled)]
pub struct StepRow {
    #[tabled(rename = "#")]
    order: usize,
    description: String,
    rule: String,
    result: String,
}

pub fn procedure_rows(procedure: &Procedure) -> Vec<StepRow> {
    procedure
        .iter()
        .map(|step| StepRow {
            order: step.order,
            description: if step.is_verification {
                format!("{} ✓", step.description)
            } else {
                step.description.clone()
            },
            rule: step.explanation.clone().unwrap_or_default(),
            result: step.formatted_result.clone().unwrap_or_default(),
        })
        .collect()
}

pub fn procedure_table(procedure: &Procedure) -> String {
    let mut table = Table::new(procedure_rows(procedure));
    table.with(Style::modern_rounded());
    table.to_string()
}

/// Antiderivative, definite value and the procedure table.
pub fn integral_report(result: &IntegralResult) -> String {
    let mut report = format!(
        "∫ {} = {} + C\n",
        result.original_function, result.indefinite_integral
    );
    if let Some(definite) = &result.definite {
        report.push_str(&format!(
            "{}   ({})\n",
            definite.formatted,
            definite.method.description()
        ));
    }
    if let Some(error) = &result.limit_error {
        report.push_str(&format!("{}\n", error));
    }
    report.push('\n');
    report.push_str(&procedure_table(&result.procedure));
    report
}
