//! Validate command implementation.

use crate::error::CliError;
use crate::input;
use crate::output;
use crate::RecordKind;
use bibrec_core::{ReportStatus, ValidationOptions, ValidationReport, Validator};
use serde_json::{json, Value};
use tracing::debug;

struct Outcome {
    label: String,
    record: Value,
    report: ValidationReport,
}

pub fn run(
    kind: RecordKind,
    input: Option<String>,
    strict: bool,
    json_output: bool,
    no_unknown_warnings: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = input::read_json(input.as_deref())?;
    let validator = Validator::new(ValidationOptions {
        report_unknown_fields: !no_unknown_warnings,
        ..ValidationOptions::default()
    });

    let (values, batch) = match value {
        Value::Array(values) => (values, true),
        other => (vec![other], false),
    };
    debug!(records = values.len(), batch, "validating input");
    let outcomes: Vec<Result<Outcome, CliError>> = values
        .iter()
        .map(|value| validate_one(&validator, kind, value))
        .collect();

    if !batch {
        if let Some(Err(err)) = outcomes.first() {
            return Err(err.to_string().into());
        }
    }

    let failed = outcomes.iter().filter(|outcome| outcome.is_err()).count();
    let degraded = outcomes
        .iter()
        .filter_map(|outcome| outcome.as_ref().ok())
        .any(|outcome| outcome.report.status == ReportStatus::Degraded);

    if json_output {
        let mut rendered: Vec<Value> = outcomes.iter().enumerate().map(render_json).collect();
        if batch {
            println!("{}", output::format_json(&rendered));
        } else if let Some(single) = rendered.pop() {
            println!("{}", output::format_json(&single));
        }
    } else {
        for (idx, outcome) in outcomes.iter().enumerate() {
            match outcome {
                Ok(outcome) => {
                    println!(
                        "[{}] {}: {:?} ({} diagnostics)",
                        idx,
                        outcome.label,
                        outcome.report.status,
                        outcome.report.diagnostics.len()
                    );
                    for diagnostic in &outcome.report.diagnostics {
                        println!("{}", output::format_diagnostic_row(diagnostic));
                    }
                }
                Err(err) => println!("[{}] error: {}", idx, err),
            }
        }
    }

    if failed > 0 {
        return Err(CliError::BatchFailed {
            failed,
            total: outcomes.len(),
        }
        .into());
    }
    if strict && degraded {
        std::process::exit(2);
    }
    Ok(())
}

fn render_json((idx, outcome): (usize, &Result<Outcome, CliError>)) -> Value {
    match outcome {
        Ok(outcome) => json!({
            "index": idx,
            "record": outcome.record,
            "report": outcome.report,
        }),
        Err(err) => json!({"index": idx, "error": err.to_string()}),
    }
}

fn validate_one(validator: &Validator<'_>, kind: RecordKind, value: &Value) -> Result<Outcome, CliError> {
    let outcome = match kind {
        RecordKind::Item => {
            let validated = validator.validate_item(value)?;
            let key = validated
                .record
                .key
                .as_ref()
                .map(|key| key.to_string())
                .unwrap_or_else(|| "-".to_string());
            Outcome {
                label: format!("{} {}", validated.record.item_type, key),
                record: serde_json::to_value(&validated.record)?,
                report: validated.report,
            }
        }
        RecordKind::Collection => {
            let validated = validator.validate_collection(value)?;
            Outcome {
                label: format!("collection '{}'", validated.record.name),
                record: serde_json::to_value(&validated.record)?,
                report: validated.report,
            }
        }
        RecordKind::Search => {
            let validated = validator.validate_search(value)?;
            Outcome {
                label: format!("search '{}'", validated.record.name),
                record: serde_json::to_value(&validated.record)?,
                report: validated.report,
            }
        }
    };
    Ok(outcome)
}
