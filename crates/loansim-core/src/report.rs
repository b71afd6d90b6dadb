use crate::error::LoanSimError;
use crate::types::FormFieldValue;
use crate::LoanSimResult;

/// Render extracted form values as the line-oriented submission report:
/// a literal `OUTPUT` header followed by one `field --> value` line each.
pub fn to_string_form_values(values: &[FormFieldValue]) -> String {
    let lines: Vec<String> = values
        .iter()
        .map(|v| format!("{} --> {}", v.field, v.value))
        .collect();
    format!("OUTPUT\n{}", lines.join("\n"))
}

/// Single-shot submission of the form values. A missing payload rejects;
/// there is no retry and no timeout.
pub async fn send(values: Option<Vec<FormFieldValue>>) -> LoanSimResult<String> {
    let values = values.ok_or_else(|| LoanSimError::InvalidInput {
        field: "values".into(),
        reason: "submission payload is required".into(),
    })?;
    Ok(to_string_form_values(&values))
}
