use shared::{domain::SEX_CODES, protocol::EmployeeRecord};

use crate::EmployeeBuffer;

/// Checks a form buffer before submission and coerces it into a wire record.
///
/// Rules are evaluated independently, never short-circuited, so one pass
/// reports every violation at once. The hire date is only checked for
/// presence; calendar validity is left to the filter engine.
pub fn validate(buffer: &EmployeeBuffer) -> Result<EmployeeRecord, Vec<String>> {
    let mut errors = Vec::new();

    if buffer.name.trim().is_empty() {
        errors.push("name is required".to_string());
    }
    if buffer.position.trim().is_empty() {
        errors.push("position is required".to_string());
    }
    let salary = match buffer.salary.trim().parse::<f64>() {
        Ok(value) if value > 0.0 => Some(value),
        _ => {
            errors.push("salary must be a number greater than 0".to_string());
            None
        }
    };
    if !SEX_CODES.contains(&buffer.sex.as_str()) {
        errors.push("sex must be 'M' or 'F'".to_string());
    }
    if buffer.hire_date.trim().is_empty() {
        errors.push("hire date is required".to_string());
    }

    match salary {
        Some(salary) if errors.is_empty() => Ok(EmployeeRecord {
            name: buffer.name.clone(),
            position: buffer.position.clone(),
            salary,
            sex: buffer.sex.clone(),
            hire_date: buffer.hire_date.clone(),
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
#[path = "tests/validator_tests.rs"]
mod tests;
