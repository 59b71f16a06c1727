use super::*;

fn valid_buffer() -> EmployeeBuffer {
    EmployeeBuffer {
        name: "Luis".to_string(),
        position: "Contador".to_string(),
        salary: "900".to_string(),
        sex: "M".to_string(),
        hire_date: "2024-01-01".to_string(),
    }
}

#[test]
fn valid_buffer_coerces_into_wire_record() {
    let record = validate(&valid_buffer()).expect("valid buffer");
    assert_eq!(record.name, "Luis");
    assert_eq!(record.salary, 900.0);
    assert_eq!(record.hire_date, "2024-01-01");
}

#[test]
fn coerced_salary_carries_the_parsed_value_through() {
    let mut buffer = valid_buffer();
    buffer.salary = " 1234.56 ".to_string();
    let record = validate(&buffer).expect("valid buffer");
    assert_eq!(record.salary, 1234.56);
}

#[test]
fn empty_buffer_reports_every_rule_at_once() {
    let errors = validate(&EmployeeBuffer::default()).expect_err("must fail");
    assert_eq!(errors.len(), 5, "all five rules must report: {errors:?}");
    assert!(errors.iter().any(|e| e.contains("name")));
    assert!(errors.iter().any(|e| e.contains("position")));
    assert!(errors.iter().any(|e| e.contains("salary")));
    assert!(errors.iter().any(|e| e.contains("sex")));
    assert!(errors.iter().any(|e| e.contains("hire date")));
}

#[test]
fn whitespace_only_fields_count_as_blank() {
    let mut buffer = valid_buffer();
    buffer.name = "   ".to_string();
    buffer.position = "\t".to_string();
    let errors = validate(&buffer).expect_err("must fail");
    assert_eq!(errors.len(), 2);
}

#[test]
fn zero_salary_fails_with_the_salary_message() {
    let mut buffer = valid_buffer();
    buffer.salary = "0".to_string();
    let errors = validate(&buffer).expect_err("must fail");
    assert_eq!(errors, vec!["salary must be a number greater than 0"]);
}

#[test]
fn negative_salary_fails_regardless_of_other_fields() {
    let mut buffer = valid_buffer();
    buffer.salary = "-1200".to_string();
    let errors = validate(&buffer).expect_err("must fail");
    assert_eq!(errors, vec!["salary must be a number greater than 0"]);
}

#[test]
fn unparseable_salary_counts_as_a_salary_violation() {
    let mut buffer = valid_buffer();
    buffer.salary = "lots".to_string();
    let errors = validate(&buffer).expect_err("must fail");
    assert_eq!(errors, vec!["salary must be a number greater than 0"]);
}

#[test]
fn sex_outside_the_two_codes_fails_even_when_all_else_is_valid() {
    for code in ["", "m", "f", "X", "MF"] {
        let mut buffer = valid_buffer();
        buffer.sex = code.to_string();
        let errors = validate(&buffer).expect_err("must fail");
        assert_eq!(errors, vec!["sex must be 'M' or 'F'"], "code {code:?}");
    }
}

#[test]
fn missing_hire_date_is_reported_but_no_calendar_check_happens() {
    let mut buffer = valid_buffer();
    buffer.hire_date = String::new();
    let errors = validate(&buffer).expect_err("must fail");
    assert_eq!(errors, vec!["hire date is required"]);

    // Presence is the only rule; a nonsense date still validates here.
    let mut buffer = valid_buffer();
    buffer.hire_date = "not-a-date".to_string();
    assert!(validate(&buffer).is_ok());
}

#[test]
fn multiple_violations_accumulate_without_short_circuiting() {
    let mut buffer = valid_buffer();
    buffer.name = String::new();
    buffer.salary = "0".to_string();
    buffer.sex = "X".to_string();
    let errors = validate(&buffer).expect_err("must fail");
    assert_eq!(errors.len(), 3);
}
