use serde::{Deserialize, Serialize};

/// Body for create and update submissions.
///
/// Same wire shape as a persisted record minus `_id`; the server assigns the
/// identifier on creation and the path segment carries it on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "posicion")]
    pub position: String,
    #[serde(rename = "salario")]
    pub salary: f64,
    #[serde(rename = "sexo")]
    pub sex: String,
    #[serde(rename = "fecha_de_ingreso")]
    pub hire_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_body_never_carries_an_id() {
        let record = EmployeeRecord {
            name: "Luis".to_string(),
            position: "Contador".to_string(),
            salary: 900.0,
            sex: "M".to_string(),
            hire_date: "2024-01-01".to_string(),
        };

        let value = serde_json::to_value(&record).expect("record value");
        assert!(value.get("_id").is_none());
        assert_eq!(value["nombre"], "Luis");
        assert_eq!(value["salario"], 900.0);
    }
}
