use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque server-assigned record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The two sex codes the remote store accepts.
pub const SEX_CODES: [&str; 2] = ["M", "F"];

/// A persisted employee record as the remote API serves it.
///
/// Field names on the wire are fixed by the server. The hire date stays a
/// string: the store returns both plain `YYYY-MM-DD` values and RFC 3339
/// timestamps, and parsing is the filter engine's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: EmployeeId,
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
