use reqwest::{Client, Response};
use shared::{
    domain::{Employee, EmployeeId},
    protocol::EmployeeRecord,
};

use crate::error::GatewayError;

/// HTTP gateway for the four remote roster operations.
///
/// No retries and no timeouts: the remote store is the sole source of truth
/// and callers re-fetch rather than reconcile.
#[derive(Debug, Clone)]
pub struct EmployeeGateway {
    http: Client,
    base_url: String,
}

impl EmployeeGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_all(&self) -> Result<Vec<Employee>, GatewayError> {
        const OP: &str = "list employees";
        let response = self
            .http
            .get(format!("{}/employees", self.base_url))
            .send()
            .await
            .map_err(|source| GatewayError::Network { operation: OP, source })?;
        decode_json(OP, check_status(OP, response)?).await
    }

    pub async fn create(&self, record: &EmployeeRecord) -> Result<Employee, GatewayError> {
        const OP: &str = "create employee";
        let response = self
            .http
            .post(format!("{}/employees", self.base_url))
            .json(record)
            .send()
            .await
            .map_err(|source| GatewayError::Network { operation: OP, source })?;
        decode_json(OP, check_status(OP, response)?).await
    }

    pub async fn update(
        &self,
        id: &EmployeeId,
        record: &EmployeeRecord,
    ) -> Result<Employee, GatewayError> {
        const OP: &str = "update employee";
        let response = self
            .http
            .put(format!("{}/employees/{}", self.base_url, id))
            .json(record)
            .send()
            .await
            .map_err(|source| GatewayError::Network { operation: OP, source })?;
        decode_json(OP, check_status(OP, response)?).await
    }

    /// Deletion goes through an action endpoint, not a DELETE verb, and is
    /// not idempotent on the server side.
    pub async fn remove(&self, id: &EmployeeId) -> Result<(), GatewayError> {
        const OP: &str = "delete employee";
        let response = self
            .http
            .post(format!("{}/employees/{}/delete", self.base_url, id))
            .send()
            .await
            .map_err(|source| GatewayError::Network { operation: OP, source })?;
        check_status(OP, response)?;
        Ok(())
    }
}

fn check_status(operation: &'static str, response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(GatewayError::Response { operation, status });
    }
    Ok(response)
}

async fn decode_json<T: serde::de::DeserializeOwned>(
    operation: &'static str,
    response: Response,
) -> Result<T, GatewayError> {
    response
        .json()
        .await
        .map_err(|source| GatewayError::Decode { operation, source })
}

#[cfg(test)]
#[path = "tests/gateway_tests.rs"]
mod tests;
