use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::domain::{Employee, EmployeeId};
use tokio::sync::{broadcast, Mutex};
use tracing::{error, info, warn};

pub mod error;
pub mod filter;
pub mod gateway;
pub mod validator;

use error::{GatewayError, RosterError};
use gateway::EmployeeGateway;

/// Asks the user to approve a destructive action before any request goes out.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Approves every destructive action without asking.
pub struct AutoConfirm;

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Transient editable copy of an employee's fields while composing a create
/// or edit submission. Every field stays a plain string until validation
/// coerces the buffer into a wire record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeBuffer {
    pub name: String,
    pub position: String,
    pub salary: String,
    pub sex: String,
    pub hire_date: String,
}

impl EmployeeBuffer {
    /// Seeds a buffer from a persisted record, as the edit form does.
    /// The copy is independent of the roster entry it came from.
    pub fn from_record(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            position: employee.position.clone(),
            salary: employee.salary.to_string(),
            sex: employee.sex.clone(),
            hire_date: employee.hire_date.clone(),
        }
    }
}

/// Optional inclusive hire-date bounds for the filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

#[derive(Debug, Clone)]
pub enum ClientEvent {
    RosterRefreshed { total: usize, visible: usize },
    EmployeeCreated { employee: Employee },
    EmployeeUpdated { employee: Employee },
    EmployeeDeleted { id: EmployeeId },
    FilterChanged { range: DateRange },
    Error(String),
}

/// Point-in-time copy of the controller state for a frontend to render.
#[derive(Debug, Clone, Default)]
pub struct RosterSnapshot {
    pub employees: Vec<Employee>,
    pub visible: Vec<Employee>,
    pub filter: DateRange,
    pub create_open: bool,
    pub create_buffer: EmployeeBuffer,
    pub edit_open: bool,
    pub edit_buffer: Option<(EmployeeId, EmployeeBuffer)>,
}

#[derive(Debug, Default)]
struct RosterState {
    employees: Vec<Employee>,
    visible: Vec<Employee>,
    filter: DateRange,
    create_open: bool,
    create_buffer: EmployeeBuffer,
    edit_open: bool,
    edit_buffer: Option<(EmployeeId, EmployeeBuffer)>,
}

impl RosterState {
    fn recompute_visible(&mut self) {
        self.visible = filter::filter_by_range(&self.employees, self.filter.start, self.filter.end);
    }
}

/// Frontend-facing surface of the roster controller.
#[async_trait]
pub trait RosterHandle: Send + Sync {
    /// Fetches the full roster and recomputes the filtered view.
    async fn refresh(&self);
    async fn open_create_form(&self);
    async fn set_create_buffer(&self, buffer: EmployeeBuffer);
    async fn cancel_create_form(&self);
    async fn submit_create(&self) -> Result<(), RosterError>;
    async fn open_edit_form(&self, id: &EmployeeId) -> Result<(), RosterError>;
    async fn set_edit_buffer(&self, buffer: EmployeeBuffer);
    async fn cancel_edit_form(&self);
    async fn submit_update(&self) -> Result<(), RosterError>;
    /// Returns whether the request was actually issued; a declined
    /// confirmation issues no request at all.
    async fn delete(&self, id: &EmployeeId) -> bool;
    async fn apply_filter(&self, start: Option<NaiveDate>, end: Option<NaiveDate>);
    async fn clear_filter(&self);
    async fn snapshot(&self) -> RosterSnapshot;
    fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent>;
}

/// Holds the roster cache, the two form buffers, the active filter and the
/// form-visibility flags, and drives the HTTP gateway.
///
/// Remote operations are fire-and-report: a gateway failure is logged,
/// emitted as [`ClientEvent::Error`] and otherwise no-ops. Only validation
/// failures and local state errors surface to the caller.
pub struct RosterClient {
    gateway: EmployeeGateway,
    prompt: Arc<dyn ConfirmPrompt>,
    inner: Mutex<RosterState>,
    events: broadcast::Sender<ClientEvent>,
}

impl RosterClient {
    pub fn new(server_url: impl Into<String>) -> Arc<Self> {
        Self::new_with_prompt(server_url, Arc::new(AutoConfirm))
    }

    pub fn new_with_prompt(
        server_url: impl Into<String>,
        prompt: Arc<dyn ConfirmPrompt>,
    ) -> Arc<Self> {
        let (events, _) = broadcast::channel(64);
        Arc::new(Self {
            gateway: EmployeeGateway::new(server_url),
            prompt,
            inner: Mutex::new(RosterState::default()),
            events,
        })
    }

    pub fn gateway(&self) -> &EmployeeGateway {
        &self.gateway
    }

    fn report_gateway_error(&self, err: &GatewayError) {
        match err {
            GatewayError::Response { operation, status } => {
                error!(operation, %status, "roster store rejected request");
            }
            GatewayError::Network { operation, source } => {
                error!(operation, "network failure talking to roster store: {source}");
            }
            GatewayError::Decode { operation, source } => {
                error!(operation, "invalid response body from roster store: {source}");
            }
        }
        let _ = self.events.send(ClientEvent::Error(err.to_string()));
    }

    /// Replaces the roster cache with a fresh fetch and recomputes the
    /// filtered view under the active bounds. Returns whether the fetch
    /// succeeded; on failure the cached roster stays as it was.
    async fn refresh_impl(&self) -> bool {
        match self.gateway.list_all().await {
            Ok(employees) => {
                let (total, visible) = {
                    let mut guard = self.inner.lock().await;
                    guard.employees = employees;
                    guard.recompute_visible();
                    (guard.employees.len(), guard.visible.len())
                };
                info!(total, visible, "roster refreshed");
                let _ = self
                    .events
                    .send(ClientEvent::RosterRefreshed { total, visible });
                true
            }
            Err(err) => {
                self.report_gateway_error(&err);
                false
            }
        }
    }
}

#[async_trait]
impl RosterHandle for RosterClient {
    async fn refresh(&self) {
        self.refresh_impl().await;
    }

    async fn open_create_form(&self) {
        let mut guard = self.inner.lock().await;
        guard.create_open = true;
    }

    async fn set_create_buffer(&self, buffer: EmployeeBuffer) {
        let mut guard = self.inner.lock().await;
        guard.create_buffer = buffer;
    }

    async fn cancel_create_form(&self) {
        let mut guard = self.inner.lock().await;
        guard.create_open = false;
        guard.create_buffer = EmployeeBuffer::default();
    }

    async fn submit_create(&self) -> Result<(), RosterError> {
        let buffer = { self.inner.lock().await.create_buffer.clone() };
        let record = validator::validate(&buffer).map_err(RosterError::Validation)?;

        match self.gateway.create(&record).await {
            Ok(employee) => {
                info!(id = %employee.id, "employee created");
                let _ = self.events.send(ClientEvent::EmployeeCreated { employee });
                {
                    let mut guard = self.inner.lock().await;
                    guard.create_buffer = EmployeeBuffer::default();
                    guard.create_open = false;
                }
                self.refresh_impl().await;
            }
            Err(err) => self.report_gateway_error(&err),
        }
        Ok(())
    }

    async fn open_edit_form(&self, id: &EmployeeId) -> Result<(), RosterError> {
        let mut guard = self.inner.lock().await;
        let employee = guard
            .employees
            .iter()
            .find(|employee| &employee.id == id)
            .ok_or_else(|| RosterError::UnknownEmployee(id.clone()))?;
        guard.edit_buffer = Some((id.clone(), EmployeeBuffer::from_record(employee)));
        guard.edit_open = true;
        Ok(())
    }

    async fn set_edit_buffer(&self, buffer: EmployeeBuffer) {
        let mut guard = self.inner.lock().await;
        match guard.edit_buffer.as_mut() {
            Some((_, existing)) => *existing = buffer,
            None => warn!("set_edit_buffer called without an open edit form"),
        }
    }

    async fn cancel_edit_form(&self) {
        let mut guard = self.inner.lock().await;
        guard.edit_open = false;
        guard.edit_buffer = None;
    }

    async fn submit_update(&self) -> Result<(), RosterError> {
        let (id, buffer) = {
            self.inner
                .lock()
                .await
                .edit_buffer
                .clone()
                .ok_or(RosterError::NoEditSession)?
        };
        let record = validator::validate(&buffer).map_err(RosterError::Validation)?;

        match self.gateway.update(&id, &record).await {
            Ok(employee) => {
                info!(id = %employee.id, "employee updated");
                let _ = self.events.send(ClientEvent::EmployeeUpdated { employee });
                {
                    let mut guard = self.inner.lock().await;
                    guard.edit_buffer = None;
                    guard.edit_open = false;
                }
                self.refresh_impl().await;
            }
            Err(err) => self.report_gateway_error(&err),
        }
        Ok(())
    }

    async fn delete(&self, id: &EmployeeId) -> bool {
        let message = format!("Delete employee {id}? This cannot be undone.");
        if !self.prompt.confirm(&message) {
            info!(%id, "delete cancelled by user");
            return false;
        }

        match self.gateway.remove(id).await {
            Ok(()) => {
                info!(%id, "employee deleted");
                let _ = self.events.send(ClientEvent::EmployeeDeleted { id: id.clone() });
                self.refresh_impl().await;
            }
            Err(err) => self.report_gateway_error(&err),
        }
        true
    }

    async fn apply_filter(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        let range = DateRange { start, end };
        {
            let mut guard = self.inner.lock().await;
            guard.filter = range;
            guard.recompute_visible();
        }
        let _ = self.events.send(ClientEvent::FilterChanged { range });
    }

    async fn clear_filter(&self) {
        self.apply_filter(None, None).await;
    }

    async fn snapshot(&self) -> RosterSnapshot {
        let guard = self.inner.lock().await;
        RosterSnapshot {
            employees: guard.employees.clone(),
            visible: guard.visible.clone(),
            filter: guard.filter,
            create_open: guard.create_open,
            create_buffer: guard.create_buffer.clone(),
            edit_open: guard.edit_open,
            edit_buffer: guard.edit_buffer.clone(),
        }
    }

    fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
