use std::{
    io::{self, Write},
    sync::Arc,
};

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use client_core::{
    error::RosterError, AutoConfirm, ClientEvent, ConfirmPrompt, EmployeeBuffer, RosterClient,
    RosterHandle,
};
use shared::domain::{Employee, EmployeeId};

mod config;

#[derive(Parser, Debug)]
#[command(name = "roster", about = "Employee roster client")]
struct Args {
    /// Overrides the configured roster API base URL.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lists employees, optionally restricted to a hire-date range.
    List {
        /// Inclusive lower bound on the hire date (YYYY-MM-DD).
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Inclusive upper bound on the hire date (YYYY-MM-DD).
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    /// Creates an employee record.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        position: String,
        #[arg(long)]
        salary: String,
        /// One of the codes 'M' or 'F'.
        #[arg(long)]
        sex: String,
        #[arg(long)]
        hire_date: String,
    },
    /// Edits an existing record; omitted fields keep their current value.
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        sex: Option<String>,
        #[arg(long)]
        hire_date: Option<String>,
    },
    /// Deletes a record after confirmation.
    Delete {
        id: String,
        /// Skips the interactive confirmation.
        #[arg(long)]
        yes: bool,
    },
}

/// Reads the confirmation from the terminal; anything but an explicit yes
/// declines.
struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }
}

fn print_table(employees: &[Employee]) {
    println!(
        "{:<24} {:<20} {:>10} {:^4} {:<12} {}",
        "NAME", "POSITION", "SALARY", "SEX", "HIRED", "ID"
    );
    for employee in employees {
        println!(
            "{:<24} {:<20} {:>10.2} {:^4} {:<12} {}",
            employee.name,
            employee.position,
            employee.salary,
            employee.sex,
            employee.hire_date,
            employee.id
        );
    }
}

fn drain_events(events: &mut tokio::sync::broadcast::Receiver<ClientEvent>) {
    while let Ok(event) = events.try_recv() {
        match event {
            ClientEvent::EmployeeCreated { employee } => {
                println!("Created employee {} ({})", employee.name, employee.id);
            }
            ClientEvent::EmployeeUpdated { employee } => {
                println!("Updated employee {} ({})", employee.name, employee.id);
            }
            ClientEvent::EmployeeDeleted { id } => {
                println!("Deleted employee {id}");
            }
            ClientEvent::Error(message) => {
                eprintln!("error: {message}");
            }
            ClientEvent::RosterRefreshed { .. } | ClientEvent::FilterChanged { .. } => {}
        }
    }
}

fn report_validation(result: Result<(), RosterError>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(RosterError::Validation(errors)) => {
            eprintln!("The submission was blocked:");
            for rule in &errors {
                eprintln!("  - {rule}");
            }
            anyhow::bail!("validation failed; nothing was submitted");
        }
        Err(err) => Err(err.into()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let settings = config::load_settings();
    let server_url = config::resolve_server_url(args.server_url, settings);
    tracing::debug!(%server_url, "resolved roster API base URL");

    match args.command {
        Command::List { from, to, json } => {
            let client = RosterClient::new(server_url);
            let mut events = client.subscribe_events();
            client.refresh().await;
            client.apply_filter(from, to).await;
            drain_events(&mut events);

            let snapshot = client.snapshot().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot.visible)?);
            } else {
                print_table(&snapshot.visible);
                println!(
                    "{} of {} employee(s) shown",
                    snapshot.visible.len(),
                    snapshot.employees.len()
                );
            }
        }
        Command::Add {
            name,
            position,
            salary,
            sex,
            hire_date,
        } => {
            let client = RosterClient::new(server_url);
            let mut events = client.subscribe_events();
            client.open_create_form().await;
            client
                .set_create_buffer(EmployeeBuffer {
                    name,
                    position,
                    salary,
                    sex,
                    hire_date,
                })
                .await;
            let result = client.submit_create().await;
            drain_events(&mut events);
            report_validation(result)?;
        }
        Command::Edit {
            id,
            name,
            position,
            salary,
            sex,
            hire_date,
        } => {
            let client = RosterClient::new(server_url);
            let mut events = client.subscribe_events();
            client.refresh().await;

            let id = EmployeeId(id);
            client.open_edit_form(&id).await?;
            let mut buffer = client
                .snapshot()
                .await
                .edit_buffer
                .map(|(_, buffer)| buffer)
                .unwrap_or_default();
            if let Some(v) = name {
                buffer.name = v;
            }
            if let Some(v) = position {
                buffer.position = v;
            }
            if let Some(v) = salary {
                buffer.salary = v;
            }
            if let Some(v) = sex {
                buffer.sex = v;
            }
            if let Some(v) = hire_date {
                buffer.hire_date = v;
            }
            client.set_edit_buffer(buffer).await;
            let result = client.submit_update().await;
            drain_events(&mut events);
            report_validation(result)?;
        }
        Command::Delete { id, yes } => {
            let prompt: Arc<dyn ConfirmPrompt> = if yes {
                Arc::new(AutoConfirm)
            } else {
                Arc::new(StdinPrompt)
            };
            let client = RosterClient::new_with_prompt(server_url, prompt);
            let mut events = client.subscribe_events();
            let issued = client.delete(&EmployeeId(id)).await;
            drain_events(&mut events);
            if !issued {
                println!("Cancelled; no request was issued.");
            }
        }
    }

    Ok(())
}
