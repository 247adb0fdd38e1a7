//! HR console - a terminal view over the HR backend
//!
//! ```text
//! hr-console [COMMAND] [ARGS...]
//!
//!   me                              show the signed-in user
//!   tasks | requests | documents    list records with their status controls
//!   task-status <id> <status>       move a task
//!   request-status <id> <status>    move a request
//!   sign <id> | reject <id>         review a document
//!   stats                           dashboard counters
//!   logout
//! ```
//!
//! Credentials come from `HR_USERNAME` / `HR_PASSWORD` when no saved session
//! exists. Configuration is read from the environment (and `.env`).
//!
//! List views are remembered; after a fresh sign-in with no command given,
//! the console reopens the last one.

use anyhow::{Context, bail};
use hr_client::{
    ClientConfig, ClientError, HrClient, LogConfig, LoginRequest, Notice, RouteMemory, logger,
};
use serde::de::DeserializeOwned;
use shared::models::{DocumentQuery, RequestQuery, RequestStatus, TaskQuery, TaskStatus, User};
use shared::policy::{
    Domain, DocumentAction, StatusControl, document_actions, label_of, status_control,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log = LogConfig::from_env();
    logger::init_logger(&log.level, log.json, log.dir.as_deref())?;

    let config = ClientConfig::from_env();
    let client = HrClient::new(&config)?;
    let mut routes = match config.route_path() {
        Some(path) => RouteMemory::open(path),
        None => RouteMemory::memory(),
    };

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("logout") {
        client.auth().logout().await?;
        println!("{}", Notice::success("Signed out"));
        return Ok(());
    }

    let (user, redirect) = match ensure_session(&client, &mut routes).await {
        Ok(session) => session,
        Err(e) => {
            println!("{}", Notice::from_error(&e));
            if e.requires_login() {
                println!("Set HR_USERNAME and HR_PASSWORD to sign in again");
            }
            return Ok(());
        }
    };

    let command = match (args.first(), redirect.as_deref()) {
        (Some(command), _) => command.as_str(),
        (None, Some(route)) => command_for_route(route),
        (None, None) => "me",
    };

    if let Some(route) = route_for_command(command)
        && let Err(e) = routes.remember(&route)
    {
        tracing::warn!(error = %e, "Failed to remember route");
    }

    if let Err(e) = run(&client, &user, command, args.get(1..).unwrap_or_default()).await {
        match e.downcast_ref::<ClientError>() {
            Some(err) => println!("{}", Notice::from_error(err)),
            None => return Err(e),
        }
    }

    Ok(())
}

/// Commands that open a view and are remembered for the next sign-in
const VIEW_COMMANDS: &[&str] = &["tasks", "requests", "documents", "stats"];

fn route_for_command(command: &str) -> Option<String> {
    VIEW_COMMANDS
        .contains(&command)
        .then(|| format!("/{}", command))
}

/// View command for a remembered route; unknown routes land on `me`
fn command_for_route(route: &str) -> &'static str {
    let segment = route
        .trim_start_matches('/')
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    VIEW_COMMANDS
        .iter()
        .copied()
        .find(|c| *c == segment)
        .unwrap_or("me")
}

/// Reuse the saved session or sign in with environment credentials
///
/// A fresh sign-in also hands back the route remembered from the last run.
async fn ensure_session(
    client: &HrClient,
    routes: &mut RouteMemory,
) -> Result<(User, Option<String>), ClientError> {
    if client.is_authenticated().await {
        match client.auth().me().await {
            Ok(user) => return Ok((user, None)),
            Err(e) if e.requires_login() => tracing::info!("Saved session expired"),
            Err(e) => return Err(e),
        }
    }

    let (Ok(email), Ok(password)) = (std::env::var("HR_USERNAME"), std::env::var("HR_PASSWORD"))
    else {
        return Err(ClientError::SessionExpired);
    };
    let user = client
        .auth()
        .login(&LoginRequest::new(email, password))
        .await?;

    let redirect = routes.take_redirect()?;
    tracing::debug!(redirect = %redirect, "Signed in");
    Ok((user, Some(redirect)))
}

async fn run(client: &HrClient, user: &User, command: &str, args: &[String]) -> anyhow::Result<()> {
    let actor = Some(user);

    match command {
        "me" => {
            println!(
                "{} ({})",
                user.email,
                label_of(user.role.as_str(), Domain::Role)
            );
        }
        "tasks" => {
            let tasks = client.tasks().list(&TaskQuery::default()).await?;
            for task in tasks.items() {
                println!(
                    "{:<12} {:<40} {:<10} {}",
                    task.id,
                    task.title,
                    label_of(task.priority.as_str(), Domain::Priority),
                    render_control(&status_control(actor, task)),
                );
            }
        }
        "requests" => {
            let requests = client.requests().list(&RequestQuery::default()).await?;
            for request in requests.items() {
                println!(
                    "{:<12} {:<40} {:<20} {}",
                    request.id,
                    request.title,
                    label_of(request.request_type.as_str(), Domain::RequestType),
                    render_control(&status_control(actor, request)),
                );
            }
        }
        "documents" => {
            let documents = client.documents().list(&DocumentQuery::default()).await?;
            for document in documents.items() {
                let actions: Vec<&str> = document_actions(actor, Some(document))
                    .iter()
                    .map(DocumentAction::label)
                    .collect();
                println!(
                    "{:<12} {:<40} {:<14} {}",
                    document.id,
                    document.title,
                    render_control(&status_control(actor, document)),
                    actions.join(" / "),
                );
            }
        }
        "task-status" => {
            let (id, status) = id_and_status::<TaskStatus>(args)?;
            let task = client.tasks().get(id).await?;
            if !status_control(actor, &task).offers(status.into()) {
                bail!("not allowed to move task {} to {}", id, status);
            }
            let task = client.tasks().update_status(id, status).await?;
            println!("{}", Notice::success(format!("{} is now {}", task.title, task.status)));
        }
        "request-status" => {
            let (id, status) = id_and_status::<RequestStatus>(args)?;
            let request = client.requests().get(id).await?;
            if !status_control(actor, &request).offers(status.into()) {
                bail!("not allowed to move request {} to {}", id, status);
            }
            let request = client.requests().update_status(id, status).await?;
            println!(
                "{}",
                Notice::success(format!("{} is now {}", request.title, request.status))
            );
        }
        "sign" | "reject" => {
            let id = args.first().context("missing document id")?;
            let action = if command == "sign" {
                DocumentAction::Sign
            } else {
                DocumentAction::Reject
            };
            let document = client.documents().get(id).await?;
            if !document_actions(actor, Some(&document)).contains(&action) {
                bail!("{} is not available for document {}", action.label(), id);
            }
            let document = client.documents().apply_action(id, action).await?;
            println!(
                "{}",
                Notice::success(format!("{} is now {}", document.title, document.status.as_str()))
            );
        }
        "stats" => {
            let overview = client.statistics().overview().await?;
            println!(
                "employees: {} active / {} total",
                overview.active_employees, overview.total_employees
            );
            println!("departments: {}", overview.total_departments);
            println!(
                "tasks: {} ({} overdue)",
                overview.total_tasks(),
                overview.overdue_tasks
            );
            for (code, count) in &overview.tasks_by_status {
                println!("  {:<14} {}", label_of(code, Domain::TaskStatus), count);
            }
            for workload in client.statistics().tasks_by_assignee().await? {
                let name = workload
                    .employee_name
                    .as_deref()
                    .unwrap_or(&workload.employee_id);
                println!(
                    "  {:<30} {:>3}/{:<3} {:>5.1}%",
                    name,
                    workload.completed,
                    workload.total,
                    workload.completion_rate() * 100.0
                );
            }
        }
        other => bail!("unknown command: {}", other),
    }

    Ok(())
}

fn render_control(control: &StatusControl) -> String {
    let current = control.current();
    match control {
        StatusControl::Badge { .. } => format!("[{}]", current.label()),
        StatusControl::Selector { options, .. } => {
            let options: Vec<&str> = options.iter().map(|o| o.as_str()).collect();
            format!("[{} v] {}", current.label(), options.join("|"))
        }
    }
}

fn id_and_status<'a, S: DeserializeOwned>(args: &'a [String]) -> anyhow::Result<(&'a str, S)> {
    let [id, status, ..] = args else {
        bail!("usage: <id> <status>");
    };
    let status = serde_json::from_value(serde_json::Value::String(status.clone()))
        .with_context(|| format!("unknown status: {}", status))?;
    Ok((id.as_str(), status))
}
