//! In-process fake HR backend for integration tests
//!
//! Cookie session (`sid` + `refresh`), one-shot refresh that rotates `sid`,
//! and just enough resources to exercise the client.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{AppendHeaders, IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};

pub const EMAIL: &str = "hr@example.com";
pub const PASSWORD: &str = "secret";
/// Plain employee account linked to directory record `E1`
pub const EMPLOYEE_EMAIL: &str = "employee@example.com";

/// Uploaded multipart field as seen by the backend
#[derive(Debug, Clone)]
pub struct ReceivedField {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Default)]
pub struct Backend {
    valid_sid: Mutex<String>,
    generation: AtomicUsize,
    pub refresh_calls: AtomicUsize,
    pub refresh_fails: AtomicBool,
    pub paged_tasks: AtomicBool,
    pub last_status: Mutex<Option<Value>>,
    pub last_comment: Mutex<Vec<ReceivedField>>,
    /// Id as extracted from the last `tasks/{id}` path
    pub last_task_id: Mutex<Option<String>>,
    pub last_position_filter: Mutex<Option<HashMap<String, String>>>,
    pub request_creates: AtomicUsize,
}

impl Backend {
    /// Invalidate the current session cookie; the refresh cookie stays valid
    pub fn expire_session(&self) {
        *self.valid_sid.lock().unwrap() = "expired".to_string();
    }

    pub fn refresh_count(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    fn issue_sid(&self) -> String {
        let n = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let sid = format!("s{}", n);
        *self.valid_sid.lock().unwrap() = sid.clone();
        sid
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        cookie(headers, "sid").is_some_and(|sid| sid == *self.valid_sid.lock().unwrap())
    }
}

pub struct TestServer {
    pub backend: Arc<Backend>,
    pub addr: SocketAddr,
}

impl TestServer {
    pub async fn start() -> Self {
        let backend = Arc::new(Backend::default());
        let app = router(backend.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { backend, addr }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }
}

fn cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

fn error(status: StatusCode, message: Value) -> Response {
    (
        status,
        Json(json!({ "message": message, "statusCode": status.as_u16() })),
    )
        .into_response()
}

fn unauthorized() -> Response {
    error(StatusCode::UNAUTHORIZED, json!("Unauthorized"))
}

pub fn user_json() -> Value {
    json!({ "id": "U1", "email": EMAIL, "role": "hr", "employeeId": "E9" })
}

pub fn employee_json() -> Value {
    json!({ "id": "U2", "email": EMPLOYEE_EMAIL, "role": "employee", "employeeId": "E1" })
}

pub fn request_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Vacation {}", id),
        "creatorId": "E1",
        "assigneeId": "E9",
        "type": "leave_vacation",
        "status": status,
        "startDate": "2026-07-01",
        "endDate": "2026-07-10"
    })
}

pub fn task_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Task {}", id),
        "creatorId": "E2",
        "assigneeIds": ["E3"],
        "status": status,
        "priority": "high"
    })
}

pub fn document_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Contract {}", id),
        "type": "contract",
        "status": status,
        "createdBy": "E2",
        "reviewerId": "E1"
    })
}

fn router(backend: Arc<Backend>) -> Router {
    let api = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
        .route("/auth/me", get(me))
        .route("/auth/logout", post(logout))
        .route("/tasks", get(list_tasks))
        .route("/tasks/{id}", get(get_task))
        .route("/tasks/{id}/status", patch(task_status))
        .route("/tasks/{id}/comments", post(create_comment))
        .route("/requests", post(create_request))
        .route("/requests/{id}/status", patch(request_status))
        .route("/documents", get(list_documents))
        .route("/documents/{id}/status", patch(document_status))
        .route("/employees/{id}", get(get_employee))
        .route("/departments", get(list_departments))
        .route("/positions", get(list_positions))
        .route("/statistics/overview", get(overview))
        .route("/statistics/tasks-by-assignee", get(tasks_by_assignee))
        .route("/files/{name}", get(get_file));
    Router::new().nest("/api", api).with_state(backend)
}

async fn login(State(backend): State<Arc<Backend>>, Json(body): Json<Value>) -> Response {
    let user = match body["email"].as_str() {
        Some(EMAIL) => user_json(),
        Some(EMPLOYEE_EMAIL) => employee_json(),
        _ => return error(StatusCode::UNAUTHORIZED, json!("Invalid credentials")),
    };
    if body["password"] != PASSWORD {
        return error(StatusCode::UNAUTHORIZED, json!("Invalid credentials"));
    }
    let sid = backend.issue_sid();
    (
        AppendHeaders([
            (header::SET_COOKIE, format!("sid={}; Path=/; HttpOnly", sid)),
            (header::SET_COOKIE, "refresh=r1; Path=/; HttpOnly".to_string()),
        ]),
        Json(json!({ "user": user })),
    )
        .into_response()
}

async fn refresh(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    backend.refresh_calls.fetch_add(1, Ordering::SeqCst);
    if backend.refresh_fails.load(Ordering::SeqCst) || cookie(&headers, "refresh").is_none() {
        return unauthorized();
    }
    let sid = backend.issue_sid();
    (
        AppendHeaders([(header::SET_COOKIE, format!("sid={}; Path=/; HttpOnly", sid))]),
        Json(json!({ "ok": true })),
    )
        .into_response()
}

async fn me(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    if !backend.authorized(&headers) {
        return unauthorized();
    }
    Json(user_json()).into_response()
}

async fn logout(State(backend): State<Arc<Backend>>) -> Response {
    backend.expire_session();
    StatusCode::NO_CONTENT.into_response()
}

async fn list_tasks(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    if !backend.authorized(&headers) {
        return unauthorized();
    }
    let tasks = vec![task_json("T1", "todo"), task_json("T2", "in_progress")];
    if backend.paged_tasks.load(Ordering::SeqCst) {
        Json(json!({ "data": tasks, "meta": { "page": 1, "limit": 2, "total": 3 } }))
            .into_response()
    } else {
        Json(tasks).into_response()
    }
}

async fn get_task(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    // "locked" rejects every session, refreshed or not
    if id == "locked" || !backend.authorized(&headers) {
        return unauthorized();
    }
    *backend.last_task_id.lock().unwrap() = Some(id.clone());
    if id == "missing" {
        return error(StatusCode::NOT_FOUND, json!("Task not found"));
    }
    Json(task_json(&id, "todo")).into_response()
}

async fn task_status(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !backend.authorized(&headers) {
        return unauthorized();
    }
    let status = body["status"].as_str().unwrap_or_default().to_string();
    *backend.last_status.lock().unwrap() = Some(body);
    Json(task_json(&id, &status)).into_response()
}

async fn create_comment(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Response {
    if !backend.authorized(&headers) {
        return unauthorized();
    }
    let mut fields = Vec::new();
    let mut content = String::new();
    let mut attachments = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.unwrap().to_vec();
        if name == "content" {
            content = String::from_utf8_lossy(&bytes).into_owned();
        } else if let Some(file_name) = &file_name {
            attachments.push(json!({
                "fileName": format!("stored-{}", file_name),
                "originalName": file_name,
                "mimeType": content_type,
                "size": bytes.len()
            }));
        }
        fields.push(ReceivedField {
            name,
            file_name,
            content_type,
            bytes,
        });
    }
    *backend.last_comment.lock().unwrap() = fields;

    (
        StatusCode::CREATED,
        Json(json!({
            "id": "C1",
            "authorId": "U1",
            "content": content,
            "attachments": attachments,
            "taskId": id
        })),
    )
        .into_response()
}

async fn list_documents(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    if !backend.authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "data": [
            document_json("D1", "under_review"),
            document_json("D2", "signed"),
            {
                "id": "D3",
                "title": "Contract D3",
                "type": "contract",
                "status": "under_review",
                "createdBy": "E6",
                "reviewerId": "E5"
            }
        ],
        "meta": { "page": 1, "limit": 20, "total": 3 }
    }))
    .into_response()
}

async fn document_status(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !backend.authorized(&headers) {
        return unauthorized();
    }
    let status = body["status"].as_str().unwrap_or_default().to_string();
    *backend.last_status.lock().unwrap() = Some(body);
    Json(document_json(&id, &status)).into_response()
}

async fn create_request(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    backend.request_creates.fetch_add(1, Ordering::SeqCst);
    if !backend.authorized(&headers) {
        return unauthorized();
    }
    (StatusCode::CREATED, Json(request_json("R1", "pending"))).into_response()
}

async fn request_status(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !backend.authorized(&headers) {
        return unauthorized();
    }
    let status = body["status"].as_str().unwrap_or_default().to_string();
    *backend.last_status.lock().unwrap() = Some(body);
    Json(request_json(&id, &status)).into_response()
}

async fn list_departments(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    if !backend.authorized(&headers) {
        return unauthorized();
    }
    Json(json!([
        { "id": "DEP1", "name": "Engineering", "headId": "E9" },
        { "id": "DEP2", "name": "Finance" }
    ]))
    .into_response()
}

async fn list_positions(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Query(filter): Query<HashMap<String, String>>,
) -> Response {
    if !backend.authorized(&headers) {
        return unauthorized();
    }
    let positions = vec![
        json!({ "id": "P1", "title": "Engineer", "departmentId": "DEP1" }),
        json!({ "id": "P2", "title": "Accountant", "departmentId": "DEP2" }),
    ];
    let selected: Vec<Value> = match filter.get("departmentId") {
        Some(department) => positions
            .into_iter()
            .filter(|p| p["departmentId"] == department.as_str())
            .collect(),
        None => positions,
    };
    *backend.last_position_filter.lock().unwrap() = Some(filter);
    Json(selected).into_response()
}

async fn overview(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    if !backend.authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "totalEmployees": 42,
        "activeEmployees": 40,
        "totalDepartments": 5,
        "tasksByStatus": { "todo": 3, "in_progress": 2, "done": 7 },
        "requestsByStatus": { "pending": 4 },
        "overdueTasks": 1
    }))
    .into_response()
}

async fn tasks_by_assignee(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    if !backend.authorized(&headers) {
        return unauthorized();
    }
    Json(json!([
        { "employeeId": "E1", "employeeName": "Ana Ruiz", "total": 4, "completed": 3 },
        { "employeeId": "E3", "total": 0 }
    ]))
    .into_response()
}

async fn get_employee(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    if !backend.authorized(&headers) {
        return unauthorized();
    }
    error(StatusCode::FORBIDDEN, json!(["Insufficient role", "hr only"]))
}

async fn get_file(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Response {
    if !backend.authorized(&headers) {
        return unauthorized();
    }
    let content_type = if name.ends_with(".png") {
        "image/png"
    } else {
        "application/pdf"
    };
    (
        [(header::CONTENT_TYPE, content_type)],
        format!("contents of {}", name).into_bytes(),
    )
        .into_response()
}
