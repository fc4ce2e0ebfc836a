//! An in-process stand-in for the students backend, plus helpers for driving the router.

use crate::{
    config::{BackendConfig, RuntimeConfiguration},
    routes::router,
    state::RosterState,
};
use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Method, Request, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};
use tokio::net::TcpListener;
use tower::ServiceExt;

#[derive(Default)]
struct FakeBackendData {
    students: Vec<Value>,
    created: Vec<Value>,
    updated: Vec<(String, Value)>,
    deleted: Vec<String>,
    list_calls: usize,
    failing: bool,
    next_id: usize,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    data: Arc<Mutex<FakeBackendData>>,
}

impl FakeBackend {
    /// Serves `students` on an ephemeral port and returns the roster router pointed at it.
    pub async fn spawn(students: Vec<Value>) -> (Self, Router) {
        let backend = Self::default();
        backend.lock().students = students;

        let app = Router::new()
            .route("/students", get(list).post(create))
            .route("/students/{id}", get(fetch).put(replace).delete(remove))
            .with_state(backend.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake backend");
        let address = listener.local_addr().expect("fake backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve fake backend");
        });

        let backend_config =
            BackendConfig::from_parts(&format!("http://{address}"), Duration::from_secs(5))
                .expect("fake backend url");
        let config = RuntimeConfiguration::from_parts(
            backend_config,
            "127.0.0.1:0",
            Duration::from_millis(1_500),
        );
        let state = RosterState::new(config).expect("roster state");

        (backend, router(state))
    }

    fn lock(&self) -> MutexGuard<'_, FakeBackendData> {
        self.data.lock().expect("fake backend lock")
    }

    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    pub fn students(&self) -> Vec<Value> {
        self.lock().students.clone()
    }

    pub fn created(&self) -> Vec<Value> {
        self.lock().created.clone()
    }

    pub fn updated(&self) -> Vec<(String, Value)> {
        self.lock().updated.clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.lock().deleted.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.lock().list_calls
    }
}

fn failure() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "boom"}))).into_response()
}

fn position(data: &FakeBackendData, id: &str) -> Option<usize> {
    data.students.iter().position(|s| s["_id"] == id)
}

async fn list(State(backend): State<FakeBackend>) -> Response {
    let mut data = backend.lock();
    data.list_calls += 1;
    if data.failing {
        return failure();
    }
    Json(Value::Array(data.students.clone())).into_response()
}

async fn fetch(State(backend): State<FakeBackend>, Path(id): Path<String>) -> Response {
    let data = backend.lock();
    if data.failing {
        return failure();
    }
    match position(&data, &id) {
        Some(i) => Json(data.students[i].clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    let mut data = backend.lock();
    if data.failing {
        return failure();
    }
    data.next_id += 1;
    let mut stored = body.clone();
    stored["_id"] = json!(format!("new{}", data.next_id));
    data.created.push(body);
    data.students.push(stored.clone());
    (StatusCode::CREATED, Json(stored)).into_response()
}

async fn replace(
    State(backend): State<FakeBackend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut data = backend.lock();
    if data.failing {
        return failure();
    }
    let Some(i) = position(&data, &id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let mut stored = body.clone();
    stored["_id"] = json!(id.clone());
    data.students[i] = stored.clone();
    data.updated.push((id, body));
    Json(stored).into_response()
}

async fn remove(State(backend): State<FakeBackend>, Path(id): Path<String>) -> Response {
    let mut data = backend.lock();
    if data.failing {
        return failure();
    }
    let Some(i) = position(&data, &id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    data.students.remove(i);
    data.deleted.push(id);
    Json(json!({"message": "Student deleted"})).into_response()
}

pub fn student_json(
    id: &str,
    student_id: &str,
    first_name: &str,
    last_name: &str,
    department: &str,
    is_active: bool,
) -> Value {
    json!({
        "_id": id,
        "studentId": student_id,
        "firstName": first_name,
        "lastName": last_name,
        "email": format!("{}@example.com", first_name.to_lowercase()),
        "department": department,
        "enrollmentYear": "2024",
        "isActive": is_active
    })
}

pub fn form_body(urlencoded: &str) -> String {
    urlencoded.to_string()
}

/// Sends one request through the router, returning the status and the body as text.
/// A body is sent as an urlencoded form.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, String) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(form) => {
            request = request.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            Body::from(form)
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).expect("request"))
        .await
        .expect("infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");

    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}
