use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;
use crudui::core::{AppState, CruduiConfig};
use crudui::directory::{
    Credentials, RejectionBody, TokenResponse, User, UserChanges, UserEnvelope, UserPage,
};
use crudui::router::init_router;

pub const TOKEN: &str = "QpwL5tke4Pnpja7X4";

const PER_PAGE: u32 = 6;

/// In-process stand in for the remote directory. Serves the well known
/// twelve person roster and counts every request so tests can tell
/// whether the console went over the wire at all.
pub struct StubState {
    pub users: Mutex<BTreeMap<i64, User>>,
    pub list_calls: AtomicUsize,
    pub login_calls: AtomicUsize,
    pub patch_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    /// While set, list requests answer with a 500.
    pub fail_lists: AtomicBool,
    /// A delete request waits on this before answering, so a test can hold
    /// one delete in flight while it pokes at the console.
    pub delete_gate: Mutex<Option<oneshot::Receiver<()>>>,
}

pub fn reqres_roster() -> BTreeMap<i64, User> {
    let names = [
        (1, "George", "Bluth"),
        (2, "Janet", "Weaver"),
        (3, "Emma", "Wong"),
        (4, "Eve", "Holt"),
        (5, "Charles", "Morris"),
        (6, "Tracey", "Ramos"),
        (7, "Michael", "Lawson"),
        (8, "Lindsay", "Ferguson"),
        (9, "Tobias", "Funke"),
        (10, "Byron", "Fields"),
        (11, "George", "Edwards"),
        (12, "Rachel", "Howell"),
    ];
    names
        .into_iter()
        .map(|(id, first_name, last_name)| {
            let user = User {
                id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: format!(
                    "{}.{}@reqres.in",
                    first_name.to_lowercase(),
                    last_name.to_lowercase()
                ),
                avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
            };
            (id, user)
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct ListParams {
    page: Option<u32>,
}

async fn stub_list(
    State(state): State<Arc<StubState>>,
    Query(params): Query<ListParams>,
) -> Response {
    state.list_calls.fetch_add(1, Ordering::SeqCst);
    if state.fail_lists.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let page = params.page.unwrap_or(1).max(1);
    let users: Vec<User> = state.users.lock().unwrap().values().cloned().collect();
    let total = users.len() as u32;
    let total_pages = total.div_ceil(PER_PAGE);
    let data = users
        .into_iter()
        .skip(((page - 1) * PER_PAGE) as usize)
        .take(PER_PAGE as usize)
        .collect();
    Json(UserPage { page, per_page: PER_PAGE, total, total_pages, data }).into_response()
}

async fn stub_user_lookup(State(state): State<Arc<StubState>>, Path(id): Path<i64>) -> Response {
    let user = state.users.lock().unwrap().get(&id).cloned();
    match user {
        Some(user) => Json(UserEnvelope { data: user }).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn stub_user_update(
    State(state): State<Arc<StubState>>,
    Path(id): Path<i64>,
    Json(changes): Json<UserChanges>,
) -> StatusCode {
    state.patch_calls.fetch_add(1, Ordering::SeqCst);
    let mut users = state.users.lock().unwrap();
    match users.get_mut(&id) {
        Some(user) => {
            user.first_name = changes.first_name;
            user.last_name = changes.last_name;
            user.email = changes.email;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn stub_user_delete(State(state): State<Arc<StubState>>, Path(id): Path<i64>) -> StatusCode {
    state.delete_calls.fetch_add(1, Ordering::SeqCst);
    let gate = state.delete_gate.lock().unwrap().take();
    if let Some(gate) = gate {
        gate.await.ok();
    }
    if state.users.lock().unwrap().remove(&id).is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn stub_login(
    State(state): State<Arc<StubState>>,
    Json(credentials): Json<Credentials>,
) -> Response {
    state.login_calls.fetch_add(1, Ordering::SeqCst);
    if credentials.email == "eve.holt@reqres.in" {
        Json(TokenResponse { token: TOKEN.to_string() }).into_response()
    } else {
        let body = RejectionBody { error: Some("user not found".to_string()) };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

pub async fn spawn_stub_directory() -> (String, Arc<StubState>) {
    let state = Arc::new(StubState {
        users: Mutex::new(reqres_roster()),
        list_calls: AtomicUsize::new(0),
        login_calls: AtomicUsize::new(0),
        patch_calls: AtomicUsize::new(0),
        delete_calls: AtomicUsize::new(0),
        fail_lists: AtomicBool::new(false),
        delete_gate: Mutex::new(None),
    });
    let router = Router::new()
        .route("/users", get(stub_list))
        .route(
            "/users/{id}",
            get(stub_user_lookup).patch(stub_user_update).delete(stub_user_delete),
        )
        .route("/login", post(stub_login))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{address}"), state)
}

/// The console under test, wired to the given directory. It is exercised
/// through oneshot and never binds a port of its own.
pub async fn console_app(directory_url: &str) -> Router {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .try_init();
    let config = CruduiConfig {
        console_url: "127.0.0.1".to_string(),
        console_port: 0,
        directory_url: directory_url.to_string(),
        log_level: "warn".to_string(),
    };
    let state = AppState::new(config).unwrap();
    init_router(state).await
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("cookie", format!("token={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header("cookie", format!("token={token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}

pub fn set_cookie(response: &Response) -> &str {
    response
        .headers()
        .get("set-cookie")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
