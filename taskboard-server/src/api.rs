//! REST API: shared state, route handlers, and server startup.
//!
//! The server owns one [`TaskStore`] for its whole lifetime. Handlers reach
//! it through [`AppState`], whose methods each take the store lock exactly
//! once and release it before returning, so every store operation runs as a
//! critical section and no lock is ever held across an `.await`.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use parking_lot::RwLock;
use serde::Serialize;
use taskboard::tasks::{TaskError, TaskFilter, TaskStore, sample_tasks};
use taskboard_proto::input::{NewTask, TaskPatch};
use taskboard_proto::task::{Task, TaskId};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::board;
use crate::error::ApiError;
use crate::validation::{TaskQuery, check_new_task, check_patch, parse_task_id};

/// Shared server state holding the task store.
pub struct AppState {
    tasks: RwLock<TaskStore>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TaskStore::new())
    }
}

impl AppState {
    /// Creates state around an existing store.
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        Self {
            tasks: RwLock::new(store),
        }
    }

    /// Creates state holding the sample board.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(TaskStore::with_tasks(sample_tasks()))
    }

    /// Lists tasks matching `filter`.
    pub fn list(&self, filter: &TaskFilter) -> Vec<Task> {
        self.tasks.read().list(filter)
    }

    /// Looks up one task.
    pub fn find(&self, id: &TaskId) -> Option<Task> {
        self.tasks.read().find_by_id(id)
    }

    /// Creates a task.
    pub fn create(&self, input: NewTask) -> Task {
        self.tasks.write().create(input)
    }

    /// Updates a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] if the task does not exist.
    pub fn update(&self, id: &TaskId, patch: TaskPatch) -> Result<Task, TaskError> {
        self.tasks.write().update(id, patch)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] if the task does not exist.
    pub fn delete(&self, id: &TaskId) -> Result<Task, TaskError> {
        self.tasks.write().delete(id)
    }

    /// Number of tasks held, archived ones included.
    pub fn len(&self) -> usize {
        self.tasks.read().len()
    }

    /// Returns `true` if no tasks are held.
    pub fn is_empty(&self) -> bool {
        self.tasks.read().is_empty()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/tasks - List non-archived tasks, optionally filtered.
async fn list_tasks(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TaskQuery>, QueryRejection>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let Query(query) = query?;
    let filter = query.into_filter()?;
    Ok(Json(state.list(&filter)))
}

/// GET /api/tasks/{id} - Fetch one task, archived or not.
async fn get_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_task_id(&id)?;
    state.find(&id).map(Json).ok_or(ApiError::NotFound)
}

/// POST /api/tasks - Create a task at the end of its lane.
async fn create_task(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewTask>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(input) = body?;
    check_new_task(&input)?;
    let task = state.create(input);
    tracing::info!(task_id = %task.id, status = %task.status, "created task");
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/tasks/{id} - Patch fields, move between lanes, or reorder.
async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(patch) = body?;
    check_patch(&patch)?;
    let id = parse_task_id(&id)?;
    let task = state.update(&id, patch)?;
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_task_id(&id)?;
    state.delete(&id)?;
    tracing::info!(task_id = %id, "deleted task");
    Ok(StatusCode::NO_CONTENT)
}

/// Builds the application router: board page, health check, and the task
/// API under `/api`, with permissive CORS and request tracing.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        );

    Router::new()
        .route("/", get(board::index))
        .route("/health", get(health))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the server on the given address with an empty store and returns
/// the bound address and a join handle.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server(
    addr: &str,
) -> Result<
    (std::net::SocketAddr, tokio::task::JoinHandle<()>),
    Box<dyn std::error::Error + Send + Sync>,
> {
    start_server_with_state(addr, Arc::new(AppState::default())).await
}

/// Starts the server with a pre-built [`AppState`].
///
/// This is the entry point used by both `main.rs` and the integration tests.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server_with_state(
    addr: &str,
    state: Arc<AppState>,
) -> Result<
    (std::net::SocketAddr, tokio::task::JoinHandle<()>),
    Box<dyn std::error::Error + Send + Sync>,
> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "taskboard server error");
        }
    });

    Ok((bound_addr, handle))
}
