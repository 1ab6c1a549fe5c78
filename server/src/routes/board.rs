//! Board HTML endpoints
//!
//! Server-rendered views: the full board page plus the fragments htmx swaps
//! in after a create, a move, or an analysis request.

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::Html,
    routing::{get, patch, post},
    Json, Router,
};
use minijinja::context;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tasker_core::task::{Task, TaskPriority, TaskRepository, TaskStatus};

use crate::state::AppState;

// ============================================================================
// Form and view types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTaskForm {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
}

#[derive(Debug, Deserialize)]
pub struct MoveTaskForm {
    pub status: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// One status column of the rendered board
#[derive(Debug, Serialize)]
struct BoardColumn {
    key: &'static str,
    label: &'static str,
    tasks: Vec<Task>,
    /// The other two statuses, offered as move buttons on each card
    moves: Vec<MoveTarget>,
}

#[derive(Debug, Serialize)]
struct MoveTarget {
    key: &'static str,
    label: &'static str,
}

#[derive(Debug, Serialize)]
struct TaskInsights {
    summary: &'static str,
    suggested_todos: [&'static str; 3],
    category: &'static str,
}

/// Fixed output until real analysis lands
fn placeholder_insights() -> TaskInsights {
    TaskInsights {
        summary: "LLM analysis placeholder: will generate TODO steps and categorization.",
        suggested_todos: [
            "Clarify requirements",
            "Identify dependencies",
            "Break down into actionable steps",
        ],
        category: "general",
    }
}

fn internal_error<E: std::fmt::Display>(e: E) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// Collect the board columns in fixed display order
async fn board_columns(state: &AppState) -> tasker_core::Result<Vec<BoardColumn>> {
    let mut columns = Vec::with_capacity(TaskStatus::ALL.len());
    for status in TaskStatus::ALL {
        let tasks = state.task_store().find_by_status(status).await?;
        let moves = TaskStatus::ALL
            .into_iter()
            .filter(|s| *s != status)
            .map(|s| MoveTarget {
                key: s.key(),
                label: s.label(),
            })
            .collect();
        columns.push(BoardColumn {
            key: status.key(),
            label: status.label(),
            tasks,
            moves,
        });
    }
    Ok(columns)
}

fn render(
    state: &AppState,
    name: &str,
    ctx: minijinja::Value,
) -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    let template = state.templates().get_template(name).map_err(internal_error)?;
    let html = template.render(ctx).map_err(internal_error)?;
    Ok(Html(html))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET / - Full board page
async fn index(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    let columns = board_columns(&state).await.map_err(internal_error)?;
    render(&state, "index.html", context! { columns })
}

/// POST /tasks - Create a task from the board form
async fn create_task(
    State(state): State<AppState>,
    Form(form): Form<CreateTaskForm>,
) -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    if form.title.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Title cannot be empty".to_string(),
            }),
        ));
    }

    let mut task = Task::new(form.title).with_priority(form.priority);
    if let Some(desc) = form.description {
        task = task.with_description(desc);
    }

    state.task_store().create(task).await.map_err(internal_error)?;

    let columns = board_columns(&state).await.map_err(internal_error)?;
    render(&state, "partials/board.html", context! { columns })
}

/// PATCH /tasks/:id/status - Move a task between columns
async fn move_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<MoveTaskForm>,
) -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    // An unparseable status and an unknown id collapse into the same 404
    let moved = match form.status.parse::<TaskStatus>() {
        Ok(status) => state
            .task_store()
            .update_status(id, status)
            .await
            .map_err(internal_error)?,
        Err(_) => None,
    };

    if moved.is_none() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Task not found or invalid status".to_string(),
            }),
        ));
    }

    let columns = board_columns(&state).await.map_err(internal_error)?;
    render(&state, "partials/board.html", context! { columns })
}

/// GET /tasks/:id/analysis - Placeholder insights for a task
async fn task_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    let task = state.task_store().get(id).await.map_err(internal_error)?;

    let task = match task {
        Some(task) => task,
        None => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Task {} not found", id),
                }),
            ))
        }
    };

    render(
        &state,
        "partials/analysis.html",
        context! { task, insights => placeholder_insights() },
    )
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/tasks", post(create_task))
        .route("/tasks/{id}/status", patch(move_task))
        .route("/tasks/{id}/analysis", get(task_analysis))
}
