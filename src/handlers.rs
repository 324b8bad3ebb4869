use crate::errors::AppError;
use crate::models::{
    DashboardResponse, HabitAction, HabitCommand, HabitInput, HabitResponse, StatsResponse, Task,
    TaskFilter, TaskInput,
};
use crate::state::AppState;
use crate::stats::{build_dashboard_at, build_stats_at};
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::warn;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = state.today();
    let mut tracker = state.tracker.lock().await;
    tracker.refresh_streaks(today);
    Html(render_index(&build_dashboard_at(&tracker, today)))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let today = state.today();
    let mut tracker = state.tracker.lock().await;
    tracker.refresh_streaks(today);
    Json(build_dashboard_at(&tracker, today))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let today = state.today();
    let mut tracker = state.tracker.lock().await;
    tracker.refresh_streaks(today);
    Json(build_stats_at(&tracker, today))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Query(filter): Query<TaskFilter>,
) -> Json<Vec<Task>> {
    let tracker = state.tracker.lock().await;
    Json(tracker.filtered_tasks(filter).into_iter().cloned().collect())
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskInput>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let today = state.today();
    let mut tracker = state.tracker.lock().await;
    let task = tracker.add_task(payload, today)?.clone();
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<TaskInput>,
) -> Result<Json<Task>, AppError> {
    let mut tracker = state.tracker.lock().await;
    Ok(Json(tracker.update_task(id, payload)?.clone()))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, AppError> {
    let today = state.today();
    let mut tracker = state.tracker.lock().await;
    Ok(Json(tracker.toggle_task(id, today)?.clone()))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut tracker = state.tracker.lock().await;
    tracker.delete_task(id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_habits(State(state): State<AppState>) -> Json<Vec<HabitResponse>> {
    let today = state.today();
    let mut tracker = state.tracker.lock().await;
    tracker.refresh_streaks(today);
    Json(
        tracker
            .habits()
            .iter()
            .map(|habit| HabitResponse::from_habit(habit, today))
            .collect(),
    )
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<HabitInput>,
) -> Result<(StatusCode, Json<HabitResponse>), AppError> {
    let today = state.today();
    let mut tracker = state.tracker.lock().await;
    let habit = tracker.add_habit(payload, today)?;
    Ok((StatusCode::CREATED, Json(HabitResponse::from_habit(habit, today))))
}

pub async fn update_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<HabitInput>,
) -> Result<Json<HabitResponse>, AppError> {
    let today = state.today();
    let mut tracker = state.tracker.lock().await;
    tracker.refresh_streaks(today);
    let habit = tracker.update_habit(id, payload)?;
    Ok(Json(HabitResponse::from_habit(habit, today)))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut tracker = state.tracker.lock().await;
    tracker.delete_habit(id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<HabitResponse>, AppError> {
    let command = HabitCommand {
        action: HabitAction::Toggle,
        habit_id: id,
        date: None,
    };
    apply_command(&state, command).await.map(Json)
}

pub async fn habit_command(
    State(state): State<AppState>,
    Json(command): Json<HabitCommand>,
) -> Result<Json<HabitResponse>, AppError> {
    apply_command(&state, command).await.map(Json)
}

async fn apply_command(state: &AppState, command: HabitCommand) -> Result<HabitResponse, AppError> {
    let today = state.today();
    let habit_id = command.habit_id;
    let mut tracker = state.tracker.lock().await;
    match tracker.apply(command, today) {
        Ok(habit) => Ok(HabitResponse::from_habit(habit, today)),
        Err(err) => {
            warn!(habit_id, "habit command rejected: {err}");
            Err(err.into())
        }
    }
}
