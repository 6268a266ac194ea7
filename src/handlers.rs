use crate::engine::{month_view, parse_date_key, MonthBounds};
use crate::errors::AppError;
use crate::models::{
    parse_leading_int, CreateHabitRequest, DeletedResponse, Habit, HabitData, HabitId,
    MarkRequest, MonthQuery, MonthResponse, OkResponse, SummaryResponse,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::summary::summarize;
use crate::ui::render_index;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::Html,
    Json,
};
use chrono::Datelike;
use tracing::info;

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn health() -> Json<OkResponse> {
    Json(OkResponse { ok: true })
}

pub async fn list_habits(
    State(state): State<AppState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<MonthResponse>, AppError> {
    let Query(query) = query?;
    let today = state.today();
    let bounds = resolve_month(&state, &query)?;
    let data = state.data.lock().await;

    let habits = data
        .list()
        .iter()
        .map(|habit| month_view(habit, &bounds, today))
        .collect();

    Ok(Json(MonthResponse {
        year: bounds.year,
        month: bounds.month,
        days_in_month: bounds.days_in_month,
        habits,
    }))
}

pub async fn month_summary(
    State(state): State<AppState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<SummaryResponse>, AppError> {
    let Query(query) = query?;
    let today = state.today();
    let bounds = resolve_month(&state, &query)?;
    let data = state.data.lock().await;

    let views: Vec<_> = data
        .list()
        .iter()
        .map(|habit| month_view(habit, &bounds, today))
        .collect();

    Ok(Json(summarize(&bounds, &views)))
}

pub async fn create_habit(
    State(state): State<AppState>,
    payload: Result<Json<CreateHabitRequest>, JsonRejection>,
) -> Result<Json<Habit>, AppError> {
    let Json(payload) = payload?;
    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::bad_request("name is required"))?
        .to_string();

    let today = state.today();
    let year = payload.year().unwrap_or(today.year());
    let month = payload.month().unwrap_or(today.month0() as i32);
    let bounds = MonthBounds::new(year, month)
        .ok_or_else(|| AppError::bad_request("year/month out of range"))?;

    let day = payload
        .start_day
        .as_ref()
        .and_then(|input| input.parse())
        .unwrap_or(1)
        .clamp(1, i64::from(bounds.days_in_month)) as u32;
    let start_date = bounds
        .day(day)
        .ok_or_else(|| AppError::bad_request("startDay out of range"))?;
    let goal = payload.goal.unwrap_or_default();

    let habit = mutate(&state, |data| Ok(data.create(name, start_date, goal))).await?;
    info!("created habit {} starting {}", habit.id, habit.start_date);

    Ok(Json(habit))
}

pub async fn mark_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MarkRequest>, JsonRejection>,
) -> Result<Json<OkResponse>, AppError> {
    let Json(payload) = payload?;
    let done = payload.done();
    let raw = payload
        .date
        .filter(|date| !date.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("date is required"))?;
    let date = parse_date_key(&raw)
        .ok_or_else(|| AppError::bad_request("date must be YYYY-MM-DD"))?;
    let id = parse_id(&id)?;

    let mark = mutate(&state, |data| Ok(data.mark_date(id, date, done)?)).await?;
    info!("marked habit {id} {date} as {mark:?}");

    Ok(Json(OkResponse { ok: true }))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedResponse>, AppError> {
    let id = parse_id(&id)?;
    mutate(&state, |data| Ok(data.delete(id)?)).await?;
    info!("deleted habit {id}");

    Ok(Json(DeletedResponse { deleted: true }))
}

/// Applies `apply` to a copy of the store and only keeps it once it is on disk.
async fn mutate<T>(
    state: &AppState,
    apply: impl FnOnce(&mut HabitData) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    let value = apply(&mut next)?;

    persist_data(&state.data_path, &next).await?;
    *data = next;

    Ok(value)
}

fn resolve_month(state: &AppState, query: &MonthQuery) -> Result<MonthBounds, AppError> {
    let today = state.today();
    let (year, month) = match (
        parse_int(query.year.as_deref()),
        parse_int(query.month.as_deref()),
    ) {
        (None, None) => return Ok(MonthBounds::containing(today)),
        (year, month) => (
            year.unwrap_or(today.year()),
            month.unwrap_or(today.month0() as i32),
        ),
    };

    MonthBounds::new(year, month).ok_or_else(|| AppError::bad_request("year/month out of range"))
}

fn parse_int(value: Option<&str>) -> Option<i32> {
    value
        .and_then(parse_leading_int)
        .and_then(|value| i32::try_from(value).ok())
}

/// A malformed id can never name a stored habit.
fn parse_id(raw: &str) -> Result<HabitId, AppError> {
    HabitId::parse_str(raw).map_err(|_| AppError::not_found("not found"))
}
