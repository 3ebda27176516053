use crate::chart::chart_data;
use crate::errors::AppError;
use crate::models::{
    DashboardResponse, DraftResponse, FieldRequest, FilterRequest, IndexRequest, RecordRow,
};
use crate::plans::{plan_counts, visible_records};
use crate::progress::progress;
use crate::state::{AppState, Dashboard};
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let dashboard = state.dashboard.lock().await;
    Json(build_dashboard(&dashboard))
}

pub async fn set_field(
    State(state): State<AppState>,
    Json(payload): Json<FieldRequest>,
) -> Result<Json<DraftResponse>, AppError> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.form.set_field(&payload.field, payload.value)?;
    Ok(Json(DraftResponse {
        draft: dashboard.form.draft().clone(),
        edit_index: dashboard.form.edit_index(),
    }))
}

pub async fn submit(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let mut dashboard = state.dashboard.lock().await;
    let dashboard = &mut *dashboard;
    dashboard.form.submit(&mut dashboard.store)?;
    dashboard.store.persist().await?;
    Ok(Json(build_dashboard(dashboard)))
}

pub async fn begin_edit(
    State(state): State<AppState>,
    Json(payload): Json<IndexRequest>,
) -> Result<Json<DashboardResponse>, AppError> {
    let mut dashboard = state.dashboard.lock().await;
    let dashboard = &mut *dashboard;
    dashboard.form.begin_edit(payload.index, &dashboard.store)?;
    Ok(Json(build_dashboard(dashboard)))
}

pub async fn delete_record(
    State(state): State<AppState>,
    Json(payload): Json<IndexRequest>,
) -> Result<Json<DashboardResponse>, AppError> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.store.delete(payload.index)?;
    // The edit target may now point at a shifted record.
    dashboard.form.clear_edit_target();
    dashboard.store.persist().await?;
    Ok(Json(build_dashboard(&dashboard)))
}

pub async fn set_filter(
    State(state): State<AppState>,
    Json(payload): Json<FilterRequest>,
) -> Json<DashboardResponse> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.filter = payload.plan.filter(|plan| !plan.is_empty());
    Json(build_dashboard(&dashboard))
}

/// Progress and the chart series come straight from the current records each
/// time; nothing here is cached.
fn build_dashboard(dashboard: &Dashboard) -> DashboardResponse {
    let records = dashboard.store.records();
    let visible = visible_records(records, dashboard.filter.as_deref());

    let rows = visible
        .iter()
        .map(|(index, record)| RecordRow {
            index: *index,
            record: (*record).clone(),
            progress: progress(&record.start, &record.end),
        })
        .collect();

    DashboardResponse {
        records: rows,
        plans: plan_counts(records),
        filter: dashboard.filter.clone(),
        chart: chart_data(visible.iter().map(|(_, record)| *record)),
        draft: dashboard.form.draft().clone(),
        edit_index: dashboard.form.edit_index(),
    }
}
