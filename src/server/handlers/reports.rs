//! Inventory report endpoints.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use super::{error_response, json_body};
use crate::error::DocsError;
use crate::part::Part;
use crate::report::{Filters, ReportSnapshot, ReportTable, ReportType, dispatch, export, html};
use crate::server::state::AppState;

/// Request body: the parts to report on and how they were selected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub items: Vec<Part>,
    #[serde(default)]
    pub filters: Filters,
    #[serde(default)]
    pub generated_by: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    #[serde(rename = "type")]
    pub report_type: Option<String>,
    pub token: Option<String>,
    pub base_url: Option<String>,
}

impl ReportQuery {
    fn report_type(&self) -> Result<ReportType, (StatusCode, String)> {
        match &self.report_type {
            Some(t) => t.parse().map_err(error_response),
            None => Ok(ReportType::default()),
        }
    }
}

fn snapshot(request: ReportRequest, report_type: ReportType) -> ReportSnapshot {
    let ReportRequest {
        items,
        filters,
        generated_by,
    } = request;
    let generated_by = match generated_by.trim() {
        "" => "System",
        name => name,
    };
    ReportSnapshot::build(items, filters, generated_by, report_type, Utc::now())
}

/// Handle POST /api/reports/preview - printable landscape report.
pub async fn preview(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
    body: Bytes,
) -> Result<Html<String>, (StatusCode, String)> {
    let report_type = query.report_type()?;
    let snapshot = snapshot(json_body(&body)?, report_type);
    Ok(Html(html::render_page(&snapshot, state.assembler.branding())))
}

/// Handle POST /api/reports/csv - CSV download.
pub async fn csv(
    Query(query): Query<ReportQuery>,
    body: Bytes,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let report_type = query.report_type()?;
    let snapshot = snapshot(json_body(&body)?, report_type);
    let table = ReportTable::from_snapshot(&snapshot);
    let body = export::to_csv_string(&table).map_err(error_response)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export::file_name(&snapshot.report_id)
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// Handle POST /api/reports/email - dispatch email with acknowledge link.
pub async fn email(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReportQuery>,
    body: Bytes,
) -> Result<Html<String>, (StatusCode, String)> {
    let report_type = query.report_type()?;
    let request: ReportRequest = json_body(&body)?;
    let base_url = state
        .base_url(query.base_url.as_deref())
        .ok_or_else(|| error_response(DocsError::MissingBaseUrl))?;
    let token = query
        .token
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string());

    let snapshot = snapshot(request, report_type);
    let email = dispatch::render_dispatch(&snapshot, state.assembler.branding(), &base_url, &token)
        .map_err(error_response)?;
    Ok(Html(email.html))
}
