//! Part record and timeline rendering.

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{error_response, json_body};
use crate::document::{email, print};
use crate::part::Part;
use crate::render::{RenderMode, RenderOptions};
use crate::server::state::AppState;

/// Query string shared by the render endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    pub mode: Option<String>,
    #[serde(default)]
    pub qr: bool,
    pub base_url: Option<String>,
}

impl RenderQuery {
    fn options(&self, state: &AppState) -> Result<RenderOptions, (StatusCode, String)> {
        let mode = match &self.mode {
            Some(mode) => mode.parse::<RenderMode>().map_err(error_response)?,
            None => RenderMode::Web,
        };
        let mut options = RenderOptions::new(mode);
        if self.qr {
            options.include_qr = true;
            options.base_url = state.base_url(self.base_url.as_deref());
        }
        Ok(options)
    }
}

/// Handle POST /api/render/part - render a part record.
///
/// `web` returns the fragment, `print` a full A4 page and `email` a JSON
/// [`EmailBody`](crate::document::email::EmailBody).
pub async fn part(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RenderQuery>,
    body: Bytes,
) -> Result<Response, (StatusCode, String)> {
    let options = query.options(&state)?;
    let part: Part = json_body(&body)?;
    let assembler = &state.assembler;
    let response = match options.mode {
        RenderMode::Web => Html(assembler.assemble(&part, &options).map_err(error_response)?)
            .into_response(),
        RenderMode::Print => Html(print::render_part(assembler, &part, &options).map_err(error_response)?)
            .into_response(),
        RenderMode::Email => Json(email::render_part(assembler, &part, &options).map_err(error_response)?)
            .into_response(),
    };
    Ok(response)
}

/// Handle POST /api/render/timeline - render a part's traceability timeline.
pub async fn timeline(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RenderQuery>,
    body: Bytes,
) -> Result<Html<String>, (StatusCode, String)> {
    let options = query.options(&state)?;
    let part: Part = json_body(&body)?;
    let html = state
        .assembler
        .timeline(&part.history, &part.identity(), &options)
        .map_err(error_response)?;
    Ok(Html(html))
}
