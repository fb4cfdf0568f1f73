// ============================================================================
// HTTP Handlers - view, add, download, clear + JSON API
// ============================================================================

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    Form,
};
use chrono::Local;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::export;
use crate::input::{truncate_chars, ApplianceForm, MAX_ECHOED_CHARS};
use crate::summary::Summary;
use crate::web::flash::{self, Notice};
use crate::web::page;
use crate::web::AppState;

/// API Response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

/// GET / - Summary page, consuming any pending notice
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let summary = Summary::build(state.store.list());
    let notice = Notice::from_headers(&headers);
    let html = Html(page::render_index(&summary, notice.as_ref()));

    // Expire the slot even when its content could not be decoded
    if flash::has_cookie(&headers) {
        ([(header::SET_COOKIE, flash::expired_cookie())], html).into_response()
    } else {
        html.into_response()
    }
}

/// POST /add - Validate the form and append one entry
pub async fn add_appliance(
    State(state): State<AppState>,
    form: Result<Form<ApplianceForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "add request without a usable form body");
            return flash::redirect_with(Notice::error(
                "Could not add appliance: the request did not contain form data",
            ));
        }
    };

    let notice = match form.validate() {
        Ok(appliance) => {
            let name = appliance.name.clone();
            let entry = appliance.into_entry();
            info!(
                appliance = %name,
                kwh_per_month = entry.monthly_energy_kwh(),
                cost_per_month = entry.monthly_cost(),
                "appliance added"
            );
            let count = state.store.append(entry);
            info!(entries = count, "record store updated");
            Notice::success(format!("{} added.", truncate_chars(&name, MAX_ECHOED_CHARS)))
        }
        Err(e) => {
            warn!(error = %e, "rejected appliance input");
            Notice::error(format!("Could not add appliance: {}", e))
        }
    };

    flash::redirect_with(notice)
}

/// GET /download - CSV attachment of every entry
pub async fn download_csv(State(state): State<AppState>) -> Response {
    let entries = state.store.list();

    if entries.is_empty() {
        return flash::redirect_with(Notice::info("No data to download."));
    }

    match export::to_csv(&entries) {
        Ok(bytes) => {
            let filename = export::filename(Local::now().naive_local());
            info!(entries = entries.len(), file = %filename, "exporting CSV");

            (
                [
                    (header::CONTENT_TYPE, export::CONTENT_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            error!("Error exporting CSV: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "CSV export failed").into_response()
        }
    }
}

/// GET /clear - Drop every entry
pub async fn clear_data(State(state): State<AppState>) -> Response {
    let removed = state.store.clear();
    info!(removed, "record store cleared");

    flash::redirect_with(Notice::success("Data cleared."))
}

/// GET /api/health - Health check
pub async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/summary - Rows, tiers and totals as JSON
pub async fn api_summary(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(Summary::build(state.store.list())))
}
