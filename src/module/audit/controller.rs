use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{error, info};

use super::crud;
use super::error::AppError;
use super::schema::{AuditRequest, ErrorBody, HistoryQuery};
use crate::app::AppState;
use crate::service::metrics_service;

pub async fn run_audit(
    State(state): State<AppState>,
    body: Result<Json<AuditRequest>, JsonRejection>,
) -> Response {
    let started = metrics_service::start_timer();

    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            metrics_service::record_audit_failure();
            error!(error = %rejection, "audit request body rejected");
            return error_response(AppError::bad_request("INVALID_JSON", "invalid JSON"));
        }
    };

    match crud::run_audit(&state, req).await {
        Ok(resp) => {
            metrics_service::record_audit_success();
            let (ok_count, err_count) = metrics_service::snapshot();
            info!(
                target = %resp.target,
                elapsed_ms = metrics_service::elapsed_ms(started),
                ok_count,
                err_count,
                "audit completed"
            );
            (StatusCode::OK, Json(resp)).into_response()
        }
        Err(err) => {
            metrics_service::record_audit_failure();
            let (ok_count, err_count) = metrics_service::snapshot();
            error!(
                error_code = err.code,
                reason = %err.message,
                elapsed_ms = metrics_service::elapsed_ms(started),
                ok_count,
                err_count,
                "audit failed"
            );
            error_response(err)
        }
    }
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Response {
    match crud::get_history(&state, query).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err(err) => {
            error!(error_code = err.code, reason = %err.message, "history lookup failed");
            error_response(err)
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../assets/index.html"))
}

pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

fn error_response(err: AppError) -> Response {
    (err.status, Json(ErrorBody { error: err.message })).into_response()
}
