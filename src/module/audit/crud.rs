use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use super::error::AppError;
use super::model::AuditRecord;
use super::schema::{AuditRequest, AuditResponse, AuditSummary, HistoryQuery, HistoryResponse};
use super::store::SiteStore;
use crate::app::AppState;
use crate::service::fetch_service;
use crate::service::header_analysis_service::analyze_headers;
use crate::service::html_analysis_service::analyze_html;
use crate::service::model_service;
use crate::service::prompt_service::make_fix_prompt;

/// Full audit pass: fetch the target, run the analyses, ask for a fix plan,
/// persist the record under the target's domain partition, and report back.
/// A model failure degrades to a placeholder plan; a fetch failure aborts the
/// request with nothing saved.
pub async fn run_audit(state: &AppState, req: AuditRequest) -> Result<AuditResponse, AppError> {
    let target = req
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::bad_request("MISSING_URL", "Missing 'url'"))?
        .to_string();

    let domain = fetch_service::target_domain(&target)
        .map_err(|e| AppError::bad_gateway("FETCH_FAILED", format!("Failed to fetch target: {e}")))?;

    let page = fetch_service::fetch_target(&target, state.config.fetch_timeout_seconds)
        .await
        .map_err(|e| AppError::bad_gateway("FETCH_FAILED", format!("Failed to fetch target: {e}")))?;
    debug!(domain = %domain, status = page.status, bytes = page.body.len(), "target fetched");

    let header_findings = analyze_headers(&page.headers);
    let html_findings = analyze_html(&page.body);

    let prompt = make_fix_prompt(&target, &header_findings, &html_findings);
    let fix_plan = model_service::generate_fix_plan(&state.config, &prompt).await;

    let record = AuditRecord {
        domain,
        url: target.clone(),
        ts: now_unix()?,
        headers: header_findings.clone(),
        html: html_findings.clone(),
        fix_plan: fix_plan.clone(),
    };
    save_record(state, record).await?;

    Ok(AuditResponse {
        ok: true,
        target,
        summary: AuditSummary {
            headers: header_findings,
            html: html_findings,
        },
        fix_plan,
    })
}

pub async fn get_history(
    state: &AppState,
    query: HistoryQuery,
) -> Result<HistoryResponse, AppError> {
    let domain = query
        .domain
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::bad_request("MISSING_DOMAIN", "Missing 'domain'"))?
        .to_string();

    let root = state.infra.partitions.root().to_path_buf();
    let site = tokio::task::spawn_blocking(move || {
        let store = SiteStore::open(&root, &domain)?;
        store.list()
    })
    .await
    .map_err(|e| AppError::internal("STORAGE_ERROR", format!("storage task failed: {e}")))?
    .map_err(|e| AppError::internal("STORAGE_ERROR", format!("failed to read history: {e}")))?;

    Ok(HistoryResponse {
        latest: site.latest,
        history: site.history,
    })
}

async fn save_record(state: &AppState, record: AuditRecord) -> Result<(), AppError> {
    let root = state.infra.partitions.root().to_path_buf();
    tokio::task::spawn_blocking(move || {
        let mut store = SiteStore::open(&root, &record.domain)?;
        store.save(&record)
    })
    .await
    .map_err(|e| AppError::internal("STORAGE_ERROR", format!("storage task failed: {e}")))?
    .map_err(|e| AppError::internal("STORAGE_ERROR", format!("failed to persist audit record: {e}")))
}

fn now_unix() -> Result<i64, AppError> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::internal("CLOCK_ERROR", format!("clock error: {e}")))?;
    Ok(elapsed.as_secs() as i64)
}
