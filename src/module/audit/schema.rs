use serde::{Deserialize, Serialize};

use super::model::{AuditRecord, Findings};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditRequest {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditSummary {
    pub headers: Findings,
    pub html: Findings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResponse {
    pub ok: bool,
    pub target: String,
    pub summary: AuditSummary,
    pub fix_plan: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub latest: Option<AuditRecord>,
    pub history: Vec<AuditRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
