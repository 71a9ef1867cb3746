use serde::{Deserialize, Serialize};

/// Result of one analysis pass (headers or HTML) over the audited page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Findings {
    pub passes: Vec<String>,
    pub issues: Vec<String>,
}

/// One completed audit run. Serialized as JSON both on the wire and in the
/// per-domain store; `ts` (unix seconds) is the run's identity within a
/// domain. All fields default so that a sparse stored row still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditRecord {
    pub domain: String,
    pub url: String,
    pub ts: i64,
    pub headers: Findings,
    pub html: Findings,
    pub fix_plan: String,
}
