use reqwest::header::HeaderMap;

use crate::module::audit::model::Findings;

const REQUIRED_HEADERS: [(&str, &str); 5] = [
    ("strict-transport-security", "Enable HSTS to enforce HTTPS"),
    ("content-security-policy", "Add a CSP to mitigate XSS"),
    (
        "x-content-type-options",
        "Add 'nosniff' to prevent MIME sniffing",
    ),
    ("referrer-policy", "Add a restrictive Referrer-Policy"),
    ("permissions-policy", "Restrict powerful features"),
];

/// Presence checks over the target's response headers. Header names are
/// matched case-insensitively (HeaderMap already normalizes to lowercase).
pub fn analyze_headers(headers: &HeaderMap) -> Findings {
    let mut findings = Findings::default();

    for (name, issue) in REQUIRED_HEADERS {
        if headers.contains_key(name) {
            findings.passes.push(format!("{name} present"));
        } else {
            findings.issues.push(issue.to_string());
        }
    }

    let cache_control = headers
        .get("cache-control")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if cache_control.contains("max-age") || cache_control.contains("s-maxage") {
        findings.passes.push("Cache-Control tuned".to_string());
    } else {
        findings
            .issues
            .push("Add Cache-Control max-age or s-maxage for static assets".to_string());
    }

    findings
}
