use crate::module::audit::model::Findings;

/// Builds the remediation prompt handed to the fix-plan model.
pub fn make_fix_prompt(target: &str, headers: &Findings, html: &Findings) -> String {
    let header_json = serde_json::to_string(headers).unwrap_or_else(|_| "{}".to_string());
    let html_json = serde_json::to_string(html).unwrap_or_else(|_| "{}".to_string());
    format!(
        "You are an expert web performance and security engineer. \
         Analyze issues for {target} and produce a prioritized fix plan. \
         Group by Security, Performance, SEO. Provide concrete config/code: \
         CSP sample, HSTS value, caching rules, image strategy, and a short PR diff.\n\n\
         Headers findings: {header_json}\n\nHTML findings: {html_json}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_target_and_findings() {
        let headers = Findings {
            passes: vec![],
            issues: vec!["Enable HSTS to enforce HTTPS".to_string()],
        };
        let html = Findings {
            passes: vec!["Meta description present".to_string()],
            issues: vec![],
        };
        let prompt = make_fix_prompt("https://example.com", &headers, &html);
        assert!(prompt.contains("https://example.com"));
        assert!(prompt.contains("Enable HSTS to enforce HTTPS"));
        assert!(prompt.contains("Meta description present"));
        assert!(prompt.contains("Group by Security, Performance, SEO"));
    }
}
