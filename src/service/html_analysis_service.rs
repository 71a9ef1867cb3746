use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::module::audit::model::Findings;

static META_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r#"<meta[^>]+name="description"[^>]*>"#)
        .case_insensitive(true)
        .build()
        .expect("meta description pattern")
});

static INLINE_STYLE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"<style>.*?</style>")
        .dot_matches_new_line(true)
        .build()
        .expect("inline style pattern")
});

static INLINE_SCRIPT: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"<script>.*?</script>")
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .expect("inline script pattern")
});

static PRELOAD_LINK: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r#"<link[^>]+rel="preload"[^>]+as="(style|font)""#)
        .case_insensitive(true)
        .build()
        .expect("preload link pattern")
});

/// Heuristic SEO and performance checks over the raw HTML body.
pub fn analyze_html(html: &str) -> Findings {
    let mut findings = Findings::default();

    if META_DESCRIPTION.is_match(html) {
        findings.passes.push("Meta description present".to_string());
    } else {
        findings
            .issues
            .push("Add meta description for SEO".to_string());
    }

    if INLINE_STYLE.is_match(html) {
        findings
            .issues
            .push("Move large inline CSS to static file with hashing".to_string());
    }
    if INLINE_SCRIPT.is_match(html) {
        findings
            .issues
            .push("Avoid large inline scripts; prefer CSP with nonces".to_string());
    }
    if !PRELOAD_LINK.is_match(html) {
        findings.issues.push("Preload critical CSS/fonts".to_string());
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_description_passes() {
        let html = r#"<html><head><meta name="description" content="A page"></head></html>"#;
        let findings = analyze_html(html);
        assert!(
            findings
                .passes
                .contains(&"Meta description present".to_string())
        );
        assert!(
            !findings
                .issues
                .contains(&"Add meta description for SEO".to_string())
        );
    }

    #[test]
    fn missing_meta_description_is_an_issue() {
        let findings = analyze_html("<html><head></head><body></body></html>");
        assert!(
            findings
                .issues
                .contains(&"Add meta description for SEO".to_string())
        );
    }

    #[test]
    fn inline_blocks_are_flagged_across_newlines() {
        let html = "<style>\nbody { color: red }\n</style><script>\nconsole.log(1)\n</script>";
        let findings = analyze_html(html);
        assert!(
            findings
                .issues
                .contains(&"Move large inline CSS to static file with hashing".to_string())
        );
        assert!(
            findings
                .issues
                .contains(&"Avoid large inline scripts; prefer CSP with nonces".to_string())
        );
    }

    #[test]
    fn preload_link_silences_the_preload_issue() {
        let html = r#"<link rel="preload" href="/main.css" as="style">"#;
        let findings = analyze_html(html);
        assert!(
            !findings
                .issues
                .contains(&"Preload critical CSS/fonts".to_string())
        );

        let findings = analyze_html("<html></html>");
        assert!(
            findings
                .issues
                .contains(&"Preload critical CSS/fonts".to_string())
        );
    }
}
