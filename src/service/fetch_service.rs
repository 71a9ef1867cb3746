use reqwest::Client;
use reqwest::Url;
use reqwest::header::HeaderMap;
use std::time::Duration;

#[derive(Debug)]
pub struct FetchedTarget {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

/// Partition key for a target URL: the authority component, host plus any
/// non-default port.
pub fn target_domain(target: &str) -> Result<String, String> {
    let url = Url::parse(target).map_err(|e| format!("invalid url: {e}"))?;
    let host = url
        .host_str()
        .ok_or_else(|| format!("url has no host: {target}"))?;
    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

pub async fn fetch_target(target: &str, timeout_seconds: i64) -> Result<FetchedTarget, String> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds.max(1) as u64))
        .build()
        .map_err(|e| format!("failed to build http client: {e}"))?;

    let resp = client
        .get(target)
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    let status = resp.status().as_u16();
    let headers = resp.headers().clone();
    let body = resp
        .text()
        .await
        .map_err(|e| format!("failed to read target body: {e}"))?;

    Ok(FetchedTarget {
        status,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_is_the_bare_host_without_a_port() {
        assert_eq!(
            target_domain("https://example.com/page?x=1").expect("parse"),
            "example.com"
        );
    }

    #[test]
    fn domain_keeps_a_non_default_port() {
        assert_eq!(
            target_domain("http://127.0.0.1:8787/").expect("parse"),
            "127.0.0.1:8787"
        );
    }

    #[test]
    fn unparseable_urls_are_rejected() {
        let err = target_domain("not a url").expect_err("must reject");
        assert!(err.contains("invalid url"));
    }

    #[test]
    fn hostless_urls_are_rejected() {
        let err = target_domain("data:text/plain,hello").expect_err("must reject");
        assert!(err.contains("no host"));
    }
}
