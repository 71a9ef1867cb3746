use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rust_env: String,
    pub api_host: String,
    pub api_port: u16,
    pub data_dir: String,
    pub fetch_timeout_seconds: i64,
    pub ai_api_url: Option<String>,
    pub ai_api_token: Option<String>,
    pub ai_model: Option<String>,
    pub ai_timeout_seconds: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        load_dotenv_layers();

        let rust_env = read_var("RUST_ENV")?;
        let api_host = read_var("API_HOST")?;
        let api_port = read_var("API_PORT")?
            .parse::<u16>()
            .map_err(|e| format!("invalid API_PORT: {e}"))?;
        let data_dir = read_optional_string("DATA_DIR", "data");
        let fetch_timeout_seconds = read_optional_i64("FETCH_TIMEOUT_SECONDS", 10)?;
        let ai_api_url = read_optional_var("AI_API_URL");
        let ai_api_token = read_optional_var("AI_API_TOKEN");
        let ai_model = read_optional_var("AI_MODEL");
        let ai_timeout_seconds = read_optional_i64("AI_TIMEOUT_SECONDS", 30)?;

        Ok(Self {
            rust_env,
            api_host,
            api_port,
            data_dir,
            fetch_timeout_seconds,
            ai_api_url,
            ai_api_token,
            ai_model,
            ai_timeout_seconds,
        })
    }
}

fn read_var(key: &str) -> Result<String, String> {
    env::var(key).map_err(|_| format!("missing required env var: {key}"))
}

fn read_optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn read_optional_string(key: &str, default: &str) -> String {
    read_optional_var(key).unwrap_or_else(|| default.to_string())
}

fn read_optional_i64(key: &str, default: i64) -> Result<i64, String> {
    match env::var(key) {
        Ok(v) => v.parse::<i64>().map_err(|e| format!("invalid {key}: {e}")),
        Err(_) => Ok(default),
    }
}

fn load_dotenv_layers() {
    for path in [".env", "../.env", "../../.env"] {
        let _ = dotenvy::from_path(path);
    }
}
