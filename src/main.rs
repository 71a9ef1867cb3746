use site_doctor::app::{AppState, build_router};
use site_doctor::config::db::StorageConfig;
use site_doctor::config::environment::AppConfig;
use site_doctor::infra::init_infra;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logging();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "config error");
            std::process::exit(1);
        }
    };

    let storage = StorageConfig::from_app(&config);
    let infra = match init_infra(&storage).await {
        Ok(infra) => infra,
        Err(e) => {
            error!(error = %e, "infra init error");
            std::process::exit(1);
        }
    };
    let state = AppState::new(config.clone(), infra);

    info!(
        "site-doctor config loaded: env={} host={} port={} data_dir={}",
        state.config.rust_env, state.config.api_host, state.config.api_port, storage.data_dir
    );

    let bind_addr = format!("{}:{}", state.config.api_host, state.config.api_port);
    let listener = match TcpListener::bind(&bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(error = %e, bind_addr = %bind_addr, "server bind error");
            std::process::exit(1);
        }
    };

    let app = build_router(state);
    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server runtime error");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
