pub mod fetch_service;
pub mod header_analysis_service;
pub mod html_analysis_service;
pub mod metrics_service;
pub mod model_service;
pub mod prompt_service;
