use std::sync::Arc;

use tabungan_core::{
    targets::{TargetService, TargetServiceTrait},
    utils::Clock,
};
use tabungan_storage_memory::targets::TargetRepository;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub target_service: Arc<dyn TargetServiceTrait + Send + Sync>,
    /// Supplies `today` to date validation and the form's date bounds.
    pub clock: Arc<dyn Clock>,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(clock: Arc<dyn Clock>) -> Arc<AppState> {
    let target_repository = Arc::new(TargetRepository::new());
    let target_service = Arc::new(TargetService::new(target_repository));
    tracing::info!("Target storage: in-memory (cleared on restart)");

    Arc::new(AppState {
        target_service,
        clock,
    })
}
