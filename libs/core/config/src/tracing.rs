use crate::Environment;
use tracing_error::ErrorLayer;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre for readable error reports at the binary edge.
///
/// Call early in main(), before any fallible operation. Safe to call more
/// than once (later calls are ignored, which keeps tests happy).
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing for the given environment.
///
/// Production gets JSON output for log aggregation; development gets a
/// human-readable format with module targets. `RUST_LOG` overrides the
/// default filter in both cases. An [`ErrorLayer`] is always attached so
/// error reports carry span traces. Safe to call more than once.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("debug")
        }
    });

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    if environment.is_production() {
        let _ = registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .try_init();
    } else {
        let _ = registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init();
    }
}
