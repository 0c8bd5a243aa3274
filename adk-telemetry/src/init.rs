//! Telemetry initialization

use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize console logging on **stderr**.
///
/// Stdout carries the MCP JSON-RPC stream, so nothing may be logged there.
/// The filter comes from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
/// Calling this more than once is a no-op.
///
/// # Example
/// ```
/// use adk_telemetry::init_telemetry;
/// init_telemetry("adk-agent-extension").expect("Failed to initialize telemetry");
/// ```
pub fn init_telemetry(service_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut result = Ok(());

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
            .map_err(|e| e.to_string());
        let filter = match filter {
            Ok(filter) => filter,
            Err(e) => {
                result = Err(e);
                return;
            }
        };

        let init = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true),
            )
            .try_init();
        if let Err(e) = init {
            result = Err(e.to_string());
            return;
        }

        tracing::info!(service.name = service_name, "Telemetry initialized");
    });

    result.map_err(Into::into)
}
