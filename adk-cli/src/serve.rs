use crate::cli::ServeArgs;
use adk_extension::{ExtensionConfig, serve_stdio};
use anyhow::Result;
use tracing::info;

/// Environment configuration with the command-line overrides applied.
pub fn resolve_config(base: ExtensionConfig, args: &ServeArgs) -> ExtensionConfig {
    let mut config = base;
    if let Some(path) = &args.registry {
        config = config.with_registry_path(path.clone());
    }
    if let Some(user_id) = &args.user_id {
        config = config.with_user_id(user_id.clone());
    }
    config
}

pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = resolve_config(ExtensionConfig::from_env()?, &args);
    info!(
        registry = %config.registry_path.display(),
        user_id = %config.user_id,
        "ADK agent extension listening on stdio"
    );
    serve_stdio(config, args.tools).await
}
