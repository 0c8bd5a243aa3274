use adk_cli::{Cli, Commands, package, serve};
use anyhow::{Context, Result};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = adk_telemetry::init_telemetry("adk-agent-extension") {
        eprintln!("Failed to initialize telemetry: {}", e);
    }

    match cli.command() {
        Commands::Serve(args) => serve::run_serve(args).await,
        Commands::Package { platform, arch, binary, out_dir } => {
            let binary = match binary {
                Some(path) => path,
                None => std::env::current_exe().context("Failed to locate extension binary")?,
            };
            let root = std::env::current_dir()?;
            let archive = package::package(&root, &binary, &platform, &arch, &out_dir)?;
            let size = std::fs::metadata(&archive)?.len();
            println!("Created {} ({} bytes)", archive.display(), size);
            Ok(())
        }
    }
}
