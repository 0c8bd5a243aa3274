use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "adk-agent-extension")]
#[command(about = "MCP server for managing Google ADK agents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Serve the extension tools over stdio (default if no command specified)
    Serve(ServeArgs),

    /// Build a release archive of the extension
    Package {
        /// Target platform, e.g. linux or darwin
        #[arg(long)]
        platform: String,

        /// Target architecture, e.g. x64 or arm64
        #[arg(long)]
        arch: String,

        /// Extension binary to include; defaults to the running executable
        #[arg(long)]
        binary: Option<PathBuf>,

        /// Directory the archive is written to
        #[arg(long, default_value = "release")]
        out_dir: PathBuf,
    },
}

#[derive(clap::Args, Debug, Default, PartialEq, Eq)]
pub struct ServeArgs {
    /// Path of the ADK server registry (overrides ADK_AGENT_LIST)
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// User id for sessions on ADK servers (overrides ADK_USER_ID)
    #[arg(long)]
    pub user_id: Option<String>,

    /// Comma-separated subset of tools to expose
    #[arg(long, value_delimiter = ',')]
    pub tools: Option<Vec<String>>,
}

impl Cli {
    /// The command to run; `serve` with defaults when none was given.
    pub fn command(self) -> Commands {
        self.command.unwrap_or_else(|| Commands::Serve(ServeArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_is_default() {
        let cli = Cli::try_parse_from(["adk-agent-extension"]).unwrap();
        assert_eq!(cli.command(), Commands::Serve(ServeArgs::default()));
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "adk-agent-extension",
            "serve",
            "--registry",
            "/tmp/servers.json",
            "--user-id",
            "alice",
            "--tools",
            "list_adks,create_agent",
        ])
        .unwrap();
        assert_eq!(
            cli.command(),
            Commands::Serve(ServeArgs {
                registry: Some(PathBuf::from("/tmp/servers.json")),
                user_id: Some("alice".to_string()),
                tools: Some(vec!["list_adks".to_string(), "create_agent".to_string()]),
            })
        );
    }

    #[test]
    fn test_package_defaults() {
        let cli = Cli::try_parse_from([
            "adk-agent-extension",
            "package",
            "--platform",
            "linux",
            "--arch",
            "x64",
        ])
        .unwrap();
        assert_eq!(
            cli.command(),
            Commands::Package {
                platform: "linux".to_string(),
                arch: "x64".to_string(),
                binary: None,
                out_dir: PathBuf::from("release"),
            }
        );
    }

    #[test]
    fn test_package_requires_platform() {
        assert!(Cli::try_parse_from(["adk-agent-extension", "package", "--arch", "x64"]).is_err());
    }
}
