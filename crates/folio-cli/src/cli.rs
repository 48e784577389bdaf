//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use folio_core::Theme;

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "folio", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging for Folio crates.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List all articles, newest first.
    List,

    /// Render one article as a standalone HTML page.
    Show {
        /// Article id.
        id: String,

        /// Highlight palette: light or dark.
        #[arg(short, long)]
        theme: Option<Theme>,

        /// Print the Markdown body instead of HTML.
        #[arg(long)]
        raw: bool,
    },

    /// Search articles by id or text.
    Search {
        /// Search term.
        query: String,

        /// Maximum number of results.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the effective configuration as TOML.
    Config,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_list() {
        let args = CliArgs::parse_from(["folio", "list"]);
        assert!(!args.verbose);
        assert_eq!(args.command, Command::List);
    }

    #[test]
    fn test_cli_args_show_with_theme() {
        let args = CliArgs::parse_from(["folio", "-v", "show", "2", "--theme", "dark"]);
        assert!(args.verbose);
        assert_eq!(
            args.command,
            Command::Show {
                id: "2".to_string(),
                theme: Some(Theme::Dark),
                raw: false,
            }
        );
    }

    #[test]
    fn test_cli_args_show_rejects_unknown_theme() {
        let result = CliArgs::try_parse_from(["folio", "show", "1", "--theme", "sepia"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_args_search_with_limit() {
        let args = CliArgs::parse_from(["folio", "search", "rust async", "--limit", "3"]);
        assert_eq!(
            args.command,
            Command::Search {
                query: "rust async".to_string(),
                limit: Some(3),
            }
        );
    }

    #[test]
    fn test_cli_args_config_path() {
        let args = CliArgs::parse_from(["folio", "--config", "/tmp/folio.toml", "config"]);
        assert_eq!(args.config.as_deref(), Some("/tmp/folio.toml"));
        assert_eq!(args.command, Command::Config);
    }

    #[test]
    fn test_cli_args_requires_command() {
        assert!(CliArgs::try_parse_from(["folio"]).is_err());
    }
}
