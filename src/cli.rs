//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Search tracker - mobile-number search tracking and test-result lookup service
#[derive(Parser, Debug)]
#[command(name = "search-tracker")]
#[command(version)]
#[command(about = "Mobile-number search tracking and test-result lookup service", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, short = 'c', global = true, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Create tables and indexes, then exit
    InitSchema,

    /// Generate example configuration file
    ConfigGen {
        /// Output path (default: stdout)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::parse_from(["search-tracker"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, "config.toml");
    }

    #[test]
    fn test_config_gen_args() {
        let cli = Cli::parse_from(["search-tracker", "config-gen", "out.toml", "--force"]);
        assert_eq!(
            cli.command,
            Some(Commands::ConfigGen {
                output_path: Some("out.toml".to_string()),
                force: true,
            })
        );
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["search-tracker", "init-schema", "-c", "/etc/tracker.toml"]);
        assert_eq!(cli.command, Some(Commands::InitSchema));
        assert_eq!(cli.config, "/etc/tracker.toml");
    }
}
