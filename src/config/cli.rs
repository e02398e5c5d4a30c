use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "magnet-trackers")]
#[command(about = "Keeps tracker lists fresh and adds them to magnet links and stream sources")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch the best trackers once and print the list sizes
    Refresh,

    /// Print the magnet link for an info hash
    Magnet {
        info_hash: String,

        /// JSON array of torrent records to resolve metadata from
        #[arg(long)]
        torrents: Option<PathBuf>,
    },

    /// Print a stream descriptor with its sources enriched
    Enrich {
        /// JSON file holding one stream descriptor
        stream: PathBuf,
    },

    /// Refresh periodically until interrupted
    Watch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_magnet_command() {
        let cli = CliConfig::parse_from([
            "magnet-trackers",
            "--config",
            "trackers.toml",
            "magnet",
            "ABC",
            "--torrents",
            "torrents.json",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("trackers.toml")));
        assert!(!cli.verbose);
        match cli.command {
            Command::Magnet { info_hash, torrents } => {
                assert_eq!(info_hash, "ABC");
                assert_eq!(torrents, Some(PathBuf::from("torrents.json")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_watch_command() {
        let cli = CliConfig::parse_from(["magnet-trackers", "-v", "watch"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Watch));
    }
}
