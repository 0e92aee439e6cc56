//! CLI argument definitions using clap
//!
//! The bare two-argument surface is the primary one:
//! - plexwatch <BASE_URL> <TOKEN>              # session report
//! - plexwatch libraries <BASE_URL> <TOKEN>    # library summary
//! - plexwatch server-info <BASE_URL> <TOKEN>  # server identity

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "plexwatch")]
#[command(about = "Report active Plex Media Server sessions as JSON")]
#[command(version)]
#[command(subcommand_negates_reqs = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Address of the Plex server, e.g. http://localhost:32400
    #[arg(required = true)]
    pub base_url: Option<String>,

    /// Access token authorizing API calls against the server
    #[arg(required = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report active playback sessions (the default command)
    Sessions {
        /// Address of the Plex server
        base_url: String,
        /// Access token authorizing API calls against the server
        token: String,
    },

    /// Summarize library sections with their item counts
    Libraries {
        /// Address of the Plex server
        base_url: String,
        /// Access token authorizing API calls against the server
        token: String,
    },

    /// Show the server's identity and version
    ServerInfo {
        /// Address of the Plex server
        base_url: String,
        /// Access token authorizing API calls against the server
        token: String,
    },
}

impl Cli {
    /// Resolve the bare two-argument form to the sessions command.
    pub fn into_command(self) -> Commands {
        match self.command {
            Some(command) => command,
            // clap guarantees both positionals when no subcommand is given.
            None => Commands::Sessions {
                base_url: self.base_url.unwrap_or_default(),
                token: self.token.unwrap_or_default(),
            },
        }
    }
}
