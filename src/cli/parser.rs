use clap::{Parser, Subcommand};

/// Command-line interface definition for qrgate
/// Kiosk core to validate QR scans and record event entries with SQLite
#[derive(Parser)]
#[command(
    name = "qrgate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Event check-in kiosk core: validate QR scans, record entries, export attendance history",
    long_about = None
)]
pub struct Cli {
    /// Override main database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print the machine-readable JSON response instead of status lines
    #[arg(global = true, long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the main store
    Init,

    /// Show the active configuration
    Config {
        #[arg(long = "print", help = "Print the active configuration as YAML")]
        print_config: bool,
    },

    /// Check a participant in by scanned QR id
    Scan {
        /// Participant id read from the QR code
        id: String,
    },

    /// Run the external validation script against a QR payload
    Validate {
        /// Raw QR content ("event,sequence")
        qr_data: String,

        #[arg(long = "event", help = "Expected event name (default from config)")]
        event: Option<String>,

        #[arg(long = "min-seq", help = "Lowest acceptable sequence number")]
        min_seq: Option<i64>,

        #[arg(long = "check-event", help = "Enable the event name check")]
        check_event: bool,

        #[arg(long = "check-seq", help = "Enable the sequence number check")]
        check_seq: bool,

        #[arg(long = "script", help = "Override the validation script path")]
        script: Option<String>,

        #[arg(long = "interpreter", help = "Override the script interpreter")]
        interpreter: Option<String>,
    },

    /// Export the history store as CSV
    Export {
        #[arg(long = "file", help = "Destination CSV path (omit to cancel)")]
        file: Option<String>,

        #[arg(long = "history-db", help = "Override the history store path")]
        history_db: Option<String>,
    },

    /// Delete every record in the history store
    Clear {
        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,

        #[arg(long = "history-db", help = "Override the history store path")]
        history_db: Option<String>,
    },

    /// List recorded entries with participant status
    List,

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
