use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkhours
/// CLI application annotating an attendance table with daily working hours
#[derive(Parser)]
#[command(
    name = "rworkhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Annotate an attendance table snapshot with working hours, a grade and the average",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.rworkhours/rworkhours.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Print diagnostic logs on stderr
    #[arg(global = true, long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one annotation pass over a page snapshot
    Annotate {
        /// Page snapshot (JSON)
        page: String,

        #[arg(
            long = "out",
            value_name = "FILE",
            help = "Write the annotated snapshot here instead of in place"
        )]
        out: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the --out file if it exists")]
        force: bool,
    },

    /// Print the attendance tables of a page snapshot
    Show {
        /// Page snapshot (JSON)
        page: String,
    },

    /// Watch a page snapshot and annotate it after every fresh render
    Watch {
        /// Page snapshot (JSON) rewritten by the host page
        page: String,

        #[arg(
            long = "poll-ms",
            value_name = "MS",
            help = "Polling interval in milliseconds (overrides poll_interval_ms)"
        )]
        poll_ms: Option<u64>,
    },

    /// Working time and grade for one check-in/check-out pair
    Calc {
        /// Check-in time (HH:MM)
        check_in: String,

        /// Check-out time (HH:MM)
        check_out: String,
    },

    /// Inspect the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for inconsistent values")]
        check: bool,
    },
}
