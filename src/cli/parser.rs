use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rattendance
/// Terminal attendance register for a single class session
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal attendance register: record check-ins, count absentees and export reports",
    long_about = None
)]
pub struct Cli {
    /// Override the attendance file path (useful for tests or another class)
    #[arg(global = true, long = "file", value_name = "CSV")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a subcommand the interactive menu is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty attendance file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start the interactive numbered menu
    Menu,

    /// Record a student's check-in
    Add {
        /// Student name (quote names with spaces)
        name: String,

        /// (Positional) Check-in time, e.g. "09:15 AM", "9:15", "0915"; default: now
        time_pos: Option<String>,

        /// (Option) Check-in time
        #[arg(long = "time", conflicts_with = "time_pos")]
        time: Option<String>,
    },

    /// Add many students at once: one `name[,time]` per line ('#' starts a comment)
    Bulk {
        /// Read entries from FILE instead of standard input
        #[arg(long = "from", value_name = "FILE")]
        from: Option<String>,
    },

    /// Change the check-in time and/or the name of a record
    Edit {
        /// Student name
        #[arg(required_unless_present = "no")]
        name: Option<String>,

        /// Select the record by its number in `list` instead of by name
        #[arg(long = "no", conflicts_with = "name")]
        no: Option<usize>,

        /// New check-in time
        #[arg(long = "time")]
        time: Option<String>,

        /// New name
        #[arg(long = "rename", value_name = "NEW_NAME")]
        rename: Option<String>,
    },

    /// Delete a record
    Del {
        /// Student name
        #[arg(required_unless_present = "no")]
        name: Option<String>,

        /// Select the record by its number in `list` instead of by name
        #[arg(long = "no", conflicts_with = "name")]
        no: Option<usize>,

        /// Do not ask for confirmation
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Search records by name (case-insensitive, partial match)
    Search {
        query: String,
    },

    /// Show all records
    List,

    /// Attendance summary; with a class strength also the absentees
    Summary {
        /// Total number of students enrolled (overrides `class_strength` in config)
        #[arg(long = "strength", short = 's', allow_negative_numbers = true)]
        strength: Option<i64>,
    },

    /// Export the register as a text report, CSV or JSON
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Txt)]
        format: ExportFormat,

        /// Output file (default: `report_file` from config, attendance_report.txt)
        #[arg(long = "out", value_name = "FILE")]
        out: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the attendance file
    Backup {
        /// Destination file (default: <name>_backup_<timestamp>.csv next to the register)
        #[arg(long = "out", value_name = "FILE")]
        out: Option<String>,

        /// Compress the backup (zip on Windows, tar.gz elsewhere)
        #[arg(long)]
        compress: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print the internal operation log")]
        print: bool,
    },
}
