use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Verify the organization URL, project and access token
    TestConnection,

    /// Validate a backlog file and report dependency warnings without exporting
    Check {
        /// Backlog JSON file (array of epics), or "-" for stdin
        #[arg(long)]
        backlog: PathBuf,
    },

    /// Create every work item in a backlog file, then link dependencies
    Export {
        /// Backlog JSON file (array of epics), or "-" for stdin
        #[arg(long)]
        backlog: PathBuf,
    },
}
