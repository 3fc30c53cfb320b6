use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create or update the record for an identity and wait for the result
    Sync {
        /// Identity provider user ID
        #[arg(long)]
        identity_id: String,
        /// Email address; repeat for several
        #[arg(long = "email")]
        emails: Vec<String>,
        /// Address flagged primary
        #[arg(long)]
        primary_email: Option<String>,
        /// Display name
        #[arg(long)]
        name: Option<String>,
    },

    /// User record operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}

#[derive(Subcommand)]
pub(crate) enum UserCommands {
    /// Show the record for an identity
    Show {
        #[arg(long)]
        identity_id: String,
    },
    /// Get a record by its ID
    Get {
        /// Record ID (UUID)
        #[arg(long)]
        id: Uuid,
    },
    /// Change the display name on an identity's record
    Rename {
        #[arg(long)]
        identity_id: String,
        /// New name; omit to clear it
        #[arg(long)]
        name: Option<String>,
    },
}
