pub mod error;
pub mod logger;
pub mod operations;

pub use error::{CliError, Result};
pub use operations::{SyncArgs, get_user, rename_user, run_sync, show_user};
