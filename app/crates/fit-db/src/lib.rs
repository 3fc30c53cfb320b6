pub mod connection;
pub mod error;
pub mod repositories;
pub mod user_store;

pub use connection::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;
pub use repositories::workout_repository::WorkoutRepository;
pub use user_store::UserStore;
