//! Identity provider seam.
//!
//! The reconciliation controller only consumes the identity feed; the
//! sign-up, verification, sign-in and sign-out calls are opaque
//! request/response operations. `MemoryIdentityProvider` is a local,
//! non-persistent implementation used by tests and tooling.

pub mod auth_status;
pub mod credentials;
pub mod error;
pub mod hash;
pub mod identity_provider;
pub mod memory_provider;

pub use auth_status::AuthStatus;
pub use credentials::{Credentials, Registration};
pub use error::{AuthError, Result};
pub use hash::{hash_password, verify_password};
pub use identity_provider::IdentityProvider;
pub use memory_provider::MemoryIdentityProvider;
