/// Outcome of a provider call that did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Session established; the identity feed now carries the user
    Complete,
    /// Email must be verified with the code that was sent
    NeedsVerification,
}
