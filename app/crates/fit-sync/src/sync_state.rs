/// Bookkeeping for the identity currently being reconciled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncState {
    /// User-facing message of the most recent failure
    pub last_error: Option<String>,
    /// Retries consumed by the current identity
    pub retry_count: u32,
    /// Identity id of the last successful reconciliation
    pub last_synced_identity: Option<String>,
    /// Bumped on every reset; timers and attempts carry the value they started with
    pub generation: u64,
    pub in_flight: bool,
    pub retry_pending: bool,
    /// The identity had no usable email at the last evaluation
    pub missing_email: bool,
}

impl SyncState {
    /// Forget everything about the previous identity and start a new generation.
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation.wrapping_add(1),
            ..Self::default()
        };
    }
}
