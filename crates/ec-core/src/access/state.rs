/// Gate state for the locked contact directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessState {
    /// Directory renders locked content; no unlock attempt in flight.
    Locked,
    /// A biometric challenge has been issued and not yet answered.
    AwaitingBiometric,
    /// The passcode prompt is showing.
    AwaitingPasscode,
    /// Directory renders unlocked content until explicitly relocked.
    Unlocked,
}

impl AccessState {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, AccessState::Unlocked)
    }
}

/// Why the biometric step handed over to the passcode prompt.
///
/// All reasons route identically; the distinction exists for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No usable hardware, nothing enrolled, the user has not opted in,
    /// or the capability probe itself failed.
    Unsupported,
    Denied,
    Cancelled,
    Failed,
}
