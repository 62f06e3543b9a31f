use crate::access::state::FallbackReason;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessEvent {
    /// The locked directory was opened and an unlock was requested.
    UnlockRequested {
        biometric_supported: bool,
        biometric_enabled: bool,
    },
    BiometricPassed,
    /// Biometric denied, cancelled, errored, or unavailable. Not a hard
    /// failure of the flow; the passcode prompt is the designed fallback.
    BiometricFellBack { reason: FallbackReason },
    PasscodeMatched,
    PasscodeRejected,
    /// The passcode prompt was dismissed without a match.
    PromptDismissed,
    /// Explicit user reset; the gate must run again before contacts render.
    RelockRequested,
}
