//! Transient per-session authentication state.
//!
//! Recomputed on every app session from a hardware probe plus the persisted
//! settings; owned by the session and discarded on process exit. Never
//! written to disk.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthState {
    pub is_authenticated: bool,
    /// Hardware present and at least one biometric enrolled.
    pub biometric_supported: bool,
    /// User preference, mirrored from settings at probe time.
    pub biometric_enabled: bool,
}

impl AuthState {
    pub fn new(biometric_supported: bool, biometric_enabled: bool) -> Self {
        Self {
            is_authenticated: false,
            biometric_supported,
            biometric_enabled,
        }
    }

    pub fn login(&mut self) {
        self.is_authenticated = true;
    }

    pub fn logout(&mut self) {
        self.is_authenticated = false;
    }
}
