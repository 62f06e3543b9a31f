use async_trait::async_trait;

/// Result of probing the platform sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiometricCapability {
    pub hardware_present: bool,
    pub enrolled: bool,
}

impl BiometricCapability {
    /// Hardware present AND at least one biometric enrolled.
    pub fn usable(&self) -> bool {
        self.hardware_present && self.enrolled
    }
}

/// Outcome of one biometric challenge. `Denied`, `Cancelled` and `Failed`
/// all route to the passcode fallback; callers distinguish them for logging
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiometricOutcome {
    Granted,
    Denied,
    Cancelled,
    Failed,
}

/// Bridge to the platform biometric sensor. The host shell supplies the real
/// implementation; probe and challenge errors are treated as "unsupported"
/// by callers, never as fatal.
#[async_trait]
pub trait BiometricPort: Send + Sync {
    async fn probe(&self) -> anyhow::Result<BiometricCapability>;
    async fn challenge(&self, prompt: &str) -> anyhow::Result<BiometricOutcome>;
}
