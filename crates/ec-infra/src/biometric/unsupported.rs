use anyhow::Result;
use async_trait::async_trait;

use ec_core::ports::{BiometricCapability, BiometricOutcome, BiometricPort};

/// Adapter for hosts with no sensor bridge. Probes as unavailable, so the
/// access flow routes straight to the passcode prompt; the real platform
/// adapter is injected by the shell where one exists.
pub struct UnsupportedBiometric;

#[async_trait]
impl BiometricPort for UnsupportedBiometric {
    async fn probe(&self) -> Result<BiometricCapability> {
        Ok(BiometricCapability {
            hardware_present: false,
            enrolled: false,
        })
    }

    async fn challenge(&self, _prompt: &str) -> Result<BiometricOutcome> {
        anyhow::bail!("biometric sensor unavailable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn probes_as_unusable() {
        let capability = UnsupportedBiometric.probe().await.unwrap();
        assert!(!capability.usable());
    }

    #[tokio::test]
    async fn challenge_is_an_error() {
        assert!(UnsupportedBiometric.challenge("prompt").await.is_err());
    }
}
