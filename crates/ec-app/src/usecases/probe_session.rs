//! Session bootstrap: recompute the transient auth state.

use std::sync::Arc;

use tracing::{info_span, warn, Instrument};

use ec_core::auth::AuthState;
use ec_core::ports::{BiometricPort, SettingsPort};
use ec_core::settings::model::Settings;

/// Builds the per-session [`AuthState`] from a hardware probe plus the
/// persisted preferences. Runs once per app session; the result is owned by
/// the session and never persisted.
pub struct ProbeSession {
    settings: Arc<dyn SettingsPort>,
    biometric: Arc<dyn BiometricPort>,
}

impl ProbeSession {
    pub fn new(settings: Arc<dyn SettingsPort>, biometric: Arc<dyn BiometricPort>) -> Self {
        Self {
            settings,
            biometric,
        }
    }

    pub async fn execute(&self) -> AuthState {
        let span = info_span!("usecase.probe_session.execute");

        async {
            let settings = match self.settings.load().await {
                Ok(settings) => settings,
                Err(err) => {
                    warn!(error = %err, "settings load failed, proceeding with defaults");
                    Settings::default()
                }
            };

            let supported = match self.biometric.probe().await {
                Ok(capability) => capability.usable(),
                Err(err) => {
                    warn!(error = %err, "biometric probe failed, treating as unsupported");
                    false
                }
            };

            AuthState::new(supported, settings.biometric_enabled)
        }
        .instrument(span)
        .await
    }
}
