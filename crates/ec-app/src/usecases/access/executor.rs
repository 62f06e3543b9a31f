use ec_core::ports::{BiometricPort, SettingsPort};

/// Port bundle the orchestrator executes side effects against.
pub struct AccessExecutor<'a> {
    pub biometric: &'a dyn BiometricPort,
    pub settings: &'a dyn SettingsPort,
}
