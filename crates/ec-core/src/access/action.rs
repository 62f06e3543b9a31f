/// Side effects requested by a transition, executed by the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessAction {
    /// Issue a biometric challenge with the directory prompt.
    ChallengeBiometric,
    /// Present the passcode prompt.
    ShowPasscodePrompt,
    /// Write `contacts_unlocked = true` to the settings store.
    PersistUnlock,
    /// Write `contacts_unlocked = false` to the settings store.
    PersistLock,
    /// Surface the inline "incorrect passcode" error; retries stay open.
    SurfacePasscodeError,
}
