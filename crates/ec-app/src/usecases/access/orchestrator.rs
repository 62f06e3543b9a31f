//! Contact-directory access orchestrator.
//!
//! Coordinates the access state machine and its side effects: the biometric
//! challenge, the passcode verdict, and the persisted unlock decision.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use ec_core::access::{AccessAction, AccessEvent, AccessState, AccessStateMachine, FallbackReason};
use ec_core::auth::{PasscodeGate, PasscodeVerdict};
use ec_core::ports::BiometricOutcome;
use ec_core::settings::model::Settings;

use super::executor::AccessExecutor;

/// Prompt shown by the platform biometric dialog.
const CHALLENGE_PROMPT: &str = "Access secure contact directory";

/// Result of one passcode submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockAttempt {
    pub state: AccessState,
    /// The candidate did not match; the prompt stays open for a retry.
    pub passcode_rejected: bool,
}

/// Orchestrator that drives the directory gate.
///
/// The biometric step is attempted-or-skipped strictly before the passcode
/// prompt is shown; the two are never presented concurrently. The persisted
/// `contacts_unlocked` flag is the durable source of truth read at startup;
/// the in-memory transition and the settings write are not transactional.
pub struct AccessOrchestrator {
    state: Arc<Mutex<AccessState>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl Default for AccessOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessOrchestrator {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AccessState::Locked)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Seed the gate from the persisted settings at startup.
    pub async fn bootstrap(&self, executor: &AccessExecutor<'_>) -> AccessState {
        let settings = load_or_default(executor).await;
        let next = if settings.contacts_unlocked {
            AccessState::Unlocked
        } else {
            AccessState::Locked
        };

        let mut guard = self.state.lock().await;
        *guard = next.clone();
        next
    }

    pub async fn access_state(&self) -> AccessState {
        self.state.lock().await.clone()
    }

    /// Run the unlock sequence: biometric first when supported and enabled,
    /// passcode prompt otherwise or on any biometric fallback. Returns the
    /// state the flow settled in; `AwaitingPasscode` means the prompt is now
    /// showing and the caller feeds input through [`Self::submit_passcode`].
    pub async fn attempt_unlock(&self, executor: &AccessExecutor<'_>) -> AccessState {
        let span = info_span!("usecase.attempt_unlock");

        async {
            let settings = load_or_default(executor).await;
            let supported = match executor.biometric.probe().await {
                Ok(capability) => capability.usable(),
                Err(err) => {
                    // Probe errors are "unsupported", never fatal.
                    warn!(error = %err, "biometric probe failed, treating as unsupported");
                    false
                }
            };

            let (mut state, mut actions) = self
                .dispatch(AccessEvent::UnlockRequested {
                    biometric_supported: supported,
                    biometric_enabled: settings.biometric_enabled,
                })
                .await;

            while let Some(follow_up) = self.execute(executor, &actions).await {
                (state, actions) = self.dispatch(follow_up).await;
            }

            state
        }
        .instrument(span)
        .await
    }

    /// Feed one passcode candidate through the gate. Unlimited retries; a
    /// mismatch keeps the prompt open with an inline error.
    pub async fn submit_passcode(
        &self,
        executor: &AccessExecutor<'_>,
        candidate: &str,
    ) -> UnlockAttempt {
        let span = info_span!("usecase.submit_passcode");

        async {
            let event = match PasscodeGate::submit(candidate) {
                PasscodeVerdict::Match => AccessEvent::PasscodeMatched,
                PasscodeVerdict::NoMatch => AccessEvent::PasscodeRejected,
            };

            let (state, actions) = self.dispatch(event).await;
            let passcode_rejected = actions.contains(&AccessAction::SurfacePasscodeError);
            self.execute(executor, &actions).await;

            UnlockAttempt {
                state,
                passcode_rejected,
            }
        }
        .instrument(span)
        .await
    }

    /// Dismissing the prompt aborts the attempt and leaves the gate locked.
    pub async fn dismiss_prompt(&self) -> AccessState {
        self.dispatch(AccessEvent::PromptDismissed).await.0
    }

    /// Explicit user reset: relock the directory and persist the decision.
    /// The full gate sequence runs again before contacts render.
    pub async fn relock(&self, executor: &AccessExecutor<'_>) -> AccessState {
        let (state, actions) = self.dispatch(AccessEvent::RelockRequested).await;
        self.execute(executor, &actions).await;
        state
    }

    async fn dispatch(&self, event: AccessEvent) -> (AccessState, Vec<AccessAction>) {
        let _dispatch_guard = self.dispatch_lock.lock().await;

        let current = self.state.lock().await.clone();
        let (next, actions) = AccessStateMachine::transition(current, event);
        let mut guard = self.state.lock().await;
        *guard = next.clone();
        (next, actions)
    }

    /// Execute the requested side effects. A biometric challenge produces a
    /// follow-up event for the caller to dispatch; every other action
    /// completes in place.
    async fn execute(
        &self,
        executor: &AccessExecutor<'_>,
        actions: &[AccessAction],
    ) -> Option<AccessEvent> {
        let mut follow_up = None;

        for action in actions {
            match action {
                AccessAction::ChallengeBiometric => {
                    follow_up = Some(self.run_challenge(executor).await);
                }
                AccessAction::ShowPasscodePrompt => {
                    debug!("passcode prompt requested");
                }
                AccessAction::PersistUnlock => {
                    persist_contacts_unlocked(executor, true).await;
                }
                AccessAction::PersistLock => {
                    persist_contacts_unlocked(executor, false).await;
                }
                AccessAction::SurfacePasscodeError => {
                    info!("passcode rejected, retry remains open");
                }
            }
        }

        follow_up
    }

    async fn run_challenge(&self, executor: &AccessExecutor<'_>) -> AccessEvent {
        match executor.biometric.challenge(CHALLENGE_PROMPT).await {
            Ok(BiometricOutcome::Granted) => AccessEvent::BiometricPassed,
            Ok(BiometricOutcome::Denied) => AccessEvent::BiometricFellBack {
                reason: FallbackReason::Denied,
            },
            Ok(BiometricOutcome::Cancelled) => AccessEvent::BiometricFellBack {
                reason: FallbackReason::Cancelled,
            },
            Ok(BiometricOutcome::Failed) => AccessEvent::BiometricFellBack {
                reason: FallbackReason::Failed,
            },
            Err(err) => {
                warn!(error = %err, "biometric challenge errored, falling back to passcode");
                AccessEvent::BiometricFellBack {
                    reason: FallbackReason::Failed,
                }
            }
        }
    }
}

async fn load_or_default(executor: &AccessExecutor<'_>) -> Settings {
    match executor.settings.load().await {
        Ok(settings) => settings,
        Err(err) => {
            warn!(error = %err, "settings load failed, proceeding with defaults");
            Settings::default()
        }
    }
}

/// Settings write failures are logged and the in-memory unlock proceeds; the
/// persisted record is reconciled on the next successful save.
async fn persist_contacts_unlocked(executor: &AccessExecutor<'_>, unlocked: bool) {
    let mut settings = load_or_default(executor).await;
    settings.contacts_unlocked = unlocked;
    if let Err(err) = executor.settings.save(&settings).await {
        warn!(error = %err, unlocked, "failed to persist unlock decision");
    }
}
