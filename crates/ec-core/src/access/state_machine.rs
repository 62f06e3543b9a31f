use tracing::warn;

use crate::access::action::AccessAction;
use crate::access::event::AccessEvent;
use crate::access::state::AccessState;

/// Pure transition table for the contact-directory gate.
///
/// Within one unlock attempt the biometric step is attempted-or-skipped
/// strictly before the passcode prompt; the two are never live at once.
pub struct AccessStateMachine;

impl AccessStateMachine {
    pub fn transition(
        state: AccessState,
        event: AccessEvent,
    ) -> (AccessState, Vec<AccessAction>) {
        match (state, event) {
            // ===== Start =====
            (
                AccessState::Locked,
                AccessEvent::UnlockRequested {
                    biometric_supported: true,
                    biometric_enabled: true,
                },
            ) => (
                AccessState::AwaitingBiometric,
                vec![AccessAction::ChallengeBiometric],
            ),
            (AccessState::Locked, AccessEvent::UnlockRequested { .. }) => (
                AccessState::AwaitingPasscode,
                vec![AccessAction::ShowPasscodePrompt],
            ),

            // ===== Biometric =====
            (AccessState::AwaitingBiometric, AccessEvent::BiometricPassed) => {
                (AccessState::Unlocked, vec![AccessAction::PersistUnlock])
            }
            (AccessState::AwaitingBiometric, AccessEvent::BiometricFellBack { .. }) => (
                AccessState::AwaitingPasscode,
                vec![AccessAction::ShowPasscodePrompt],
            ),

            // ===== Passcode =====
            (AccessState::AwaitingPasscode, AccessEvent::PasscodeMatched) => {
                (AccessState::Unlocked, vec![AccessAction::PersistUnlock])
            }
            (AccessState::AwaitingPasscode, AccessEvent::PasscodeRejected) => (
                AccessState::AwaitingPasscode,
                vec![AccessAction::SurfacePasscodeError],
            ),
            (AccessState::AwaitingPasscode, AccessEvent::PromptDismissed) => {
                (AccessState::Locked, vec![])
            }

            // ===== Relock =====
            (AccessState::Unlocked, AccessEvent::RelockRequested) => {
                (AccessState::Locked, vec![AccessAction::PersistLock])
            }

            // ===== Terminal =====
            (state @ AccessState::Unlocked, _) => (state, vec![]),

            // ===== Invalid =====
            (state, event) => {
                warn!(?state, ?event, "invalid access transition");
                (state, vec![])
            }
        }
    }
}
