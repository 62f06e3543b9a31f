pub mod passcode;
pub mod session;

pub use passcode::{PasscodeGate, PasscodeVerdict, SHARED_PASSCODE};
pub use session::AuthState;
