pub mod executor;
pub mod orchestrator;

pub use executor::AccessExecutor;
pub use orchestrator::{AccessOrchestrator, UnlockAttempt};
