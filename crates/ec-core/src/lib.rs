//! # ec-core
//!
//! Core domain models and business logic for ExpatCare.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod access;
pub mod auth;
pub mod catalog;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use access::{AccessAction, AccessEvent, AccessState, FallbackReason};
pub use auth::{AuthState, PasscodeGate, PasscodeVerdict, SHARED_PASSCODE};
pub use catalog::{CommunityEvent, Contact, Faq, Pathway, ResourceKind, ResourceSet, Video};
pub use settings::model::Settings;
