//! ExpatCare Application Orchestration Layer
//!
//! This crate contains business logic use cases and runtime orchestration.

pub mod app_paths;
pub mod cache;
pub mod deps;
pub mod usecases;

pub use app_paths::AppPaths;
pub use cache::RemoteDataCache;
pub use deps::AppDeps;
