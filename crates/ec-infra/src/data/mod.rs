pub mod bundled;

pub use bundled::BundledCatalog;
