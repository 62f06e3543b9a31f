pub mod unsupported;

pub use unsupported::UnsupportedBiometric;
