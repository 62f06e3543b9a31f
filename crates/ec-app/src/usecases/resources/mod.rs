pub mod load_resources;

pub use load_resources::LoadResources;
