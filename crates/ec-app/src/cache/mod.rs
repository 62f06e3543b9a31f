pub mod remote_data_cache;

pub use remote_data_cache::RemoteDataCache;
