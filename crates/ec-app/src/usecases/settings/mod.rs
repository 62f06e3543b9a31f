pub mod get_settings;
pub mod reset_settings;
pub mod update_settings;

pub use get_settings::GetSettings;
pub use reset_settings::ResetSettings;
pub use update_settings::UpdateSettings;
