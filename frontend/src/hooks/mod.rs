pub mod use_settings;
pub mod use_wheel;

pub use use_settings::*;
pub use use_wheel::*;
