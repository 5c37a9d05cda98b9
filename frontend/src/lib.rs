pub mod app;
pub mod components;
pub mod hooks;
pub mod sound;
pub mod storage;
pub mod styles;

pub use app::App;
