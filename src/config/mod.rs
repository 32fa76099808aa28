mod app;
mod format;
mod overlay;
mod parse;

pub use app::AppConfig;
