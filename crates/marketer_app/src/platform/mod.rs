mod app;
mod args;
mod clipboard;
mod effects;
pub mod logging;
mod ui;

pub use app::run_app;
pub use args::CliArgs;
