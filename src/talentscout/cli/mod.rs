mod commands;
mod render;
pub mod setup;
mod shell;
mod styles;

pub use commands::run;
