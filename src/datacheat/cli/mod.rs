//! Terminal client for the datacheat library.
//!
//! - `setup`: clap definitions and grouped help
//! - `commands`: dispatch from parsed arguments to the API
//! - `browse`: the interactive session over the shell
//! - `render`, `templates`, `styles`, `theme`: templated, themed output

mod browse;
mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;
mod theme;

pub use commands::run;
