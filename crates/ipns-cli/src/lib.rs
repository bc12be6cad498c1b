//! # ipns-verify
//!
//! Command-line boundary around `ipns-record`: argument parsing, reading the
//! record from a file or stdin, and rendering the verified fields. All
//! verification happens in the library.

pub mod cli;
pub mod config;
pub mod output;

pub use cli::{read_record, Args};
pub use config::load_config;
pub use output::{render, render_error, OutputFormat};
