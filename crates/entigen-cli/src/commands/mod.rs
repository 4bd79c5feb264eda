//! Command handlers.  Each submodule owns one subcommand end-to-end:
//! argument translation, engine wiring, and result display.

pub mod completions;
pub mod generate;
pub mod init;
pub mod list;
