//! Command implementations for the western CLI

pub mod info;
pub mod run;

pub use info::info_command;
pub use run::run_command;
