//! Process helpers shared by the external tool wrappers.

pub mod command;

pub use command::{describe_command, run_command};
