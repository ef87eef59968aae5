// Git integration for Git Console
// This crate builds git argument vectors and runs them through the git binary

mod command;
mod runner;

pub use command::{GitCommand, GIT_PROGRAM};
pub use runner::{CommandOutput, CommandRunner, GitCli, LaunchError};
